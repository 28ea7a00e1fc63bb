use types::session::Theme;

/// Reflect `theme` in the `data-theme` attribute of `<body>`, which the
/// stylesheet keys its colour variables on.
pub fn apply(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        tracing::warn!("no document body to theme");
        return;
    };

    if let Err(err) = body.set_attribute("data-theme", theme.as_str()) {
        tracing::warn!(?err, "failed to set theme attribute");
    }
}
