use api::AdminClient;
use dioxus::prelude::*;
use types::{
    ApiError, Config,
    session::{Session, Theme},
};

mod storage;
mod theme;
mod views;

use storage::LocalStorage;
use views::{Complaints, Dashboard, Login, Payments, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:error")]
    Login { error: Option<String> },
    #[layout(AuthenticatedLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/users")]
        Users {},
        #[route("/payments")]
        Payments {},
        #[route("/complaints")]
        Complaints {},
}

impl Route {
    pub fn login() -> Self {
        Route::Login { error: None }
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("failed to initialize logging: {err}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(Config::from_env);

    rsx! {
        document::Title { "Matchbook Admin" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }
        document::Script { src: "https://cdn.jsdelivr.net/npm/chart.js@4" }
        document::Script { src: asset!("/assets/charts.js") }

        {match config {
            Ok(config) => rsx! { Shell { config } },
            Err(err) => {
                tracing::error!(%err, "invalid build configuration");
                rsx! {
                    div { class: "error-banner",
                        span { class: "error-banner-message", "Dashboard is misconfigured: {err}" }
                    }
                }
            }
        }}
    }
}

/// Provides the shared session, API client, config and theme to every route.
#[component]
fn Shell(config: Config) -> Element {
    let session = use_hook(|| match LocalStorage::open() {
        Some(storage) => Session::new(storage),
        None => {
            tracing::warn!("local storage unavailable, sign-in will not survive a reload");
            Session::in_memory()
        }
    });
    use_context_provider(|| AdminClient::new(&config, session.clone()));
    use_context_provider(|| config.clone());
    use_context_provider(|| session.clone());
    let theme_state = use_context_provider(|| ThemeState(Signal::new(session.theme())));

    use_effect(move || theme::apply(theme_state.get()));

    rsx! { Router::<Route> {} }
}

/// Current colour scheme. Charts re-render when it changes.
#[derive(Clone, Copy)]
pub struct ThemeState(Signal<Theme>);

impl ThemeState {
    pub fn get(&self) -> Theme {
        (self.0)()
    }

    pub fn set(&mut self, session: &Session, theme: Theme) {
        tracing::info!(theme = theme.as_str(), "switching theme");
        session.set_theme(theme);
        self.0.set(theme);
    }
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

/// Structured error information for display
#[derive(Clone, Debug, Default)]
pub struct ErrorInfo {
    pub message: String,
    pub chain: Vec<String>,
}

impl ErrorInfo {
    pub fn from_api_error(context: &str, err: &ApiError) -> Self {
        Self {
            message: context.to_string(),
            chain: vec![context.to_string(), err.to_string()],
        }
    }
}

/// Global error state - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<ErrorInfo>>);

impl ErrorState {
    /// Report a failed request. An expired or rejected session goes back to
    /// the login view instead of raising a banner.
    pub fn set_api_error(&mut self, context: &str, err: &ApiError) {
        if err.is_unauthorized() {
            navigator().push(Route::Login {
                error: Some("Your session has expired. Please sign in again.".to_string()),
            });
            return;
        }
        self.0.set(Some(ErrorInfo::from_api_error(context, err)));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the global error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_context::<ErrorState>();
    let error = error_state.0.read();

    if let Some(err) = error.as_ref() {
        let has_chain = err.chain.len() > 1;

        rsx! {
            div { class: "error-banner",
                div { class: "error-banner-content",
                    div { class: "error-banner-header",
                        span { class: "error-banner-message", "{err.message}" }
                        div { class: "error-banner-actions",
                            button {
                                class: "error-banner-close",
                                onclick: move |_| error_state.clear(),
                                "×"
                            }
                        }
                    }
                    if has_chain {
                        div { class: "error-details",
                            ol { class: "error-chain-list",
                                for (i, msg) in err.chain.iter().enumerate() {
                                    li {
                                        key: "{i}",
                                        class: "error-chain-item",
                                        "{msg}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}

#[component]
fn AuthenticatedLayout() -> Element {
    let session = use_context::<Session>();
    let mut theme = use_theme();
    use_context_provider(|| ErrorState(Signal::new(None)));

    if !session.is_authenticated() {
        navigator().push(Route::login());
        return rsx! {
            div { class: "loading", "Redirecting to login..." }
        };
    }

    let is_dark = theme.get().is_dark();
    let theme_session = session.clone();
    let logout = move |_: MouseEvent| {
        session.sign_out();
        tracing::info!("signed out");
        navigator().push(Route::login());
    };

    rsx! {
        div { class: "app-layout",
            // Sidebar
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "Matchbook" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Dashboard {}, "Dashboard" }
                    NavLink { to: Route::Users {}, "Users" }
                    NavLink { to: Route::Payments {}, "Payments" }
                    NavLink { to: Route::Complaints {}, "Complaints" }
                }
                div { class: "sidebar-footer",
                    label { class: "theme-switch",
                        input {
                            r#type: "checkbox",
                            checked: is_dark,
                            onchange: move |e| theme.set(&theme_session, Theme::from_dark(e.checked())),
                        }
                        span { "Dark mode" }
                    }
                    button { class: "sidebar-logout", onclick: logout, "Sign out" }
                }
            }
            // Main content
            main { class: "main-content",
                ErrorBanner {}
                Outlet::<Route> {}
            }
        }
    }
}
