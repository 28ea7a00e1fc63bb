use api::AdminClient;
use dioxus::document::eval;
use dioxus::prelude::*;
use types::{Result, chart::ChartSeries, session::Theme, stats::DateRange};
use ui::chart::{self, CHART_RANGES, ChartRange, ChartSpec, GENDER_CANVAS, REGISTRATION_CANVAS};

use crate::{ErrorState, use_error, use_theme};

#[component]
pub fn GenderChart(range: ReadSignal<DateRange>) -> Element {
    let client = use_context::<AdminClient>();
    let theme = use_theme();
    let errors = use_error();
    let unavailable = use_signal(|| false);
    let mut own_range = use_signal(ChartRange::default);

    use_effect(move || {
        // The gender endpoint takes no range; the chart still remounts with the others.
        let range = own_range.read().effective(range());
        let theme = theme.get();
        let client = client.clone();
        spawn(async move {
            let fetched = client.gender_distribution().await;
            let target = Target {
                canvas_id: GENDER_CANVAS,
                range,
                theme,
            };
            mount(target, fetched, chart::gender_chart, unavailable, errors).await;
        });
    });

    rsx! {
        ChartCard {
            title: "Gender Distribution",
            canvas_id: GENDER_CANVAS,
            unavailable: unavailable(),
            selected: own_range.read().selected(range()),
            on_range: move |picked| own_range.write().pick(picked, range()),
        }
    }
}

#[component]
pub fn RegistrationChart(range: ReadSignal<DateRange>) -> Element {
    let client = use_context::<AdminClient>();
    let theme = use_theme();
    let errors = use_error();
    let unavailable = use_signal(|| false);
    let mut own_range = use_signal(ChartRange::default);

    use_effect(move || {
        let range = own_range.read().effective(range());
        let theme = theme.get();
        let client = client.clone();
        spawn(async move {
            let fetched = client.registrations(range.registration_days()).await;
            let target = Target {
                canvas_id: REGISTRATION_CANVAS,
                range,
                theme,
            };
            mount(target, fetched, chart::registration_chart, unavailable, errors).await;
        });
    });

    rsx! {
        ChartCard {
            title: "New Registrations",
            canvas_id: REGISTRATION_CANVAS,
            unavailable: unavailable(),
            selected: own_range.read().selected(range()),
            on_range: move |picked| own_range.write().pick(picked, range()),
        }
    }
}

/// Card with a canvas and a range selector for that chart alone. The empty
/// option follows the dashboard range.
#[component]
fn ChartCard(
    title: &'static str,
    canvas_id: &'static str,
    unavailable: bool,
    #[props(!optional)] selected: Option<DateRange>,
    on_range: EventHandler<Option<DateRange>>,
) -> Element {
    let value = selected.map_or("", |range| range.as_str());

    rsx! {
        div { class: "card chart-card",
            div { class: "card-header",
                h2 { class: "card-title", "{title}" }
                select {
                    class: "form-select chart-range",
                    value,
                    onchange: move |e| on_range.call(DateRange::parse(&e.value())),
                    option { value: "", "Dashboard range" }
                    for option_range in CHART_RANGES {
                        option { key: "{option_range:?}", value: option_range.as_str(), {option_range.label()} }
                    }
                }
            }
            div { class: "chart-area",
                canvas { id: canvas_id }
                if unavailable {
                    div { class: "chart-unavailable", "Chart data unavailable" }
                }
            }
        }
    }
}

/// What a mount is drawing, for the logs.
struct Target {
    canvas_id: &'static str,
    range: DateRange,
    theme: Theme,
}

/// Hand a fetched series to the JS chart helper. Failures only affect this
/// chart, except a rejected session which is routed to the login view.
async fn mount(
    target: Target,
    fetched: Result<ChartSeries>,
    build: fn(&ChartSeries) -> ChartSpec,
    mut unavailable: Signal<bool>,
    mut errors: ErrorState,
) {
    let Target {
        canvas_id,
        range,
        theme,
    } = target;

    let series = match fetched {
        Ok(series) => series,
        Err(err) => {
            tracing::warn!(canvas_id, range = range.as_str(), %err, "chart data unavailable");
            if err.is_unauthorized() {
                errors.set_api_error("Failed to load chart", &err);
            }
            unavailable.set(true);
            return;
        }
    };
    if series.is_empty() {
        tracing::debug!(canvas_id, range = range.as_str(), "empty chart series");
        unavailable.set(true);
        return;
    }

    let script = match chart::mount_script(canvas_id, &build(&series)) {
        Ok(script) => script,
        Err(err) => {
            tracing::error!(canvas_id, %err, "failed to encode chart");
            unavailable.set(true);
            return;
        }
    };

    tracing::debug!(canvas_id, range = range.as_str(), theme = theme.as_str(), "mounting chart");
    if let Err(err) = eval(&script).await {
        tracing::warn!(canvas_id, ?err, "failed to mount chart");
        unavailable.set(true);
        return;
    }
    unavailable.set(false);
}
