use api::AdminClient;
use dioxus::prelude::*;
use types::stats::DateRange;
use ui::{components::StatCardView, stats};

use super::{
    ComplaintsPanel, PaymentsPanel, UsersPanel,
    charts::{GenderChart, RegistrationChart},
};
use crate::use_error;

#[component]
pub fn Dashboard() -> Element {
    let client = use_context::<AdminClient>();
    let errors = use_error();
    let mut range = use_signal(DateRange::default);

    let stats = use_resource(move || {
        let client = client.clone();
        let mut errors = errors;
        let range = range();
        async move {
            match client.dashboard_stats(range).await {
                Ok(stats) => Some(stats),
                Err(err) => {
                    tracing::warn!(range = range.as_str(), %err, "failed to load statistics");
                    errors.set_api_error("Failed to load statistics", &err);
                    None
                }
            }
        }
    });

    let cards = match &*stats.read() {
        Some(Some(stats)) => Some(stats::project(stats)),
        _ => None,
    };
    let loading = stats.read().is_none();
    let selected = range();
    let label = selected.label();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "Showing: {label}" }
                }
                div { class: "page-header-actions",
                    select {
                        class: "form-select",
                        value: selected.as_str(),
                        onchange: move |e| range.set(DateRange::parse(&e.value()).unwrap_or_default()),
                        for option_range in DateRange::ALL {
                            option { key: "{option_range:?}", value: option_range.as_str(), {option_range.label()} }
                        }
                    }
                }
            }

            div { class: "stats-grid",
                if let Some(cards) = cards {
                    for card in cards {
                        StatCardView { key: "{card.title}", card: card.clone() }
                    }
                } else if loading {
                    div { class: "loading", "Loading statistics..." }
                } else {
                    div { class: "empty-state", "Statistics unavailable" }
                }
            }

            div { class: "chart-grid",
                GenderChart { range }
                RegistrationChart { range }
            }

            UsersPanel {}
            PaymentsPanel {}
            ComplaintsPanel {}
        }
    }
}
