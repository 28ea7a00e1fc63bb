use dioxus::prelude::*;

use crate::{
    pagination::{PageSummary, PaginationView},
    stats::StatCard,
    table::{ActionKind, Cell, TableBody},
};

/// A table with a fixed header and a projected body.
///
/// Row actions report `(row key, action)` through `on_action`. While
/// `busy_row` names a row its buttons are disabled.
#[component]
pub fn DataTable(
    columns: &'static [&'static str],
    body: TableBody,
    #[props(!optional)] on_action: Option<EventHandler<(String, ActionKind)>>,
    #[props(!optional)] busy_row: Option<String>,
) -> Element {
    rsx! {
        div { class: "table-container",
            table { class: "table",
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column}", "{column}" }
                        }
                    }
                }
                tbody {
                    {match body {
                        TableBody::Empty { colspan, message } => rsx! {
                            tr {
                                td { class: "text-center", colspan: "{colspan}", "{message}" }
                            }
                        },
                        TableBody::Rows(rows) => rsx! {
                            for row in rows {
                                {
                                    let is_busy = busy_row.as_deref() == Some(row.key.as_str());
                                    rsx! {
                                        tr { key: "{row.key}",
                                            for (i, cell) in row.cells.into_iter().enumerate() {
                                                td { key: "{i}",
                                                    CellView {
                                                        cell,
                                                        row_key: row.key.clone(),
                                                        busy: is_busy,
                                                        on_action,
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                    }}
                }
            }
        }
    }
}

#[component]
fn CellView(
    cell: Cell,
    row_key: String,
    busy: bool,
    #[props(!optional)] on_action: Option<EventHandler<(String, ActionKind)>>,
) -> Element {
    match cell {
        Cell::Text(text) => rsx! { "{text}" },
        Cell::Badge { class, label } => rsx! {
            span { class: "{class}", "{label}" }
        },
        Cell::Actions(actions) => rsx! {
            div { class: "row-actions",
                for action in actions {
                    {
                        let key = row_key.clone();
                        let kind = action.kind;
                        rsx! {
                            button {
                                key: "{action.label}",
                                class: "{action.class}",
                                disabled: busy,
                                onclick: move |_| {
                                    if let Some(handler) = on_action {
                                        handler.call((key.clone(), kind));
                                    }
                                },
                                "{action.label}"
                            }
                        }
                    }
                }
            }
        },
    }
}

/// Previous / numbered / next links. Renders nothing for a single page.
#[component]
pub fn Pager(#[props(!optional)] view: Option<PaginationView>, on_page: EventHandler<u32>) -> Element {
    let Some(view) = view else {
        return rsx! {};
    };

    rsx! {
        nav { class: "pagination",
            for (i, link) in view.links().cloned().enumerate() {
                {
                    let target = link.target;
                    rsx! {
                        button {
                            key: "{i}",
                            class: if link.active { "page-link active" } else { "page-link" },
                            disabled: link.disabled,
                            onclick: move |_| on_page.call(target),
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PageSummaryLine(summary: PageSummary) -> Element {
    rsx! {
        div { class: "table-summary", "{summary}" }
    }
}

#[component]
pub fn StatCardView(card: StatCard) -> Element {
    let growth_class = card.growth.class();
    let growth = card.growth.text();

    rsx! {
        div { class: "card stat-card",
            div { class: "stat-title", "{card.title}" }
            div { class: "stat-value", "{card.value}" }
            div { class: "stat-growth {growth_class}", "{growth}" }
        }
    }
}
