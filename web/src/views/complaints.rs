use dioxus::prelude::*;
use types::{
    query::{ComplaintStatus, Status, StatusFilter},
    records::Complaint,
};
use ui::table::ActionKind;

use super::list::{ListBody, use_list};
use crate::use_error;

#[component]
pub fn Complaints() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Complaints" }
                p { class: "page-subtitle", "Reports filed by users against other users." }
            }
            ComplaintsPanel {}
        }
    }
}

#[component]
pub fn ComplaintsPanel() -> Element {
    let list = use_list::<Complaint>();
    let mut busy = use_signal(|| None::<String>);
    let mut errors = use_error();

    let resolve = move |(complaint_id, action): (String, ActionKind)| {
        if action != ActionKind::Resolve {
            return;
        }
        let client = list.client();
        busy.set(Some(complaint_id.clone()));

        spawn(async move {
            match client
                .update_complaint_status(&complaint_id, ComplaintStatus::Resolved)
                .await
            {
                Ok(ack) => {
                    tracing::info!(%complaint_id, reply = %ack.message, "complaint resolved");
                    list.reload();
                }
                Err(err) => {
                    tracing::warn!(%complaint_id, %err, "resolving complaint failed");
                    errors.set_api_error("Failed to resolve complaint", &err);
                }
            }
            busy.set(None);
        });
    };

    let controller = list.controller();
    let selected = controller.read().filter().as_value();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Complaints" }
                select {
                    class: "form-select",
                    value: selected,
                    onchange: move |e| list.set_filter(StatusFilter::from_value(&e.value())),
                    option { value: "all", "All" }
                    for status in ComplaintStatus::ALL {
                        option { key: "{status:?}", value: status.as_str(), {status.label()} }
                    }
                }
            }
            ListBody::<Complaint> {
                list,
                on_action: Some(EventHandler::new(resolve)),
                busy_row: busy(),
            }
        }
    }
}
