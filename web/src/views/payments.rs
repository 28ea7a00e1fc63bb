use dioxus::prelude::*;
use types::{
    query::{PaymentStatus, Status, StatusFilter},
    records::Payment,
};
use ui::table::ActionKind;

use super::list::{ListBody, use_list};
use crate::use_error;

#[component]
pub fn Payments() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Payments" }
                p { class: "page-subtitle", "Review coin purchases awaiting approval." }
            }
            PaymentsPanel {}
        }
    }
}

#[component]
pub fn PaymentsPanel() -> Element {
    let list = use_list::<Payment>();
    let mut busy = use_signal(|| None::<String>);
    let mut errors = use_error();

    let review = move |(payment_id, action): (String, ActionKind)| {
        let status = match action {
            ActionKind::Approve => PaymentStatus::Approved,
            ActionKind::Reject => PaymentStatus::Rejected,
            ActionKind::Resolve => return,
        };
        let client = list.client();
        busy.set(Some(payment_id.clone()));

        spawn(async move {
            match client.update_payment_status(&payment_id, status, None).await {
                Ok(ack) => {
                    tracing::info!(
                        %payment_id,
                        status = status.as_str(),
                        reply = %ack.message,
                        "payment reviewed"
                    );
                    list.reload();
                }
                Err(err) => {
                    tracing::warn!(%payment_id, %err, "payment review failed");
                    errors.set_api_error("Failed to update payment", &err);
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
                h2 { class: "card-title", "Payments" }
                select {
                    class: "form-select",
                    value: selected,
                    onchange: move |e| list.set_filter(StatusFilter::from_value(&e.value())),
                    option { value: "all", "All" }
                    for status in PaymentStatus::ALL {
                        option { key: "{status:?}", value: status.as_str(), {status.label()} }
                    }
                }
            }
            ListBody::<Payment> {
                list,
                on_action: Some(EventHandler::new(review)),
                busy_row: busy(),
            }
        }
    }
}
