use api::AdminClient;
use dioxus::prelude::*;
use types::{Config, Listing};
use ui::{
    components::{DataTable, PageSummaryLine, Pager},
    list::{ListController, ListSource, Ticket},
    table::{self, ActionKind, TableRow},
};

use crate::{ErrorState, use_error};

/// A list controller bound to the API client and the error banner.
pub struct ListHandle<R: Listing> {
    controller: Signal<ListController<R>>,
    client: CopyValue<AdminClient>,
    errors: ErrorState,
}

impl<R: Listing> Clone for ListHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Listing> Copy for ListHandle<R> {}

impl<R: Listing> PartialEq for ListHandle<R> {
    fn eq(&self, other: &Self) -> bool {
        self.controller == other.controller
    }
}

/// Create a controller for `R` and load its first page on mount.
pub fn use_list<R: Listing>() -> ListHandle<R> {
    let config = use_context::<Config>();
    let client = use_context::<AdminClient>();
    let handle = ListHandle {
        controller: use_signal(|| ListController::new(config.items_per_page)),
        client: use_hook(|| CopyValue::new(client)),
        errors: use_error(),
    };

    use_effect(move || handle.reload());

    handle
}

impl<R: Listing> ListHandle<R> {
    pub fn controller(&self) -> Signal<ListController<R>> {
        self.controller
    }

    pub fn client(&self) -> AdminClient {
        self.client.cloned()
    }

    pub fn set_filter(mut self, filter: R::Filter) {
        let ticket = self.controller.write().set_filter(filter);
        self.dispatch(ticket);
    }

    pub fn set_page(mut self, page: u32) {
        let ticket = self.controller.write().set_page(page);
        if let Some(ticket) = ticket {
            self.dispatch(ticket);
        }
    }

    pub fn reload(mut self) {
        let ticket = self.controller.write().reload();
        self.dispatch(ticket);
    }

    fn dispatch(self, ticket: Ticket<R::Filter>) {
        let mut controller = self.controller;
        let mut errors = self.errors;
        let client = self.client();

        spawn(async move {
            tracing::debug!(path = R::PATH, query = ?ticket.query(), "fetching page");
            let result = <AdminClient as ListSource<R>>::fetch_page(&client, ticket.query()).await;
            let outcome = controller.write().complete(ticket, result);
            if let Err(err) = outcome {
                tracing::warn!(path = R::PATH, %err, "failed to load page");
                let context = format!("Failed to load {}", R::PATH.trim_start_matches('/'));
                errors.set_api_error(&context, &err);
            }
        });
    }
}

/// Table, summary line and pagination for one list.
#[component]
pub fn ListBody<R: Listing + TableRow>(
    list: ListHandle<R>,
    #[props(!optional)] on_action: Option<EventHandler<(String, ActionKind)>>,
    #[props(!optional)] busy_row: Option<String>,
) -> Element {
    let controller = list.controller();
    let state = controller.read();
    let body = table::project(state.records());
    let pagination = state.pagination();
    let summary = state.summary();
    drop(state);

    rsx! {
        DataTable {
            columns: R::COLUMNS,
            body,
            on_action,
            busy_row,
        }
        div { class: "table-footer",
            PageSummaryLine { summary }
            Pager {
                view: pagination,
                on_page: move |page| list.set_page(page),
            }
        }
    }
}
