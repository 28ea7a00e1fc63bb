use dioxus::prelude::*;
use types::{query::UserSearch, records::User};

use super::list::{ListBody, use_list};

#[component]
pub fn Users() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Users" }
                p { class: "page-subtitle", "Everyone who has registered with the bot." }
            }
            UsersPanel {}
        }
    }
}

#[component]
pub fn UsersPanel() -> Element {
    let list = use_list::<User>();
    let mut search = use_signal(String::new);

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Users" }
                div { class: "search-box",
                    input {
                        class: "form-input",
                        r#type: "search",
                        placeholder: "Search by name or username",
                        value: "{search}",
                        oninput: move |e| {
                            search.set(e.value());
                            list.set_filter(UserSearch::new(e.value()));
                        },
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| list.set_filter(UserSearch::new(search())),
                        "Search"
                    }
                }
            }
            ListBody::<User> { list, on_action: None, busy_row: None }
        }
    }
}
