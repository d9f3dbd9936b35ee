//! Applicants tab: list, add and remove.

use dioxus::prelude::*;

use crate::icons::{FaPlus, FaTrash};
use crate::{use_directory, Icon};

#[component]
pub fn ApplicantsTab(on_add: EventHandler<()>, on_delete: EventHandler<String>) -> Element {
    let directory = use_directory();

    rsx! {
        div {
            class: "tab-head",
            h2 { class: "tab-heading", "Applicants" }
            button {
                class: "button button-primary",
                onclick: move |_| on_add.call(()),
                Icon { icon: FaPlus, width: 16, height: 16 }
                span { "Add Applicant" }
            }
        }
        div {
            class: "card-list",
            for applicant in directory().applicants {
                div {
                    key: "{applicant.id}",
                    class: "card",
                    div {
                        class: "card-row",
                        div {
                            class: "card-main",
                            h3 {
                                class: "card-title",
                                "{applicant.first_name} {applicant.last_name}"
                            }
                            p { class: "card-subtitle", "ID: {applicant.id}" }
                        }
                        div {
                            class: "card-actions",
                            button {
                                class: "icon-button icon-button-danger",
                                onclick: {
                                    let id = applicant.id.clone();
                                    move |_| on_delete.call(id.clone())
                                },
                                Icon { icon: FaTrash, width: 16, height: 16 }
                            }
                        }
                    }
                }
            }
        }
    }
}
