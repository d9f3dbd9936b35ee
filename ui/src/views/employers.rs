//! Employers tab. Employers can be added but not removed.

use dioxus::prelude::*;

use crate::icons::FaPlus;
use crate::{use_directory, Icon};

#[component]
pub fn EmployersTab(on_add: EventHandler<()>) -> Element {
    let directory = use_directory();

    rsx! {
        div {
            class: "tab-head",
            h2 { class: "tab-heading", "Employers" }
            button {
                class: "button button-primary",
                onclick: move |_| on_add.call(()),
                Icon { icon: FaPlus, width: 16, height: 16 }
                span { "Add Employer" }
            }
        }
        div {
            class: "card-list",
            for employer in directory().employers {
                div {
                    key: "{employer.id}",
                    class: "card",
                    div {
                        class: "card-main",
                        h3 {
                            class: "card-title",
                            "{employer.first_name} {employer.last_name}"
                        }
                        p { class: "card-subtitle", "ID: {employer.id}" }
                    }
                }
            }
        }
    }
}
