//! Jobs tab: listings with an expandable applications panel per job.

use api::Job;
use dioxus::prelude::*;

use crate::icons::{FaChevronDown, FaChevronUp, FaPlus, FaTrash};
use crate::{use_directory, use_roster, Icon};

#[component]
pub fn JobsTab(
    on_add: EventHandler<()>,
    on_delete: EventHandler<String>,
    on_toggle: EventHandler<String>,
    on_apply: EventHandler<String>,
) -> Element {
    let directory = use_directory();

    rsx! {
        div {
            class: "tab-head",
            h2 { class: "tab-heading", "Job Listings" }
            button {
                class: "button button-primary",
                onclick: move |_| on_add.call(()),
                Icon { icon: FaPlus, width: 16, height: 16 }
                span { "Add Job" }
            }
        }
        div {
            class: "card-list",
            for job in directory().jobs {
                JobRow {
                    key: "{job.id}",
                    job: job.clone(),
                    on_delete: on_delete,
                    on_toggle: on_toggle,
                    on_apply: on_apply,
                }
            }
        }
    }
}

#[component]
fn JobRow(
    job: Job,
    on_delete: EventHandler<String>,
    on_toggle: EventHandler<String>,
    on_apply: EventHandler<String>,
) -> Element {
    let directory = use_directory();
    let roster = use_roster();

    let expanded = roster().is_expanded(&job.id);
    // A job whose employer is not in the loaded list renders with a blank
    // employer name rather than hiding the row.
    let employer = directory()
        .employer_name(&job.employer_id)
        .unwrap_or_default();

    let apply_id = job.id.clone();
    let toggle_id = job.id.clone();
    let delete_id = job.id.clone();

    rsx! {
        div {
            class: "card",
            div {
                class: "card-row",
                div {
                    class: "card-main",
                    h3 { class: "card-title", "{job.title}" }
                    p { class: "card-subtitle", "Employer: {employer}" }
                }
                div {
                    class: "card-actions",
                    button {
                        class: "button button-small",
                        onclick: move |_| on_apply.call(apply_id.clone()),
                        "Apply"
                    }
                    button {
                        class: "icon-button",
                        onclick: move |_| on_toggle.call(toggle_id.clone()),
                        if expanded {
                            Icon { icon: FaChevronUp, width: 16, height: 16 }
                        } else {
                            Icon { icon: FaChevronDown, width: 16, height: 16 }
                        }
                    }
                    button {
                        class: "icon-button icon-button-danger",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        Icon { icon: FaTrash, width: 16, height: 16 }
                    }
                }
            }
            if expanded {
                ApplicationsPanel { job_id: job.id.clone() }
            }
        }
    }
}

/// The open panel under a job row.
///
/// - **Cached, non-empty**: the applicant names
/// - **Cached, empty**: "No applications yet"
/// - **Not cached, fetch in flight**: a loading note
#[component]
fn ApplicationsPanel(job_id: String) -> Element {
    let roster = use_roster();
    let current = roster();

    let body = match current.applicants(&job_id) {
        Some(applicants) if applicants.is_empty() => rsx! {
            p { class: "empty-note", "No applications yet" }
        },
        Some(applicants) => rsx! {
            ul {
                class: "applicant-list",
                for applicant in applicants {
                    li {
                        key: "{applicant.id}",
                        "{applicant.first_name} {applicant.last_name}"
                    }
                }
            }
        },
        None if current.loading() => rsx! {
            p { class: "empty-note", "Loading applications..." }
        },
        None => rsx! {
            p { class: "empty-note", "No applications yet" }
        },
    };

    rsx! {
        div {
            class: "applications-panel",
            h4 { class: "applications-heading", "Applications" }
            {body}
        }
    }
}
