//! Creation forms hosted in the modal overlay.

use api::{Employer, JobDraft, PersonDraft};
use dioxus::prelude::*;

/// Form for a new job: a title and an employer picked from the loaded
/// employer list. Submit is ignored until both are set.
#[component]
pub fn JobForm(
    employers: Vec<Employer>,
    on_submit: EventHandler<JobDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut employer_id = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let t = title().trim().to_string();
        if t.is_empty() || employer_id().is_empty() {
            return;
        }
        on_submit.call(JobDraft {
            title: t,
            employer_id: employer_id(),
        });
    };

    rsx! {
        form {
            class: "modal-body",
            onsubmit: handle_submit,
            div {
                class: "form-field",
                label { class: "field-label", "Title" }
                input {
                    class: "field-input",
                    r#type: "text",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { class: "field-label", "Employer" }
                select {
                    class: "field-input",
                    value: employer_id(),
                    onchange: move |evt| employer_id.set(evt.value()),
                    option { value: "", "Select Employer" }
                    for employer in &employers {
                        option {
                            key: "{employer.id}",
                            value: "{employer.id}",
                            "{employer.first_name} {employer.last_name}"
                        }
                    }
                }
            }
            div {
                class: "modal-actions",
                button { class: "button button-primary", r#type: "submit", "Create Job" }
                button {
                    class: "button button-outline",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
pub fn EmployerForm(on_submit: EventHandler<PersonDraft>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        NameForm {
            submit_label: "Create Employer",
            on_submit: on_submit,
            on_cancel: on_cancel,
        }
    }
}

#[component]
pub fn ApplicantForm(on_submit: EventHandler<PersonDraft>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        NameForm {
            submit_label: "Create Applicant",
            on_submit: on_submit,
            on_cancel: on_cancel,
        }
    }
}

/// Shared first/last name form used by both person-shaped dialogs.
#[component]
fn NameForm(
    submit_label: String,
    on_submit: EventHandler<PersonDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let first = first_name().trim().to_string();
        let last = last_name().trim().to_string();
        if first.is_empty() || last.is_empty() {
            return;
        }
        on_submit.call(PersonDraft {
            first_name: first,
            last_name: last,
        });
    };

    rsx! {
        form {
            class: "modal-body",
            onsubmit: handle_submit,
            div {
                class: "form-field",
                label { class: "field-label", "First Name" }
                input {
                    class: "field-input",
                    r#type: "text",
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { class: "field-label", "Last Name" }
                input {
                    class: "field-input",
                    r#type: "text",
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }
            }
            div {
                class: "modal-actions",
                button { class: "button button-primary", r#type: "submit", "{submit_label}" }
                button {
                    class: "button button-outline",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
