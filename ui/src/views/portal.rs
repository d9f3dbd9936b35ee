//! Main portal shell: header, tabs, error banner and modal host.

use api::{JobDraft, PersonDraft};
use dioxus::prelude::*;
use store::Session;

use crate::icons::FaSpinner;
use crate::{use_session, ApplicantRoster, Directory, Icon, SessionState, Toggle};

use super::{
    ApplicantForm, ApplicantsTab, EmployerForm, EmployersTab, JobForm, JobsTab, ModalOverlay,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// The three top-level tabs.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Tab {
    Jobs,
    Employers,
    Applicants,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Jobs, Tab::Employers, Tab::Applicants];

    fn label(self) -> &'static str {
        match self {
            Tab::Jobs => "Jobs",
            Tab::Employers => "Employers",
            Tab::Applicants => "Applicants",
        }
    }
}

/// Which creation dialog is open.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ModalKind {
    Job,
    Employer,
    Applicant,
}

/// Shared portal view.
///
/// Owns the directory and roster signals, every backend-mutating handler,
/// and the modal host. Platform packages provide the navigation callback
/// fired after logout.
#[component]
pub fn PortalView(on_signed_out: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut directory: Signal<Directory> =
        use_context_provider(|| Signal::new(Directory::default()));
    let mut roster: Signal<ApplicantRoster> =
        use_context_provider(|| Signal::new(ApplicantRoster::default()));

    let mut active_tab = use_signal(|| Tab::Jobs);
    let mut active_modal = use_signal(|| Option::<ModalKind>::None);
    let mut action_error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    // Load all three collections on entry.
    let _loader = use_resource(move || async move {
        busy.set(true);
        directory.set(Directory::refresh(&api::connect()).await);
        busy.set(false);
    });

    let handle_logout = move |_| async move {
        api::auth::sign_out(&crate::session_store()).await;
        session.set(SessionState {
            session: Session::default(),
            loading: false,
        });
        on_signed_out.call(());
    };

    // Expand or collapse a job's applications panel, fetching the list the
    // first time the panel opens.
    let handle_toggle = move |job_id: String| {
        spawn(async move {
            let toggle = roster.write().toggle(&job_id);
            if let Toggle::Expanded { fetch: Some(epoch) } = toggle {
                match api::connect().job_applicants(&job_id).await {
                    Ok(applicants) => roster.write().commit(&job_id, epoch, applicants),
                    Err(e) => {
                        tracing::warn!("loading applications for job {job_id}: {e}");
                        roster.write().settle(epoch);
                    }
                }
            }
        });
    };

    let handle_apply = move |job_id: String| {
        spawn(async move {
            action_error.set(None);
            let user_id = session().session.user_id;
            let (refresh, epoch) = {
                let r = roster.read();
                (r.is_expanded(&job_id), r.current_epoch())
            };
            match crate::submit_application(&api::connect(), user_id.as_deref(), &job_id, refresh)
                .await
            {
                Ok(Some(applicants)) => roster.write().commit(&job_id, epoch, applicants),
                Ok(None) => {}
                Err(e) => action_error.set(Some(e.to_string())),
            }
        });
    };

    let handle_create_job = move |draft: JobDraft| {
        spawn(async move {
            busy.set(true);
            action_error.set(None);
            match api::connect().create_job(&draft).await {
                Ok(job) => {
                    directory.write().add_job(job);
                    active_modal.set(None);
                }
                Err(e) => {
                    tracing::error!("creating job: {e}");
                    action_error.set(Some("Failed to create job".to_string()));
                }
            }
            busy.set(false);
        });
    };

    let handle_create_employer = move |draft: PersonDraft| {
        spawn(async move {
            busy.set(true);
            action_error.set(None);
            match api::connect().create_employer(&draft).await {
                Ok(employer) => {
                    directory.write().add_employer(employer);
                    active_modal.set(None);
                }
                Err(e) => {
                    tracing::error!("creating employer: {e}");
                    action_error.set(Some("Failed to create employer".to_string()));
                }
            }
            busy.set(false);
        });
    };

    let handle_create_applicant = move |draft: PersonDraft| {
        spawn(async move {
            busy.set(true);
            action_error.set(None);
            match api::connect().create_applicant(&draft).await {
                Ok(applicant) => {
                    directory.write().add_applicant(applicant);
                    active_modal.set(None);
                }
                Err(e) => {
                    tracing::error!("creating applicant: {e}");
                    action_error.set(Some("Failed to create applicant".to_string()));
                }
            }
            busy.set(false);
        });
    };

    let handle_delete_job = move |job_id: String| {
        spawn(async move {
            busy.set(true);
            action_error.set(None);
            match api::connect().delete_job(&job_id).await {
                Ok(()) => directory.write().remove_job(&job_id),
                Err(e) => {
                    tracing::error!("deleting job {job_id}: {e}");
                    action_error.set(Some("Failed to delete job".to_string()));
                }
            }
            busy.set(false);
        });
    };

    let handle_delete_applicant = move |applicant_id: String| {
        spawn(async move {
            busy.set(true);
            action_error.set(None);
            match api::connect().delete_applicant(&applicant_id).await {
                Ok(()) => directory.write().remove_applicant(&applicant_id),
                Err(e) => {
                    tracing::error!("deleting applicant {applicant_id}: {e}");
                    action_error.set(Some("Failed to delete applicant".to_string()));
                }
            }
            busy.set(false);
        });
    };

    let load_errors = directory().load_errors;

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "portal-screen",
            header {
                class: "portal-header",
                h1 { class: "portal-brand", "Job Portal Management" }
                div {
                    class: "portal-session",
                    span {
                        class: "portal-welcome",
                        "Welcome, {session().session.display_name()}"
                    }
                    button {
                        class: "button button-danger",
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            }

            if !load_errors.is_empty() || action_error().is_some() {
                div {
                    class: "banner-error",
                    for message in load_errors {
                        p { "{message}" }
                    }
                    if let Some(message) = action_error() {
                        p { "{message}" }
                    }
                }
            }

            nav {
                class: "tab-bar",
                for tab in Tab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if active_tab() == tab { "tab-button tab-button-active" } else { "tab-button" },
                        onclick: move |_| active_tab.set(tab),
                        "{tab.label()}"
                    }
                }
            }

            if busy() {
                div {
                    class: "spinner-row",
                    Icon { icon: FaSpinner, width: 24, height: 24 }
                }
            }

            main {
                class: "tab-panel",
                if active_tab() == Tab::Jobs {
                    JobsTab {
                        on_add: move |_| active_modal.set(Some(ModalKind::Job)),
                        on_delete: handle_delete_job,
                        on_toggle: handle_toggle,
                        on_apply: handle_apply,
                    }
                }
                if active_tab() == Tab::Employers {
                    EmployersTab {
                        on_add: move |_| active_modal.set(Some(ModalKind::Employer)),
                    }
                }
                if active_tab() == Tab::Applicants {
                    ApplicantsTab {
                        on_add: move |_| active_modal.set(Some(ModalKind::Applicant)),
                        on_delete: handle_delete_applicant,
                    }
                }
            }
        }

        // Modal overlays (always float on top)
        if active_modal() == Some(ModalKind::Job) {
            ModalOverlay {
                title: "Add New Job",
                on_close: move |_| active_modal.set(None),
                JobForm {
                    employers: directory().employers,
                    on_submit: handle_create_job,
                    on_cancel: move |_| active_modal.set(None),
                }
            }
        }
        if active_modal() == Some(ModalKind::Employer) {
            ModalOverlay {
                title: "Add New Employer",
                on_close: move |_| active_modal.set(None),
                EmployerForm {
                    on_submit: handle_create_employer,
                    on_cancel: move |_| active_modal.set(None),
                }
            }
        }
        if active_modal() == Some(ModalKind::Applicant) {
            ModalOverlay {
                title: "Add New Applicant",
                on_close: move |_| active_modal.set(None),
                ApplicantForm {
                    on_submit: handle_create_applicant,
                    on_cancel: move |_| active_modal.set(None),
                }
            }
        }
    }
}
