mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod auth;
pub use auth::AuthView;

mod portal;
pub use portal::PortalView;

mod jobs;
pub use jobs::JobsTab;

mod employers;
pub use employers::EmployersTab;

mod applicants;
pub use applicants::ApplicantsTab;

mod forms;
pub use forms::{ApplicantForm, EmployerForm, JobForm};
