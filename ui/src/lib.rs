//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::session_store;

mod session;
pub use session::{use_session, SessionProvider, SessionState};

mod directory;
pub use directory::{use_directory, Directory};

mod roster;
pub use roster::{submit_application, use_roster, ApplicantRoster, Toggle};

pub mod views;
