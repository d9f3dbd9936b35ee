//! # API crate — typed client for the job portal backend
//!
//! Every request the web and desktop frontends make goes through this crate.
//! [`Portal`] exposes one method per backend endpoint; the [`Gateway`] trait
//! underneath it abstracts the transport so the whole crate can be exercised
//! against an in-memory fake.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Login, registration and logout flows that bind portal calls to the persisted session |
//! | [`error`] | Error taxonomy: transport failures, auth rejections, application failures |
//! | [`models`] | Wire models (`Job`, `Employer`, `Applicant`, `Account`) and request payloads |
//!
//! ## Transports
//!
//! - [`HttpGateway`] sends real requests with `reqwest` (native and WASM).
//! - [`MemoryGateway`] serves canned responses and records every request,
//!   for tests and offline demos.

pub mod auth;
pub mod error;
pub mod models;

mod gateway;
pub use gateway::{Gateway, HttpGateway};

mod memory;
pub use memory::MemoryGateway;

mod portal;
pub use portal::Portal;

pub use error::{ApiError, ApplyError, AuthError};
pub use models::{Account, Applicant, Employer, Job, JobDraft, PersonDraft};

/// Base address of the backend. Change this to point at a deployed instance.
pub const API_BASE_URL: &str = "http://localhost:8080";

/// Connect to the backend at [`API_BASE_URL`].
pub fn connect() -> Portal<HttpGateway> {
    Portal::new(HttpGateway::new(API_BASE_URL))
}
