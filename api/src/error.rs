//! Error taxonomy for portal calls.

use thiserror::Error;

/// Failure of a single gateway request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never completed (connection refused, DNS, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// A body could not be encoded or a response could not be decoded.
    #[error("malformed payload: {0}")]
    Payload(String),
}

/// Why a login or registration attempt failed.
///
/// The display strings double as the messages shown on the auth card, so
/// they stay short and free of transport detail.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    BadCredentials,
    #[error("Registration failed")]
    Rejected,
    /// The request never reached the server or came back unreadable.
    #[error(transparent)]
    Request(ApiError),
}

/// Why applying to a job failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApplyError {
    /// No signed-in user id is available. Nothing was sent.
    #[error("Sign in again before applying to a job")]
    NotSignedIn,
    #[error("Failed to apply: {0}")]
    Request(#[from] ApiError),
}
