//! Login, registration and logout flows.
//!
//! These functions tie [`Portal`] calls to the persisted [`Session`]: the
//! session is only ever written after the backend has accepted the
//! request, so a rejected login leaves any previous session intact.

use store::{Session, SessionStorage, SessionStore};

use crate::error::{ApiError, AuthError};
use crate::gateway::Gateway;
use crate::models::{Account, Credentials, Registration};
use crate::portal::Portal;

fn session_for(account: &Account) -> Session {
    Session {
        logged_in: true,
        user_id: Some(account.id.clone()),
        first_name: account.first_name.clone(),
        last_name: account.last_name.clone(),
    }
}

fn rejected_as(err: ApiError, rejection: AuthError) -> AuthError {
    match err {
        ApiError::Status(_) => rejection,
        other => AuthError::Request(other),
    }
}

/// Log in and persist the resulting session.
pub async fn sign_in<G: Gateway, S: SessionStorage>(
    portal: &Portal<G>,
    sessions: &SessionStore<S>,
    email: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let credentials = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };
    let account = portal
        .login(&credentials)
        .await
        .map_err(|e| rejected_as(e, AuthError::BadCredentials))?;
    tracing::debug!(user = %account.id, "signed in");

    let session = session_for(&account);
    sessions.save(&session).await;
    Ok(session)
}

/// Create an account and persist the resulting session.
pub async fn sign_up<G: Gateway, S: SessionStorage>(
    portal: &Portal<G>,
    sessions: &SessionStore<S>,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let registration = Registration {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    let account = portal
        .register(&registration)
        .await
        .map_err(|e| rejected_as(e, AuthError::Rejected))?;
    tracing::debug!(user = %account.id, "registered");

    let session = session_for(&account);
    sessions.save(&session).await;
    Ok(session)
}

/// Drop the persisted session. Purely local, nothing is sent to the server.
pub async fn sign_out<S: SessionStorage>(sessions: &SessionStore<S>) {
    sessions.clear().await;
}
