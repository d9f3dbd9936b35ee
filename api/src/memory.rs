use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::gateway::Gateway;

/// In-memory [`Gateway`] serving canned responses.
///
/// Routes are keyed by `"METHOD path"`; requests with no route fail with
/// status 404. Every request is recorded in call order so tests can assert
/// exactly what went over the wire, or that nothing did. Clones share the
/// same state.
#[derive(Clone, Debug, Default)]
pub struct MemoryGateway {
    routes: Arc<Mutex<HashMap<String, Result<String, u16>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `METHOD path`.
    pub fn respond(&self, method: &str, path: &str, body: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(format!("{method} {path}"), Ok(body.to_string()));
    }

    /// Fail `METHOD path` with a status code.
    pub fn fail(&self, method: &str, path: &str, status: u16) {
        self.routes
            .lock()
            .unwrap()
            .insert(format!("{method} {path}"), Err(status));
    }

    /// Requests seen so far, as `"METHOD path"` strings in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn dispatch(&self, method: &str, path: &str) -> Result<String, ApiError> {
        let key = format!("{method} {path}");
        self.requests.lock().unwrap().push(key.clone());
        match self.routes.lock().unwrap().get(&key) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(ApiError::Status(*status)),
            None => Err(ApiError::Status(404)),
        }
    }
}

impl Gateway for MemoryGateway {
    async fn get(&self, path: &str) -> Result<String, ApiError> {
        self.dispatch("GET", path)
    }

    async fn post(&self, path: &str, _body: Option<String>) -> Result<String, ApiError> {
        self.dispatch("POST", path)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.dispatch("DELETE", path).map(|_| ())
    }
}
