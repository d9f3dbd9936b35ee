//! One method per backend endpoint, typed at both ends.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::models::{
    Account, Applicant, Credentials, Employer, Job, JobDraft, PersonDraft, Registration,
};

/// The job portal backend, addressed through a [`Gateway`].
///
/// Methods mirror the REST surface one to one and do no retrying or
/// caching of their own; callers own any state built from the responses.
pub struct Portal<G: Gateway> {
    gateway: G,
}

impl<G: Gateway> Portal<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    fn encode<T: Serialize>(payload: &T) -> Result<String, ApiError> {
        serde_json::to_string(payload).map_err(|e| ApiError::Payload(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Payload(e.to_string()))
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Account, ApiError> {
        let body = Self::encode(credentials)?;
        let response = self.gateway.post("/accounts/login", Some(body)).await?;
        Self::decode(&response)
    }

    pub async fn register(&self, registration: &Registration) -> Result<Account, ApiError> {
        let body = Self::encode(registration)?;
        let response = self.gateway.post("/accounts/register", Some(body)).await?;
        Self::decode(&response)
    }

    pub async fn jobs(&self) -> Result<Vec<Job>, ApiError> {
        let response = self.gateway.get("/jobs").await?;
        Self::decode(&response)
    }

    pub async fn employers(&self) -> Result<Vec<Employer>, ApiError> {
        let response = self.gateway.get("/employers").await?;
        Self::decode(&response)
    }

    pub async fn applicants(&self) -> Result<Vec<Applicant>, ApiError> {
        let response = self.gateway.get("/applicants").await?;
        Self::decode(&response)
    }

    /// Create a job under the draft's employer, returning the stored record.
    pub async fn create_job(&self, draft: &JobDraft) -> Result<Job, ApiError> {
        let body = Self::encode(draft)?;
        let path = format!("/jobs/{}", draft.employer_id);
        let response = self.gateway.post(&path, Some(body)).await?;
        Self::decode(&response)
    }

    pub async fn create_employer(&self, draft: &PersonDraft) -> Result<Employer, ApiError> {
        let body = Self::encode(draft)?;
        let response = self.gateway.post("/employers", Some(body)).await?;
        Self::decode(&response)
    }

    pub async fn create_applicant(&self, draft: &PersonDraft) -> Result<Applicant, ApiError> {
        let body = Self::encode(draft)?;
        let response = self.gateway.post("/applicants", Some(body)).await?;
        Self::decode(&response)
    }

    pub async fn delete_job(&self, job_id: &str) -> Result<(), ApiError> {
        self.gateway.delete(&format!("/jobs/{job_id}")).await
    }

    pub async fn delete_applicant(&self, applicant_id: &str) -> Result<(), ApiError> {
        self.gateway
            .delete(&format!("/applicants/{applicant_id}"))
            .await
    }

    /// Applicants who have applied to the given job.
    pub async fn job_applicants(&self, job_id: &str) -> Result<Vec<Applicant>, ApiError> {
        let response = self.gateway.get(&format!("/applications/{job_id}")).await?;
        Self::decode(&response)
    }

    /// Record an application. Both ids travel in the path; any response
    /// body is ignored.
    pub async fn apply(&self, applicant_id: &str, job_id: &str) -> Result<(), ApiError> {
        self.gateway
            .post(&format!("/applications/{applicant_id}/{job_id}"), None)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryGateway;

    fn portal() -> (Portal<MemoryGateway>, MemoryGateway) {
        let gateway = MemoryGateway::new();
        (Portal::new(gateway.clone()), gateway)
    }

    #[tokio::test]
    async fn test_jobs_decodes_camel_case() {
        let (portal, gateway) = portal();
        gateway.respond(
            "GET",
            "/jobs",
            r#"[{"id":"1","title":"Welder","employerId":"9"}]"#,
        );

        let jobs = portal.jobs().await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Welder");
        assert_eq!(jobs[0].employer_id, "9");
    }

    #[tokio::test]
    async fn test_login_returns_account() {
        let (portal, gateway) = portal();
        gateway.respond(
            "POST",
            "/accounts/login",
            r#"{"id":"1","firstName":"Ada","lastName":"Lovelace","email":"ada@example.com"}"#,
        );

        let credentials = Credentials {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        };
        let account = portal.login(&credentials).await.unwrap();
        assert_eq!(account.id, "1");
        assert_eq!(account.first_name, "Ada");
    }

    #[tokio::test]
    async fn test_create_job_posts_under_employer() {
        let (portal, gateway) = portal();
        gateway.respond(
            "POST",
            "/jobs/9",
            r#"{"id":"3","title":"Welder","employerId":"9"}"#,
        );

        let draft = JobDraft {
            title: "Welder".to_string(),
            employer_id: "9".to_string(),
        };
        let job = portal.create_job(&draft).await.unwrap();
        assert_eq!(job.id, "3");
        assert_eq!(gateway.requests(), vec!["POST /jobs/9"]);
    }

    #[tokio::test]
    async fn test_delete_applicant_hits_id_path() {
        let (portal, gateway) = portal();
        gateway.respond("DELETE", "/applicants/7", "");

        portal.delete_applicant("7").await.unwrap();
        assert_eq!(gateway.requests(), vec!["DELETE /applicants/7"]);
    }

    #[tokio::test]
    async fn test_job_applicants_path_carries_job_id() {
        let (portal, gateway) = portal();
        gateway.respond(
            "GET",
            "/applications/42",
            r#"[{"id":"7","firstName":"Alan","lastName":"Turing"}]"#,
        );

        let applicants = portal.job_applicants("42").await.unwrap();
        assert_eq!(applicants.len(), 1);
        assert_eq!(applicants[0].first_name, "Alan");
        assert_eq!(gateway.requests(), vec!["GET /applications/42"]);
    }

    #[tokio::test]
    async fn test_apply_ignores_response_body() {
        let (portal, gateway) = portal();
        gateway.respond("POST", "/applications/7/42", "created");

        portal.apply("7", "42").await.unwrap();
        assert_eq!(gateway.requests(), vec!["POST /applications/7/42"]);
    }

    #[tokio::test]
    async fn test_server_error_surfaces_status() {
        let (portal, gateway) = portal();
        gateway.fail("GET", "/employers", 500);

        let err = portal.employers().await.unwrap_err();
        assert_eq!(err, ApiError::Status(500));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_payload_error() {
        let (portal, gateway) = portal();
        gateway.respond("GET", "/jobs", "not json");

        match portal.jobs().await.unwrap_err() {
            ApiError::Payload(_) => {}
            other => panic!("expected payload error, got {other:?}"),
        }
    }
}
