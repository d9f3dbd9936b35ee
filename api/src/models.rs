//! Wire models shared with the backend. Field names travel as camelCase.

use serde::{Deserialize, Serialize};

/// A job listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub employer_id: String,
}

/// An employer that can own job listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// A person who can apply to jobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// The account record returned by login and registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Payload for creating a job. The employer id also selects the URL, so the
/// backend sees it twice.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub employer_id: String,
}

/// Payload for creating an employer or an applicant.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonDraft {
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drafts_serialize_camel_case() {
        let draft = JobDraft {
            title: "Compiler Engineer".to_string(),
            employer_id: "7".to_string(),
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"employerId\":\"7\""));
        assert!(!json.contains("employer_id"));
    }
}
