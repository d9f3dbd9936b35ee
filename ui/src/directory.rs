use api::{Applicant, Employer, Gateway, Job, Portal};
use dioxus::prelude::*;

/// Centralized state for the three backend collections.
///
/// Provided as `Signal<Directory>` via context in `PortalView`. All tabs
/// read from this one signal instead of consuming three separate ones, and
/// every mutation happens only after the backend has confirmed it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Directory {
    pub jobs: Vec<Job>,
    pub employers: Vec<Employer>,
    pub applicants: Vec<Applicant>,
    /// One message per collection that failed to load, in fetch order.
    pub load_errors: Vec<String>,
}

impl Directory {
    /// Reload all three collections from the portal.
    ///
    /// The fetches run together and are awaited jointly. A failing
    /// collection comes back empty and contributes a message to
    /// `load_errors`; the other collections are unaffected.
    pub async fn refresh<G: Gateway>(portal: &Portal<G>) -> Self {
        let (jobs, employers, applicants) =
            futures::join!(portal.jobs(), portal.employers(), portal.applicants());

        let mut directory = Directory::default();
        match jobs {
            Ok(jobs) => directory.jobs = jobs,
            Err(e) => {
                tracing::error!("loading jobs: {e}");
                directory
                    .load_errors
                    .push("Failed to load jobs".to_string());
            }
        }
        match employers {
            Ok(employers) => directory.employers = employers,
            Err(e) => {
                tracing::error!("loading employers: {e}");
                directory
                    .load_errors
                    .push("Failed to load employers".to_string());
            }
        }
        match applicants {
            Ok(applicants) => directory.applicants = applicants,
            Err(e) => {
                tracing::error!("loading applicants: {e}");
                directory
                    .load_errors
                    .push("Failed to load applicants".to_string());
            }
        }
        directory
    }

    /// Full name of the employer with the given id, if it is loaded.
    pub fn employer_name(&self, employer_id: &str) -> Option<String> {
        self.employers
            .iter()
            .find(|e| e.id == employer_id)
            .map(|e| format!("{} {}", e.first_name, e.last_name))
    }

    pub fn add_job(&mut self, job: Job) {
        self.jobs.push(job);
    }

    pub fn remove_job(&mut self, job_id: &str) {
        self.jobs.retain(|j| j.id != job_id);
    }

    pub fn add_employer(&mut self, employer: Employer) {
        self.employers.push(employer);
    }

    pub fn add_applicant(&mut self, applicant: Applicant) {
        self.applicants.push(applicant);
    }

    pub fn remove_applicant(&mut self, applicant_id: &str) {
        self.applicants.retain(|a| a.id != applicant_id);
    }
}

/// Consume the `Signal<Directory>` from context.
pub fn use_directory() -> Signal<Directory> {
    use_context::<Signal<Directory>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::MemoryGateway;

    const JOBS: &str = r#"[{"id":"1","title":"Welder","employerId":"9"},
                           {"id":"2","title":"Baker","employerId":"8"}]"#;
    const EMPLOYERS: &str = r#"[{"id":"9","firstName":"Nine","lastName":"Corp"}]"#;
    const APPLICANTS: &str = r#"[{"id":"7","firstName":"Alan","lastName":"Turing"}]"#;

    fn portal() -> (Portal<MemoryGateway>, MemoryGateway) {
        let gateway = MemoryGateway::new();
        (Portal::new(gateway.clone()), gateway)
    }

    #[tokio::test]
    async fn test_refresh_populates_all_collections() {
        let (portal, gateway) = portal();
        gateway.respond("GET", "/jobs", JOBS);
        gateway.respond("GET", "/employers", EMPLOYERS);
        gateway.respond("GET", "/applicants", APPLICANTS);

        let directory = Directory::refresh(&portal).await;
        assert_eq!(directory.jobs.len(), 2);
        assert_eq!(directory.employers.len(), 1);
        assert_eq!(directory.applicants.len(), 1);
        assert!(directory.load_errors.is_empty());
    }

    #[tokio::test]
    async fn test_one_failed_collection_leaves_the_others() {
        let (portal, gateway) = portal();
        gateway.respond("GET", "/jobs", JOBS);
        gateway.fail("GET", "/employers", 500);
        gateway.respond("GET", "/applicants", APPLICANTS);

        let directory = Directory::refresh(&portal).await;
        assert_eq!(directory.jobs.len(), 2);
        assert!(directory.employers.is_empty());
        assert_eq!(directory.applicants.len(), 1);
        assert_eq!(directory.load_errors, vec!["Failed to load employers"]);
    }

    #[tokio::test]
    async fn test_multiple_failures_all_reported() {
        let (portal, gateway) = portal();
        gateway.fail("GET", "/jobs", 500);
        gateway.respond("GET", "/employers", EMPLOYERS);
        gateway.fail("GET", "/applicants", 503);

        let directory = Directory::refresh(&portal).await;
        assert_eq!(
            directory.load_errors,
            vec!["Failed to load jobs", "Failed to load applicants"]
        );
        assert_eq!(directory.employers.len(), 1);
    }

    #[tokio::test]
    async fn test_removals_keep_relative_order() {
        let (portal, gateway) = portal();
        gateway.respond("GET", "/jobs", JOBS);
        gateway.respond("GET", "/employers", EMPLOYERS);
        gateway.respond("GET", "/applicants", APPLICANTS);

        let mut directory = Directory::refresh(&portal).await;
        directory.add_job(Job {
            id: "3".to_string(),
            title: "Glazier".to_string(),
            employer_id: "9".to_string(),
        });
        directory.remove_job("1");

        let titles: Vec<&str> = directory.jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Baker", "Glazier"]);
    }

    #[test]
    fn test_employer_name_lookup() {
        let directory = Directory {
            employers: vec![Employer {
                id: "9".to_string(),
                first_name: "Nine".to_string(),
                last_name: "Corp".to_string(),
            }],
            ..Default::default()
        };
        assert_eq!(directory.employer_name("9").as_deref(), Some("Nine Corp"));
        assert_eq!(directory.employer_name("8"), None);
    }
}
