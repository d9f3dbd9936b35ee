//! Per-job applicant lists for the expandable panel on the jobs tab.
//!
//! [`ApplicantRoster`] is a lazy cache: a job's applicant list is only
//! fetched the first time its panel is expanded, and the fetched list is
//! kept across collapse and re-expand. At most one panel is open at a
//! time.
//!
//! Fetches complete asynchronously while the user keeps clicking, so every
//! state transition bumps an epoch counter and completions carry the epoch
//! they were started under. A completion whose epoch no longer matches is
//! dropped instead of being installed under whatever panel happens to be
//! open by then.

use std::collections::HashMap;

use api::{Applicant, ApplyError, Gateway, Portal};
use dioxus::prelude::*;

/// Cached applicant lists plus the expansion state of the jobs tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicantRoster {
    entries: HashMap<String, Vec<Applicant>>,
    expanded: Option<String>,
    loading: bool,
    epoch: u64,
}

/// Outcome of a [`toggle`](ApplicantRoster::toggle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Toggle {
    /// The open panel closed. Cached entries are retained.
    Collapsed,
    /// A panel opened. `fetch` carries the epoch to commit under when the
    /// job has no cached entry yet; `None` means the cache already serves.
    Expanded { fetch: Option<u64> },
}

impl ApplicantRoster {
    /// The job whose panel is currently open.
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, job_id: &str) -> bool {
        self.expanded.as_deref() == Some(job_id)
    }

    /// Cached applicants for a job. `None` until the first fetch commits.
    pub fn applicants(&self, job_id: &str) -> Option<&[Applicant]> {
        self.entries.get(job_id).map(Vec::as_slice)
    }

    /// Whether a fetch for the open panel is still in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The epoch a commit started right now would have to carry.
    pub fn current_epoch(&self) -> u64 {
        self.epoch
    }

    /// Open the panel for `job_id`, closing it if it was already open and
    /// closing any other open panel otherwise.
    ///
    /// Every call advances the epoch, so whatever fetch was in flight
    /// before the click can no longer commit.
    pub fn toggle(&mut self, job_id: &str) -> Toggle {
        self.epoch += 1;
        self.loading = false;
        if self.is_expanded(job_id) {
            self.expanded = None;
            return Toggle::Collapsed;
        }
        self.expanded = Some(job_id.to_string());
        if self.entries.contains_key(job_id) {
            Toggle::Expanded { fetch: None }
        } else {
            self.loading = true;
            Toggle::Expanded { fetch: Some(self.epoch) }
        }
    }

    /// Install a fetched list, replacing any cached entry for the job.
    ///
    /// A completion from a superseded epoch is dropped whole.
    pub fn commit(&mut self, job_id: &str, epoch: u64, applicants: Vec<Applicant>) {
        if epoch != self.epoch {
            return;
        }
        self.loading = false;
        self.entries.insert(job_id.to_string(), applicants);
    }

    /// Mark a failed fetch as finished. The panel stays open and shows
    /// whatever the cache holds.
    pub fn settle(&mut self, epoch: u64) {
        if epoch == self.epoch {
            self.loading = false;
        }
    }
}

/// Apply to a job on behalf of the signed-in user.
///
/// Nothing is sent when no user id is available. On success with `refresh`
/// set, the job's applicant list is fetched again and returned so the
/// caller can commit it; without `refresh` (panel closed) the cached entry
/// is left alone until the next expand. A failed refresh after a
/// successful application is logged and swallowed, the next expand will
/// resynchronize.
pub async fn submit_application<G: Gateway>(
    portal: &Portal<G>,
    user_id: Option<&str>,
    job_id: &str,
    refresh: bool,
) -> Result<Option<Vec<Applicant>>, ApplyError> {
    let Some(applicant_id) = user_id else {
        return Err(ApplyError::NotSignedIn);
    };
    portal.apply(applicant_id, job_id).await?;
    if !refresh {
        return Ok(None);
    }
    match portal.job_applicants(job_id).await {
        Ok(applicants) => Ok(Some(applicants)),
        Err(e) => {
            tracing::warn!("refreshing applications for job {job_id}: {e}");
            Ok(None)
        }
    }
}

/// Consume the `Signal<ApplicantRoster>` from context.
pub fn use_roster() -> Signal<ApplicantRoster> {
    use_context::<Signal<ApplicantRoster>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiError, MemoryGateway};

    fn applicant(id: &str) -> Applicant {
        Applicant {
            id: id.to_string(),
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
        }
    }

    #[test]
    fn test_first_expand_requests_a_fetch() {
        let mut roster = ApplicantRoster::default();
        let toggle = roster.toggle("42");
        assert!(matches!(toggle, Toggle::Expanded { fetch: Some(_) }));
        assert!(roster.is_expanded("42"));
        assert!(roster.loading());
        assert_eq!(roster.applicants("42"), None);
    }

    #[test]
    fn test_expand_collapse_expand_reuses_cache() {
        let mut roster = ApplicantRoster::default();
        let Toggle::Expanded { fetch: Some(epoch) } = roster.toggle("42") else {
            panic!("expected a fetch");
        };
        roster.commit("42", epoch, vec![applicant("7")]);

        assert_eq!(roster.toggle("42"), Toggle::Collapsed);
        assert_eq!(roster.expanded(), None);

        // Cached: second expand serves without a fetch.
        assert_eq!(roster.toggle("42"), Toggle::Expanded { fetch: None });
        assert!(!roster.loading());
        assert_eq!(roster.applicants("42").unwrap().len(), 1);
    }

    #[test]
    fn test_expanding_another_job_closes_the_first() {
        let mut roster = ApplicantRoster::default();
        roster.toggle("1");
        let toggle = roster.toggle("2");

        assert!(matches!(toggle, Toggle::Expanded { fetch: Some(_) }));
        assert!(roster.is_expanded("2"));
        assert!(!roster.is_expanded("1"));
    }

    #[test]
    fn test_commit_replaces_rather_than_merges() {
        let mut roster = ApplicantRoster::default();
        let Toggle::Expanded { fetch: Some(epoch) } = roster.toggle("42") else {
            panic!("expected a fetch");
        };
        roster.commit("42", epoch, vec![applicant("7"), applicant("8")]);

        // Simulate a later refresh that saw a shorter server list.
        let epoch = roster.current_epoch();
        roster.commit("42", epoch, vec![applicant("8")]);

        let ids: Vec<&str> = roster
            .applicants("42")
            .unwrap()
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["8"]);
    }

    #[test]
    fn test_stale_commit_after_collapse_is_dropped() {
        let mut roster = ApplicantRoster::default();
        let Toggle::Expanded { fetch: Some(epoch) } = roster.toggle("42") else {
            panic!("expected a fetch");
        };
        roster.toggle("42");

        roster.commit("42", epoch, vec![applicant("7")]);
        assert_eq!(roster.applicants("42"), None);
        assert!(!roster.loading());
    }

    #[test]
    fn test_stale_commit_after_switching_jobs_is_dropped() {
        let mut roster = ApplicantRoster::default();
        let Toggle::Expanded { fetch: Some(old_epoch) } = roster.toggle("1") else {
            panic!("expected a fetch");
        };
        let Toggle::Expanded { fetch: Some(new_epoch) } = roster.toggle("2") else {
            panic!("expected a fetch");
        };

        // The fetch for job 1 lands late. It must not fill job 1's entry
        // or clear the spinner for job 2.
        roster.commit("1", old_epoch, vec![applicant("7")]);
        assert_eq!(roster.applicants("1"), None);
        assert!(roster.loading());

        roster.commit("2", new_epoch, vec![applicant("8")]);
        assert_eq!(roster.applicants("2").unwrap().len(), 1);
        assert!(!roster.loading());
    }

    #[test]
    fn test_settle_only_clears_current_epoch() {
        let mut roster = ApplicantRoster::default();
        let Toggle::Expanded { fetch: Some(old_epoch) } = roster.toggle("1") else {
            panic!("expected a fetch");
        };
        roster.toggle("2");

        roster.settle(old_epoch);
        assert!(roster.loading());

        roster.settle(roster.current_epoch());
        assert!(!roster.loading());
    }

    #[tokio::test]
    async fn test_apply_without_user_sends_nothing() {
        let gateway = MemoryGateway::new();
        let portal = Portal::new(gateway.clone());

        let err = submit_application(&portal, None, "42", true)
            .await
            .unwrap_err();
        assert_eq!(err, ApplyError::NotSignedIn);
        assert!(gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn test_apply_with_open_panel_returns_server_list() {
        let gateway = MemoryGateway::new();
        let portal = Portal::new(gateway.clone());
        gateway.respond("POST", "/applications/7/42", "");
        gateway.respond(
            "GET",
            "/applications/42",
            r#"[{"id":"7","firstName":"Alan","lastName":"Turing"}]"#,
        );

        let refreshed = submit_application(&portal, Some("7"), "42", true)
            .await
            .unwrap();
        let refreshed = refreshed.expect("open panel should refresh");
        assert_eq!(refreshed.len(), 1);
        assert_eq!(
            gateway.requests(),
            vec!["POST /applications/7/42", "GET /applications/42"]
        );
    }

    #[tokio::test]
    async fn test_apply_with_closed_panel_skips_refresh() {
        let gateway = MemoryGateway::new();
        let portal = Portal::new(gateway.clone());
        gateway.respond("POST", "/applications/7/42", "");

        let refreshed = submit_application(&portal, Some("7"), "42", false)
            .await
            .unwrap();
        assert_eq!(refreshed, None);
        assert_eq!(gateway.requests(), vec!["POST /applications/7/42"]);
    }

    #[tokio::test]
    async fn test_failed_application_surfaces_the_error() {
        let gateway = MemoryGateway::new();
        let portal = Portal::new(gateway.clone());
        gateway.fail("POST", "/applications/7/42", 500);

        let err = submit_application(&portal, Some("7"), "42", true)
            .await
            .unwrap_err();
        assert_eq!(err, ApplyError::Request(ApiError::Status(500)));
        // The refresh never ran.
        assert_eq!(gateway.requests(), vec!["POST /applications/7/42"]);
    }

    #[tokio::test]
    async fn test_failed_refresh_after_successful_application() {
        let gateway = MemoryGateway::new();
        let portal = Portal::new(gateway.clone());
        gateway.respond("POST", "/applications/7/42", "");
        gateway.fail("GET", "/applications/42", 500);

        let refreshed = submit_application(&portal, Some("7"), "42", true)
            .await
            .unwrap();
        assert_eq!(refreshed, None);
    }
}
