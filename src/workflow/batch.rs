use tracing::{info, warn};

use crate::context::AppContext;
use crate::domain::issue::{BatchReport, CreatedIssue, CreationResult, FailedIssue, IssueTemplate};
use crate::error::{AppError, AppResult};

/// One finished attempt, handed to the caller as the batch advances.
pub struct BatchProgress<'a> {
    pub position: usize,
    pub total: usize,
    pub template: &'a IssueTemplate,
    pub result: &'a CreationResult,
}

pub async fn ensure_project_accessible(ctx: &AppContext, project_key: &str) -> AppResult<()> {
    if ctx.issue_tracker.project_exists(project_key).await {
        Ok(())
    } else {
        Err(AppError::ProjectInaccessible(project_key.to_string()))
    }
}

/// Creates every template once, in order. Nothing is deduplicated: a second run
/// against the same project creates a second copy of each issue.
pub async fn run_batch<F>(
    ctx: &AppContext,
    project_key: &str,
    templates: &[IssueTemplate],
    mut on_progress: F,
) -> BatchReport
where
    F: FnMut(BatchProgress<'_>),
{
    let mut report = BatchReport::default();
    let total = templates.len();

    for (index, template) in templates.iter().enumerate() {
        let result = ctx.issue_tracker.create_issue(project_key, template).await;

        on_progress(BatchProgress {
            position: index + 1,
            total,
            template,
            result: &result,
        });

        match result {
            CreationResult::Created { key, id } => {
                info!(%key, %id, "issue created");
                let url = ctx.config.credentials.browse_url(&key);
                report.created.push(CreatedIssue {
                    key,
                    id,
                    summary: template.summary.to_string(),
                    url,
                });
            }
            CreationResult::Failed { detail } => {
                warn!(summary = template.summary, "issue not created");
                report.failed.push(FailedIssue {
                    summary: template.summary.to_string(),
                    detail,
                });
            }
        }
    }

    info!(
        created = report.created.len(),
        failed = report.failed.len(),
        "batch finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

    use super::*;
    use crate::config::{AppConfig, DescriptionFormat};
    use crate::domain::credentials::Credentials;
    use crate::domain::templates::ISSUE_TEMPLATES;
    use crate::infra::jira::JiraClient;
    use crate::services::IssueTrackerService;

    const BASE_URL: &str = "https://x.atlassian.net";

    struct FakeTracker {
        project_found: bool,
        reject_position: Option<usize>,
        attempts: Mutex<Vec<String>>,
    }

    impl FakeTracker {
        fn new(project_found: bool, reject_position: Option<usize>) -> Self {
            Self {
                project_found,
                reject_position,
                attempts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl IssueTrackerService for FakeTracker {
        async fn project_exists(&self, _project_key: &str) -> bool {
            self.project_found
        }

        async fn create_issue(&self, project_key: &str, template: &IssueTemplate) -> CreationResult {
            let mut attempts = self.attempts.lock().unwrap();
            attempts.push(template.summary.to_string());
            let n = attempts.len();
            if self.reject_position == Some(n) {
                CreationResult::Failed {
                    detail: r#"400: {"errorMessages":["bad request"]}"#.to_string(),
                }
            } else {
                CreationResult::Created {
                    key: format!("{project_key}-{n}"),
                    id: n.to_string(),
                }
            }
        }
    }

    fn config_for(base_url: &str) -> AppConfig {
        AppConfig {
            credentials: Credentials::new(base_url, "a@b.com", "tok123"),
            default_project: None,
            description_format: None,
        }
    }

    fn context_with(tracker: Arc<dyn IssueTrackerService>, base_url: &str) -> AppContext {
        AppContext::new(config_for(base_url), tracker)
    }

    #[tokio::test]
    async fn creates_every_template_in_declaration_order() {
        let tracker = Arc::new(FakeTracker::new(true, None));
        let ctx = context_with(tracker.clone(), BASE_URL);

        let mut positions = Vec::new();
        let report = run_batch(&ctx, "BB", &ISSUE_TEMPLATES, |progress| {
            positions.push((progress.position, progress.total));
        })
        .await;

        assert!(report.is_success());
        assert_eq!(report.created.len(), 6);
        for (n, created) in report.created.iter().enumerate() {
            let key = format!("BB-{}", n + 1);
            assert_eq!(created.key, key);
            assert_eq!(created.summary, ISSUE_TEMPLATES[n].summary);
            assert_eq!(created.url, format!("{BASE_URL}/browse/{key}"));
        }
        assert_eq!(positions, (1..=6).map(|p| (p, 6)).collect::<Vec<_>>());

        let attempted = tracker.attempts.lock().unwrap().clone();
        let expected = ISSUE_TEMPLATES
            .iter()
            .map(|t| t.summary.to_string())
            .collect::<Vec<_>>();
        assert_eq!(attempted, expected);
    }

    #[tokio::test]
    async fn keeps_going_after_a_rejected_issue() {
        let tracker = Arc::new(FakeTracker::new(true, Some(3)));
        let ctx = context_with(tracker.clone(), BASE_URL);

        let report = run_batch(&ctx, "BB", &ISSUE_TEMPLATES, |_| {}).await;

        assert_eq!(report.created.len(), 5);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.total(), 6);
        assert_eq!(report.failed[0].summary, ISSUE_TEMPLATES[2].summary);
        assert_eq!(tracker.attempts.lock().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn running_twice_creates_twice() {
        let tracker = Arc::new(FakeTracker::new(true, None));
        let ctx = context_with(tracker.clone(), BASE_URL);

        run_batch(&ctx, "BB", &ISSUE_TEMPLATES, |_| {}).await;
        let second = run_batch(&ctx, "BB", &ISSUE_TEMPLATES, |_| {}).await;

        assert_eq!(second.created.len(), 6);
        assert_eq!(second.created[0].key, "BB-7");
        assert_eq!(tracker.attempts.lock().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn inaccessible_project_is_an_error() {
        let ctx = context_with(Arc::new(FakeTracker::new(false, None)), BASE_URL);

        let err = ensure_project_accessible(&ctx, "BB").await.unwrap_err();

        assert!(matches!(err, AppError::ProjectInaccessible(ref key) if key == "BB"));
    }

    struct SequentialKeys(AtomicUsize);

    impl Respond for SequentialKeys {
        fn respond(&self, _request: &Request) -> ResponseTemplate {
            let n = self.0.fetch_add(1, Ordering::SeqCst) + 1;
            ResponseTemplate::new(201).set_body_json(json!({ "key": format!("BB-{n}"), "id": n }))
        }
    }

    #[tokio::test]
    async fn preserves_keys_from_the_tracker_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/api/3/issue"))
            .respond_with(SequentialKeys(AtomicUsize::new(0)))
            .expect(6)
            .mount(&server)
            .await;

        let ctx = context_with(
            Arc::new(JiraClient::new(
                Credentials::new(&server.uri(), "a@b.com", "tok123"),
                DescriptionFormat::Document,
            )),
            &server.uri(),
        );
        let report = run_batch(&ctx, "BB", &ISSUE_TEMPLATES, |_| {}).await;

        assert_eq!(report.created.len(), 6);
        for (n, created) in report.created.iter().enumerate() {
            assert_eq!(created.key, format!("BB-{}", n + 1));
            assert_eq!(created.id, (n + 1).to_string());
            assert_eq!(
                created.url,
                format!("{}/browse/BB-{}", server.uri(), n + 1)
            );
        }
    }

    #[tokio::test]
    async fn records_status_and_body_of_a_rejected_issue() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/api/2/issue"))
            .and(body_partial_json(
                json!({ "fields": { "summary": ISSUE_TEMPLATES[2].summary } }),
            ))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"errorMessages":["bad request"]}"#),
            )
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/rest/api/2/issue"))
            .respond_with(SequentialKeys(AtomicUsize::new(0)))
            .expect(5)
            .mount(&server)
            .await;

        let ctx = context_with(
            Arc::new(JiraClient::new(
                Credentials::new(&server.uri(), "a@b.com", "tok123"),
                DescriptionFormat::Plain,
            )),
            &server.uri(),
        );
        let report = run_batch(&ctx, "BB", &ISSUE_TEMPLATES, |_| {}).await;

        assert_eq!(report.created.len(), 5);
        assert_eq!(report.failed.len(), 1);
        let failed = &report.failed[0];
        assert_eq!(failed.summary, ISSUE_TEMPLATES[2].summary);
        assert!(failed.detail.contains("400"));
        assert!(failed.detail.contains("bad request"));
    }
}
