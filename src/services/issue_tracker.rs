use async_trait::async_trait;

use crate::domain::issue::{CreationResult, IssueTemplate};

/// Remote issue tracker. Every call is a single attempt; failures are reported, never retried.
#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    /// Best-effort probe: `false` covers missing, unauthorized and unreachable alike.
    async fn project_exists(&self, project_key: &str) -> bool;

    async fn create_issue(&self, project_key: &str, template: &IssueTemplate) -> CreationResult;
}
