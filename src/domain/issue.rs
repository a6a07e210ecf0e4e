pub const DEFAULT_ISSUE_TYPE: &str = "Task";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTemplate {
    pub summary: &'static str,
    pub description: &'static str,
    pub issue_type: &'static str,
    pub labels: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationResult {
    Created { key: String, id: String },
    Failed { detail: String },
}

#[derive(Debug, Clone)]
pub struct CreatedIssue {
    pub key: String,
    pub id: String,
    pub summary: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct FailedIssue {
    pub summary: String,
    pub detail: String,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub created: Vec<CreatedIssue>,
    pub failed: Vec<FailedIssue>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.created.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
