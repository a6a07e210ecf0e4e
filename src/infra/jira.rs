use std::error::Error as _;

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::DescriptionFormat;
use crate::domain::credentials::Credentials;
use crate::domain::issue::{CreationResult, IssueTemplate};
use crate::services::IssueTrackerService;

pub struct JiraClient {
    http: Client,
    credentials: Credentials,
    description_format: DescriptionFormat,
}

impl JiraClient {
    pub fn new(credentials: Credentials, description_format: DescriptionFormat) -> Self {
        Self {
            http: Client::new(),
            credentials,
            description_format,
        }
    }

    pub fn issue_endpoint(&self) -> String {
        format!(
            "{}/rest/api/{}/issue",
            self.credentials.base_url(),
            self.description_format.api_version()
        )
    }

    // The probe stays on v2 regardless of the description format.
    fn project_endpoint(&self, project_key: &str) -> String {
        format!(
            "{}/rest/api/2/project/{}",
            self.credentials.base_url(),
            project_key
        )
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn project_exists(&self, project_key: &str) -> bool {
        let url = self.project_endpoint(project_key);
        debug!(%url, "probing project");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.credentials.auth_header())
            .header(ACCEPT, "application/json")
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!(project = project_key, status = %response.status(), "project probe rejected");
                false
            }
            Err(err) => {
                warn!(project = project_key, error = %describe_transport_error(&err), "project probe failed");
                false
            }
        }
    }

    async fn create_issue(&self, project_key: &str, template: &IssueTemplate) -> CreationResult {
        let url = self.issue_endpoint();
        let request_body =
            JiraCreateIssueRequest::new(project_key, template, self.description_format);
        debug!(%url, summary = template.summary, "creating issue");

        let response = match self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.credentials.auth_header())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                let detail = describe_transport_error(&err);
                warn!(%url, error = %detail, "failed to call Jira");
                return CreationResult::Failed { detail };
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            warn!(status = status.as_u16(), "Jira rejected issue");
            return CreationResult::Failed {
                detail: format!("{}: {body}", status.as_u16()),
            };
        }

        match response.json::<JiraCreateIssueResponse>().await {
            Ok(payload) => {
                debug!(key = %payload.key, "issue created");
                CreationResult::Created {
                    key: payload.key,
                    id: payload.id.into_string(),
                }
            }
            Err(err) => CreationResult::Failed {
                detail: format!("failed to parse Jira response: {err}"),
            },
        }
    }
}

/// Flattens the error chain; reqwest's top-level message omits the underlying cause.
fn describe_transport_error(err: &reqwest::Error) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}

#[derive(Serialize)]
struct JiraCreateIssueRequest {
    fields: JiraCreateIssueFields,
}

impl JiraCreateIssueRequest {
    fn new(project_key: &str, template: &IssueTemplate, format: DescriptionFormat) -> Self {
        Self {
            fields: JiraCreateIssueFields {
                project: JiraProject {
                    key: project_key.to_string(),
                },
                summary: template.summary.to_string(),
                description: JiraDescription::encode(template.description, format),
                issuetype: JiraIssueType {
                    name: template.issue_type.to_string(),
                },
                labels: template.labels.iter().map(|l| l.to_string()).collect(),
            },
        }
    }
}

#[derive(Serialize)]
struct JiraCreateIssueFields {
    project: JiraProject,
    summary: String,
    description: JiraDescription,
    issuetype: JiraIssueType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    labels: Vec<String>,
}

#[derive(Serialize)]
struct JiraProject {
    key: String,
}

#[derive(Serialize)]
struct JiraIssueType {
    name: String,
}

#[derive(Serialize)]
#[serde(untagged)]
enum JiraDescription {
    Plain(String),
    Document(JiraDocument),
}

impl JiraDescription {
    fn encode(description: &str, format: DescriptionFormat) -> Self {
        match format {
            DescriptionFormat::Plain => JiraDescription::Plain(description.to_string()),
            DescriptionFormat::Document => JiraDescription::Document(JiraDocument {
                doc_type: "doc",
                version: 1,
                content: vec![JiraDocNode::paragraph(description.to_string())],
            }),
        }
    }
}

#[derive(Serialize)]
struct JiraDocument {
    #[serde(rename = "type")]
    doc_type: &'static str,
    version: u8,
    content: Vec<JiraDocNode>,
}

#[derive(Serialize)]
struct JiraDocNode {
    #[serde(rename = "type")]
    node_type: &'static str,
    content: Vec<JiraDocText>,
}

impl JiraDocNode {
    fn paragraph(text: String) -> Self {
        Self {
            node_type: "paragraph",
            content: vec![JiraDocText::text(text)],
        }
    }
}

#[derive(Serialize)]
struct JiraDocText {
    #[serde(rename = "type")]
    text_type: &'static str,
    text: String,
}

impl JiraDocText {
    fn text(text: String) -> Self {
        Self {
            text_type: "text",
            text,
        }
    }
}

#[derive(Deserialize)]
struct JiraCreateIssueResponse {
    key: String,
    id: JiraIssueId,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JiraIssueId {
    Text(String),
    Number(u64),
}

impl JiraIssueId {
    fn into_string(self) -> String {
        match self {
            JiraIssueId::Text(id) => id,
            JiraIssueId::Number(id) => id.to_string(),
        }
    }
}
