use crate::domain::credentials::Credentials;
use crate::error::{AppError, AppResult};

pub const JIRA_URL: &str = "JIRA_URL";
pub const JIRA_EMAIL: &str = "JIRA_EMAIL";
pub const JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";
pub const JIRA_PROJECT_KEY: &str = "JIRA_PROJECT_KEY";
pub const JIRA_API_VERSION: &str = "JIRA_API_VERSION";

/// How the issue description is encoded, which also selects the REST API version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DescriptionFormat {
    /// Plain string, `/rest/api/2`.
    Plain,
    /// Single-paragraph rich-text document, `/rest/api/3`.
    #[default]
    Document,
}

impl DescriptionFormat {
    pub fn api_version(&self) -> u8 {
        match self {
            DescriptionFormat::Plain => 2,
            DescriptionFormat::Document => 3,
        }
    }

    pub fn from_api_version(value: &str) -> Option<Self> {
        match value.trim().trim_start_matches(['v', 'V']) {
            "2" => Some(DescriptionFormat::Plain),
            "3" => Some(DescriptionFormat::Document),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Credentials,
    pub default_project: Option<String>,
    pub description_format: Option<DescriptionFormat>,
}

impl AppConfig {
    /// Resolves configuration through `lookup`; empty values count as absent.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let base_url = read(JIRA_URL);
        let email = read(JIRA_EMAIL);
        let api_token = read(JIRA_API_TOKEN);

        let (base_url, email, api_token) = match (base_url, email, api_token) {
            (Some(base_url), Some(email), Some(api_token)) => (base_url, email, api_token),
            (base_url, email, api_token) => {
                let missing = [
                    (JIRA_URL, base_url.is_none()),
                    (JIRA_EMAIL, email.is_none()),
                    (JIRA_API_TOKEN, api_token.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                return Err(AppError::MissingConfiguration(missing));
            }
        };

        let description_format = read(JIRA_API_VERSION)
            .map(|value| {
                DescriptionFormat::from_api_version(&value).ok_or_else(|| {
                    AppError::Configuration(format!(
                        "{JIRA_API_VERSION} must be 2 or 3, got '{value}'"
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            credentials: Credentials::new(&base_url, email, api_token),
            default_project: read(JIRA_PROJECT_KEY).map(|key| key.trim().to_string()),
            description_format,
        })
    }
}
