use crate::config::{JIRA_API_TOKEN, JIRA_API_VERSION, JIRA_EMAIL, JIRA_PROJECT_KEY, JIRA_URL};
use crate::domain::credentials::mask_secret;

/// Prints what the environment currently provides, secrets masked.
pub fn run<F>(lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    for (name, value) in describe(lookup) {
        println!("{name}: {value}");
    }
}

fn describe<F>(lookup: F) -> Vec<(&'static str, String)>
where
    F: Fn(&str) -> Option<String>,
{
    let token = lookup(JIRA_API_TOKEN).unwrap_or_default();

    vec![
        (JIRA_URL, display_value(lookup(JIRA_URL))),
        (JIRA_EMAIL, display_value(lookup(JIRA_EMAIL))),
        (JIRA_API_TOKEN, mask_secret(token.trim())),
        (JIRA_PROJECT_KEY, display_value(lookup(JIRA_PROJECT_KEY))),
        (JIRA_API_VERSION, display_value(lookup(JIRA_API_VERSION))),
    ]
}

fn display_value(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "<not set>".to_string())
}
