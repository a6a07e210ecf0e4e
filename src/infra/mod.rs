pub mod jira;
pub mod logging;
