use std::sync::Arc;

use comfy_table::{Table, presets};

use crate::cmd::templates;
use crate::config::{self, AppConfig, DescriptionFormat};
use crate::context::AppContext;
use crate::domain::issue::{BatchReport, CreationResult};
use crate::domain::templates::{DEFAULT_PROJECT_KEY, ISSUE_TEMPLATES};
use crate::error::{AppError, AppResult};
use crate::infra::jira::JiraClient;
use crate::workflow::batch::{BatchProgress, ensure_project_accessible, run_batch};

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Default)]
pub struct CreateCommandArgs {
    pub project: Option<String>,
    pub description_format: Option<DescriptionFormat>,
    pub skip_project_check: bool,
    pub dry_run: bool,
}

/// Resolves configuration through `lookup` and runs the batch. Configuration is
/// validated before the HTTP client exists, so a missing value never reaches the network.
pub async fn run<F>(args: CreateCommandArgs, lookup: F) -> AppResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match AppConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(AppError::MissingConfiguration(missing)) => {
            print_setup_hints(&missing);
            return Err(AppError::MissingConfiguration(missing));
        }
        Err(err) => return Err(err),
    };

    let project_key = args
        .project
        .or_else(|| config.default_project.clone())
        .unwrap_or_else(|| DEFAULT_PROJECT_KEY.to_string());
    if project_key.trim().is_empty() {
        return Err(AppError::Configuration(
            "project key must not be empty".to_string(),
        ));
    }
    let format = args
        .description_format
        .or(config.description_format)
        .unwrap_or_default();

    let jira = JiraClient::new(config.credentials.clone(), format);
    print_header(&config, &project_key, &jira.issue_endpoint());

    if args.dry_run {
        print_dry_run();
        return Ok(());
    }

    let context = AppContext::new(config, Arc::new(jira));

    if args.skip_project_check {
        println!("\nSkipping project check.");
    } else {
        println!("\nChecking project {project_key}...");
        if let Err(err) = ensure_project_accessible(&context, &project_key).await {
            println!("ERROR: Project '{project_key}' not found or not accessible.");
            println!("Check that:");
            println!("  1. The project key is correct");
            println!("  2. Your API token has access to this project");
            println!("  3. Your Jira URL is correct");
            return Err(err);
        }
        println!("  ✓ Project {project_key} found");
    }

    println!("\nCreating issues...");
    println!("{}", "-".repeat(RULE_WIDTH));

    let report = run_batch(&context, &project_key, &ISSUE_TEMPLATES, print_progress).await;
    print_summary(&report);

    if report.is_success() {
        println!("\n{}", "=".repeat(RULE_WIDTH));
        println!("Done!");
        Ok(())
    } else {
        Err(AppError::BatchFailed {
            failed: report.failed.len(),
            total: report.total(),
        })
    }
}

fn print_setup_hints(missing: &[&'static str]) {
    eprintln!("{}", "=".repeat(RULE_WIDTH));
    eprintln!("ERROR: Missing required environment variables");
    eprintln!("{}", "=".repeat(RULE_WIDTH));
    for name in missing {
        eprintln!("  - {name}");
    }
    eprintln!();
    eprintln!("Set them using:");
    eprintln!("  export {}=\"https://yoursite.atlassian.net\"", config::JIRA_URL);
    eprintln!("  export {}=\"your.email@example.com\"", config::JIRA_EMAIL);
    eprintln!("  export {}=\"your-api-token\"", config::JIRA_API_TOKEN);
    eprintln!();
    eprintln!("Get your API token at:");
    eprintln!("  https://id.atlassian.com/manage-profile/security/api-tokens");
    eprintln!("{}", "=".repeat(RULE_WIDTH));
}

fn print_header(config: &AppConfig, project_key: &str, endpoint: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Jira Issue Seeder");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Jira URL: {}", config.credentials.base_url());
    println!("Endpoint: {endpoint}");
    println!("Project:  {project_key}");
    println!("Issues:   {}", ISSUE_TEMPLATES.len());
    println!("{}", "-".repeat(RULE_WIDTH));
}

fn print_dry_run() {
    println!("\nDry run: no requests will be sent. Issues that would be created:");
    templates::run();
}

fn print_progress(progress: BatchProgress<'_>) {
    println!(
        "\n[{}/{}] {}",
        progress.position,
        progress.total,
        shorten(progress.template.summary, 45)
    );
    match progress.result {
        CreationResult::Created { key, .. } => println!("  ✓ Created: {key}"),
        CreationResult::Failed { detail } => println!("  ✗ Failed: {}", clip(detail, 100)),
    }
}

fn print_summary(report: &BatchReport) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("SUMMARY");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Created: {}", report.created.len());
    println!("Failed:  {}", report.failed.len());

    if !report.created.is_empty() {
        println!("\n✓ Created Issues:");
        println!("{}", created_table(report));
    }

    if !report.failed.is_empty() {
        println!("\n✗ Failed Issues:");
        for failed in &report.failed {
            println!("  - {}", failed.summary);
            println!("    {}", clip(&failed.detail, 100));
        }
    }
}

fn created_table(report: &BatchReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_header(vec!["Key", "ID", "Summary", "URL"]);

    for created in &report.created {
        table.add_row(vec![
            created.key.clone(),
            created.id.clone(),
            clip(&created.summary, 40),
            created.url.clone(),
        ]);
    }
    table
}

/// First `max` characters, with an ellipsis when anything was cut.
fn shorten(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", clip(text, max))
    } else {
        text.to_string()
    }
}

fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
