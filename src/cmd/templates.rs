use crate::domain::templates::ISSUE_TEMPLATES;

pub fn run() {
    for (index, template) in ISSUE_TEMPLATES.iter().enumerate() {
        println!("{}. {} [{}]", index + 1, template.summary, template.issue_type);
        if !template.labels.is_empty() {
            println!("   labels: {}", template.labels.join(", "));
        }
    }
}
