use crate::domain::issue::{DEFAULT_ISSUE_TYPE, IssueTemplate};

/// Project the batch targets when neither a flag nor the environment names one.
pub const DEFAULT_PROJECT_KEY: &str = "BB";

/// The fixed batch, created in declaration order.
pub static ISSUE_TEMPLATES: [IssueTemplate; 6] = [
    IssueTemplate {
        summary: "Set up Playwright E2E testing infrastructure",
        description: r#"Summary
=======
Set up end-to-end testing infrastructure using Playwright to test the Beyond Burndown gadget UI.

Background
==========
We need E2E tests to verify the gadget functionality works correctly across browsers and simulates real user interactions. Unit tests are in place (440 total), but we need integration/E2E tests for complete coverage.

Completed Work
==============
- Installed Playwright and configured for multi-browser testing
- Created initial E2E test suite in e2e/gadget.spec.js
- Created mock data helpers in e2e/fixtures/forge-mock.js
- Added npm scripts for running tests

Test Coverage
=============
- Gadget loading states (loading, error, success)
- Tab navigation (all 7 tabs)
- Summary bar display
- What-If panel functionality
- Export menu
- Feasibility chart
- Accessibility checks

How to Run
==========
npm run test:e2e        # Run all tests
npm run test:e2e:ui     # Interactive UI mode
npm run test:e2e:headed # Visible browser
npm run test:e2e:report # View report"#,
        issue_type: DEFAULT_ISSUE_TYPE,
        labels: &["testing", "e2e", "playwright"],
    },
    IssueTemplate {
        summary: "Set up Forge bridge mocking for E2E tests",
        description: r#"Summary
=======
Implement proper Forge bridge mocking so E2E tests can run without a live Jira connection.

Requirements
============
- Mock @forge/bridge invoke() function
- Mock view.getContext() for edit/view mode detection
- Mock view.submit() and view.close() for config panel
- Support different mock data scenarios

Acceptance Criteria
==================
- E2E tests run successfully without Jira connection
- Can simulate different data states (loading, error, empty, full data)
- Mock data is realistic and covers edge cases"#,
        issue_type: DEFAULT_ISSUE_TYPE,
        labels: &["testing", "e2e", "mocking"],
    },
    IssueTemplate {
        summary: "Add CI/CD pipeline integration for E2E tests",
        description: r#"Summary
=======
Integrate Playwright E2E tests into the CI/CD pipeline.

Requirements
============
- Run E2E tests on pull requests
- Run E2E tests before deployment
- Generate and archive test reports
- Fail build on test failures

Tasks
=====
- Create GitHub Actions workflow for E2E tests
- Configure Playwright for CI environment
- Set up artifact storage for test reports
- Add status badges to README

Acceptance Criteria
==================
- E2E tests run automatically on PRs
- Test results are visible in PR checks
- Reports are accessible for debugging failures"#,
        issue_type: DEFAULT_ISSUE_TYPE,
        labels: &["testing", "e2e", "ci-cd", "github-actions"],
    },
    IssueTemplate {
        summary: "Create Jira integration E2E tests",
        description: r#"Summary
=======
Create E2E tests that verify the gadget works correctly when integrated with Jira.

Test Scenarios
==============
- Gadget loads correctly on Jira dashboard
- JQL queries return expected data
- Config panel saves settings correctly
- Data refreshes when issues change
- Edit mode vs view mode behavior

Requirements
============
- Test against a dedicated test Jira project
- Use realistic test data
- Test error handling (invalid JQL, permissions, etc.)

Acceptance Criteria
==================
- Tests cover main Jira integration flows
- Tests are stable and not flaky
- Can run against staging environment"#,
        issue_type: DEFAULT_ISSUE_TYPE,
        labels: &["testing", "e2e", "jira-integration"],
    },
    IssueTemplate {
        summary: "Add visual regression testing",
        description: r#"Summary
=======
Implement visual regression testing to catch unintended UI changes.

Requirements
============
- Capture baseline screenshots for all views
- Compare against baselines on each test run
- Highlight visual differences
- Easy baseline update workflow

Views to Test
=============
- Feasibility chart (daily, weekly, monthly views)
- What-If panel (all scenario types)
- Compliance panel (with and without violations)
- Dependencies view (with and without cycles)
- Team health view
- Status report
- Config panel

Acceptance Criteria
==================
- Visual tests catch CSS/layout regressions
- False positives are minimized
- Baseline updates are easy to review and approve"#,
        issue_type: DEFAULT_ISSUE_TYPE,
        labels: &["testing", "e2e", "visual-regression"],
    },
    IssueTemplate {
        summary: "Add mobile and tablet viewport E2E tests",
        description: r#"Summary
=======
Add E2E tests for different viewport sizes to ensure responsive design works correctly.

Viewports to Test
=================
- Mobile (375x667 - iPhone SE)
- Mobile Large (414x896 - iPhone 11)
- Tablet (768x1024 - iPad)
- Desktop (1280x720)
- Desktop Large (1920x1080)

Requirements
============
- Test main flows on each viewport
- Verify responsive breakpoints work correctly
- Check touch interactions on mobile viewports

Acceptance Criteria
==================
- All viewports pass E2E tests
- No horizontal scrolling on mobile
- Touch targets are appropriately sized"#,
        issue_type: DEFAULT_ISSUE_TYPE,
        labels: &["testing", "e2e", "responsive", "mobile"],
    },
];
