//! Common test utilities
//!
//! Shared fixtures for the integration tests: a mock page populated like a
//! small sample form, and short wait bounds so negative paths stay fast.

use std::sync::Arc;
use std::time::Duration;

use veneer_oxide::driver::mock::{MockNode, MockPage};
use veneer_oxide::{Rect, Timeouts};

/// Wait bounds tuned for tests
pub fn test_timeouts() -> Timeouts {
    Timeouts::new(Duration::from_millis(150), Duration::from_millis(300))
}

/// Build a mock page resembling a small sample form
pub async fn sample_form_page() -> Arc<MockPage> {
    let page = MockPage::new();

    page.insert(
        "#submitButton",
        MockNode::new("button")
            .with_text("Submit")
            .with_attribute("class", "btn btn-primary")
            .with_attribute("title", "Submit the form")
            .with_bounds(Rect::new(40.0, 300.0, 120.0, 36.0)),
    )
    .await;

    page.insert(
        "#agreeCheckbox",
        MockNode::new("input").with_attribute("type", "checkbox"),
    )
    .await;

    page.insert(
        "#emailLabel",
        MockNode::new("label")
            .with_text("  Email  ")
            .with_attribute("for", "email")
            .with_style("color", "rgb(33, 37, 41)"),
    )
    .await;

    page.insert(
        "#userName",
        MockNode::new("input")
            .with_attribute("type", "text")
            .with_attribute("placeholder", "Full name")
            .with_attribute("maxlength", "64"),
    )
    .await;

    page.insert("#commentsArea", MockNode::new("textarea")).await;

    page.insert(
        "#colorSelect",
        MockNode::new("select").with_options(vec![
            "Red",
            "Blue",
            "Green",
            "Yellow",
            "Purple",
            "Black",
            "White",
        ]),
    )
    .await;

    page.insert(
        "#maleRadio",
        MockNode::new("input")
            .with_attribute("type", "radio")
            .with_attribute("name", "gender")
            .with_attribute("value", "male"),
    )
    .await;

    Arc::new(page)
}

/// Initialize tracing output for tests that want it
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init();
}
