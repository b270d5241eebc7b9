use luma_scout::scrape::{extract_details, harvest_links};
use luma_scout::{BrowserSession, LaunchOptions};
use std::time::Duration;

const WAIT: Duration = Duration::from_millis(500);

fn launch() -> BrowserSession {
    BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser")
}

#[test]
#[ignore] // Requires Chrome to be installed; run with: cargo test -- --ignored
fn test_extract_details_from_static_page() {
    let session = launch();

    let html = concat!(
        "<html><body>",
        "<h1>AI Builders Meetup</h1>",
        "<div class='speaker'>Jane Doe<br>CEO, Acme</div>",
        "<div class='description'>An evening of talks and demos.</div>",
        "</body></html>"
    );
    let url = format!("data:text/html,{}", html);

    let record = extract_details(&session, &url, WAIT, false);

    assert_eq!(record.title, "AI Builders Meetup");
    assert_eq!(record.speakers.len(), 1);
    assert_eq!(record.speakers[0].name, "Jane Doe");
    assert_eq!(record.speakers[0].title_company, "CEO, Acme");
    assert_eq!(record.summary, "An evening of talks and demos.");
    assert_eq!(record.url, url);
}

#[test]
#[ignore]
fn test_extract_details_defaults_on_bare_page() {
    let session = launch();

    let url = "data:text/html,<html><body><span>nothing useful here</span></body></html>";
    let record = extract_details(&session, url, WAIT, false);

    assert_eq!(record.title, "Unknown Title");
    assert!(record.speakers.is_empty());
    assert_eq!(record.summary, "No summary available");
    assert_eq!(record.url, url);
}

#[test]
#[ignore]
fn test_extract_details_is_idempotent_on_static_content() {
    let session = launch();

    let url = concat!(
        "data:text/html,<html><body>",
        "<h1>Fixed Event</h1>",
        "<div class='summary'>Same every time.</div>",
        "</body></html>"
    );

    let first = extract_details(&session, url, WAIT, false);
    let second = extract_details(&session, url, WAIT, false);

    assert_eq!(first, second);
}

#[test]
#[ignore]
fn test_extract_details_navigation_failure_yields_diagnostic_record() {
    let session = launch();

    let url = "not-a-url";
    let record = extract_details(&session, url, WAIT, false);

    assert_eq!(record.title, "Error extracting details");
    assert!(record.speakers.is_empty());
    assert!(record.summary.starts_with("Error:"));
    assert_eq!(record.url, url);
}

#[test]
#[ignore]
fn test_harvest_links_filters_and_dedups_anchors() {
    let session = launch();

    let html = concat!(
        "<html><body>",
        "<a href='https://lu.ma/e/one'>One</a>",
        "<a href='https://lu.ma/e/two'>Two</a>",
        "<a href='https://lu.ma/e/one'>Duplicate</a>",
        "<a href='https://lu.ma/discover'>Not an event</a>",
        "</body></html>"
    );
    session
        .navigate(&format!("data:text/html,{}", html))
        .expect("Failed to navigate");

    let links = harvest_links(&session, 10, WAIT, false);

    assert_eq!(links, vec!["https://lu.ma/e/one".to_string(), "https://lu.ma/e/two".to_string()]);
}

#[test]
#[ignore]
fn test_harvest_links_respects_budget() {
    let session = launch();

    let html = concat!(
        "<html><body>",
        "<a href='https://lu.ma/e/one'>One</a>",
        "<a href='https://lu.ma/e/two'>Two</a>",
        "<a href='https://lu.ma/e/three'>Three</a>",
        "</body></html>"
    );
    session
        .navigate(&format!("data:text/html,{}", html))
        .expect("Failed to navigate");

    let links = harvest_links(&session, 2, WAIT, false);
    assert_eq!(links.len(), 2);
}

#[test]
#[ignore]
fn test_harvest_links_zero_budget_is_empty() {
    let session = launch();

    session
        .navigate("data:text/html,<html><body><a href='https://lu.ma/e/one'>One</a></body></html>")
        .expect("Failed to navigate");

    assert!(harvest_links(&session, 0, WAIT, false).is_empty());
}
