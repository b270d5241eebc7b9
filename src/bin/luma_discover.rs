//! Simplified Luma discover-page scraper
//!
//! Lists the first few events from the lu.ma discover page and prints them to
//! stdout. A smaller client of the same session and locator plumbing used by
//! the full scraper; no search, no report file.

use headless_chrome::Element;
use luma_scout::locate::{Strategy, attribute, locate, wait_for_match};
use luma_scout::{BrowserSession, LaunchOptions, Result, ScraperError};
use std::process::ExitCode;
use std::time::Duration;

const DISCOVER_URL: &str = "https://lu.ma/discover";
const MAX_LISTED: usize = 5;
const HEADING_BUDGET: Duration = Duration::from_secs(20);

const PAGE_HEADING: &[Strategy] = &[Strategy::xpath(
    "discover page heading",
    "//h1[contains(text(), 'Discover') or contains(text(), 'Events')]",
)];

/// The discover page links events with bare /event/ paths, so the anchor
/// fallback here differs from the search-results markers.
const EVENT_CARDS: &[Strategy] = &[
    Strategy::xpath(
        "event card containers",
        "//div[contains(@class, 'event-card') or contains(@class, 'event-item')]",
    ),
    Strategy::xpath("event page anchors", "//a[contains(@href, '/event/')]"),
];

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("An error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    log::info!("Launching browser");
    let session = BrowserSession::launch(LaunchOptions::new().headless(true))?;

    log::info!("Navigating to Luma discover page");
    session.navigate(DISCOVER_URL)?;
    session.settle(Duration::from_secs(3));

    if wait_for_match(session.tab(), PAGE_HEADING, HEADING_BUDGET).is_empty() {
        log::warn!("Discover heading never appeared, scraping the page as-is");
    } else {
        log::info!("Successfully navigated to discover page");
    }

    log::info!("Finding events");
    let cards = locate(session.tab(), EVENT_CARDS);
    log::info!("Found {} events", cards.len());

    let mut events: Vec<(String, String)> = Vec::new();
    for card in cards.iter().take(MAX_LISTED) {
        match card_details(card) {
            Ok(Some((title, url))) => {
                log::info!("Event {}: {} - {}", events.len() + 1, title, url);
                events.push((title, url));
            }
            Ok(None) => log::debug!("Skipping card without a link"),
            Err(e) => log::error!("Error extracting event data: {}", e),
        }
    }

    println!();
    println!("Luma Events Summary:");
    println!("Total events found: {}", events.len());
    for (i, (title, url)) in events.iter().enumerate() {
        println!("{}. {}", i + 1, title);
        println!("   URL: {}", url);
        println!();
    }

    log::info!("Closing browser");
    session.close()?;

    Ok(())
}

/// Pull title and URL out of one card (or bare anchor)
fn card_details(card: &Element<'_>) -> Result<Option<(String, String)>> {
    let heading = card
        .find_element("h2, h3, [class*='title']")
        .map_err(|e| ScraperError::QueryFailed(format!("card title: {}", e)))?;

    let title = heading
        .get_inner_text()
        .map_err(|e| ScraperError::QueryFailed(format!("card title text: {}", e)))?
        .trim()
        .to_string();

    // The card may be the anchor itself; otherwise take its first anchor
    // descendant.
    let url = match attribute(card, "href")? {
        Some(href) => Some(href),
        None => {
            let anchor = card
                .find_element("a")
                .map_err(|e| ScraperError::QueryFailed(format!("card anchor: {}", e)))?;
            attribute(&anchor, "href")?
        }
    };

    Ok(url.map(|url| (title, url)))
}
