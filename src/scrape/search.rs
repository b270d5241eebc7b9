//! Search initiation on the lu.ma landing page
//!
//! Finds and operates the site's search affordance: a trigger button that
//! reveals an input, a bare input already on the page, or, when neither can be
//! located, a direct navigation to the search results URL.

use crate::browser::BrowserSession;
use crate::error::{Result, ScraperError};
use crate::locate::{Strategy, locate, wait_for_match};
use headless_chrome::Element;
use std::path::Path;
use std::time::Duration;

const LANDING_URL: &str = "https://lu.ma/sf";
const SEARCH_URL_BASE: &str = "https://lu.ma/search";
const LOCATION_FILTER: &str = "sf";

/// Chain for the search trigger button, most specific first
const SEARCH_BUTTON: &[Strategy] = &[
    Strategy::xpath(
        "button by aria-label",
        "//button[contains(@aria-label, 'search') or contains(@aria-label, 'Search')]",
    ),
    Strategy::xpath(
        "button by class or icon class",
        "//button[contains(@class, 'search') or .//i[contains(@class, 'search')]]",
    ),
    Strategy::xpath("button by svg icon", "//button[.//svg[contains(@class, 'search')]]"),
    Strategy::xpath(
        "button by visible text",
        "//button[contains(text(), 'Search') or .//span[contains(text(), 'Search')]]",
    ),
];

/// Chain for the search input field
const SEARCH_INPUT: &[Strategy] = &[Strategy::xpath(
    "input by placeholder or aria-label",
    "//input[contains(@placeholder, 'search') or contains(@placeholder, 'Search') or contains(@aria-label, 'search')]",
)];

/// Build the fallback search URL for a keyword query
///
/// Commas and spaces become '+'; all other characters pass through untouched.
pub fn direct_search_url(keywords: &str) -> String {
    let query = keywords.replace(',', "+").replace(' ', "+");
    format!("{}?q={}&filter={}", SEARCH_URL_BASE, query, LOCATION_FILTER)
}

/// Find and operate the site's search affordance, submitting `keywords`
///
/// Tries a trigger button first, then a bare input, then falls back to
/// navigating to [`direct_search_url`]. Returns `false` when the post-click
/// input never appears within `wait` or an unexpected error occurs; errors are
/// logged, never propagated.
pub fn initiate_search(session: &BrowserSession, keywords: &str, wait: Duration, screenshots: bool) -> bool {
    match try_search(session, keywords, wait, screenshots) {
        Ok(submitted) => submitted,
        Err(e) => {
            log::error!("Failed to search for events: {}", e);
            if screenshots {
                let _ = session.screenshot(Path::new("search_error.png"));
            }
            false
        }
    }
}

fn try_search(session: &BrowserSession, keywords: &str, wait: Duration, screenshots: bool) -> Result<bool> {
    log::info!("Navigating to {}", LANDING_URL);
    session.navigate(LANDING_URL)?;
    session.settle(wait);

    if screenshots {
        session.screenshot(Path::new("sf_page.png"))?;
    }

    log::info!("Looking for search button");
    let buttons = locate(session.tab(), SEARCH_BUTTON);

    if let Some(button) = buttons.first() {
        log::info!("Found {} potential search buttons", buttons.len());

        button
            .click()
            .map_err(|e| ScraperError::InteractionFailed(format!("Failed to click search button: {}", e)))?;
        log::info!("Clicked search button");
        std::thread::sleep(Duration::from_secs(1));

        if screenshots {
            session.screenshot(Path::new("search_button_clicked.png"))?;
        }

        // The input appears only after the click, so a concrete readiness
        // condition exists; poll for it instead of sleeping blind.
        let inputs = wait_for_match(session.tab(), SEARCH_INPUT, wait);
        let Some(input) = inputs.first() else {
            log::error!("Could not find search input field after clicking search button");
            if screenshots {
                session.screenshot(Path::new("search_input_not_found.png"))?;
            }
            return Ok(false);
        };

        submit_query(session, input, keywords, screenshots)?;
        session.settle(wait);
        return Ok(true);
    }

    // No trigger button; the input may already be on the page.
    let inputs = locate(session.tab(), SEARCH_INPUT);
    if let Some(input) = inputs.first() {
        log::info!("Found search input directly");

        input
            .click()
            .map_err(|e| ScraperError::InteractionFailed(format!("Failed to click search input: {}", e)))?;
        std::thread::sleep(Duration::from_secs(1));

        if screenshots {
            session.screenshot(Path::new("search_input_clicked.png"))?;
        }

        submit_query(session, input, keywords, screenshots)?;
        session.settle(wait);
        return Ok(true);
    }

    // Neither trigger nor input: trust the URL scheme. This path cannot detect
    // failure itself.
    let search_url = direct_search_url(keywords);
    log::info!("Could not find search button, navigating to search URL: {}", search_url);
    session.navigate(&search_url)?;

    if screenshots {
        session.screenshot(Path::new("direct_search_url.png"))?;
    }

    session.settle(wait);
    Ok(true)
}

/// Clear the input, type the keywords, and submit with Enter
fn submit_query(session: &BrowserSession, input: &Element<'_>, keywords: &str, screenshots: bool) -> Result<()> {
    session.clear_input(input, keywords.len() + 100)?;

    input
        .type_into(keywords)
        .map_err(|e| ScraperError::InteractionFailed(format!("Failed to type keywords: {}", e)))?;
    std::thread::sleep(Duration::from_secs(1));

    session.press_enter()?;
    log::info!("Entered search keywords: {}", keywords);

    if screenshots {
        session.screenshot(Path::new("search_submitted.png"))?;
    }

    Ok(())
}
