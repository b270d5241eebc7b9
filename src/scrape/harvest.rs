//! Harvesting event-detail links from a results page
//!
//! Three escalating passes: event-card containers, anchors that already carry
//! an event href, and finally every anchor on the page filtered post-hoc. Each
//! pass is only consulted while the accumulated count is below the budget.

use crate::browser::BrowserSession;
use crate::error::{Result, ScraperError};
use crate::locate::{Strategy, attribute, locate};
use headless_chrome::Element;
use indexmap::IndexSet;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// URL substrings that mark an event-detail page
const EVENT_PATH_MARKERS: [&str; 2] = ["/events/", "/e/"];

const EVENT_CARDS: &[Strategy] = &[Strategy::xpath(
    "event card containers",
    "//div[contains(@class, 'event-card') or contains(@class, 'event-item')]",
)];

const EVENT_ANCHORS: &[Strategy] = &[Strategy::xpath(
    "anchors with event hrefs",
    "//a[contains(@href, '/events/') or contains(@href, '/e/')]",
)];

const ALL_ANCHORS: &[Strategy] = &[Strategy::css("every anchor", "a")];

/// True when `href` points at an event-detail page
pub fn is_event_link(href: &str) -> bool {
    EVENT_PATH_MARKERS.iter().any(|marker| href.contains(marker))
}

/// Collect up to `max_events` distinct event-detail URLs from the current page
///
/// Per-element failures are logged and skipped; the function returns whatever
/// was collected, possibly nothing, rather than failing. The returned list
/// preserves discovery order and holds no duplicates.
pub fn harvest_links(session: &BrowserSession, max_events: usize, wait: Duration, screenshots: bool) -> Vec<String> {
    if max_events == 0 {
        return Vec::new();
    }

    log::info!("Finding up to {} event links from search results", max_events);
    session.settle(wait);

    if screenshots {
        if let Err(e) = session.screenshot(Path::new("search_results.png")) {
            log::error!("{}", e);
        }
    }

    log::info!("Current URL: {}", session.current_url());
    let base = Url::parse(&session.current_url()).ok();

    let mut links: IndexSet<String> = IndexSet::new();

    // Pass 1: event cards, first anchor descendant each.
    let cards = locate(session.tab(), EVENT_CARDS);
    if !cards.is_empty() {
        log::info!("Found {} event cards", cards.len());
        let candidates = cards
            .iter()
            .filter_map(|card| match card_href(card, base.as_ref()) {
                Ok(href) => href,
                Err(e) => {
                    log::error!("Error extracting link from event card: {}", e);
                    None
                }
            })
            .collect();
        accept_candidates(&mut links, candidates, max_events);
    }

    // Pass 2: anchors that already carry an event href.
    if links.len() < max_events {
        let anchors = locate(session.tab(), EVENT_ANCHORS);
        if !anchors.is_empty() {
            log::info!("Found {} direct event links", anchors.len());
            accept_candidates(&mut links, anchor_hrefs(&anchors, base.as_ref()), max_events);
        }
    }

    // Pass 3: every anchor on the page, filtered post-hoc.
    if links.len() < max_events {
        let anchors = locate(session.tab(), ALL_ANCHORS);
        if !anchors.is_empty() {
            log::info!("Found {} total links, filtering for event links", anchors.len());
            accept_candidates(&mut links, anchor_hrefs(&anchors, base.as_ref()), max_events);
        }
    }

    log::info!("Found {} event links", links.len());
    links.into_iter().collect()
}

/// Fold candidate URLs into `links`, keeping order, dropping duplicates and
/// non-event URLs, and stopping once `max_events` is reached
fn accept_candidates(links: &mut IndexSet<String>, candidates: Vec<String>, max_events: usize) {
    for href in candidates {
        if links.len() >= max_events {
            break;
        }
        if !is_event_link(&href) {
            continue;
        }
        if links.insert(href.clone()) {
            log::info!("Added event link: {}", href);
        }
    }
}

/// Resolved href of the first anchor descendant of a card
fn card_href(card: &Element<'_>, base: Option<&Url>) -> Result<Option<String>> {
    let anchor = card
        .find_element("a")
        .map_err(|e| ScraperError::QueryFailed(format!("card anchor: {}", e)))?;

    Ok(attribute(&anchor, "href")?.and_then(|href| resolve(base, &href)))
}

/// Resolved hrefs of a batch of anchors, unreadable ones skipped
fn anchor_hrefs(anchors: &[Element<'_>], base: Option<&Url>) -> Vec<String> {
    anchors
        .iter()
        .filter_map(|anchor| match attribute(anchor, "href") {
            Ok(Some(href)) => resolve(base, &href),
            Ok(None) => None,
            Err(e) => {
                log::debug!("Unreadable href: {}", e);
                None
            }
        })
        .collect()
}

/// Resolve a possibly-relative href against the page URL
///
/// CDP reports the raw attribute value, so relative links must be made
/// absolute before they can be navigated to.
fn resolve(base: Option<&Url>, href: &str) -> Option<String> {
    match base {
        Some(base) => match base.join(href) {
            Ok(resolved) => Some(resolved.into()),
            Err(e) => {
                log::debug!("Skipping unresolvable href '{}': {}", href, e);
                None
            }
        },
        None => Some(href.to_string()),
    }
}
