//! Detail extraction from a single event page
//!
//! Title, speakers, and summary each carry their own fallback chain and are
//! independently fault-isolated: a failure degrades that one field to its
//! default value. Only a navigation failure produces a diagnostic record, and
//! even then the record is returned rather than an error.

use crate::browser::BrowserSession;
use crate::locate::{Strategy, locate};
use crate::scrape::{EventRecord, SpeakerRecord};
use std::path::Path;
use std::time::Duration;

const SUMMARY_LIMIT: usize = 500;
const SUMMARY_CLIP: usize = 497;
const ELLIPSIS: &str = "...";

const UNKNOWN_TITLE: &str = "Unknown Title";
const NO_SUMMARY: &str = "No summary available";

const TITLE: &[Strategy] = &[
    Strategy::xpath("top-level heading", "//h1"),
    Strategy::xpath("secondary heading with title class", "//h2[contains(@class, 'title')]"),
    Strategy::xpath(
        "container with title class",
        "//div[contains(@class, 'title') and not(contains(@class, 'subtitle'))]",
    ),
];

const SPEAKERS: &[Strategy] = &[
    Strategy::xpath(
        "speaker or host containers",
        "//div[contains(@class, 'speaker') or contains(@class, 'host')]",
    ),
    Strategy::xpath(
        "siblings of a Speaker/Host label",
        "//div[contains(text(), 'Speaker') or contains(text(), 'Host')]/following-sibling::div",
    ),
    Strategy::xpath(
        "ancestors of avatar images",
        "//img[contains(@alt, 'profile') or contains(@class, 'avatar')]/parent::div/parent::div",
    ),
];

const SUMMARY: &[Strategy] = &[
    Strategy::xpath(
        "description or summary containers",
        "//div[contains(@class, 'description') or contains(@class, 'summary')]",
    ),
    Strategy::xpath(
        "siblings of an About/Description label",
        "//div[contains(text(), 'About') or contains(text(), 'Description')]/following-sibling::div",
    ),
    Strategy::xpath("paragraphs in main content", "//main//p"),
];

/// Visit `url` and pull out title, speakers, and summary
///
/// Always returns exactly one record for the given URL; never fails. A
/// navigation failure yields a diagnostic record with the error text embedded
/// in the summary and the URL preserved.
pub fn extract_details(session: &BrowserSession, url: &str, wait: Duration, screenshots: bool) -> EventRecord {
    log::info!("Extracting details from event: {}", url);

    if let Err(e) = session.navigate(url) {
        log::error!("Failed to extract event details: {}", e);
        return EventRecord {
            title: "Error extracting details".to_string(),
            speakers: Vec::new(),
            summary: format!("Error: {}", e),
            url: url.to_string(),
        };
    }
    session.settle(wait);

    if screenshots {
        let event_id = url.rsplit('/').next().unwrap_or("page");
        let file = format!("event_{}.png", event_id);
        if let Err(e) = session.screenshot(Path::new(&file)) {
            log::error!("{}", e);
        }
    }

    EventRecord {
        title: extract_title(session),
        speakers: extract_speakers(session),
        summary: extract_summary(session),
        url: url.to_string(),
    }
}

fn extract_title(session: &BrowserSession) -> String {
    let elements = locate(session.tab(), TITLE);

    let title = elements.first().and_then(|element| match element.get_inner_text() {
        Ok(text) => Some(text.trim().to_string()),
        Err(e) => {
            log::error!("Error extracting event title: {}", e);
            None
        }
    });

    match title {
        Some(title) if !title.is_empty() => {
            log::info!("Extracted event title: {}", title);
            title
        }
        _ => UNKNOWN_TITLE.to_string(),
    }
}

fn extract_speakers(session: &BrowserSession) -> Vec<SpeakerRecord> {
    let elements = locate(session.tab(), SPEAKERS);

    let mut speakers = Vec::new();
    for element in &elements {
        match element.get_inner_text() {
            Ok(text) => speakers.extend(split_speaker(&text)),
            Err(e) => log::error!("Error extracting speakers: {}", e),
        }
    }

    if speakers.is_empty() {
        log::info!("No speakers found");
    } else {
        log::info!("Extracted {} speakers", speakers.len());
    }

    speakers
}

fn extract_summary(session: &BrowserSession) -> String {
    let elements = locate(session.tab(), SUMMARY);

    let summary = elements.first().and_then(|element| match element.get_inner_text() {
        Ok(text) => Some(clip_summary(text.trim())),
        Err(e) => {
            log::error!("Error extracting event summary: {}", e);
            None
        }
    });

    match summary {
        Some(summary) if !summary.is_empty() => {
            let preview: String = summary.chars().take(50).collect();
            log::info!("Extracted event summary: {}...", preview);
            summary
        }
        _ => NO_SUMMARY.to_string(),
    }
}

/// Split a speaker block into name (first line) and title/company (the rest)
///
/// Returns None for blocks with no text, so the caller's record count matches
/// the number of non-empty speaker elements.
fn split_speaker(text: &str) -> Option<SpeakerRecord> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut lines = trimmed.lines();
    let name = lines.next().unwrap_or_default().trim().to_string();
    let title_company = lines.map(str::trim).collect::<Vec<_>>().join(" ");

    Some(SpeakerRecord { name, title_company })
}

/// Clip a summary to at most 500 characters, ellipsis included
///
/// Counts characters, not bytes, so multi-byte text cannot be split mid-char.
fn clip_summary(text: &str) -> String {
    if text.chars().count() <= SUMMARY_LIMIT {
        return text.to_string();
    }

    let mut clipped: String = text.chars().take(SUMMARY_CLIP).collect();
    clipped.push_str(ELLIPSIS);
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_speaker_name_and_title() {
        let record = split_speaker("Jane Doe\nCEO, Acme").unwrap();

        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.title_company, "CEO, Acme");
    }

    #[test]
    fn test_split_speaker_name_only() {
        let record = split_speaker("Jane Doe").unwrap();

        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.title_company, "");
    }

    #[test]
    fn test_split_speaker_joins_extra_lines_with_spaces() {
        let record = split_speaker("Jane Doe\nCEO\nAcme Inc").unwrap();

        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.title_company, "CEO Acme Inc");
    }

    #[test]
    fn test_split_speaker_empty_block_is_skipped() {
        assert!(split_speaker("").is_none());
        assert!(split_speaker("   \n  ").is_none());
    }

    #[test]
    fn test_clip_summary_short_is_verbatim() {
        let text = "a".repeat(500);
        assert_eq!(clip_summary(&text), text);
    }

    #[test]
    fn test_clip_summary_long_is_exactly_500_chars() {
        let text = "a".repeat(501);
        let clipped = clip_summary(&text);

        assert_eq!(clipped.chars().count(), 500);
        assert!(clipped.ends_with("..."));
        assert_eq!(&clipped[..497], &text[..497]);
    }

    #[test]
    fn test_clip_summary_counts_chars_not_bytes() {
        let text = "é".repeat(600);
        let clipped = clip_summary(&text);

        assert_eq!(clipped.chars().count(), 500);
        assert!(clipped.ends_with("..."));
    }

    #[test]
    fn test_clip_summary_empty() {
        assert_eq!(clip_summary(""), "");
    }
}
