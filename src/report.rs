//! Plain-text report output
//!
//! One header block followed by one block per event, written once at the end
//! of a successful run.

use crate::error::Result;
use crate::scrape::EventRecord;
use chrono::Local;
use std::fmt::Write as _;
use std::path::Path;

/// Render the full report body with the current local time in the header
pub fn render_report(keywords: &str, events: &[EventRecord]) -> String {
    let generated_on = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    render_report_at(keywords, events, &generated_on)
}

fn render_report_at(keywords: &str, events: &[EventRecord], generated_on: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Luma SF Events Detailed Results");
    let _ = writeln!(out, "Search keywords: {}", keywords);
    let _ = writeln!(out, "Generated on {}", generated_on);
    let _ = writeln!(out);

    for (i, event) in events.iter().enumerate() {
        let _ = writeln!(out, "Event {}:", i + 1);
        let _ = writeln!(out, "Title: {}", event.title);

        if event.speakers.is_empty() {
            let _ = writeln!(out, "Speakers: None listed");
        } else {
            let _ = writeln!(out, "Speakers:");
            for speaker in &event.speakers {
                if speaker.title_company.is_empty() {
                    let _ = writeln!(out, "  - {}", speaker.name);
                } else {
                    let _ = writeln!(out, "  - {}, {}", speaker.name, speaker.title_company);
                }
            }
        }

        let _ = writeln!(out, "Summary: {}", event.summary);
        let _ = writeln!(out, "URL: {}", event.url);
        let _ = writeln!(out);
    }

    out
}

/// Write the report to `path` as UTF-8 text
pub fn write_report(path: &Path, keywords: &str, events: &[EventRecord]) -> Result<()> {
    std::fs::write(path, render_report(keywords, events))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::SpeakerRecord;

    fn sample_event() -> EventRecord {
        EventRecord {
            title: "AI Builders Meetup".to_string(),
            speakers: vec![
                SpeakerRecord { name: "Jane Doe".to_string(), title_company: "CEO, Acme".to_string() },
                SpeakerRecord { name: "John Roe".to_string(), title_company: String::new() },
            ],
            summary: "An evening of talks.".to_string(),
            url: "https://lu.ma/e/abc".to_string(),
        }
    }

    #[test]
    fn test_report_header() {
        let report = render_report_at("AI,tech", &[], "2026-08-06 12:00:00");

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Luma SF Events Detailed Results");
        assert_eq!(lines[1], "Search keywords: AI,tech");
        assert_eq!(lines[2], "Generated on 2026-08-06 12:00:00");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_report_event_block_with_speakers() {
        let report = render_report_at("AI", &[sample_event()], "2026-08-06 12:00:00");

        assert!(report.contains("Event 1:\n"));
        assert!(report.contains("Title: AI Builders Meetup\n"));
        assert!(report.contains("Speakers:\n  - Jane Doe, CEO, Acme\n  - John Roe\n"));
        assert!(report.contains("Summary: An evening of talks.\n"));
        assert!(report.contains("URL: https://lu.ma/e/abc\n"));
    }

    #[test]
    fn test_report_no_speakers() {
        let mut event = sample_event();
        event.speakers.clear();

        let report = render_report_at("AI", &[event], "2026-08-06 12:00:00");
        assert!(report.contains("Speakers: None listed\n"));
        assert!(!report.contains("Speakers:\n"));
    }

    #[test]
    fn test_report_blank_line_between_events() {
        let events = [sample_event(), sample_event()];
        let report = render_report_at("AI", &events, "2026-08-06 12:00:00");

        assert!(report.contains("URL: https://lu.ma/e/abc\n\nEvent 2:\n"));
        assert!(report.ends_with("\n\n"));
    }
}
