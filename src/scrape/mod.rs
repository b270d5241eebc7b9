//! The scraping pipeline: search initiation, link harvesting, and detail extraction
//!
//! The pipeline runs strictly in sequence against one browser session:
//! - search: find and operate the site's search affordance for a keyword query
//! - harvest: collect up to N distinct event-detail URLs from the results page
//! - extract: visit each URL and pull out title, speakers, and summary

pub mod extract;
pub mod harvest;
pub mod search;

pub use extract::extract_details;
pub use harvest::harvest_links;
pub use search::initiate_search;

use serde::{Deserialize, Serialize};

/// One speaker or host listed on an event page
///
/// Derived by splitting a text block on line breaks: the first line is the
/// name, the remaining lines joined with spaces form the title/company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpeakerRecord {
    pub name: String,

    /// May be empty when the block held only a name
    pub title_company: String,
}

/// Structured details for one event page
///
/// Immutable once produced. Extraction failure degrades individual fields to
/// placeholder values; it never drops the record, so `url` is always the URL
/// that was visited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventRecord {
    pub title: String,

    pub speakers: Vec<SpeakerRecord>,

    /// At most 500 characters; longer summaries are clipped with an ellipsis
    pub summary: String,

    pub url: String,
}
