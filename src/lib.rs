//! # luma-scout
//!
//! A browser-driven scraper for event listings on [lu.ma](https://lu.ma),
//! built on the Chrome DevTools Protocol (CDP) via `headless_chrome`.
//!
//! ## Features
//!
//! - **Browser Session Management**: Launch a Chrome/Chromium instance with
//!   guaranteed teardown on every exit path
//! - **Resilient Element Location**: Ordered fallback chains of CSS/XPath
//!   strategies so one markup change cannot break a whole scrape
//! - **Scraping Pipeline**: Search initiation, result-link harvesting, and
//!   per-page detail extraction that degrades to placeholder values instead
//!   of aborting
//! - **Plain-Text Reports**: One block per event with title, speakers,
//!   summary, and canonical link
//!
//! ## Binaries
//!
//! The recommended way to use this crate is through the `luma-scout` binary:
//!
//! ```bash
//! # Search for AI events and write sf_events_detailed_ai.txt
//! cargo run --bin luma-scout -- --keywords "AI" --headless
//!
//! # More events, slower pages, screenshots along the way
//! cargo run --bin luma-scout -- --keywords "founder,startup" --max-events 20 --wait-time 8 --screenshots
//! ```
//!
//! `luma-discover` is a smaller client of the same plumbing that lists the
//! first few events from the discover page.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use luma_scout::scrape::{extract_details, harvest_links, initiate_search};
//! use luma_scout::{BrowserSession, LaunchOptions};
//! use std::time::Duration;
//!
//! # fn main() -> luma_scout::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! let wait = Duration::from_secs(5);
//!
//! if initiate_search(&session, "AI", wait, false) {
//!     for link in harvest_links(&session, 10, wait, false) {
//!         let record = extract_details(&session, &link, wait, false);
//!         println!("{}: {}", record.title, record.url);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Browser session management and launch configuration
//! - [`locate`]: Fallback-chain element location against the live page
//! - [`scrape`]: Search, harvest, and extract pipeline plus the record types
//! - [`report`]: Plain-text report rendering and writing
//! - [`error`]: Error types and result alias

pub mod browser;
pub mod error;
pub mod locate;
pub mod report;
pub mod scrape;

pub use browser::{BrowserSession, LaunchOptions};
pub use error::{Result, ScraperError};
pub use locate::{Query, Strategy};
pub use scrape::{EventRecord, SpeakerRecord};
