//! Luma SF events detailed scraper
//!
//! Searches lu.ma for events matching a keyword query, follows each result
//! link, and writes a plain-text report of titles, speakers, summaries, and
//! URLs.

use anyhow::{Context, bail};
use clap::Parser;
use luma_scout::report::write_report;
use luma_scout::scrape::{extract_details, harvest_links, initiate_search};
use luma_scout::{BrowserSession, LaunchOptions, ScraperError};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Pause between successive detail-page visits, to stay clear of abuse
/// defenses. Unconditional, not adaptive.
const INTER_REQUEST_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Parser)]
#[command(name = "luma-scout", version, about = "Luma SF events detailed scraper")]
struct Cli {
    /// Comma-separated keywords to search for events (e.g. "AI,tech,startup")
    #[arg(long)]
    keywords: String,

    /// Maximum number of events to discover
    #[arg(long, default_value_t = 10)]
    max_events: usize,

    /// Wait time in seconds for page loading
    #[arg(long, default_value_t = 5)]
    wait_time: u64,

    /// Run browser in headless mode
    #[arg(long)]
    headless: bool,

    /// Save screenshots during execution
    #[arg(long)]
    screenshots: bool,

    /// Path to a Chrome/Chromium executable (auto-detected if omitted)
    #[arg(long)]
    chrome_path: Option<PathBuf>,

    /// Output file to save discovered events (default: sf_events_detailed_<keywords>.txt)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let slug = self.keywords.to_lowercase().replace([',', ' '], "_");
            PathBuf::from(format!("sf_events_detailed_{}.txt", slug))
        })
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let wait = Duration::from_secs(cli.wait_time);
    let output = cli.output_path();

    log::info!("Launching browser");
    let mut options = LaunchOptions::new().headless(cli.headless);
    if let Some(path) = &cli.chrome_path {
        options = options.chrome_path(path.clone());
    }

    let session = match BrowserSession::launch(options) {
        Ok(session) => session,
        Err(e @ ScraperError::LaunchFailed(_)) => {
            bail!("{}. Try --chrome-path with a compatible Chrome or Chromium binary.", e)
        }
        Err(e) => return Err(e.into()),
    };
    log::info!("Browser launched with wait time: {} seconds", cli.wait_time);

    if !initiate_search(&session, &cli.keywords, wait, cli.screenshots) {
        bail!("Failed to search for events");
    }

    log::info!("Finding up to {} event links", cli.max_events);
    let links = harvest_links(&session, cli.max_events, wait, cli.screenshots);
    if links.is_empty() {
        bail!("No event links found");
    }
    log::info!("Found {} event links", links.len());

    let mut events = Vec::with_capacity(links.len());
    for (i, link) in links.iter().enumerate() {
        log::info!("Processing event {}/{}: {}", i + 1, links.len(), link);
        events.push(extract_details(&session, link, wait, cli.screenshots));

        if i + 1 < links.len() {
            std::thread::sleep(INTER_REQUEST_DELAY);
        }
    }

    log::info!("Closing browser");
    if let Err(e) = session.close() {
        log::warn!("{}", e);
    }
    drop(session);

    write_report(&output, &cli.keywords, &events)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!("Event scraping completed successfully");
    log::info!("Total events processed: {}", events.len());
    log::info!("Events saved to: {}", output.display());

    println!();
    println!("Luma SF Event Scraping Completed Successfully");
    println!("Search keywords: {}", cli.keywords);
    println!("Total events processed: {}", events.len());
    println!("Events saved to: {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_slug() {
        let cli = Cli::parse_from(["luma-scout", "--keywords", "AI,Tech Startup"]);

        assert_eq!(cli.output_path(), PathBuf::from("sf_events_detailed_ai_tech_startup.txt"));
    }

    #[test]
    fn test_explicit_output_path_wins() {
        let cli = Cli::parse_from(["luma-scout", "--keywords", "AI", "--output", "out.txt"]);

        assert_eq!(cli.output_path(), PathBuf::from("out.txt"));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["luma-scout", "--keywords", "AI"]);

        assert_eq!(cli.max_events, 10);
        assert_eq!(cli.wait_time, 5);
        assert!(!cli.headless);
        assert!(!cli.screenshots);
        assert!(cli.chrome_path.is_none());
    }
}
