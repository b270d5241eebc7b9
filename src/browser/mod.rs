//! Browser session management and configuration
//!
//! This module owns the single remote-controlled browser instance used for a
//! scraping run:
//! - LaunchOptions: headless/sandbox/window configuration for the launch
//! - BrowserSession: navigation, settle pauses, keyboard input, screenshots,
//!   and guaranteed teardown on drop

pub mod config;
pub mod session;

pub use config::LaunchOptions;
pub use session::BrowserSession;
