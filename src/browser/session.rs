use crate::browser::config::LaunchOptions;
use crate::error::{Result, ScraperError};
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, Element, Tab};
use std::{ffi::OsStr, path::Path, sync::Arc, time::Duration};

/// Browser session that owns a Chrome/Chromium instance for the lifetime of a run
///
/// All scraping components operate on the one session serially. The browser is
/// torn down when the session is dropped, on every exit path; [`close`] only
/// closes tabs eagerly before that.
///
/// [`close`]: BrowserSession::close
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// The single tab all operations run against
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Ignore default arguments to prevent detection by anti-bot services
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));
        launch_opts.args.push(OsStr::new("--disable-dev-shm-usage"));
        launch_opts.args.push(OsStr::new("--disable-gpu"));

        // Set the browser's idle timeout to 1 hour (default is 30 seconds) so slow
        // scrapes do not lose the session mid-run
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        // Configure headless mode
        launch_opts.headless = options.headless;

        // Set window size
        launch_opts.window_size = Some((options.window_width, options.window_height));

        // Set Chrome binary path if provided
        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        // Set user data directory if provided
        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        // Set sandbox mode
        launch_opts.sandbox = options.sandbox;

        // Launch browser
        let browser = Browser::new(launch_opts).map_err(|e| ScraperError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| ScraperError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, tab })
    }

    /// Get the tab all operations run against
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Navigate to a URL and wait for the navigation to commit
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| ScraperError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| ScraperError::NavigationFailed(format!("Navigation to {} did not complete: {}", url, e)))?;

        Ok(())
    }

    /// Get the URL the tab is currently on
    pub fn current_url(&self) -> String {
        self.tab.get_url()
    }

    /// Fixed settle pause for client-side rendering
    ///
    /// A bare navigation offers no readiness signal, so this stays a
    /// constant-duration sleep. Where a concrete condition exists, use
    /// [`crate::locate::wait_for_match`] instead.
    pub fn settle(&self, wait: Duration) {
        log::debug!("Settling for {:?}", wait);
        std::thread::sleep(wait);
    }

    /// Press the Enter key in the tab
    pub fn press_enter(&self) -> Result<()> {
        self.tab
            .press_key("Enter")
            .map_err(|e| ScraperError::InteractionFailed(format!("Failed to press Enter: {}", e)))?;

        Ok(())
    }

    /// Clear an input element's contents using keyboard input only
    ///
    /// `max_chars` bounds the number of Backspace presses; pass a value safely
    /// above the longest text the field could hold.
    pub fn clear_input(&self, element: &Element<'_>, max_chars: usize) -> Result<()> {
        element
            .click()
            .map_err(|e| ScraperError::InteractionFailed(format!("Failed to focus input: {}", e)))?;

        self.tab.press_key("End").ok();
        for _ in 0..max_chars {
            self.tab.press_key("Backspace").ok();
        }

        Ok(())
    }

    /// Capture a PNG screenshot of the current page to `path`
    pub fn screenshot(&self, path: &Path) -> Result<()> {
        let png = self
            .tab
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| ScraperError::ScreenshotFailed(e.to_string()))?;

        std::fs::write(path, png)?;
        log::info!("Screenshot saved: {}", path.display());

        Ok(())
    }

    /// Close all tabs
    ///
    /// The browser process itself exits when the session is dropped; this only
    /// releases pages eagerly.
    pub fn close(&self) -> Result<()> {
        let tabs = self
            .browser
            .get_tabs()
            .lock()
            .map_err(|e| ScraperError::TabOperationFailed(format!("Failed to get tabs: {}", e)))?
            .clone();

        for tab in tabs {
            let _ = tab.close(false); // Ignore errors on individual tab closes
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests (require Chrome to be installed)
    #[test]
    #[ignore] // Ignore by default, run with: cargo test -- --ignored
    fn test_launch_browser() {
        let result = BrowserSession::launch(LaunchOptions::new().headless(true));
        assert!(result.is_ok());
    }

    #[test]
    #[ignore]
    fn test_navigate() {
        let session = BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser");

        let result = session.navigate("about:blank");
        assert!(result.is_ok());
        assert_eq!(session.current_url(), "about:blank");
    }

    #[test]
    #[ignore]
    fn test_close() {
        let session = BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser");

        assert!(session.close().is_ok());
    }
}
