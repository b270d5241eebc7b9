use thiserror::Error;

/// Errors produced by browser control and scraping operations
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    #[error("Element query failed: {0}")]
    QueryFailed(String),

    #[error("Element interaction failed: {0}")]
    InteractionFailed(String),

    #[error("Screenshot failed: {0}")]
    ScreenshotFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScraperError>;
