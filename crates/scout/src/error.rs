// ABOUTME: Error types for the scout pipeline including the ErrorCode enum and ScrapeError struct.
// ABOUTME: Distinguishes transport, status, and document failures so callers can pick a recovery.

use std::fmt;

/// Error codes representing the categories of pipeline failures.
///
/// A field that fails to match is never an error; it stays at its zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    Transport,
    Timeout,
    Status,
    Parse,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::Transport => "transport error",
            ErrorCode::Timeout => "timeout",
            ErrorCode::Status => "unexpected status",
            ErrorCode::Parse => "document parse error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for fetch and extraction operations.
#[derive(Debug, thiserror::Error)]
pub struct ScrapeError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    /// HTTP status code for `ErrorCode::Status`.
    pub status: Option<u16>,
    /// Page number when the failure happened inside a paginated crawl.
    pub page: Option<u32>,
    #[source]
    pub source: Option<anyhow::Error>,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ScrapeError>;

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scout: {} {}", self.op, self.url)?;
        if let Some(page) = self.page {
            write!(f, " (page {})", page)?;
        }
        write!(f, ": {}", self.code)?;
        if let Some(status) = self.status {
            write!(f, " {}", status)?;
        }
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ScrapeError {
    fn new(
        code: ErrorCode,
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            op: op.into(),
            status: None,
            page: None,
            source,
        }
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::InvalidUrl, url, op, source)
    }

    /// Create a Transport error (DNS, connect, TLS, body read).
    pub fn transport(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Transport, url, op, source)
    }

    /// Create a Timeout error.
    pub fn timeout(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Timeout, url, op, source)
    }

    /// Create a Status error carrying the HTTP status code.
    pub fn status(url: impl Into<String>, op: impl Into<String>, status: u16) -> Self {
        let mut err = Self::new(ErrorCode::Status, url, op, None);
        err.status = Some(status);
        err
    }

    /// Create a Parse error.
    pub fn parse(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Parse, url, op, source)
    }

    /// Attach the crawl page number this error occurred on.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Returns true for transport-level failures, timeouts included.
    pub fn is_transport(&self) -> bool {
        matches!(self.code, ErrorCode::Transport | ErrorCode::Timeout)
    }

    /// Returns true if this is a Timeout error.
    pub fn is_timeout(&self) -> bool {
        self.code == ErrorCode::Timeout
    }

    /// Returns true if this is a non-success HTTP status error.
    pub fn is_status(&self) -> bool {
        self.code == ErrorCode::Status
    }

    /// Returns true if this is a Parse error.
    pub fn is_parse(&self) -> bool {
        self.code == ErrorCode::Parse
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }
}
