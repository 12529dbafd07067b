// ABOUTME: Configuration for the scout client: transport tuning, browser headers, and extraction knobs.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;

/// Desktop Chrome user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
/// `Accept` header matching the user agent above.
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
/// `Accept-Language` header.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
/// Listing site used for search and statistics pages.
pub const DEFAULT_BASE_URL: &str = "https://www.homes.com";

/// Fixed transport settings. These only affect resilience against blocking.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Whole-request timeout. Requests are never retried.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Force HTTP/1.1; some listing CDNs reset HTTP/2 streams from non-browsers.
    pub http1_only: bool,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: Duration,
    /// Minimum TLS version is always 1.2.
    pub min_tls_version: reqwest::tls::Version,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(45),
            connect_timeout: Duration::from_secs(10),
            http1_only: true,
            pool_max_idle_per_host: 10,
            pool_idle_timeout: Duration::from_secs(90),
            min_tls_version: reqwest::tls::Version::TLS_1_2,
        }
    }
}

/// Text window scanned around each address anchor.
///
/// Tuned for one site's search layout; re-validate before trusting it elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProximityWindow {
    /// Characters kept before the anchor start.
    pub before: usize,
    /// Characters kept after the anchor start.
    pub after: usize,
}

impl Default for ProximityWindow {
    fn default() -> Self {
        Self {
            before: 500,
            after: 1000,
        }
    }
}

/// Pagination limits for search crawls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub max_pages: u32,
    /// A page with fewer admitted records than this is treated as the last one.
    pub full_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_pages: 3,
            full_page_size: 20,
        }
    }
}

/// The region whose sold listings detail lookups may reuse instead of fetching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownRegion {
    pub city: String,
    pub state: String,
    pub neighborhood: String,
    pub zip_code: String,
}

impl KnownRegion {
    /// True when `city`/`state` name this region (case-insensitive).
    pub fn matches(&self, city: &str, state: &str) -> bool {
        self.city.eq_ignore_ascii_case(city.trim()) && self.state.eq_ignore_ascii_case(state.trim())
    }
}

impl Default for KnownRegion {
    fn default() -> Self {
        Self {
            city: "Honolulu".to_string(),
            state: "HI".to_string(),
            neighborhood: "Manoa".to_string(),
            zip_code: "96822".to_string(),
        }
    }
}

/// Configuration options for the scout client.
#[derive(Debug, Clone)]
pub struct Options {
    pub transport: TransportConfig,
    pub user_agent: String,
    /// Headers sent with every request, on top of the browser defaults.
    pub headers: HashMap<String, String>,
    pub http_client: Option<reqwest::Client>,
    /// Scheme and host of the listing site, without a trailing slash.
    pub base_url: String,
    pub window: ProximityWindow,
    pub pagination: PaginationConfig,
    pub known_region: KnownRegion,
}

impl Default for Options {
    fn default() -> Self {
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), DEFAULT_ACCEPT.to_string());
        headers.insert(
            "Accept-Language".to_string(),
            DEFAULT_ACCEPT_LANGUAGE.to_string(),
        );

        Self {
            transport: TransportConfig::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers,
            http_client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            window: ProximityWindow::default(),
            pagination: PaginationConfig::default(),
            known_region: KnownRegion::default(),
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.transport.timeout = timeout;
        self
    }

    /// Replace the transport settings.
    pub fn transport(mut self, transport: TransportConfig) -> Self {
        self.opts.transport = transport;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Use a custom HTTP client. Transport settings are then ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Point search and statistics requests at another host.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the proximity window around address anchors.
    pub fn window(mut self, before: usize, after: usize) -> Self {
        self.opts.window = ProximityWindow { before, after };
        self
    }

    /// Set the maximum number of search pages fetched per crawl.
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.opts.pagination.max_pages = max_pages;
        self
    }

    /// Set the page size below which a crawl stops.
    pub fn full_page_size(mut self, size: usize) -> Self {
        self.opts.pagination.full_page_size = size;
        self
    }

    /// Set the region detail lookups may answer from sold search results.
    pub fn known_region(mut self, region: KnownRegion) -> Self {
        self.opts.known_region = region;
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> crate::error::Result<Client> {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
