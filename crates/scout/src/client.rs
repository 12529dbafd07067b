// ABOUTME: The main Client struct for scout, owning the tuned HTTP client and the pipeline operations.
// ABOUTME: Provides async search(), market_stats(), and listing_detail() over the listing sites.

use anyhow::anyhow;
use tracing::{debug, info, warn};
use url::Url;

use crate::crawl::{is_last_page, parse_search_page, Dedup};
use crate::dom::Page;
use crate::error::{Result, ScrapeError};
use crate::extractors::detail::{extract_detail, find_by_address, DetailSite};
use crate::extractors::stats::extract_market_stats;
use crate::listing::{Listing, ListingStatus, MarketStats};
use crate::location::Location;
use crate::options::{ClientBuilder, Options};
use crate::resource::{fetch, FetchOptions};

/// The main scout client.
///
/// Cheap to share by reference; the underlying connection pool is safe for
/// concurrent use. Each operation owns its own intermediate state.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    ///
    /// A custom `http_client` in the options is used as is; otherwise one is
    /// built from the transport settings.
    pub fn new(opts: Options) -> Result<Self> {
        let http_client = match opts.http_client.clone() {
            Some(client) => client,
            None => {
                let transport = &opts.transport;
                let mut builder = reqwest::Client::builder()
                    .user_agent(&opts.user_agent)
                    .timeout(transport.timeout)
                    .connect_timeout(transport.connect_timeout)
                    .min_tls_version(transport.min_tls_version)
                    .pool_max_idle_per_host(transport.pool_max_idle_per_host)
                    .pool_idle_timeout(transport.pool_idle_timeout)
                    .cookie_store(true)
                    .gzip(true)
                    .brotli(true)
                    .deflate(true);
                if transport.http1_only {
                    builder = builder.http1_only();
                }
                builder.build().map_err(|e| {
                    ScrapeError::transport(
                        "",
                        "BuildClient",
                        Some(anyhow!("failed to build HTTP client: {}", e)),
                    )
                })?
            }
        };

        Ok(Self { opts, http_client })
    }

    /// The options this client was built with.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    fn fetch_options(&self) -> FetchOptions {
        let mut headers = self.opts.headers.clone();
        // Sent per request so custom clients present the same browser identity.
        headers
            .entry("User-Agent".to_string())
            .or_insert_with(|| self.opts.user_agent.clone());
        FetchOptions { headers }
    }

    /// Fetch a page and decode it to text. Non-2xx responses are errors.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        debug!(url, "fetching page");
        let result = fetch(&self.http_client, url, &self.fetch_options()).await?;
        debug!(url, status = result.status, bytes = result.body.len(), "page fetched");
        Ok(result.text_utf8())
    }

    /// Crawl search results for a location, deduplicated by listing id.
    ///
    /// Pages are fetched in order until one comes back short or the page
    /// limit is reached. Any failed page aborts the crawl; its error carries
    /// the page number and earlier pages are discarded.
    pub async fn search(&self, location: &Location, status: ListingStatus) -> Result<Vec<Listing>> {
        let pagination = self.opts.pagination;
        let mut dedup = Dedup::new();

        for page in 1..=pagination.max_pages {
            let url = location.search_url(&self.opts.base_url, status, page);
            let raw = self
                .fetch_page(&url)
                .await
                .map_err(|e| e.with_page(page))?;
            let listings = parse_search_page(&raw, &url, status, self.opts.window)
                .map_err(|e| e.with_page(page))?;

            let found = listings.len();
            let added = dedup.insert_page(listings);
            info!(page, found, added, total = dedup.len(), "search page extracted");

            if is_last_page(found, &pagination) {
                break;
            }
        }

        Ok(dedup.into_listings())
    }

    /// Market statistics for a location.
    ///
    /// Without a neighborhood the known region's neighborhood page is used,
    /// but the area label still names only the city and state.
    pub async fn market_stats(&self, location: &Location) -> Result<MarketStats> {
        let area = location.area_label();
        let url = location
            .clone()
            .or_region_neighborhood(&self.opts.known_region)
            .stats_url(&self.opts.base_url);

        let raw = self.fetch_page(&url).await?;
        let page = Page::parse(&raw, &url)?;
        let stats = extract_market_stats(&page, &area);
        info!(
            area = %stats.area,
            median = stats.median_sale_price,
            "market stats extracted"
        );
        Ok(stats)
    }

    /// Details for a single listing URL. Best effort.
    ///
    /// Only an invalid URL is an error. Known-region listings are first looked
    /// up in the region's sold search results; otherwise the page is fetched,
    /// and if that fails the record parsed from the URL is returned.
    pub async fn listing_detail(&self, url: &str) -> Result<Listing> {
        let parsed = Url::parse(url).map_err(|e| {
            ScrapeError::invalid_url(url, "ListingDetail", Some(anyhow!("invalid URL: {}", e)))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ScrapeError::invalid_url(
                url,
                "ListingDetail",
                Some(anyhow!("scheme must be http or https")),
            ));
        }

        let site = DetailSite::for_url(&parsed);
        let mut listing = site.listing_from_url(&parsed);
        debug!(?site, address = %listing.address, city = %listing.city, "parsed listing URL");

        let region = &self.opts.known_region;
        if site == DetailSite::Generic
            && !listing.address.is_empty()
            && region.matches(&listing.city, &listing.state)
        {
            match self.search(&Location::from(region), ListingStatus::Sold).await {
                Ok(sold) => {
                    if let Some(hit) = find_by_address(&sold, &listing.address) {
                        info!(address = %hit.address, "listing found in sold search results");
                        return Ok(hit);
                    }
                }
                Err(err) => warn!(error = %err, "sold search lookup failed, fetching page"),
            }
        }

        let raw = match self.fetch_page(url).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "detail fetch failed, returning URL-derived listing");
                listing.finalize();
                return Ok(listing);
            }
        };

        match extract_detail(site, &raw, url, listing.clone(), region) {
            Ok(merged) => Ok(merged),
            Err(err) => {
                warn!(error = %err, "detail page unparseable, returning URL-derived listing");
                listing.finalize();
                Ok(listing)
            }
        }
    }
}
