// ABOUTME: Page fetching over the shared HTTP client with browser headers and size limits.
// ABOUTME: Maps timeouts, connection failures, and non-2xx statuses onto ScrapeError codes.

use std::collections::HashMap;

use anyhow::anyhow;
use bytes::Bytes;

use crate::error::{Result, ScrapeError};

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Options for fetching a resource.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Extra request headers, applied on top of the client defaults.
    pub headers: HashMap<String, String>,
}

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as UTF-8 text, using the content-type charset when present.
    pub fn text_utf8(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Decode body bytes to a String using charset from content-type header or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(encoding) = content_type
        .and_then(extract_charset)
        .and_then(|charset| encoding_rs::Encoding::for_label(charset.as_bytes()))
    {
        let (decoded, _, _) = encoding.decode(body);
        return decoded.into_owned();
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .to_lowercase()
        .split(';')
        .find_map(|part| {
            part.trim()
                .strip_prefix("charset=")
                .map(|charset| charset.trim_matches('"').trim_matches('\'').to_string())
        })
}

fn request_error(url: &str, err: reqwest::Error, what: &str) -> ScrapeError {
    if err.is_timeout() {
        ScrapeError::timeout(url, "Fetch", Some(anyhow!("{}: {}", what, err)))
    } else {
        ScrapeError::transport(url, "Fetch", Some(anyhow!("{}: {}", what, err)))
    }
}

/// Fetch a page. Any non-2xx response is an error; there are no retries.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult> {
    if url.is_empty() {
        return Err(ScrapeError::invalid_url(url, "Fetch", None));
    }

    let parsed_url = url::Url::parse(url).map_err(|e| {
        ScrapeError::invalid_url(url, "Fetch", Some(anyhow!("invalid URL: {}", e)))
    })?;

    let scheme = parsed_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ScrapeError::invalid_url(
            url,
            "Fetch",
            Some(anyhow!("scheme must be http or https")),
        ));
    }

    let mut request = client.get(parsed_url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| request_error(url, e, "request failed"))?;

    let status = response.status().as_u16();
    if !response.status().is_success() {
        return Err(ScrapeError::status(url, "Fetch", status));
    }

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(ScrapeError::parse(
                url,
                "Fetch",
                Some(anyhow!("content too large: {} bytes", len)),
            ));
        }
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response
        .bytes()
        .await
        .map_err(|e| request_error(url, e, "failed to read body"))?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(ScrapeError::parse(
            url,
            "Fetch",
            Some(anyhow!("content too large: {} bytes", body.len())),
        ));
    }

    Ok(FetchResult {
        status,
        content_type,
        body,
    })
}
