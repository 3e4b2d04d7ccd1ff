use std::time::Duration;

use futures_util::StreamExt;
use gallery_core::DEFAULT_PAGE_SIZE;
use gallery_logging::gallery_debug;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::normalize::normalize_page;
use crate::{FailureKind, FetchError, FetchedPage};

pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Fields requested from the artworks endpoint.
pub const ARTWORK_FIELDS: &str =
    "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    /// Sent as `limit` so the source pages the same way the browser does.
    pub page_size: u32,
    /// `None` waits indefinitely.
    pub connect_timeout: Option<Duration>,
    /// `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            connect_timeout: None,
            request_timeout: None,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// The paginated record source. `page_number` is one-based.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, page_number: u64) -> Result<FetchedPage, FetchError>;
}

#[derive(Debug, Deserialize)]
struct ArtworksEnvelope {
    data: Vec<Value>,
    #[serde(default)]
    pagination: Option<PaginationInfo>,
}

#[derive(Debug, Deserialize)]
struct PaginationInfo {
    #[serde(default)]
    total: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ReqwestPageSource {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestPageSource {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn page_url(&self, page_number: u64) -> Result<Url, FetchError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/artworks"))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("page", &page_number.to_string())
            .append_pair("limit", &self.settings.page_size.to_string())
            .append_pair("fields", ARTWORK_FIELDS);
        Ok(url)
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl PageSource for ReqwestPageSource {
    async fn fetch_page(&self, page_number: u64) -> Result<FetchedPage, FetchError> {
        let url = self.page_url(page_number)?;
        gallery_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = self.read_body(response).await?;
        let envelope: ArtworksEnvelope = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Malformed, err.to_string()))?;

        let reported_total = envelope.pagination.and_then(|p| p.total);
        gallery_debug!(
            "page {} returned {} records (source total {:?})",
            page_number,
            envelope.data.len(),
            reported_total
        );

        Ok(FetchedPage {
            page_number,
            records: normalize_page(&envelope.data),
            reported_total,
            fetched_at: None,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
