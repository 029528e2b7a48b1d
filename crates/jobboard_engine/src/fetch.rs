use std::env;
use std::time::Duration;

use jobboard_core::PageResult;
use reqwest::Url;

use crate::{ConfigError, FailureKind, FetchError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:4002/api";
pub const DEFAULT_PAGE_SIZE: u32 = 20;

const BASE_URL_VAR: &str = "JOBBOARD_API_BASE_URL";
const REQUEST_TIMEOUT_VAR: &str = "JOBBOARD_REQUEST_TIMEOUT_MS";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub page_size: u32,
    /// No timeouts unless the caller sets one.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

impl FetchSettings {
    /// Reads `JOBBOARD_API_BASE_URL` and `JOBBOARD_REQUEST_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`FetchSettings::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|value| !value.trim().is_empty()) {
            let base_url = base_url.trim().to_string();
            jobs_endpoint(&base_url).map_err(|err| ConfigError::BaseUrl {
                var: BASE_URL_VAR,
                reason: err.message,
            })?;
            settings.base_url = base_url;
        }

        if let Some(raw) = lookup(REQUEST_TIMEOUT_VAR).filter(|value| !value.trim().is_empty()) {
            let millis: u64 = raw.trim().parse().map_err(|_| ConfigError::Millis {
                var: REQUEST_TIMEOUT_VAR,
                value: raw.clone(),
            })?;
            settings.request_timeout = Some(Duration::from_millis(millis));
        }

        Ok(settings)
    }
}

/// The Fetch Gateway: one listing request per call, no retry, no caching.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_page(&self, page: i64, location: &str) -> Result<PageResult, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    endpoint: Url,
    page_size: u32,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let endpoint = jobs_endpoint(&settings.base_url)?;

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

        Ok(Self {
            client,
            endpoint,
            page_size: settings.page_size,
        })
    }

    /// Full request url for one page; `location` is sent only when non-blank.
    pub fn page_url(&self, page: i64, location: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("page", &page.to_string());
            query.append_pair("limit", &self.page_size.to_string());
            if !location.trim().is_empty() {
                query.append_pair("location", location);
            }
        }
        url
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch_page(&self, page: i64, location: &str) -> Result<PageResult, FetchError> {
        let url = self.page_url(page, location);

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

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

fn jobs_endpoint(base_url: &str) -> Result<Url, FetchError> {
    let joined = format!("{}/jobs", base_url.trim_end_matches('/'));
    let url = Url::parse(&joined)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(FetchError::new(
            FailureKind::InvalidUrl,
            format!("{base_url} cannot carry a path"),
        ));
    }
    Ok(url)
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
