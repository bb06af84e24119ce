//! # Product Lookup
//!
//! Turns a scanned barcode into a product name and image by asking a
//! third-party product search service.
//!
//! A lookup is two requests: a search for the code (JSON, first hit only) and
//! a best-effort download of the first hit's image. The result is always one
//! of three outcomes, see [`LookupOutcome`]:
//!
//! | outcome          | when                                                  |
//! |------------------|-------------------------------------------------------|
//! | `Success`        | a product came back; its image may still be missing   |
//! | `DecodeFailure`  | the service answered, but not with a usable product   |
//! | `TransportError` | no answer at all, timeouts included                   |
//!
//! [`client::ProductLookup`] runs one lookup on the calling thread.
//! [`session::LookupSession`] runs lookups in the background and hands the
//! results back to the thread that owns it, discarding superseded ones.

use crate::config::LookupSettings;
use crate::error::{Result, StockpileError};
use crate::model::{ProductHit, SearchResult};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub mod client;
pub mod session;

pub use client::ProductLookup;
pub use session::{LookupEvent, LookupSession, Ticket};

/// Response-shaping parameters sent with every search.
const FIXED_PARAMS: [(&str, &str); 6] = [
    ("format", "json"),
    ("formatVersion", "2"),
    ("hits", "1"),
    ("imageFlag", "1"),
    ("sort", "-updateTimestamp"),
    ("elements", "itemName,mediumImageUrls"),
];

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);
const DEFAULT_HISTORY_LIMIT: usize = 32;

/// Validated settings for a [`ProductLookup`].
#[derive(Debug, Clone)]
pub struct LookupConfig {
    base_url: Url,
    application_id: String,
    pub timeout: Duration,
    pub image_timeout: Duration,
    pub history_limit: usize,
}

impl LookupConfig {
    /// Fails if either value is empty or the endpoint is not a URL.
    pub fn new(base_url: &str, application_id: &str) -> Result<Self> {
        let base_url = base_url.trim();
        let application_id = application_id.trim();
        if base_url.is_empty() {
            return Err(StockpileError::Config(
                "lookup.base-url is not set".to_string(),
            ));
        }
        if application_id.is_empty() {
            return Err(StockpileError::Config(
                "lookup.application-id is not set".to_string(),
            ));
        }
        let base_url = Url::parse(base_url).map_err(|e| {
            StockpileError::Config(format!("lookup.base-url is not a valid URL: {}", e))
        })?;

        Ok(Self {
            base_url,
            application_id: application_id.to_string(),
            timeout: DEFAULT_TIMEOUT,
            image_timeout: DEFAULT_TIMEOUT,
            history_limit: DEFAULT_HISTORY_LIMIT,
        })
    }

    pub fn from_settings(settings: &LookupSettings) -> Result<Self> {
        let mut config = Self::new(
            settings.base_url.as_deref().unwrap_or_default(),
            settings.application_id.as_deref().unwrap_or_default(),
        )?;
        config.timeout = Duration::from_secs(settings.timeout_secs);
        config.image_timeout = Duration::from_secs(settings.image_timeout_secs);
        config.history_limit = settings.history_limit;
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_image_timeout(mut self, timeout: Duration) -> Self {
        self.image_timeout = timeout;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The search URL for `item_code`. Every parameter is form-encoded, so
    /// reserved characters in the code cannot break the query.
    pub fn build_request_url(&self, item_code: &str) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("applicationId", &self.application_id)
                .append_pair("keyword", item_code);
            for (key, value) in FIXED_PARAMS {
                query.append_pair(key, value);
            }
        }
        url
    }
}

/// The part of the search response we read.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(rename = "Items")]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    #[serde(rename = "itemName")]
    pub item_name: String,
    #[serde(rename = "mediumImageUrls", default)]
    pub medium_image_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Success(ProductHit),
    DecodeFailure(String),
    TransportError(String),
}

impl LookupOutcome {
    pub fn result(&self) -> SearchResult {
        match self {
            LookupOutcome::Success(_) => SearchResult::Success,
            LookupOutcome::DecodeFailure(_) => SearchResult::Failure,
            LookupOutcome::TransportError(_) => SearchResult::Error,
        }
    }

    pub fn hit(&self) -> Option<&ProductHit> {
        match self {
            LookupOutcome::Success(hit) => Some(hit),
            _ => None,
        }
    }

    pub fn into_hit(self) -> Option<ProductHit> {
        match self {
            LookupOutcome::Success(hit) => Some(hit),
            _ => None,
        }
    }
}
