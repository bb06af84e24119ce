use super::{LookupConfig, LookupOutcome, SearchResponse};
use crate::model::{ProductHit, SearchResult};
use chrono::Utc;
use std::io::Read;
use tracing::{debug, info, warn};

/// Images larger than this are treated as a failed download.
const MAX_IMAGE_BYTES: u64 = 8 * 1024 * 1024;

/// Blocking client for the product search service.
pub struct ProductLookup {
    config: LookupConfig,
    agent: ureq::Agent,
    image_agent: ureq::Agent,
}

impl ProductLookup {
    pub fn new(config: LookupConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        let image_agent = ureq::AgentBuilder::new()
            .timeout(config.image_timeout)
            .build();
        Self {
            config,
            agent,
            image_agent,
        }
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Searches for `item_code` and downloads the first hit's image.
    pub fn search_item(&self, item_code: &str) -> LookupOutcome {
        let url = self.config.build_request_url(item_code);
        debug!(keyword = item_code, endpoint = %self.config.base_url(), "searching product");

        let response = match self.agent.get(url.as_str()).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => {
                warn!(keyword = item_code, status = code, "product search rejected");
                return LookupOutcome::DecodeFailure(format!("service answered HTTP {}", code));
            }
            Err(ureq::Error::Transport(e)) => {
                warn!(keyword = item_code, error = %e, "product search unreachable");
                return LookupOutcome::TransportError(e.to_string());
            }
        };

        let body = match response.into_string() {
            Ok(body) => body,
            Err(e) => {
                warn!(keyword = item_code, error = %e, "product search response cut off");
                return LookupOutcome::TransportError(e.to_string());
            }
        };

        let payload: SearchResponse = match serde_json::from_str(&body) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(keyword = item_code, error = %e, "product search response not understood");
                return LookupOutcome::DecodeFailure(e.to_string());
            }
        };

        let Some(item) = payload.items.into_iter().next() else {
            info!(keyword = item_code, "no product matches code");
            return LookupOutcome::DecodeFailure("no product matches this code".to_string());
        };

        let image_url = item.medium_image_urls.into_iter().next();
        let image = image_url.as_deref().and_then(|url| self.fetch_image(url));
        debug!(
            item = %item.item_name,
            image_bytes = image.as_ref().map(Vec::len).unwrap_or(0),
            "product found"
        );

        LookupOutcome::Success(ProductHit {
            item_name: item.item_name,
            image_url,
            image,
            fetched_at: Utc::now(),
        })
    }

    /// Runs [`search_item`](Self::search_item) and reports its tag to `finish`
    /// exactly once before returning the full outcome.
    pub fn search_item_with<F>(&self, item_code: &str, finish: F) -> LookupOutcome
    where
        F: FnOnce(SearchResult),
    {
        let outcome = self.search_item(item_code);
        finish(outcome.result());
        outcome
    }

    fn fetch_image(&self, url: &str) -> Option<Vec<u8>> {
        let response = match self.image_agent.get(url).call() {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, error = %e, "image download failed");
                return None;
            }
        };

        let mut bytes = Vec::new();
        if let Err(e) = response
            .into_reader()
            .take(MAX_IMAGE_BYTES + 1)
            .read_to_end(&mut bytes)
        {
            warn!(%url, error = %e, "image download interrupted");
            return None;
        }
        if bytes.len() as u64 > MAX_IMAGE_BYTES {
            warn!(%url, "image too large, skipped");
            return None;
        }
        Some(bytes)
    }
}
