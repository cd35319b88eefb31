use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::{debug, instrument, warn};

use crate::domain::Order;
use crate::error::ConfigError;
use crate::lookup_actor::LookupError;
use super::OrderSource;

/// Fetches orders with a plain `GET {base_url}/order/{order_id}`.
pub struct HttpOrderSource {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpOrderSource {
    pub fn new(base_url: Url) -> Result<Self, ConfigError> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: Url, http: reqwest::Client) -> Result<Self, ConfigError> {
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }

        Ok(Self { http, base_url })
    }

    /// The id becomes one percent-encoded path segment, so `/` and spaces in
    /// it cannot change the route.
    pub fn order_url(&self, order_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("order").push(order_id);
        }
        url
    }
}

/// 404 is the "not found" domain error, any other non-2xx keeps its code.
pub fn classify_status(status: StatusCode) -> Result<(), LookupError> {
    if status == StatusCode::NOT_FOUND {
        return Err(LookupError::NotFound);
    }
    if !status.is_success() {
        return Err(LookupError::Http {
            code: status.as_u16(),
        });
    }
    Ok(())
}

#[async_trait]
impl OrderSource for HttpOrderSource {
    #[instrument(skip(self))]
    async fn fetch(&self, order_id: &str) -> Result<Order, LookupError> {
        let url = self.order_url(order_id);
        debug!(url = %url, "Requesting order");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::other(e.to_string()))?;

        let status = response.status();
        classify_status(status)?;

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::other(e.to_string()))?;

        serde_json::from_str::<Order>(&body).map_err(|e| {
            warn!(error = %e, "Failed to parse order response");
            LookupError::other(format!("Failed to parse order response: {}", e))
        })
    }
}
