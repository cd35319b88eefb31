//! Command-line and environment configuration.

use clap::Parser;
use reqwest::Url;

use crate::error::ConfigError;
use crate::lookup_actor::ResponseOrdering;
use crate::render::Locale;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Parsed command-line arguments. Every option can also come from the
/// environment.
#[derive(Debug, Parser)]
#[command(name = "order_lookup", version, about = "Look up orders by id", long_about = None)]
pub struct Args {
    /// Backend origin; orders are fetched from `{base_url}/order/{id}`.
    #[arg(long, env = "ORDER_LOOKUP_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Language of the rendered view.
    #[arg(long, env = "ORDER_LOOKUP_LOCALE", value_enum, default_value = "en")]
    pub locale: Locale,

    /// Only show the response of the most recent submit.
    #[arg(long, env = "ORDER_LOOKUP_DISCARD_STALE")]
    pub discard_stale: bool,

    /// Mailbox capacity of the lookup actor.
    #[arg(long, default_value_t = 32)]
    pub buffer_size: usize,

    /// Ids to look up one after another. Without any, ids are read from stdin.
    #[arg(value_name = "ORDER_ID")]
    pub order_ids: Vec<String>,
}

/// Validated settings for [`crate::app_system::LookupSystem`].
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub base_url: Url,
    pub locale: Locale,
    pub ordering: ResponseOrdering,
    pub buffer_size: usize,
}

impl Args {
    pub fn lookup_config(&self) -> Result<LookupConfig, ConfigError> {
        let base_url = Url::parse(self.base_url.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        if self.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }

        let ordering = if self.discard_stale {
            ResponseOrdering::LatestSubmitted
        } else {
            ResponseOrdering::LastResolved
        };

        Ok(LookupConfig {
            base_url,
            locale: self.locale,
            ordering,
            buffer_size: self.buffer_size,
        })
    }
}
