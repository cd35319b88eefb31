use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::clients::LookupClient;
use crate::error::ConfigError;
use crate::lookup_actor::{LookupService, ResponseOrdering};
use crate::source::{HttpOrderSource, OrderSource};
use super::LookupConfig;

/// Starts the lookup actor, hands out its client and shuts it down.
pub struct LookupSystem {
    pub lookup_client: LookupClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl LookupSystem {
    /// Start against the HTTP backend named in `config`.
    #[instrument(name = "lookup_system", skip(config), fields(base_url = %config.base_url))]
    pub fn start(config: &LookupConfig) -> Result<Self, ConfigError> {
        let source = HttpOrderSource::new(config.base_url.clone())?;
        Ok(Self::with_source(
            Arc::new(source),
            config.ordering,
            config.buffer_size,
        ))
    }

    /// Start with any order source.
    pub fn with_source(
        source: Arc<dyn OrderSource>,
        ordering: ResponseOrdering,
        buffer_size: usize,
    ) -> Self {
        info!("Starting lookup system");

        let (lookup_service, lookup_client) = LookupService::new(buffer_size, source, ordering);
        let handles = vec![tokio::spawn(lookup_service.run())];

        info!("Lookup system started successfully");

        Self {
            lookup_client,
            handles,
        }
    }

    /// Stop the actor and wait for it. Fetches still in flight are abandoned.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down lookup system");

        let _ = self.lookup_client.shutdown().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
                return Err(format!("Lookup service failed: {:?}", e));
            }
        }

        info!("Lookup system shutdown complete");
        Ok(())
    }
}
