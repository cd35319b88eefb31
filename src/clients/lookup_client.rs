use tokio::sync::{mpsc, watch};
use tracing::{debug, instrument};

use crate::error::ClientError;
use crate::lookup_actor::LookupStatus;
use crate::messages::{LookupRequest, RequestSeq};
use super::macros::client_method;

/// Handle to the lookup actor.
///
/// Cheap to clone. Besides request methods it hands out status
/// subscriptions, which is how the view learns about transitions that happen
/// after a fetch completes.
#[derive(Clone)]
pub struct LookupClient {
    sender: mpsc::Sender<LookupRequest>,
    status_rx: watch::Receiver<LookupStatus>,
}

impl LookupClient {
    pub fn new(sender: mpsc::Sender<LookupRequest>, status_rx: watch::Receiver<LookupStatus>) -> Self {
        Self { sender, status_rx }
    }

    /// Receiver that yields every status the actor publishes from now on.
    pub fn subscribe(&self) -> watch::Receiver<LookupStatus> {
        let mut status_rx = self.status_rx.clone();
        status_rx.mark_unchanged();
        status_rx
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ClientError> {
        debug!("Sending shutdown request");
        self.sender
            .send(LookupRequest::Shutdown)
            .await
            .map_err(|e| ClientError::ActorCommunicationError(e.to_string()))?;
        Ok(())
    }
}

client_method!(LookupClient => fn set_order_id(text: String) -> () as LookupRequest::SetOrderId);
client_method!(LookupClient => fn submit(id: String) -> Option<RequestSeq> as LookupRequest::Submit);
client_method!(LookupClient => fn submit_current() -> Option<RequestSeq> as LookupRequest::SubmitCurrent);
client_method!(LookupClient => fn clear() -> () as LookupRequest::Clear);
// Resolves once every submitted request has completed, with the status then shown.
client_method!(LookupClient => fn settled() -> LookupStatus as LookupRequest::Settled);
client_method!(LookupClient => fn status() -> LookupStatus as LookupRequest::GetStatus);
client_method!(LookupClient => fn order_id() -> String as LookupRequest::GetOrderId);

#[cfg(test)]
client_method!(LookupClient => fn completion_count() -> usize as LookupRequest::GetCompletionCount);
