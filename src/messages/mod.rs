use tokio::sync::oneshot;
use crate::lookup_actor::LookupStatus;

/// Reply channel carried by every request. The lookup actor never fails a
/// request itself; fetch failures live in [`LookupStatus`].
pub type ServiceResponse<T> = oneshot::Sender<T>;

/// Sequence number assigned to each submit that issued a request.
pub type RequestSeq = u64;

/// Typed messages for the lookup actor. Each variant includes parameters
/// and a oneshot channel for the response.
#[derive(Debug)]
pub enum LookupRequest {
    SetOrderId {
        text: String,
        respond_to: ServiceResponse<()>,
    },
    /// Replace the held text with `id`, then submit it.
    Submit {
        id: String,
        respond_to: ServiceResponse<Option<RequestSeq>>,
    },
    /// Submit whatever text is currently held.
    SubmitCurrent {
        respond_to: ServiceResponse<Option<RequestSeq>>,
    },
    /// Answered with the current status once no request is in flight.
    Settled {
        respond_to: ServiceResponse<LookupStatus>,
    },
    Clear {
        respond_to: ServiceResponse<()>,
    },
    GetStatus {
        respond_to: ServiceResponse<LookupStatus>,
    },
    GetOrderId {
        respond_to: ServiceResponse<String>,
    },
    Shutdown,
    #[cfg(test)]
    GetCompletionCount {
        respond_to: ServiceResponse<usize>,
    },
}
