use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn, Instrument};

use crate::clients::LookupClient;
use crate::domain::Order;
use crate::messages::{LookupRequest, RequestSeq, ServiceResponse};
use crate::source::OrderSource;
use super::{LookupError, LookupStatus, ResponseOrdering};

/// Result of one fetch, reported back to the actor by the task that ran it.
#[derive(Debug)]
struct Completion {
    seq: RequestSeq,
    order_id: String,
    result: Result<Order, LookupError>,
}

/// Owns the order-id text and the lookup status.
///
/// State is only touched from [`LookupService::run`]: user requests arrive on
/// the mailbox, fetch results arrive on the completion channel. Each submit
/// spawns its fetch in the background so the mailbox keeps flowing while the
/// request is in flight. In-flight requests are never cancelled.
pub struct LookupService {
    receiver: mpsc::Receiver<LookupRequest>,
    completions: mpsc::UnboundedReceiver<Completion>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    source: Arc<dyn OrderSource>,
    ordering: ResponseOrdering,
    status: watch::Sender<LookupStatus>,
    order_id: String,
    next_seq: RequestSeq,
    /// Sequence of the submit whose result may still be shown; 0 after a clear.
    latest_seq: RequestSeq,
    in_flight: usize,
    /// Callers of `settled`, answered once `in_flight` drops to zero.
    settle_waiters: Vec<ServiceResponse<LookupStatus>>,
    #[cfg(test)]
    completed: usize,
}

impl LookupService {
    pub fn new(
        buffer_size: usize,
        source: Arc<dyn OrderSource>,
        ordering: ResponseOrdering,
    ) -> (Self, LookupClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (completion_tx, completions) = mpsc::unbounded_channel();
        let (status, status_rx) = watch::channel(LookupStatus::Idle);
        let service = Self {
            receiver,
            completions,
            completion_tx,
            source,
            ordering,
            status,
            order_id: String::new(),
            next_seq: 0,
            latest_seq: 0,
            in_flight: 0,
            settle_waiters: Vec::new(),
            #[cfg(test)]
            completed: 0,
        };
        let client = LookupClient::new(sender, status_rx);
        (service, client)
    }

    #[instrument(name = "lookup_service", skip(self), fields(ordering = ?self.ordering))]
    pub async fn run(mut self) {
        info!("LookupService starting");

        loop {
            tokio::select! {
                msg = self.receiver.recv() => {
                    let Some(msg) = msg else { break };
                    match msg {
                        LookupRequest::SetOrderId { text, respond_to } => {
                            self.handle_set_order_id(text, respond_to);
                        }
                        LookupRequest::Submit { id, respond_to } => {
                            self.handle_submit(Some(id), respond_to);
                        }
                        LookupRequest::SubmitCurrent { respond_to } => {
                            self.handle_submit(None, respond_to);
                        }
                        LookupRequest::Settled { respond_to } => {
                            self.handle_settled(respond_to);
                        }
                        LookupRequest::Clear { respond_to } => {
                            self.handle_clear(respond_to);
                        }
                        LookupRequest::GetStatus { respond_to } => {
                            let _ = respond_to.send(self.status.borrow().clone());
                        }
                        LookupRequest::GetOrderId { respond_to } => {
                            let _ = respond_to.send(self.order_id.clone());
                        }
                        LookupRequest::Shutdown => {
                            info!("LookupService shutting down");
                            break;
                        }
                        #[cfg(test)]
                        LookupRequest::GetCompletionCount { respond_to } => {
                            let _ = respond_to.send(self.completed);
                        }
                    }
                }
                Some(done) = self.completions.recv() => {
                    self.handle_completion(done);
                }
            }
        }

        info!("LookupService stopped");
    }

    fn handle_set_order_id(&mut self, text: String, respond_to: ServiceResponse<()>) {
        self.order_id = text;
        let _ = respond_to.send(());
    }

    /// Submit `id`, or the held text when `id` is `None`. A blank id changes
    /// nothing, not even the held text.
    #[instrument(skip(self, respond_to))]
    fn handle_submit(&mut self, id: Option<String>, respond_to: ServiceResponse<Option<RequestSeq>>) {
        let order_id = id.as_deref().unwrap_or(&self.order_id).trim().to_string();
        if order_id.is_empty() {
            debug!("Ignoring submit with empty order id");
            let _ = respond_to.send(None);
            return;
        }
        if let Some(id) = id {
            self.order_id = id;
        }

        self.next_seq += 1;
        let seq = self.next_seq;
        self.latest_seq = seq;
        self.in_flight += 1;
        self.publish(LookupStatus::Loading);
        info!(seq, "Lookup started");

        let source = Arc::clone(&self.source);
        let completion_tx = self.completion_tx.clone();
        let span = tracing::info_span!("fetch_order", seq, order_id = %order_id);
        tokio::spawn(
            async move {
                let result = source.fetch(&order_id).await;
                // The actor may already be gone; the result is simply dropped then.
                let _ = completion_tx.send(Completion {
                    seq,
                    order_id,
                    result,
                });
            }
            .instrument(span),
        );

        let _ = respond_to.send(Some(seq));
    }

    fn handle_settled(&mut self, respond_to: ServiceResponse<LookupStatus>) {
        if self.in_flight == 0 {
            let _ = respond_to.send(self.status.borrow().clone());
        } else {
            debug!(in_flight = self.in_flight, "Deferring settled reply");
            self.settle_waiters.push(respond_to);
        }
    }

    fn handle_clear(&mut self, respond_to: ServiceResponse<()>) {
        debug!("Clearing lookup");
        self.order_id.clear();
        self.latest_seq = 0;
        self.publish(LookupStatus::Idle);
        let _ = respond_to.send(());
    }

    #[instrument(fields(seq = done.seq, order_id = %done.order_id), skip(self, done))]
    fn handle_completion(&mut self, done: Completion) {
        #[cfg(test)]
        {
            self.completed += 1;
        }
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.ordering == ResponseOrdering::LatestSubmitted && done.seq != self.latest_seq {
            warn!(latest_seq = self.latest_seq, "Discarding stale response");
            self.answer_settle_waiters();
            return;
        }

        let status = match done.result {
            Ok(order) => {
                info!(items = order.items.len(), "Order found");
                LookupStatus::Success(order)
            }
            Err(LookupError::NotFound) => {
                info!("Order not found");
                LookupStatus::Error(LookupError::NotFound)
            }
            Err(e) => {
                warn!(error = %e, "Lookup failed");
                LookupStatus::Error(e)
            }
        };
        self.publish(status);
        self.answer_settle_waiters();
    }

    fn answer_settle_waiters(&mut self) {
        if self.in_flight > 0 {
            return;
        }
        let status = self.status.borrow().clone();
        for respond_to in self.settle_waiters.drain(..) {
            let _ = respond_to.send(status.clone());
        }
    }

    fn publish(&self, status: LookupStatus) {
        self.status.send_replace(status);
    }
}
