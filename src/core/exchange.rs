use std::sync::Arc;

use tokio::sync::mpsc;

use crate::core::backend::{ChatBackend, ExchangeFailed};
use crate::core::session::{ExchangeId, PendingExchange};

/// Outcome of one exchange, tagged with the exchange it belongs to.
#[derive(Debug)]
pub struct ExchangeOutcome {
    pub id: ExchangeId,
    pub result: Result<String, ExchangeFailed>,
}

/// Runs exchanges off the event loop and reports each outcome on a channel.
#[derive(Clone)]
pub struct ExchangeService {
    backend: Arc<dyn ChatBackend>,
    tx: mpsc::UnboundedSender<ExchangeOutcome>,
}

impl ExchangeService {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
    ) -> (Self, mpsc::UnboundedReceiver<ExchangeOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { backend, tx }, rx)
    }

    pub fn spawn_exchange(&self, exchange: PendingExchange) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let PendingExchange { id, message } = exchange;
            let result = backend.submit(&message).await;
            let _ = tx.send(ExchangeOutcome { id, result });
        });
    }
}
