//! Reply routing for awaited requests
//!
//! Only `getCurrentConfig` and `getProxyToken` register here; every other
//! request is fire-and-forget and never touches the pending map. There is
//! deliberately no timeout: the runtime owns the pace.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;
use tokio::sync::{oneshot, RwLock};

/// Global request ID counter
static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a unique request ID
pub fn next_request_id() -> u64 {
    REQUEST_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A routed reply
#[derive(Debug, Clone)]
pub struct Reply {
    pub id: u64,
    pub success: bool,
    pub result: Option<Value>,
    pub error: Option<String>,
}

impl Reply {
    pub fn from_frame(id: u64, result: Option<Value>, error: Option<Value>) -> Self {
        Self {
            id,
            success: error.is_none(),
            result,
            error: error.map(|e| e.to_string()),
        }
    }

    pub fn failure(id: u64, message: impl Into<String>) -> Self {
        Self {
            id,
            success: false,
            result: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Default)]
struct Pending {
    map: HashMap<u64, oneshot::Sender<Reply>>,
    /// Set once the connection is gone; later registrations fail at once
    closed: Option<String>,
}

/// Matches inbound reply frames to pending requests
pub struct ReplyRouter {
    pending: RwLock<Pending>,
}

impl ReplyRouter {
    pub fn new() -> Self {
        Self {
            pending: RwLock::new(Pending::default()),
        }
    }

    /// Register a new pending request.
    /// Returns (request_id, receiver for the reply). A request registered
    /// after the connection died resolves with a failure immediately.
    pub async fn register(&self) -> (u64, oneshot::Receiver<Reply>) {
        let id = next_request_id();
        let (tx, rx) = oneshot::channel();
        let mut pending = self.pending.write().await;
        if let Some(reason) = &pending.closed {
            let _ = tx.send(Reply::failure(id, reason.clone()));
        } else {
            pending.map.insert(id, tx);
        }
        (id, rx)
    }

    /// Route an inbound reply frame.
    /// Returns true if it matched a pending request.
    pub async fn resolve(&self, id: u64, result: Option<Value>, error: Option<Value>) -> bool {
        if let Some(tx) = self.pending.write().await.map.remove(&id) {
            let _ = tx.send(Reply::from_frame(id, result, error));
            true
        } else {
            false
        }
    }

    /// Fail every pending request and mark the router closed
    pub async fn fail_all(&self, reason: &str) {
        let mut pending = self.pending.write().await;
        pending.closed = Some(reason.to_string());
        for (id, tx) in pending.map.drain() {
            let _ = tx.send(Reply::failure(id, reason));
        }
    }

    /// Number of pending requests
    pub async fn pending_count(&self) -> usize {
        self.pending.read().await.map.len()
    }
}

impl Default for ReplyRouter {
    fn default() -> Self {
        Self::new()
    }
}
