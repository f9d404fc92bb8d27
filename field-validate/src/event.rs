//! Events crossing the decorator boundary.
//!
//! [`BlurEvent`] comes in from the host, [`ValidationEvent`] goes out to the
//! aggregator. [`BlurHandler`] is what the wrapped view calls when it loses
//! focus; it queues the event for the host loop instead of touching the
//! decorator directly.

use tokio::sync::mpsc;

/// Focus left the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlurEvent {
    /// Identifier of the element that lost focus.
    pub target: String,
}

impl BlurEvent {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// Validity change reported to `on_validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationEvent {
    /// The field's `name` prop.
    pub name: String,
    /// Whether the new error message is empty.
    pub is_valid: bool,
}

/// Blur handler handed to the wrapped view.
///
/// Clone-able and cheap. Events are queued and applied when the host pumps
/// the owning field; after teardown they are dropped.
#[derive(Clone, Debug)]
pub struct BlurHandler {
    tx: mpsc::UnboundedSender<BlurEvent>,
}

impl BlurHandler {
    /// Queue a blur event.
    ///
    /// Non-blocking. Errors are ignored (receiver closed = torn down).
    pub fn call(&self, event: BlurEvent) {
        let _ = self.tx.send(event);
    }

    /// Whether the owning field has been torn down.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving half of the blur queue, owned by the field.
#[derive(Debug)]
pub(crate) struct BlurQueue {
    rx: mpsc::UnboundedReceiver<BlurEvent>,
}

impl BlurQueue {
    /// Take the next queued event without waiting.
    pub(crate) fn try_next(&mut self) -> Option<BlurEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next event.
    pub(crate) async fn recv(&mut self) -> Option<BlurEvent> {
        self.rx.recv().await
    }

    /// Stop accepting events and discard anything still queued.
    pub(crate) fn close(&mut self) {
        self.rx.close();
        while self.rx.try_recv().is_ok() {}
    }
}

/// Create a connected handler/queue pair.
pub(crate) fn blur_channel() -> (BlurHandler, BlurQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (BlurHandler { tx }, BlurQueue { rx })
}
