//! Renderer subscriptions.
//!
//! Every fired animation step is delivered to each subscriber in
//! registration order.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc;

use crate::error::RenderError;
use crate::primitive::{AnimationStep, SequenceId};

/// An animation step at the moment it fires.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiredStep {
    pub sequence_id: SequenceId,
    /// Position within the sequence, in execution order.
    pub step_index: usize,
    pub step: AnimationStep,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubscriptionId(pub u64);

pub(crate) type Callback = Arc<dyn Fn(&FiredStep) -> Result<(), RenderError> + Send + Sync>;

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, callback: Callback) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Callbacks in registration order, detached from the lock.
    pub(crate) fn snapshot(&self) -> Vec<Callback> {
        self.entries.iter().map(|(_, cb)| Arc::clone(cb)).collect()
    }
}

/// Deliver `fired` to every callback; all are invoked, the first error wins.
pub(crate) fn deliver(callbacks: &[Callback], fired: &FiredStep) -> Result<(), RenderError> {
    let mut first_error = None;
    for callback in callbacks {
        if let Err(e) = callback(fired) {
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}

/// Adapter that forwards fired steps into an unbounded channel.
pub(crate) fn channel_callback() -> (Callback, mpsc::UnboundedReceiver<FiredStep>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let callback: Callback = Arc::new(move |fired: &FiredStep| {
        // A dropped receiver just stops listening.
        let _ = tx.send(fired.clone());
        Ok(())
    });
    (callback, rx)
}
