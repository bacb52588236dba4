//! Timer tasks driving the debounced search and the transient highlight
//!
//! Both timers send their result back to the main loop as an Action over
//! the shared channel, so the reducers stay synchronous and pure.

use log::debug;
use tokio::{sync::mpsc, task::JoinHandle, time::Duration};

use crate::actions::Action;

/// Cancel-and-reschedule debounce timer for query evaluation
///
/// Each keystroke replaces the pending timer wholesale; only the text of
/// the last schedule within a quiet interval ever gets evaluated.
pub struct Debouncer {
    action_tx: mpsc::UnboundedSender<Action>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            action_tx,
            pending: None,
        }
    }

    /// Arm the timer for this query, aborting any pending evaluation
    pub fn schedule(&mut self, query: String, delay_ms: u64) {
        self.cancel();

        let action_tx = self.action_tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            debug!("Debounce fired for {:?}", query);
            let _ = action_tx.send(Action::EvaluateQuery(query));
        }));
    }

    /// Abort the pending evaluation, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// One-shot timer that clears the jump highlight
///
/// A new jump before the previous highlight expires restarts the clock,
/// so the highlight always lasts its full duration on the latest target.
pub struct HighlightTimer {
    action_tx: mpsc::UnboundedSender<Action>,
    pending: Option<JoinHandle<()>>,
}

impl HighlightTimer {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            action_tx,
            pending: None,
        }
    }

    pub fn schedule(&mut self, delay_ms: u64) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let action_tx = self.action_tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            let _ = action_tx.send(Action::ClearHighlight);
        }));
    }
}
