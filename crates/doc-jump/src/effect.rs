//! Effect system for the Redux architecture
//!
//! Reducers return (State, Vec<Effect>) where Effects describe side effects
//! to perform; the update() loop in main executes them.

use anyhow::Result;

use crate::{App, actions::Action};

/// Effects that reducers can request to be performed
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// (Re)arm the debounce timer for this query; any pending evaluation
    /// is cancelled wholesale
    ScheduleMatch { query: String },

    /// Cancel a pending debounced evaluation without scheduling a new one
    CancelPendingMatch,

    /// Arm the highlight-clear timer after a jump
    ScheduleHighlightClear,

    /// Dispatch a follow-up action
    DispatchAction(Action),
}

/// Execute an effect and return follow-up actions to dispatch
pub fn execute_effect(app: &mut App, effect: Effect) -> Result<Vec<Action>> {
    match effect {
        Effect::ScheduleMatch { query } => {
            let delay = app.store.state().config.debounce_ms;
            app.debouncer.schedule(query, delay);
            Ok(vec![])
        }
        Effect::CancelPendingMatch => {
            app.debouncer.cancel();
            Ok(vec![])
        }
        Effect::ScheduleHighlightClear => {
            let delay = app.store.state().config.highlight_ms;
            app.highlight_timer.schedule(delay);
            Ok(vec![])
        }
        Effect::DispatchAction(action) => Ok(vec![action]),
    }
}
