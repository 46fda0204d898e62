//! Error types for the machine actor.

use thiserror::Error;

use crate::inventory::InsufficientStock;
use crate::model::{Resource, UnknownDrink};

/// Errors that can occur while operating the machine.
///
/// None of these is fatal: user-facing failures additionally surface as
/// error status events for the Display, and nothing is retried
/// automatically.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError {
    /// A drink name that is not on the menu was passed to selection.
    #[error("Invalid drink kind: {0}")]
    InvalidDrinkKind(String),

    /// The machine cannot cover the order's recipe. The order stays
    /// selected so the customer can retry after a restock or pick
    /// something else.
    #[error("Insufficient stock: {0}")]
    InsufficientStock(Resource),

    /// An operation was invoked in a state that does not permit it, e.g.
    /// submitting while a brew is already running.
    #[error("Operation '{op}' is not allowed while {state}")]
    InvalidTransition {
        op: &'static str,
        state: &'static str,
    },

    /// The machine actor is no longer running.
    #[error("Machine actor closed")]
    ActorClosed,

    /// The machine actor dropped the response channel.
    #[error("Machine actor dropped response channel")]
    ActorDropped,
}

impl From<UnknownDrink> for MachineError {
    fn from(e: UnknownDrink) -> Self {
        MachineError::InvalidDrinkKind(e.0)
    }
}

impl From<InsufficientStock> for MachineError {
    fn from(e: InsufficientStock) -> Self {
        MachineError::InsufficientStock(e.0)
    }
}
