//! The one-way event contract between the machine core and the Display.
//!
//! The Display is an external collaborator that renders whatever the core
//! pushes; it owns no logic. Events flow over an unbounded channel and every
//! payload is serializable, so a Display process can live anywhere.
//!
//! Status updates carry a default icon per phase. The Display is free to
//! substitute its own artwork; the icon is a hint, not a contract.

use serde::Serialize;

use crate::model::{DrinkKind, SalesReport, StockLevels};
use crate::monitor::Alert;

/// Status classes the Display styles differently, mirroring the five looks
/// of the machine front panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Waiting for, or updating, a selection. The order button is live.
    Idle,
    /// Payment or preparation in progress. The order button is disabled.
    Preparing,
    /// The cup is waiting in the dispenser.
    Ready,
    /// Farewell after a fulfilled order.
    Success,
    /// A rejected order or selection.
    Error,
}

/// One line of the status area: `{kind, icon, title, subtitle}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub kind: StatusKind,
    pub icon: &'static str,
    pub title: String,
    pub subtitle: String,
}

impl StatusUpdate {
    pub fn new(
        kind: StatusKind,
        icon: &'static str,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            icon,
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// The customer's current selection, for the order-summary panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// `None` renders as "None" before anything is selected.
    pub drink: Option<DrinkKind>,
    pub with_sugar: bool,
    /// Amount due in ₹.
    pub total: u32,
}

/// Everything the core ever tells the Display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "payload")]
pub enum DisplayEvent {
    /// A state transition or error banner.
    Status(StatusUpdate),
    /// The selection panel changed.
    OrderSummary(OrderSummary),
    /// Stock snapshot, pushed at startup and after every debit.
    Stock(StockLevels),
    /// Sales figures, pushed at startup and after every fulfilled order.
    Sales(SalesReport),
    /// Refill advisories, pushed after every stock evaluation.
    Alerts(Vec<Alert>),
}
