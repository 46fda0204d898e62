//! Low-stock alerting.
//!
//! Alerts are derived values: [`evaluate`] recomputes the full list from a
//! stock snapshot on every call, and nothing is stored. The machine runs an
//! evaluation at startup and after every inventory debit, pushing the result
//! to the Display.

use serde::Serialize;

use crate::model::{Resource, StockLevels};

/// How urgently a resource needs a refill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

/// One refill advisory for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub severity: Severity,
    pub resource: Resource,
    pub message: String,
}

struct Thresholds {
    critical: u32,
    low: u32,
}

/// Absolute cutoffs per resource. A quantity at or below `critical` is
/// urgent; at or below `low` it is worth a warning.
const fn thresholds(resource: Resource) -> Thresholds {
    match resource {
        Resource::TeaPowder | Resource::CoffeePowder => Thresholds {
            critical: 10,
            low: 20,
        },
        // Sugar turns critical already at 20g, not 10g.
        Resource::Sugar => Thresholds {
            critical: 20,
            low: 40,
        },
        Resource::Milk => Thresholds {
            critical: 200,
            low: 400,
        },
        Resource::Cups => Thresholds {
            critical: 5,
            low: 10,
        },
    }
}

/// Evaluate every resource against its thresholds.
///
/// Resources are checked independently, in the machine's fixed reporting
/// order, so one snapshot can yield several alerts at once.
pub fn evaluate(stock: &StockLevels) -> Vec<Alert> {
    let mut alerts = Vec::new();
    for resource in Resource::ALL {
        let quantity = stock.get(resource);
        let cutoffs = thresholds(resource);

        let alert = if quantity == 0 {
            Some(Alert {
                severity: Severity::Critical,
                resource,
                message: format!(
                    "{} is completely out of stock. Please refill immediately.",
                    resource.headline()
                ),
            })
        } else if quantity <= cutoffs.critical {
            Some(Alert {
                severity: Severity::Critical,
                resource,
                message: format!(
                    "Only {} remaining. Urgent refill needed.",
                    resource.format_quantity(quantity)
                ),
            })
        } else if quantity <= cutoffs.low {
            Some(Alert {
                severity: Severity::Warning,
                resource,
                message: format!(
                    "{} is running low ({} remaining). Please refill soon.",
                    resource.headline(),
                    resource.format_quantity(quantity)
                ),
            })
        } else {
            None
        };

        alerts.extend(alert);
    }
    alerts
}
