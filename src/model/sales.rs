//! The sales ledger and its Display-facing report.

use serde::Serialize;

use super::DrinkKind;

/// Running sales counters, credited once per fulfilled order.
///
/// All counters are monotonically non-decreasing; nothing ever refunds or
/// rolls a sale back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesLedger {
    pub tea_sold: u32,
    pub coffee_sold: u32,
    pub total_revenue: u32,
    pub total_cost: u32,
}

impl SalesLedger {
    /// Credit one fulfilled cup.
    pub fn record_sale(&mut self, kind: DrinkKind, price: u32, cost: u32) {
        match kind {
            DrinkKind::Tea => self.tea_sold += 1,
            DrinkKind::Coffee => self.coffee_sold += 1,
        }
        self.total_revenue += price;
        self.total_cost += cost;
    }

    /// Snapshot for the Display, including the derived profit.
    pub fn report(&self) -> SalesReport {
        SalesReport {
            tea_sold: self.tea_sold,
            coffee_sold: self.coffee_sold,
            total_revenue: self.total_revenue,
            total_cost: self.total_cost,
            profit: self.total_revenue - self.total_cost,
        }
    }
}

/// Point-in-time sales figures pushed to the Display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub tea_sold: u32,
    pub coffee_sold: u32,
    pub total_revenue: u32,
    pub total_cost: u32,
    /// `total_revenue - total_cost`. Selling prices exceed making costs for
    /// every catalog entry, so this never underflows.
    pub profit: u32,
}
