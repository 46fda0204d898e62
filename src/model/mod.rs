//! Pure data structures shared across the machine: drinks, orders,
//! resources, stock levels and the sales ledger.

pub mod drink;
pub mod resource;
pub mod sales;

pub use drink::*;
pub use resource::*;
pub use sales::*;
