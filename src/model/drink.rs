//! The servable drink menu and the active order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the two drinks the machine can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkKind {
    Tea,
    Coffee,
}

impl DrinkKind {
    /// Lowercase menu name, as the Display surface sends it ("tea", "coffee").
    pub fn name(self) -> &'static str {
        match self {
            DrinkKind::Tea => "tea",
            DrinkKind::Coffee => "coffee",
        }
    }

    /// Capitalized name for customer-facing status lines.
    pub fn display_name(self) -> &'static str {
        match self {
            DrinkKind::Tea => "Tea",
            DrinkKind::Coffee => "Coffee",
        }
    }
}

impl fmt::Display for DrinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse failure for a drink name that is not on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown drink: {0}")]
pub struct UnknownDrink(pub String);

impl FromStr for DrinkKind {
    type Err = UnknownDrink;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tea" => Ok(DrinkKind::Tea),
            "coffee" => Ok(DrinkKind::Coffee),
            other => Err(UnknownDrink(other.to_string())),
        }
    }
}

/// The single in-progress transaction.
///
/// Exactly one order exists per machine. It is populated while the customer
/// is choosing, read-only while the machine prepares the drink, and reset to
/// defaults after the cup is collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Selected drink; `None` until the customer picks from the menu.
    pub drink: Option<DrinkKind>,
    /// Sugar preference. Defaults to true.
    pub with_sugar: bool,
    /// Selling price in ₹, looked up from the catalog on selection.
    pub price: u32,
    /// Making cost in ₹, looked up from the catalog on selection.
    pub cost: u32,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            drink: None,
            with_sugar: true,
            price: 0,
            cost: 0,
        }
    }
}

impl Order {
    /// Reset back to the defaults of a fresh order.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_names_only() {
        assert_eq!("tea".parse::<DrinkKind>(), Ok(DrinkKind::Tea));
        assert_eq!("coffee".parse::<DrinkKind>(), Ok(DrinkKind::Coffee));
        assert_eq!(
            "soda".parse::<DrinkKind>(),
            Err(UnknownDrink("soda".to_string()))
        );
    }

    #[test]
    fn cleared_order_is_default() {
        let mut order = Order {
            drink: Some(DrinkKind::Coffee),
            with_sugar: false,
            price: 20,
            cost: 12,
        };
        order.clear();
        assert_eq!(order, Order::default());
    }
}
