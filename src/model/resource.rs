//! Consumable resources and their stock levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A consumable the machine draws on to serve a cup.
///
/// Powders and sugar are tracked in grams, milk in millilitres, cups by
/// count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    TeaPowder,
    CoffeePowder,
    Sugar,
    Milk,
    Cups,
}

impl Resource {
    /// Every resource, in the machine's fixed reporting order.
    pub const ALL: [Resource; 5] = [
        Resource::TeaPowder,
        Resource::CoffeePowder,
        Resource::Sugar,
        Resource::Milk,
        Resource::Cups,
    ];

    /// Lowercase label for inline messages ("Insufficient tea powder!").
    pub fn label(self) -> &'static str {
        match self {
            Resource::TeaPowder => "tea powder",
            Resource::CoffeePowder => "coffee powder",
            Resource::Sugar => "sugar",
            Resource::Milk => "milk",
            Resource::Cups => "cups",
        }
    }

    /// Sentence-leading label for alert messages.
    pub fn headline(self) -> &'static str {
        match self {
            Resource::TeaPowder => "Tea powder",
            Resource::CoffeePowder => "Coffee powder",
            Resource::Sugar => "Sugar",
            Resource::Milk => "Milk",
            Resource::Cups => "Cups",
        }
    }

    /// Render a quantity with this resource's unit ("5g", "150ml", "5 cups").
    pub fn format_quantity(self, quantity: u32) -> String {
        match self {
            Resource::TeaPowder | Resource::CoffeePowder | Resource::Sugar => {
                format!("{quantity}g")
            }
            Resource::Milk => format!("{quantity}ml"),
            Resource::Cups => format!("{quantity} cups"),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-resource quantities.
///
/// Used both as the machine's startup configuration and as the snapshot
/// pushed to the Display after every mutation. Quantities are unsigned, so a
/// negative stock level is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevels {
    /// Grams of tea powder.
    pub tea_powder: u32,
    /// Grams of coffee powder.
    pub coffee_powder: u32,
    /// Grams of sugar.
    pub sugar: u32,
    /// Millilitres of milk.
    pub milk: u32,
    /// Number of cups.
    pub cups: u32,
}

impl StockLevels {
    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::TeaPowder => self.tea_powder,
            Resource::CoffeePowder => self.coffee_powder,
            Resource::Sugar => self.sugar,
            Resource::Milk => self.milk,
            Resource::Cups => self.cups,
        }
    }

    pub(crate) fn get_mut(&mut self, resource: Resource) -> &mut u32 {
        match resource {
            Resource::TeaPowder => &mut self.tea_powder,
            Resource::CoffeePowder => &mut self.coffee_powder,
            Resource::Sugar => &mut self.sugar,
            Resource::Milk => &mut self.milk,
            Resource::Cups => &mut self.cups,
        }
    }
}

impl Default for StockLevels {
    /// The stock a machine ships with.
    fn default() -> Self {
        Self {
            tea_powder: 10,
            coffee_powder: 100,
            sugar: 200,
            milk: 2000,
            cups: 50,
        }
    }
}
