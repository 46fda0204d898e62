//! The consumable-stock ledger.
//!
//! A single [`Inventory`] instance is owned by the machine actor; there is no
//! shared mutation. The only mutating operation is [`Inventory::debit`],
//! invoked once per fulfilled order after the caller has already validated
//! availability.

use thiserror::Error;

use crate::catalog::Recipe;
use crate::model::{Resource, StockLevels};

/// A debit was attempted against a resource that cannot cover it.
///
/// The machine always validates before debiting, so seeing this error means
/// the single-writer invariant was broken somewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("insufficient {0}")]
pub struct InsufficientStock(pub Resource);

/// Ledger of consumable quantities, mutated only at order completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    levels: StockLevels,
}

impl Inventory {
    pub fn new(levels: StockLevels) -> Self {
        Self { levels }
    }

    pub fn get(&self, resource: Resource) -> u32 {
        self.levels.get(resource)
    }

    /// Copy of the current levels, for the Display feed and alert checks.
    pub fn snapshot(&self) -> StockLevels {
        self.levels.clone()
    }

    /// True iff every requirement of the recipe can be covered.
    pub fn has_sufficient(&self, recipe: &Recipe) -> bool {
        self.first_shortfall(recipe).is_none()
    }

    /// The first requirement that cannot be covered, in recipe order.
    ///
    /// Recipes list drink powder before sugar before milk before cups, which
    /// fixes the one-shortage-at-a-time message the customer sees.
    pub fn first_shortfall(&self, recipe: &Recipe) -> Option<Resource> {
        recipe
            .items()
            .iter()
            .find(|(resource, required)| self.levels.get(*resource) < *required)
            .map(|(resource, _)| *resource)
    }

    /// Subtract every requirement of the recipe.
    ///
    /// All requirements are re-checked before anything is subtracted, so a
    /// failed debit leaves the ledger untouched and a partial deduction is
    /// never observable.
    pub fn debit(&mut self, recipe: &Recipe) -> Result<(), InsufficientStock> {
        if let Some(short) = self.first_shortfall(recipe) {
            return Err(InsufficientStock(short));
        }
        for (resource, required) in recipe.items() {
            *self.levels.get_mut(*resource) -= required;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::model::DrinkKind;

    fn inventory(tea_powder: u32, sugar: u32, milk: u32, cups: u32) -> Inventory {
        Inventory::new(StockLevels {
            tea_powder,
            coffee_powder: 100,
            sugar,
            milk,
            cups,
        })
    }

    #[test]
    fn debit_subtracts_every_requirement() {
        let mut inventory = inventory(10, 200, 2000, 50);
        let recipe = catalog::recipe_of(DrinkKind::Tea, true);

        inventory.debit(&recipe).unwrap();

        assert_eq!(inventory.get(Resource::TeaPowder), 5);
        assert_eq!(inventory.get(Resource::Sugar), 190);
        assert_eq!(inventory.get(Resource::Milk), 1950);
        assert_eq!(inventory.get(Resource::Cups), 49);
        assert_eq!(inventory.get(Resource::CoffeePowder), 100);
    }

    #[test]
    fn shortfall_reports_in_priority_order() {
        // Both powder and milk are short; powder is reported first.
        let inv = inventory(3, 5, 10, 0);
        let recipe = catalog::recipe_of(DrinkKind::Tea, true);
        assert_eq!(inv.first_shortfall(&recipe), Some(Resource::TeaPowder));

        // With powder covered, sugar is the next check.
        let inv = inventory(10, 5, 10, 0);
        assert_eq!(inv.first_shortfall(&recipe), Some(Resource::Sugar));

        // Without sugar in the recipe, milk is checked next.
        let no_sugar = catalog::recipe_of(DrinkKind::Tea, false);
        assert_eq!(inv.first_shortfall(&no_sugar), Some(Resource::Milk));
    }

    #[test]
    fn failed_debit_leaves_ledger_untouched() {
        let mut inventory = inventory(10, 200, 2000, 0);
        let before = inventory.snapshot();
        let recipe = catalog::recipe_of(DrinkKind::Tea, true);

        assert_eq!(
            inventory.debit(&recipe),
            Err(InsufficientStock(Resource::Cups))
        );
        assert_eq!(inventory.snapshot(), before);
    }

    #[test]
    fn exact_stock_is_sufficient() {
        let mut inventory = inventory(5, 10, 50, 1);
        let recipe = catalog::recipe_of(DrinkKind::Tea, true);
        assert!(inventory.has_sufficient(&recipe));
        inventory.debit(&recipe).unwrap();
        assert_eq!(inventory.get(Resource::TeaPowder), 0);
        assert_eq!(inventory.get(Resource::Cups), 0);
    }
}
