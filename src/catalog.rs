//! Fixed price, cost and recipe tables.
//!
//! The catalog is pure lookup over the closed [`DrinkKind`] menu; it never
//! changes at runtime and has no side effects. Unknown drink names are
//! rejected earlier, when the Display's string input is parsed.

use crate::model::{DrinkKind, Resource};

/// Grams of sugar added per cup when the customer wants sugar.
pub const SUGAR_PER_CUP: u32 = 10;

/// Millilitres of milk per cup, identical for both drinks.
pub const MILK_PER_CUP: u32 = 50;

/// Selling price in ₹.
pub fn price_of(kind: DrinkKind) -> u32 {
    match kind {
        DrinkKind::Tea => 15,
        DrinkKind::Coffee => 20,
    }
}

/// Making cost in ₹.
pub fn cost_of(kind: DrinkKind) -> u32 {
    match kind {
        DrinkKind::Tea => 8,
        DrinkKind::Coffee => 12,
    }
}

fn powder_of(kind: DrinkKind) -> (Resource, u32) {
    match kind {
        DrinkKind::Tea => (Resource::TeaPowder, 5),
        DrinkKind::Coffee => (Resource::CoffeePowder, 7),
    }
}

/// Per-cup resource requirements for one drink.
///
/// Requirements are ordered by the machine's validation priority: drink
/// powder, then sugar, then milk, then cups. Stock checks report the first
/// entry that falls short, so this ordering decides which shortage the
/// customer hears about first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    items: Vec<(Resource, u32)>,
}

impl Recipe {
    pub fn items(&self) -> &[(Resource, u32)] {
        &self.items
    }
}

/// Build the recipe for one cup, including the sugar addend when selected.
pub fn recipe_of(kind: DrinkKind, with_sugar: bool) -> Recipe {
    let mut items = vec![powder_of(kind)];
    if with_sugar {
        items.push((Resource::Sugar, SUGAR_PER_CUP));
    }
    items.push((Resource::Milk, MILK_PER_CUP));
    items.push((Resource::Cups, 1));
    Recipe { items }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tea_recipe_with_sugar() {
        let recipe = recipe_of(DrinkKind::Tea, true);
        assert_eq!(
            recipe.items(),
            &[
                (Resource::TeaPowder, 5),
                (Resource::Sugar, 10),
                (Resource::Milk, 50),
                (Resource::Cups, 1),
            ]
        );
    }

    #[test]
    fn coffee_recipe_without_sugar_skips_the_addend() {
        let recipe = recipe_of(DrinkKind::Coffee, false);
        assert_eq!(
            recipe.items(),
            &[
                (Resource::CoffeePowder, 7),
                (Resource::Milk, 50),
                (Resource::Cups, 1),
            ]
        );
    }

    #[test]
    fn prices_cover_costs() {
        for kind in [DrinkKind::Tea, DrinkKind::Coffee] {
            assert!(price_of(kind) > cost_of(kind));
        }
    }
}
