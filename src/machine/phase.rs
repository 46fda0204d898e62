//! The timed phases of the preparation sequence.

use std::time::Duration;

use crate::config::PhaseTimings;
use crate::display::{StatusKind, StatusUpdate};
use crate::model::{DrinkKind, Order};

/// One step of the preparation sequence.
///
/// Phases run strictly one after another; [`Phase::next`] encodes the whole
/// chain, including the conditional sugar step. `Celebrating` is the last
/// phase, after which the machine clears the order and returns to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Paying,
    PaymentConfirmed,
    Brewing,
    AddingMilk,
    AddingSugar,
    Pouring,
    Ready,
    Celebrating,
}

impl Phase {
    /// Configured duration of this phase.
    pub fn duration(self, timings: &PhaseTimings) -> Duration {
        match self {
            Phase::Paying => timings.payment,
            Phase::PaymentConfirmed => timings.payment_confirmation,
            Phase::Brewing => timings.brewing,
            Phase::AddingMilk => timings.adding_milk,
            Phase::AddingSugar => timings.adding_sugar,
            Phase::Pouring => timings.pouring,
            Phase::Ready => timings.ready,
            Phase::Celebrating => timings.celebration,
        }
    }

    /// The phase that follows this one, or `None` after `Celebrating`.
    ///
    /// The sugar step only exists when the order asks for sugar.
    pub fn next(self, with_sugar: bool) -> Option<Phase> {
        match self {
            Phase::Paying => Some(Phase::PaymentConfirmed),
            Phase::PaymentConfirmed => Some(Phase::Brewing),
            Phase::Brewing => Some(Phase::AddingMilk),
            Phase::AddingMilk if with_sugar => Some(Phase::AddingSugar),
            Phase::AddingMilk => Some(Phase::Pouring),
            Phase::AddingSugar => Some(Phase::Pouring),
            Phase::Pouring => Some(Phase::Ready),
            Phase::Ready => Some(Phase::Celebrating),
            Phase::Celebrating => None,
        }
    }

    /// The status line shown while this phase runs.
    pub fn status(self, order: &Order) -> StatusUpdate {
        let drink = order.drink.map_or("Beverage", DrinkKind::display_name);
        match self {
            Phase::Paying => StatusUpdate::new(
                StatusKind::Preparing,
                "💳",
                "Processing Payment...",
                format!("Amount: ₹{}", order.price),
            ),
            Phase::PaymentConfirmed => StatusUpdate::new(
                StatusKind::Preparing,
                "✅",
                "Payment Confirmed",
                "Starting preparation...",
            ),
            Phase::Brewing => {
                let subtitle = match order.drink {
                    Some(DrinkKind::Coffee) => "Grinding coffee beans...",
                    _ => "Steeping tea leaves...",
                };
                StatusUpdate::new(
                    StatusKind::Preparing,
                    "☕",
                    format!("Preparing Your {drink}"),
                    subtitle,
                )
            }
            Phase::AddingMilk => StatusUpdate::new(
                StatusKind::Preparing,
                "🥛",
                "Adding Milk",
                "Heating and mixing...",
            ),
            Phase::AddingSugar => StatusUpdate::new(
                StatusKind::Preparing,
                "🍬",
                "Adding Sugar",
                "Sweetening your beverage...",
            ),
            Phase::Pouring => StatusUpdate::new(
                StatusKind::Preparing,
                "🥤",
                "Pouring Into Cup",
                "Almost ready...",
            ),
            Phase::Ready => StatusUpdate::new(
                StatusKind::Ready,
                "☕",
                format!("Your {drink} is Ready!"),
                "Please collect your beverage from the dispenser",
            ),
            Phase::Celebrating => StatusUpdate::new(
                StatusKind::Success,
                "🎉",
                "Thank You!",
                "Enjoy your beverage. Have a great day!",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(with_sugar: bool) -> Vec<Phase> {
        let mut phases = vec![Phase::Paying];
        while let Some(next) = phases.last().unwrap().next(with_sugar) {
            phases.push(next);
        }
        phases
    }

    #[test]
    fn sugar_orders_run_every_phase() {
        assert_eq!(
            chain(true),
            vec![
                Phase::Paying,
                Phase::PaymentConfirmed,
                Phase::Brewing,
                Phase::AddingMilk,
                Phase::AddingSugar,
                Phase::Pouring,
                Phase::Ready,
                Phase::Celebrating,
            ]
        );
    }

    #[test]
    fn sugarless_orders_skip_the_sugar_step() {
        assert!(!chain(false).contains(&Phase::AddingSugar));
    }

    #[test]
    fn nominal_schedule_adds_up() {
        let timings = PhaseTimings::default();
        let total: Duration = chain(true)
            .into_iter()
            .map(|phase| phase.duration(&timings))
            .sum();
        assert_eq!(total, Duration::from_millis(15_000));
    }

    #[test]
    fn brew_status_varies_by_drink() {
        let tea = Order {
            drink: Some(DrinkKind::Tea),
            ..Order::default()
        };
        let coffee = Order {
            drink: Some(DrinkKind::Coffee),
            ..Order::default()
        };
        assert_eq!(Phase::Brewing.status(&tea).subtitle, "Steeping tea leaves...");
        assert_eq!(
            Phase::Brewing.status(&coffee).subtitle,
            "Grinding coffee beans..."
        );
        assert_eq!(Phase::Ready.status(&coffee).title, "Your Coffee is Ready!");
    }
}
