use std::time::Duration;

use brewmatic::config::{MachineConfig, PhaseTimings};
use brewmatic::display::{DisplayEvent, StatusUpdate};
use brewmatic::machine::MachineError;
use brewmatic::model::{Resource, StockLevels};
use brewmatic::monitor::Severity;
use brewmatic::runtime::VendingSystem;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::timeout;

fn instant_config(initial_stock: StockLevels) -> MachineConfig {
    MachineConfig {
        initial_stock,
        timings: PhaseTimings::instant(),
    }
}

async fn next_event(events: &mut UnboundedReceiver<DisplayEvent>) -> DisplayEvent {
    timeout(Duration::from_secs(5), events.recv())
        .await
        .expect("timed out waiting for display event")
        .expect("display stream closed")
}

async fn next_status(events: &mut UnboundedReceiver<DisplayEvent>) -> StatusUpdate {
    loop {
        if let DisplayEvent::Status(status) = next_event(events).await {
            return status;
        }
    }
}

/// Consume events up to and including the startup idle prompt.
async fn drain_startup(events: &mut UnboundedReceiver<DisplayEvent>) {
    loop {
        if next_status(events).await.title == "Ready to Serve" {
            return;
        }
    }
}

/// Collect status titles until the machine resets to idle.
async fn collect_titles_until_idle(events: &mut UnboundedReceiver<DisplayEvent>) -> Vec<String> {
    let mut titles = Vec::new();
    loop {
        let status = next_status(events).await;
        let done = status.title == "Ready to Serve";
        titles.push(status.title);
        if done {
            return titles;
        }
    }
}

/// On startup the Display receives the complete machine picture before any
/// customer interaction: stock, alerts, sales, the (empty) order summary
/// and the idle prompt, in that order.
#[tokio::test]
async fn startup_pushes_the_full_display_picture() {
    let (system, mut events) = VendingSystem::new(instant_config(StockLevels::default()));

    assert!(matches!(next_event(&mut events).await, DisplayEvent::Stock(_)));
    assert!(matches!(next_event(&mut events).await, DisplayEvent::Alerts(_)));
    assert!(matches!(next_event(&mut events).await, DisplayEvent::Sales(_)));
    assert!(matches!(
        next_event(&mut events).await,
        DisplayEvent::OrderSummary(_)
    ));
    let status = next_status(&mut events).await;
    assert_eq!(status.title, "Ready to Serve");

    system.shutdown().await.expect("shutdown failed");
}

/// A tea with sugar walks through every phase in order.
#[tokio::test]
async fn full_brew_emits_the_phase_sequence_in_order() {
    let (system, mut events) = VendingSystem::new(instant_config(StockLevels::default()));
    drain_startup(&mut events).await;

    system.client.select_drink("tea").await.unwrap();
    system.client.submit_order().await.unwrap();

    let titles = collect_titles_until_idle(&mut events).await;
    assert_eq!(
        titles,
        vec![
            "Selection Updated",
            "Processing Payment...",
            "Payment Confirmed",
            "Preparing Your Tea",
            "Adding Milk",
            "Adding Sugar",
            "Pouring Into Cup",
            "Your Tea is Ready!",
            "Thank You!",
            "Ready to Serve",
        ]
    );

    system.shutdown().await.unwrap();
}

/// Without sugar, the sugar phase disappears from the sequence entirely.
#[tokio::test]
async fn sugarless_brew_skips_the_sugar_phase() {
    let (system, mut events) = VendingSystem::new(instant_config(StockLevels::default()));
    drain_startup(&mut events).await;

    system.client.select_drink("coffee").await.unwrap();
    system.client.toggle_sugar(false).await.unwrap();
    system.client.submit_order().await.unwrap();

    let titles = collect_titles_until_idle(&mut events).await;
    assert!(!titles.iter().any(|t| t == "Adding Sugar"));
    assert!(titles.iter().any(|t| t == "Preparing Your Coffee"));
    assert!(titles.iter().any(|t| t == "Your Coffee is Ready!"));

    system.shutdown().await.unwrap();
}

/// A machine that starts with no cups reports a critical alert before any
/// order activity.
#[tokio::test]
async fn empty_cups_raise_a_critical_alert_at_startup() {
    let stock = StockLevels {
        cups: 0,
        ..StockLevels::default()
    };
    let (system, mut events) = VendingSystem::new(instant_config(stock));

    // The startup push carries the alert.
    let alerts = loop {
        if let DisplayEvent::Alerts(alerts) = next_event(&mut events).await {
            break alerts;
        }
    };
    let cups_alert = alerts
        .iter()
        .find(|a| a.resource == Resource::Cups)
        .expect("expected a cups alert");
    assert_eq!(cups_alert.severity, Severity::Critical);
    assert!(cups_alert.message.contains("completely out of stock"));

    // And the on-demand query agrees.
    let queried = system.client.alerts().await.unwrap();
    assert!(queried
        .iter()
        .any(|a| a.resource == Resource::Cups && a.severity == Severity::Critical));

    system.shutdown().await.unwrap();
}

/// Sugar's critical cutoff sits at 20g; one gram above is only a warning.
#[tokio::test]
async fn sugar_alert_boundary_is_asymmetric() {
    let at_cutoff = StockLevels {
        sugar: 20,
        ..StockLevels::default()
    };
    let (system, _events) = VendingSystem::new(instant_config(at_cutoff));
    let alerts = system.client.alerts().await.unwrap();
    let sugar = alerts
        .iter()
        .find(|a| a.resource == Resource::Sugar)
        .expect("expected a sugar alert");
    assert_eq!(sugar.severity, Severity::Critical);
    system.shutdown().await.unwrap();

    let above_cutoff = StockLevels {
        sugar: 21,
        ..StockLevels::default()
    };
    let (system, _events) = VendingSystem::new(instant_config(above_cutoff));
    let alerts = system.client.alerts().await.unwrap();
    let sugar = alerts
        .iter()
        .find(|a| a.resource == Resource::Sugar)
        .expect("expected a sugar alert");
    assert_eq!(sugar.severity, Severity::Warning);
    system.shutdown().await.unwrap();
}

/// Consecutive orders drain the machine to exactly zero, alerts follow the
/// debits, and the first uncoverable order is rejected.
#[tokio::test]
async fn consecutive_orders_deplete_stock_without_going_negative() {
    let (system, mut events) = VendingSystem::new(instant_config(StockLevels::default()));
    drain_startup(&mut events).await;

    // The default fill holds exactly two teas' worth of tea powder.
    for _ in 0..2 {
        system.client.select_drink("tea").await.unwrap();
        system.client.submit_order().await.unwrap();
        collect_titles_until_idle(&mut events).await;
    }

    let stock = system.client.stock().await.unwrap();
    assert_eq!(stock.tea_powder, 0);
    assert_eq!(stock.sugar, 180);
    assert_eq!(stock.milk, 1900);
    assert_eq!(stock.cups, 48);

    let alerts = system.client.alerts().await.unwrap();
    let tea_alert = alerts
        .iter()
        .find(|a| a.resource == Resource::TeaPowder)
        .expect("expected a tea powder alert");
    assert_eq!(tea_alert.severity, Severity::Critical);
    assert!(tea_alert.message.contains("completely out of stock"));

    // A third tea cannot be covered.
    system.client.select_drink("tea").await.unwrap();
    assert_eq!(
        system.client.submit_order().await,
        Err(MachineError::InsufficientStock(Resource::TeaPowder))
    );

    let sales = system.client.sales().await.unwrap();
    assert_eq!(sales.tea_sold, 2);
    assert_eq!(sales.total_revenue, 30);
    assert_eq!(sales.total_cost, 16);
    assert_eq!(sales.profit, 14);
}

/// Shutting down mid-brew lets the accepted order run to completion: the
/// customer has paid, so the books are settled before the machine stops.
#[tokio::test]
async fn shutdown_mid_brew_finishes_the_order() {
    let (system, mut events) = VendingSystem::new(instant_config(StockLevels::default()));
    drain_startup(&mut events).await;

    system.client.select_drink("tea").await.unwrap();
    system.client.submit_order().await.unwrap();

    // Drop the client right away; the brew is still in its payment phase.
    system.shutdown().await.expect("mid-brew shutdown failed");

    // Everything the actor emitted before exiting is still buffered.
    let mut saw_ready = false;
    let mut final_stock = None;
    let mut final_sales = None;
    while let Some(event) = events.recv().await {
        match event {
            DisplayEvent::Status(status) if status.title == "Your Tea is Ready!" => {
                saw_ready = true;
            }
            DisplayEvent::Stock(stock) => final_stock = Some(stock),
            DisplayEvent::Sales(sales) => final_sales = Some(sales),
            _ => {}
        }
    }

    assert!(saw_ready, "the brew must complete despite the shutdown");
    let stock = final_stock.expect("expected a stock push from the completed order");
    assert_eq!(stock.tea_powder, 5);
    assert_eq!(stock.cups, 49);
    let sales = final_sales.expect("expected a sales push from the completed order");
    assert_eq!(sales.tea_sold, 1);
    assert_eq!(sales.total_revenue, 15);
}

/// Shutdown drains cleanly whether or not any order was placed.
#[tokio::test]
async fn graceful_shutdown() {
    let (system, _events) = VendingSystem::new(instant_config(StockLevels::default()));
    system.shutdown().await.expect("idle shutdown failed");

    let (system, mut events) = VendingSystem::new(instant_config(StockLevels::default()));
    drain_startup(&mut events).await;
    system.client.select_drink("coffee").await.unwrap();
    system.client.submit_order().await.unwrap();
    collect_titles_until_idle(&mut events).await;
    system.shutdown().await.expect("post-order shutdown failed");
}
