//! Demo binary: drives one machine through a couple of orders and renders
//! the Display event stream as log lines.

use brewmatic::config::MachineConfig;
use brewmatic::display::DisplayEvent;
use brewmatic::runtime::{setup_tracing, VendingSystem};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info, warn};

/// Render events until the machine reports it is ready for the next
/// customer.
async fn render_until_idle(events: &mut UnboundedReceiver<DisplayEvent>) {
    while let Some(event) = events.recv().await {
        match event {
            DisplayEvent::Status(status) => {
                info!(
                    icon = status.icon,
                    subtitle = status.subtitle,
                    "[display] {}",
                    status.title
                );
                if status.title == "Ready to Serve" {
                    return;
                }
            }
            DisplayEvent::OrderSummary(summary) => {
                let drink = summary.drink.map_or("None", |kind| kind.display_name());
                info!(
                    drink,
                    with_sugar = summary.with_sugar,
                    total = summary.total,
                    "[display] order summary"
                );
            }
            DisplayEvent::Stock(stock) => {
                info!(?stock, "[display] stock");
            }
            DisplayEvent::Sales(sales) => {
                info!(?sales, "[display] sales");
            }
            DisplayEvent::Alerts(alerts) => {
                for alert in alerts {
                    warn!(resource = %alert.resource, severity = ?alert.severity, "[display] {}", alert.message);
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting vending machine");
    let (system, mut display_events) = VendingSystem::new(MachineConfig::default());

    // Startup push: stock, alerts, sales, idle prompt.
    render_until_idle(&mut display_events).await;

    // A cup of tea, with sugar (the default).
    system
        .client
        .select_drink("tea")
        .await
        .map_err(|e| e.to_string())?;
    system
        .client
        .submit_order()
        .await
        .map_err(|e| e.to_string())?;
    render_until_idle(&mut display_events).await;

    // A coffee without sugar.
    system
        .client
        .select_drink("coffee")
        .await
        .map_err(|e| e.to_string())?;
    system
        .client
        .toggle_sugar(false)
        .await
        .map_err(|e| e.to_string())?;
    system
        .client
        .submit_order()
        .await
        .map_err(|e| e.to_string())?;
    render_until_idle(&mut display_events).await;

    // Off-menu requests are rejected, not served.
    if let Err(e) = system.client.select_drink("latte").await {
        error!(error = %e, "Selection rejected");
    }

    let sales = system.client.sales().await.map_err(|e| e.to_string())?;
    info!(
        cups = sales.tea_sold + sales.coffee_sold,
        revenue = sales.total_revenue,
        profit = sales.profit,
        "Session totals"
    );

    system.shutdown().await?;
    Ok(())
}
