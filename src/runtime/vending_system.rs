use tokio::sync::mpsc;
use tracing::{error, info};

use crate::clients::MachineClient;
use crate::config::MachineConfig;
use crate::display::DisplayEvent;
use crate::machine;

/// The runtime orchestrator for one vending machine.
///
/// `VendingSystem` spawns the machine actor, hands out the client, and
/// coordinates graceful shutdown. The Display event stream is returned
/// separately from [`VendingSystem::new`] so the Display can be driven by
/// its own task.
///
/// # Example
///
/// ```ignore
/// let (system, mut display_events) = VendingSystem::new(MachineConfig::default());
///
/// system.client.select_drink("tea").await?;
/// system.client.submit_order().await?;
///
/// while let Some(event) = display_events.recv().await {
///     // render
/// }
///
/// system.shutdown().await?;
/// ```
pub struct VendingSystem {
    /// Client for interacting with the machine actor.
    pub client: MachineClient,

    /// Task handle of the running actor, awaited on shutdown.
    handle: tokio::task::JoinHandle<()>,
}

impl VendingSystem {
    /// Spawns the machine actor and returns the system plus the Display
    /// event stream.
    pub fn new(config: MachineConfig) -> (Self, mpsc::UnboundedReceiver<DisplayEvent>) {
        let (actor, client, display_events) = machine::new(config);
        let handle = tokio::spawn(actor.run());

        (Self { client, handle }, display_events)
    }

    /// Gracefully shuts down the machine.
    ///
    /// Dropping the client closes the actor's channel; the actor drains its
    /// mailbox, lets an in-flight brew finish, and exits. Returns an error
    /// if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down vending machine...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Machine task failed: {e:?}");
            return Err(format!("Machine task failed: {e:?}"));
        }

        info!("Shutdown complete");
        Ok(())
    }
}
