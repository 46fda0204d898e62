//! The order-lifecycle state machine.
//!
//! One machine is one actor: all mutable state (inventory, sales ledger,
//! active order) lives inside [`MachineActor`], and callers talk to it
//! through a [`MachineClient`](crate::clients::MachineClient).

pub mod actor;
pub mod error;
pub mod phase;

pub use actor::{MachineActor, MachineRequest, Response};
pub use error::MachineError;
pub use phase::Phase;

use tokio::sync::mpsc;

use crate::clients::MachineClient;
use crate::config::MachineConfig;
use crate::display::DisplayEvent;
use crate::inventory::Inventory;

/// Number of requests the machine queues before senders wait.
const MAILBOX_SIZE: usize = 32;

/// Creates a new machine actor, its client, and the Display event stream.
pub fn new(
    config: MachineConfig,
) -> (
    MachineActor,
    MachineClient,
    mpsc::UnboundedReceiver<DisplayEvent>,
) {
    let (sender, receiver) = mpsc::channel(MAILBOX_SIZE);
    let (events, display_events) = mpsc::unbounded_channel();

    let actor = MachineActor::new(
        receiver,
        sender.downgrade(),
        events,
        Inventory::new(config.initial_stock),
        config.timings,
    );
    let client = MachineClient::new(sender);

    (actor, client, display_events)
}
