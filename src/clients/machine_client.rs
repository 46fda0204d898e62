use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::machine::{MachineError, MachineRequest};
use crate::model::{SalesReport, StockLevels};
use crate::monitor::Alert;

/// Client for interacting with the machine actor.
///
/// `select_drink`, `toggle_sugar` and `submit_order` are the entire
/// externally invocable surface of the core; the snapshot queries are
/// read-only and exist for dashboards and tests. Clones share the same
/// machine.
#[derive(Clone)]
pub struct MachineClient {
    sender: mpsc::Sender<MachineRequest>,
}

impl MachineClient {
    pub(crate) fn new(sender: mpsc::Sender<MachineRequest>) -> Self {
        Self { sender }
    }

    /// Select a drink by menu name ("tea" or "coffee").
    #[instrument(skip(self))]
    pub async fn select_drink(&self, name: &str) -> Result<(), MachineError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(MachineRequest::SelectDrink {
                name: name.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| MachineError::ActorClosed)?;
        response.await.map_err(|_| MachineError::ActorDropped)?
    }

    /// Set the sugar preference of the current selection.
    #[instrument(skip(self))]
    pub async fn toggle_sugar(&self, with_sugar: bool) -> Result<(), MachineError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(MachineRequest::ToggleSugar {
                with_sugar,
                respond_to,
            })
            .await
            .map_err(|_| MachineError::ActorClosed)?;
        response.await.map_err(|_| MachineError::ActorDropped)?
    }

    /// Pay for the current selection and start preparation.
    ///
    /// Resolves as soon as the order is accepted; preparation progress is
    /// reported through the Display event stream.
    #[instrument(skip(self))]
    pub async fn submit_order(&self) -> Result<(), MachineError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(MachineRequest::SubmitOrder { respond_to })
            .await
            .map_err(|_| MachineError::ActorClosed)?;
        response.await.map_err(|_| MachineError::ActorDropped)?
    }

    /// Current stock levels.
    #[instrument(skip(self))]
    pub async fn stock(&self) -> Result<StockLevels, MachineError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(MachineRequest::Stock { respond_to })
            .await
            .map_err(|_| MachineError::ActorClosed)?;
        response.await.map_err(|_| MachineError::ActorDropped)?
    }

    /// Current sales figures.
    #[instrument(skip(self))]
    pub async fn sales(&self) -> Result<SalesReport, MachineError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(MachineRequest::Sales { respond_to })
            .await
            .map_err(|_| MachineError::ActorClosed)?;
        response.await.map_err(|_| MachineError::ActorDropped)?
    }

    /// Current refill advisories.
    #[instrument(skip(self))]
    pub async fn alerts(&self) -> Result<Vec<Alert>, MachineError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(MachineRequest::Alerts { respond_to })
            .await
            .map_err(|_| MachineError::ActorClosed)?;
        response.await.map_err(|_| MachineError::ActorDropped)?
    }
}
