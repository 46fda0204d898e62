//! The machine actor: a message loop owning all mutable state.
//!
//! # Concurrency Model
//! One `MachineActor` owns the inventory, the sales ledger and the active
//! order, and processes its messages sequentially. No locks are needed, and
//! the debit-and-credit step at order completion runs inside a single
//! message-handling step, so the Display can never observe stock without the
//! matching sale.
//!
//! # Timed phases
//! The preparation sequence advances on [`MachineRequest::Advance`] messages.
//! Entering a phase schedules exactly one timer task that sleeps for the
//! phase's configured duration and then sends `Advance` back to the actor.
//! While idle the actor keeps only a [`mpsc::WeakSender`] to itself, so the
//! channel closes and the loop exits once every client is gone. Accepting an
//! order upgrades that to a strong handle held until the machine resets,
//! which keeps the channel open through the whole phase chain: a running
//! brew finishes, debit and credit included, even if every client is
//! dropped mid-brew.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use crate::catalog;
use crate::config::PhaseTimings;
use crate::display::{DisplayEvent, OrderSummary, StatusKind, StatusUpdate};
use crate::inventory::Inventory;
use crate::model::{DrinkKind, Order, SalesLedger, SalesReport, StockLevels};
use crate::monitor::{self, Alert};

use super::error::MachineError;
use super::phase::Phase;

/// One-shot response channel for a machine request.
pub type Response<T> = oneshot::Sender<Result<T, MachineError>>;

/// Messages the machine actor processes.
///
/// The first three variants are the entire externally invocable surface of
/// the core; the snapshot queries are read-only; `Advance` is internal and
/// only ever sent by the actor's own phase timers.
#[derive(Debug)]
pub enum MachineRequest {
    SelectDrink {
        name: String,
        respond_to: Response<()>,
    },
    ToggleSugar {
        with_sugar: bool,
        respond_to: Response<()>,
    },
    SubmitOrder {
        respond_to: Response<()>,
    },
    Stock {
        respond_to: Response<StockLevels>,
    },
    Sales {
        respond_to: Response<SalesReport>,
    },
    Alerts {
        respond_to: Response<Vec<Alert>>,
    },
    /// A phase timer elapsed. `seq` guards against stale timers.
    Advance { seq: u64 },
}

/// Where the machine is in the order lifecycle.
///
/// Validation happens synchronously while a submit message is handled, and a
/// failed order lands back in `Selected` before the next message is
/// processed, so neither needs a state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MachineState {
    /// No drink chosen. Only selection is accepted.
    Idle,
    /// A drink is chosen; the customer may re-select, toggle sugar or
    /// submit.
    Selected,
    /// The preparation sequence is running. Every command is rejected until
    /// the machine resets.
    Preparing(Phase),
}

impl MachineState {
    fn name(self) -> &'static str {
        match self {
            MachineState::Idle => "idle",
            MachineState::Selected => "selected",
            MachineState::Preparing(_) => "preparing",
        }
    }
}

/// The actor that drives one vending machine.
pub struct MachineActor {
    receiver: mpsc::Receiver<MachineRequest>,
    /// Weak handle back to our own mailbox.
    timer_tx: mpsc::WeakSender<MachineRequest>,
    /// Strong self-handle held while a brew is in flight, so the phase
    /// chain runs to completion even after the last client is dropped.
    brew_tx: Option<mpsc::Sender<MachineRequest>>,
    events: mpsc::UnboundedSender<DisplayEvent>,
    inventory: Inventory,
    sales: SalesLedger,
    order: Order,
    state: MachineState,
    timings: PhaseTimings,
    /// Sequence number of the most recently scheduled phase timer.
    timer_seq: u64,
}

impl MachineActor {
    pub(super) fn new(
        receiver: mpsc::Receiver<MachineRequest>,
        timer_tx: mpsc::WeakSender<MachineRequest>,
        events: mpsc::UnboundedSender<DisplayEvent>,
        inventory: Inventory,
        timings: PhaseTimings,
    ) -> Self {
        Self {
            receiver,
            timer_tx,
            brew_tx: None,
            events,
            inventory,
            sales: SalesLedger::default(),
            order: Order::default(),
            state: MachineState::Idle,
            timings,
            timer_seq: 0,
        }
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes.
    pub async fn run(mut self) {
        info!(stock = ?self.inventory.snapshot(), "Vending machine started");

        // The Display gets a full picture before the first customer shows
        // up: stock, alerts, sales and the idle prompt.
        self.push_stock_and_alerts();
        self.push_sales();
        self.emit_summary();
        self.emit_status(idle_status());

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                MachineRequest::SelectDrink { name, respond_to } => {
                    let result = self.handle_select(&name);
                    let _ = respond_to.send(result);
                }
                MachineRequest::ToggleSugar {
                    with_sugar,
                    respond_to,
                } => {
                    let result = self.handle_toggle(with_sugar);
                    let _ = respond_to.send(result);
                }
                MachineRequest::SubmitOrder { respond_to } => {
                    let result = self.handle_submit();
                    let _ = respond_to.send(result);
                }
                MachineRequest::Stock { respond_to } => {
                    let _ = respond_to.send(Ok(self.inventory.snapshot()));
                }
                MachineRequest::Sales { respond_to } => {
                    let _ = respond_to.send(Ok(self.sales.report()));
                }
                MachineRequest::Alerts { respond_to } => {
                    let alerts = monitor::evaluate(&self.inventory.snapshot());
                    let _ = respond_to.send(Ok(alerts));
                }
                MachineRequest::Advance { seq } => self.handle_advance(seq),
            }
        }

        info!(
            cups_served = self.sales.tea_sold + self.sales.coffee_sold,
            "Vending machine stopped"
        );
    }

    fn handle_select(&mut self, name: &str) -> Result<(), MachineError> {
        if let MachineState::Preparing(_) = self.state {
            debug!(drink = name, "Selection rejected: preparation in progress");
            return Err(MachineError::InvalidTransition {
                op: "select_drink",
                state: self.state.name(),
            });
        }

        let kind: DrinkKind = match name.parse() {
            Ok(kind) => kind,
            Err(e) => {
                warn!(drink = name, "Selection rejected: not on the menu");
                self.emit_status(StatusUpdate::new(
                    StatusKind::Error,
                    "❌",
                    "Invalid Selection",
                    format!("{name} is not on the menu"),
                ));
                return Err(MachineError::from(e));
            }
        };

        self.order.drink = Some(kind);
        self.order.price = catalog::price_of(kind);
        self.order.cost = catalog::cost_of(kind);
        self.state = MachineState::Selected;
        info!(drink = %kind, price = self.order.price, "Drink selected");

        self.emit_summary();
        self.emit_status(StatusUpdate::new(
            StatusKind::Idle,
            "🛒",
            "Selection Updated",
            "Click \"Order & Pay Now\" to proceed",
        ));
        Ok(())
    }

    fn handle_toggle(&mut self, with_sugar: bool) -> Result<(), MachineError> {
        if self.state != MachineState::Selected {
            debug!(with_sugar, "Sugar toggle rejected: no active selection");
            return Err(MachineError::InvalidTransition {
                op: "toggle_sugar",
                state: self.state.name(),
            });
        }

        self.order.with_sugar = with_sugar;
        debug!(with_sugar, "Sugar preference updated");
        self.emit_summary();
        Ok(())
    }

    fn handle_submit(&mut self) -> Result<(), MachineError> {
        let kind = match (self.state, self.order.drink) {
            (MachineState::Selected, Some(kind)) => kind,
            (MachineState::Preparing(_), _) => {
                debug!("Order rejected: preparation in progress");
                return Err(MachineError::InvalidTransition {
                    op: "submit_order",
                    state: self.state.name(),
                });
            }
            _ => {
                warn!("Order rejected: no drink selected");
                self.emit_status(StatusUpdate::new(
                    StatusKind::Error,
                    "❌",
                    "Order Failed",
                    "Please select a drink first",
                ));
                return Err(MachineError::InvalidTransition {
                    op: "submit_order",
                    state: self.state.name(),
                });
            }
        };

        let recipe = catalog::recipe_of(kind, self.order.with_sugar);
        if let Some(short) = self.inventory.first_shortfall(&recipe) {
            warn!(drink = %kind, resource = %short, "Order rejected: insufficient stock");
            self.emit_status(StatusUpdate::new(
                StatusKind::Error,
                "❌",
                "Order Failed",
                format!("Insufficient {short}!"),
            ));
            // The selection is kept so the customer can retry or re-pick.
            return Err(MachineError::InsufficientStock(short));
        }

        info!(drink = %kind, price = self.order.price, "Order accepted");
        // Keep our own mailbox open until the machine resets; the customer
        // has paid, so the brew must outlive any client.
        self.brew_tx = self.timer_tx.upgrade();
        self.enter_phase(Phase::Paying);
        Ok(())
    }

    fn handle_advance(&mut self, seq: u64) {
        if seq != self.timer_seq {
            debug!(seq, current = self.timer_seq, "Ignoring stale phase timer");
            return;
        }
        let MachineState::Preparing(phase) = self.state else {
            debug!(seq, state = self.state.name(), "Ignoring phase timer outside preparation");
            return;
        };

        match phase.next(self.order.with_sugar) {
            // The pour just finished: settle the order before presenting it.
            Some(Phase::Ready) => self.complete_order(),
            Some(next) => self.enter_phase(next),
            None => self.clear_order(),
        }
    }

    /// Transition into a phase: show its status and start its timer.
    fn enter_phase(&mut self, phase: Phase) {
        self.state = MachineState::Preparing(phase);
        debug!(?phase, "Entering phase");
        self.emit_status(phase.status(&self.order));
        self.schedule_advance(phase);
    }

    fn schedule_advance(&mut self, phase: Phase) {
        self.timer_seq += 1;
        let seq = self.timer_seq;
        let delay = phase.duration(&self.timings);
        let Some(tx) = self.brew_tx.clone().or_else(|| self.timer_tx.upgrade()) else {
            debug!(?phase, "Shutting down; phase timer not scheduled");
            return;
        };
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(MachineRequest::Advance { seq }).await;
        });
    }

    /// Debit the inventory and credit the ledger as one unit, then present
    /// the cup.
    fn complete_order(&mut self) {
        let Some(kind) = self.order.drink else {
            error!("Order completion reached without a selected drink");
            self.clear_order();
            return;
        };

        let recipe = catalog::recipe_of(kind, self.order.with_sugar);
        if let Err(e) = self.inventory.debit(&recipe) {
            // Stock was validated at submission and nothing else writes to
            // the inventory, so this branch is unreachable in normal flow.
            error!(error = %e, "Inventory debit failed at completion");
            self.emit_status(StatusUpdate::new(
                StatusKind::Error,
                "❌",
                "Order Failed",
                format!("Insufficient {}!", e.0),
            ));
            self.clear_order();
            return;
        }
        self.sales
            .record_sale(kind, self.order.price, self.order.cost);
        info!(
            drink = %kind,
            revenue = self.order.price,
            cost = self.order.cost,
            "Order fulfilled"
        );

        self.push_stock_and_alerts();
        self.push_sales();
        self.enter_phase(Phase::Ready);
    }

    /// Reset the order and return to idle.
    fn clear_order(&mut self) {
        self.order.clear();
        self.state = MachineState::Idle;
        // Back to the weak handle only: with no brew in flight, shutdown is
        // again just a matter of the clients going away.
        self.brew_tx = None;
        debug!("Order cleared");
        self.emit_summary();
        self.emit_status(idle_status());
    }

    fn emit(&self, event: DisplayEvent) {
        // A missing Display is fine; the machine keeps serving.
        let _ = self.events.send(event);
    }

    fn emit_status(&self, status: StatusUpdate) {
        self.emit(DisplayEvent::Status(status));
    }

    fn emit_summary(&self) {
        self.emit(DisplayEvent::OrderSummary(OrderSummary {
            drink: self.order.drink,
            with_sugar: self.order.with_sugar,
            total: self.order.price,
        }));
    }

    fn push_stock_and_alerts(&self) {
        let snapshot = self.inventory.snapshot();
        let alerts = monitor::evaluate(&snapshot);
        self.emit(DisplayEvent::Stock(snapshot));
        self.emit(DisplayEvent::Alerts(alerts));
    }

    fn push_sales(&self) {
        self.emit(DisplayEvent::Sales(self.sales.report()));
    }
}

fn idle_status() -> StatusUpdate {
    StatusUpdate::new(
        StatusKind::Idle,
        "🛒",
        "Ready to Serve",
        "Select a drink from the menu to begin",
    )
}
