//! # Brewmatic
//!
//! > **A self-service tea & coffee vending machine, built as a Tokio actor.**
//!
//! This crate models the full order lifecycle of a beverage vending
//! machine: menu selection, stock validation, a staged preparation
//! sequence, stock/sales bookkeeping and low-stock alerting. Rendering is
//! somebody else's job - the core pushes [`DisplayEvent`](display::DisplayEvent)s
//! to an external Display collaborator and owns no UI logic.
//!
//! ## 🏗️ Design
//!
//! All mutable state - the inventory, the sales ledger and the single
//! active order - is owned by one [`MachineActor`](machine::MachineActor)
//! that processes messages sequentially. No locks, no shared mutation: the
//! actor model gives us the single-writer guarantee the bookkeeping needs,
//! and the debit-and-credit step at order completion is atomic because it
//! runs inside one message-handling step.
//!
//! The preparation sequence (payment, brewing, milk, optional sugar,
//! pouring, presentation) is an explicit state machine driven by a single
//! "advance after delay" primitive: entering a phase schedules one timer
//! message, and the actor transitions when it arrives. Every phase and its
//! duration is independently testable - zero the
//! [`PhaseTimings`](config::PhaseTimings) and the whole sequence runs in
//! microseconds with its ordering intact.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - pure data: drinks, orders, resources, stock levels, the
//!   sales ledger.
//! - [`catalog`] - fixed price/cost/recipe tables.
//! - [`inventory`] - the consumable-stock ledger and its checked debit.
//! - [`monitor`] - table-driven low-stock alert evaluation.
//! - [`machine`] - the order-lifecycle state machine actor.
//! - [`display`] - the one-way event contract with the Display.
//! - [`clients`] - [`MachineClient`](clients::MachineClient), the typed
//!   wrapper that hides the message passing.
//! - [`runtime`] - [`VendingSystem`](runtime::VendingSystem) orchestration
//!   and tracing setup.
//! - [`config`] - startup stock levels and phase timings.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod catalog;
pub mod clients;
pub mod config;
pub mod display;
pub mod inventory;
pub mod machine;
pub mod model;
pub mod monitor;
pub mod runtime;
