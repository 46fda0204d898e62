//! Runtime orchestration and lifecycle management.
//!
//! - **Actor lifecycle**: starting the machine actor and shutting it down
//! - **Observability setup**: initializing tracing and logging
//!
//! # Main Components
//!
//! - [`VendingSystem`] - spawns the machine and coordinates shutdown
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod tracing;
pub mod vending_system;

pub use tracing::*;
pub use vending_system::*;
