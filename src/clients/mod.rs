//! Type-safe wrappers around the machine's message channel.

pub mod machine_client;

pub use machine_client::*;
