//! State Machine Engine
//!
//! This module provides the state descriptor and the run-time machine
//! instance. States are immutable data defined once, typically in `static`
//! tables; the machine tracks the current state, owns the event queue, and
//! resolves at most one transition per tick.
//!
//! # Contents
//!
//! - [`State`] descriptor with optional entry/exit/action/event slots
//! - [`StateId`] index into a machine's state table
//! - [`Machine`] run-time instance and its tick operation
//! - [`MachineError`] and [`MachineStats`]

mod engine;
mod error;
mod state;
mod stats;

pub use engine::{Machine, MAX_REDIRECTS, MAX_SUB_MACHINES};
pub use error::MachineError;
pub use state::{EventHook, Hook, State, StateId};
pub use stats::MachineStats;
