#![cfg_attr(not(test), no_std)]

//! statewheel - Hierarchical event-driven state machines for embedded targets
//!
//! This crate provides a cooperative state-machine engine whose event inbox
//! is a fixed-capacity circular byte buffer. Firmware expresses a component's
//! behavior as a tree of states, each with optional entry/exit/action/event
//! callbacks, and drives the whole tree from a main loop or scheduler tick.
//!
//! # Design Principles
//!
//! - **No allocation in the hot path**: event queues run over caller-owned
//!   storage; only child-machine wiring boxes at startup
//! - **Host testable**: the engine has no platform dependencies and runs
//!   unmodified in host unit tests
//! - **Explicit failure**: every fallible operation reports through
//!   `Result`; no panics in library code
//!
//! # Modules
//!
//! - [`queue`]: Fixed-capacity circular byte buffer backing each machine's
//!   event inbox
//! - [`machine`]: State descriptors, the machine instance, and the tick
//! - [`logging`]: Log macros dispatching to defmt on embedded targets
//!
//! # Example
//!
//! ```
//! use statewheel::{Machine, State, StateId};
//!
//! const IDLE: StateId = StateId(0);
//! const ACTIVE: StateId = StateId(1);
//!
//! fn on_wake(_count: &mut u32, event: u8) -> Option<StateId> {
//!     (event == 1).then_some(ACTIVE)
//! }
//!
//! fn on_active(count: &mut u32) -> Option<StateId> {
//!     *count += 1;
//!     None
//! }
//!
//! let states = [
//!     State::new("idle").with_handler(on_wake),
//!     State::new("active").with_action(on_active),
//! ];
//! let mut storage = [0u8; 8];
//! let mut machine = Machine::new(&states, IDLE, &mut storage, 0u32).unwrap();
//!
//! machine.push_event(1).unwrap();
//! machine.run().unwrap(); // consumes the event, transitions to ACTIVE
//! machine.run().unwrap(); // runs the ACTIVE action
//! assert_eq!(machine.current_name(), "active");
//! assert_eq!(*machine.context(), 1);
//! ```

extern crate alloc;

pub mod logging;
pub mod machine;
pub mod queue;

pub use machine::{
    EventHook, Hook, Machine, MachineError, MachineStats, State, StateId, MAX_REDIRECTS,
    MAX_SUB_MACHINES,
};
pub use queue::{EventQueue, QueueError};
