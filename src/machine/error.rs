//! State machine error types

use core::fmt;

use crate::queue::QueueError;

/// Errors from machine construction, wiring, and ticking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MachineError {
    /// State table is empty
    EmptyStateTable,
    /// A state id does not index the machine's state table
    UnknownState {
        /// The out-of-range table index
        index: usize,
    },
    /// Event storage is empty
    ZeroCapacity,
    /// Event queue is full, the event was dropped
    QueueFull,
    /// The state already has a child machine attached
    DuplicateChild {
        /// Name of the composite state
        state: &'static str,
    },
    /// The child machine table is full
    ChildLimit,
    /// An entry-redirect chain exceeded the hop limit
    RedirectLimit {
        /// Name of the state whose entry callback hit the limit
        state: &'static str,
    },
}

impl MachineError {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineError::EmptyStateTable => "EmptyStateTable",
            MachineError::UnknownState { .. } => "UnknownState",
            MachineError::ZeroCapacity => "ZeroCapacity",
            MachineError::QueueFull => "QueueFull",
            MachineError::DuplicateChild { .. } => "DuplicateChild",
            MachineError::ChildLimit => "ChildLimit",
            MachineError::RedirectLimit { .. } => "RedirectLimit",
        }
    }
}

impl fmt::Display for MachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineError::EmptyStateTable => write!(f, "state table is empty"),
            MachineError::UnknownState { index } => {
                write!(f, "state index {} is out of range", index)
            }
            MachineError::ZeroCapacity => write!(f, "event storage must not be empty"),
            MachineError::QueueFull => write!(f, "event queue full, event dropped"),
            MachineError::DuplicateChild { state } => {
                write!(f, "state {} already has a child machine", state)
            }
            MachineError::ChildLimit => write!(f, "child machine table is full"),
            MachineError::RedirectLimit { state } => {
                write!(f, "entry redirect limit reached in state {}", state)
            }
        }
    }
}

impl From<QueueError> for MachineError {
    fn from(err: QueueError) -> Self {
        match err {
            QueueError::ZeroCapacity => MachineError::ZeroCapacity,
        }
    }
}
