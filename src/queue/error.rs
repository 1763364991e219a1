//! Event queue error types

/// Errors from event queue construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueError {
    /// Backing storage is empty
    ZeroCapacity,
}

impl QueueError {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueError::ZeroCapacity => "ZeroCapacity",
        }
    }
}

impl core::fmt::Display for QueueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QueueError::ZeroCapacity => write!(f, "event storage must not be empty"),
        }
    }
}
