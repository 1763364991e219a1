//! State descriptors
//!
//! A [`State`] is an immutable bundle of a diagnostic name and up to four
//! optional callbacks. Callbacks are plain function pointers; shared mutable
//! state travels through the machine's context value, which every callback
//! receives by `&mut`. Because of that, `State<C>` is `Sync` for every `C`
//! and state tables can live in `static`s.

/// Index of a state in a machine's state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateId(pub usize);

impl StateId {
    /// The raw table index.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Entry, exit, and action callback shape.
///
/// The returned id, when present, proposes a transition: entry callbacks
/// chain redirects, exit callbacks override the pending target, action
/// callbacks propose the tick's transition.
pub type Hook<C> = fn(&mut C) -> Option<StateId>;

/// Event handler callback shape, invoked with one dequeued event byte.
pub type EventHook<C> = fn(&mut C, u8) -> Option<StateId>;

/// Immutable state descriptor.
///
/// All callback slots are optional; an absent slot is a no-op. Build
/// descriptors with the `const` chainable constructors:
///
/// ```
/// use statewheel::{State, StateId};
///
/// fn start_motor(ctx: &mut u8) -> Option<StateId> {
///     *ctx += 1;
///     None
/// }
///
/// static RUNNING: State<u8> = State::new("running").with_entry(start_motor);
/// assert_eq!(RUNNING.name(), "running");
/// ```
pub struct State<C> {
    pub(crate) name: &'static str,
    pub(crate) on_entry: Option<Hook<C>>,
    pub(crate) on_exit: Option<Hook<C>>,
    pub(crate) on_action: Option<Hook<C>>,
    pub(crate) on_event: Option<EventHook<C>>,
}

impl<C> State<C> {
    /// Create a state with the given diagnostic name and no callbacks.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            on_entry: None,
            on_exit: None,
            on_action: None,
            on_event: None,
        }
    }

    /// Set the entry callback, invoked when the state becomes current.
    pub const fn with_entry(mut self, hook: Hook<C>) -> Self {
        self.on_entry = Some(hook);
        self
    }

    /// Set the exit callback, invoked when the machine leaves the state.
    pub const fn with_exit(mut self, hook: Hook<C>) -> Self {
        self.on_exit = Some(hook);
        self
    }

    /// Set the action callback, invoked once per idle tick.
    pub const fn with_action(mut self, hook: Hook<C>) -> Self {
        self.on_action = Some(hook);
        self
    }

    /// Set the event handler, invoked with one dequeued event byte.
    pub const fn with_handler(mut self, hook: EventHook<C>) -> Self {
        self.on_event = Some(hook);
        self
    }

    /// The state's diagnostic name.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

// Manual impls: the derived versions would bound C, but C only appears in
// function pointer arguments.
impl<C> Clone for State<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for State<C> {}

impl<C> core::fmt::Debug for State<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("State").field("name", &self.name).finish()
    }
}
