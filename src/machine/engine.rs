//! Machine instance and tick resolution
//!
//! A [`Machine`] binds a state table to an event queue and a context value,
//! then advances one step per [`run`](Machine::run) call. Composite states
//! own child machines, wired once at startup with
//! [`attach_child`](Machine::attach_child) and ticked recursively while
//! their parent state is current.
//!
//! ## Tick order
//!
//! Each `run` call performs, in this order:
//!
//! 1. Clear the pending target from the previous tick.
//! 2. If the current state has an event handler and the queue yields a
//!    byte, the handler's return becomes the candidate target. At most one
//!    event is consumed per tick.
//! 3. With no candidate: tick the child machine if one is attached,
//!    otherwise run the action callback, otherwise do nothing. A state with
//!    none of these stalls, which is a valid steady condition.
//! 4. With a candidate: run the exit callback (its return may override the
//!    target), move to the resolved target, then run entry callbacks,
//!    following redirects until one returns `None` or its own state.
//!
//! Entry-redirect chains are capped at [`MAX_REDIRECTS`] hops; exceeding
//! the cap stops the tick with [`MachineError::RedirectLimit`].

use alloc::boxed::Box;

use heapless::Vec;

use super::error::MachineError;
use super::state::{State, StateId};
use super::stats::MachineStats;
use crate::queue::EventQueue;

/// Most entry-redirect hops a single transition may take.
pub const MAX_REDIRECTS: usize = 8;

/// Most child machines attachable to one machine.
pub const MAX_SUB_MACHINES: usize = 4;

struct ChildSlot<'a, C> {
    state: StateId,
    machine: Box<Machine<'a, C>>,
}

/// Run-time state machine instance.
///
/// `'a` covers the state table and the queue's backing storage; `C` is the
/// context value threaded into every callback.
pub struct Machine<'a, C> {
    states: &'a [State<C>],
    curr: StateId,
    next: Option<StateId>,
    queue: EventQueue<'a>,
    children: Vec<ChildSlot<'a, C>, MAX_SUB_MACHINES>,
    context: C,
    stats: MachineStats,
}

impl<'a, C> Machine<'a, C> {
    /// Create a machine starting in `initial`.
    ///
    /// `event_storage` becomes the event queue's capacity; size it for the
    /// worst-case burst between ticks. The initial state's entry callback
    /// runs once here, and any redirect it returns is ignored: the machine
    /// unconditionally starts in `initial`.
    ///
    /// Fails on an empty state table, an out-of-range `initial`, or empty
    /// event storage.
    pub fn new(
        states: &'a [State<C>],
        initial: StateId,
        event_storage: &'a mut [u8],
        context: C,
    ) -> Result<Self, MachineError> {
        if states.is_empty() {
            return Err(MachineError::EmptyStateTable);
        }
        if initial.index() >= states.len() {
            return Err(MachineError::UnknownState {
                index: initial.index(),
            });
        }
        let queue = EventQueue::new(event_storage)?;

        let mut machine = Self {
            states,
            curr: initial,
            next: None,
            queue,
            children: Vec::new(),
            context,
            stats: MachineStats::default(),
        };

        if let Some(entry) = machine.current_descriptor().on_entry {
            let _ = entry(&mut machine.context);
        }
        crate::log_trace!("machine started in {}", machine.current_name());

        Ok(machine)
    }

    /// Queue one event byte for a later tick.
    ///
    /// This is the sole event-injection path; there is no priority or
    /// coalescing. A full queue rejects the event with
    /// [`MachineError::QueueFull`] and counts the drop in
    /// [`stats`](Self::stats).
    pub fn push_event(&mut self, event: u8) -> Result<(), MachineError> {
        if self.queue.push_byte(event) {
            Ok(())
        } else {
            self.stats.record_drop();
            crate::log_warn!("event {} dropped, queue full in {}", event, self.current_name());
            Err(MachineError::QueueFull)
        }
    }

    /// Discard all queued events.
    pub fn clear_events(&mut self) {
        self.queue.reset();
    }

    /// Forcibly reposition the machine in `target`.
    ///
    /// The old state's exit callback does not run, and any redirect from
    /// the new state's entry callback is ignored: the machine lands exactly
    /// where requested. For out-of-band resets, not ordinary transitions.
    pub fn force_state(&mut self, target: StateId) -> Result<(), MachineError> {
        let state = self.state_at(target)?;
        crate::log_debug!("forced reposition {} -> {}", self.current_name(), state.name);

        self.curr = target;
        self.next = None;
        if let Some(entry) = state.on_entry {
            let _ = entry(&mut self.context);
        }
        Ok(())
    }

    /// The current state descriptor.
    pub fn current(&self) -> &State<C> {
        self.current_descriptor()
    }

    /// The current state's table index.
    pub fn current_id(&self) -> StateId {
        self.curr
    }

    /// The current state's diagnostic name.
    pub fn current_name(&self) -> &'static str {
        self.current_descriptor().name
    }

    /// Shared access to the context value.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Mutable access to the context value.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Tick statistics for this machine instance.
    pub fn stats(&self) -> &MachineStats {
        &self.stats
    }

    /// Number of queued, not yet consumed events.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Capacity of the event queue in bytes.
    pub fn event_capacity(&self) -> usize {
        self.queue.capacity()
    }

    /// Wire a child machine to a composite state.
    ///
    /// While `state` is current, idle ticks recurse into the child instead
    /// of running an action. The child keeps its own queue, context, and
    /// current state across parent transitions. Fails on an unknown id, a
    /// second attachment to the same state, or a full child table
    /// ([`MAX_SUB_MACHINES`] entries); on failure the child is dropped.
    pub fn attach_child(
        &mut self,
        state: StateId,
        child: Machine<'a, C>,
    ) -> Result<(), MachineError> {
        let descriptor = self.state_at(state)?;
        if self.children.iter().any(|slot| slot.state == state) {
            return Err(MachineError::DuplicateChild {
                state: descriptor.name,
            });
        }
        self.children
            .push(ChildSlot {
                state,
                machine: Box::new(child),
            })
            .map_err(|_| MachineError::ChildLimit)
    }

    /// The child machine attached to `state`, if any.
    pub fn child(&self, state: StateId) -> Option<&Machine<'a, C>> {
        self.children
            .iter()
            .find(|slot| slot.state == state)
            .map(|slot| &*slot.machine)
    }

    /// Mutable access to the child machine attached to `state`.
    ///
    /// Producers use this to queue events on a nested machine.
    pub fn child_mut(&mut self, state: StateId) -> Option<&mut Machine<'a, C>> {
        self.children
            .iter_mut()
            .find(|slot| slot.state == state)
            .map(|slot| &mut *slot.machine)
    }

    /// Advance the machine by one tick.
    ///
    /// Consumes at most one event and resolves at most one transition, per
    /// the order documented on this module. Returns `Err` only for a failed
    /// child tick, an out-of-range id returned by a callback, or an
    /// entry-redirect overrun; a tick that changes nothing is `Ok`.
    pub fn run(&mut self) -> Result<(), MachineError> {
        self.next = None;
        self.stats.record_tick();

        let state = self.current_descriptor();

        if let Some(handler) = state.on_event {
            if let Some(event) = self.queue.pop_byte() {
                self.stats.record_event();
                self.next = handler(&mut self.context, event);
            }
        }

        if self.next.is_none() {
            if let Some(slot) = self.children.iter_mut().find(|slot| slot.state == self.curr) {
                if let Err(err) = slot.machine.run() {
                    crate::log_warn!("child of {} failed: {}", state.name, err.as_str());
                    return Err(err);
                }
            } else if let Some(action) = state.on_action {
                self.next = action(&mut self.context);
            }
        }

        if let Some(target) = self.next {
            self.resolve_transition(target)?;
        }
        Ok(())
    }

    /// Leave the current state and enter `proposed`, honoring redirects.
    fn resolve_transition(&mut self, proposed: StateId) -> Result<(), MachineError> {
        let mut target = proposed;
        self.state_at(target)?;

        let leaving = self.current_descriptor();
        if let Some(exit) = leaving.on_exit {
            if let Some(redirect) = exit(&mut self.context) {
                if redirect != target {
                    let chosen = self.state_at(redirect)?;
                    crate::log_debug!("{} exit redirected to {}", leaving.name, chosen.name);
                    self.stats.record_redirect();
                    target = redirect;
                }
            }
        }

        crate::log_debug!(
            "transition {} -> {}",
            leaving.name,
            self.states[target.index()].name
        );
        self.curr = target;
        self.stats.record_transition();

        let mut hops = 0;
        loop {
            let entered = self.current_descriptor();
            let Some(entry) = entered.on_entry else {
                break;
            };
            let Some(redirect) = entry(&mut self.context) else {
                break;
            };
            if redirect == self.curr {
                break;
            }
            let chosen = self.state_at(redirect)?;

            hops += 1;
            if hops > MAX_REDIRECTS {
                crate::log_error!("entry redirect limit reached in {}", entered.name);
                return Err(MachineError::RedirectLimit {
                    state: entered.name,
                });
            }
            crate::log_debug!("{} entry redirected to {}", entered.name, chosen.name);
            self.stats.record_redirect();
            self.curr = redirect;
        }
        Ok(())
    }

    fn current_descriptor(&self) -> &'a State<C> {
        let states = self.states;
        &states[self.curr.index()]
    }

    fn state_at(&self, id: StateId) -> Result<&'a State<C>, MachineError> {
        let states = self.states;
        states.get(id.index()).ok_or(MachineError::UnknownState {
            index: id.index(),
        })
    }
}
