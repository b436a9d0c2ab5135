//! Deferred work for the tooltip controller.
//!
//! The controller never sleeps or spawns. It asks a [`Scheduler`] to call it
//! back later by handing over a [`Ticket`], and the host feeds due tickets
//! back through [`TooltipController::run_deferred`]. Every scheduled callback
//! comes with a [`TaskHandle`] so a newer request can cancel an older one.
//!
//! [`TooltipController::run_deferred`]: crate::TooltipController::run_deferred

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// When a deferred callback should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferral {
    /// On the next turn of the host's event loop.
    NextTick,
    /// After the given delay.
    Delay(Duration),
    /// Once running animations and gestures have settled.
    AfterInteractions,
}

/// Identifies one scheduled callback.
///
/// Tickets are handed out in increasing order by the controller, so a ticket
/// that is not the latest one is stale by definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Creates a ticket from its raw id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns the ticket following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Cancellation flag shared between the controller and a scheduler.
#[derive(Debug, Clone, Default)]
pub struct TaskHandle {
    cancelled: Arc<AtomicBool>,
}

impl TaskHandle {
    /// Creates a live handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the task. Cancelling twice is harmless.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns true once [`cancel`](Self::cancel) was called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Runs controller callbacks at a later point.
pub trait Scheduler {
    /// Schedules `ticket` to be handed back once `deferral` is satisfied.
    fn schedule(&mut self, deferral: Deferral, ticket: Ticket) -> TaskHandle;
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule(&mut self, deferral: Deferral, ticket: Ticket) -> TaskHandle {
        (**self).schedule(deferral, ticket)
    }
}

// ============================================================================
// QueueScheduler
// ============================================================================

#[derive(Debug)]
struct Pending {
    ticket: Ticket,
    deferral: Deferral,
    remaining: Duration,
    handle: TaskHandle,
}

/// A scheduler the host pumps by hand.
///
/// Time only moves when [`advance`](Self::advance) is called and interaction
/// callbacks only fire on [`interactions_settled`](Self::interactions_settled),
/// which makes it suitable both for simple hosts and for tests.
#[derive(Debug, Default)]
pub struct QueueScheduler {
    pending: Vec<Pending>,
}

impl QueueScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scheduled callbacks that are not yet due, cancelled ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Moves time forward and returns the tickets that became due, in the
    /// order they were scheduled.
    ///
    /// `NextTick` callbacks are due on any call, including one with a zero
    /// duration. Cancelled callbacks are dropped silently.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Ticket> {
        for pending in &mut self.pending {
            pending.remaining = pending.remaining.saturating_sub(elapsed);
        }
        self.drain(|pending| match pending.deferral {
            Deferral::NextTick => true,
            Deferral::Delay(_) => pending.remaining.is_zero(),
            Deferral::AfterInteractions => false,
        })
    }

    /// Releases every callback waiting for interactions to settle.
    pub fn interactions_settled(&mut self) -> Vec<Ticket> {
        self.drain(|pending| pending.deferral == Deferral::AfterInteractions)
    }

    fn drain(&mut self, due: impl Fn(&Pending) -> bool) -> Vec<Ticket> {
        let mut ready = Vec::new();
        self.pending.retain(|pending| {
            if pending.handle.is_cancelled() {
                return false;
            }
            if due(pending) {
                ready.push(pending.ticket);
                return false;
            }
            true
        });
        ready
    }
}

impl Scheduler for QueueScheduler {
    fn schedule(&mut self, deferral: Deferral, ticket: Ticket) -> TaskHandle {
        let handle = TaskHandle::new();
        let remaining = match deferral {
            Deferral::Delay(delay) => delay,
            Deferral::NextTick | Deferral::AfterInteractions => Duration::ZERO,
        };
        self.pending.push(Pending {
            ticket,
            deferral,
            remaining,
            handle: handle.clone(),
        });
        handle
    }
}
