//! Spread navigation state machine.
//!
//! Two states: steady, and transitioning in a direction. A turn is accepted
//! only while steady and only when its target is inside the spread sequence;
//! it plays the transition cue and hands back a [`PendingTurn`] ticket. The
//! owner schedules [`Navigator::settle`] after [`SETTLE_DELAY`]; settling
//! commits the target and returns to steady. Tickets are invalidated by
//! [`Navigator::reset`] and [`Navigator::teardown`], so a late timer never
//! mutates state it no longer belongs to.
//!
//! Rejected requests (boundary, mid-transition, out of range) change nothing.

use std::fmt;
use std::time::Duration;

use super::cue::TransitionCue;

/// How long a turn animates before the new spread is committed.
pub const SETTLE_DELAY: Duration = Duration::from_millis(240);

/// Turn direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Neighbouring index in this direction, if inside `0..len`.
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        let target = match self {
            Direction::Forward => index.checked_add(1)?,
            Direction::Backward => index.checked_sub(1)?,
        };
        (target < len).then_some(target)
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ticket for one in-flight turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTurn {
    id: u64,
    direction: Direction,
    target: usize,
}

impl PendingTurn {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target(&self) -> usize {
        self.target
    }
}

/// Observable navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_index: usize,
    pub pending_direction: Option<Direction>,
}

/// Owns the current spread index and the in-flight transition.
pub struct Navigator {
    len: usize,
    current: usize,
    pending: Option<PendingTurn>,
    next_ticket: u64,
    live: bool,
    cue: Box<dyn TransitionCue>,
}

impl Navigator {
    /// Start steady at index 0 over a sequence of `len` spreads.
    pub fn new(len: usize, cue: Box<dyn TransitionCue>) -> Self {
        Self {
            len,
            current: 0,
            pending: None,
            next_ticket: 0,
            live: true,
            cue,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending.map(|p| p.direction)
    }

    pub fn is_steady(&self) -> bool {
        self.pending.is_none()
    }

    pub fn state(&self) -> NavigationState {
        NavigationState {
            current_index: self.current,
            pending_direction: self.pending_direction(),
        }
    }

    pub fn at_first(&self) -> bool {
        self.current == 0
    }

    pub fn at_last(&self) -> bool {
        self.current + 1 >= self.len
    }

    /// Request a one-spread turn. Returns the ticket to settle later, or
    /// `None` when the request was ignored.
    pub fn turn(&mut self, direction: Direction) -> Option<PendingTurn> {
        if !self.live || self.pending.is_some() {
            log::trace!("nav: turn {direction} ignored, transition in flight");
            return None;
        }
        let Some(target) = direction.step(self.current, self.len) else {
            log::trace!(
                "nav: turn {direction} ignored at boundary index={} len={}",
                self.current,
                self.len
            );
            return None;
        };

        self.next_ticket += 1;
        let ticket = PendingTurn {
            id: self.next_ticket,
            direction,
            target,
        };
        self.pending = Some(ticket);
        self.cue.play();
        log::debug!(
            "nav: turning {direction} {} -> {} (ticket {})",
            self.current,
            target,
            ticket.id
        );
        Some(ticket)
    }

    /// Commit the turn identified by `ticket`. Stale tickets (after a reset,
    /// teardown, or for a turn that already settled) are ignored.
    pub fn settle(&mut self, ticket: PendingTurn) -> bool {
        if !self.live {
            return false;
        }
        match self.pending {
            Some(pending) if pending.id == ticket.id => {
                self.current = pending.target.min(self.len.saturating_sub(1));
                self.pending = None;
                log::debug!("nav: settled at {}", self.current);
                true
            }
            _ => {
                log::trace!("nav: stale ticket {} ignored", ticket.id);
                false
            }
        }
    }

    /// Jump directly to `index`: no cue, no transition. Ignored while a turn
    /// is in flight or when `index` is out of range.
    pub fn goto(&mut self, index: usize) -> bool {
        if !self.live || self.pending.is_some() || index >= self.len {
            return false;
        }
        self.current = index;
        log::debug!("nav: jumped to {index}");
        true
    }

    /// The spread sequence changed length. Keeps the position, clamping it
    /// (and any in-flight target) to the last valid index.
    pub fn rebuild(&mut self, len: usize) {
        self.len = len;
        let last = len.saturating_sub(1);
        self.current = self.current.min(last);
        if let Some(pending) = self.pending.as_mut() {
            pending.target = pending.target.min(last);
        }
    }

    /// New document loaded: back to the cover, steady, outstanding tickets
    /// invalidated.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.current = 0;
        self.pending = None;
        self.live = true;
    }

    /// The owner is going away: every outstanding ticket becomes a no-op and
    /// no further operation is accepted until [`Navigator::reset`].
    pub fn teardown(&mut self) {
        self.pending = None;
        self.live = false;
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("len", &self.len)
            .field("current", &self.current)
            .field("pending", &self.pending)
            .field("live", &self.live)
            .finish_non_exhaustive()
    }
}
