//! Property-based tests for the Navigation State Machine
//!
//! Random sequences of turns, settles, jumps and rebuilds are replayed
//! against a navigator. Tests invariants:
//! - The current index never leaves `0..len`
//! - At most one turn is in flight, and no turn is accepted while one is
//! - The cue plays exactly once per accepted turn and never otherwise
//! - A settled turn moves the index by exactly one spread

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;

use crate::core::cue::TransitionCue;
use crate::core::navigation::{Direction, Navigator, PendingTurn};

/// Counts plays so the property can compare against accepted turns.
struct CountingCue(Arc<AtomicUsize>);

impl TransitionCue for CountingCue {
    fn play(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
enum Op {
    Turn(Direction),
    Settle,
    Goto(usize),
    Rebuild(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => prop_oneof![Just(Direction::Forward), Just(Direction::Backward)].prop_map(Op::Turn),
        3 => Just(Op::Settle),
        1 => (0usize..20).prop_map(Op::Goto),
        1 => (1usize..20).prop_map(Op::Rebuild),
    ]
}

proptest! {
    #[test]
    fn index_stays_in_range_and_cue_matches_turns(
        len in 1usize..20,
        ops in prop::collection::vec(op_strategy(), 0..80),
    ) {
        let plays = Arc::new(AtomicUsize::new(0));
        let mut nav = Navigator::new(len, Box::new(CountingCue(plays.clone())));
        let mut ticket: Option<PendingTurn> = None;
        let mut accepted = 0usize;

        for op in ops {
            match op {
                Op::Turn(direction) => {
                    let was_steady = nav.is_steady();
                    match nav.turn(direction) {
                        Some(t) => {
                            prop_assert!(was_steady);
                            prop_assert_eq!(nav.pending_direction(), Some(direction));
                            accepted += 1;
                            ticket = Some(t);
                        }
                        None => {
                            prop_assert!(!was_steady || direction.step(nav.current_index(), nav.len()).is_none());
                        }
                    }
                }
                Op::Settle => {
                    if let Some(t) = ticket.take() {
                        let before = nav.current_index();
                        prop_assert!(nav.settle(t));
                        let after = nav.current_index();
                        prop_assert!(after.abs_diff(before) <= 1);
                        prop_assert!(nav.is_steady());
                    }
                }
                Op::Goto(index) => {
                    let steady = nav.is_steady();
                    let moved = nav.goto(index);
                    prop_assert_eq!(moved, steady && index < nav.len());
                }
                Op::Rebuild(new_len) => nav.rebuild(new_len),
            }
            prop_assert!(nav.current_index() < nav.len());
        }

        prop_assert_eq!(plays.load(Ordering::SeqCst), accepted);
    }

    #[test]
    fn walking_forward_visits_every_spread(len in 1usize..30) {
        let mut nav = Navigator::new(len, Box::new(CountingCue(Arc::new(AtomicUsize::new(0)))));
        let mut visited = vec![nav.current_index()];
        while let Some(t) = nav.turn(Direction::Forward) {
            prop_assert!(nav.settle(t));
            visited.push(nav.current_index());
        }
        prop_assert_eq!(visited, (0..len).collect::<Vec<_>>());
        prop_assert!(nav.at_last());
    }
}
