//! Fractional position allocator.
//!
//! # Responsibility
//! - Compute ordering keys for appended and moved todos so that only the
//!   affected row is ever rewritten.
//!
//! # Invariants
//! - `next_append_position` returns a value strictly greater than every
//!   existing position.
//! - `between_position` expects `before <= after` when both neighbors are
//!   supplied; violating that is a caller bug, not a function fault.
//!
//! # Known limitation
//! - Repeated insertion between the same two neighbors halves the integer
//!   gap each time. Once the neighbors are adjacent integers the midpoint
//!   collapses onto one of them, producing a collision (resolved by the
//!   `id` tie-break) or an inversion. Recovering the gaps needs a
//!   renumber-all rebalance pass, which this crate does not implement.

/// Gap between consecutive ordering keys on append, and the key given to
/// the first todo in an empty list.
pub const POSITION_STEP: i64 = 1000;

/// Returns the ordering key for a todo appended to the end of the list.
///
/// `current_max` is the largest position currently stored, or `None` when
/// the list is empty.
pub fn next_append_position(current_max: Option<i64>) -> i64 {
    match current_max {
        Some(max) => max + POSITION_STEP,
        None => POSITION_STEP,
    }
}

/// Returns an ordering key that sorts between two neighbors.
///
/// `None` marks a list boundary: no `before` means the head of the list,
/// no `after` means the tail. With both absent the list is empty and the
/// base key is returned.
pub fn between_position(before: Option<i64>, after: Option<i64>) -> i64 {
    match (before, after) {
        // div_euclid keeps floor semantics if a key ever goes negative.
        (Some(before), Some(after)) => (before + after).div_euclid(2),
        (None, Some(after)) => after.div_euclid(2),
        (Some(before), None) => before + POSITION_STEP,
        (None, None) => POSITION_STEP,
    }
}

#[cfg(test)]
mod tests {
    use super::{between_position, next_append_position, POSITION_STEP};

    #[test]
    fn append_on_empty_list_uses_base_step() {
        assert_eq!(next_append_position(None), POSITION_STEP);
    }

    #[test]
    fn append_steps_past_current_max() {
        assert_eq!(next_append_position(Some(3000)), 4000);
        assert_eq!(next_append_position(Some(1)), 1001);
    }

    #[test]
    fn between_two_neighbors_takes_floored_midpoint() {
        assert_eq!(between_position(Some(1000), Some(3000)), 2000);
        assert_eq!(between_position(Some(1000), Some(1001)), 1000);
    }

    #[test]
    fn head_move_halves_the_first_key() {
        assert_eq!(between_position(None, Some(2000)), 1000);
        assert_eq!(between_position(None, Some(1)), 0);
    }

    #[test]
    fn tail_move_steps_past_the_last_key() {
        assert_eq!(between_position(Some(3000), None), 4000);
    }

    #[test]
    fn empty_list_falls_back_to_base_step() {
        assert_eq!(between_position(None, None), POSITION_STEP);
    }

    #[test]
    fn midpoint_floors_for_negative_keys() {
        assert_eq!(between_position(Some(-3), Some(0)), -2);
        assert_eq!(between_position(None, Some(-5)), -3);
    }
}
