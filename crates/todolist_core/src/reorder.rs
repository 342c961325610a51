//! Move planning for list reordering.
//!
//! # Responsibility
//! - Translate a user-level move intent (drag target or up/down one slot)
//!   into a single new ordering key, without touching storage.
//!
//! # Invariants
//! - Planning is pure: the same snapshot and intent always produce the
//!   same plan, so a retried move against the original snapshot is
//!   idempotent.
//! - A plan changes at most one row downstream; neighbors are never
//!   renumbered.

use crate::model::todo::{Todo, TodoId};
use crate::position::between_position;

/// Outcome of planning a move against a list snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePlan {
    /// The moving id is not present in the snapshot. Nothing to persist.
    NotFound,
    /// The clamped target equals the current slot. Nothing to persist.
    NoOp,
    /// Persist `new_position` for the moving row; all other rows stay.
    Apply { new_position: i64 },
}

/// Plans a move of `moving_id` to `target_index` within `ordered`.
///
/// `ordered` must be a list snapshot in store order (position ascending,
/// id ascending). `target_index` beyond the end is clamped to the last
/// slot.
///
/// The bounding neighbors are resolved as if the row were removed from its
/// current slot and reinserted at the target: moving down, the row lands
/// after the item currently at `target_index`; moving up, it lands before
/// it. Boundary slots have one neighbor.
pub fn plan_move(ordered: &[Todo], moving_id: TodoId, target_index: usize) -> MovePlan {
    let Some(from) = ordered.iter().position(|todo| todo.id == moving_id) else {
        return MovePlan::NotFound;
    };

    let last = ordered.len() - 1;
    let target = target_index.min(last);
    if target == from {
        return MovePlan::NoOp;
    }

    let (before, after) = if target > from {
        // Moving down: slot in after the target item.
        (
            Some(ordered[target].position),
            ordered.get(target + 1).map(|todo| todo.position),
        )
    } else {
        // Moving up: slot in before the target item.
        (
            target.checked_sub(1).map(|i| ordered[i].position),
            Some(ordered[target].position),
        )
    };

    MovePlan::Apply {
        new_position: between_position(before, after),
    }
}

#[cfg(test)]
mod tests {
    use super::{plan_move, MovePlan};
    use crate::model::todo::Todo;

    fn snapshot(positions: &[i64]) -> Vec<Todo> {
        positions
            .iter()
            .enumerate()
            .map(|(index, &position)| Todo {
                id: index as i64 + 1,
                description: format!("todo {}", index + 1),
                completed: false,
                position,
            })
            .collect()
    }

    #[test]
    fn missing_id_is_not_found() {
        let list = snapshot(&[1000, 2000]);
        assert_eq!(plan_move(&list, 99, 0), MovePlan::NotFound);
    }

    #[test]
    fn same_slot_is_a_no_op() {
        let list = snapshot(&[1000, 2000, 3000]);
        assert_eq!(plan_move(&list, 2, 1), MovePlan::NoOp);
    }

    #[test]
    fn move_to_head_halves_the_first_key() {
        let list = snapshot(&[1000, 2000, 3000]);
        assert_eq!(
            plan_move(&list, 3, 0),
            MovePlan::Apply { new_position: 500 }
        );
    }

    #[test]
    fn move_up_between_neighbors_takes_midpoint() {
        let list = snapshot(&[1000, 2000, 3000]);
        assert_eq!(
            plan_move(&list, 3, 1),
            MovePlan::Apply { new_position: 1500 }
        );
    }

    #[test]
    fn move_down_lands_after_target_item() {
        let list = snapshot(&[1000, 2000, 3000]);
        assert_eq!(
            plan_move(&list, 1, 1),
            MovePlan::Apply { new_position: 2500 }
        );
    }

    #[test]
    fn move_to_tail_steps_past_the_last_key() {
        let list = snapshot(&[1000, 2000, 3000]);
        assert_eq!(
            plan_move(&list, 1, 2),
            MovePlan::Apply { new_position: 4000 }
        );
    }

    #[test]
    fn target_beyond_end_clamps_to_last_slot() {
        let list = snapshot(&[1000, 2000, 3000]);
        assert_eq!(
            plan_move(&list, 1, 10),
            MovePlan::Apply { new_position: 4000 }
        );
        assert_eq!(plan_move(&list, 3, 10), MovePlan::NoOp);
    }

    #[test]
    fn replanning_the_same_snapshot_is_idempotent() {
        let list = snapshot(&[1000, 2000, 3000]);
        let first = plan_move(&list, 3, 0);
        let second = plan_move(&list, 3, 0);
        assert_eq!(first, second);
    }
}
