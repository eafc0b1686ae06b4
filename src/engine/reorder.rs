use crate::model::{Direction, ItemId, Snapshot};

/// A planned reorder: the snapshot with the move already applied, plus the
/// position reassignments to persist.
#[derive(Debug, Clone)]
pub struct MovePlan {
    pub snapshot: Snapshot,
    pub positions: Vec<(ItemId, i64)>,
}

/// Plan moving `id` one step in `direction`. Returns None at either
/// boundary or when the id is absent.
///
/// The caller applies `snapshot` optimistically (the user sees the new
/// order immediately) and persists `positions` through the adapter. On
/// persistence failure the optimistic order stays — no rollback flicker;
/// the next snapshot replacement reconciles to store truth.
pub fn plan_step(snapshot: &Snapshot, id: &ItemId, direction: Direction) -> Option<MovePlan> {
    let from = snapshot.index_of(id)?;
    let target = match direction {
        Direction::Next => from.checked_add(1)?,
        Direction::Previous => from.checked_sub(1)?,
    };
    plan_move(snapshot, id, target)
}

/// Plan moving `id` to an arbitrary index (stable list move, not a sort).
pub fn plan_move(snapshot: &Snapshot, id: &ItemId, target_index: usize) -> Option<MovePlan> {
    let (snapshot, positions) = snapshot.moved(id, target_index)?;
    Some(MovePlan {
        snapshot,
        positions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, Status};
    use chrono::Utc;

    fn snapshot(ids: &[&str]) -> Snapshot {
        let items = ids
            .iter()
            .enumerate()
            .map(|(i, id)| Item {
                id: ItemId::from(*id),
                title: id.to_string(),
                status: Status::Pending,
                position: i as i64,
                note: None,
                created_at: Utc::now(),
            })
            .collect();
        Snapshot::from_items(items).unwrap()
    }

    #[test]
    fn step_down_swaps_with_next() {
        let snap = snapshot(&["a", "b", "c"]);
        let plan = plan_step(&snap, &ItemId::from("a"), Direction::Next).unwrap();
        let ids: Vec<&str> = plan.snapshot.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert!(!plan.positions.is_empty());
    }

    #[test]
    fn step_at_boundary_is_none() {
        let snap = snapshot(&["a", "b"]);
        assert!(plan_step(&snap, &ItemId::from("a"), Direction::Previous).is_none());
        assert!(plan_step(&snap, &ItemId::from("b"), Direction::Next).is_none());
    }

    #[test]
    fn move_to_index_is_stable() {
        let snap = snapshot(&["a", "b", "c", "d"]);
        let plan = plan_move(&snap, &ItemId::from("a"), 2).unwrap();
        let ids: Vec<&str> = plan.snapshot.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a", "d"]);
    }
}
