use std::collections::HashSet;

use crate::model::{ItemId, Snapshot};

/// Owner of the multi-item selection set. Independent of focus; every
/// operation is idempotent.
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: HashSet<ItemId>,
}

impl SelectionController {
    pub fn new() -> Self {
        SelectionController::default()
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.selected.iter()
    }

    pub fn select(&mut self, id: ItemId) {
        self.selected.insert(id);
    }

    pub fn deselect(&mut self, id: &ItemId) {
        self.selected.remove(id);
    }

    pub fn toggle(&mut self, id: ItemId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Prune ids no longer present in the snapshot. Returns true only if
    /// something was removed.
    pub fn reconcile(&mut self, snapshot: &Snapshot) -> bool {
        let before = self.selected.len();
        self.selected.retain(|id| snapshot.contains(id));
        self.selected.len() != before
    }

    /// Restore a persisted selection; stale ids are dropped.
    pub fn restore(&mut self, ids: impl IntoIterator<Item = ItemId>, snapshot: &Snapshot) {
        self.selected = ids.into_iter().filter(|id| snapshot.contains(id)).collect();
    }
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
    fn select_and_toggle_are_idempotent() {
        let mut sel = SelectionController::new();
        sel.select(ItemId::from("a"));
        sel.select(ItemId::from("a"));
        assert_eq!(sel.len(), 1);
        sel.toggle(ItemId::from("a"));
        assert!(sel.is_empty());
        sel.toggle(ItemId::from("a"));
        assert!(sel.is_selected(&ItemId::from("a")));
    }

    #[test]
    fn reconcile_prunes_deleted_ids() {
        let mut sel = SelectionController::new();
        sel.select(ItemId::from("a"));
        sel.select(ItemId::from("b"));
        let snap = snapshot(&["a"]);
        assert!(sel.reconcile(&snap));
        assert!(sel.is_selected(&ItemId::from("a")));
        assert!(!sel.is_selected(&ItemId::from("b")));
        // second pass: nothing left to prune
        assert!(!sel.reconcile(&snap));
    }

    #[test]
    fn clear_then_reconcile_is_noop() {
        let mut sel = SelectionController::new();
        sel.select(ItemId::from("a"));
        sel.clear();
        assert!(!sel.reconcile(&snapshot(&["a"])));
    }
}
