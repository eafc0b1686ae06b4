use crate::model::{Direction, ItemId, Snapshot};

/// Owner of the single focus pointer used for keyboard navigation.
///
/// Nothing else writes focus. Transitions happen only on snapshot changes
/// and explicit user navigation — never in response to projection output.
#[derive(Debug, Default)]
pub struct FocusController {
    focused: Option<ItemId>,
}

impl FocusController {
    pub fn new() -> Self {
        FocusController::default()
    }

    pub fn focused(&self) -> Option<&ItemId> {
        self.focused.as_ref()
    }

    /// Repair the focus pointer against a new snapshot. Returns true only
    /// if a write occurred.
    ///
    /// Idempotent: a focus id still present in the snapshot is left alone,
    /// so reconciling twice against the same snapshot performs zero writes
    /// the second time. This is the property that keeps the update cycle
    /// from feeding back into itself.
    pub fn reconcile(&mut self, snapshot: &Snapshot) -> bool {
        match &self.focused {
            Some(id) if snapshot.contains(id) => false,
            None if snapshot.is_empty() => false,
            _ => {
                // focused item disappeared, the list just became non-empty
                // (mount included), or the list emptied
                self.focused = snapshot.first_id().cloned();
                true
            }
        }
    }

    /// Move focus to the adjacent item by position order. No wrap: at
    /// either boundary this is a no-op. From the unfocused state, Next
    /// lands on the first item and Previous on the last.
    pub fn navigate(&mut self, snapshot: &Snapshot, direction: Direction) {
        match &self.focused {
            Some(id) => {
                if let Some(neighbor) = snapshot.neighbor(id, direction) {
                    self.focused = Some(neighbor.clone());
                }
            }
            None => {
                self.focused = match direction {
                    Direction::Next => snapshot.first_id().cloned(),
                    Direction::Previous => snapshot.last_id().cloned(),
                };
            }
        }
    }

    /// Focus a newly created item unconditionally.
    pub fn focus_created(&mut self, id: ItemId) {
        self.focused = Some(id);
    }

    /// Restore a persisted focus id; kept only if still present.
    pub fn restore(&mut self, id: Option<ItemId>, snapshot: &Snapshot) {
        self.focused = id.filter(|id| snapshot.contains(id));
    }
}
