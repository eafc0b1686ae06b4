//! The view-state synchronization engine.
//!
//! Data flow is one-way: snapshot → controllers → projection. Every entry
//! point below corresponds to an *original* event (a snapshot replacement,
//! a keystroke, a record action) and ends with exactly one projection
//! recompute. The projection output is never an input to any controller,
//! so a single external event can never trigger a second round of state
//! writes — the system is quiescent after one pass.

pub mod focus;
pub mod overlay;
pub mod projection;
pub mod reorder;
pub mod router;
pub mod selection;

pub use focus::FocusController;
pub use overlay::{InputOwner, Overlay, OverlayCoordinator};
pub use projection::{BindActions, DefaultBindings, ItemAction, ItemActions, ViewRecord, project};
pub use reorder::{MovePlan, plan_move, plan_step};
pub use router::{Command, Decision, InputRouter};
pub use selection::SelectionController;

use crate::model::{Direction, Item, ItemId, KeysConfig, Snapshot};

/// Owns the snapshot, the three state controllers, and the last projection.
///
/// State ownership is strict: focus is written only by the focus
/// controller, selection only by the selection controller, overlay state
/// only by the coordinator, and the snapshot only by `replace_snapshot` /
/// the optimistic reorder. Everything else reads.
pub struct Engine {
    snapshot: Snapshot,
    focus: FocusController,
    selection: SelectionController,
    overlay: OverlayCoordinator,
    router: InputRouter,
    bindings: DefaultBindings,
    view: Vec<ViewRecord>,
}

impl Engine {
    pub fn new(keys: &KeysConfig) -> Engine {
        Engine {
            snapshot: Snapshot::default(),
            focus: FocusController::new(),
            selection: SelectionController::new(),
            overlay: OverlayCoordinator::new(),
            router: InputRouter::new(keys),
            bindings: DefaultBindings,
            view: Vec::new(),
        }
    }

    // --- reads ---

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The current render-ready records.
    pub fn view(&self) -> &[ViewRecord] {
        &self.view
    }

    pub fn focused(&self) -> Option<&ItemId> {
        self.focus.focused()
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn overlay(&self) -> &Overlay {
        self.overlay.overlay()
    }

    pub fn side_panel_open(&self) -> bool {
        self.overlay.side_panel_open()
    }

    pub fn text_entry_focused(&self) -> bool {
        self.overlay.text_entry_focused()
    }

    pub fn input_owner(&self) -> InputOwner {
        self.overlay.input_owner()
    }

    /// The active (validated) key bindings.
    pub fn keys(&self) -> &KeysConfig {
        self.router.keys()
    }

    /// Route a plain keystroke against the current input owner. Pure; the
    /// caller feeds a `Dispatch` decision back into [`Engine::dispatch`].
    pub fn route_key(&self, key: char) -> Decision {
        self.router.route(self.overlay.input_owner(), key)
    }

    // --- original events ---

    /// Replace the collection snapshot atomically, then repair the focus
    /// and selection invariants synchronously (never lazily at render
    /// time) and reproject once.
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.focus.reconcile(&self.snapshot);
        self.selection.reconcile(&self.snapshot);
        self.refresh();
    }

    /// Apply one of the four keyboard commands.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::EnterFastEntry => self.overlay.set_text_entry(true),
            Command::EditFocused => {
                // guard existence here, not in the coordinator
                let target = self
                    .focus
                    .focused()
                    .or_else(|| self.snapshot.first_id())
                    .cloned();
                if let Some(id) = target
                    && self.snapshot.contains(&id)
                {
                    self.overlay.open_detail(id);
                }
            }
            Command::FocusNext => self.focus.navigate(&self.snapshot, Direction::Next),
            Command::FocusPrevious => self.focus.navigate(&self.snapshot, Direction::Previous),
        }
        self.refresh();
    }

    /// Invoke a pre-bound record action. Targets that vanished since the
    /// record was produced are no-ops.
    pub fn invoke(&mut self, action: ItemAction) {
        match action {
            ItemAction::OpenDetail(id) => {
                if self.snapshot.contains(&id) {
                    self.overlay.open_detail(id);
                }
            }
            ItemAction::OpenModal(id) => {
                if self.snapshot.contains(&id) {
                    self.overlay.open_modal(id);
                }
            }
            ItemAction::ToggleSelect(id) => {
                if self.snapshot.contains(&id) {
                    self.selection.toggle(id);
                }
            }
        }
        self.refresh();
    }

    /// A fast-entry creation completed: fold the new item into the local
    /// snapshot and focus it unconditionally.
    pub fn item_created(&mut self, item: Item) {
        let id = item.id.clone();
        self.snapshot = self.snapshot.inserted(item);
        self.focus.focus_created(id);
        self.refresh();
    }

    /// Toggle selection of the focused item.
    pub fn toggle_select_focused(&mut self) {
        if let Some(id) = self.focus.focused().cloned() {
            self.selection.toggle(id);
        }
        self.refresh();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.refresh();
    }

    /// Close whichever overlay is open (the overlay contract's onClose).
    pub fn close_overlay(&mut self) {
        self.overlay.close();
        self.refresh();
    }

    /// Escalate the open detail view to the secondary modal for the same
    /// target. No-op unless detail is open.
    pub fn escalate_detail_to_modal(&mut self) {
        if let Overlay::Detail(id) = self.overlay.overlay().clone() {
            self.overlay.open_modal(id);
        }
        self.refresh();
    }

    pub fn toggle_side_panel(&mut self) {
        self.overlay.toggle_side_panel();
        self.refresh();
    }

    pub fn set_text_entry(&mut self, focused: bool) {
        self.overlay.set_text_entry(focused);
        self.refresh();
    }

    /// Move the focused item one step, applying the new order optimistically.
    /// Returns the position reassignments to persist, or None at a boundary.
    pub fn move_focused(&mut self, direction: Direction) -> Option<Vec<(ItemId, i64)>> {
        let id = self.focus.focused()?.clone();
        let plan = plan_step(&self.snapshot, &id, direction)?;
        self.snapshot = plan.snapshot;
        // the moved id is still present, so focus and selection hold
        self.refresh();
        Some(plan.positions)
    }

    /// Restore persisted UI state against the first snapshot; stale ids
    /// are dropped before anything renders.
    pub fn restore(
        &mut self,
        snapshot: Snapshot,
        focused: Option<ItemId>,
        selected: impl IntoIterator<Item = ItemId>,
        side_panel: bool,
    ) {
        self.snapshot = snapshot;
        self.focus.restore(focused, &self.snapshot);
        self.focus.reconcile(&self.snapshot);
        self.selection.restore(selected, &self.snapshot);
        self.overlay.set_side_panel(side_panel);
        self.refresh();
    }

    /// The single projection pass. Pure over current state; calling it
    /// again without an intervening event produces identical records.
    fn refresh(&mut self) {
        self.view = project(
            &self.snapshot,
            self.focus.focused(),
            &self.selection,
            &self.bindings,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, Status};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn item(id: &str, position: i64) -> Item {
        Item {
            id: ItemId::from(id),
            title: format!("task {id}"),
            status: Status::Pending,
            position,
            note: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn snapshot(ids: &[&str]) -> Snapshot {
        let items = ids
            .iter()
            .enumerate()
            .map(|(i, id)| item(id, i as i64))
            .collect();
        Snapshot::from_items(items).unwrap()
    }

    fn engine_with(ids: &[&str]) -> Engine {
        let mut engine = Engine::new(&KeysConfig::default());
        engine.replace_snapshot(snapshot(ids));
        engine
    }

    /// Re-running the projection over the state an event left behind must
    /// reproduce the exact same records.
    fn assert_quiescent(engine: &Engine) {
        let again = project(
            engine.snapshot(),
            engine.focused(),
            engine.selection(),
            &DefaultBindings,
        );
        assert_eq!(engine.view(), &again[..]);
    }

    #[test]
    fn mount_focuses_first_item() {
        let engine = engine_with(&["a", "b", "c"]);
        assert_eq!(engine.focused(), Some(&ItemId::from("a")));
        assert!(engine.view()[0].is_focused);
        assert_quiescent(&engine);
    }

    #[test]
    fn replacing_with_identical_snapshot_changes_nothing() {
        let mut engine = engine_with(&["a", "b"]);
        let before = engine.view().to_vec();
        engine.replace_snapshot(snapshot(&["a", "b"]));
        assert_eq!(engine.view(), &before[..]);
    }

    #[test]
    fn edit_falls_back_to_first_item() {
        let mut engine = engine_with(&["a", "b"]);
        engine.dispatch(Command::EditFocused);
        assert_eq!(engine.overlay(), &Overlay::Detail(ItemId::from("a")));
        assert_quiescent(&engine);
    }

    #[test]
    fn edit_on_empty_list_is_noop() {
        let mut engine = engine_with(&[]);
        engine.dispatch(Command::EditFocused);
        assert_eq!(engine.overlay(), &Overlay::Closed);
    }

    #[test]
    fn invoke_on_vanished_target_is_noop() {
        let mut engine = engine_with(&["a"]);
        engine.invoke(ItemAction::OpenDetail(ItemId::from("gone")));
        assert_eq!(engine.overlay(), &Overlay::Closed);
        engine.invoke(ItemAction::ToggleSelect(ItemId::from("gone")));
        assert!(engine.selection().is_empty());
    }

    #[test]
    fn item_created_focuses_new_item() {
        let mut engine = engine_with(&["a", "b"]);
        engine.item_created(item("d", 99));
        assert_eq!(engine.focused(), Some(&ItemId::from("d")));
        assert!(engine.view().last().unwrap().is_focused);
        assert_quiescent(&engine);
    }

    #[test]
    fn move_focused_applies_optimistically() {
        let mut engine = engine_with(&["a", "b", "c"]);
        engine.dispatch(Command::FocusNext); // b
        let positions = engine.move_focused(Direction::Next).unwrap();
        let ids: Vec<&str> = engine.view().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
        assert_eq!(engine.focused(), Some(&ItemId::from("b")));
        assert!(!positions.is_empty());
        assert_quiescent(&engine);
    }

    #[test]
    fn move_at_boundary_returns_none() {
        let mut engine = engine_with(&["a", "b"]);
        // focus is on a
        assert!(engine.move_focused(Direction::Previous).is_none());
    }

    #[test]
    fn selection_survives_reorder_and_overlay_churn() {
        let mut engine = engine_with(&["a", "b", "c"]);
        engine.toggle_select_focused(); // a
        engine.invoke(ItemAction::OpenModal(ItemId::from("b")));
        engine.close_overlay();
        engine.move_focused(Direction::Next);
        assert!(engine.selection().is_selected(&ItemId::from("a")));
        assert_quiescent(&engine);
    }

    #[test]
    fn restore_reconciles_stale_state() {
        let mut engine = Engine::new(&KeysConfig::default());
        engine.restore(
            snapshot(&["a", "b"]),
            Some(ItemId::from("gone")),
            vec![ItemId::from("b"), ItemId::from("gone")],
            true,
        );
        // stale focus repaired to first; stale selection pruned
        assert_eq!(engine.focused(), Some(&ItemId::from("a")));
        assert!(engine.selection().is_selected(&ItemId::from("b")));
        assert_eq!(engine.selection().len(), 1);
        assert!(engine.side_panel_open());
        assert_quiescent(&engine);
    }

    #[test]
    fn escalate_detail_to_modal_keeps_target() {
        let mut engine = engine_with(&["a"]);
        engine.dispatch(Command::EditFocused);
        engine.escalate_detail_to_modal();
        assert_eq!(engine.overlay(), &Overlay::Modal(ItemId::from("a")));
    }
}
