use crate::model::{ItemId, Snapshot, Status};

use super::selection::SelectionController;

/// An intention carried by a view record's pre-bound actions. Invoking one
/// goes back through the engine entry points — records never mutate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    OpenDetail(ItemId),
    OpenModal(ItemId),
    ToggleSelect(ItemId),
}

/// The actions bound to a single view record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemActions {
    pub open_detail: ItemAction,
    pub open_modal: ItemAction,
    pub toggle_select: ItemAction,
}

/// Binds per-item actions at projection time. The seam exists so the
/// projection stays a pure function of its four inputs.
pub trait BindActions {
    fn bind(&self, id: &ItemId) -> ItemActions;
}

/// The standard binding: each record carries its own id in its actions.
#[derive(Debug, Default)]
pub struct DefaultBindings;

impl BindActions for DefaultBindings {
    fn bind(&self, id: &ItemId) -> ItemActions {
        ItemActions {
            open_detail: ItemAction::OpenDetail(id.clone()),
            open_modal: ItemAction::OpenModal(id.clone()),
            toggle_select: ItemAction::ToggleSelect(id.clone()),
        }
    }
}

/// One render-ready row. Derived, never persisted, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRecord {
    pub id: ItemId,
    pub title: String,
    pub status: Status,
    pub glyph: char,
    pub is_focused: bool,
    pub is_selected: bool,
    pub actions: ItemActions,
}

/// Project the collection plus focus/selection into render-ready records.
///
/// Pure: no side effects, no writes to any controller, deterministic.
/// Identical inputs produce `==` output, which is what the quiescence
/// check compares. Ordering mirrors the snapshot's position order.
pub fn project(
    snapshot: &Snapshot,
    focused: Option<&ItemId>,
    selection: &SelectionController,
    bindings: &dyn BindActions,
) -> Vec<ViewRecord> {
    snapshot
        .iter()
        .map(|item| ViewRecord {
            id: item.id.clone(),
            title: item.title.clone(),
            status: item.status,
            glyph: item.status.glyph(),
            is_focused: focused == Some(&item.id),
            is_selected: selection.is_selected(&item.id),
            actions: bindings.bind(&item.id),
        })
        .collect()
}
