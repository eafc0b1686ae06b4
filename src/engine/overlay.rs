use crate::model::ItemId;

/// The mutually-exclusive overlay surface: at most one of the detail view
/// or the secondary modal is open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Detail(ItemId),
    Modal(ItemId),
}

/// Who owns keyboard input right now. Computed from overlay state, never
/// from ambient terminal/DOM focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOwner {
    /// The list itself; shortcuts are live.
    List,
    /// The fast-entry text field.
    TextEntry,
    /// A detail or modal overlay.
    Overlay,
}

/// Owner of overlay visibility state: the detail/modal pair (mutually
/// exclusive), the side panel, and the text-entry flag (both orthogonal).
///
/// The coordinator never validates target ids against the snapshot; callers
/// check existence before opening. That keeps overlay state decoupled from
/// the collection.
#[derive(Debug, Default)]
pub struct OverlayCoordinator {
    overlay: Overlay,
    side_panel: bool,
    text_entry: bool,
}

impl OverlayCoordinator {
    pub fn new() -> Self {
        OverlayCoordinator::default()
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn side_panel_open(&self) -> bool {
        self.side_panel
    }

    pub fn text_entry_focused(&self) -> bool {
        self.text_entry
    }

    pub fn is_open(&self) -> bool {
        self.overlay != Overlay::Closed
    }

    /// Open the detail overlay. Closes the modal if it was open.
    pub fn open_detail(&mut self, id: ItemId) {
        self.overlay = Overlay::Detail(id);
    }

    pub fn close_detail(&mut self) {
        if matches!(self.overlay, Overlay::Detail(_)) {
            self.overlay = Overlay::Closed;
        }
    }

    /// Open the secondary modal. Closes the detail view if it was open.
    pub fn open_modal(&mut self, id: ItemId) {
        self.overlay = Overlay::Modal(id);
    }

    pub fn close_modal(&mut self) {
        if matches!(self.overlay, Overlay::Modal(_)) {
            self.overlay = Overlay::Closed;
        }
    }

    /// Close whichever overlay is open.
    pub fn close(&mut self) {
        self.overlay = Overlay::Closed;
    }

    pub fn toggle_side_panel(&mut self) {
        self.side_panel = !self.side_panel;
    }

    pub fn set_side_panel(&mut self, open: bool) {
        self.side_panel = open;
    }

    pub fn set_text_entry(&mut self, focused: bool) {
        self.text_entry = focused;
    }

    /// Input-ownership precedence: Overlay > TextEntry > List. The side
    /// panel never claims input.
    pub fn input_owner(&self) -> InputOwner {
        if self.is_open() {
            InputOwner::Overlay
        } else if self.text_entry {
            InputOwner::TextEntry
        } else {
            InputOwner::List
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_and_modal_are_mutually_exclusive() {
        let mut ov = OverlayCoordinator::new();
        ov.open_detail(ItemId::from("a"));
        assert_eq!(ov.overlay(), &Overlay::Detail(ItemId::from("a")));

        ov.open_modal(ItemId::from("b"));
        assert_eq!(ov.overlay(), &Overlay::Modal(ItemId::from("b")));

        ov.open_detail(ItemId::from("c"));
        assert_eq!(ov.overlay(), &Overlay::Detail(ItemId::from("c")));
    }

    #[test]
    fn close_detail_does_not_close_modal() {
        let mut ov = OverlayCoordinator::new();
        ov.open_modal(ItemId::from("b"));
        ov.close_detail();
        assert_eq!(ov.overlay(), &Overlay::Modal(ItemId::from("b")));
        ov.close_modal();
        assert_eq!(ov.overlay(), &Overlay::Closed);
    }

    #[test]
    fn side_panel_and_text_entry_are_orthogonal() {
        let mut ov = OverlayCoordinator::new();
        ov.toggle_side_panel();
        ov.set_text_entry(true);
        ov.open_detail(ItemId::from("a"));
        assert!(ov.side_panel_open());
        assert!(ov.text_entry_focused());

        ov.close();
        assert!(ov.side_panel_open());
        assert!(ov.text_entry_focused());
    }

    #[test]
    fn input_owner_precedence() {
        let mut ov = OverlayCoordinator::new();
        assert_eq!(ov.input_owner(), InputOwner::List);

        ov.set_text_entry(true);
        assert_eq!(ov.input_owner(), InputOwner::TextEntry);

        // overlay outranks text entry
        ov.open_modal(ItemId::from("a"));
        assert_eq!(ov.input_owner(), InputOwner::Overlay);

        ov.close();
        assert_eq!(ov.input_owner(), InputOwner::TextEntry);
        ov.set_text_entry(false);
        assert_eq!(ov.input_owner(), InputOwner::List);
    }

    #[test]
    fn side_panel_never_claims_input() {
        let mut ov = OverlayCoordinator::new();
        ov.toggle_side_panel();
        assert_eq!(ov.input_owner(), InputOwner::List);
    }
}
