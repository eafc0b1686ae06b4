use crate::model::KeysConfig;

use super::overlay::InputOwner;

/// The four keyboard commands of the list surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    EnterFastEntry,
    EditFocused,
    FocusNext,
    FocusPrevious,
}

/// Outcome of routing one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// A bound key arrived while something else owns input; the caller
    /// must consume the event and do nothing.
    Swallowed,
    /// Not one of the four bound keys; the caller may handle it elsewhere.
    Unbound,
    /// Dispatch this command. The caller consumes the event (the terminal
    /// equivalent of preventDefault).
    Dispatch(Command),
}

/// Pure keystroke → command routing. Holds only the (validated) bindings;
/// reads the input owner, writes nothing.
///
/// Policy for text inputs (documented choice): while text entry owns input,
/// every bound key is swallowed — including the enter-fast-entry key, since
/// re-entering fast entry is meaningless there. Overlays likewise swallow
/// all bound keys.
#[derive(Debug)]
pub struct InputRouter {
    keys: KeysConfig,
}

impl InputRouter {
    pub fn new(keys: &KeysConfig) -> Self {
        InputRouter {
            keys: keys.validated(),
        }
    }

    pub fn keys(&self) -> &KeysConfig {
        &self.keys
    }

    fn command_for(&self, key: char) -> Option<Command> {
        let key = key.to_ascii_lowercase();
        if key == self.keys.fast_entry {
            Some(Command::EnterFastEntry)
        } else if key == self.keys.edit {
            Some(Command::EditFocused)
        } else if key == self.keys.next {
            Some(Command::FocusNext)
        } else if key == self.keys.previous {
            Some(Command::FocusPrevious)
        } else {
            None
        }
    }

    /// Route a plain character keystroke given who owns input.
    pub fn route(&self, owner: InputOwner, key: char) -> Decision {
        match self.command_for(key) {
            None => Decision::Unbound,
            Some(command) => match owner {
                InputOwner::List => Decision::Dispatch(command),
                InputOwner::TextEntry | InputOwner::Overlay => Decision::Swallowed,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> InputRouter {
        InputRouter::new(&KeysConfig::default())
    }

    #[test]
    fn dispatches_bound_keys_on_list() {
        let r = router();
        assert_eq!(
            r.route(InputOwner::List, 'n'),
            Decision::Dispatch(Command::EnterFastEntry)
        );
        assert_eq!(
            r.route(InputOwner::List, 'e'),
            Decision::Dispatch(Command::EditFocused)
        );
        assert_eq!(
            r.route(InputOwner::List, 'j'),
            Decision::Dispatch(Command::FocusNext)
        );
        assert_eq!(
            r.route(InputOwner::List, 'k'),
            Decision::Dispatch(Command::FocusPrevious)
        );
    }

    #[test]
    fn keys_are_case_insensitive() {
        let r = router();
        assert_eq!(
            r.route(InputOwner::List, 'J'),
            Decision::Dispatch(Command::FocusNext)
        );
    }

    #[test]
    fn overlay_swallows_bound_keys() {
        let r = router();
        assert_eq!(r.route(InputOwner::Overlay, 'j'), Decision::Swallowed);
        assert_eq!(r.route(InputOwner::Overlay, 'n'), Decision::Swallowed);
    }

    #[test]
    fn text_entry_swallows_everything_bound() {
        let r = router();
        // including the fast-entry key itself
        assert_eq!(r.route(InputOwner::TextEntry, 'n'), Decision::Swallowed);
        assert_eq!(r.route(InputOwner::TextEntry, 'k'), Decision::Swallowed);
    }

    #[test]
    fn unbound_keys_pass_through() {
        let r = router();
        assert_eq!(r.route(InputOwner::List, 'z'), Decision::Unbound);
        assert_eq!(r.route(InputOwner::Overlay, 'z'), Decision::Unbound);
    }

    #[test]
    fn custom_bindings_apply() {
        let keys = KeysConfig {
            fast_entry: 'a',
            edit: 's',
            next: 'd',
            previous: 'f',
        };
        let r = InputRouter::new(&keys);
        assert_eq!(
            r.route(InputOwner::List, 'd'),
            Decision::Dispatch(Command::FocusNext)
        );
        assert_eq!(r.route(InputOwner::List, 'j'), Decision::Unbound);
    }
}
