//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Switch to the tab right of the current one (wraps). Default: ]/→
    NextTab,
    /// Switch to the tab left of the current one (wraps). Default: [/←
    PrevTab,
    /// Select a tab by 1-indexed display position. Default: 1-5
    SelectTab(usize),
    /// Toggle the simulated on-screen keyboard flag. Default: i
    ToggleKeyboard,
    /// Toggle the host inactive flag. Default: x
    ToggleInactive,
    /// Reopen the top bar. Default: t
    OpenTopBar,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_tab_carries_its_position() {
        match KeyAction::SelectTab(3) {
            KeyAction::SelectTab(n) => assert_eq!(n, 3),
            other => panic!("expected SelectTab, got {:?}", other),
        }
    }

    #[test]
    fn actions_are_comparable_for_dispatch() {
        assert_eq!(KeyAction::NextTab, KeyAction::NextTab);
        assert_ne!(KeyAction::NextTab, KeyAction::PrevTab);
        assert_ne!(KeyAction::SelectTab(1), KeyAction::SelectTab(2));
    }
}
