//! Domain-level keyboard actions independent of key bindings.

/// User intent on the comment list.
///
/// These represent what the user wants, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the selection up one row. Default: k/↑
    SelectPrev,
    /// Move the selection down one row. Default: j/↓
    SelectNext,
    /// Jump to the first row. Default: g/Home
    SelectFirst,
    /// Jump to the last row. Default: G/End
    SelectLast,
    /// Show or hide the replies of the selected comment. Default: Enter/Space
    ToggleReplies,
    /// Leave the screen. Default: q/Esc/Ctrl+c
    Quit,
}
