//! Toolkit-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples form logic from terminal or windowing libraries so key handling
/// can be driven directly in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (commit the focused field).
    Enter,
    /// Backspace key (delete last character).
    Backspace,
    /// Tab key (next field).
    Tab,
    /// Shift+Tab (previous field).
    BackTab,
    /// Escape key (cancel).
    Esc,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
}
