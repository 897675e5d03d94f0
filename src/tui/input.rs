use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents the result of handling a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Move current image to kept/
    Keep,
    /// Move current image to deleted/
    Delete,
    /// Leave current image pending and show the next one
    Skip,
    /// Show the previous pending image
    Previous,
    /// Undo last classification
    Undo,
    /// Open current image in the system viewer
    Open,
    /// Toggle help overlay
    Help,
    /// No action
    None,
}

/// Maps keyboard events to actions
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        // Quit: q, Esc or Ctrl+C
        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => KeyAction::Quit,

        // Keep: Right arrow or k
        (KeyCode::Right, KeyModifiers::NONE) => KeyAction::Keep,
        (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::Keep,

        // Delete: Left arrow or d
        (KeyCode::Left, KeyModifiers::NONE) => KeyAction::Delete,
        (KeyCode::Char('d'), KeyModifiers::NONE) => KeyAction::Delete,

        // Navigation
        (KeyCode::Char(' '), KeyModifiers::NONE) => KeyAction::Skip,
        (KeyCode::Down, KeyModifiers::NONE) => KeyAction::Skip,
        (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::Skip,
        (KeyCode::Up, KeyModifiers::NONE) => KeyAction::Previous,
        (KeyCode::Char('i'), KeyModifiers::NONE) => KeyAction::Previous,

        // Undo: u or Ctrl+Z
        (KeyCode::Char('u'), KeyModifiers::NONE) => KeyAction::Undo,
        (KeyCode::Char('z'), KeyModifiers::CONTROL) => KeyAction::Undo,

        (KeyCode::Char('o'), KeyModifiers::NONE) => KeyAction::Open,

        // Help: ? (some terminals report it with SHIFT)
        (KeyCode::Char('?'), KeyModifiers::NONE) => KeyAction::Help,
        (KeyCode::Char('?'), KeyModifiers::SHIFT) => KeyAction::Help,

        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_quit() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Quit);

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(key), KeyAction::Quit);

        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Quit);
    }

    #[test]
    fn test_key_keep() {
        let key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Keep);

        let key = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Keep);
    }

    #[test]
    fn test_key_delete() {
        let key = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Delete);

        let key = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Delete);
    }

    #[test]
    fn test_key_navigation() {
        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Skip);

        let key = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Skip);

        let key = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Previous);

        let key = KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Previous);
    }

    #[test]
    fn test_key_undo() {
        let key = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Undo);

        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(key), KeyAction::Undo);
    }

    #[test]
    fn test_key_open_and_help() {
        let key = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Open);

        let key = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Help);
    }

    #[test]
    fn test_key_none() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::None);

        // Plain z without Ctrl is not undo
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::None);
    }
}
