//! Keystroke input handling using crossterm
//!
//! Features:
//! - Blocking and polled key reads
//! - Menu key mapping (arrows, Enter, mode shortcuts)
//! - Esc / Ctrl+C exit detection

use crate::encoding::Encoding;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// What a key press means on the main menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Select,
    Play(Encoding),
    History,
    Quit,
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations
    poll_timeout: Duration,
}

impl InputHandler {
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Poll for a key press; `None` on timeout or non-key events
    pub fn read_key(&self) -> IoResult<Option<KeyEvent>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                // Release/repeat events are reported on some platforms
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    Ok(Some(key_event))
                }
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Block until a key is pressed
    pub fn wait_key(&self) -> IoResult<KeyEvent> {
        loop {
            if let Some(key) = self.read_key()? {
                return Ok(key);
            }
        }
    }

    /// Ctrl+C or Escape
    pub fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            _ => false,
        }
    }

    /// Letter typed as part of a guess, uppercased
    pub fn key_to_letter(key: &KeyEvent) -> Option<char> {
        match key.code {
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(c.to_ascii_uppercase())
            }
            _ => None,
        }
    }

    /// Backspace
    pub fn is_backspace(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Backspace)
    }

    /// Enter
    pub fn is_enter(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter)
    }

    /// Map a key on the main menu; `None` for keys it ignores
    pub fn menu_action(key: &KeyEvent) -> Option<MenuAction> {
        if Self::is_exit(key) {
            return Some(MenuAction::Quit);
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(MenuAction::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(MenuAction::Down),
            KeyCode::Enter => Some(MenuAction::Select),
            KeyCode::Char(c) => match c.to_ascii_uppercase() {
                'Q' => Some(MenuAction::Quit),
                'H' => Some(MenuAction::History),
                other => Encoding::from_shortcut(other).map(MenuAction::Play),
            },
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_exit_keys() {
        assert!(InputHandler::is_exit(&key(KeyCode::Esc)));
        assert!(InputHandler::is_exit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!InputHandler::is_exit(&key(KeyCode::Char('c'))));
    }

    #[test]
    fn test_letters_only() {
        assert_eq!(InputHandler::key_to_letter(&key(KeyCode::Char('q'))), Some('Q'));
        assert_eq!(InputHandler::key_to_letter(&key(KeyCode::Char('7'))), None);
        assert_eq!(InputHandler::key_to_letter(&key(KeyCode::Char(' '))), None);
        assert_eq!(
            InputHandler::key_to_letter(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn test_menu_actions() {
        assert_eq!(
            InputHandler::menu_action(&key(KeyCode::Char('m'))),
            Some(MenuAction::Play(Encoding::Morse))
        );
        assert_eq!(
            InputHandler::menu_action(&key(KeyCode::Char('A'))),
            Some(MenuAction::Play(Encoding::A1Z26))
        );
        assert_eq!(
            InputHandler::menu_action(&key(KeyCode::Char('h'))),
            Some(MenuAction::History)
        );
        assert_eq!(
            InputHandler::menu_action(&key(KeyCode::Char('q'))),
            Some(MenuAction::Quit)
        );
        assert_eq!(
            InputHandler::menu_action(&key(KeyCode::Esc)),
            Some(MenuAction::Quit)
        );
        assert_eq!(
            InputHandler::menu_action(&key(KeyCode::Up)),
            Some(MenuAction::Up)
        );
        assert_eq!(
            InputHandler::menu_action(&key(KeyCode::Enter)),
            Some(MenuAction::Select)
        );
        assert_eq!(InputHandler::menu_action(&key(KeyCode::Char('z'))), None);
    }
}
