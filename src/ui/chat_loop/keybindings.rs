//! Key resolution for the chat screen.
//!
//! Keys map to [`AppAction`]s without touching state, so the table can be
//! tested on its own.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{Input as TAInput, Key as TAKey};

use crate::core::app::{AppAction, UiFocus};

/// Resolve a key press given the focused pane and whether a reply is pending.
pub fn resolve_key(key: &KeyEvent, focus: UiFocus, pending: bool) -> Option<AppAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return Some(AppAction::Quit),
        KeyCode::Char('n') if ctrl => return Some(AppAction::NewChat),
        KeyCode::Char('l') if ctrl => return Some(AppAction::ClearChat),
        KeyCode::Tab | KeyCode::BackTab => return Some(AppAction::ToggleFocus),
        KeyCode::PageUp => return Some(AppAction::PageUp),
        KeyCode::PageDown => return Some(AppAction::PageDown),
        _ => {}
    }

    match focus {
        UiFocus::Sidebar => resolve_sidebar_key(key),
        UiFocus::Input => resolve_input_key(key, pending),
    }
}

fn resolve_sidebar_key(key: &KeyEvent) -> Option<AppAction> {
    match key.code {
        KeyCode::Up => Some(AppAction::SidebarPrevious),
        KeyCode::Down => Some(AppAction::SidebarNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppAction::ActivateSidebarItem),
        KeyCode::Esc => Some(AppAction::FocusInput),
        _ => None,
    }
}

fn resolve_input_key(key: &KeyEvent, pending: bool) -> Option<AppAction> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Enter if alt || shift => (!pending).then_some(AppAction::InsertNewline),
        KeyCode::Enter => Some(AppAction::SubmitInput),
        // Shift+Up/Down moves the cursor inside a multi-line draft.
        KeyCode::Up if shift => (!pending).then(|| cursor_move(TAKey::Up)),
        KeyCode::Down if shift => (!pending).then(|| cursor_move(TAKey::Down)),
        KeyCode::Up => Some(AppAction::ScrollUp),
        KeyCode::Down => Some(AppAction::ScrollDown),
        _ if pending => None,
        _ => Some(AppAction::EditInput {
            input: TAInput::from(*key),
        }),
    }
}

fn cursor_move(key: TAKey) -> AppAction {
    AppAction::EditInput {
        input: TAInput {
            key,
            ..TAInput::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn resolve(code: KeyCode, modifiers: KeyModifiers, focus: UiFocus) -> Option<AppAction> {
        resolve_key(&press(code, modifiers), focus, false)
    }

    #[test]
    fn global_shortcuts_work_in_either_pane() {
        for focus in [UiFocus::Input, UiFocus::Sidebar] {
            assert!(matches!(
                resolve(KeyCode::Char('c'), KeyModifiers::CONTROL, focus),
                Some(AppAction::Quit)
            ));
            assert!(matches!(
                resolve(KeyCode::Char('n'), KeyModifiers::CONTROL, focus),
                Some(AppAction::NewChat)
            ));
            assert!(matches!(
                resolve(KeyCode::Char('l'), KeyModifiers::CONTROL, focus),
                Some(AppAction::ClearChat)
            ));
            assert!(matches!(
                resolve(KeyCode::Tab, KeyModifiers::NONE, focus),
                Some(AppAction::ToggleFocus)
            ));
            assert!(matches!(
                resolve(KeyCode::PageUp, KeyModifiers::NONE, focus),
                Some(AppAction::PageUp)
            ));
        }
    }

    #[test]
    fn enter_submits_and_modified_enter_inserts_newline() {
        assert!(matches!(
            resolve(KeyCode::Enter, KeyModifiers::NONE, UiFocus::Input),
            Some(AppAction::SubmitInput)
        ));
        assert!(matches!(
            resolve(KeyCode::Enter, KeyModifiers::ALT, UiFocus::Input),
            Some(AppAction::InsertNewline)
        ));
        assert!(matches!(
            resolve(KeyCode::Enter, KeyModifiers::SHIFT, UiFocus::Input),
            Some(AppAction::InsertNewline)
        ));
    }

    #[test]
    fn arrows_scroll_transcript_unless_sidebar_is_focused() {
        assert!(matches!(
            resolve(KeyCode::Up, KeyModifiers::NONE, UiFocus::Input),
            Some(AppAction::ScrollUp)
        ));
        assert!(matches!(
            resolve(KeyCode::Down, KeyModifiers::NONE, UiFocus::Input),
            Some(AppAction::ScrollDown)
        ));
        assert!(matches!(
            resolve(KeyCode::Up, KeyModifiers::NONE, UiFocus::Sidebar),
            Some(AppAction::SidebarPrevious)
        ));
        assert!(matches!(
            resolve(KeyCode::Down, KeyModifiers::NONE, UiFocus::Sidebar),
            Some(AppAction::SidebarNext)
        ));
        assert!(matches!(
            resolve(KeyCode::Enter, KeyModifiers::NONE, UiFocus::Sidebar),
            Some(AppAction::ActivateSidebarItem)
        ));
    }

    #[test]
    fn shift_arrows_move_the_cursor() {
        match resolve(KeyCode::Up, KeyModifiers::SHIFT, UiFocus::Input) {
            Some(AppAction::EditInput { input }) => {
                assert_eq!(input.key, TAKey::Up);
                assert!(!input.shift);
            }
            _ => panic!("expected a cursor move"),
        }
    }

    #[test]
    fn typing_becomes_a_textarea_edit() {
        match resolve(KeyCode::Char('a'), KeyModifiers::NONE, UiFocus::Input) {
            Some(AppAction::EditInput { input }) => assert_eq!(input.key, TAKey::Char('a')),
            _ => panic!("expected an edit"),
        }
        assert!(resolve(KeyCode::Char('a'), KeyModifiers::NONE, UiFocus::Sidebar).is_none());
    }

    #[test]
    fn edits_are_dropped_while_pending() {
        let typed = press(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(resolve_key(&typed, UiFocus::Input, true).is_none());

        let newline = press(KeyCode::Enter, KeyModifiers::ALT);
        assert!(resolve_key(&newline, UiFocus::Input, true).is_none());

        let scroll = press(KeyCode::Up, KeyModifiers::NONE);
        assert!(matches!(
            resolve_key(&scroll, UiFocus::Input, true),
            Some(AppAction::ScrollUp)
        ));
    }
}
