//! Keyboard dispatch for the cell editor
//!
//! Routes key events to suggestion navigation or formula-text mutation.
//! Session-opening keys (typing on a focused, non-editing cell) are the
//! host's responsibility — it owns the cell values and calls
//! [`CellEditor::start_edit`] directly.

use crate::editor::CellEditor;

/// Keys routed to the editor while an edit session is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Tab,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Backspace,
    Delete,
    Char(char),
}

impl CellEditor {
    /// Handle a keydown while editing. No-op in navigation mode — the host
    /// opens sessions through [`CellEditor::start_edit`], since only it
    /// knows the focused cell's committed value.
    pub fn key_down(&mut self, key: Key) {
        if !self.is_editing() {
            return;
        }

        let suggesting = self.suggestions_active();
        match key {
            // ENTER/TAB select while the box is open; they commit otherwise
            Key::Enter | Key::Tab if suggesting => self.accept_suggestion(),
            Key::Enter | Key::Tab => self.confirm_edit(),
            // ESCAPE falls through to closing even with the box open
            Key::Escape => self.cancel_edit(),
            Key::ArrowUp if suggesting => self.suggestion_up(),
            Key::ArrowDown if suggesting => self.suggestion_down(),
            Key::ArrowUp | Key::ArrowDown => {}
            // Horizontal arrows always go to the cursor tracker; suggestion
            // navigation never captures them
            Key::ArrowLeft => {
                if self.settings.arrow_key_caret_compensation {
                    self.state.cursor.arrow_left();
                }
            }
            Key::ArrowRight => {
                if self.settings.arrow_key_caret_compensation {
                    let chars = self.state.last_formula.chars().count();
                    self.state.cursor.arrow_right(chars);
                }
            }
            Key::Backspace => self.backspace(),
            Key::Delete => self.delete_char(),
            Key::Char(c) => self.insert_char(c),
        }
    }
}
