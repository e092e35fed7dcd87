//! Edit session lifecycle and text mutation
//!
//! Handles:
//! - Opening an edit session (double-click, ENTER, or typing a character)
//! - Committing / cancelling and the single-editor invariant
//! - Formula text mutation at the tracked cursor (insert, backspace, delete)
//! - The single write path that keeps the formula bar in step

use gridmate_context::functions::char_to_byte;

use crate::editor::CellEditor;

/// How an edit session was opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTrigger {
    DoubleClick,
    EnterKey,
    /// Typing a printable character on a focused cell. The character
    /// replaces the prior formula — a keystroke starts a fresh expression.
    Char(char),
}

impl CellEditor {
    // ========================================================================
    // Session open/close
    // ========================================================================

    /// Enter edit mode on the selected cell. `current_formula` is the cell's
    /// committed formula/value as known to the host.
    ///
    /// If another cell is already under edit, that session is committed and
    /// closed first — at no point are two cells editing.
    pub fn start_edit(&mut self, trigger: EditTrigger, current_formula: &str) {
        let Some(column) = self.selected_column.clone() else {
            return;
        };
        let row = self.selected_row;

        if self.state.editing_mode_on {
            if self.state.is_editing_cell(self.sheet_index, &column, row) {
                return;
            }
            // Single-editor invariant: force the previous cell through close
            self.commit_pending_edit();
        }

        // A prior session on this same cell is resumable until some other
        // cell is edited
        let resuming = self.state.is_same_cell(self.sheet_index, &column, row);

        let (formula, cursor) = match trigger {
            EditTrigger::Char(c) => (c.to_string(), 1),
            EditTrigger::DoubleClick | EditTrigger::EnterKey => {
                if resuming {
                    (self.state.last_formula.clone(), self.state.cursor.index())
                } else {
                    (
                        current_formula.to_string(),
                        current_formula.chars().count(),
                    )
                }
            }
        };

        self.edit_original = current_formula.to_string();
        self.state.editing_mode_on = true;
        self.state.sheet_index = self.sheet_index;
        self.state.column = column.clone();
        self.state.row_index = row;
        self.set_editing_formula(&formula);
        self.state.cursor.set(cursor.min(formula.chars().count()));
        self.formula_bar.set_cell_label(&column, row);

        self.grid.ensure_column_visible(&column);
        self.grid.start_editing_cell(row, &column);
        log::debug!("edit session opened on {column:?}[{row}] (trigger {trigger:?})");
    }

    /// Commit via ENTER/TAB with no suggestion active: push the formula to
    /// the backend and return to navigation.
    pub fn confirm_edit(&mut self) {
        if !self.is_editing() {
            return;
        }
        self.close_edit(true);
    }

    /// Commit without an explicit confirm key — focus left the grid or moved
    /// to another sheet (click-away). The session formula and cursor are kept
    /// so editing can resume on the same cell.
    pub fn commit_pending_edit(&mut self) {
        if !self.is_editing() {
            return;
        }
        self.close_edit(true);
    }

    /// ESCAPE: close and drop typed-but-uncommitted text. There is no undo
    /// stack for in-progress edits.
    pub fn cancel_edit(&mut self) {
        if !self.is_editing() {
            return;
        }
        self.close_edit(false);
    }

    fn close_edit(&mut self, commit: bool) {
        let column = self.state.column.clone();
        let row = self.state.row_index;

        if commit {
            // Fire-and-forget, at most once per commit: the editor returns
            // to navigation regardless of the backend outcome
            if let Err(err) = self.backend.send_set_column_formula_edit(
                self.state.sheet_index,
                &column,
                &self.state.last_formula,
            ) {
                log::warn!("formula commit for column {column:?} failed: {err}");
            }
        } else {
            self.state.last_formula = self.edit_original.clone();
            self.state.cursor.clamp(self.state.last_formula.chars().count());
        }

        self.state.editing_mode_on = false;
        self.suggestion_selected = 0;
        self.grid.stop_editing();
        self.grid.set_focused_cell(row, &column);
        self.formula_bar.set_display(&self.state.last_formula);
        log::debug!(
            "edit session closed on {column:?}[{row}] ({})",
            if commit { "committed" } else { "cancelled" }
        );
    }

    // ========================================================================
    // Formula sync
    // ========================================================================

    /// Single write path for the in-progress formula: updates the
    /// authoritative session copy and the downstream formula bar mirror in
    /// one step, so no reader ever sees them disagree.
    pub fn set_editing_formula(&mut self, formula: &str) {
        self.state.last_formula = formula.to_string();
        self.formula_bar.set_display(formula);
        self.suggestion_selected = 0;
    }

    /// Read path for the formula bar when nothing is being edited: the host
    /// supplies the selected cell's raw value.
    pub fn seed_formula_bar(&mut self, raw_value: &str) {
        if self.is_editing() {
            return;
        }
        self.formula_bar.set_display(raw_value);
    }

    /// Formula bar double-click re-opens the editor on the selected cell
    pub fn formula_bar_double_click(&mut self, current_formula: &str) {
        if self.is_editing() {
            return;
        }
        self.start_edit(EditTrigger::DoubleClick, current_formula);
    }

    // ========================================================================
    // Text mutation at the tracked cursor
    // ========================================================================

    pub fn insert_char(&mut self, c: char) {
        if !self.is_editing() {
            return;
        }
        let mut formula = self.state.last_formula.clone();
        self.state.cursor.clamp(formula.chars().count());
        let at = self.state.cursor.index();
        formula.insert(char_to_byte(&formula, at), c);
        // Cursor update is sequenced after the splice within this handler —
        // it must apply to the post-mutation text
        self.set_editing_formula(&formula);
        self.state.cursor.set(at + 1);
    }

    pub fn backspace(&mut self) {
        if !self.is_editing() {
            return;
        }
        let formula = self.state.last_formula.clone();
        let chars = formula.chars().count();
        let at = self.state.cursor.index().min(chars);
        if at == 0 {
            return;
        }
        let start = char_to_byte(&formula, at - 1);
        let end = char_to_byte(&formula, at);
        let mut next = formula;
        next.replace_range(start..end, "");
        self.set_editing_formula(&next);
        self.state.cursor.set(at - 1);
    }

    pub fn delete_char(&mut self) {
        if !self.is_editing() {
            return;
        }
        let formula = self.state.last_formula.clone();
        let chars = formula.chars().count();
        let at = self.state.cursor.index().min(chars);
        if at >= chars {
            return;
        }
        let start = char_to_byte(&formula, at);
        let end = char_to_byte(&formula, at + 1);
        let mut next = formula;
        next.replace_range(start..end, "");
        self.set_editing_formula(&next);
        // Cursor stays put after a forward delete
        self.state.cursor.set(at);
    }
}
