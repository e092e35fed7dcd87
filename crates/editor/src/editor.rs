//! Cell editor state
//!
//! `CellEditor` is the single parent component owning the edit session.
//! Child surfaces (the floating cell input, the suggestion box, the formula
//! bar) read state through accessors and report events through the explicit
//! methods in [`crate::editing`], [`crate::refs`] and [`crate::key_handler`]
//! — there is no ambient/global state.

use gridmate_context::suggest::{get_suggestions, SuggestionItem};

use crate::formula_bar::FormulaBar;
use crate::grid::{FormulaBackend, GridApi};
use crate::mode::Mode;
use crate::session::EditingState;
use crate::settings::EditorSettings;

pub struct CellEditor {
    pub(crate) sheet_index: usize,
    pub(crate) column_headers: Vec<String>,

    /// The focused, non-editing cell (seeds the formula bar)
    pub(crate) selected_column: Option<String>,
    pub(crate) selected_row: usize,

    pub(crate) state: EditingState,
    /// Committed cell value at the moment the current session opened;
    /// ESCAPE reverts to this.
    pub(crate) edit_original: String,

    /// Highlighted row in the suggestion box
    pub(crate) suggestion_selected: usize,

    pub(crate) formula_bar: FormulaBar,
    pub(crate) settings: EditorSettings,

    pub(crate) grid: Box<dyn GridApi>,
    pub(crate) backend: Box<dyn FormulaBackend>,
}

impl CellEditor {
    pub fn new(
        sheet_index: usize,
        column_headers: Vec<String>,
        grid: Box<dyn GridApi>,
        backend: Box<dyn FormulaBackend>,
    ) -> Self {
        Self {
            sheet_index,
            column_headers,
            selected_column: None,
            selected_row: 0,
            state: EditingState::default(),
            edit_original: String::new(),
            suggestion_selected: 0,
            formula_bar: FormulaBar::default(),
            settings: EditorSettings::default(),
            grid,
            backend,
        }
    }

    pub fn with_settings(mut self, settings: EditorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Derived from the session: `Edit` iff a cell has `editing_mode_on`
    pub fn mode(&self) -> Mode {
        if self.state.editing_mode_on {
            Mode::Edit
        } else {
            Mode::Navigation
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode().is_editing()
    }

    pub fn editing_state(&self) -> &EditingState {
        &self.state
    }

    pub fn formula_bar(&self) -> &FormulaBar {
        &self.formula_bar
    }

    /// Tracked insertion offset (char index into the formula)
    pub fn cursor_index(&self) -> usize {
        self.state.cursor.index()
    }

    /// The focused, non-editing cell, if any
    pub fn selected_cell(&self) -> Option<(&str, usize)> {
        self.selected_column
            .as_deref()
            .map(|col| (col, self.selected_row))
    }

    /// Columns can be added or renamed upstream mid-session
    pub fn set_column_headers(&mut self, headers: Vec<String>) {
        self.column_headers = headers;
    }

    /// Programmatic selection change from host-owned navigation (keyboard
    /// movement, sheet switches). Unlike [`CellEditor::on_cell_focused`]
    /// this never runs the reference-insertion protocol.
    pub fn select_cell(&mut self, column: &str, row_index: usize) {
        self.selected_column = Some(column.to_string());
        self.selected_row = row_index;
        if !self.is_editing() {
            self.formula_bar.set_cell_label(column, row_index);
        }
    }

    // ========================================================================
    // Suggestion box
    // ========================================================================

    /// Current suggestion list, recomputed from the live formula. Empty when
    /// the box is closed (not editing, exact header typed, or no candidates).
    pub fn suggestions(&self) -> Vec<SuggestionItem> {
        if !self.is_editing() {
            return Vec::new();
        }
        match get_suggestions(&self.state.last_formula, &self.column_headers) {
            Some(mut items) => {
                items.truncate(self.settings.max_suggestions);
                items
            }
            None => Vec::new(),
        }
    }

    /// True when the suggestion box is open (the derived
    /// editing-with-suggestions state)
    pub fn suggestions_active(&self) -> bool {
        !self.suggestions().is_empty()
    }

    /// Index of the highlighted suggestion
    pub fn suggestion_selected(&self) -> usize {
        self.suggestion_selected
    }

    /// Move the highlight up, clamped at 0 (no wraparound)
    pub fn suggestion_up(&mut self) {
        let len = self.suggestions().len();
        if len == 0 {
            return;
        }
        self.suggestion_selected = self.suggestion_selected.min(len - 1).saturating_sub(1);
    }

    /// Move the highlight down, clamped at the last row (no wraparound)
    pub fn suggestion_down(&mut self) {
        let len = self.suggestions().len();
        if len == 0 {
            return;
        }
        self.suggestion_selected = (self.suggestion_selected + 1).min(len - 1);
    }

    /// Accept the highlighted suggestion: replace the typed trailing token
    /// with the candidate (upper-cased + `(` for functions, verbatim for
    /// headers). The editor stays open.
    pub fn accept_suggestion(&mut self) {
        let items = self.suggestions();
        let Some(item) = items.get(self.suggestion_selected) else {
            return;
        };

        let formula = self.state.last_formula.clone();
        // The matched token is a literal suffix of the formula text
        debug_assert!(formula.ends_with(&item.matched));
        let stem_len = formula.len() - item.matched.len();
        let replacement = item.acceptance_text();
        let next = format!("{}{}", &formula[..stem_len], replacement);

        let cursor = next.chars().count();
        self.set_editing_formula(&next);
        self.state.cursor.set(cursor);
    }

    /// Host caret report from the text input's change/click events
    /// (`selection_end` plus any caller-supplied adjustment).
    pub fn caret_moved(&mut self, selection_end: usize, adjust: isize) {
        if !self.is_editing() {
            return;
        }
        self.state.cursor.set_from_caret(selection_end, adjust);
        self.state
            .cursor
            .clamp(self.state.last_formula.chars().count());
    }
}
