//! Edit session state
//!
//! At most one cell is ever in edit mode; this is the single session object
//! that records which one, plus the in-progress formula and cursor. The
//! formula and cursor deliberately outlive `editing_mode_on` flipping false:
//! if editing resumes on the same cell before any other cell is edited, the
//! prior session is restored.

use serde::{Deserialize, Serialize};

use crate::cursor::CursorTracker;

/// State of the single active (or most recently closed) edit session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditingState {
    pub editing_mode_on: bool,
    pub sheet_index: usize,
    /// Header of the column under edit
    pub column: String,
    pub row_index: usize,
    /// The in-progress formula while editing; the last session's formula
    /// once `editing_mode_on` is false.
    pub last_formula: String,
    pub cursor: CursorTracker,
}

impl EditingState {
    /// True if this session identifies the given cell (editing or not)
    pub fn is_same_cell(&self, sheet_index: usize, column: &str, row_index: usize) -> bool {
        self.sheet_index == sheet_index && self.column == column && self.row_index == row_index
    }

    /// True if the given cell is actively under edit
    pub fn is_editing_cell(&self, sheet_index: usize, column: &str, row_index: usize) -> bool {
        self.editing_mode_on && self.is_same_cell(sheet_index, column, row_index)
    }
}
