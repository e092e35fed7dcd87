//! Column-reference insertion protocol
//!
//! Translates "the user clicked a cell while a formula is being edited" into
//! a text splice of the clicked column's header at the tracked cursor
//! offset. A grid click would ordinarily blur (and close) the open editor
//! and focus the clicked cell; the guarded transitions here override that so
//! the net effect is "editor stays open, formula text changed".

use gridmate_context::functions::char_to_byte;

use crate::editor::CellEditor;
use crate::grid::GridColumn;

impl CellEditor {
    /// Grid focus-change entry point.
    ///
    /// Not editing: plain selection update (read path). Editing: either a
    /// guarded no-op (clicked the editing cell itself, or the index gutter)
    /// or a reference splice — in both cases the editor keeps its cell.
    pub fn on_cell_focused(&mut self, column: GridColumn, row_index: usize) {
        if !self.is_editing() {
            if let GridColumn::Header(col) = column {
                self.formula_bar.set_cell_label(&col, row_index);
                self.selected_column = Some(col);
                self.selected_row = row_index;
            }
            return;
        }

        match column {
            // Row-label gutter: never a reference target
            GridColumn::Index => self.refocus_editor(),
            // Clicking the cell you're editing must not self-reference
            GridColumn::Header(col) if col == self.state.column => self.refocus_editor(),
            GridColumn::Header(col) => self.insert_column_reference(&col),
        }
    }

    /// Splice the clicked column's header into the formula at the tracked
    /// cursor offset and keep the editor open on its cell.
    fn insert_column_reference(&mut self, col: &str) {
        let mut formula = self.state.last_formula.clone();
        self.state.cursor.clamp(formula.chars().count());
        let at = self.state.cursor.index();
        formula.insert_str(char_to_byte(&formula, at), col);

        // Splice first, then cursor: the advance must land on the
        // post-mutation text, not a stale snapshot
        self.set_editing_formula(&formula);
        self.state.cursor.advance(col.chars().count());

        log::debug!(
            "inserted reference {col:?} at offset {at} into {:?}",
            self.state.last_formula
        );
        self.refocus_editor();
    }

    /// Cancel the default blur-close: put focus and the open editor back on
    /// the cell under edit.
    fn refocus_editor(&mut self) {
        let row = self.state.row_index;
        let col = self.state.column.clone();
        self.grid.set_focused_cell(row, &col);
        self.grid.ensure_column_visible(&col);
        self.grid.start_editing_cell(row, &col);
    }
}
