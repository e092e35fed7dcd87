//! Formula bar mirror
//!
//! Read-only display copy of the formula under edit (or of the selected
//! cell's raw value when nothing is being edited). Strictly downstream of
//! the edit session: it never originates formula mutations. Its only
//! upstream action is a double-click, which re-opens the editor on the
//! currently selected cell — see [`crate::CellEditor::formula_bar_double_click`].

#[derive(Debug, Clone, Default)]
pub struct FormulaBar {
    cell_label: String,
    display: String,
}

impl FormulaBar {
    /// Label identifying the cell the bar mirrors, e.g. `Revenue[3]`
    pub fn cell_label(&self) -> &str {
        &self.cell_label
    }

    /// The mirrored formula/value text
    pub fn display(&self) -> &str {
        &self.display
    }

    pub(crate) fn set_display(&mut self, text: &str) {
        self.display = text.to_string();
    }

    pub(crate) fn set_cell_label(&mut self, column: &str, row_index: usize) {
        self.cell_label = format!("{column}[{row_index}]");
    }
}
