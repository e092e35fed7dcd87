/// Editor modes determine how pointer and keyboard input is handled.
///
/// "Editing with the suggestion box open" is not a third mode: it holds
/// whenever the editor is in `Edit` and the suggestion list is non-empty,
/// and is derived on demand rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Navigation, // Grid focus: clicks move the selection
    Edit,       // Cell editor focus: keystrokes mutate the formula
}

impl Mode {
    /// True if a cell's formula text is actively being edited
    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::Edit)
    }

    pub fn is_navigation(&self) -> bool {
        matches!(self, Mode::Navigation)
    }
}
