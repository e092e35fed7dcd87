//! Cell editor core
//!
//! Headless state machine for in-cell formula editing: a single edit session
//! at a time, a tracked cursor offset that survives editor close/reopen, an
//! autocomplete suggestion box, and the click-a-cell-to-insert-a-reference
//! protocol. The grid widget and the backend persistence call are external
//! collaborators behind the traits in [`grid`]; this crate owns no rendering
//! and no transport.
//!
//! # Usage
//!
//! ```ignore
//! use gridmate_editor::{CellEditor, EditTrigger, GridColumn, Key};
//!
//! let mut editor = CellEditor::new(0, headers, grid, backend);
//! editor.on_cell_focused(GridColumn::Header("colA".into()), 2);
//! editor.start_edit(EditTrigger::Char('='), "");
//! editor.key_down(Key::Char('S'));
//! // clicking another cell splices its header at the cursor
//! editor.on_cell_focused(GridColumn::Header("colB".into()), 5);
//! editor.key_down(Key::Enter); // commit: one backend send, editor closes
//! ```

pub mod cursor;
pub mod editing;
pub mod editor;
pub mod formula_bar;
pub mod grid;
pub mod key_handler;
pub mod mode;
pub mod refs;
pub mod session;
pub mod settings;

pub use cursor::CursorTracker;
pub use editing::EditTrigger;
pub use editor::CellEditor;
pub use formula_bar::FormulaBar;
pub use grid::{FormulaBackend, GridApi, GridColumn, SendError};
pub use key_handler::Key;
pub use mode::Mode;
pub use session::EditingState;
pub use settings::EditorSettings;
