//! External collaborator interfaces
//!
//! The grid widget and the backend persistence transport are not owned by
//! this core; they sit behind these traits and are driven imperatively.

use std::fmt;

/// A column as reported by grid focus events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridColumn {
    /// The synthetic row-label gutter. Never a valid reference target.
    Index,
    Header(String),
}

/// Imperative surface of the grid/table widget. The core calls these to keep
/// the visible editor in step with the session state; it does not own cell
/// rendering.
pub trait GridApi {
    fn start_editing_cell(&mut self, row_index: usize, col_key: &str);
    fn stop_editing(&mut self);
    fn set_focused_cell(&mut self, row_index: usize, col_key: &str);
    fn ensure_column_visible(&mut self, col_key: &str);
}

/// Failure from the persistence transport.
///
/// Commits are fire-and-forget: the editor logs the error and returns to
/// navigation regardless. Formula syntax errors are not represented here —
/// validation is the backend's job and surfaced outside this core.
#[derive(Debug)]
pub enum SendError {
    /// Transport to the backend kernel is gone.
    Disconnected(String),
    /// Backend refused the message envelope.
    Rejected(String),
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected(msg) => write!(f, "backend disconnected: {msg}"),
            Self::Rejected(msg) => write!(f, "backend rejected message: {msg}"),
        }
    }
}

impl std::error::Error for SendError {}

/// Backend persistence call, invoked exactly once per successful commit and
/// never while the same keystroke sequence still has `editing_mode_on` set.
pub trait FormulaBackend {
    fn send_set_column_formula_edit(
        &mut self,
        sheet_index: usize,
        column_header: &str,
        new_formula: &str,
    ) -> Result<(), SendError>;
}
