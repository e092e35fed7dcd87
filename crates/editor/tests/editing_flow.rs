//! End-to-end tests for the edit session state machine: open/commit/cancel,
//! reference insertion by cell click, suggestion acceptance, and the
//! formula bar mirror. The grid and backend are recording doubles.

use std::cell::RefCell;
use std::rc::Rc;

use gridmate_editor::{
    CellEditor, EditTrigger, FormulaBackend, GridApi, GridColumn, Key, SendError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum GridCall {
    StartEditing(usize, String),
    StopEditing,
    SetFocused(usize, String),
    EnsureVisible(String),
}

#[derive(Clone, Default)]
struct RecordingGrid {
    calls: Rc<RefCell<Vec<GridCall>>>,
}

impl GridApi for RecordingGrid {
    fn start_editing_cell(&mut self, row_index: usize, col_key: &str) {
        self.calls
            .borrow_mut()
            .push(GridCall::StartEditing(row_index, col_key.to_string()));
    }
    fn stop_editing(&mut self) {
        self.calls.borrow_mut().push(GridCall::StopEditing);
    }
    fn set_focused_cell(&mut self, row_index: usize, col_key: &str) {
        self.calls
            .borrow_mut()
            .push(GridCall::SetFocused(row_index, col_key.to_string()));
    }
    fn ensure_column_visible(&mut self, col_key: &str) {
        self.calls
            .borrow_mut()
            .push(GridCall::EnsureVisible(col_key.to_string()));
    }
}

#[derive(Clone, Default)]
struct RecordingBackend {
    sends: Rc<RefCell<Vec<(usize, String, String)>>>,
    fail: bool,
}

impl FormulaBackend for RecordingBackend {
    fn send_set_column_formula_edit(
        &mut self,
        sheet_index: usize,
        column_header: &str,
        new_formula: &str,
    ) -> Result<(), SendError> {
        self.sends.borrow_mut().push((
            sheet_index,
            column_header.to_string(),
            new_formula.to_string(),
        ));
        if self.fail {
            Err(SendError::Disconnected("kernel went away".to_string()))
        } else {
            Ok(())
        }
    }
}

type Sends = Rc<RefCell<Vec<(usize, String, String)>>>;
type Calls = Rc<RefCell<Vec<GridCall>>>;

fn editor_with(headers: &[&str]) -> (CellEditor, Calls, Sends) {
    let grid = RecordingGrid::default();
    let backend = RecordingBackend::default();
    let calls = grid.calls.clone();
    let sends = backend.sends.clone();
    let editor = CellEditor::new(
        0,
        headers.iter().map(|s| s.to_string()).collect(),
        Box::new(grid),
        Box::new(backend),
    );
    (editor, calls, sends)
}

fn type_str(editor: &mut CellEditor, text: &str) {
    for c in text.chars() {
        editor.key_down(Key::Char(c));
    }
}

// =========================================================================
// Reference insertion protocol
// =========================================================================

#[test]
fn click_splices_reference_at_cursor() {
    let (mut editor, _, _) = editor_with(&["A", "B"]);
    editor.select_cell("A", 0);
    editor.start_edit(EditTrigger::DoubleClick, "=A+");
    assert_eq!(editor.cursor_index(), 3);

    editor.on_cell_focused(GridColumn::Header("B".to_string()), 5);

    assert_eq!(editor.editing_state().last_formula, "=A+B");
    assert_eq!(editor.cursor_index(), 4);
    assert!(editor.is_editing(), "insertion must keep the editor open");
}

#[test]
fn click_splices_at_tracked_offset_not_end() {
    let (mut editor, _, _) = editor_with(&["A", "B"]);
    editor.select_cell("A", 0);
    editor.start_edit(EditTrigger::DoubleClick, "=+A");
    editor.caret_moved(1, 0); // caret right after '='

    editor.on_cell_focused(GridColumn::Header("B".to_string()), 2);

    assert_eq!(editor.editing_state().last_formula, "=B+A");
    assert_eq!(editor.cursor_index(), 2);
}

#[test]
fn clicking_editing_column_is_a_noop() {
    let (mut editor, calls, _) = editor_with(&["A", "B"]);
    editor.select_cell("A", 0);
    editor.start_edit(EditTrigger::DoubleClick, "=A+");

    editor.on_cell_focused(GridColumn::Header("A".to_string()), 7);

    assert_eq!(editor.editing_state().last_formula, "=A+");
    assert_eq!(editor.cursor_index(), 3);
    assert!(editor.is_editing());
    // The default blur-close is overridden by re-opening the same editor
    assert_eq!(
        calls.borrow().last(),
        Some(&GridCall::StartEditing(0, "A".to_string()))
    );
}

#[test]
fn clicking_index_column_is_a_noop() {
    let (mut editor, _, _) = editor_with(&["A", "B"]);
    editor.select_cell("A", 0);
    editor.start_edit(EditTrigger::DoubleClick, "=A+");

    editor.on_cell_focused(GridColumn::Index, 3);

    assert_eq!(editor.editing_state().last_formula, "=A+");
    assert_eq!(editor.cursor_index(), 3);
    assert!(editor.is_editing());
}

#[test]
fn focus_while_not_editing_only_moves_selection() {
    let (mut editor, _, sends) = editor_with(&["A", "B"]);
    editor.on_cell_focused(GridColumn::Header("B".to_string()), 4);
    assert_eq!(editor.selected_cell(), Some(("B", 4)));
    assert!(sends.borrow().is_empty());
}

#[test]
fn backend_called_once_per_commit_never_during_clicks() {
    let (mut editor, _, sends) = editor_with(&["A", "B", "C"]);
    editor.select_cell("A", 0);
    editor.start_edit(EditTrigger::DoubleClick, "=");
    editor.on_cell_focused(GridColumn::Header("B".to_string()), 1);
    editor.key_down(Key::Char('+'));
    editor.on_cell_focused(GridColumn::Header("C".to_string()), 2);
    assert!(
        sends.borrow().is_empty(),
        "no commit while mid-reference-click"
    );

    editor.key_down(Key::Enter);
    assert_eq!(
        sends.borrow().as_slice(),
        &[(0, "A".to_string(), "=B+C".to_string())]
    );
}

// =========================================================================
// Session lifecycle
// =========================================================================

#[test]
fn char_trigger_replaces_prior_formula() {
    let (mut editor, _, _) = editor_with(&["A"]);
    editor.select_cell("A", 0);
    editor.start_edit(EditTrigger::Char('5'), "=A+B");
    assert_eq!(editor.editing_state().last_formula, "5");
    assert_eq!(editor.cursor_index(), 1);
}

#[test]
fn double_click_seeds_existing_formula() {
    let (mut editor, _, _) = editor_with(&["A"]);
    editor.select_cell("A", 2);
    editor.start_edit(EditTrigger::DoubleClick, "=LEN(A)");
    assert_eq!(editor.editing_state().last_formula, "=LEN(A)");
    assert_eq!(editor.cursor_index(), 7);
}

#[test]
fn single_editor_invariant_forces_previous_close() {
    let (mut editor, _, sends) = editor_with(&["A", "B"]);
    editor.select_cell("A", 0);
    editor.start_edit(EditTrigger::DoubleClick, "=1");

    editor.select_cell("B", 3);
    editor.start_edit(EditTrigger::DoubleClick, "=2");

    // The first session was committed before the second opened
    assert_eq!(sends.borrow().as_slice(), &[(0, "A".to_string(), "=1".to_string())]);
    let state = editor.editing_state();
    assert!(state.editing_mode_on);
    assert!(state.is_editing_cell(0, "B", 3));
}

#[test]
fn resume_after_click_away_restores_formula_and_cursor() {
    let (mut editor, _, _) = editor_with(&["Revenue"]);
    editor.select_cell("Revenue", 1);
    editor.start_edit(EditTrigger::Char('='), "");
    type_str(&mut editor, "SUM(");
    assert_eq!(editor.editing_state().last_formula, "=SUM(");

    editor.commit_pending_edit(); // click-away, not ESCAPE
    assert!(!editor.is_editing());

    editor.start_edit(EditTrigger::DoubleClick, "=SUM(");
    assert_eq!(editor.editing_state().last_formula, "=SUM(");
    assert_eq!(editor.cursor_index(), 5, "cursor offset survives close/reopen");
}

#[test]
fn escape_discards_uncommitted_text() {
    let (mut editor, _, sends) = editor_with(&["A"]);
    editor.select_cell("A", 0);
    editor.start_edit(EditTrigger::DoubleClick, "=old");
    type_str(&mut editor, "junk");

    editor.key_down(Key::Escape);

    assert!(!editor.is_editing());
    assert!(sends.borrow().is_empty(), "cancel never commits");
    assert_eq!(editor.editing_state().last_formula, "=old");
}

#[test]
fn editor_closes_even_when_backend_send_fails() {
    let grid = RecordingGrid::default();
    let backend = RecordingBackend {
        sends: Rc::new(RefCell::new(Vec::new())),
        fail: true,
    };
    let sends = backend.sends.clone();
    let mut editor = CellEditor::new(0, vec!["A".to_string()], Box::new(grid), Box::new(backend));

    editor.select_cell("A", 0);
    editor.start_edit(EditTrigger::DoubleClick, "=1");
    editor.key_down(Key::Enter);

    assert!(!editor.is_editing(), "fire-and-forget: close regardless");
    assert_eq!(sends.borrow().len(), 1, "at-most-once delivery");
}

// =========================================================================
// Suggestions through the key handler
// =========================================================================

#[test]
fn typing_su_suggests_functions_and_tab_accepts() {
    let (mut editor, _, _) = editor_with(&["Revenue", "Cost"]);
    editor.select_cell("Revenue", 0);
    editor.start_edit(EditTrigger::Char('='), "");
    type_str(&mut editor, "SU");

    let items = editor.suggestions();
    let names: Vec<&str> = items.iter().map(|i| i.completion.as_str()).collect();
    assert!(names.contains(&"SUM"));
    assert!(!names.contains(&"Revenue"), "headers not starting SU excluded");

    editor.key_down(Key::Tab);
    assert_eq!(editor.editing_state().last_formula, "=SUM(");
    assert_eq!(editor.cursor_index(), 5, "caret lands right after the paren");
    assert!(editor.is_editing(), "acceptance does not close the editor");
}

#[test]
fn suggestion_highlight_clamps_without_wraparound() {
    let (mut editor, _, _) = editor_with(&["Revenue", "Cost"]);
    editor.select_cell("Revenue", 0);
    editor.start_edit(EditTrigger::Char('='), "");
    editor.key_down(Key::Char('S'));

    let len = editor.suggestions().len();
    assert!(len > 1);
    for _ in 0..(len + 5) {
        editor.key_down(Key::ArrowDown);
    }
    assert_eq!(editor.suggestion_selected(), len - 1, "no wraparound at bottom");

    for _ in 0..(len + 5) {
        editor.key_down(Key::ArrowUp);
    }
    assert_eq!(editor.suggestion_selected(), 0, "no wraparound at top");
}

#[test]
fn exact_header_lets_enter_commit() {
    let (mut editor, _, sends) = editor_with(&["Tot", "Total"]);
    editor.select_cell("Total", 0);
    editor.start_edit(EditTrigger::Char('='), "");
    type_str(&mut editor, "Tot");

    // "Tot" is an exact header, so the box must not block ENTER
    assert!(!editor.suggestions_active());
    editor.key_down(Key::Enter);
    assert_eq!(
        sends.borrow().as_slice(),
        &[(0, "Total".to_string(), "=Tot".to_string())]
    );
}

#[test]
fn header_suggestion_accepted_verbatim() {
    let (mut editor, _, _) = editor_with(&["Net Profit (USD)"]);
    editor.select_cell("Net Profit (USD)", 0);
    editor.start_edit(EditTrigger::Char('='), "");
    type_str(&mut editor, "Net");

    editor.key_down(Key::Enter);
    assert_eq!(editor.editing_state().last_formula, "=Net Profit (USD)");
    assert!(editor.is_editing());
}

#[test]
fn horizontal_arrows_reach_cursor_even_with_box_open() {
    let (mut editor, _, _) = editor_with(&["Revenue"]);
    editor.select_cell("Revenue", 0);
    editor.start_edit(EditTrigger::Char('='), "");
    editor.key_down(Key::Char('S'));
    assert!(editor.suggestions_active());

    editor.key_down(Key::ArrowLeft);
    assert_eq!(editor.cursor_index(), 1, "suggestion box must not capture ArrowLeft");
    editor.key_down(Key::ArrowRight);
    assert_eq!(editor.cursor_index(), 2);
}

// =========================================================================
// Formula bar mirror
// =========================================================================

#[test]
fn formula_bar_mirrors_every_write() {
    let (mut editor, _, _) = editor_with(&["A", "B"]);
    editor.select_cell("A", 0);
    editor.start_edit(EditTrigger::Char('='), "");
    assert_eq!(editor.formula_bar().display(), "=");

    editor.key_down(Key::Char('1'));
    assert_eq!(editor.formula_bar().display(), "=1");

    editor.key_down(Key::Char('+'));
    editor.on_cell_focused(GridColumn::Header("B".to_string()), 2);
    assert_eq!(editor.formula_bar().display(), "=1+B");
}

#[test]
fn formula_bar_double_click_reopens_editor() {
    let (mut editor, _, _) = editor_with(&["A"]);
    editor.select_cell("A", 0);
    editor.seed_formula_bar("=LEN(A)");
    assert_eq!(editor.formula_bar().display(), "=LEN(A)");

    editor.formula_bar_double_click("=LEN(A)");
    assert!(editor.is_editing());
    assert_eq!(editor.editing_state().last_formula, "=LEN(A)");
}
