//! Cursor offset tracking
//!
//! The tracked offset — not the host widget's caret — is the authoritative
//! insertion point for reference splices. Offsets are char indices into the
//! formula text; splice sites convert to byte offsets at the last moment.

use serde::{Deserialize, Serialize};

/// Tracks the insertion point within the formula text.
///
/// The offset survives editor close/reopen on the same cell: restore it as
/// the initial caret position so the user resumes typing where they left off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorTracker {
    index: usize,
}

impl CursorTracker {
    /// Current insertion offset (char index, 0..=formula length)
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set(&mut self, index: usize) {
        self.index = index;
    }

    /// Set from the host widget's caret report (`selection_end`) plus a
    /// caller-supplied adjustment, as on every text-change or click event.
    pub fn set_from_caret(&mut self, selection_end: usize, adjust: isize) {
        self.index = if adjust.is_negative() {
            selection_end.saturating_sub(adjust.unsigned_abs())
        } else {
            selection_end.saturating_add(adjust.unsigned_abs())
        };
    }

    /// Optimistic keydown compensation for ArrowLeft: applied before the host
    /// widget's caret report catches up (the report lags one character behind
    /// the key event).
    pub fn arrow_left(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Optimistic keydown compensation for ArrowRight, clamped to the
    /// formula's char length.
    pub fn arrow_right(&mut self, formula_chars: usize) {
        self.index = (self.index + 1).min(formula_chars);
    }

    /// Advance past text just spliced in at the tracked offset, so the caret
    /// lands immediately after the insertion.
    pub fn advance(&mut self, inserted_chars: usize) {
        self.index += inserted_chars;
    }

    pub fn clamp(&mut self, formula_chars: usize) {
        self.index = self.index.min(formula_chars);
    }
}
