//! Autocomplete suggestion engine
//!
//! Given the in-progress formula text and the set of known column headers,
//! produces the ranked candidate list for the suggestion box: column-header
//! matches first, then function-name matches. Recomputed from scratch on
//! every keystroke — the header and function lists are small.

use serde::{Deserialize, Serialize};

use crate::functions::get_functions_by_prefix;

/// Characters that end a token in a formula. A trailing header token starts
/// after the last of these; column headers themselves may contain spaces and
/// punctuation, so the token is not narrowed any further.
pub const FORMULA_DELIMITERS: &[char] = &[
    '=', '+', '-', '*', '/', '^', '&', '<', '>', ',', '(', ')', ':', ';',
];

/// What kind of candidate a suggestion is. Decides the acceptance rules:
/// functions are upper-cased and auto-parenthesized, headers are inserted
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionKind {
    Function,
    ColumnHeader,
}

/// A single autocomplete candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionItem {
    /// The already-typed prefix this candidate matched against.
    pub matched: String,
    /// The full candidate text.
    pub completion: String,
    /// One-line detail shown next to the candidate.
    pub subtitle: String,
    pub kind: SuggestionKind,
}

impl SuggestionItem {
    /// The text spliced into the formula when this suggestion is accepted.
    pub fn acceptance_text(&self) -> String {
        match self.kind {
            SuggestionKind::Function => format!("{}(", self.completion.to_ascii_uppercase()),
            SuggestionKind::ColumnHeader => self.completion.clone(),
        }
    }
}

/// The trailing token matched against column headers: everything after the
/// last formula delimiter, with leading whitespace trimmed.
pub fn trailing_header_token(formula: &str) -> &str {
    let start = formula
        .char_indices()
        .rev()
        .find(|(_, c)| FORMULA_DELIMITERS.contains(c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    formula[start..].trim_start()
}

/// The trailing token matched against function names: the trailing
/// ASCII-alphabetic run.
pub fn trailing_function_token(formula: &str) -> &str {
    let start = formula
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_ascii_alphabetic())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    &formula[start..]
}

/// Compute the suggestion list for the current formula text.
///
/// Returns `None` when the box should stay closed:
/// - the trailing token already equals a column header exactly
///   (case-sensitive), so ENTER must commit instead of selecting;
/// - the trailing token is empty (right after an operator or delimiter);
/// - nothing matches.
///
/// Header matching is case-sensitive against the full header string; function
/// matching is case-insensitive against the trailing alphabetic run.
pub fn get_suggestions(formula: &str, column_headers: &[String]) -> Option<Vec<SuggestionItem>> {
    let header_token = trailing_header_token(formula);
    if !header_token.is_empty() && column_headers.iter().any(|h| h == header_token) {
        return None;
    }

    let mut items = Vec::new();

    if !header_token.is_empty() {
        for header in column_headers {
            if header.starts_with(header_token) {
                items.push(SuggestionItem {
                    matched: header_token.to_string(),
                    completion: header.clone(),
                    subtitle: "A column in this sheet".to_string(),
                    kind: SuggestionKind::ColumnHeader,
                });
            }
        }
    }

    let function_token = trailing_function_token(formula);
    if !function_token.is_empty() {
        for func in get_functions_by_prefix(function_token) {
            items.push(SuggestionItem {
                matched: function_token.to_string(),
                completion: func.name.to_string(),
                subtitle: func.description.to_string(),
                kind: SuggestionKind::Function,
            });
        }
    }

    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
