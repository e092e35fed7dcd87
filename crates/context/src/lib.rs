//! Formula editing context
//!
//! Pure, stateless analysis used by the cell editor: the built-in function
//! registry and the autocomplete suggestion engine. Everything here is a
//! function of (formula text, known column headers) — no session state.

pub mod functions;
pub mod suggest;

pub use functions::{
    byte_to_char, char_to_byte, get_function, get_functions_by_prefix, FunctionCategory,
    FunctionInfo, FUNCTIONS,
};
pub use suggest::{get_suggestions, SuggestionItem, SuggestionKind};
