//! Built-in function registry
//!
//! Static metadata for every sheet function the editor can suggest.
//! Consumed read-only by the suggestion engine and the suggestion box UI.

/// Information about a sheet function
#[derive(Debug, Clone)]
pub struct FunctionInfo {
    pub name: &'static str,
    pub signature: &'static str,
    pub description: &'static str,
    pub category: FunctionCategory,
}

/// Function categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionCategory {
    Math,
    Logical,
    Text,
    DateTime,
    TypeConversion,
}

/// All supported functions with their metadata
pub static FUNCTIONS: &[FunctionInfo] = &[
    // Math
    FunctionInfo {
        name: "ABS",
        signature: "ABS(value)",
        description: "Returns the absolute value of the passed number or series.",
        category: FunctionCategory::Math,
    },
    FunctionInfo {
        name: "AVG",
        signature: "AVG(value1, [value2], ...)",
        description: "Returns the numerical mean value of the passed numbers or series.",
        category: FunctionCategory::Math,
    },
    FunctionInfo {
        name: "CORR",
        signature: "CORR(series1, series2)",
        description: "Computes the correlation between two series.",
        category: FunctionCategory::Math,
    },
    FunctionInfo {
        name: "EXP",
        signature: "EXP(value)",
        description: "Returns e to the power of the passed number or series.",
        category: FunctionCategory::Math,
    },
    FunctionInfo {
        name: "KURT",
        signature: "KURT(series)",
        description: "Computes the kurtosis of a series.",
        category: FunctionCategory::Math,
    },
    FunctionInfo {
        name: "MAX",
        signature: "MAX(value1, [value2], ...)",
        description: "Returns the maximum of the passed numbers or series.",
        category: FunctionCategory::Math,
    },
    FunctionInfo {
        name: "MIN",
        signature: "MIN(value1, [value2], ...)",
        description: "Returns the minimum of the passed numbers or series.",
        category: FunctionCategory::Math,
    },
    FunctionInfo {
        name: "MULTIPLY",
        signature: "MULTIPLY(factor1, factor2, ...)",
        description: "Returns the product of the passed numbers or series.",
        category: FunctionCategory::Math,
    },
    FunctionInfo {
        name: "POWER",
        signature: "POWER(value, exponent)",
        description: "Raises a number or series to the given power.",
        category: FunctionCategory::Math,
    },
    FunctionInfo {
        name: "ROUND",
        signature: "ROUND(value, [decimals])",
        description: "Rounds a number or series to the given number of decimals.",
        category: FunctionCategory::Math,
    },
    FunctionInfo {
        name: "SKEW",
        signature: "SKEW(series)",
        description: "Computes the skew of a series.",
        category: FunctionCategory::Math,
    },
    FunctionInfo {
        name: "SUM",
        signature: "SUM(value1, [value2], ...)",
        description: "Adds together the passed numbers or series.",
        category: FunctionCategory::Math,
    },
    FunctionInfo {
        name: "VAR",
        signature: "VAR(series)",
        description: "Computes the variance of a series.",
        category: FunctionCategory::Math,
    },

    // Logical
    FunctionInfo {
        name: "AND",
        signature: "AND(condition1, [condition2], ...)",
        description: "Returns TRUE if all of the passed conditions are TRUE.",
        category: FunctionCategory::Logical,
    },
    FunctionInfo {
        name: "IF",
        signature: "IF(condition, value_if_true, value_if_false)",
        description: "Returns one value if the condition is TRUE and another if it is FALSE.",
        category: FunctionCategory::Logical,
    },
    FunctionInfo {
        name: "OR",
        signature: "OR(condition1, [condition2], ...)",
        description: "Returns TRUE if any of the passed conditions are TRUE.",
        category: FunctionCategory::Logical,
    },

    // Text
    FunctionInfo {
        name: "CLEAN",
        signature: "CLEAN(text)",
        description: "Removes non-printable characters from the passed text.",
        category: FunctionCategory::Text,
    },
    FunctionInfo {
        name: "CONCAT",
        signature: "CONCAT(text1, [text2], ...)",
        description: "Joins the passed strings and series together.",
        category: FunctionCategory::Text,
    },
    FunctionInfo {
        name: "FIND",
        signature: "FIND(text, search_for)",
        description: "Returns the position of a string within text, or 0 if not found.",
        category: FunctionCategory::Text,
    },
    FunctionInfo {
        name: "LEFT",
        signature: "LEFT(text, [number_of_characters])",
        description: "Returns a substring from the beginning of the passed text.",
        category: FunctionCategory::Text,
    },
    FunctionInfo {
        name: "LEN",
        signature: "LEN(text)",
        description: "Returns the length of the passed text.",
        category: FunctionCategory::Text,
    },
    FunctionInfo {
        name: "LOWER",
        signature: "LOWER(text)",
        description: "Converts the passed text to lowercase.",
        category: FunctionCategory::Text,
    },
    FunctionInfo {
        name: "MID",
        signature: "MID(text, start, number_of_characters)",
        description: "Returns a substring from the middle of the passed text.",
        category: FunctionCategory::Text,
    },
    FunctionInfo {
        name: "PROPER",
        signature: "PROPER(text)",
        description: "Capitalizes the first letter of each word in the passed text.",
        category: FunctionCategory::Text,
    },
    FunctionInfo {
        name: "RIGHT",
        signature: "RIGHT(text, [number_of_characters])",
        description: "Returns a substring from the end of the passed text.",
        category: FunctionCategory::Text,
    },
    FunctionInfo {
        name: "SUBSTITUTE",
        signature: "SUBSTITUTE(text, old_text, new_text)",
        description: "Replaces occurrences of a string within the passed text.",
        category: FunctionCategory::Text,
    },
    FunctionInfo {
        name: "TRIM",
        signature: "TRIM(text)",
        description: "Removes leading and trailing whitespace from the passed text.",
        category: FunctionCategory::Text,
    },
    FunctionInfo {
        name: "UPPER",
        signature: "UPPER(text)",
        description: "Converts the passed text to uppercase.",
        category: FunctionCategory::Text,
    },

    // Date/time
    FunctionInfo {
        name: "DATEVALUE",
        signature: "DATEVALUE(text)",
        description: "Converts the passed text to a datetime series.",
        category: FunctionCategory::DateTime,
    },
    FunctionInfo {
        name: "DAY",
        signature: "DAY(date)",
        description: "Returns the day of the month of the passed date.",
        category: FunctionCategory::DateTime,
    },
    FunctionInfo {
        name: "MONTH",
        signature: "MONTH(date)",
        description: "Returns the month of the passed date.",
        category: FunctionCategory::DateTime,
    },
    FunctionInfo {
        name: "WEEKDAY",
        signature: "WEEKDAY(date)",
        description: "Returns the day of the week of the passed date (1 = Monday).",
        category: FunctionCategory::DateTime,
    },
    FunctionInfo {
        name: "YEAR",
        signature: "YEAR(date)",
        description: "Returns the year of the passed date.",
        category: FunctionCategory::DateTime,
    },

    // Type conversion
    FunctionInfo {
        name: "BOOL",
        signature: "BOOL(value)",
        description: "Converts the passed value or series to boolean.",
        category: FunctionCategory::TypeConversion,
    },
    FunctionInfo {
        name: "TYPE",
        signature: "TYPE(value)",
        description: "Returns the type of the passed value as a string.",
        category: FunctionCategory::TypeConversion,
    },
    FunctionInfo {
        name: "VALUE",
        signature: "VALUE(text)",
        description: "Converts the passed text to a numeric series.",
        category: FunctionCategory::TypeConversion,
    },
];

/// Look up a function by name (case-insensitive)
pub fn get_function(name: &str) -> Option<&'static FunctionInfo> {
    let upper = name.to_ascii_uppercase();
    FUNCTIONS.iter().find(|f| f.name == upper)
}

/// Get all functions matching a prefix (for autocomplete)
pub fn get_functions_by_prefix(prefix: &str) -> Vec<&'static FunctionInfo> {
    let upper = prefix.to_ascii_uppercase();
    FUNCTIONS.iter().filter(|f| f.name.starts_with(&upper)).collect()
}

/// Convert char index to byte offset
pub fn char_to_byte(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(s.len())
}

/// Convert byte offset to char index
pub fn byte_to_char(s: &str, byte_idx: usize) -> usize {
    s[..byte_idx.min(s.len())].chars().count()
}
