//! Error types for the mapping engine.

use thiserror::Error;

/// Error returned when a converter cannot interpret a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The value is not a valid localized decimal numeral.
    #[error("not a valid amount: '{value}'")]
    InvalidAmount {
        /// The raw value as it appeared in the input.
        value: String,
    },
}

/// Error returned when mapping one input row fails.
///
/// Row numbers are 1-based and count data rows only (the header row is not
/// counted). Every variant is fatal to the run: the engine fails closed and
/// leaves presentation to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The input row lacks a column required by the mapping table.
    #[error("row {row}: missing required column '{column}'")]
    MissingField {
        /// 1-based data row number.
        row: usize,
        /// The source column name the table expected.
        column: String,
    },
    /// A converter rejected the value found in the input row.
    #[error("row {row}: column '{column}': cannot convert '{value}'")]
    Conversion {
        /// 1-based data row number.
        row: usize,
        /// The source column the value came from.
        column: String,
        /// The raw value that failed to convert.
        value: String,
        /// The underlying converter error.
        #[source]
        source: ConvertError,
    },
}
