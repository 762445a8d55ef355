//! Value conversion functions.
//!
//! Each converter is a pure string-to-string transformation attached to a
//! mapping rule. Converters are total on valid input and fail closed with a
//! [`ConvertError`] otherwise; they never substitute defaults.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// SUPA debit/credit indicator for negative amounts.
pub const DEBIT_INDICATOR: &str = "DBIT";
/// SUPA debit/credit indicator for non-negative amounts.
pub const CREDIT_INDICATOR: &str = "CRDT";

/// A value transformation applied by a mapping rule.
///
/// # Example
///
/// ```
/// use supaconv_core::Converter;
///
/// assert_eq!(
///     Converter::RemoveWhitespace
///         .apply("DE12 5001 0517 0648 4898 90")
///         .unwrap(),
///     "DE12500105170648489890"
/// );
/// assert_eq!(Converter::ToAmount.apply("-123.456,78").unwrap(), "123456.78");
/// assert_eq!(Converter::DebitCreditIndicator.apply("-154.032,11").unwrap(), "DBIT");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Converter {
    /// Pass the value through unchanged.
    #[default]
    Identity,
    /// Remove all space characters, keeping everything else in order.
    /// Used for IBANs exported with grouping spaces.
    RemoveWhitespace,
    /// Re-format a localized decimal (`.` thousands separator, `,` decimal
    /// separator) as its absolute value with `.` as decimal separator and
    /// exactly two fraction digits.
    ToAmount,
    /// Classify the sign of an amount as `"DBIT"` (leading minus) or
    /// `"CRDT"` (anything else, including empty). Only the first character
    /// is inspected; the numeral itself is not parsed.
    DebitCreditIndicator,
}

impl Converter {
    /// Apply this conversion to one raw field value.
    pub fn apply(self, raw: &str) -> Result<String, ConvertError> {
        match self {
            Self::Identity => Ok(raw.to_string()),
            Self::RemoveWhitespace => Ok(raw.replace(' ', "")),
            Self::ToAmount => supa_amount(raw),
            Self::DebitCreditIndicator => Ok(debit_credit_indicator(raw).to_string()),
        }
    }
}

/// Parse a localized decimal and format its absolute value with two
/// fraction digits, e.g. `"-123.456,78"` becomes `"123456.78"`.
fn supa_amount(raw: &str) -> Result<String, ConvertError> {
    let cleaned = raw.replace('.', "").replace(',', ".");
    let number = Decimal::from_str(&cleaned).map_err(|_| ConvertError::InvalidAmount {
        value: raw.to_string(),
    })?;
    Ok(format!("{:.2}", number.abs()))
}

fn debit_credit_indicator(raw: &str) -> &'static str {
    if raw.starts_with('-') {
        DEBIT_INDICATOR
    } else {
        CREDIT_INDICATOR
    }
}
