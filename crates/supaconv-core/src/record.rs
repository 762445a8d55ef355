//! Ordered row representation.

use serde::{Deserialize, Serialize};

/// One row of tabular data: an ordered set of named string values.
///
/// Column order is significant - it is the order values are written out in.
/// Inserting under an existing column replaces the value but keeps the
/// column at its original position, like a dictionary keyed by column name.
/// Records are cheap, transient values: one is built per input row and
/// discarded as soon as it has been mapped and written.
///
/// # Example
///
/// ```
/// use supaconv_core::Record;
///
/// let mut row = Record::new();
/// row.insert("Amt", "41.04");
/// row.insert("AmtCcy", "EUR");
/// assert_eq!(row.get("Amt"), Some("41.04"));
/// assert_eq!(row.columns().collect::<Vec<_>>(), ["Amt", "AmtCcy"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Set `column` to `value`.
    ///
    /// A column seen before keeps its position and gets the new value; a
    /// new column is appended.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(c, _)| *c == column) {
            Some((_, v)) => *v = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Look up the value of `column`, if present.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(c, _)| c.as_str())
    }

    /// Values in column order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    /// Iterate over (column, value) pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    /// Number of columns in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<C: Into<String>, V: Into<String>> FromIterator<(C, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}
