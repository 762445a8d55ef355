//! The row mapper.

use crate::error::MapError;
use crate::record::Record;
use crate::table::MappingTable;

/// Map one input record through a mapping table.
///
/// For each rule in table order, the rule's source column is looked up in
/// `record`, its converter applied, and the result inserted under the
/// rule's target column. The output record therefore contains exactly the
/// table's target columns, in table order; extra columns in the input are
/// ignored. `row` is the 1-based data row number (header excluded), used
/// only for diagnostics.
///
/// Fails fast: a missing source column or a converter failure aborts the
/// row with no partial output record.
pub fn map_row(record: &Record, table: &MappingTable, row: usize) -> Result<Record, MapError> {
    let mut mapped = Record::new();
    for rule in table.rules() {
        let raw = record.get(rule.source()).ok_or_else(|| MapError::MissingField {
            row,
            column: rule.source().to_string(),
        })?;
        let converted = rule.converter().apply(raw).map_err(|source| MapError::Conversion {
            row,
            column: rule.source().to_string(),
            value: raw.to_string(),
            source,
        })?;
        mapped.insert(rule.target(), converted);
    }
    Ok(mapped)
}
