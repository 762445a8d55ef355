//! Declarative source-to-target column mappings.

use serde::{Deserialize, Serialize};

use crate::converter::Converter;

/// One field translation: a source column, a target column, and the
/// converter applied to the value on the way through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    source: String,
    target: String,
    converter: Converter,
}

impl MappingRule {
    /// Create a rule with an explicit converter.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        converter: Converter,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            converter,
        }
    }

    /// Create a rule that passes the value through unchanged.
    pub fn identity(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(source, target, Converter::Identity)
    }

    /// The column name expected in every input record.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The column name emitted in every output record.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The converter applied to the value.
    #[must_use]
    pub const fn converter(&self) -> Converter {
        self.converter
    }
}

/// An ordered sequence of [`MappingRule`]s defining one complete
/// source-to-target conversion.
///
/// Rule order is normative: it fixes the output column order, and with it
/// the output header. Two rules may share a source column (one field
/// feeding both an amount and its sign indicator); targets are expected to
/// be distinct within one table. Tables are built once at startup and never
/// mutated - which table applies is an explicit argument to
/// [`map_row`](crate::map_row), not ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingTable {
    rules: Vec<MappingRule>,
}

impl MappingTable {
    /// Create a table from an ordered list of rules.
    #[must_use]
    pub const fn new(rules: Vec<MappingRule>) -> Self {
        Self { rules }
    }

    /// The primary mapping: a giro bank-statement CSV export (German
    /// column names) to SUPA columns. The `Betrag` amount feeds both the
    /// re-formatted `Amt` and the derived `CdtDbtInd`.
    #[must_use]
    pub fn bank_statement() -> Self {
        Self::new(vec![
            MappingRule::identity("Buchungsdatum", "BookgDt"),
            MappingRule::identity("Wertstellungsdatum", "ValDt"),
            MappingRule::identity("Auftraggeber/Empfänger", "RmtdNm"),
            MappingRule::new(
                "IBAN (Auftraggeber/Empfänger)",
                "RmtdAcctIBAN",
                Converter::RemoveWhitespace,
            ),
            MappingRule::new("Betrag", "Amt", Converter::ToAmount),
            MappingRule::new("Betrag", "CdtDbtInd", Converter::DebitCreditIndicator),
            MappingRule::identity("Währung", "AmtCcy"),
            MappingRule::identity("Buchungstyp", "RmtInf"),
            MappingRule::identity("Transaktionsreferenz", "Id"),
        ])
    }

    /// The secondary mapping: a settlement export with service-provider
    /// rows. All three fields pass through unchanged - the amount keeps its
    /// source formatting here, unlike [`bank_statement`](Self::bank_statement).
    #[must_use]
    pub fn settlement() -> Self {
        Self::new(vec![
            MappingRule::identity("Buch.Datum", "BookgDt"),
            MappingRule::identity("Leistungserbringer", "RmtdNm"),
            MappingRule::identity("Abgerechnet", "Amt"),
        ])
    }

    /// The rules, in application (and output column) order.
    #[must_use]
    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    /// Target column names in table order - the output header.
    pub fn target_columns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(MappingRule::target)
    }

    /// Number of rules in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
