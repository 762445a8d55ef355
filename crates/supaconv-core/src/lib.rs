//! Core types for supaconv
//!
//! This crate provides the field-mapping engine used to convert bank
//! transaction exports into SUPA-style tabular output:
//!
//! - [`Record`] - One row of tabular data, as ordered named string values
//! - [`Converter`] - A pure string-to-string value transformation
//! - [`MappingRule`] / [`MappingTable`] - Declarative source-to-target
//!   column mappings carrying a converter each
//! - [`map_row`] - Applies a mapping table to one input record
//!
//! The engine is deliberately I/O-free: reading CSV and writing TSV live in
//! the `supaconv` crate. Everything here is referentially transparent given
//! the record and the table.
//!
//! # Example
//!
//! ```
//! use supaconv_core::{map_row, MappingTable, Record};
//!
//! let table = MappingTable::settlement();
//! let mut row = Record::new();
//! row.insert("Buch.Datum", "15-03-2024");
//! row.insert("Leistungserbringer", "Hotel X");
//! row.insert("Abgerechnet", "41,04");
//!
//! let mapped = map_row(&row, &table, 1).unwrap();
//! assert_eq!(mapped.get("BookgDt"), Some("15-03-2024"));
//! assert_eq!(mapped.get("RmtdNm"), Some("Hotel X"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod converter;
pub mod error;
pub mod mapper;
pub mod record;
pub mod table;

pub use converter::{Converter, CREDIT_INDICATOR, DEBIT_INDICATOR};
pub use error::{ConvertError, MapError};
pub use mapper::map_row;
pub use record::Record;
pub use table::{MappingRule, MappingTable};
