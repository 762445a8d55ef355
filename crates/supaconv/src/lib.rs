//! supaconv CLI.
//!
//! This crate wires the mapping engine from `supaconv-core` to the outside
//! world: a streaming CSV-to-TSV [`pipeline`] and the `supaconv` command
//! around it.
//!
//! # Example Usage
//!
//! ```bash
//! supaconv export.csv > export.supa.tsv
//! supaconv --format settlement abrechnung.csv
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod pipeline;

pub use pipeline::Pipeline;
