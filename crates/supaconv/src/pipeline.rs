//! The reader → mapper → writer pipeline.
//!
//! Input is comma-separated UTF-8 with a required header row; a leading
//! byte-order mark is stripped by the CSV reader. Output is tab-separated:
//! the mapping table's target columns as the header line, then one line per
//! input row. Output values are written as-is, never quote-escaped.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use supaconv_core::{map_row, MappingTable, Record};

/// A single-table conversion run.
///
/// Rows are processed strictly in sequence: read one, map it, write it.
/// The first failing row aborts the run; nothing of that row is written.
pub struct Pipeline {
    table: MappingTable,
}

impl Pipeline {
    /// Create a pipeline for the given mapping table.
    #[must_use]
    pub const fn new(table: MappingTable) -> Self {
        Self { table }
    }

    /// The mapping table this pipeline applies.
    #[must_use]
    pub const fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Convert a CSV file, writing TSV to `out`. Returns the number of
    /// data rows converted.
    ///
    /// The file handle is scoped to this call and closed on every exit
    /// path, including mid-file failures.
    pub fn run_file(&self, path: &Path, out: impl Write) -> Result<usize> {
        let file = File::open(path)
            .with_context(|| format!("failed to open file: {}", path.display()))?;
        self.run(BufReader::new(file), out)
    }

    /// Convert CSV read from `input`, writing TSV to `out`. Returns the
    /// number of data rows converted.
    pub fn run(&self, input: impl Read, mut out: impl Write) -> Result<usize> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input);

        // The csv reader strips a UTF-8 BOM before the first header name.
        let headers: Vec<String> = reader
            .headers()
            .context("failed to read CSV header row")?
            .iter()
            .map(ToString::to_string)
            .collect();

        let header_line = self.table.target_columns().collect::<Vec<_>>().join("\t");
        writeln!(out, "{header_line}")?;

        let mut rows = 0usize;
        for (index, result) in reader.records().enumerate() {
            // 1-based, header row not counted
            let row = index + 1;
            let fields = result.with_context(|| format!("row {row}: malformed CSV"))?;
            let record: Record = headers
                .iter()
                .map(String::as_str)
                .zip(fields.iter())
                .collect();

            let mapped = map_row(&record, &self.table, row)?;
            let line = mapped.values().collect::<Vec<_>>().join("\t");
            writeln!(out, "{line}")?;
            rows += 1;
        }

        tracing::debug!(rows, "conversion finished");
        Ok(rows)
    }

    /// Convert CSV content held in a string, returning the TSV output
    /// (useful for testing and embedding).
    pub fn run_string(&self, content: &str) -> Result<String> {
        let mut out = Vec::new();
        self.run(content.as_bytes(), &mut out)?;
        String::from_utf8(out).context("converted output was not UTF-8")
    }
}
