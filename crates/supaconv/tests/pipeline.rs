//! End-to-end tests for the conversion pipeline and the supaconv binary.

use std::io::Write as _;
use std::process::Command;

use supaconv::Pipeline;
use supaconv_core::MappingTable;

const STATEMENT_CSV: &str = "\
Buchungsdatum,Wertstellungsdatum,Auftraggeber/Empfänger,IBAN (Auftraggeber/Empfänger),Betrag,Währung,Buchungstyp,Transaktionsreferenz
01-01-2024,02-01-2024,Acme BV,DE12 5001 0517 0648 4898 90,\"-123.456,78\",EUR,Overboeking,TX1
";

const STATEMENT_TSV: &str = "\
BookgDt\tValDt\tRmtdNm\tRmtdAcctIBAN\tAmt\tCdtDbtInd\tAmtCcy\tRmtInf\tId
01-01-2024\t02-01-2024\tAcme BV\tDE12500105170648489890\t123456.78\tDBIT\tEUR\tOverboeking\tTX1
";

const SETTLEMENT_CSV: &str = "\
Buch.Datum,Leistungserbringer,Abgerechnet
15-03-2024,Hotel X,\"41,04\"
";

const SETTLEMENT_TSV: &str = "\
BookgDt\tRmtdNm\tAmt
15-03-2024\tHotel X\t41,04
";

// ========== Pipeline tests ==========

#[test]
fn test_bank_statement_end_to_end() {
    let pipeline = Pipeline::new(MappingTable::bank_statement());
    let output = pipeline.run_string(STATEMENT_CSV).unwrap();
    assert_eq!(output, STATEMENT_TSV);
}

#[test]
fn test_settlement_end_to_end() {
    let pipeline = Pipeline::new(MappingTable::settlement());
    let output = pipeline.run_string(SETTLEMENT_CSV).unwrap();
    assert_eq!(output, SETTLEMENT_TSV);
}

#[test]
fn test_byte_order_mark_is_stripped() {
    let pipeline = Pipeline::new(MappingTable::settlement());
    let bom_input = format!("\u{feff}{SETTLEMENT_CSV}");
    let output = pipeline.run_string(&bom_input).unwrap();
    assert_eq!(output, SETTLEMENT_TSV);
}

#[test]
fn test_extra_input_columns_are_ignored() {
    let pipeline = Pipeline::new(MappingTable::settlement());
    let input = "\
Saldo,Buch.Datum,Leistungserbringer,Abgerechnet,Notiz
0,15-03-2024,Hotel X,\"41,04\",x
";
    let output = pipeline.run_string(input).unwrap();
    assert_eq!(output, SETTLEMENT_TSV);
}

#[test]
fn test_rows_stay_in_input_order() {
    let pipeline = Pipeline::new(MappingTable::settlement());
    let input = "\
Buch.Datum,Leistungserbringer,Abgerechnet
01-01-2024,B,1
02-01-2024,A,2
03-01-2024,C,3
";
    let output = pipeline.run_string(input).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("01-01-2024\tB"));
    assert!(lines[2].starts_with("02-01-2024\tA"));
    assert!(lines[3].starts_with("03-01-2024\tC"));
}

#[test]
fn test_unparsable_amount_stops_the_run() {
    let pipeline = Pipeline::new(MappingTable::bank_statement());
    let input = STATEMENT_CSV.replace("\"-123.456,78\"", "boom");
    let err = pipeline.run_string(&input).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("row 1"), "unexpected error: {message}");
    assert!(message.contains("Betrag"), "unexpected error: {message}");
    assert!(message.contains("boom"), "unexpected error: {message}");
}

#[test]
fn test_failure_after_good_rows_reports_failing_row() {
    let pipeline = Pipeline::new(MappingTable::bank_statement());
    let bad_row = "01-01-2024,02-01-2024,Acme BV,DE12 5001 0517 0648 4898 90,bad,EUR,Overboeking,TX2\n";
    let input = format!("{STATEMENT_CSV}{bad_row}");

    let err = pipeline.run_string(&input).unwrap_err();
    assert!(format!("{err}").contains("row 2"), "unexpected error: {err}");
}

// ========== Binary tests ==========

fn supaconv_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_supaconv"))
}

#[test]
fn test_binary_converts_statement_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(STATEMENT_CSV.as_bytes()).unwrap();

    let output = supaconv_command().arg(file.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), STATEMENT_TSV);
}

#[test]
fn test_binary_settlement_format_flag() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SETTLEMENT_CSV.as_bytes()).unwrap();

    let output = supaconv_command()
        .arg("--format")
        .arg("settlement")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), SETTLEMENT_TSV);
}

#[test]
fn test_binary_missing_argument_is_usage_error() {
    let output = supaconv_command().output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FILE"), "stderr should name the missing path: {stderr}");
}

#[test]
fn test_binary_nonexistent_file_fails() {
    let output = supaconv_command().arg("no-such-export.csv").output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "unexpected stderr: {stderr}");
    assert!(stderr.contains("no-such-export.csv"), "unexpected stderr: {stderr}");
}

#[test]
fn test_binary_mapping_error_exits_nonzero_with_diagnostics() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        STATEMENT_CSV
            .replace("\"-123.456,78\"", "boom")
            .as_bytes(),
    )
    .unwrap();

    let output = supaconv_command().arg(file.path()).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("row 1"), "unexpected stderr: {stderr}");
    assert!(stderr.contains("boom"), "unexpected stderr: {stderr}");
}
