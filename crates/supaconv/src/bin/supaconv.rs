//! supaconv - convert bank CSV exports to SUPA tab-separated output.

fn main() -> std::process::ExitCode {
    supaconv::cmd::convert_cmd::main()
}
