use par_case::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = match cli::process_cli() {
        cli::CliResult::Exit(code) => return exit_code(code),
        cli::CliResult::Continue(options) => options,
    };
    // CLI --log-level flag takes precedence over RUST_LOG; default is off.
    par_case::debug::init_log_bridge(options.log_level);

    log::info!("Starting par-case {}", par_case::VERSION);

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    let code = cli::run(&options, stdin, &mut stdout, &mut stderr);

    log::debug!("exiting with code {code}");
    exit_code(code)
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
