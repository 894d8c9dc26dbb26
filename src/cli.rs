//! Command-line interface for par-case.
//!
//! This module handles CLI argument parsing, resolves the input word from the
//! positional argument or standard input, and maps outcomes to exit codes.

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io::{Read, Write};

use crate::convert::{Convention, convert, detect};
use crate::error::ConvertError;

/// par-case - Convert an identifier one hop: snake → kebab → Pascal → camel → snake
#[derive(Parser, Debug)]
#[command(name = "par-case")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Word to convert (read from standard input when omitted)
    #[arg(value_name = "WORD", allow_hyphen_values = true)]
    pub word: Option<String>,

    /// Print the detected convention instead of converting
    #[arg(long)]
    pub detect: bool,

    /// Set debug log level (overrides RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Runtime options passed from CLI parsing to [`run`]
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Word given on the command line; `None` means read standard input
    pub word: Option<String>,
    /// Report the detected convention instead of converting
    pub detect: bool,
    /// Log level override from `--log-level`
    pub log_level: Option<log::LevelFilter>,
}

/// Result of CLI processing
#[derive(Debug)]
pub enum CliResult {
    /// Continue with conversion using these options
    Continue(RuntimeOptions),
    /// Exit with the given code (help, version or usage error already printed)
    Exit(i32),
}

/// Process the process arguments, printing help/version/usage as needed
pub fn process_cli() -> CliResult {
    parse_args(
        std::env::args_os(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
}

/// Parse `args` (including the program name).
///
/// `--help` and `--version` print to `stdout` and exit 0. Any other parse
/// failure, including more than one positional word, prints the usage error to
/// `stderr` and exits 1.
pub fn parse_args<I, T, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> CliResult
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
    E: Write,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => CliResult::Continue(RuntimeOptions {
            word: cli.word,
            detect: cli.detect,
            log_level: cli.log_level.map(LogLevelArg::to_level_filter),
        }),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = write!(stdout, "{e}");
                CliResult::Exit(0)
            }
            _ => {
                let _ = write!(stderr, "{e}");
                CliResult::Exit(1)
            }
        },
    }
}

/// Resolve the word to convert.
///
/// The positional argument wins; otherwise all of `stdin` is read. Either
/// source is trimmed of surrounding whitespace.
pub fn resolve_word<R: Read>(arg: Option<&str>, mut stdin: R) -> anyhow::Result<String> {
    let raw = match arg {
        Some(word) => word.to_string(),
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            log::debug!("read {} byte(s) from standard input", buf.len());
            buf
        }
    };
    Ok(raw.trim().to_string())
}

/// Run one conversion and return the process exit code.
///
/// On success the result is written to `stdout` followed by a newline. Empty
/// input is a silent no-op with exit code 0. Every failure is reported on
/// `stderr` with exit code 1.
pub fn run<R, W, E>(options: &RuntimeOptions, stdin: R, stdout: &mut W, stderr: &mut E) -> i32
where
    R: Read,
    W: Write,
    E: Write,
{
    let word = match resolve_word(options.word.as_deref(), stdin) {
        Ok(word) => word,
        Err(e) => {
            log::error!("{e:#}");
            let _ = writeln!(stderr, "par-case: error: {e:#}");
            return 1;
        }
    };

    if word.is_empty() {
        log::debug!("empty input, nothing to do");
        return 0;
    }

    let result = if options.detect {
        detect_name(&word)
    } else {
        convert(&word)
    };

    match result {
        Ok(output) => match write_output(stdout, &output) {
            Ok(()) => 0,
            Err(e) => {
                let _ = writeln!(stderr, "par-case: error: {e:#}");
                1
            }
        },
        Err(e) => {
            let ConvertError::UnsupportedFormat { word } = &e;
            log::info!("rejected {word:?}: first character is not a cased letter");
            let _ = writeln!(stderr, "{e}");
            1
        }
    }
}

fn detect_name(word: &str) -> Result<String, ConvertError> {
    match detect(word) {
        Convention::Unrecognized => Err(ConvertError::UnsupportedFormat {
            word: word.to_string(),
        }),
        convention => Ok(convention.name().to_string()),
    }
}

fn write_output<W: Write>(stdout: &mut W, output: &str) -> anyhow::Result<()> {
    writeln!(stdout, "{output}").context("failed to write to standard output")?;
    stdout.flush().context("failed to flush standard output")
}
