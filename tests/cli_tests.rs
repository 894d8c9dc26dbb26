//! Tests for the command-line layer
//!
//! These drive argument parsing and `cli::run` with in-memory buffers, covering
//! input resolution, output streams and exit codes.

use par_case::cli::{self, CliResult, RuntimeOptions};
use std::io::{self, Cursor, Read};

/// Output of one `cli::run` invocation.
struct RunOutput {
    code: i32,
    stdout: String,
    stderr: String,
}

fn run_with(options: RuntimeOptions, stdin: &str) -> RunOutput {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = cli::run(&options, Cursor::new(stdin), &mut stdout, &mut stderr);
    RunOutput {
        code,
        stdout: String::from_utf8(stdout).expect("stdout should be UTF-8"),
        stderr: String::from_utf8(stderr).expect("stderr should be UTF-8"),
    }
}

fn run_word(word: &str) -> RunOutput {
    let options = RuntimeOptions {
        word: Some(word.to_string()),
        ..Default::default()
    };
    run_with(options, "")
}

fn run_stdin(stdin: &str) -> RunOutput {
    run_with(RuntimeOptions::default(), stdin)
}

fn parse(args: &[&str]) -> (CliResult, String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let result = cli::parse_args(args.iter().copied(), &mut stdout, &mut stderr);
    (
        result,
        String::from_utf8(stdout).expect("stdout should be UTF-8"),
        String::from_utf8(stderr).expect("stderr should be UTF-8"),
    )
}

/// A reader that always fails, standing in for a broken stdin.
struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("stdin closed"))
    }
}

// ============================================================================
// Conversions through the CLI
// ============================================================================

#[test]
fn test_argument_conversions() {
    let cases = [
        ("my_var_name", "my-var-name"),
        ("my-var-name", "MyVarName"),
        ("MyVarName", "myVarName"),
        ("myVarName", "my_var_name"),
        ("a", "a"),
        ("A", "a"),
    ];
    for (input, expected) in cases {
        let out = run_word(input);
        assert_eq!(out.code, 0, "exit code for {input}");
        assert_eq!(out.stdout, format!("{expected}\n"), "output for {input}");
        assert!(out.stderr.is_empty(), "stderr for {input}");
    }
}

#[test]
fn test_stdin_is_trimmed() {
    let out = run_stdin("  myVarName \n");
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "my_var_name\n");
}

#[test]
fn test_argument_is_used_instead_of_stdin() {
    let options = RuntimeOptions {
        word: Some("foo_bar".to_string()),
        ..Default::default()
    };
    let out = run_with(options, "SomethingElse");
    assert_eq!(out.stdout, "foo-bar\n");
}

#[test]
fn test_empty_input_is_silent_success() {
    for input in ["", "   ", "\n\t\n"] {
        let out = run_stdin(input);
        assert_eq!(out.code, 0);
        assert!(out.stdout.is_empty());
        assert!(out.stderr.is_empty());
    }

    let out = run_word("");
    assert_eq!(out.code, 0);
    assert!(out.stdout.is_empty());
}

#[test]
fn test_unsupported_format() {
    for word in ["123abc", "Ⓐbc", "ªb"] {
        let out = run_word(word);
        assert_eq!(out.code, 1, "exit code for {word}");
        assert!(out.stdout.is_empty(), "stdout for {word}");
        assert_eq!(out.stderr, "Unsupported format\n", "stderr for {word}");
    }
}

#[test]
fn test_stdin_read_failure() {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = cli::run(
        &RuntimeOptions::default(),
        FailingReader,
        &mut stdout,
        &mut stderr,
    );
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    let stderr = String::from_utf8(stderr).expect("stderr should be UTF-8");
    assert!(stderr.contains("failed to read standard input"));
    assert!(stderr.contains("stdin closed"));
}

#[test]
fn test_detect_mode() {
    let options = RuntimeOptions {
        detect: true,
        ..Default::default()
    };
    let out = run_with(options.clone(), "Foo-Bar");
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "kebab\n");

    let out = run_with(options, "#hash");
    assert_eq!(out.code, 1);
    assert_eq!(out.stderr, "Unsupported format\n");
}

// ============================================================================
// Argument parsing
// ============================================================================

#[test]
fn test_parse_single_word() {
    let (result, stdout, stderr) = parse(&["par-case", "my_word"]);
    match result {
        CliResult::Continue(options) => {
            assert_eq!(options.word.as_deref(), Some("my_word"));
            assert!(!options.detect);
            assert!(options.log_level.is_none());
        }
        CliResult::Exit(code) => panic!("unexpected exit {code}"),
    }
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());
}

#[test]
fn test_parse_no_word_reads_stdin() {
    let (result, _, _) = parse(&["par-case"]);
    match result {
        CliResult::Continue(options) => assert!(options.word.is_none()),
        CliResult::Exit(code) => panic!("unexpected exit {code}"),
    }
}

#[test]
fn test_parse_too_many_words_is_usage_error() {
    let (result, stdout, stderr) = parse(&["par-case", "one", "two"]);
    assert!(matches!(result, CliResult::Exit(1)));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_parse_flags() {
    let (result, _, _) = parse(&["par-case", "--detect", "--log-level", "debug", "x"]);
    match result {
        CliResult::Continue(options) => {
            assert!(options.detect);
            assert_eq!(options.log_level, Some(log::LevelFilter::Debug));
            assert_eq!(options.word.as_deref(), Some("x"));
        }
        CliResult::Exit(code) => panic!("unexpected exit {code}"),
    }
}

#[test]
fn test_parse_word_after_separator() {
    let (result, _, _) = parse(&["par-case", "--", "-leading-hyphen"]);
    match result {
        CliResult::Continue(options) => {
            assert_eq!(options.word.as_deref(), Some("-leading-hyphen"));
        }
        CliResult::Exit(code) => panic!("unexpected exit {code}"),
    }
}

#[test]
fn test_parse_option_names_are_words_after_separator() {
    for word in ["--help", "-h", "--detect", "--version"] {
        let (result, stdout, _) = parse(&["par-case", "--", word]);
        match result {
            CliResult::Continue(options) => {
                assert_eq!(options.word.as_deref(), Some(word));
                assert!(!options.detect);
            }
            CliResult::Exit(code) => panic!("unexpected exit {code} for {word}"),
        }
        assert!(stdout.is_empty());
    }
}

#[test]
fn test_parse_bare_option_is_not_a_word() {
    let (result, _, _) = parse(&["par-case", "--detect"]);
    match result {
        CliResult::Continue(options) => {
            assert!(options.detect);
            assert!(options.word.is_none());
        }
        CliResult::Exit(code) => panic!("unexpected exit {code}"),
    }
}

#[test]
fn test_parse_help_exits_zero() {
    let (result, stdout, stderr) = parse(&["par-case", "--help"]);
    assert!(matches!(result, CliResult::Exit(0)));
    assert!(stdout.contains("Usage"));
    assert!(stderr.is_empty());
}
