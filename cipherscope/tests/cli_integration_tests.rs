// cipherscope/tests/cli_integration_tests.rs
//! Command-line integration tests for the `cipherscope` binary.
//!
//! These tests cover the `encrypt`, `decrypt`, and `analyze` subcommands end
//! to end: stdin and file input, stdout and file output, key validation
//! errors, the human-readable report, the frequency chart, JSON export, and
//! custom classifier configuration files.
//!
//! Output assertions run against plain text: the binary only emits color
//! when stdout is a terminal, and `assert_cmd` captures through a pipe.

use std::fs;
use std::io::Write;

use anyhow::Result;
use assert_cmd::Command;
use log::{debug, LevelFilter};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::NamedTempFile;

use cipherscope::logger;

/// A message long enough for the statistics to be meaningful. 47 letters,
/// entropy ~3.908 bits, index of coincidence ~0.0629.
const DEMO_MESSAGE: &str = "ATTACK AT DAWN. THIS IS A DEMO MESSAGE FOR CRYPTO ANALYSIS.";

/// Constructs a `Command` for the `cipherscope` binary with a clean
/// logging environment, so an ambient `RUST_LOG` cannot leak into
/// stderr assertions.
fn cipherscope_cmd() -> Command {
    logger::init_logger(Some(LevelFilter::Debug));
    let mut cmd = Command::new(assert_cmd::cargo_bin!("cipherscope"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A custom predicate to check if a string is valid JSON.
fn is_json() -> impl Predicate<str> {
    predicate::function(|s: &str| serde_json::from_str::<Value>(s).is_ok())
}

// --- Transform commands ---

#[test]
fn test_encrypt_caesar_stdin_to_stdout() -> Result<()> {
    debug!("Running test_encrypt_caesar_stdin_to_stdout");

    let output = cipherscope_cmd()
        .write_stdin("Attack At Dawn")
        .args(["encrypt", "--cipher", "caesar", "-k", "3"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Dwwdfn Dw Gdzq\n");

    Ok(())
}

#[test]
fn test_decrypt_caesar_reverses_encrypt() -> Result<()> {
    debug!("Running test_decrypt_caesar_reverses_encrypt");

    cipherscope_cmd()
        .write_stdin("Dwwdfn Dw Gdzq")
        .args(["decrypt", "--cipher", "caesar", "-k", "3"])
        .assert()
        .success()
        .stdout("Attack At Dawn\n");

    Ok(())
}

#[test]
fn test_caesar_is_the_default_cipher() -> Result<()> {
    debug!("Running test_caesar_is_the_default_cipher");

    cipherscope_cmd()
        .write_stdin("Attack At Dawn")
        .args(["encrypt", "-k", "3"])
        .assert()
        .success()
        .stdout("Dwwdfn Dw Gdzq\n");

    Ok(())
}

#[test]
fn test_caesar_accepts_negative_shifts() -> Result<()> {
    debug!("Running test_caesar_accepts_negative_shifts");

    // -1000 reduces to a shift of 14 positions.
    cipherscope_cmd()
        .write_stdin("A")
        .args(["encrypt", "-k", "-1000"])
        .assert()
        .success()
        .stdout("O\n");

    Ok(())
}

#[test]
fn test_invalid_caesar_shift_is_rejected() -> Result<()> {
    debug!("Running test_invalid_caesar_shift_is_rejected");

    cipherscope_cmd()
        .write_stdin("Attack At Dawn")
        .args(["encrypt", "--cipher", "caesar", "-k", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Caesar shift 'abc'"));

    Ok(())
}

#[test]
fn test_encrypt_vigenere_textbook_vector() -> Result<()> {
    debug!("Running test_encrypt_vigenere_textbook_vector");

    cipherscope_cmd()
        .write_stdin("ATTACKATDAWN")
        .args(["encrypt", "--cipher", "vigenere", "-k", "LEMON"])
        .assert()
        .success()
        .stdout("LXFOPVEFRNHR\n");

    Ok(())
}

#[test]
fn test_vigenere_preserves_case_and_punctuation() -> Result<()> {
    debug!("Running test_vigenere_preserves_case_and_punctuation");

    let output = cipherscope_cmd()
        .write_stdin("Attack at dawn!")
        .args(["encrypt", "--cipher", "vigenere", "-k", "lemon"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Lxfopv ef rnhr!\n");

    Ok(())
}

#[test]
fn test_decrypt_vigenere_reverses_encrypt() -> Result<()> {
    debug!("Running test_decrypt_vigenere_reverses_encrypt");

    cipherscope_cmd()
        .write_stdin("LXFOPVEFRNHR")
        .args(["decrypt", "--cipher", "vigenere", "-k", "LEMON"])
        .assert()
        .success()
        .stdout("ATTACKATDAWN\n");

    Ok(())
}

#[test]
fn test_transform_with_file_input_and_output() -> Result<()> {
    debug!("Running test_transform_with_file_input_and_output");

    let mut input_file = NamedTempFile::new()?;
    input_file.write_all(b"Attack At Dawn")?;
    let output_file = NamedTempFile::new()?;

    let output = cipherscope_cmd()
        .args(["encrypt", "-k", "3"])
        .arg("-i")
        .arg(input_file.path())
        .arg("-o")
        .arg(output_file.path())
        .output()?;

    assert!(output.status.success());
    // With -o, nothing is written to stdout.
    assert_eq!(String::from_utf8_lossy(&output.stdout), "");

    let written = fs::read_to_string(output_file.path())?;
    assert_eq!(written, "Dwwdfn Dw Gdzq\n");

    Ok(())
}

#[test]
fn test_missing_input_file_is_reported() -> Result<()> {
    debug!("Running test_missing_input_file_is_reported");

    cipherscope_cmd()
        .args(["encrypt", "-k", "3", "-i", "/nonexistent/cipherscope-input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));

    Ok(())
}

#[test]
fn test_quiet_flag_suppresses_stderr() -> Result<()> {
    debug!("Running test_quiet_flag_suppresses_stderr");

    cipherscope_cmd()
        .write_stdin("Attack At Dawn")
        .args(["-q", "encrypt", "-k", "3"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    Ok(())
}

#[test]
fn test_debug_flag_logs_operation_start() -> Result<()> {
    debug!("Running test_debug_flag_logs_operation_start");

    let output = cipherscope_cmd()
        .write_stdin("Attack At Dawn")
        .args(["-d", "encrypt", "-k", "3"])
        .output()?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert!(
        stderr.contains("Starting transform operation."),
        "Stderr missing operation log.\nFull stderr:\n{}",
        stderr
    );

    Ok(())
}

// --- Analyze command ---

#[test]
fn test_analyze_prints_summary_and_chart() -> Result<()> {
    debug!("Running test_analyze_prints_summary_and_chart");

    let output = cipherscope_cmd()
        .write_stdin(DEMO_MESSAGE)
        .arg("analyze")
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());

    assert!(stdout.contains("=== Letter Statistics ==="));
    assert!(stdout.contains("47"));
    assert!(stdout.contains("3.908"));
    assert!(stdout.contains("0.0629"));
    assert!(stdout.contains("Monoalphabetic-like"));
    // The frequency chart is rendered by default.
    assert!(stdout.contains('█'));
    // Piped output carries no escape sequences.
    assert!(!stdout.contains('\u{1b}'));

    Ok(())
}

#[test]
fn test_analyze_no_chart_omits_bars() -> Result<()> {
    debug!("Running test_analyze_no_chart_omits_bars");

    let output = cipherscope_cmd()
        .write_stdin(DEMO_MESSAGE)
        .args(["analyze", "--no-chart"])
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Monoalphabetic-like"));
    assert!(!stdout.contains('█'));

    Ok(())
}

#[test]
fn test_analyze_letterless_input_is_uncertain() -> Result<()> {
    debug!("Running test_analyze_letterless_input_is_uncertain");

    let output = cipherscope_cmd()
        .write_stdin("1234 5678 !!!")
        .arg("analyze")
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Uncertain"));
    assert!(stdout.contains("0.000"));
    assert!(!stdout.contains('█'));

    Ok(())
}

#[test]
fn test_analyze_json_stdout_is_pure_json() -> Result<()> {
    debug!("Running test_analyze_json_stdout_is_pure_json");

    let output = cipherscope_cmd()
        .write_stdin(DEMO_MESSAGE)
        .args(["analyze", "--json-stdout"])
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(is_json().eval(&stdout));
    assert!(!stdout.contains("Letter Statistics"));

    let json: Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["source_id"], "stdin");
    assert_eq!(json["letters"].as_u64(), Some(47));
    assert_eq!(json["family"], "Monoalphabetic-like");
    assert_eq!(json["frequencies"].as_array().map(Vec::len), Some(26));

    let entropy = json["entropy_bits"].as_f64().unwrap();
    assert!((entropy - 3.9081).abs() < 1e-3);
    let ioc = json["index_of_coincidence"].as_f64().unwrap();
    assert!((ioc - 136.0 / 2162.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_analyze_json_file_export() -> Result<()> {
    debug!("Running test_analyze_json_file_export");

    let json_file = NamedTempFile::new()?;

    let output = cipherscope_cmd()
        .write_stdin(DEMO_MESSAGE)
        .args(["analyze", "--json-file"])
        .arg(json_file.path())
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    // The summary is still printed, but the chart is not.
    assert!(stdout.contains("=== Letter Statistics ==="));
    assert!(!stdout.contains('█'));

    let json_content = fs::read_to_string(json_file.path())?;
    assert!(is_json().eval(json_content.as_str()));
    let json: Value = serde_json::from_str(&json_content)?;
    assert_eq!(json["letters"].as_u64(), Some(47));
    assert_eq!(json["family"], "Monoalphabetic-like");

    Ok(())
}

#[test]
fn test_analyze_json_flags_conflict() -> Result<()> {
    debug!("Running test_analyze_json_flags_conflict");

    cipherscope_cmd()
        .write_stdin(DEMO_MESSAGE)
        .args(["analyze", "--json-stdout", "--json-file", "report.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    Ok(())
}

#[test]
fn test_analyze_with_custom_classifier_config() -> Result<()> {
    debug!("Running test_analyze_with_custom_classifier_config");

    // Raise the coincidence gate above the demo message's ~0.0629 so the
    // only rule no longer matches.
    let config_yaml = r#"classifier:
  rules:
    - family: monoalphabetic
      entropy:
        - below: 4.05
      ioc:
        - above: 0.07
"#;
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(config_yaml.as_bytes())?;

    let output = cipherscope_cmd()
        .write_stdin(DEMO_MESSAGE)
        .args(["analyze", "--config"])
        .arg(config_file.path())
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Uncertain"));
    assert!(!stdout.contains("Monoalphabetic-like"));

    Ok(())
}

#[test]
fn test_analyze_rejects_invalid_config() -> Result<()> {
    debug!("Running test_analyze_rejects_invalid_config");

    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(b"classifier:\n  rules: []\n")?;

    cipherscope_cmd()
        .write_stdin(DEMO_MESSAGE)
        .args(["analyze", "--config"])
        .arg(config_file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no rules"));

    Ok(())
}

#[test]
fn test_analyze_reads_from_file() -> Result<()> {
    debug!("Running test_analyze_reads_from_file");

    let mut input_file = NamedTempFile::new()?;
    input_file.write_all(DEMO_MESSAGE.as_bytes())?;

    let output = cipherscope_cmd()
        .args(["analyze", "--no-chart", "-i"])
        .arg(input_file.path())
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("47"));
    // The source column carries the file path rather than "stdin".
    assert!(stdout.contains(input_file.path().file_name().unwrap().to_str().unwrap()));

    Ok(())
}
