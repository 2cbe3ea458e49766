use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const REPORT_FILE: &str = "KrsxhNumberReport.txt";

fn analyzer(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("phone-analyzer").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn prompt_reads_number_and_saves_report() {
    let dir = TempDir::new().unwrap();

    analyzer(&dir)
        .write_stdin("+14155552671\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter number (with country code):"))
        .stdout(predicate::str::contains("ANALYSIS REPORT"))
        .stdout(predicate::str::contains("+1 415-555-2671"))
        .stdout(predicate::str::contains("Report saved at:"));

    let content = fs::read_to_string(dir.path().join(REPORT_FILE)).unwrap();
    assert!(content.starts_with("📥 Entered Number: +14155552671\n"));
    assert!(content.contains("🌐 Country Code: 1\n"));
    assert!(content.ends_with("\n\n🔍 Generated by: @Krsxh\n"));
}

#[test]
fn invalid_input_prints_error_and_skips_file() {
    let dir = TempDir::new().unwrap();

    analyzer(&dir)
        .write_stdin("not-a-number\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid number format."))
        .stdout(predicate::str::contains("ANALYSIS REPORT").not());

    assert!(!dir.path().join(REPORT_FILE).exists());
}

#[test]
fn empty_input_is_handled() {
    let dir = TempDir::new().unwrap();

    analyzer(&dir)
        .write_stdin("\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid number format."));

    assert!(!dir.path().join(REPORT_FILE).exists());
}

#[test]
fn positional_number_skips_prompt() {
    let dir = TempDir::new().unwrap();

    analyzer(&dir)
        .args(["+911234567890", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter number").not())
        .stdout(predicate::str::contains("91"));

    assert!(!dir.path().join(REPORT_FILE).exists());
}

#[test]
fn rerun_overwrites_report() {
    let dir = TempDir::new().unwrap();

    analyzer(&dir).arg("+14155552671").assert().success();
    analyzer(&dir).arg("+41446681800").assert().success();

    let content = fs::read_to_string(dir.path().join(REPORT_FILE)).unwrap();
    assert!(content.contains("+41446681800"));
    assert!(!content.contains("+14155552671"));
}

#[test]
fn config_file_in_working_directory_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("phone-analyzer.toml"),
        "[report]\nfile_name = \"custom.txt\"\nattribution = \"-- custom\"\n",
    )
    .unwrap();

    analyzer(&dir).arg("+14155552671").assert().success();

    let content = fs::read_to_string(dir.path().join("custom.txt")).unwrap();
    assert!(content.ends_with("\n-- custom\n"));
    assert!(!dir.path().join(REPORT_FILE).exists());
}

#[test]
fn invalid_config_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("phone-analyzer.toml"),
        "[report]\nlabel_width = 0\n",
    )
    .unwrap();

    analyzer(&dir)
        .arg("+14155552671")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Label width"));
}
