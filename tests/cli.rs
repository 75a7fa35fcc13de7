//! CLI integration tests
//!
//! These tests run the compiled binary against a quotes file in a temporary
//! directory and check what it prints and what it leaves on disk.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn quotes_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("quotes.txt")
}

fn run_cli(temp_dir: &TempDir, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_quotegen");

    Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_fresh_directory_seeds_default_file() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(&temp_dir, &["--count"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "10\n");
    let contents = fs::read_to_string(quotes_path(&temp_dir)).unwrap();
    assert_eq!(contents.lines().count(), 10);
    assert!(contents.lines().all(|line| line.contains('|')));
    assert!(contents.starts_with(
        "The best way to get started is to quit talking and begin doing.|Walt Disney\n"
    ));
}

#[test]
fn test_count_on_three_quotes() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(quotes_path(&temp_dir), "A.|1\nB.|2\nC.\n").unwrap();

    let output = run_cli(&temp_dir, &["--count"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "3\n");
}

#[test]
fn test_random_prints_quote_in_display_form() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(quotes_path(&temp_dir), "Stay hungry, stay foolish.|Steve Jobs\n").unwrap();

    let output = run_cli(&temp_dir, &[]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "“Stay hungry, stay foolish.” — Steve Jobs\n"
    );
}

#[test]
fn test_list_and_empty_list() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(quotes_path(&temp_dir), "One.|A\n\nTwo.\n").unwrap();

    let output = run_cli(&temp_dir, &["--list"]);
    assert_eq!(stdout_of(&output), "1. One. — A\n2. Two. — Unknown\n");

    fs::write(quotes_path(&temp_dir), "").unwrap();
    let output = run_cli(&temp_dir, &["--list"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("No quotes"));
}

#[test]
fn test_add_then_remove_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(quotes_path(&temp_dir), "").unwrap();

    let output = run_cli(&temp_dir, &["--add", "Test quote.|Ada Lovelace"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("“Test quote.” — Ada Lovelace"));

    let output = run_cli(&temp_dir, &["--add", "Just text, no pipe."]);
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(quotes_path(&temp_dir)).unwrap(),
        "Test quote.|Ada Lovelace\nJust text, no pipe.\n"
    );

    let output = run_cli(&temp_dir, &["--remove", "1"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Removed: “Test quote.” — Ada Lovelace"));
    assert_eq!(
        fs::read_to_string(quotes_path(&temp_dir)).unwrap(),
        "Just text, no pipe.\n"
    );
}

#[test]
fn test_user_errors_exit_cleanly_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let contents = "A.|1\nB.|2\n";
    fs::write(quotes_path(&temp_dir), contents).unwrap();

    for index in ["0", "3", "-1"] {
        let output = run_cli(&temp_dir, &["--remove", index]);
        assert!(output.status.success());
        assert!(stdout_of(&output).contains("Index out of range. Must be 1..2"));
    }

    let output = run_cli(&temp_dir, &["--add", "   "]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Provide a non-empty quote."));

    assert_eq!(fs::read_to_string(quotes_path(&temp_dir)).unwrap(), contents);
}

#[test]
fn test_add_takes_precedence_over_other_flags() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(quotes_path(&temp_dir), "A.|1\n").unwrap();

    let output = run_cli(&temp_dir, &["--count", "--list", "--add", "B.|2"]);

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Added"));
    assert_eq!(
        fs::read_to_string(quotes_path(&temp_dir)).unwrap(),
        "A.|1\nB.|2\n"
    );
}

#[test]
fn test_file_option_points_elsewhere() {
    let temp_dir = TempDir::new().unwrap();
    let custom = temp_dir.path().join("data").join("mine.txt");

    let output = run_cli(&temp_dir, &["--file", custom.to_str().unwrap(), "--count"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "10\n");
    assert!(custom.exists());
    assert!(!quotes_path(&temp_dir).exists());
}
