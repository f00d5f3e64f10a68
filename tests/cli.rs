//! End-to-end tests driving the `ql` binary with piped stdin

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn settings_file(&self) -> PathBuf {
        self.dir.path().join(".qlrc")
    }

    fn ledger(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, "").unwrap();
        path
    }

    fn write_settings(&self, contents: &str) {
        std::fs::write(self.settings_file(), contents).unwrap();
    }

    fn ql(&self) -> Command {
        let mut cmd = Command::cargo_bin("ql").unwrap();
        cmd.env("QL_SETTINGS_FILE", self.settings_file())
            .env("HOME", self.dir.path())
            .env_remove("LEDGER")
            .env_remove("LEDGER_FILE")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn block(merchant: &str, category: &str, amount: &str, account: &str) -> String {
    format!(
        "{} * {}\n\tExpenses:{}\t\t${}\n\t{}\n",
        today(),
        merchant,
        category,
        amount,
        account
    )
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn appends_entry_using_settings_ledger() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.ledger("l.dat");
    sandbox.write_settings(&format!("[ql]\nledger_file = {}\n", ledger.display()));

    sandbox
        .ql()
        .write_stdin("Coffee Shop\nFood\nChecking\n4.5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Wrote entry to {}:",
            ledger.display()
        )));

    assert_eq!(
        read(&ledger),
        block("Coffee Shop", "Food", "4.50", "Assets:Checking")
    );
}

#[test]
fn default_account_skips_account_prompt() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.ledger("l.dat");
    sandbox.write_settings(&format!(
        "[ql]\nledger_file = {}\ndefault_account = card\ncard = Liabilities:Visa\n",
        ledger.display()
    ));

    sandbox
        .ql()
        .write_stdin("Bookstore\nBooks\n12.567\n")
        .assert()
        .success();

    assert_eq!(
        read(&ledger),
        block("Bookstore", "Books", "12.57", "Liabilities:Visa")
    );
}

#[test]
fn command_line_overrides_are_not_persisted() {
    let sandbox = Sandbox::new();
    let configured = sandbox.ledger("configured.dat");
    let other = sandbox.ledger("other.dat");
    let settings = format!("[ql]\nledger_file = {}\n", configured.display());
    sandbox.write_settings(&settings);

    sandbox
        .ql()
        .arg("-f")
        .arg(&other)
        .args(["--account", "Assets:Cash"])
        .write_stdin("Market\nGroceries\n20\n")
        .assert()
        .success();

    assert_eq!(read(&configured), "");
    assert_eq!(read(&other), block("Market", "Groceries", "20.00", "Assets:Cash"));
    assert_eq!(read(&sandbox.settings_file()), settings);
}

#[test]
fn bad_amount_is_asked_again() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.ledger("l.dat");
    sandbox.write_settings(&format!("[ql]\nledger_file = {}\n", ledger.display()));

    sandbox
        .ql()
        .write_stdin("Coffee Shop\nFood\nChecking\nabc\n\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount must be a number."));

    assert_eq!(
        read(&ledger),
        block("Coffee Shop", "Food", "3.00", "Assets:Checking")
    );
}

#[test]
fn two_runs_append_two_blocks() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.ledger("l.dat");
    sandbox.write_settings(&format!("[ql]\nledger_file = {}\n", ledger.display()));

    for _ in 0..2 {
        sandbox
            .ql()
            .write_stdin("Coffee Shop\nFood\nChecking\n4.5\n")
            .assert()
            .success();
    }

    let one = block("Coffee Shop", "Food", "4.50", "Assets:Checking");
    assert_eq!(read(&ledger), format!("{}{}", one, one));
}

#[test]
fn first_run_adopts_ledger_env_var() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.ledger("ledger.dat");

    sandbox
        .ql()
        .env("LEDGER", &ledger)
        .write_stdin("y\nCoffee Shop\nFood\nChecking\n4.5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Looks like your default ledger file is"));

    assert_eq!(
        read(&sandbox.settings_file()),
        format!("[ql]\nledger_file = {}\n\n", ledger.display())
    );
    assert_eq!(
        read(&ledger),
        block("Coffee Shop", "Food", "4.50", "Assets:Checking")
    );
}

#[test]
fn first_run_with_unknown_manual_path_fails() {
    let sandbox = Sandbox::new();

    sandbox
        .ql()
        .write_stdin("/no/such/ledger.dat\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found."));

    assert!(!sandbox.settings_file().exists());
}

#[test]
fn missing_configured_ledger_fails() {
    let sandbox = Sandbox::new();
    sandbox.write_settings("[ql]\nledger_file = /no/such/ledger.dat\n");

    sandbox
        .ql()
        .write_stdin("Coffee Shop\nFood\nChecking\n4.5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error! Cannot find /no/such/ledger.dat",
        ));
}

#[test]
fn end_of_input_exits_without_writing() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.ledger("l.dat");
    sandbox.write_settings(&format!("[ql]\nledger_file = {}\n", ledger.display()));

    sandbox
        .ql()
        .write_stdin("Coffee Shop\nFood\n")
        .assert()
        .code(130)
        .stdout(predicate::str::contains("User exit."));

    assert_eq!(read(&ledger), "");
}

#[test]
fn set_acct_is_a_placeholder() {
    let sandbox = Sandbox::new();

    sandbox
        .ql()
        .arg("--set-acct")
        .assert()
        .success()
        .stdout(predicate::str::contains("You are a star."));

    assert!(!sandbox.settings_file().exists());
}
