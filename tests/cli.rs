use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cashbook(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cashbook").unwrap();
    cmd.env("CASHBOOK_DATA_DIR", data_dir)
        .env_remove("CASHBOOK_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn salary_and_lunch_scenario() {
    let dir = TempDir::new().unwrap();

    cashbook(dir.path())
        .args(["add", "inflow", "100.00", "salary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: R$ 100.00"));

    cashbook(dir.path())
        .args(["out", "30.00", "lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: R$ 70.00"));

    cashbook(dir.path())
        .args(["remove", "inflow", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: R$ -30.00"));

    cashbook(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No inflows recorded."))
        .stdout(predicate::str::contains("lunch"))
        .stdout(predicate::str::contains("salary").not());
}

#[test]
fn rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();

    cashbook(dir.path())
        .args(["in", "-5.00", "bad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    cashbook(dir.path())
        .arg("balance")
        .assert()
        .success()
        .stdout("Balance: R$ 0.00\n");
}

#[test]
fn rejects_unknown_kind() {
    let dir = TempDir::new().unwrap();

    cashbook(dir.path())
        .args(["add", "gift", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transaction kind"));

    assert!(!dir.path().join("cashbook.json").exists());
}

#[test]
fn removal_prompt_can_be_declined() {
    let dir = TempDir::new().unwrap();
    cashbook(dir.path()).args(["in", "10", "tip"]).assert().success();

    cashbook(dir.path())
        .args(["remove", "inflow", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remove inflow 10.00 (tip)? [y/N]"))
        .stdout(predicate::str::contains("Nothing removed."));

    cashbook(dir.path())
        .args(["remove", "inflow", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed inflow 10.00 (tip)"));
}

#[test]
fn unknown_row_fails() {
    let dir = TempDir::new().unwrap();
    cashbook(dir.path()).args(["in", "10"]).assert().success();

    cashbook(dir.path())
        .args(["remove", "outflow", "1", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn corrupt_ledger_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cashbook.json"), "{ definitely not a ledger").unwrap();

    cashbook(dir.path())
        .arg("balance")
        .assert()
        .success()
        .stdout("Balance: R$ 0.00\n");
}

#[test]
fn file_flag_overrides_location() {
    let dir = TempDir::new().unwrap();
    let shop = dir.path().join("shop.json");

    cashbook(dir.path())
        .args(["--file", shop.to_str().unwrap(), "in", "12.5", "sale"])
        .assert()
        .success();

    assert!(shop.exists());
    assert!(!dir.path().join("cashbook.json").exists());

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&shop).unwrap()).unwrap();
    assert_eq!(
        saved,
        serde_json::json!([{"kind": "inflow", "amount": 12.5, "description": "sale"}])
    );
}

#[test]
fn settings_change_currency_symbol() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol": "$", "confirm_removals": false}"#,
    )
    .unwrap();

    cashbook(dir.path()).args(["in", "5", "tip"]).assert().success();
    cashbook(dir.path())
        .args(["remove", "inflow", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $ 0.00"));
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();

    cashbook(dir.path()).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    cashbook(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:   R$"));
}
