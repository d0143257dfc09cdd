use std::path::Path;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "rentbook";

fn rentbook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("RENTBOOK_DATA_DIR", dir);
    cmd.env("RENTBOOK_TODAY", "2024-03-10");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(dir: &Path, args: &[&str]) {
    rentbook(dir).args(args).assert().success();
}

/// One property with unit 1A renting for $1000
fn setup() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    run(dir.path(), &["init"]);
    run(dir.path(), &["property", "add", "12 Elm St"]);
    run(dir.path(), &["unit", "add", "12 Elm St", "1A", "--rent", "1000"]);
    dir
}

#[test]
fn init_creates_settings_and_ledger() {
    let dir = TempDir::new().unwrap();
    rentbook(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("ledger.json").exists());
}

#[test]
fn property_and_unit_listing() {
    let dir = setup();
    rentbook(dir.path())
        .args(["property", "list"])
        .assert()
        .success()
        .stdout(contains("12 Elm St"));
    rentbook(dir.path())
        .args(["unit", "list", "--property", "12 elm st"])
        .assert()
        .success()
        .stdout(contains("1A").and(contains("$1000.00")));
}

#[test]
fn unknown_property_fails() {
    let dir = setup();
    rentbook(dir.path())
        .args(["unit", "add", "99 Nowhere Rd", "2B"])
        .assert()
        .failure()
        .stderr(contains("99 Nowhere Rd"));
}

#[test]
fn recorded_rent_shows_in_summary_and_forecast() {
    let dir = setup();
    rentbook(dir.path())
        .args([
            "txn", "add", "12 Elm St", "1000", "--type", "income", "--category", "Rent",
            "--unit", "1A", "--date", "2024-03-02",
        ])
        .assert()
        .success()
        .stdout(contains("Recorded INCOME Rent $1000.00 at 12 Elm St"));

    rentbook(dir.path())
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(contains("Total income:").and(contains("$1000.00")));

    rentbook(dir.path())
        .args(["report", "forecast", "--months", "2"])
        .assert()
        .success()
        .stdout(contains("Apr 24").and(contains("$2000.00")).and(contains("$3000.00")));
}

#[test]
fn forecast_without_history() {
    let dir = setup();
    rentbook(dir.path())
        .args(["report", "forecast"])
        .assert()
        .success()
        .stdout(contains("Not enough data to project cash flow."));
}

#[test]
fn transaction_category_is_suggested_from_description() {
    let dir = setup();
    rentbook(dir.path())
        .args([
            "txn", "add", "12 Elm St", "250", "--description", "Emergency plumbing repair",
            "--date", "2024-03-05",
        ])
        .assert()
        .success()
        .stdout(contains("EXPENSE Repairs $250.00"));
}

#[test]
fn transaction_type_follows_known_category() {
    let dir = setup();
    rentbook(dir.path())
        .args(["txn", "add", "12 Elm St", "80", "--category", "Repairs", "-d", "plumbing"])
        .assert()
        .success()
        .stdout(contains("Recorded EXPENSE Repairs $80.00"));
    rentbook(dir.path())
        .args(["txn", "add", "12 Elm St", "80", "--category", "Snacks"])
        .assert()
        .failure()
        .stderr(contains("Transaction type is required"));
}

#[test]
fn transaction_without_category_or_match_fails() {
    let dir = setup();
    rentbook(dir.path())
        .args(["txn", "add", "12 Elm St", "40", "--type", "expense", "--description", "misc"])
        .assert()
        .failure()
        .stderr(contains("Category is required"));
}

#[test]
fn classify_description() {
    let dir = TempDir::new().unwrap();
    rentbook(dir.path())
        .args(["classify", "Emergency plumbing repair at unit 4"])
        .assert()
        .success()
        .stdout(contains("Repairs (EXPENSE)"));
    rentbook(dir.path())
        .args(["classify", "Zelle from tenant", "--type", "expense"])
        .assert()
        .success()
        .stdout(contains("Rent (INCOME, type changed)"));
    rentbook(dir.path())
        .args(["classify", "coffee"])
        .assert()
        .success()
        .stdout(contains("No suggestion"));
}

fn write_tenant_csv(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("tenants.csv");
    std::fs::write(
        &path,
        "name,email,phone,address,unit\n\
         Ana Diaz,ana@example.com,555-0100,12 Elm St,1A\n\
         ,ghost@example.com,,12 Elm St,1A\n\
         Ben Ortiz,ben@example.com,,99 Nowhere Rd,\n",
    )
    .unwrap();
    path
}

#[test]
fn import_tenants_reports_skipped_rows() {
    let dir = setup();
    let csv = write_tenant_csv(dir.path());

    rentbook(dir.path())
        .args(["import", "tenants", csv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            contains("Import complete: 2 succeeded, 1 skipped")
                .and(contains("name is required"))
                .and(contains("no property matches '99 Nowhere Rd'")),
        );

    rentbook(dir.path())
        .arg("tenants")
        .assert()
        .success()
        .stdout(contains("Ana Diaz").and(contains("overdue")).and(contains("Ben Ortiz")));
}

#[test]
fn reminders_flag_late_fee_until_rent_is_paid() {
    let dir = setup();
    run(
        dir.path(),
        &["tenants", "add", "Ana Diaz", "--property", "12 Elm St", "--unit", "1A"],
    );
    run(
        dir.path(),
        &["reminders", "set", "Ana Diaz", "--due-days", "3", "--late-days", "5", "--fee", "50"],
    );

    rentbook(dir.path())
        .arg("reminders")
        .assert()
        .success()
        .stdout(contains("Late fee applies").and(contains("$50.00 since 2024-03-06")));

    run(
        dir.path(),
        &[
            "txn", "add", "12 Elm St", "1000", "--type", "income", "--category", "Rent",
            "--unit", "1A", "--date", "2024-03-08",
        ],
    );

    rentbook(dir.path())
        .arg("reminders")
        .assert()
        .success()
        .stdout(contains("No reminders due."));
}

#[test]
fn invalid_reminder_settings_are_rejected() {
    let dir = setup();
    run(dir.path(), &["tenants", "add", "Ana Diaz"]);
    rentbook(dir.path())
        .args(["reminders", "set", "Ana Diaz", "--due-days", "0"])
        .assert()
        .failure()
        .stderr(contains("due_date_reminder_days"));
}

#[test]
fn expiring_leases_within_horizon() {
    let dir = setup();
    run(
        dir.path(),
        &["unit", "add", "12 Elm St", "2B", "--rent", "900", "--lease-end", "2024-04-09"],
    );
    run(
        dir.path(),
        &["tenants", "add", "Cleo Park", "--property", "12 Elm St", "--unit", "2B"],
    );

    rentbook(dir.path())
        .args(["leases", "--days", "60"])
        .assert()
        .success()
        .stdout(contains("Cleo Park").and(contains("in 30 days")));
    rentbook(dir.path())
        .args(["leases", "--days", "10"])
        .assert()
        .success()
        .stdout(contains("No leases expiring soon."));
}

#[test]
fn recurring_rules_show_next_due_date() {
    let dir = setup();
    run(
        dir.path(),
        &[
            "recurring", "add", "12 Elm St", "150", "--type", "expense", "--category",
            "Landscaping", "--start", "2024-01-31", "--description", "Lawn service",
        ],
    );

    rentbook(dir.path())
        .args(["recurring", "--within", "30"])
        .assert()
        .success()
        .stdout(contains("2024-03-31").and(contains("Lawn service")));
}

#[test]
fn bank_import_skips_unreviewed_items() {
    let dir = setup();
    let ledger = std::fs::read_to_string(dir.path().join("data").join("ledger.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&ledger).unwrap();
    let property_id = value["properties"][0]["id"].as_str().unwrap().to_string();

    let batch = serde_json::json!([
        {
            "id": "s1",
            "date": "2024-03-04",
            "description": "Home Depot supplies",
            "amount": 4599,
            "is_debit": true,
            "review": { "property_id": property_id }
        },
        {
            "id": "s2",
            "date": "2024-03-05",
            "description": "Plumber visit",
            "amount": 12000,
            "is_debit": true
        }
    ]);
    let path = dir.path().join("bank.json");
    std::fs::write(&path, batch.to_string()).unwrap();

    rentbook(dir.path())
        .args(["import", "bank", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            contains("Import complete: 1 succeeded, 1 skipped")
                .and(contains("missing property"))
                .and(contains("1 synced transactions awaiting review")),
        );

    rentbook(dir.path())
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(contains("Supplies").and(contains("-$45.99")));
}

#[test]
fn bank_import_twice_does_not_duplicate_transactions() {
    let dir = setup();
    let ledger_path = dir.path().join("data").join("ledger.json");
    let ledger = std::fs::read_to_string(&ledger_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&ledger).unwrap();
    let property_id = value["properties"][0]["id"].as_str().unwrap().to_string();

    let batch = serde_json::json!([{
        "id": "s1",
        "date": "2024-03-04",
        "description": "Home Depot supplies",
        "amount": 4599,
        "is_debit": true,
        "review": { "property_id": property_id }
    }]);
    let path = dir.path().join("bank.json");
    std::fs::write(&path, batch.to_string()).unwrap();

    rentbook(dir.path())
        .args(["import", "bank", path.to_str().unwrap(), "--institution", "First Harbor"])
        .assert()
        .success()
        .stdout(contains("Linked to First Harbor").and(contains("1 succeeded, 0 skipped")));

    rentbook(dir.path())
        .args(["import", "bank", path.to_str().unwrap(), "--institution", "first harbor"])
        .assert()
        .success()
        .stdout(
            contains("0 succeeded, 1 skipped")
                .and(contains("already imported"))
                .and(contains("awaiting review").not()),
        );

    let ledger = std::fs::read_to_string(&ledger_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&ledger).unwrap();
    assert_eq!(value["transactions"].as_array().unwrap().len(), 1);
    assert_eq!(value["transactions"][0]["source_id"], "s1");
    assert_eq!(value["bank_connections"].as_array().unwrap().len(), 1);

    rentbook(dir.path())
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(contains("$45.99"));
}
