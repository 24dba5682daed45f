use assert_cmd::Command;
use predicates::prelude::*;

fn salesdash() -> Command {
    let mut cmd = Command::cargo_bin("salesdash").unwrap();
    cmd.env_remove("SALESDASH_DB").env_remove("SALESDASH_GATEWAY_URL");
    cmd
}

#[test]
fn test_cli_help() {
    salesdash()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sales dashboard API"));
}

#[test]
fn test_cli_serve_help() {
    salesdash().arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_summary_prints_both_summaries() {
    salesdash()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$22,550"))
        .stdout(predicate::str::contains("$1,495.00"));
}

#[test]
fn test_customers_search_and_toggle() {
    let output = salesdash()
        .args(["customers", "--search", "john", "--toggle", "amount", "--toggle", "amount"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let customers: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> =
        customers.as_array().unwrap().iter().map(|c| c["name"].as_str().unwrap()).collect();
    // Two clicks on amount: ascending, then descending.
    assert_eq!(names, vec!["Robert Johnson", "John Doe"]);
}

#[test]
fn test_customers_rejects_unknown_sort_key() {
    salesdash().args(["customers", "--sort-by", "email"]).assert().failure();
}

#[test]
fn test_export_writes_selected_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    salesdash()
        .args(["export", "--columns", "name,amount", "--delimiter", ";", "--output"])
        .arg(&path)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "Name;Amount");
    assert!(lines[1..].iter().all(|l| l.split(';').count() == 2 && l.contains(";$")));
}

#[test]
fn test_export_rejects_empty_column_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    salesdash()
        .args(["export", "--columns", "", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one export column"));
    assert!(!path.exists());
}

#[test]
fn test_sales_weekly_series() {
    let output = salesdash().args(["sales", "--period", "weekly"]).output().unwrap();
    assert!(output.status.success());
    let sales: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(sales[0]["name"], "Mon");
    assert_eq!(sales[0]["visitors"], 800);

    salesdash().args(["sales", "--period", "daily"]).assert().failure();
}

#[test]
fn test_faq_round_trip_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("faqs.db");

    salesdash()
        .arg("--db")
        .arg(&db)
        .args(["faq", "add", "Do you ship abroad?", "Yes, worldwide."])
        .assert()
        .success();

    salesdash()
        .arg("--db")
        .arg(&db)
        .args(["faq", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Do you ship abroad?"))
        .stdout(predicate::str::contains("How do I track my order?"));

    salesdash()
        .arg("--db")
        .arg(&db)
        .args(["faq", "edit", "1", " ", "answer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Question and answer cannot be empty"));

    salesdash().arg("--db").arg(&db).args(["faq", "delete", "1"]).assert().success();
    salesdash().arg("--db").arg(&db).args(["faq", "delete", "1"]).assert().failure();
}

#[test]
fn test_analyze_reports_unreachable_gateway() {
    salesdash()
        .args(["analyze", "--gateway", "http://127.0.0.1:1/api/askGemini"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Analyzing dashboard data..."));
}
