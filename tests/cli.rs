use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("sharepick").unwrap()
}

#[test]
fn dynamic_solver_reports_totals() {
    cmd()
        .args(["tests/data/shares.csv", "--budget", "100", "--precision", "1"])
        .assert()
        .success()
        .stdout(contains("Budget: 100 EUR, 5 purchasable shares"))
        .stdout(contains("Total profit over 2 years: 16.5 EUR"))
        .stdout(contains("Total cost: 100.0 EUR"));
}

#[test]
fn both_solvers_agree() {
    cmd()
        .args([
            "tests/data/shares.csv",
            "--budget",
            "100",
            "--precision",
            "1",
            "--algorithm",
            "both",
        ])
        .assert()
        .success()
        .stdout(contains("Exhaustive solver over 5 shares"))
        .stdout(contains("Dynamic solver over 5 shares"))
        .stdout(contains("Total profit over 2 years: 16.5 EUR").count(2));
}

#[test]
fn tiny_budget_is_infeasible() {
    cmd()
        .args(["tests/data/shares.csv", "--budget", "5", "--algorithm", "exhaustive"])
        .assert()
        .success()
        .stdout(contains("No affordable combination of shares."));
}

#[test]
fn malformed_row_aborts_ingestion() {
    cmd()
        .args(["tests/data/malformed.csv"])
        .assert()
        .failure()
        .stderr(contains("not a valid price"));
}

#[test]
fn completions_need_no_dataset() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(contains("sharepick"));
}
