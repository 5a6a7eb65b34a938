//! End-to-end tests that invoke the `signup` binary.
//!
//! Every command runs with `SIGNUP_WIZARD_DIR` pointed at a temp directory
//! for isolation from the user's real config.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn signup_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("signup").expect("signup binary");
    cmd.env("SIGNUP_WIZARD_DIR", dir);
    cmd.env_remove("SIGNUP_PRICING_FILE");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn pricing_lists_every_item() {
    let tmpdir = tempfile::tempdir().expect("temp dir");

    signup_cmd(tmpdir.path())
        .args(["pricing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arcade"))
        .stdout(predicate::str::contains("$90/yr"))
        .stdout(predicate::str::contains("Custom Profile"));
}

#[test]
fn pricing_rejects_unknown_cycle() {
    let tmpdir = tempfile::tempdir().expect("temp dir");

    signup_cmd(tmpdir.path())
        .args(["pricing", "--cycle", "weekly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid billing cycle"));
}

#[test]
fn quote_advanced_yearly() {
    let tmpdir = tempfile::tempdir().expect("temp dir");

    signup_cmd(tmpdir.path())
        .args([
            "quote",
            "--plan",
            "advanced",
            "--cycle",
            "yearly",
            "--addon",
            "online-service",
            "--addon",
            "custom-profile",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Advanced (Yearly)"))
        .stdout(predicate::str::contains("Total (per year)"))
        .stdout(predicate::str::contains("$150/yr"));
}

#[test]
fn quote_json_output() {
    let tmpdir = tempfile::tempdir().expect("temp dir");

    let output = signup_cmd(tmpdir.path())
        .args(["quote", "--plan", "pro", "--format", "json"])
        .output()
        .expect("run signup");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["plan"], "pro");
    assert_eq!(value["billing_cycle"], "monthly");
    assert_eq!(value["total_cents"], 1500);
}

#[test]
fn quote_rejects_unknown_plan() {
    let tmpdir = tempfile::tempdir().expect("temp dir");

    signup_cmd(tmpdir.path())
        .args(["quote", "--plan", "gold"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown plan: 'gold'"));
}

#[test]
fn custom_pricing_file_is_used() {
    let tmpdir = tempfile::tempdir().expect("temp dir");
    let pricing = tmpdir.path().join("custom.json");
    std::fs::write(
        &pricing,
        r#"{
            "plans": {
                "arcade": {"monthly": 5, "yearly": 50},
                "advanced": {"monthly": 12, "yearly": 120},
                "pro": {"monthly": 15, "yearly": 150}
            },
            "addons": {
                "online-service": {"monthly": 1, "yearly": 10},
                "larger-storage": {"monthly": 2, "yearly": 20},
                "custom-profile": {"monthly": 2, "yearly": 20}
            }
        }"#,
    )
    .expect("write pricing");

    signup_cmd(tmpdir.path())
        .arg("--pricing")
        .arg(&pricing)
        .args(["quote", "--plan", "arcade"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$5/mo"));
}

#[test]
fn init_then_config() {
    let tmpdir = tempfile::tempdir().expect("temp dir");

    signup_cmd(tmpdir.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));
    assert!(tmpdir.path().join("config.json").exists());
    assert!(tmpdir.path().join("pricing.yaml").exists());

    signup_cmd(tmpdir.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default billing cycle: monthly"));
}

#[test]
fn console_wizard_completes_from_stdin() {
    let tmpdir = tempfile::tempdir().expect("temp dir");

    signup_cmd(tmpdir.path())
        .args(["wizard"])
        .write_stdin("Ada\nada@example.com\n555-0100\npro\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pro (Monthly)"))
        .stdout(predicate::str::contains("Thank you!"));
}
