//! End-to-end tests for every `onroad` subcommand.
//!
//! Uses `assert_cmd` to spawn the `onroad` binary and verify exit codes,
//! stdout content, and stderr content.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: create a Command for the `onroad` binary.
fn onroad() -> Command {
    cargo_bin_cmd!("onroad")
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    onroad()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "On-road price and EMI quotation engine",
        ));
}

#[test]
fn version_exits_0() {
    onroad()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("onroad"));
}

#[test]
fn quote_help_exits_0() {
    onroad()
        .args(["quote", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--price"))
        .stdout(predicate::str::contains("--city"));
}

// ──────────────────────────────────────────────
// 2. Quote subcommand
// ──────────────────────────────────────────────

#[test]
fn quote_text_prints_an_itemized_breakdown() {
    onroad()
        .args(["quote", "--price", "800000", "--fuel", "petrol", "--city", "Delhi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Delhi"))
        .stdout(predicate::str::contains("Registration tax"))
        .stdout(predicate::str::contains("56,000"))
        .stdout(predicate::str::contains("Total on-road price"))
        .stdout(predicate::str::contains("8,97,920"));
}

#[test]
fn quote_json_is_machine_readable() {
    let output = onroad()
        .args([
            "--output", "json", "quote", "--price", "800000", "--fuel", "petrol", "--city",
            "Delhi",
        ])
        .output()
        .expect("failed to execute");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["exShowroomPrice"], "800000");
    assert_eq!(json["registrationTax"], "56000");
    assert_eq!(json["totalOnRoadPrice"], "897920");
    assert_eq!(json["locality"]["state"], "Delhi");
    assert_eq!(json["locality"]["resolution"], "city");
}

#[test]
fn quote_accepts_formatted_rupee_amounts() {
    onroad()
        .args(["quote", "--price", "₹8,49,000", "--fuel", "petrol", "--city", "Delhi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9,52,673"));
}

#[test]
fn quote_unknown_city_notes_the_fallback() {
    onroad()
        .args(["quote", "--price", "500000", "--fuel", "petrol", "--city", "Atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maharashtra"))
        .stderr(predicate::str::contains("unrecognized city"));
}

#[test]
fn quote_quiet_suppresses_the_fallback_note() {
    onroad()
        .args([
            "--quiet", "quote", "--price", "500000", "--fuel", "petrol", "--city", "Atlantis",
        ])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn quote_unknown_fuel_exits_1() {
    onroad()
        .args(["quote", "--price", "800000", "--fuel", "steam", "--city", "Delhi"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unrecognized fuel type"));
}

#[test]
fn quote_non_positive_price_exits_1() {
    onroad()
        .args(["quote", "--price=-100", "--fuel", "petrol", "--city", "Delhi"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("positive"));
}

// ──────────────────────────────────────────────
// 3. Emi subcommand
// ──────────────────────────────────────────────

#[test]
fn emi_text_prints_installment_and_totals() {
    onroad()
        .args([
            "emi",
            "--price",
            "1000000",
            "--down-payment",
            "20",
            "--years",
            "5",
            "--rate",
            "8.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("16,413"))
        .stdout(predicate::str::contains("1,84,780"));
}

#[test]
fn emi_json_with_schedule_has_five_yearly_rows() {
    let output = onroad()
        .args([
            "--output",
            "json",
            "emi",
            "--price",
            "1000000",
            "--down-payment",
            "20",
            "--years",
            "5",
            "--rate",
            "8.5",
            "--schedule",
        ])
        .output()
        .expect("failed to execute");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["monthlyInstallment"], "16413");
    assert_eq!(json["tenureMonths"], 60);

    let rows = json["schedule"].as_array().expect("schedule array");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["months"], 12);
    assert_eq!(rows[4]["months"], 60);
}

#[test]
fn emi_rate_tolerates_a_percent_suffix() {
    onroad()
        .args([
            "emi",
            "--price",
            "1000000",
            "--down-payment",
            "20",
            "--years",
            "5",
            "--rate",
            "8.5%",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("16,413"));
}

#[test]
fn emi_zero_tenure_exits_1() {
    onroad()
        .args([
            "emi", "--price", "1000000", "--down-payment", "20", "--years", "0", "--rate", "8.5",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("tenure"));
}

#[test]
fn emi_json_errors_go_to_stderr_as_json() {
    onroad()
        .args([
            "--output", "json", "emi", "--price", "0", "--down-payment", "20", "--years", "5",
            "--rate", "8.5",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("\"error\""));
}

// ──────────────────────────────────────────────
// 4. States subcommand
// ──────────────────────────────────────────────

#[test]
fn states_text_lists_schedules_with_the_bracket_legend() {
    onroad()
        .arg("states")
        .assert()
        .success()
        .stdout(predicate::str::contains("40L+"))
        .stdout(predicate::str::contains("Delhi"))
        .stdout(predicate::str::contains("Maharashtra"))
        .stdout(predicate::str::contains("electric"));
}

#[test]
fn states_json_covers_every_state() {
    let output = onroad()
        .args(["--output", "json", "states"])
        .output()
        .expect("failed to execute");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");

    let floors = json["bracketFloors"].as_array().expect("bracketFloors");
    assert_eq!(floors.len(), 6);
    assert_eq!(floors[0], 0);
    assert_eq!(floors[5], 4000000);

    let states = json["states"].as_array().expect("states array");
    assert_eq!(states.len(), 35);
    assert!(states
        .iter()
        .any(|s| s["state"] == "Delhi" && s["petrol"][0] == "4%"));
}

#[test]
fn states_filter_shows_one_state() {
    onroad()
        .args(["states", "--state", "Tamil Nadu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tamil Nadu"))
        .stdout(predicate::str::contains("12%"))
        .stdout(predicate::str::contains("Delhi").not());
}

#[test]
fn states_unknown_filter_exits_1() {
    onroad()
        .args(["states", "--state", "Gondwana"])
        .assert()
        .failure()
        .code(1);
}

// ──────────────────────────────────────────────
// 5. Cities subcommand
// ──────────────────────────────────────────────

#[test]
fn cities_popular_lists_the_metros() {
    onroad()
        .args(["cities", "--popular"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mumbai"))
        .stdout(predicate::str::contains("Chennai"));
}

#[test]
fn cities_query_matches_state_names_too() {
    onroad()
        .args(["cities", "--query", "kerala"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kochi"));
}

#[test]
fn cities_query_is_capped_at_ten() {
    let output = onroad()
        .args(["--output", "json", "cities", "--query", "a"])
        .output()
        .expect("failed to execute");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["cities"].as_array().expect("cities array").len(), 10);
}

// ──────────────────────────────────────────────
// 6. Serve argument validation
// ──────────────────────────────────────────────

#[test]
fn serve_requires_both_tls_flags() {
    onroad()
        .args(["serve", "--tls-cert", "cert.pem"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--tls-key"));
}
