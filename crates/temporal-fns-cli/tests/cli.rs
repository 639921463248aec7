use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("temporal-fns").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_business_days_in_new_york() {
    cli()
        .args(["--tz", "America/New_York", "add_business_days", "2014-09-01", "10"])
        .assert()
        .success()
        .stdout("2014-09-15T00:00:00.000-04:00\n");
}

#[test]
fn test_add_days_negative_amount() {
    cli()
        .args(["--tz", "UTC", "add_days", "2014-09-11", "-10"])
        .assert()
        .success()
        .stdout("2014-09-01T00:00:00.000Z\n");
}

#[test]
fn test_add_months_clamps() {
    cli()
        .args(["--tz", "UTC", "add_months", "2015-01-31", "1"])
        .assert()
        .success()
        .stdout("2015-02-28T00:00:00.000Z\n");
}

#[test]
fn test_add_duration_object() {
    cli()
        .args([
            "--tz",
            "UTC",
            "add",
            "2014-09-01T10:19:50",
            r#"{"years":2,"months":9,"weeks":1,"days":7,"hours":5,"minutes":9,"seconds":30}"#,
        ])
        .assert()
        .success()
        .stdout("2017-06-15T15:29:20.000Z\n");
}

#[test]
fn test_is_weekend() {
    cli()
        .args(["is_weekend", "2014-10-05"])
        .assert()
        .success()
        .stdout("true\n");
    cli()
        .args(["is_weekend", "2014-10-06"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_legacy_timestamp_argument() {
    cli()
        .args(["--tz", "UTC", "to_temporal_date", "@1392118230000"])
        .assert()
        .success()
        .stdout("2014-02-11\n");
}

#[test]
fn test_string_argument_is_invalid_and_warns() {
    cli()
        .args(["--tz", "UTC", "add_days", "Sept 1st", "1"])
        .assert()
        .success()
        .stdout("Invalid Date\n")
        .stderr(predicate::str::contains("string arguments are not accepted as dates"));
}

#[test]
fn test_missing_argument_is_an_error() {
    cli()
        .args(["add_days", "2014-09-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 arguments required, but only 1 present"));
}

#[test]
fn test_unknown_function_is_an_error() {
    cli()
        .args(["sub_days", "2014-09-01", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown function: sub_days"));
}

#[test]
fn test_invalid_timezone_is_an_error() {
    cli()
        .args(["--tz", "Mars/Olympus_Mons", "is_weekend", "2014-10-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn test_json_output() {
    let output = cli()
        .args(["--tz", "UTC", "--json", "add_days", "@0", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["type"], "date");
    assert_eq!(json["valid"], true);
    assert_eq!(json["timestamp"], 86_400_000);
    assert_eq!(json["value"], "1970-01-02T00:00:00.000Z");
}

#[test]
fn test_json_invalid_date() {
    let output = cli()
        .args(["--json", "to_date", "null"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert!(json["value"].is_null());
}
