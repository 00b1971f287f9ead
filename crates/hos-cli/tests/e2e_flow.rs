//! End-to-end tests for the daily log CLI.
//!
//! Tests the full pipeline: trip document → sheet list → rendered sheet,
//! plus interactive browsing and sheet assembly from a flat event list.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn hos_binary() -> String {
    env!("CARGO_BIN_EXE_hos").to_string()
}

/// Builds a command isolated from the user's config and environment.
fn hos(home: &Path) -> Command {
    let mut command = Command::new(hos_binary());
    command
        .env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("HOS_OUTPUT")
        .env_remove("HOS_TRIP_PATH")
        .env_remove("HOS_REMARKS")
        .env_remove("HOS_FILLED")
        .env_remove("HOS_EMPTY")
        .env_remove("RUST_LOG");
    command
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "hos should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

/// A two-day trip in the planner's nested `sheet_json` form.
const TRIP: &str = r#"{
    "id": 1,
    "current_location": "Chicago, IL",
    "pickup_location": "Gary, IN",
    "dropoff_location": "Denver, CO",
    "logsheets": [
        {"id": 1, "date": "2024-01-01", "sheet_json": {"date": "2024-01-01", "events": [
            {"status": "off_duty", "status_display": "Off Duty", "start_time": "2024-01-01T00:00:00+00:00", "end_time": "2024-01-01T06:00:00+00:00", "note": "Sleeping till duty starts"},
            {"status": "driving", "status_display": "Driving", "start_time": "2024-01-01T06:00:00+00:00", "end_time": "2024-01-01T08:00:00+00:00", "note": "Driving to pickup"},
            {"status": "on_duty", "status_display": "On Duty (not driving)", "start_time": "2024-01-01T08:00:00+00:00", "end_time": "2024-01-01T09:00:00+00:00", "note": "Loading cargo"},
            {"status": "driving", "status_display": "Driving", "start_time": "2024-01-01T09:00:00+00:00", "end_time": "2024-01-01T13:30:00+00:00"},
            {"status": "off_duty", "status_display": "Off Duty", "start_time": "2024-01-01T13:30:00+00:00", "end_time": "2024-01-01T23:59:59.999999+00:00", "note": "Off duty till midnight"}
        ]}},
        {"id": 2, "date": "2024-01-02", "sheet_json": {"date": "2024-01-02", "events": [
            {"status": "driving", "start_time": "2024-01-02T06:00:00+00:00", "end_time": "2024-01-02T10:30:00+00:00"},
            {"status": "on_duty", "start_time": "not a timestamp", "end_time": "2024-01-02T12:00:00+00:00"}
        ]}}
    ]
}"#;

fn write_trip(temp: &TempDir) -> std::path::PathBuf {
    let path = temp.path().join("trip.json");
    std::fs::write(&path, TRIP).unwrap();
    path
}

#[test]
fn test_sheets_lists_totals_per_day() {
    let temp = TempDir::new().unwrap();
    let trip = write_trip(&temp);

    let output = hos(temp.path()).arg("sheets").arg(&trip).output().unwrap();
    let text = stdout(&output);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("#  Date"));
    // 6:00 + 10:15 off duty, 6:30 driving, 1:00 on duty; the final slot is never filled
    assert!(lines[1].contains("16:15"), "{}", lines[1]);
    assert!(lines[1].contains("6:30"), "{}", lines[1]);
    assert!(lines[1].ends_with("23:45"), "{}", lines[1]);
    assert!(lines[2].ends_with("4:30"), "{}", lines[2]);
}

#[test]
fn test_show_renders_selected_sheet() {
    let temp = TempDir::new().unwrap();
    let trip = write_trip(&temp);

    let output = hos(temp.path())
        .args(["show", "--sheet", "2"])
        .arg(&trip)
        .output()
        .unwrap();
    let text = stdout(&output);

    assert!(text.contains("Date: 2024-01-02  Month: January  Day: Tuesday  Year: 2024"));
    assert!(text.contains("Sheet 2 of 2"));
    assert!(text.contains("3. Driving"));
    assert!(text.contains("Remarks: none"));
}

#[test]
fn test_show_by_date_as_json() {
    let temp = TempDir::new().unwrap();
    let trip = write_trip(&temp);

    let output = hos(temp.path())
        .args(["show", "--date", "2024-01-01", "--json"])
        .arg(&trip)
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    assert_eq!(value["date"], "2024-01-01");
    assert_eq!(value["totals"]["driving"], "6:30");
    assert_eq!(value["totals"]["on_duty"], "1:00");
    assert_eq!(value["grid"]["off_duty"][95], false);
    assert_eq!(
        value["remarks"],
        "Off Duty: Sleeping till duty starts; Driving: Driving to pickup; \
         On Duty (not driving): Loading cargo; Off Duty: Off duty till midnight"
    );
}

#[test]
fn test_show_out_of_range_fails() {
    let temp = TempDir::new().unwrap();
    let trip = write_trip(&temp);

    let output = hos(temp.path())
        .args(["show", "--sheet", "5"])
        .arg(&trip)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sheet 5 out of range"), "{stderr}");
}

#[test]
fn test_browse_reads_commands_from_stdin() {
    let temp = TempDir::new().unwrap();
    let trip = write_trip(&temp);

    let mut child = hos(temp.path())
        .arg("browse")
        .arg(&trip)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"p\nn\nn\nq\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    let text = stdout(&output);

    let positions: Vec<&str> = text.lines().filter(|l| l.starts_with("Sheet ")).collect();
    assert_eq!(
        positions,
        vec!["Sheet 1 of 2", "Sheet 1 of 2", "Sheet 2 of 2", "Sheet 2 of 2"]
    );
}

#[test]
fn test_configured_trip_path_and_output() {
    let temp = TempDir::new().unwrap();
    let trip = write_trip(&temp);
    let config = temp.path().join("hos.toml");
    std::fs::write(
        &config,
        format!("trip_path = {:?}\noutput = \"json\"\n", trip.display().to_string()),
    )
    .unwrap();

    let output = hos(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("sheets")
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[test]
fn test_missing_trip_path_fails() {
    let temp = TempDir::new().unwrap();

    let output = hos(temp.path()).arg("sheets").output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no trip file"), "{stderr}");
}

#[test]
fn test_assemble_then_show() {
    let temp = TempDir::new().unwrap();
    let events = temp.path().join("events.json");
    std::fs::write(
        &events,
        r#"[
            {"status": "off_duty", "start_time": "2024-03-01T20:00:00Z", "end_time": "2024-03-02T06:00:00Z", "note": "Sleeping till duty starts"},
            {"status": "driving", "start_time": "2024-03-02T06:00:00Z", "end_time": "2024-03-02T09:00:00Z"}
        ]"#,
    )
    .unwrap();

    let output = hos(temp.path()).arg("assemble").arg(&events).output().unwrap();
    let assembled = temp.path().join("trip.json");
    std::fs::write(&assembled, stdout(&output)).unwrap();

    let output = hos(temp.path())
        .args(["show", "--date", "2024-03-02", "--json"])
        .arg(&assembled)
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    assert_eq!(value["totals"]["off_duty"], "6:00");
    assert_eq!(value["totals"]["driving"], "3:00");
    assert_eq!(value["totals"]["grand_total"], "9:00");
    assert_eq!(value["remarks"], "Off Duty: Sleeping till duty starts");
}

#[test]
fn test_no_subcommand_prints_help() {
    let temp = TempDir::new().unwrap();
    let output = hos(temp.path()).output().unwrap();
    let text = stdout(&output);
    assert!(text.contains("sheets"));
    assert!(text.contains("browse"));
}
