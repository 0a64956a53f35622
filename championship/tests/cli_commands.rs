//! CLI tests for the `championship` binary.
//!
//! Spawns the binary and verifies stdout and exit codes for the built-in
//! season, custom season files and invalid input.

use std::fs;
use std::process::{Command, Output};

use championship::exit_codes;
use championship::io::season::DEFAULT_SEASON;
use championship::test_support::TempSeason;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_championship"))
        .args(args)
        .output()
        .expect("run championship")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn report_prints_reference_standings() {
    let output = run_cli(&["report"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    assert!(text.starts_with(
        "1. Sébastien Ogier (France): 40 points\n\
         2. Kalle Rovanperä (Finland): 40 points\n\
         3. Ott Tänak (Estonia): 30 points\n\
         4. Thierry Neuville (Belgium): 30 points\n\n"
    ));
    assert!(text.contains("Sébastien Ogier with 40 points\n"));
    assert!(text.ends_with("Gravel Car Performance: 355.0\nAsphalt Car Performance: 348.0\n"));
}

#[test]
fn report_json_is_parseable() {
    let output = run_cli(&["report", "--json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(value["total_points"], 140);
    assert_eq!(value["total_races"], 2);
    assert_eq!(value["leader"], "Sébastien Ogier");
}

#[test]
fn leader_without_drivers_exits_with_no_leader_code() {
    let season = TempSeason::new("").expect("season");
    let path = season.path();
    let output = run_cli(&["leader", "--season", path.to_str().expect("path")]);
    assert_eq!(output.status.code(), Some(exit_codes::NO_LEADER));
    assert_eq!(stdout(&output), "No leader: no drivers registered\n");
}

#[test]
fn invalid_season_exits_with_invalid_code() {
    let season = TempSeason::new(
        r#"
[[drivers]]
name = "Lonely"
country = "Nowhere"
car = "missing"
"#,
    )
    .expect("season");
    let path = season.path();
    let output = run_cli(&["standings", "--season", path.to_str().expect("path")]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("unknown car missing"));
}

#[test]
fn init_writes_reference_season_once() {
    let scratch = TempSeason::new("").expect("scratch");
    let target = scratch.dir().join("written.toml");
    let target_arg = target.to_str().expect("path");

    let output = run_cli(&["init", "--path", target_arg]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(fs::read_to_string(&target).expect("read"), DEFAULT_SEASON);

    let output = run_cli(&["init", "--path", target_arg]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).contains("exists"));

    let output = run_cli(&["races", "--season", target_arg]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).starts_with("Race: Rally Finland (Jyväskylä)\n"));
}

#[test]
fn cars_lists_every_car_with_rating() {
    let output = run_cli(&["cars"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout(&output),
        "Subaru Impreza (Gravel): 355.0\n\
         Ford Fiesta (Gravel): 338.0\n\
         Toyota Yaris (Asphalt): 348.0\n\
         Hyundai i20 (Asphalt): 341.0\n"
    );
}
