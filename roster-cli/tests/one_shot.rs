//! One-shot subcommands, JSON output, config override and the sign-in log.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn roster_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("roster"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let assert = cmd.assert().success();
    serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON")
}

#[test]
fn info_json_includes_stats() {
    let home = TempDir::new().expect("home");
    let json = stdout_json(roster_cmd(home.path()).args(["info", "--json"]));
    assert_eq!(json["name"], "Philadelphia Eagles");
    assert_eq!(json["players"], 58);
    let keys: Vec<&str> = json["stats"]
        .as_object()
        .expect("stats object")
        .keys()
        .map(String::as_str)
        .collect();
    assert!(keys.contains(&"Wins") && keys.contains(&"NFL Championships"));
    assert_eq!(json["stats"]["Losses"], 645);
}

#[test]
fn show_player_line_card_and_miss() {
    let home = TempDir::new().expect("home");
    roster_cmd(home.path())
        .args(["show", "6"])
        .assert()
        .success()
        .stdout("#6 DeVonta Smith — Wide Receiver (Alabama)\n");

    roster_cmd(home.path())
        .args(["show", "26", "--card"])
        .assert()
        .success()
        .stdout(contains("  PLAYER INFORMATION"))
        .stdout(contains("  Number:     #26"));

    roster_cmd(home.path())
        .args(["show", "99"])
        .assert()
        .success()
        .stdout("No player with number 99\n");
}

#[test]
fn show_rejects_non_numeric_argument() {
    let home = TempDir::new().expect("home");
    roster_cmd(home.path())
        .args(["show", "abc"])
        .assert()
        .failure()
        .stderr(contains("invalid value 'abc'"));
}

#[test]
fn search_json_by_category() {
    let home = TempDir::new().expect("home");
    let json = stdout_json(
        roster_cmd(home.path()).args(["search", "medical", "--category", "staff", "--json"]),
    );
    let names: Vec<&str> = json
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|e| e["name"].as_str())
        .collect();
    assert_eq!(names, ["Catherine Raîche", "James Sexton"]);
    assert!(json.as_array().expect("array").iter().all(|e| e["kind"] == "staff"));
}

#[test]
fn list_table_and_empty_search() {
    let home = TempDir::new().expect("home");
    roster_cmd(home.path())
        .args(["list", "-c", "coaches"])
        .assert()
        .success()
        .stdout(contains("Philadelphia Eagles | 6 coaches"))
        .stdout(contains("Juan Castillo"));

    roster_cmd(home.path())
        .args(["search", "zzz"])
        .assert()
        .success()
        .stdout(contains("No matching players."));
}

#[test]
fn sign_in_appends_to_configured_log() {
    let home = TempDir::new().expect("home");
    let log = home.path().join("logs").join("visitors.csv");
    let cfg_dir = home.path().join(".roster");
    fs::create_dir_all(&cfg_dir).expect("mkdir");
    fs::write(
        cfg_dir.join("config.yaml"),
        format!("sign_in_log: {}\n", log.display()),
    )
    .expect("write config");

    for name in ["Ava", "Smith, Ben"] {
        roster_cmd(home.path())
            .args(["sign-in", "--name", name])
            .args(["--contact", "x@example.com", "--affiliation", "Eagles"])
            .assert()
            .success()
            .stdout(contains("Signed in"));
    }

    let contents = fs::read_to_string(&log).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "Name,Email,Favorite Team,Login Date/Time");
    assert!(lines[1].starts_with("Ava,x@example.com,Eagles,"));
    assert!(lines[2].starts_with("\"Smith, Ben\",x@example.com,Eagles,"));
}

#[test]
fn sign_in_trims_fields() {
    let home = TempDir::new().expect("home");
    let log = home.path().join("visitors.csv");

    roster_cmd(home.path())
        .args(["sign-in", "--name", "  Cal  ", "--contact", " c@example.com "])
        .args(["--affiliation", "\tEagles\n", "--log"])
        .arg(&log)
        .assert()
        .success()
        .stdout(contains("Signed in 'Cal'"));

    let contents = fs::read_to_string(&log).expect("read log");
    let row = contents.lines().nth(1).expect("data row");
    assert!(row.starts_with("Cal,c@example.com,Eagles,"), "row was {row:?}");
}

#[test]
fn sign_in_failure_is_a_warning() {
    let home = TempDir::new().expect("home");
    let blocked = home.path().join("blocked.csv");
    fs::create_dir_all(&blocked).expect("mkdir");

    roster_cmd(home.path())
        .args(["sign-in", "--name", "Ava", "--log"])
        .arg(&blocked)
        .assert()
        .success()
        .stderr(contains("warning: could not save sign-in"));
}

#[test]
fn malformed_config_flag_is_reported() {
    let home = TempDir::new().expect("home");
    let cfg = home.path().join("bad.yaml");
    fs::write(&cfg, "palette: [oops").expect("write");

    roster_cmd(home.path())
        .args(["--config"])
        .arg(&cfg)
        .arg("info")
        .assert()
        .failure()
        .stderr(contains("bad.yaml"));
}
