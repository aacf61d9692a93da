use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "hog-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_without_flags_exits_quietly() {
    let exe = env!("CARGO_BIN_EXE_hog");
    let output = Command::new(exe).output().expect("run cli");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_runs_experiments_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_hog");
    let output_path = temp_path("json");
    let status = Command::new(exe)
        .args([
            "-r",
            "--experiments",
            "all",
            "--samples",
            "20",
            "--seed",
            "7",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(report["seed"], 7);
    assert_eq!(report["tables"].as_array().map(Vec::len), Some(2));
    assert_eq!(report["win_rates"].as_array().map(Vec::len), Some(4));
}

#[test]
fn cli_accepts_long_underscore_flag() {
    let exe = env!("CARGO_BIN_EXE_hog");
    let output = Command::new(exe)
        .args(["--run_experiments", "--samples", "10", "--seed", "3"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Max scoring num rolls for six-sided dice"));
    assert!(stdout.contains("final_strategy win rate"));
}

#[test]
fn cli_rejects_unknown_experiment() {
    let exe = env!("CARGO_BIN_EXE_hog");
    let output = Command::new(exe)
        .args(["-r", "--experiments", "martingale"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("martingale"));
}

#[test]
fn cli_plays_single_traced_game() {
    let exe = env!("CARGO_BIN_EXE_hog");
    let output = Command::new(exe)
        .args(["--play", "final", "--against", "always:6", "--seed", "21"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Final score"));
    assert!(stdout.contains("Winner:"));
}

#[test]
fn cli_rejects_invalid_config_file() {
    let exe = env!("CARGO_BIN_EXE_hog");
    let config_path = temp_path("config");
    std::fs::write(&config_path, r#"{"goal": 0}"#).expect("write config");
    let output = Command::new(exe)
        .args(["-r", "--config"])
        .arg(&config_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("goal"));
}

#[test]
fn cli_refuses_to_mix_single_game_and_experiments() {
    let exe = env!("CARGO_BIN_EXE_hog");
    let output_path = temp_path("mixed");
    let output = Command::new(exe)
        .args(["--play", "final", "-r", "--report", "json", "--output"])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with"));
    assert!(!output_path.exists());
}

#[test]
fn cli_single_game_json_is_one_document() {
    let exe = env!("CARGO_BIN_EXE_hog");
    let output_path = temp_path("game-json");
    let status = Command::new(exe)
        .args(["--play", "swap", "--seed", "5", "--report", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let record: serde_json::Value = serde_json::from_str(&content).expect("single json document");
    assert!(record["turns"].as_array().is_some_and(|turns| !turns.is_empty()));
}
