use assert_cmd::Command;
use predicates::prelude::*;

fn sim() -> Command {
    let mut cmd = Command::cargo_bin("ascent-sim").unwrap();
    cmd.arg("--no-plot");
    cmd
}

#[test]
fn ideal_mode_with_defaults() {
    sim()
        .write_stdin("1\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Δv (change in velocity) = 4023.59 m/s"))
        .stdout(predicate::str::contains("Invalid input, using default."));
}

#[test]
fn mode_prompt_repeats_on_bad_choice() {
    sim()
        .write_stdin("7\n1\n2500\n500\n100\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please enter 1 or 2."))
        .stdout(predicate::str::contains("4023.59"));
}

#[test]
fn realistic_mode_is_the_default_choice() {
    sim()
        .write_stdin("\n\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Drag coefficient [0.5]: "))
        .stdout(predicate::str::contains("Simulation: 1000 steps, dt=0.1 s"));
}

#[test]
fn unphysical_masses_are_rejected() {
    sim()
        .args(["--mode", "ideal"])
        .write_stdin("2500\n100\n500\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("initial mass (100 kg) must exceed final mass (500 kg)"));
}

#[test]
fn infinite_entries_are_rejected() {
    sim()
        .args(["--mode", "ideal"])
        .write_stdin("2500\ninf\n100\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("initial mass must be a finite number, got inf"));

    sim()
        .args(["--mode", "realistic"])
        .write_stdin("\n\n\n\ninfinity\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cross-sectional area must be a finite number"));
}

#[test]
fn batch_run_uses_config_file_and_flags() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("rocket.toml");
    std::fs::write(&config, "[rocket]\nburn_time = 2.0\n\n[sim]\ntotal_time = 200.0\n").unwrap();

    sim()
        .arg("--batch")
        .arg("--config")
        .arg(&config)
        .args(["--dt", "0.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IMPACT"))
        .stdout(predicate::str::contains("dt=0.2 s"));
}

#[test]
fn exports_csv_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("trajectory.csv");
    let json_path = dir.path().join("report.json");

    sim()
        .args(["--batch", "--total-time", "10"])
        .arg("--csv")
        .arg(&csv_path)
        .arg("--json")
        .arg(&json_path)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("time,velocity,altitude,acceleration,mass"));
    assert_eq!(lines.count(), 100);

    let report: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(report["summary"]["samples"], 100);
    assert_eq!(report["config"]["total_time"], 10.0);
}

#[test]
fn missing_config_file_fails() {
    sim()
        .args(["--batch", "--config", "/nonexistent/ascent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}
