//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn satmath() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("satmath").unwrap()
}

#[test]
fn auto_mode_runs_and_saves_without_prompting() {
    let dir = TempDir::new().unwrap();

    satmath()
        .current_dir(dir.path())
        .args(["--auto", "-c", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to SAT Math Tutor!"))
        .stdout(predicate::str::contains("Problem 5: "))
        .stdout(predicate::str::contains("Your answer: "))
        .stdout(predicate::str::contains("You answered 5/5 correctly."))
        .stdout(predicate::str::contains("Save your results").not())
        .stdout(predicate::str::contains(
            "Results saved to sat_math_results.csv",
        ));

    let csv = std::fs::read_to_string(dir.path().join("sat_math_results.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "Problem,Your Answer,Correct Answer,Result,Timestamp,Duration"
    );
    assert!(lines[1..].iter().all(|l| l.contains(",Correct,")));
}

#[test]
fn auto_mode_with_algebra_scores_everything() {
    let dir = TempDir::new().unwrap();

    satmath()
        .current_dir(dir.path())
        .args(["--auto", "--include-algebra", "--seed", "11", "-c", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solve for x: "))
        .stdout(predicate::str::contains("Incorrect!").not())
        .stdout(predicate::str::contains("You answered 30/30 correctly."));
}

#[test]
fn same_seed_same_quiz() {
    let run = || {
        let dir = TempDir::new().unwrap();
        let output = satmath()
            .current_dir(dir.path())
            .args(["--auto", "--include-algebra", "--seed", "99", "-c", "8", "--no-save"])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn interactive_wrong_answers_and_declined_save() {
    let dir = TempDir::new().unwrap();

    satmath()
        .current_dir(dir.path())
        .args(["-c", "2"])
        .write_stdin("abc\n\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Problem 1: "))
        .stdout(predicate::str::contains("Incorrect! Correct answer: "))
        .stdout(predicate::str::contains("You answered 0/2 correctly."))
        .stdout(predicate::str::contains("Save your results to CSV? (y/n): "));

    assert!(!dir.path().join("sat_math_results.csv").exists());
}

#[test]
fn interactive_accepted_save_writes_to_output() {
    let dir = TempDir::new().unwrap();

    satmath()
        .current_dir(dir.path())
        .args(["-c", "1", "--output", "out/results.csv"])
        .write_stdin("nope\nY\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Results saved to out/results.csv"));

    let csv = std::fs::read_to_string(dir.path().join("out/results.csv")).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains(",nope,"));
    assert!(csv.contains(",Incorrect,"));
}

#[test]
fn count_is_prompted_when_omitted() {
    let dir = TempDir::new().unwrap();

    satmath()
        .current_dir(dir.path())
        .arg("--auto")
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "How many questions do you want to try? ",
        ))
        .stdout(predicate::str::contains("You answered 3/3 correctly."));
}

#[test]
fn invalid_count_fails() {
    let dir = TempDir::new().unwrap();

    satmath()
        .current_dir(dir.path())
        .arg("--auto")
        .write_stdin("many\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("invalid question count"));
}

#[test]
fn closed_input_mid_quiz_fails() {
    let dir = TempDir::new().unwrap();

    satmath()
        .current_dir(dir.path())
        .args(["-c", "2"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed"));
}

#[test]
fn closed_input_at_save_prompt_means_no() {
    let dir = TempDir::new().unwrap();

    satmath()
        .current_dir(dir.path())
        .args(["-c", "1"])
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You answered"));

    assert!(!dir.path().join("sat_math_results.csv").exists());
}

#[test]
fn json_and_all_formats() {
    let dir = TempDir::new().unwrap();

    satmath()
        .current_dir(dir.path())
        .args(["--auto", "-c", "2", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results saved to sat_math_results.json"));
    let json = std::fs::read_to_string(dir.path().join("sat_math_results.json")).unwrap();
    assert!(json.contains("\"entries\""));
    assert!(!dir.path().join("sat_math_results.csv").exists());

    satmath()
        .current_dir(dir.path())
        .args(["--auto", "-c", "2", "--format", "all", "--output", "run.csv"])
        .assert()
        .success();
    assert!(dir.path().join("run.csv").exists());
    assert!(dir.path().join("run.json").exists());
}

#[test]
fn unknown_format_is_rejected() {
    satmath()
        .args(["--auto", "-c", "1", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn no_save_skips_persistence() {
    let dir = TempDir::new().unwrap();

    satmath()
        .current_dir(dir.path())
        .args(["--auto", "-c", "1", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results saved").not());

    assert!(!dir.path().join("sat_math_results.csv").exists());
}

#[test]
fn config_file_in_working_directory_is_used() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("satmath.toml"), "output = \"custom.csv\"\n").unwrap();

    satmath()
        .current_dir(dir.path())
        .args(["--auto", "-c", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results saved to custom.csv"));

    assert!(dir.path().join("custom.csv").exists());
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "algebra_share = 2.0\n").unwrap();

    satmath()
        .current_dir(dir.path())
        .args(["--auto", "-c", "1", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("algebra_share"));
}

#[test]
fn missing_config_path_fails() {
    satmath()
        .args(["--auto", "-c", "1", "--config", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn breakdown_table_goes_to_stderr() {
    let dir = TempDir::new().unwrap();

    satmath()
        .current_dir(dir.path())
        .args(["--auto", "-c", "3", "--breakdown", "--no-save"])
        .assert()
        .success()
        .stderr(predicate::str::contains("arithmetic"))
        .stderr(predicate::str::contains("100.0%"));
}

#[test]
fn auto_mode_never_enters_guided_steps() {
    let dir = TempDir::new().unwrap();

    satmath()
        .current_dir(dir.path())
        .args(["--auto", "--include-algebra", "-c", "10", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1:").not())
        .stdout(predicate::str::contains("Divide both sides").not());
}

#[test]
fn interactive_algebra_is_guided_step_by_step() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("satmath.toml"), "algebra_share = 1.0\n").unwrap();
    // at most two entries per problem with one attempt per step, then "n" to the save prompt
    let mut stdin = "0\n".repeat(40);
    stdin.push_str("n\n");

    satmath()
        .current_dir(dir.path())
        .args([
            "-c",
            "20",
            "--include-algebra",
            "--seed",
            "42",
            "--max-step-attempts",
            "1",
        ])
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(predicate::str::contains("Solve for x: "))
        .stdout(
            predicate::str::contains("Step 1: ").or(predicate::str::contains("Divide both sides")),
        )
        .stdout(predicate::str::contains("Answer: "))
        .stdout(predicate::str::contains("You answered"))
        .stdout(predicate::str::contains("/20 correctly."));

    assert!(!dir.path().join("sat_math_results.csv").exists());
}
