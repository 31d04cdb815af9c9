use assert_cmd::cargo::cargo_bin_cmd;

fn run_help(args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("sizecheck");
    cmd.args(args).arg("--help").assert().success();
}

#[test]
fn every_cli_command_has_help_path() {
    run_help(&[]);
    run_help(&["snapshot"]);
    run_help(&["commits"]);
    run_help(&["history"]);
    run_help(&["archive"]);
}

#[test]
fn missing_repo_fails_with_not_found() {
    let mut cmd = cargo_bin_cmd!("sizecheck");
    cmd.args(["snapshot", "/definitely/not/a/repo"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("not found"));
}

#[test]
fn commits_without_dates_is_an_unsupported_mode() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let mut cmd = cargo_bin_cmd!("sizecheck");
    cmd.args(["commits", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("unsupported mode"));
}

#[test]
fn inverted_date_range_is_rejected() {
    let mut cmd = cargo_bin_cmd!("sizecheck");
    cmd.args([
        "commits",
        ".",
        "--start-date",
        "2024-06-01",
        "--end-date",
        "2024-05-01",
    ])
    .assert()
    .failure()
    .stderr(predicates::str::contains("invalid date range"));
}

#[test]
fn malformed_date_is_rejected() {
    let mut cmd = cargo_bin_cmd!("sizecheck");
    cmd.args([
        "commits",
        ".",
        "--start-date",
        "01-05-2024x",
        "--end-date",
        "2024-06-01",
    ])
    .assert()
    .failure()
    .stderr(predicates::str::contains("malformed date"));
}
