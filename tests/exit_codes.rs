use std::process::Command;

fn run_bx(home: &std::path::Path, args: &[&str]) -> (i32, String) {
    let exe = env!("CARGO_BIN_EXE_bx");
    let out = Command::new(exe)
        .args(args)
        .env("HOME", home)
        .env("USERPROFILE", home)
        .output()
        .expect("run bx");
    (
        out.status.code().unwrap_or(1),
        String::from_utf8_lossy(&out.stdout).to_string(),
    )
}

#[test]
fn version_exits_zero() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout) = run_bx(home.path(), &["version"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("bx version "));
}

#[test]
fn list_seeds_and_prints_names() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout) = run_bx(home.path(), &["list"]);
    assert_eq!(code, 0);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names, vec!["clean", "default"]);
}

#[test]
fn launch_unknown_profile_exits_one() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout) = run_bx(home.path(), &["launch", "--profile", "no-such-profile"]);
    assert_eq!(code, 1);
    assert!(stdout.contains("Profile 'no-such-profile' not found"));
}

#[test]
fn clean_before_first_launch_exits_zero_with_notice() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout) = run_bx(home.path(), &["clean", "--profile", "default"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Profile directory does not exist"));
}

#[test]
fn clean_existing_dir_reports_reset() {
    let home = tempfile::tempdir().unwrap();
    // Seed the store, then fabricate a work dir with some data
    let (code, _) = run_bx(home.path(), &["list"]);
    assert_eq!(code, 0);
    let work = home.path().join(".bx").join("profiles").join("default");
    std::fs::create_dir_all(&work).unwrap();
    std::fs::write(work.join("History"), "x").unwrap();

    let (code, stdout) = run_bx(home.path(), &["clean", "--profile", "default"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Profile 'default' completely cleared and reset"));
    assert!(work.exists());
    assert_eq!(std::fs::read_dir(&work).unwrap().count(), 0);
}
