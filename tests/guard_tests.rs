use predicates::str::contains;
use std::fs;
use std::path::Path;
use ttrack::guard::InstanceLock;

mod common;
use common::{setup_data_dir, setup_lock_file, tt};

#[test]
fn test_lock_is_removed_after_a_normal_run() {
    let dir = setup_data_dir("guard_normal");
    let lock = setup_lock_file("guard_normal");

    tt().args(["--data-dir", &dir, "--lock-file", &lock, "status"])
        .assert()
        .success();

    assert!(
        !Path::new(&lock).exists(),
        "lock file must be released on exit"
    );
}

#[test]
fn test_stale_lock_is_reclaimed() {
    let dir = setup_data_dir("guard_stale");
    let lock = setup_lock_file("guard_stale");

    // A pid far above any real pid range: the owner is long gone.
    fs::write(&lock, "999999999").unwrap();

    tt().args(["--data-dir", &dir, "--lock-file", &lock, "status"])
        .assert()
        .success()
        .stdout(contains("Found a stale lock file."));

    assert!(!Path::new(&lock).exists());
}

#[test]
fn test_corrupt_lock_is_reclaimed() {
    let dir = setup_data_dir("guard_corrupt");
    let lock = setup_lock_file("guard_corrupt");

    fs::write(&lock, "not-a-pid").unwrap();

    tt().args(["--data-dir", &dir, "--lock-file", &lock, "status"])
        .assert()
        .success()
        .stdout(contains("Found a corrupt lock file."));

    assert!(!Path::new(&lock).exists());
}

#[test]
fn test_reclaimed_stale_lock_holds_current_pid() {
    let lock = setup_lock_file("guard_reclaim_stale");

    fs::write(&lock, "999999999").unwrap();

    // Acquiring over a dead owner must rewrite the file with our own pid,
    // not merely tolerate the old content.
    let held = InstanceLock::acquire(Path::new(&lock)).unwrap();
    assert_eq!(
        fs::read_to_string(&lock).unwrap(),
        std::process::id().to_string()
    );

    held.release();
    assert!(!Path::new(&lock).exists());
}

#[test]
fn test_reclaimed_corrupt_lock_holds_current_pid() {
    let lock = setup_lock_file("guard_reclaim_corrupt");

    fs::write(&lock, "not-a-pid").unwrap();

    let held = InstanceLock::acquire(Path::new(&lock)).unwrap();
    assert_eq!(
        fs::read_to_string(&lock).unwrap(),
        std::process::id().to_string()
    );

    held.release();
    assert!(!Path::new(&lock).exists());
}

#[test]
fn test_live_owner_refuses_startup_and_keeps_lock() {
    let dir = setup_data_dir("guard_live");
    let lock = setup_lock_file("guard_live");

    // The test process itself is a live owner the CLI must respect.
    let own_pid = std::process::id().to_string();
    fs::write(&lock, &own_pid).unwrap();

    tt().args(["--data-dir", &dir, "--lock-file", &lock, "status"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("already running"))
        .stderr(contains(&own_pid));

    // Collision must leave the existing lock untouched.
    let content = fs::read_to_string(&lock).unwrap();
    assert_eq!(content, own_pid);
}
