use predicates::str::contains;

mod common;
use common::{seed_log, setup_data_dir, setup_lock_file, tt, LOG_HEADER};

#[test]
fn test_log_prints_entries_as_table() {
    let dir = setup_data_dir("log_table");
    let lock = setup_lock_file("log_table");

    seed_log(
        &dir,
        &format!(
            "{LOG_HEADER}\
             ACME-142,2025-01-15 09:00:00,2025-01-15 10:30:00,5400\n\
             emails,2025-01-15 10:30:00,2025-01-15 11:00:00,1800\n"
        ),
    );

    tt().args(["--data-dir", &dir, "--lock-file", &lock, "log"])
        .assert()
        .success()
        .stdout(contains("PROJECT"))
        .stdout(contains("ACME-142"))
        .stdout(contains("2025-01-15 09:00:00"))
        .stdout(contains("01:30:00"))
        .stdout(contains("00:30:00"));
}

#[test]
fn test_log_empty_file() {
    let dir = setup_data_dir("log_empty");
    let lock = setup_lock_file("log_empty");

    seed_log(&dir, LOG_HEADER);

    tt().args(["--data-dir", &dir, "--lock-file", &lock, "log"])
        .assert()
        .success()
        .stdout(contains("Log file is empty."));
}

#[test]
fn test_log_missing_file() {
    let dir = setup_data_dir("log_missing");
    let lock = setup_lock_file("log_missing");

    tt().args(["--data-dir", &dir, "--lock-file", &lock, "log"])
        .assert()
        .success()
        .stdout(contains("Log file is empty."));
}

#[test]
fn test_log_fails_loudly_on_corrupt_row() {
    let dir = setup_data_dir("log_corrupt");
    let lock = setup_lock_file("log_corrupt");

    seed_log(
        &dir,
        &format!("{LOG_HEADER}ACME-142,2025-01-15 09:00:00,broken,3600\n"),
    );

    tt().args(["--data-dir", &dir, "--lock-file", &lock, "log"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Corrupt log file"))
        .stderr(contains("invalid end_time"));
}

#[test]
fn test_manually_added_rows_are_accepted() {
    let dir = setup_data_dir("log_manual");
    let lock = setup_lock_file("log_manual");

    // Row written by hand, including a quoted comma in the project code.
    seed_log(
        &dir,
        &format!("{LOG_HEADER}\"acme, phase 2\",2025-01-15 09:00:00,2025-01-15 09:05:00,300\n"),
    );

    tt().args(["--data-dir", &dir, "--lock-file", &lock, "log"])
        .assert()
        .success()
        .stdout(contains("acme, phase 2"))
        .stdout(contains("00:05:00"));
}
