use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{seed_log, setup_data_dir, setup_lock_file, tt, LOG_HEADER};

#[test]
fn test_recent_orders_newest_first_and_dedupes() {
    let dir = setup_data_dir("recent_order");
    let lock = setup_lock_file("recent_order");

    // ALPHA appears twice; only its latest start counts.
    seed_log(
        &dir,
        &format!(
            "{LOG_HEADER}\
             ALPHA,2025-01-10 09:00:00,2025-01-10 10:00:00,3600\n\
             BETA,2025-01-11 09:00:00,2025-01-11 10:00:00,3600\n\
             ALPHA,2025-01-12 09:00:00,2025-01-12 10:00:00,3600\n"
        ),
    );

    tt().args(["--data-dir", &dir, "--lock-file", &lock, "recent"])
        .assert()
        .success()
        .stdout(contains("ALPHA\nBETA"))
        .stdout(contains("BETA\nALPHA").not());
}

#[test]
fn test_recent_tie_breaks_by_file_position() {
    let dir = setup_data_dir("recent_tie");
    let lock = setup_lock_file("recent_tie");

    // Same start second: the entry appearing later in the file wins.
    seed_log(
        &dir,
        &format!(
            "{LOG_HEADER}\
             FIRST,2025-01-10 09:00:00,2025-01-10 10:00:00,3600\n\
             SECOND,2025-01-10 09:00:00,2025-01-10 10:30:00,5400\n"
        ),
    );

    tt().args(["--data-dir", &dir, "--lock-file", &lock, "recent"])
        .assert()
        .success()
        .stdout(contains("SECOND\nFIRST"));
}

#[test]
fn test_recent_respects_limit_flag() {
    let dir = setup_data_dir("recent_limit");
    let lock = setup_lock_file("recent_limit");

    seed_log(
        &dir,
        &format!(
            "{LOG_HEADER}\
             ALPHA,2025-01-10 09:00:00,2025-01-10 10:00:00,3600\n\
             BETA,2025-01-11 09:00:00,2025-01-11 10:00:00,3600\n\
             GAMMA,2025-01-12 09:00:00,2025-01-12 10:00:00,3600\n"
        ),
    );

    tt().args([
        "--data-dir",
        &dir,
        "--lock-file",
        &lock,
        "recent",
        "--limit",
        "2",
    ])
    .assert()
    .success()
    .stdout(contains("GAMMA"))
    .stdout(contains("BETA"))
    .stdout(contains("ALPHA").not());
}

#[test]
fn test_recent_default_limit_is_fifteen() {
    let dir = setup_data_dir("recent_default_limit");
    let lock = setup_lock_file("recent_default_limit");

    let mut content = String::from(LOG_HEADER);
    for i in 1..=20 {
        content.push_str(&format!(
            "PROJ-{i:02},2025-01-{i:02} 09:00:00,2025-01-{i:02} 10:00:00,3600\n"
        ));
    }
    seed_log(&dir, &content);

    // 20 distinct projects, default limit 15: the oldest five fall off.
    tt().args(["--data-dir", &dir, "--lock-file", &lock, "recent"])
        .assert()
        .success()
        .stdout(contains("PROJ-20"))
        .stdout(contains("PROJ-06"))
        .stdout(contains("PROJ-05").not())
        .stdout(contains("PROJ-01").not());
}

#[test]
fn test_recent_empty_log() {
    let dir = setup_data_dir("recent_empty");
    let lock = setup_lock_file("recent_empty");

    seed_log(&dir, LOG_HEADER);

    tt().args(["--data-dir", &dir, "--lock-file", &lock, "recent"])
        .assert()
        .success()
        .stdout(contains("No projects logged yet."));
}

#[test]
fn test_recent_degrades_gracefully_on_corrupt_log() {
    let dir = setup_data_dir("recent_corrupt");
    let lock = setup_lock_file("recent_corrupt");

    seed_log(
        &dir,
        &format!("{LOG_HEADER}ALPHA,garbage,2025-01-10 10:00:00,3600\n"),
    );

    // Unlike report, recent is advisory: it warns and lists nothing.
    tt().args(["--data-dir", &dir, "--lock-file", &lock, "recent"])
        .assert()
        .success()
        .stdout(contains("Skipping recent projects:"))
        .stdout(contains("No projects logged yet."));
}
