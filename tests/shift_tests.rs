mod common;
use common::{capture, init_with_profile, mk, setup_test_db, two_shifts_in_june};
use predicates::prelude::*;

/// Id of the first shift listed by `history` (newest first).
fn newest_pair_id(db_path: &str) -> String {
    let out = mk()
        .args(["--db", db_path, "history", "--all"])
        .output()
        .expect("run history");
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    stdout
        .split_whitespace()
        .find(|t| t.starts_with("pair_"))
        .expect("a closed pair in history")
        .to_string()
}

#[test]
fn test_capture_requires_profile() {
    let db_path = setup_test_db("capture_requires_profile");
    mk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    mk().args(["--db", &db_path, "start", "--km", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profile registered"));
}

#[test]
fn test_register_and_profile() {
    let db_path = setup_test_db("register_and_profile");
    init_with_profile(&db_path);

    mk().args(["--db", &db_path, "profile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Souza"))
        .stdout(predicate::str::contains("ABC1D23"));
}

#[test]
fn test_register_rejects_blank_plate() {
    let db_path = setup_test_db("register_blank_plate");
    mk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    mk().args(["--db", &db_path, "register", "--name", "Ana", "--plate", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plate must not be empty"));
}

#[test]
fn test_two_shifts_total_110() {
    let db_path = setup_test_db("two_shifts_total");
    init_with_profile(&db_path);
    two_shifts_in_june(&db_path);

    mk().args(["--db", &db_path, "history", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shifts for June 2024"))
        .stdout(predicate::str::contains("110 km"))
        .stdout(predicate::str::contains("over 2 closed"));
}

#[test]
fn test_history_other_month_is_empty() {
    let db_path = setup_test_db("history_other_month");
    init_with_profile(&db_path);
    two_shifts_in_june(&db_path);

    mk().args(["--db", &db_path, "history", "--month", "2024-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No shifts found"));

    mk().args(["--db", &db_path, "history", "--day", "2024-06-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("110 km"));
}

#[test]
fn test_history_rejects_bad_month() {
    let db_path = setup_test_db("history_bad_month");
    init_with_profile(&db_path);

    mk().args(["--db", &db_path, "history", "--month", "June"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period filter"));
}

#[test]
fn test_double_start_is_refused_without_force() {
    let db_path = setup_test_db("double_start");
    init_with_profile(&db_path);
    capture(&db_path, "start", "2024-06-03 08:00", "100");

    mk().args([
        "--db",
        &db_path,
        "start",
        "--km",
        "120",
        "--at",
        "2024-06-03 09:00",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("already open"));

    // forced: the first start becomes an incomplete shift
    mk().args([
        "--db",
        &db_path,
        "start",
        "--km",
        "120",
        "--at",
        "2024-06-03 09:00",
        "--force",
    ])
    .assert()
    .success();
    capture(&db_path, "end", "2024-06-03 18:00", "200");

    mk().args(["--db", &db_path, "history", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inc_"))
        .stdout(predicate::str::contains("80 km"))
        .stdout(predicate::str::contains("1 incomplete"));
}

#[test]
fn test_end_without_start_is_refused() {
    let db_path = setup_test_db("end_without_start");
    init_with_profile(&db_path);

    mk().args(["--db", &db_path, "end", "--km", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No open shift"));

    mk().args(["--db", &db_path, "end", "--km", "150", "--force"])
        .assert()
        .success();

    mk().args(["--db", &db_path, "history", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("orphan_"));
}

#[test]
fn test_invalid_km_is_not_stored() {
    let db_path = setup_test_db("invalid_km");
    init_with_profile(&db_path);

    mk().args(["--db", &db_path, "start", "--km", "12a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid odometer value"));

    mk().args(["--db", &db_path, "history", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No shifts found"));
}

#[test]
fn test_location_is_stamped_on_the_entry() {
    let db_path = setup_test_db("location_stamp");
    init_with_profile(&db_path);

    mk().args([
        "--db",
        &db_path,
        "start",
        "--km",
        "100",
        "--street",
        "Rua Augusta",
        "--number",
        "1000",
        "--city",
        "São Paulo",
        "--at",
        "2024-06-03 08:00",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Rua Augusta, 1000 / São Paulo"));

    mk().args(["--db", &db_path, "history", "--all", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rua Augusta, 1000"));
}

#[test]
fn test_edit_end_odometer_changes_total() {
    let db_path = setup_test_db("edit_end");
    init_with_profile(&db_path);
    two_shifts_in_june(&db_path);

    // newest shift is 150 → 210
    let pair = newest_pair_id(&db_path);

    mk().args(["--db", &db_path, "edit", &pair, "--end-km", "180"])
        .assert()
        .success()
        .stdout(predicate::str::contains("set to 180 km"));

    mk().args(["--db", &db_path, "history", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("80 km"))
        .stdout(predicate::str::contains("over 2 closed"));
}

#[test]
fn test_edit_may_leave_a_negative_distance() {
    let db_path = setup_test_db("edit_negative");
    init_with_profile(&db_path);
    capture(&db_path, "start", "2024-06-03 08:00", "120");
    capture(&db_path, "end", "2024-06-03 18:00", "200");

    let pair = newest_pair_id(&db_path);

    mk().args([
        "--db",
        &db_path,
        "edit",
        &pair,
        "--start-km",
        "150",
        "--end-km",
        "100",
    ])
    .assert()
    .success();

    mk().args(["--db", &db_path, "history", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-50 km"));
}

#[test]
fn test_edit_rejects_bad_input() {
    let db_path = setup_test_db("edit_bad_input");
    init_with_profile(&db_path);
    two_shifts_in_june(&db_path);
    let pair = newest_pair_id(&db_path);

    mk().args(["--db", &db_path, "edit", &pair, "--end-km", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid odometer value"));

    mk().args(["--db", &db_path, "edit", "pair_1_2", "--end-km", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Shift not found"));

    mk().args(["--db", &db_path, "history", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("110 km"));
}

#[test]
fn test_status_follows_the_log() {
    let db_path = setup_test_db("status");
    init_with_profile(&db_path);

    mk().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IDLE"));

    capture(&db_path, "start", "2024-06-03 08:00", "100");

    mk().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ON ROUTE"))
        .stdout(predicate::str::contains("START at 100 km"));
}

#[test]
fn test_clear_removes_profile_and_entries() {
    let db_path = setup_test_db("clear");
    init_with_profile(&db_path);
    two_shifts_in_june(&db_path);

    mk().args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared"));

    mk().args(["--db", &db_path, "history", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No shifts found"));

    mk().args(["--db", &db_path, "profile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profile registered"));

    // the audit trail survives
    mk().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clear"))
        .stdout(predicate::str::contains("register"));
}
