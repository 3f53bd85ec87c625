mod common;
use common::{capture, init_with_profile, mk, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_db");

    mk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check_info");
    init_with_profile(&db_path);
    capture(&db_path, "start", "2024-06-03 08:00", "100");

    mk().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integrity check passed"));

    mk().args(["--db", &db_path, "db", "--info", "--vacuum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vacuum completed"));
}

#[test]
fn test_migrate_is_idempotent() {
    let db_path = setup_test_db("migrate_idempotent");
    init_with_profile(&db_path);

    mk().args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Migration completed"));

    mk().args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success();
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_with_profile(&db_path);
    capture(&db_path, "start", "2024-06-03 08:00", "100");
    capture(&db_path, "end", "2024-06-03 18:00", "160");

    mk().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("migration_applied"))
        .stdout(predicate::str::contains("Shift opened at 100 km"))
        .stdout(predicate::str::contains("Shift closed at 160 km"));
}
