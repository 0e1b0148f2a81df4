mod common;
use common::{init_and_seed, init_db, sc, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;
use std::io::Read;
use std::path::Path;

#[test]
fn test_init_creates_database_and_log() {
    let db_path = setup_test_db("init_creates_database");

    sc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("SecureCheck initialization completed!"));

    assert!(Path::new(&db_path).exists());

    sc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Database initialized at"));
}

#[test]
fn test_log_records_seed() {
    let db_path = setup_test_db("log_records_seed");
    init_and_seed(&db_path);

    sc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Inserted 6 stops (0 failed), 6 officers (0 failed)"));
}

#[test]
fn test_db_info_lists_tables() {
    let db_path = setup_test_db("db_info_lists_tables");
    init_and_seed(&db_path);

    sc().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("check_post_logs"))
        .stdout(contains("traffic_stops"))
        .stdout(contains("missing"))
        .stdout(contains("2023-01-15 10:00:00"))
        .stdout(contains("2023-01-17 14:45:00"));
}

#[test]
fn test_db_check_and_vacuum() {
    let db_path = setup_test_db("db_check_and_vacuum");
    init_db(&db_path);

    sc().args(["--db", &db_path, "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."))
        .stdout(contains("Vacuum completed."));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup_plain_and_compressed");
    init_and_seed(&db_path);

    let out = temp_out("backup_plain", "sqlite");
    sc().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&out).exists());

    let out = temp_out("backup_compressed", "sqlite");
    let zip = temp_out("backup_compressed", "zip");
    sc().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(Path::new(&zip).exists());
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_backup_compress_onto_zip_name_keeps_database_bytes() {
    let db_path = setup_test_db("backup_zip_name");
    init_and_seed(&db_path);

    let zip_out = temp_out("backup_zip_name", "zip");
    sc().args(["--db", &db_path, "backup", "--file", &zip_out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let original = fs::read(&db_path).expect("read database");
    let file = fs::File::open(&zip_out).expect("open archive");
    let mut archive = zip::ZipArchive::new(file).expect("valid zip archive");
    assert_eq!(archive.len(), 1);

    let mut entry = archive.by_index(0).expect("archive entry");
    let mut restored = Vec::new();
    entry.read_to_end(&mut restored).expect("read archive entry");

    assert!(restored.starts_with(b"SQLite format 3\0"));
    assert_eq!(restored.len(), original.len());
}

#[test]
fn test_backup_onto_database_itself_is_refused() {
    let db_path = setup_test_db("backup_onto_itself");
    init_and_seed(&db_path);
    let before = fs::metadata(&db_path).expect("database metadata").len();

    sc().args(["--db", &db_path, "backup", "--file", &db_path, "--force"])
        .assert()
        .failure()
        .stderr(contains("Backup target is the database itself"));

    assert_eq!(fs::metadata(&db_path).expect("database metadata").len(), before);
    assert_eq!(common::count(&db_path, "check_post_logs"), 6);
}

#[test]
fn test_backup_missing_database_fails() {
    let db_path = setup_test_db("backup_missing_database");
    let out = temp_out("backup_missing_database", "sqlite");

    sc().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Database not found"));
}

#[test]
fn test_config_print() {
    let db_path = setup_test_db("config_print");

    sc().args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("database:"))
        .stdout(contains("checkpost_limit:"));
}

#[cfg(unix)]
#[test]
fn test_config_edit_with_editor() {
    let db_path = setup_test_db("config_edit");

    sc().args(["--db", &db_path, "config", "--edit", "--editor", "true"])
        .assert()
        .success()
        .stdout(contains("Configuration file edited successfully using 'true'"));
}

#[cfg(unix)]
#[test]
fn test_config_edit_falls_back_to_default_editor() {
    let db_path = setup_test_db("config_edit_fallback");

    sc().args(["--db", &db_path, "config", "--edit", "--editor", "false"])
        .env("EDITOR", "true")
        .assert()
        .success()
        .stdout(contains("Editor 'false' not available, falling back to 'true'"))
        .stdout(contains("edited successfully using fallback 'true'"));
}
