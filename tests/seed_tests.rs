mod common;
use common::{count, init_and_seed, init_db, sc, setup_test_db};
use predicates::str::contains;
use rusqlite::Connection;
use securecheck::core::seed::{SAMPLE_OFFICERS, SAMPLE_STOPS, SeedLogic, SeedReport};
use securecheck::db::initialize::init_db as lib_init_db;
use securecheck::db::pool::DbPool;

#[test]
fn test_seed_inserts_every_sample_row() {
    let db_path = setup_test_db("seed_inserts_every_sample_row");
    init_db(&db_path);

    sc().args(["--db", &db_path, "seed"])
        .assert()
        .success()
        .stdout(contains("Table 'check_post_logs' created successfully (or already exists)."))
        .stdout(contains("Table 'officers' created successfully (or already exists)."))
        .stdout(contains("All data committed: 6 stops, 6 officers."));

    assert_eq!(count(&db_path, "check_post_logs"), SAMPLE_STOPS.len() as i64);
    assert_eq!(count(&db_path, "officers"), SAMPLE_OFFICERS.len() as i64);
}

#[test]
fn test_seed_twice_appends_a_second_copy() {
    let db_path = setup_test_db("seed_twice_appends");
    init_and_seed(&db_path);

    sc().args(["--db", &db_path, "seed"]).assert().success();

    assert_eq!(count(&db_path, "check_post_logs"), 12);
    assert_eq!(count(&db_path, "officers"), 12);
}

#[test]
fn test_seed_stores_sample_values() {
    let db_path = setup_test_db("seed_stores_sample_values");
    init_and_seed(&db_path);

    let conn = Connection::open(&db_path).unwrap();
    let (driver, officer, ts, status, drugs): (i64, i64, String, String, bool) = conn
        .query_row(
            "SELECT driver_id, officer_id, time_stamp, status, drugs_related_stop
             FROM check_post_logs WHERE vehicle_number = 'DL05CD5678'",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?)),
        )
        .unwrap();

    assert_eq!(driver, 102);
    assert_eq!(officer, 2);
    assert_eq!(ts, "2023-01-15 11:30:00");
    assert_eq!(status, "STOPPED");
    assert!(drugs);

    let shift: String = conn
        .query_row(
            "SELECT shift_time FROM officers WHERE name = 'Mike Johnson'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(shift, "evening shift");
}

#[test]
fn test_seed_skips_failing_rows_and_commits_the_rest() {
    let db_path = setup_test_db("seed_skips_failing_rows");
    init_db(&db_path);

    // A pre-existing table with a stricter definition: CREATE IF NOT EXISTS keeps it.
    let conn = Connection::open(&db_path).unwrap();
    conn.execute_batch(
        "CREATE TABLE check_post_logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            vehicle_number VARCHAR(50),
            driver_id INT,
            officer_id INT,
            time_stamp TIMESTAMP,
            status VARCHAR(20) CHECK (status = 'OK'),
            drugs_related_stop BOOLEAN
        )",
    )
    .unwrap();
    drop(conn);

    sc().args(["--db", &db_path, "seed"])
        .assert()
        .success()
        .stderr(contains("Error inserting row DL05CD5678"))
        .stderr(contains("Error inserting row MH12EF9012"));

    assert_eq!(count(&db_path, "check_post_logs"), 2);
    assert_eq!(count(&db_path, "officers"), 6);
}

#[test]
fn test_seed_logic_reports_counts() {
    let db_path = setup_test_db("seed_logic_reports_counts");

    let mut pool = DbPool::new(&db_path).unwrap();
    lib_init_db(&pool.conn).unwrap();

    let report = SeedLogic::seed(&mut pool).unwrap();
    assert_eq!(
        report,
        SeedReport {
            stops_inserted: 6,
            stops_failed: 0,
            officers_inserted: 6,
            officers_failed: 0,
        }
    );

    let logged: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log WHERE operation = 'seed'", [], |r| r.get(0))
        .unwrap();
    assert_eq!(logged, 1);
}
