#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::{Connection, params};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sc() -> Command {
    cargo_bin_cmd!("securecheck")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_securecheck.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_securecheck_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    sc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize the DB and run the loader once.
pub fn init_and_seed(db_path: &str) {
    init_db(db_path);
    sc().args(["--db", db_path, "seed"]).assert().success();
}

/// (vehicle, violation, outcome, gender, age, race, search_type, search_conducted)
pub const DASHBOARD_ROWS: &[(&str, &str, &str, &str, Option<i64>, &str, &str, bool)] = &[
    ("KA01AB1234", "Speeding", "Citation", "M", Some(19), "Asian", "Frisk", false),
    ("DL05CD5678", "DUI", "Arrest Driver", "M", Some(24), "White", "Vehicle", true),
    ("MH12EF9012", "Speeding", "Warning", "F", Some(27), "Asian", "Frisk", true),
    ("KA03GH3456", "Seatbelt", "Warning", "F", Some(45), "Black", "Consent", false),
    ("KA03GH3456", "DUI", "Arrest Passenger", "M", Some(62), "Black", "Frisk", true),
    ("DL08KL2345", "Speeding", "Citation", "M", None, "White", "Inventory", false),
];

/// Create the table the dashboard reads, with every column its queries use.
pub fn create_traffic_stops(db_path: &str) {
    let conn = Connection::open(db_path).expect("open db");
    conn.execute_batch(
        "CREATE TABLE traffic_stops (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            vehicle_number   TEXT,
            violation        TEXT,
            stop_outcome     TEXT,
            driver_gender    TEXT,
            driver_age       INTEGER,
            driver_race      TEXT,
            search_type      TEXT,
            search_conducted BOOLEAN
        )",
    )
    .expect("create traffic_stops");

    for (vehicle, violation, outcome, gender, age, race, search_type, searched) in DASHBOARD_ROWS {
        conn.execute(
            "INSERT INTO traffic_stops (vehicle_number, violation, stop_outcome, driver_gender,
                driver_age, driver_race, search_type, search_conducted)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![vehicle, violation, outcome, gender, age, race, search_type, searched],
        )
        .expect("insert traffic stop");
    }
}

pub fn count(db_path: &str, table: &str) -> i64 {
    let conn = Connection::open(db_path).expect("open db");
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
        .expect("count rows")
}
