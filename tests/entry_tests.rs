mod common;
use common::sc;
use predicates::str::contains;

#[test]
fn test_entry_default_narrative() {
    sc().args(["entry", "--width", "1000"])
        .assert()
        .success()
        .stdout(contains("Traffic police Data Entry Record Format"))
        .stdout(contains(
            "🚗 A 27-year-old male driver was stopped for Speeding at 02:30 PM. \
             No search was conducted, and he received a citation.",
        ))
        .stdout(contains("The is_arrest was no and the driver was of no nature."));
}

#[test]
fn test_entry_with_fields() {
    sc().args([
        "entry",
        "--width",
        "1000",
        "--date",
        "2025-03-01",
        "--time",
        "21:15",
        "--gender",
        "female",
        "--age",
        "34",
        "--vehicle",
        "MH12EF9012",
        "--car-type",
        "motorcycle",
        "--duration",
        "45",
        "--arrest",
        "yes",
        "--violation",
        "normal-checking",
    ])
    .assert()
    .success()
    .stdout(contains(
        "A 34-year-old female driver was stopped for Normal checking at 09:15 PM.",
    ))
    .stdout(contains("The stop lasted 45 minutes"))
    .stdout(contains("a motorcycle with the number plate MH12EF9012."))
    .stdout(contains("The is_arrest was yes"));
}

#[test]
fn test_entry_rejects_age_out_of_range() {
    sc().args(["entry", "--age", "17"]).assert().failure();
    sc().args(["entry", "--age", "101"]).assert().failure();
}

#[test]
fn test_entry_rejects_duration_out_of_range() {
    sc().args(["entry", "--duration", "0"]).assert().failure();
    sc().args(["entry", "--duration", "121"]).assert().failure();
}

#[test]
fn test_entry_rejects_bad_time() {
    sc().args(["entry", "--time", "2pm"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 2pm"));
}

#[test]
fn test_entry_rejects_unknown_choice() {
    sc().args(["entry", "--car-type", "bus"]).assert().failure();
}
