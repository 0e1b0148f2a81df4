//! Loader: creates the check-post tables and inserts the fixed sample data.

use crate::db::log::oplog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_officer, insert_stop};
use crate::db::schema::LOADER_TABLES;
use crate::errors::AppResult;
use crate::models::officer::Officer;
use crate::models::stop_record::{StopRecord, StopSample};
use crate::ui::messages::{error, info, success};

pub const SAMPLE_STOPS: [StopSample; 6] = [
    StopSample {
        vehicle_number: "KA01AB1234",
        driver_id: 101,
        officer_id: 1,
        time_stamp: "2023-01-15 10:00:00",
        status: "OK",
        drugs_related_stop: false,
    },
    StopSample {
        vehicle_number: "DL05CD5678",
        driver_id: 102,
        officer_id: 2,
        time_stamp: "2023-01-15 11:30:00",
        status: "STOPPED",
        drugs_related_stop: true,
    },
    StopSample {
        vehicle_number: "MH12EF9012",
        driver_id: 103,
        officer_id: 1,
        time_stamp: "2023-01-16 09:00:00",
        status: "WARNING",
        drugs_related_stop: false,
    },
    StopSample {
        vehicle_number: "KA03GH3456",
        driver_id: 104,
        officer_id: 3,
        time_stamp: "2023-01-16 12:00:00",
        status: "OK",
        drugs_related_stop: true,
    },
    StopSample {
        vehicle_number: "KA04IJ7890",
        driver_id: 105,
        officer_id: 2,
        time_stamp: "2023-01-17 08:30:00",
        status: "STOPPED",
        drugs_related_stop: false,
    },
    StopSample {
        vehicle_number: "DL08KL2345",
        driver_id: 106,
        officer_id: 1,
        time_stamp: "2023-01-17 14:45:00",
        status: "WARNING",
        drugs_related_stop: true,
    },
];

/// (name, post_location, shift_time)
pub const SAMPLE_OFFICERS: [(&str, &str, &str); 6] = [
    ("John Doe", "Downtown", "morning shift"),
    ("Jane Smith", "Uptown", "night shift"),
    ("Mike Johnson", "Midtown", "evening shift"),
    ("Emily Davis", "Westside", "morning shift"),
    ("Chris Brown", "Eastside", "night shift"),
    ("Sarah Wilson", "Northside", "evening shift"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub stops_inserted: usize,
    pub stops_failed: usize,
    pub officers_inserted: usize,
    pub officers_failed: usize,
}

pub struct SeedLogic;

impl SeedLogic {
    /// Create both loader tables, insert every sample row, commit once.
    ///
    /// A row that fails to insert is reported and skipped; the remaining
    /// rows are still committed. Running twice appends a second copy.
    pub fn seed(pool: &mut DbPool) -> AppResult<SeedReport> {
        for (name, ddl) in LOADER_TABLES {
            pool.conn.execute_batch(ddl)?;
            success(format!(
                "Table '{}' created successfully (or already exists).",
                name
            ));
        }

        let mut report = SeedReport::default();
        let tx = pool.conn.transaction()?;

        info("Inserting vehicle data...");
        for sample in &SAMPLE_STOPS {
            let res = StopRecord::try_from(sample).and_then(|rec| insert_stop(&tx, &rec));
            match res {
                Ok(()) => report.stops_inserted += 1,
                Err(e) => {
                    error(format!("Error inserting row {}: {}", sample.vehicle_number, e));
                    report.stops_failed += 1;
                }
            }
        }
        success("Vehicle data insertion process completed.");

        info("Inserting officer data...");
        for (name, post, shift) in SAMPLE_OFFICERS {
            match insert_officer(&tx, &Officer::new(name, post, shift)) {
                Ok(()) => report.officers_inserted += 1,
                Err(e) => {
                    error(format!("Error inserting officer {}: {}", name, e));
                    report.officers_failed += 1;
                }
            }
        }
        success("Officer data insertion process completed.");

        tx.commit()?;
        success(format!(
            "All data committed: {} stops, {} officers.",
            report.stops_inserted, report.officers_inserted
        ));

        oplog_or_warn(
            &pool.conn,
            "seed",
            "check_post_logs",
            &format!(
                "Inserted {} stops ({} failed), {} officers ({} failed)",
                report.stops_inserted,
                report.stops_failed,
                report.officers_inserted,
                report.officers_failed
            ),
        );

        Ok(report)
    }
}
