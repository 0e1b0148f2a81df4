use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of `check_post_logs`.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRecord {
    pub vehicle_number: String,     // ⇔ check_post_logs.vehicle_number
    pub driver_id: i64,             // ⇔ check_post_logs.driver_id
    pub officer_id: i64,            // ⇔ check_post_logs.officer_id
    pub time_stamp: NaiveDateTime,  // ⇔ check_post_logs.time_stamp (TEXT "YYYY-MM-DD HH:MM:SS")
    pub status: String,             // ⇔ check_post_logs.status ('OK' | 'STOPPED' | 'WARNING')
    pub drugs_related_stop: bool,   // ⇔ check_post_logs.drugs_related_stop
}

/// Literal seed row, kept as plain text until it is inserted.
#[derive(Debug, Clone, Copy)]
pub struct StopSample {
    pub vehicle_number: &'static str,
    pub driver_id: i64,
    pub officer_id: i64,
    pub time_stamp: &'static str,
    pub status: &'static str,
    pub drugs_related_stop: bool,
}

impl StopRecord {
    pub fn time_stamp_str(&self) -> String {
        self.time_stamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl TryFrom<&StopSample> for StopRecord {
    type Error = AppError;

    fn try_from(s: &StopSample) -> AppResult<Self> {
        let time_stamp = NaiveDateTime::parse_from_str(s.time_stamp, TIMESTAMP_FORMAT)
            .map_err(|_| AppError::InvalidDate(s.time_stamp.to_string()))?;

        Ok(Self {
            vehicle_number: s.vehicle_number.to_string(),
            driver_id: s.driver_id,
            officer_id: s.officer_id,
            time_stamp,
            status: s.status.to_string(),
            drugs_related_stop: s.drugs_related_stop,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_with_bad_timestamp_is_rejected() {
        let s = StopSample {
            vehicle_number: "KA01AB1234",
            driver_id: 1,
            officer_id: 1,
            time_stamp: "2023-13-40 99:00:00",
            status: "OK",
            drugs_related_stop: false,
        };
        assert!(matches!(StopRecord::try_from(&s), Err(AppError::InvalidDate(_))));
    }

    #[test]
    fn timestamp_round_trips_through_text() {
        let s = StopSample {
            vehicle_number: "DL05CD5678",
            driver_id: 102,
            officer_id: 2,
            time_stamp: "2023-01-15 11:30:00",
            status: "STOPPED",
            drugs_related_stop: true,
        };
        let r = StopRecord::try_from(&s).unwrap();
        assert_eq!(r.time_stamp_str(), "2023-01-15 11:30:00");
    }
}
