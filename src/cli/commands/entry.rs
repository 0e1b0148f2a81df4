use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::errors::{AppError, AppResult};
use crate::models::stop_entry::{STOP_OUTCOME, StopEntry};
use chrono::{Local, NaiveDate, NaiveTime};

fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Accepts `HH:MM` and `HH:MM:SS`.
fn parse_time(s: &str) -> AppResult<NaiveTime> {
    let t = s.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entry {
        stop_date,
        stop_time,
        country_name,
        driver_gender,
        driver_age,
        vehicle_number,
        car_type,
        search_conducted,
        search_type,
        stop_duration_minutes,
        is_arrest,
        drug_related_stop,
        violation,
        width,
    } = cmd
    {
        let stop_date = match stop_date {
            Some(d) => parse_date(d)?,
            None => Local::now().date_naive(),
        };

        let entry = StopEntry {
            stop_date,
            stop_time: parse_time(stop_time)?,
            country_name: country_name.clone(),
            driver_gender: *driver_gender,
            driver_age: *driver_age,
            vehicle_number: vehicle_number.clone(),
            car_type: *car_type,
            search_conducted: *search_conducted,
            search_type: *search_type,
            stop_duration_minutes: *stop_duration_minutes,
            is_arrest: *is_arrest,
            drug_related_stop: *drug_related_stop,
            violation: *violation,
            stop_outcome: STOP_OUTCOME,
        };

        EntryLogic::show(&entry, width.unwrap_or(cfg.narrative_width));
    }
    Ok(())
}
