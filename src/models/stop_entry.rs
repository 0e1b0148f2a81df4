//! Data-entry form for a new police stop.
//! The form is never persisted; it only feeds the narrative.

use chrono::{NaiveDate, NaiveTime};
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CarType {
    #[default]
    Sedan,
    #[value(name = "suv")]
    Suv,
    Truck,
    Motorcycle,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SearchType {
    #[default]
    Frisk,
    Vehicle,
    Consent,
    ProbableCause,
    Inventory,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Violation {
    #[default]
    Speeding,
    NormalChecking,
    TrafficRulesViolation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum YesNo {
    Yes,
    #[default]
    No,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        })
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CarType::Sedan => "Sedan",
            CarType::Suv => "SUV",
            CarType::Truck => "Truck",
            CarType::Motorcycle => "Motorcycle",
            CarType::Other => "Other",
        })
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchType::Frisk => "Frisk",
            SearchType::Vehicle => "Vehicle",
            SearchType::Consent => "Consent",
            SearchType::ProbableCause => "Probable Cause",
            SearchType::Inventory => "Inventory",
            SearchType::Other => "Other",
        })
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Violation::Speeding => "Speeding",
            Violation::NormalChecking => "Normal checking",
            Violation::TrafficRulesViolation => "Traffic rules violation",
        })
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        })
    }
}

/// Outcome recorded for every submitted form.
pub const STOP_OUTCOME: &str = "Citation";

pub const MIN_DRIVER_AGE: u32 = 18;
pub const MAX_DRIVER_AGE: u32 = 100;
pub const MIN_STOP_MINUTES: u32 = 1;
pub const MAX_STOP_MINUTES: u32 = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct StopEntry {
    pub stop_date: NaiveDate,
    pub stop_time: NaiveTime,
    pub country_name: String,
    pub driver_gender: Gender,
    pub driver_age: u32,
    pub vehicle_number: String,
    pub car_type: CarType,
    pub search_conducted: YesNo,
    pub search_type: SearchType,
    pub stop_duration_minutes: u32,
    pub is_arrest: YesNo,
    pub drug_related_stop: YesNo,
    pub violation: Violation,
    pub stop_outcome: &'static str,
}

impl StopEntry {
    /// Form as it appears before the user touches any field.
    pub fn with_defaults(stop_date: NaiveDate) -> Self {
        Self {
            stop_date,
            stop_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap_or_default(),
            country_name: String::new(),
            driver_gender: Gender::default(),
            driver_age: 27,
            vehicle_number: String::new(),
            car_type: CarType::default(),
            search_conducted: YesNo::No,
            search_type: SearchType::default(),
            stop_duration_minutes: 10,
            is_arrest: YesNo::No,
            drug_related_stop: YesNo::No,
            violation: Violation::default(),
            stop_outcome: STOP_OUTCOME,
        }
    }
}
