use crate::models::stop_entry::StopEntry;
use crate::ui::messages::header;

pub struct EntryLogic;

impl EntryLogic {
    /// Free-text account of a submitted stop.
    ///
    /// The search and drug phrases are fixed text; the chosen values only
    /// appear in the closing sentence.
    pub fn narrative(e: &StopEntry) -> String {
        let mut narrative = format!(
            "🚗 A {}-year-old {} driver was stopped for {} at {}. ",
            e.driver_age,
            e.driver_gender.to_string().to_lowercase(),
            e.violation,
            e.stop_time.format("%I:%M %p")
        );
        narrative.push_str(&format!(
            "No search was conducted, and he received a {}. ",
            e.stop_outcome.to_lowercase()
        ));
        narrative.push_str(&format!(
            "The stop lasted {} minutes and was not drug-related.",
            e.stop_duration_minutes
        ));
        narrative.push_str(&format!(
            " The vehicle was a {} with the number plate {}.",
            e.car_type.to_string().to_lowercase(),
            e.vehicle_number
        ));
        narrative.push_str(&format!(
            " The is_arrest was {} and the driver was of {} nature.",
            e.is_arrest.to_string().to_lowercase(),
            e.drug_related_stop.to_string().to_lowercase()
        ));
        narrative
    }

    pub fn show(entry: &StopEntry, width: usize) -> String {
        header("Traffic police Data Entry Record Format");
        println!(
            "For creating a custom format table, please ensure you have the necessary columns in your 'traffic_stops' table required for the queries you want to run."
        );

        header("Add New Police Stop Record & Predict Outcome and Violation");
        let narrative = Self::narrative(entry);
        for line in textwrap::wrap(&narrative, width.max(20)) {
            println!("{}", line);
        }
        narrative
    }
}
