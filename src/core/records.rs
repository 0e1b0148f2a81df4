use crate::core::fetch::fetch_data;
use crate::core::metrics::{Metrics, counts_for_chart};
use crate::errors::AppResult;
use crate::models::query_result::QueryResult;
use crate::ui::messages::{header, info, metric, subheader, warning};
use crate::utils::chart::{bar_chart, share_chart};
use crate::utils::table::Table;

pub const RECORDS_QUERY: &str = "SELECT * FROM traffic_stops LIMIT 100";

pub struct RecordsLogic;

impl RecordsLogic {
    /// "Traffic records Table" view: table, headline metrics and two charts.
    pub fn show(db_path: &str) -> AppResult<QueryResult> {
        let data = fetch_data(db_path, RECORDS_QUERY);

        header("Traffic Stop Records");
        println!("Real-time traffic stop records from SecureCheck database\n");

        if data.is_empty() {
            info(
                "No data available to display for the Traffic Records Table. Please ensure the database connection is active and the table 'traffic_stops' exists.",
            );
            return Ok(data);
        }

        subheader("Traffic Stop Records Table");
        print!("{}", Table::from_result(&data).render());

        print_metrics(&Metrics::compute(&data)?);
        print_charts(&data);

        Ok(data)
    }
}

fn print_metric(label: &str, value: Option<usize>, column: &str, what: &str) {
    match value {
        Some(v) => metric(label, v),
        None => {
            warning(format!("'{}' column not found{}.", column, what));
            metric(label, "N/A");
        }
    }
}

fn print_metrics(m: &Metrics) {
    println!();
    subheader("Traffic Incident Overview");
    metric("Total Police Stops", m.total_stops);
    print_metric("Total Vehicles", m.total_vehicles, "vehicle_number", "");
    print_metric("Total Arrests", m.arrests, "stop_outcome", " for arrests");
    print_metric("Total Warnings", m.warnings, "stop_outcome", " for warnings");
}

fn print_charts(data: &QueryResult) {
    println!();
    subheader("Traffic Stop Records Visualization");

    match counts_for_chart(data, "violation") {
        Some(counts) => print!("{}", bar_chart("Traffic Stops by Violation", &counts)),
        None => warning("No data available for violations or 'violation' column not found."),
    }

    println!();
    match counts_for_chart(data, "driver_gender") {
        Some(counts) => print!("{}", share_chart("Driver Gender Distribution", &counts)),
        None => warning(
            "No data available for driver gender chart or 'driver_gender' column not found.",
        ),
    }
}
