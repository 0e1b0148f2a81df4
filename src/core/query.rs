//! Fixed label → SQL map behind the "Queries" view.
//!
//! Every statement reads `traffic_stops` and may reference columns that the
//! loader never creates; those queries simply come back empty.

use crate::core::fetch::fetch_data;
use crate::core::metrics::series_for_chart;
use crate::errors::{AppError, AppResult};
use crate::models::query_result::QueryResult;
use crate::ui::messages::{header, info, subheader, warning};
use crate::utils::chart::bar_chart;
use crate::utils::table::Table;

/// Bar chart drawn under a query's result.
#[derive(Debug, Clone, Copy)]
pub struct ChartSpec {
    pub title: &'static str,
    pub x: &'static str,
    pub y: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct QueryDef {
    pub label: &'static str,
    pub sql: &'static str,
    pub chart: Option<ChartSpec>,
}

pub const QUERY_MAP: &[QueryDef] = &[
    QueryDef {
        label: "Total Number of police stops",
        sql: "SELECT COUNT(*) FROM traffic_stops",
        chart: None,
    },
    QueryDef {
        label: "count of stops by violation Type",
        sql: "SELECT violation, COUNT(*) FROM traffic_stops GROUP BY violation ORDER BY COUNT(*) DESC",
        chart: None,
    },
    QueryDef {
        label: "Number of Arrests vs Warnings",
        sql: "SELECT stop_outcome, COUNT(*) FROM traffic_stops GROUP BY stop_outcome ORDER BY COUNT(*) DESC",
        chart: None,
    },
    QueryDef {
        label: "Average age of drivers stopped",
        sql: "SELECT AVG(driver_age) FROM traffic_stops WHERE driver_age IS NOT NULL",
        chart: None,
    },
    QueryDef {
        label: "Top 5 most frequest search Types",
        sql: "SELECT search_type, COUNT(*) FROM traffic_stops GROUP BY search_type ORDER BY COUNT(*) DESC LIMIT 5",
        chart: None,
    },
    QueryDef {
        label: "count of stops by Gender",
        sql: "SELECT driver_gender, COUNT(*) FROM traffic_stops GROUP BY driver_gender ORDER BY COUNT(*) DESC",
        chart: None,
    },
    QueryDef {
        label: "Most common Violation for Arrests",
        sql: "SELECT violation, COUNT(*) FROM traffic_stops WHERE stop_outcome LIKE '%arrest%' GROUP BY violation ORDER BY COUNT(*) DESC LIMIT 1",
        chart: None,
    },
    QueryDef {
        label: "Arrest Rate by Driver Age Group",
        sql: r"
            SELECT
                CASE
                    WHEN driver_age BETWEEN 0 AND 19 THEN '0-19'
                    WHEN driver_age BETWEEN 20 AND 29 THEN '20-29'
                    WHEN driver_age BETWEEN 30 AND 39 THEN '30-39'
                    WHEN driver_age BETWEEN 40 AND 49 THEN '40-49'
                    WHEN driver_age BETWEEN 50 AND 59 THEN '50-59'
                    WHEN driver_age >= 60 THEN '60+'
                    ELSE 'Unknown'
                END AS age_group,
                CAST(COUNT(CASE WHEN stop_outcome LIKE '%arrest%' THEN 1 END) AS REAL) * 100.0 / COUNT(*) AS arrest_rate_percentage
            FROM traffic_stops
            WHERE driver_age IS NOT NULL
            GROUP BY age_group
            ORDER BY arrest_rate_percentage DESC
        ",
        chart: Some(ChartSpec {
            title: "Arrest Rate by Driver Age Group",
            x: "age_group",
            y: "arrest_rate_percentage",
        }),
    },
    QueryDef {
        label: "Search Rate by Race and Gender Combination",
        sql: r"
            SELECT
                COALESCE(driver_race, 'Unknown') AS driver_race,
                COALESCE(driver_gender, 'Unknown') AS driver_gender,
                CAST(COUNT(CASE WHEN search_conducted = TRUE THEN 1 END) AS REAL) * 100.0 / COUNT(*) AS search_rate_percentage
            FROM traffic_stops
            WHERE driver_race IS NOT NULL AND driver_gender IS NOT NULL
            GROUP BY driver_race, driver_gender
            ORDER BY search_rate_percentage DESC
        ",
        chart: None,
    },
];

/// Resolve a selector: a 1-based index, or a label (exact match first,
/// then case-insensitive).
pub fn find_query(selector: &str) -> AppResult<&'static QueryDef> {
    let sel = selector.trim();

    if let Ok(n) = sel.parse::<usize>()
        && (1..=QUERY_MAP.len()).contains(&n)
    {
        return Ok(&QUERY_MAP[n - 1]);
    }

    QUERY_MAP
        .iter()
        .find(|q| q.label == sel)
        .or_else(|| QUERY_MAP.iter().find(|q| q.label.eq_ignore_ascii_case(sel)))
        .ok_or_else(|| AppError::UnknownQuery {
            label: sel.to_string(),
            available: list_labels(),
        })
}

pub fn list_labels() -> String {
    QUERY_MAP
        .iter()
        .enumerate()
        .map(|(i, q)| format!("  {:>2}. {}", i + 1, q.label))
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct QueryLogic;

impl QueryLogic {
    pub fn print_menu() {
        header("Medium level queries");
        println!("{}", list_labels());
    }

    /// Run one query and render its result. Returns the result for export.
    pub fn run(db_path: &str, selector: &str) -> AppResult<QueryResult> {
        let def = find_query(selector)?;

        header("Medium level queries");
        let result = fetch_data(db_path, def.sql);

        if result.is_empty() {
            warning(
                "No results found for the selected query. Please ensure the necessary columns exist in your 'traffic_stops' table.",
            );
            info(
                "Note: Queries for 'driver_age', 'driver_race', 'search_conducted', 'search_type' and 'stop_outcome' require these columns to be present in your 'traffic_stops' table.",
            );
            return Ok(result);
        }

        subheader(format!("Results for: {}", def.label));
        print!("{}", Table::from_result(&result).render());

        if let Some(chart) = def.chart
            && let Some(series) = series_for_chart(&result, chart.x, chart.y)
        {
            println!();
            print!("{}", bar_chart(chart.title, &series));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_map_has_nine_unique_labels() {
        assert_eq!(QUERY_MAP.len(), 9);
        let mut labels: Vec<_> = QUERY_MAP.iter().map(|q| q.label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 9);
    }

    #[test]
    fn every_query_reads_traffic_stops() {
        for q in QUERY_MAP {
            assert!(q.sql.contains("FROM traffic_stops"), "{}", q.label);
        }
    }

    #[test]
    fn selectors_by_index_and_label() {
        assert_eq!(find_query("1").unwrap().label, "Total Number of police stops");
        assert_eq!(
            find_query("count of stops by gender").unwrap().label,
            "count of stops by Gender"
        );
        assert!(matches!(find_query("0"), Err(AppError::UnknownQuery { .. })));
        assert!(matches!(find_query("10"), Err(AppError::UnknownQuery { .. })));
    }

    #[test]
    fn only_age_group_query_has_chart() {
        let charted: Vec<_> = QUERY_MAP.iter().filter(|q| q.chart.is_some()).collect();
        assert_eq!(charted.len(), 1);
        assert_eq!(charted[0].label, "Arrest Rate by Driver Age Group");
    }
}
