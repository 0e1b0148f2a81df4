use crate::errors::AppResult;
use crate::models::query_result::QueryResult;
use regex::{Regex, RegexBuilder};

/// Headline figures of the records view. `None` means the column the
/// figure depends on is absent from the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub total_stops: usize,
    pub total_vehicles: Option<usize>,
    pub arrests: Option<usize>,
    pub warnings: Option<usize>,
}

fn contains_ci(needle: &str) -> AppResult<Regex> {
    Ok(RegexBuilder::new(needle).case_insensitive(true).build()?)
}

impl Metrics {
    pub fn compute(data: &QueryResult) -> AppResult<Self> {
        let arrest = contains_ci("arrest")?;
        let warning = contains_ci("warning")?;

        Ok(Self {
            total_stops: data.len(),
            total_vehicles: data.distinct_count("vehicle_number"),
            arrests: data.count_matching("stop_outcome", &arrest),
            warnings: data.count_matching("stop_outcome", &warning),
        })
    }
}

/// Value counts of `column` as chart input.
pub fn counts_for_chart(data: &QueryResult, column: &str) -> Option<Vec<(String, f64)>> {
    data.value_counts(column)
        .map(|counts| counts.into_iter().map(|(k, n)| (k, n as f64)).collect())
}

/// `(x, y)` pairs from two columns; rows whose y is not numeric are skipped.
pub fn series_for_chart(data: &QueryResult, x: &str, y: &str) -> Option<Vec<(String, f64)>> {
    let xi = data.column_index(x)?;
    let yi = data.column_index(y)?;
    Some(
        data.rows
            .iter()
            .filter_map(|row| {
                let value = row.get(yi)?.as_f64()?;
                Some((row.get(xi)?.to_string(), value))
            })
            .collect(),
    )
}
