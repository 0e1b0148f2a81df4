use crate::core::fetch::fetch_data;
use crate::models::query_result::QueryResult;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

pub struct CheckpostLogic;

impl CheckpostLogic {
    pub fn sql(limit: u32) -> String {
        format!("SELECT * FROM check_post_logs LIMIT {}", limit)
    }

    /// First `limit` rows written by the loader.
    pub fn show(db_path: &str, limit: u32) -> QueryResult {
        let data = fetch_data(db_path, &Self::sql(limit));

        header("Check post logs");
        if data.is_empty() {
            info("No check post records found. Run `securecheck seed` to load the sample data.");
        } else {
            print!("{}", Table::from_result(&data).render());
        }

        data
    }
}
