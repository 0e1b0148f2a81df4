pub mod officer;
pub mod query_result;
pub mod stop_entry;
pub mod stop_record;
