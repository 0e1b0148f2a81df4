pub mod backup;
pub mod checkpost;
pub mod entry;
pub mod fetch;
pub mod home;
pub mod log;
pub mod metrics;
pub mod query;
pub mod records;
pub mod seed;
