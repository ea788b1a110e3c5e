//! Input/output for airflow-network records.

mod records;

pub use records::{from_records_string, read_records_json, to_records_string, write_records_json};
