pub mod models;
pub mod parser;

pub use models::{ProjectedRecord, TableRecord};
pub use parser::{load_table, TableError, EXPECTED_TEAMS};
