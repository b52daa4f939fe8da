//! Output of the country baseline dataset.
//!
//! The dataset is a JSON array of [`wdi_model::OutputRecord`] objects, one per
//! registry country, in registry order.

mod error;
mod json;

pub use error::{OutputError, Result};
pub use json::{load_records_by_id, read_records_json, to_json_bytes, write_records_json};
