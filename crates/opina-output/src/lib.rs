//! Persistence for the cleaned comment dataset.

mod csv_write;
mod error;

pub use csv_write::write_table;
pub use error::{OutputError, Result};
