//! Data model for the comment-cleaning pipeline.
//!
//! Defines the canonical output schema and the string `Table` that
//! flows through every stage, from raw ingest to persisted CSV.

pub mod schema;
pub mod table;

pub use table::{CommentRecord, Table};
