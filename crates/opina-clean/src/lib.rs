//! Cleaning stages for raw comment tables.
//!
//! Takes a freshly loaded raw table through three stages:
//!
//! 1. **Reconcile**: map heterogeneous source columns onto the
//!    canonical schema (alias tables, identity merge, allow-list
//!    projection)
//! 2. **Normalize**: lowercase/trim/alphabet-restrict every cell,
//!    correct known country aliases
//! 3. **Filter**: drop rows with empty required fields, then exact
//!    duplicates (stable)
//!
//! All rules live in [`CleanConfig`], built once and passed into each
//! stage.

mod error;
mod filter;
mod normalize;
mod reconcile;
mod rules;

pub use error::{CleanError, Result};
pub use filter::{FilterReport, filter_rows};
pub use normalize::{normalize_table, normalize_value};
pub use reconcile::reconcile;
pub use rules::{CleanConfig, ReconcileRules};
