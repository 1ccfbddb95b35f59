//! Library surface of the `opina` CLI: argument types, logging setup,
//! and the staged cleaning pipeline, exposed for integration tests.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipeline;
pub mod summary;
