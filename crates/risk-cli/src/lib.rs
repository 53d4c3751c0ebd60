//! CLI library components for the credit default risk scorer.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
