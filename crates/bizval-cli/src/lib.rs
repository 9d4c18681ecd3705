//! Command-line shell for the business valuation estimator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
