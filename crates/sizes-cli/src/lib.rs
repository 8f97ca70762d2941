//! CLI library components for the size sorter.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
