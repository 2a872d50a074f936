//! Command-line interface for the qpath binary

pub mod commands;
pub mod output;
