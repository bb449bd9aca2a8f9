//! Subcommand implementations.

pub mod clients;
