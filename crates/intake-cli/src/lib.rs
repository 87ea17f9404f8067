//! intake-cli
//!
//! Command-line front end for the intake questionnaire: prints templates,
//! validates saved documents step by step, walks the gate, and submits to
//! the in-memory record store.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
