//! rbj-eq CLI library.
//!
//! This crate provides the command implementations behind the `rbj-eq`
//! binary: argument parsing, test signal generation, and the `sweep`,
//! `transfer` and `coeffs` commands.

pub mod cli_args;
pub mod commands;
pub mod signal;
