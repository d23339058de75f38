//! Shared utilities

pub mod command;
pub mod workdir;
