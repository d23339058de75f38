//! Ansible Content Parser Library
//!
//! This crate scans an Ansible source repository (local path or remote URL)
//! through a sequence of independent analysis stages - static lint, semantic
//! enrichment, and report synthesis - and produces a consolidated report
//! under an output directory. The stages communicate only through named
//! artifact files; the external tools behind each stage sit behind the
//! capability traits in [`stages`].

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod stages;
pub mod utils;

pub use cli::exit_codes;
pub use error::ParserError;
