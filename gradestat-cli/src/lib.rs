//! Command-line front end for the gradestat statistics engine.
//!
//! The binary is a thin shell over [`commands::run`]: it reads a sample,
//! resolves configuration, calls into `gradestat-stats`, and renders the
//! result as text or as a JSON envelope.

pub mod cli;
pub mod commands;
pub mod config;
pub mod input;
pub mod logging;
pub mod output;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::GradestatConfig;
