//! Shared primitives for the gradestat crates.
//!
//! `gradestat-core` holds what every other crate in the workspace builds on:
//!
//! - **Error types**: [`GradestatError`] and [`Result`] for structured error handling
//! - **Traits**: [`Summarizable`] for one-line summaries of computed results

pub mod error;
pub mod traits;

pub use error::{GradestatError, Result};
pub use traits::*;
