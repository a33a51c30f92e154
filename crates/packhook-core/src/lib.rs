//! # packhook-core
//!
//! Core crate for packhook. Contains the configuration schema and the
//! unified error system shared by the host and its plugins.
//!
//! This crate has **no** internal dependencies on other packhook crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
