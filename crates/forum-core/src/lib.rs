//! # forum-core
//!
//! Core crate for the forum notification service. Contains configuration
//! schemas and the unified error system shared by the token issuer, the
//! broker gateway, and the HTTP layer.
//!
//! This crate has **no** internal dependencies on other forum crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
