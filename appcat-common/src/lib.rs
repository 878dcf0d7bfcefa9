//! # appcat Common Library
//!
//! Shared code for the appcat workspace:
//! - Error type and `Result` alias
//! - Settings loading (threshold, HTTP client parameters)

pub mod config;
pub mod error;

pub use config::Settings;
pub use error::{Error, Result};
