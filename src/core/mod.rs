//! Core utilities and common types for the SDK.

pub mod error;
pub mod logging;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
