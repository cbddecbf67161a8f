//! Shared handler utilities

pub mod error;

pub use error::{handle_domain_error, ApiError};
