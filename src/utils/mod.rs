//! Utility Module
//!
//! Shared helpers: error types, result alias, logging, slugs, validation.

pub mod error;
pub mod logger;
pub mod result;
pub mod slug;
pub mod validation;

pub use error::{AppError, AppResponse};
pub use result::AppResult;
pub use slug::slugify;
