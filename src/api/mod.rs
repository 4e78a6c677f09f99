//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`products`] - catalog products (listing, CRUD, bulk delete)
//! - [`categories`] - category CRUD
//! - [`clients`] - client logo wall CRUD
//! - [`gallery`] - gallery CRUD
//! - [`services`] - service offering CRUD
//! - [`testimonials`] - testimonial CRUD
//! - [`enquiries`] - enquiry intake and administration
//! - [`content`] - page content blobs
//! - [`stats`] - catalog roll-up

pub mod health;

pub mod categories;
pub mod clients;
pub mod content;
pub mod enquiries;
pub mod gallery;
pub mod products;
pub mod services;
pub mod stats;
pub mod testimonials;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
