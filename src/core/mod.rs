//! Core Module
//!
//! Configuration, shared server state and HTTP server assembly.

pub mod config;
pub mod server;
pub mod state;

pub use config::{Config, StorageBackend};
pub use server::{build_router, Server};
pub use state::ServerState;
