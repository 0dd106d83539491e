//! Core module - server configuration, state and lifecycle
//!
//! # Module structure
//!
//! - [`Config`] - environment-driven configuration
//! - [`AppState`] - shared application state
//! - [`Server`] - HTTP server and background workers

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::{AppState, Channels};
