//! Statbot backend: credential and email-generation proxy.
pub mod config;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use server::{build_router, run, AppState};
