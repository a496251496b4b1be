//! HTTP API module.
//!
//! Axum adapter around the upload pipeline, plus the log stream.

pub mod logs;
pub mod server;
pub mod types;

pub use logs::*;
pub use server::{build_router, start_server, AppState};
pub use types::*;
