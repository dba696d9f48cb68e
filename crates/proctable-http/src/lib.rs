//! Proctable HTTP - JSON endpoint for the process table.
//!
//! A thin Axum adapter around [`proctable_core::ProcessTable`]: every
//! request runs one acquisition pass and returns the records as a JSON
//! array.

pub mod config;
pub mod handler;
pub mod server;

pub use config::Args;
pub use server::{build_router, start_server, AppState};
