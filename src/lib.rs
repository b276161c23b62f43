//! Image Service
//!
//! Accepts single-image multipart uploads, validates them against an auth
//! secret, size cap, and content-type allow-list, stores the bytes on disk
//! under a content-hash name, and records metadata in Postgres.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod templates;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};
