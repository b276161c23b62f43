/// Business logic services
pub mod ingest;

pub use ingest::{ImageStorage, MAX_UPLOAD_BYTES};
