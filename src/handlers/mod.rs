/// HTTP endpoints
pub mod pages;
pub mod upload;

pub use pages::{health, index};
pub use upload::upload;
