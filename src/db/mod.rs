/// Persistence seam for image metadata
///
/// Handlers depend on the `ImageStore` trait rather than a concrete pool so
/// tests can substitute an in-memory recorder.
pub mod image_repo;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::ImageRecord;

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Record metadata for a stored image.
    async fn insert_image(&self, image: &ImageRecord) -> Result<()>;
}

/// Postgres-backed image store.
pub struct PgImageStore {
    pool: PgPool,
}

impl PgImageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageStore for PgImageStore {
    async fn insert_image(&self, image: &ImageRecord) -> Result<()> {
        image_repo::insert_image(&self.pool, image).await
    }
}
