/// Image repository - database operations for image metadata
use sqlx::PgPool;

use crate::error::Result;
use crate::models::ImageRecord;

pub async fn insert_image(pool: &PgPool, image: &ImageRecord) -> Result<()> {
    sqlx::query("INSERT INTO img (file_name, content_type, size) VALUES ($1, $2, $3)")
        .bind(&image.file_name)
        .bind(&image.content_type)
        .bind(image.size)
        .execute(pool)
        .await?;
    Ok(())
}
