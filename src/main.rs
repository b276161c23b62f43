/// Image Service - HTTP Server
///
/// Serves the upload form and the image ingestion endpoint.
use std::io;
use std::sync::Arc;

use actix_web::{middleware as actix_middleware, web, App, HttpServer};
use image_service::db::{ImageStore, PgImageStore};
use image_service::handlers;
use image_service::services::ImageStorage;
use image_service::templates::Templates;
use image_service::Config;
use sqlx::postgres::PgPoolOptions;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from environment
    let config = Config::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    // Initialize database connection pool
    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .map_err(|err| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("Failed to connect to database: {err}"),
            )
        })?;

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .map_err(|err| {
            io::Error::new(io::ErrorKind::Other, format!("Failed to run migrations: {err}"))
        })?;

    let storage = ImageStorage::new(&config.upload.storage_dir);
    storage.ensure_root().await?;

    let store: Arc<dyn ImageStore> = Arc::new(PgImageStore::new(db_pool));
    let templates = Templates::new();

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("image service listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(templates.clone()))
            .wrap(actix_middleware::Logger::default())
            .route("/health", web::get().to(handlers::health))
            .route("/", web::get().to(handlers::index))
            .route("/upload", web::post().to(handlers::upload))
    })
    .bind(&bind_address)?
    .run()
    .await
}
