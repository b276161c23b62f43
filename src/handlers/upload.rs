/// Upload handler - validates and ingests a single image upload
///
/// The request is a multipart form with an `auth` field and an `upload`
/// file field. Policy checks run in order (auth, size, content type) and
/// each failure is a bare 403. Past the checks, disk and database faults
/// are logged but the client still sees 200; the one file write and one
/// metadata insert are best-effort.
use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;

use crate::config::Config;
use crate::db::ImageStore;
use crate::error::{AppError, Result};
use crate::models::ImageRecord;
use crate::services::ingest::{self, ImageStorage, MAX_UPLOAD_BYTES};

pub async fn upload(
    config: web::Data<Config>,
    storage: web::Data<ImageStorage>,
    store: web::Data<Arc<dyn ImageStore>>,
    mut payload: Multipart,
) -> Result<HttpResponse> {
    let mut auth_token: Option<String> = None;
    let mut original_name: Option<String> = None;
    let mut file_bytes: Vec<u8> = Vec::new();
    let mut file_size: usize = 0;

    // Drain the form. Transport read errors are logged and the request
    // continues with whatever was received; the policy checks below reject
    // anything incomplete.
    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(err) => {
                tracing::error!("multipart read error: {}", err);
                break;
            }
        };

        match field.name() {
            "auth" => {
                let mut value = Vec::new();
                while let Some(chunk) = field.next().await {
                    match chunk {
                        Ok(data) => value.extend_from_slice(&data),
                        Err(err) => {
                            tracing::error!("auth field read error: {}", err);
                            break;
                        }
                    }
                }
                auth_token = Some(String::from_utf8_lossy(&value).into_owned());
            }
            "upload" => {
                original_name = field
                    .content_disposition()
                    .get_filename()
                    .map(|name| name.to_string());
                while let Some(chunk) = field.next().await {
                    match chunk {
                        Ok(data) => {
                            file_size += data.len();
                            // Stop buffering once past the cap; the running
                            // total is all the size check needs.
                            if file_bytes.len() <= MAX_UPLOAD_BYTES {
                                file_bytes.extend_from_slice(&data);
                            }
                        }
                        Err(err) => {
                            tracing::error!("upload field read error: {}", err);
                            break;
                        }
                    }
                }
            }
            _ => {}
        }
    }

    // Policy checks, in order. No side effects before all three pass.
    if auth_token.as_deref() != Some(config.upload.auth_secret.as_str()) {
        return Err(AppError::Forbidden);
    }

    if file_size > MAX_UPLOAD_BYTES {
        return Err(AppError::Forbidden);
    }

    let content_type = match ingest::sniff_content_type(&file_bytes) {
        Some(mime) => mime,
        None => return Err(AppError::Forbidden),
    };

    let stored_name =
        ingest::stored_file_name(&file_bytes, original_name.as_deref().unwrap_or(""));

    if let Err(err) = storage.write(&stored_name, &file_bytes).await {
        let err = AppError::from(err);
        tracing::error!(file = %stored_name, "failed to write image to disk: {}", err);
        return Ok(HttpResponse::Ok().finish());
    }

    let record = ImageRecord {
        file_name: stored_name.clone(),
        content_type: content_type.to_string(),
        size: file_size as i64,
    };
    if let Err(err) = store.insert_image(&record).await {
        tracing::error!(file = %stored_name, "failed to persist image metadata: {}", err);
    }

    Ok(HttpResponse::Ok().finish())
}
