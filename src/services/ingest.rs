/// Image ingestion: content sniffing, hash naming, and disk storage
///
/// Uploads are validated against a fixed allow-list (JPEG, PNG, GIF) by
/// inspecting leading bytes, never by trusting client-supplied metadata.
/// Stored names are derived from the content hash so duplicate uploads
/// land on the same file.
use std::path::{Path, PathBuf};

use image::ImageFormat;
use mime::Mime;
use sha1::{Digest, Sha1};

/// Maximum accepted upload size in bytes.
pub const MAX_UPLOAD_BYTES: usize = 8_000_000;

/// Number of leading bytes inspected for content sniffing.
pub const SNIFF_LEN: usize = 512;

/// Sniff the content type from the leading bytes of an upload.
///
/// Returns the MIME type only when the bytes carry a JPEG, PNG, or GIF
/// signature; everything else (including an empty buffer) is rejected.
pub fn sniff_content_type(bytes: &[u8]) -> Option<Mime> {
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    match image::guess_format(head).ok()? {
        ImageFormat::Jpeg => Some(mime::IMAGE_JPEG),
        ImageFormat::Png => Some(mime::IMAGE_PNG),
        ImageFormat::Gif => Some(mime::IMAGE_GIF),
        _ => None,
    }
}

/// Extension of the original filename: substring after the last dot,
/// empty when the name has no dot.
pub fn file_extension(original: &str) -> &str {
    original.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}

/// Derive the stored file name: hex(SHA-1(bytes)) plus the original
/// extension. Filenames without an extension get the bare digest.
pub fn stored_file_name(bytes: &[u8], original: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    let digest = hex::encode(hasher.finalize());
    match file_extension(original) {
        "" => digest,
        ext => format!("{digest}.{ext}"),
    }
}

/// Filesystem storage for accepted images.
///
/// Writes are plain overwrites: a duplicate upload (or a hash collision)
/// replaces the existing file without error.
#[derive(Clone, Debug)]
pub struct ImageStorage {
    root: PathBuf,
}

impl ImageStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the storage directory if it does not exist yet.
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Write image bytes under the given name, overwriting any existing file.
    pub async fn write(&self, file_name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.root.join(file_name);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }
}
