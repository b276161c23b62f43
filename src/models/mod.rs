/// Data models for the image service

/// Metadata recorded for every stored image.
///
/// `file_name` is content-derived (SHA-1 hex plus the original extension),
/// so re-uploading identical bytes yields the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub file_name: String,
    pub content_type: String,
    pub size: i64,
}
