//! Attachment ingestion: reading a user-selected file and producing the
//! transportable form the translation core consumes.
//!
//! Images are base64-encoded; text files are read as UTF-8. The core never
//! touches raw files itself.

use anyhow::{Context, Result, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::fs;
use std::path::Path;

/// Attachments larger than this are rejected up front rather than shipped
/// to the API.
pub const MAX_ATTACHMENT_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Broad classification driving how the payload is embedded in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Text,
}

/// A user-supplied file, ready to attach to a translation request.
///
/// `content` is base64 for images and decoded text for text files. Never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub name: String,
    pub mime_type: String,
    pub content: String,
}

impl Attachment {
    /// Ingests a file from disk, classifying it by extension.
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported file types, files over
    /// [`MAX_ATTACHMENT_SIZE`], unreadable files, and text files that are
    /// not valid UTF-8.
    pub fn from_path(path: &str) -> Result<Self> {
        let (kind, mime_type) = classify(path)?;

        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > MAX_ATTACHMENT_SIZE {
            bail!(
                "Attachment size ({:.1} MB) exceeds maximum allowed size (10 MB): {path}",
                size as f64 / 1024.0 / 1024.0
            );
        }

        let name = Path::new(path)
            .file_name()
            .map_or_else(|| path.to_string(), |name| name.to_string_lossy().into_owned());

        let content = match kind {
            AttachmentKind::Image => {
                let bytes =
                    fs::read(path).with_context(|| format!("Failed to read file: {path}"))?;
                BASE64.encode(bytes)
            }
            AttachmentKind::Text => fs::read_to_string(path)
                .with_context(|| format!("Failed to read file as UTF-8 text: {path}"))?,
        };

        Ok(Self {
            kind,
            name,
            mime_type: mime_type.to_string(),
            content,
        })
    }

    /// Builds an image attachment from an already-encoded `data:` URL,
    /// stripping the prefix so only the base64 payload travels.
    ///
    /// # Errors
    ///
    /// Returns an error when the string is not a base64 image `data:` URL.
    pub fn from_data_url(name: &str, url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix("data:")
            .with_context(|| format!("Not a data URL: {name}"))?;

        let (mime_type, payload) = rest
            .split_once(";base64,")
            .with_context(|| format!("Data URL is not base64-encoded: {name}"))?;

        if !mime_type.starts_with("image/") {
            bail!("Only image data URLs are supported: {name}");
        }

        Ok(Self {
            kind: AttachmentKind::Image,
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            content: payload.to_string(),
        })
    }
}

/// Maps a file extension to kind + declared media type.
fn classify(path: &str) -> Result<(AttachmentKind, &'static str)> {
    let extension = Path::new(path)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let classified = match extension.as_str() {
        "png" => (AttachmentKind::Image, "image/png"),
        "jpg" | "jpeg" => (AttachmentKind::Image, "image/jpeg"),
        "gif" => (AttachmentKind::Image, "image/gif"),
        "webp" => (AttachmentKind::Image, "image/webp"),
        "bmp" => (AttachmentKind::Image, "image/bmp"),
        "txt" => (AttachmentKind::Text, "text/plain"),
        _ => bail!(
            "Unsupported attachment type: {path}\n\n\
             Supported: images (png, jpg, jpeg, gif, webp, bmp) and plain text (.txt)"
        ),
    };

    Ok(classified)
}
