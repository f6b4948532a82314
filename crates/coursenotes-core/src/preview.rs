//! Local image preview for the upload form.
//!
//! A selection starts an asynchronous read; the bytes come back later and are
//! turned into a `data:` URL. Each selection takes a fresh token and only the
//! newest token may replace the preview, so a slow read that finishes after a
//! later selection is dropped instead of overwriting it.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;

use crate::{Error, Result};

/// Images above this size are not inlined as data URLs.
pub const MAX_PREVIEW_BYTES: usize = 8 * 1024 * 1024;

/// Class carried by the preview element.
pub const PREVIEW_CLASS: &str = "image-preview";

/// Global rule for preview thumbnails, injected once per page.
pub const PREVIEW_STYLESHEET: &str = "
.image-preview {
    max-width: 200px;
    max-height: 200px;
    margin-top: 10px;
    border-radius: 4px;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewToken(u64);

/// A rendered thumbnail source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub file_name: String,
    pub mime_type: String,
    pub data_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePreview {
    last_token: u64,
    pending: Option<PreviewToken>,
    image: Option<PreviewImage>,
}

impl ImagePreview {
    /// Register a change of the file input.
    ///
    /// `first_file` is the name of the first selected file. With no file
    /// selected nothing changes and no read should be started.
    pub fn begin_read(&mut self, first_file: Option<&str>) -> Option<PreviewToken> {
        let file_name = first_file?;

        self.last_token += 1;
        let token = PreviewToken(self.last_token);
        if let Some(previous) = self.pending.replace(token) {
            tracing::debug!(
                "Selection of {} supersedes pending preview read {}",
                file_name,
                previous.0
            );
        }
        Some(token)
    }

    /// Apply the bytes of a finished read.
    ///
    /// Returns `Ok(true)` when the preview was replaced and `Ok(false)` when
    /// the read was superseded by a newer selection. A selection that cannot
    /// be previewed clears the previous thumbnail.
    pub fn complete_read(
        &mut self,
        token: PreviewToken,
        file_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<bool> {
        if self.pending != Some(token) {
            tracing::debug!("Dropping stale preview read for {}", file_name);
            return Ok(false);
        }
        self.pending = None;

        match build_preview_image(file_name, content_type, bytes) {
            Ok(image) => {
                self.image = Some(image);
                Ok(true)
            }
            Err(error) => {
                self.image = None;
                Err(error)
            }
        }
    }

    /// A read failed. The current preview stays as it is.
    pub fn fail_read(&mut self, token: PreviewToken, reason: &str) {
        if self.pending != Some(token) {
            return;
        }
        self.pending = None;
        tracing::warn!("Failed to read selected image: {}", reason);
    }

    pub fn image(&self) -> Option<&PreviewImage> {
        self.image.as_ref()
    }

    pub const fn is_reading(&self) -> bool {
        self.pending.is_some()
    }
}

/// Encode image bytes into a preview.
pub fn build_preview_image(
    file_name: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<PreviewImage> {
    let mime_type = infer_mime_type(content_type, file_name);
    if !mime_type.starts_with("image/") {
        return Err(Error::InvalidInput(format!(
            "{file_name} is not an image ({mime_type})"
        )));
    }
    if bytes.len() > MAX_PREVIEW_BYTES {
        return Err(Error::InvalidInput(format!(
            "{file_name} is too large to preview ({} bytes)",
            bytes.len()
        )));
    }

    let encoded = BASE64_STANDARD.encode(bytes);
    Ok(PreviewImage {
        file_name: file_name.to_string(),
        data_url: format!("data:{mime_type};base64,{encoded}"),
        mime_type,
    })
}

/// Prefer the reported content type, fall back to the file extension.
pub fn infer_mime_type(content_type: Option<&str>, file_name: &str) -> String {
    if let Some(content_type) = content_type {
        let trimmed = content_type.trim();
        if !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("application/octet-stream") {
            return trimmed.to_string();
        }
    }

    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
