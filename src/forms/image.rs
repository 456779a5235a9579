//! Product Images

use std::{fs, io, path::Path};

use thiserror::Error;

/// Largest accepted image, 5 MB.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Image rule failures.
#[derive(Debug, Error)]
pub enum ImageError {
    /// No image was attached.
    #[error("Please upload a product image")]
    Missing,

    /// The MIME type is not `image/*`.
    #[error("Please upload an image file")]
    NotAnImage(String),

    /// The image exceeds [`MAX_IMAGE_BYTES`].
    #[error("Image must be smaller than 5MB")]
    TooLarge(u64),

    /// The image file could not be read.
    #[error("failed to read image: {0}")]
    Read(#[from] io::Error),
}

/// Image attached to a create or edit submission.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// File name sent with the multipart part
    pub file_name: String,

    /// MIME type
    pub content_type: String,

    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageUpload {
    /// Read an image from disk, deriving its MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::TooLarge`] when the file exceeds
    /// [`MAX_IMAGE_BYTES`], checked before its contents are loaded, or
    /// [`ImageError::Read`] when the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, ImageError> {
        let size = fs::metadata(path)?.len();

        if size > MAX_IMAGE_BYTES {
            return Err(ImageError::TooLarge(size));
        }

        let bytes = fs::read(path)?;

        let file_name = path
            .file_name()
            .map_or_else(|| "image".to_string(), |name| name.to_string_lossy().into_owned());

        let content_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or("application/octet-stream", content_type_for);

        Ok(Self {
            file_name,
            content_type: content_type.to_string(),
            bytes,
        })
    }

    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        u64::try_from(self.bytes.len()).unwrap_or(u64::MAX)
    }

    /// Apply the type and size rules.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::NotAnImage`] or [`ImageError::TooLarge`].
    pub fn check(&self) -> Result<(), ImageError> {
        if !self.content_type.starts_with("image/") {
            return Err(ImageError::NotAnImage(self.content_type.clone()));
        }

        let size = self.size();

        if size > MAX_IMAGE_BYTES {
            return Err(ImageError::TooLarge(size));
        }

        Ok(())
    }
}

/// MIME type for a file extension.
#[must_use]
pub fn content_type_for(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn upload(content_type: &str, len: usize) -> ImageUpload {
        ImageUpload {
            file_name: "bottle.png".to_string(),
            content_type: content_type.to_string(),
            bytes: vec![0; len],
        }
    }

    #[test]
    fn accepts_image_at_size_limit() -> TestResult {
        let limit = usize::try_from(MAX_IMAGE_BYTES)?;

        upload("image/png", limit).check()?;

        Ok(())
    }

    #[test]
    fn rejects_image_over_size_limit() -> TestResult {
        let limit = usize::try_from(MAX_IMAGE_BYTES)?;

        let result = upload("image/png", limit + 1).check();

        assert!(
            matches!(result, Err(ImageError::TooLarge(size)) if size == MAX_IMAGE_BYTES + 1),
            "expected TooLarge, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn rejects_non_image_content_type() {
        let result = upload("application/pdf", 10).check();

        assert!(
            matches!(result, Err(ImageError::NotAnImage(_))),
            "expected NotAnImage, got {result:?}"
        );
        assert_eq!(
            ImageError::NotAnImage(String::new()).to_string(),
            "Please upload an image file"
        );
    }

    #[test]
    fn maps_extensions_to_mime_types() {
        assert_eq!(content_type_for("JPG"), "image/jpeg");
        assert_eq!(content_type_for("svg"), "image/svg+xml");
        assert_eq!(content_type_for("txt"), "application/octet-stream");
    }

    #[test]
    fn oversized_file_is_rejected_before_reading() -> TestResult {
        let path = std::env::temp_dir()
            .join(format!("prodsnap-oversized-{}.png", std::process::id()));

        fs::File::create(&path)?.set_len(MAX_IMAGE_BYTES + 1)?;

        let result = ImageUpload::from_path(&path);

        fs::remove_file(&path)?;

        assert!(
            matches!(result, Err(ImageError::TooLarge(size)) if size == MAX_IMAGE_BYTES + 1),
            "expected TooLarge, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = ImageUpload::from_path(Path::new("/nonexistent/bottle.png"));

        assert!(
            matches!(result, Err(ImageError::Read(_))),
            "expected Read, got {result:?}"
        );
    }
}
