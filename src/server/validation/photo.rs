use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use crate::server::{
    model::student::{PhotoUpload, ValidatedPhoto},
    validation::ValidationErrors,
};

/// Largest accepted upload, 1024 kilobytes.
pub const MAX_PHOTO_BYTES: usize = 1024 * 1024;
/// Smallest accepted width and height in pixels.
pub const MIN_PHOTO_DIMENSION: u32 = 100;
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Checks an uploaded photo: it must decode as an image, be a JPEG or PNG, fit in
/// [`MAX_PHOTO_BYTES`] and be at least [`MIN_PHOTO_DIMENSION`] pixels on each side.
///
/// The format is detected from the file contents, the client's filename only decides which of
/// the equivalent extensions (`jpg` or `jpeg`) is kept.
pub fn validate_photo(
    errors: &mut ValidationErrors,
    field: &str,
    upload: PhotoUpload,
) -> Option<ValidatedPhoto> {
    let before = errors.len();

    let format = match image::guess_format(&upload.bytes) {
        Ok(format) => format,
        Err(_) => {
            errors.add(field, format!("The {} field must be an image.", field));
            return None;
        }
    };

    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        errors.add(
            field,
            format!(
                "The {} field must be a file of type: {}.",
                field,
                ALLOWED_EXTENSIONS.join(", ")
            ),
        );
    }

    if upload.bytes.len() > MAX_PHOTO_BYTES {
        errors.add(
            field,
            format!(
                "The {} field must not be greater than {} kilobytes.",
                field,
                MAX_PHOTO_BYTES / 1024
            ),
        );
    }

    let (width, height) = match ImageReader::with_format(Cursor::new(&upload.bytes), format)
        .into_dimensions()
    {
        Ok(dimensions) => dimensions,
        Err(_) => {
            errors.add(field, format!("The {} field must be an image.", field));
            return None;
        }
    };

    if width < MIN_PHOTO_DIMENSION || height < MIN_PHOTO_DIMENSION {
        errors.add(
            field,
            format!("The {} field has invalid image dimensions.", field),
        );
    }

    if errors.len() != before {
        return None;
    }

    let extension = extension_for(format, upload.file_name.as_deref());

    Some(ValidatedPhoto {
        bytes: upload.bytes,
        extension,
        width,
        height,
    })
}

fn extension_for(format: ImageFormat, file_name: Option<&str>) -> String {
    let client_extension = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match (format, client_extension.as_deref()) {
        (ImageFormat::Jpeg, Some("jpeg")) => "jpeg".to_string(),
        (ImageFormat::Jpeg, _) => "jpg".to_string(),
        _ => "png".to_string(),
    }
}
