use crate::file_reader::interface::{FileReadError, FileReader, PreviewImage, SelectedFile};
use crate::library::logger::interface::Logger;
use base64::{engine::general_purpose, Engine as _};
use image::ImageFormat;
use std::sync::Arc;

pub struct FileReaderImage {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FileReaderImage {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("file_reader").with_namespace("image"),
        }
    }
}

impl FileReader for FileReaderImage {
    fn read(&self, file: &SelectedFile) -> Result<PreviewImage, FileReadError> {
        let _ = self.logger.info(&format!("Reading {}", file.path.display()));

        let bytes = std::fs::read(&file.path).map_err(|e| FileReadError::Io(e.to_string()))?;
        let preview = decode_preview(&bytes)?;

        let _ = self.logger.info(&format!(
            "Decoded {} ({}x{})",
            file.name, preview.width, preview.height
        ));

        Ok(preview)
    }
}

pub fn decode_preview(bytes: &[u8]) -> Result<PreviewImage, FileReadError> {
    let format = image::guess_format(bytes).map_err(|e| FileReadError::Decode(e.to_string()))?;
    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| FileReadError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();

    Ok(PreviewImage {
        data_uri: format!(
            "data:{};base64,{}",
            mime_type(format),
            general_purpose::STANDARD.encode(bytes)
        ),
        width: rgba.width(),
        height: rgba.height(),
        rgba: Arc::new(rgba.into_raw()),
    })
}

fn mime_type(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::Tiff => "image/tiff",
        ImageFormat::Ico => "image/x-icon",
        _ => "application/octet-stream",
    }
}
