use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// A file the user picked. Bytes are read by whoever needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

impl SelectedFile {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Self { path, name }
    }
}

/// Decoded upload, ready to show.
#[derive(Clone, PartialEq)]
pub struct PreviewImage {
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Arc<Vec<u8>>,
}

impl fmt::Debug for PreviewImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data_uri_len", &self.data_uri.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileReadError {
    #[error("could not read file: {0}")]
    Io(String),
    #[error("could not decode image: {0}")]
    Decode(String),
}

pub trait FileReader {
    fn read(&self, file: &SelectedFile) -> Result<PreviewImage, FileReadError>;
}
