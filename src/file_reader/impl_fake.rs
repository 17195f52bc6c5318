use crate::file_reader::interface::{FileReadError, FileReader, PreviewImage, SelectedFile};
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[allow(dead_code)]
pub struct FileReaderFake {
    fail: AtomicBool,
    logger: Arc<dyn Logger + Send + Sync>,
}

#[allow(dead_code)]
impl FileReaderFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            fail: AtomicBool::new(false),
            logger: logger.with_namespace("file_reader").with_namespace("fake"),
        }
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn preview() -> PreviewImage {
        PreviewImage {
            data_uri: "data:image/png;base64,AAAA".to_string(),
            width: 1,
            height: 1,
            rgba: Arc::new(vec![0, 128, 0, 255]),
        }
    }
}

impl FileReader for FileReaderFake {
    fn read(&self, file: &SelectedFile) -> Result<PreviewImage, FileReadError> {
        let _ = self.logger.info(&format!("Reading {}", file.name));

        if self.fail.load(Ordering::SeqCst) {
            return Err(FileReadError::Decode("fake decode failure".to_string()));
        }

        Ok(Self::preview())
    }
}
