use crate::display::interface::{Display, Page};
use crate::upload_predict::core::Event;
use std::error::Error;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

/// Keeps every page it is shown so tests can inspect them.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct DisplayFake {
    pages: Arc<Mutex<Vec<Page>>>,
}

#[allow(dead_code)]
impl DisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_page(&self) -> Option<Page> {
        self.pages.lock().ok()?.last().cloned()
    }
}

impl Display for DisplayFake {
    fn init(&mut self, _events: Sender<Event>) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn show(&mut self, page: &Page) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.pages
            .lock()
            .map_err(|e| e.to_string())?
            .push(page.clone());
        Ok(())
    }
}
