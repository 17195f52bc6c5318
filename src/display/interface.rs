use crate::file_reader::interface::PreviewImage;
use crate::upload_predict::core::Event;
use std::error::Error;
use std::sync::mpsc::Sender;

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub label: String,
    pub enabled: bool,
    pub offset_x: f32,
    pub scale: f32,
    pub error_highlight: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadContainerView {
    pub has_file: bool,
    pub pulse_scale: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    pub image: PreviewImage,
    pub scale: f32,
    pub offset_y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub label: String,
    pub percent: String,
    pub top: bool,
    pub offset_y: f32,
    /// Bar width in percent, always within `0..=100`.
    pub progress_width: f32,
    /// Where the bar settles once animation ends.
    pub target_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Hidden,
    Predictions { offset_y: f32, cards: Vec<CardView> },
    Error { message: String, scale: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoticeView {
    pub message: String,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactView {
    pub name: String,
    pub email: String,
    pub message: String,
    pub field_offsets: [f32; 3],
    pub submit_scale: f32,
    pub notice: Option<NoticeView>,
}

/// Everything a display needs to draw one frame of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub navbar_offset_y: f32,
    pub main_offset_y: f32,
    pub upload_button: ButtonView,
    pub predict_button: ButtonView,
    pub upload_container: UploadContainerView,
    pub preview: Option<PreviewView>,
    pub results: ResultsView,
    /// Bumped each time the results region should be scrolled into view.
    pub scroll_generation: u64,
    pub contact: ContactView,
}

pub trait Display: Send + Sync {
    /// Called once before the first frame. User gestures go to `events`.
    fn init(&mut self, events: Sender<Event>) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn show(&mut self, page: &Page) -> Result<(), Box<dyn Error + Send + Sync>>;
}
