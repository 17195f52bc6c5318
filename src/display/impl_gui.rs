use crate::display::interface::{Display, Page, ResultsView};
use crate::file_reader::interface::PreviewImage;
use crate::library::logger::interface::Logger;
use crate::upload_predict::core::{ContactField, Event};
use eframe::egui;
use std::error::Error;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 107, 107);
const PREDICT_COLOR: egui::Color32 = egui::Color32::from_rgb(25, 135, 84);
const SUBMIT_COLOR: egui::Color32 = egui::Color32::from_rgb(13, 110, 253);
const TOP_COLOR: egui::Color32 = egui::Color32::from_rgb(209, 231, 221);
const PREVIEW_MAX_SIDE: f32 = 280.0;

struct PageWindow {
    page: Arc<Mutex<Option<Page>>>,
    events: Sender<Event>,
    path_input: String,
    texture: Option<(String, egui::TextureHandle)>,
    last_scroll: u64,
}

impl PageWindow {
    fn send(&self, event: Event) {
        let _ = self.events.send(event);
    }

    fn texture(&mut self, ctx: &egui::Context, image: &PreviewImage) -> egui::TextureHandle {
        if let Some((uri, texture)) = &self.texture {
            if *uri == image.data_uri {
                return texture.clone();
            }
        }

        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [image.width as usize, image.height as usize],
            &image.rgba,
        );
        let texture = ctx.load_texture("preview", color_image, egui::TextureOptions::default());
        self.texture = Some((image.data_uri.clone(), texture.clone()));
        texture
    }

    fn upload_section(&mut self, ui: &mut egui::Ui, page: &Page) {
        ui.add_space(page.main_offset_y.max(0.0));

        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut self.path_input).hint_text("path/to/leaf.jpg"));

            ui.add_space(5.0 + page.upload_button.offset_x);
            let mut upload = egui::Button::new(page.upload_button.label.as_str());
            if page.upload_button.error_highlight {
                upload = upload.stroke(egui::Stroke::new(2.0, ERROR_COLOR));
            }
            if ui.add_enabled(page.upload_button.enabled, upload).clicked() {
                let path = self.path_input.trim();
                let paths = if path.is_empty() {
                    vec![]
                } else {
                    vec![PathBuf::from(path)]
                };
                self.send(Event::FilesSelected(paths));
            }

            let predict = egui::Button::new(
                egui::RichText::new(page.predict_button.label.as_str())
                    .color(egui::Color32::WHITE)
                    .size(14.0 * page.predict_button.scale),
            )
            .fill(if page.predict_button.error_highlight {
                ERROR_COLOR
            } else {
                PREDICT_COLOR
            });
            if ui.add_enabled(page.predict_button.enabled, predict).clicked() {
                self.send(Event::PredictClicked);
            }
        });

        if let Some(preview) = &page.preview {
            let texture = self.texture(ui.ctx(), &preview.image);
            let (width, height) = (preview.image.width as f32, preview.image.height as f32);
            let fit = (PREVIEW_MAX_SIDE / width.max(height).max(1.0)).min(1.0);
            let size = egui::vec2(width, height) * fit * preview.scale;

            ui.add_space(5.0 + preview.offset_y);
            ui.image((texture.id(), size));
        } else if page.upload_container.has_file {
            ui.label("No preview");
        }

        if page.upload_container.pulse_scale != 1.0 {
            ui.ctx().request_repaint();
        }
    }

    fn results_section(&mut self, ui: &mut egui::Ui, page: &Page) {
        match &page.results {
            ResultsView::Hidden => {}
            ResultsView::Predictions { offset_y, cards } => {
                ui.add_space(offset_y.max(0.0));
                let heading = ui.heading("Results");
                if page.scroll_generation != self.last_scroll {
                    heading.scroll_to_me(Some(egui::Align::Min));
                    self.last_scroll = page.scroll_generation;
                }

                for card in cards {
                    ui.add_space(card.offset_y.max(0.0) / 3.0);
                    let fill = if card.top {
                        TOP_COLOR
                    } else {
                        ui.visuals().faint_bg_color
                    };
                    egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.strong(card.label.as_str());
                            ui.label(card.percent.as_str());
                        });
                        ui.add(egui::ProgressBar::new(card.progress_width / 100.0));
                    });
                }
            }
            ResultsView::Error { message, scale } => {
                ui.colored_label(
                    ERROR_COLOR,
                    egui::RichText::new(format!("⚠ {}", message)).size(14.0 * scale),
                );
            }
        }
    }

    fn contact_section(&mut self, ui: &mut egui::Ui, page: &Page) {
        ui.separator();
        ui.heading("Contact");

        let fields = [
            (ContactField::Name, "Name", &page.contact.name),
            (ContactField::Email, "Email", &page.contact.email),
            (ContactField::Message, "Message", &page.contact.message),
        ];

        for ((field, label, value), offset) in fields.into_iter().zip(page.contact.field_offsets) {
            ui.add_space(offset.max(0.0));
            let mut text = value.clone();
            ui.label(label);
            if ui.text_edit_singleline(&mut text).changed() {
                self.send(Event::ContactEdited { field, value: text });
            }
        }

        let submit = egui::Button::new(
            egui::RichText::new("Send Message")
                .color(egui::Color32::WHITE)
                .size(14.0 * page.contact.submit_scale),
        )
        .fill(SUBMIT_COLOR);
        if ui.add(submit).clicked() {
            self.send(Event::ContactSubmitted);
        }

        if let Some(notice) = &page.contact.notice {
            ui.colored_label(
                PREDICT_COLOR.gamma_multiply(notice.opacity.clamp(0.0, 1.0)),
                notice.message.as_str(),
            );
        }
    }
}

impl eframe::App for PageWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint_after(Duration::from_millis(16));

        let page = match self.page.lock() {
            Ok(page) => page.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        let Some(page) = page else {
            return;
        };

        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            ui.add_space(5.0 + page.navbar_offset_y);
            ui.heading("Leaf Scan");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.upload_section(ui, &page);
                self.results_section(ui, &page);
                self.contact_section(ui, &page);
            });
        });
    }
}

pub struct DisplayGui {
    page: Arc<Mutex<Option<Page>>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DisplayGui {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            page: Arc::new(Mutex::new(None)),
            logger: logger.with_namespace("display").with_namespace("gui"),
        }
    }
}

impl Display for DisplayGui {
    fn init(&mut self, events: Sender<Event>) -> Result<(), Box<dyn Error + Send + Sync>> {
        let window = PageWindow {
            page: self.page.clone(),
            events: events.clone(),
            path_input: String::new(),
            texture: None,
            last_scroll: 0,
        };

        spawn_window(events, self.logger.clone(), move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([560.0, 760.0])
                    .with_title("Leaf Scan"),
                #[cfg(target_os = "linux")]
                event_loop_builder: Some(Box::new(allow_any_thread)),
                ..Default::default()
            };

            // Blocks until the window is closed
            eframe::run_native("Leaf Scan", options, Box::new(move |_cc| Box::new(window)))
                .map_err(|e| e.to_string())
        });

        Ok(())
    }

    fn show(&mut self, page: &Page) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.page.lock().map_err(|e| e.to_string())? = Some(page.clone());
        Ok(())
    }
}

/// The window does not own the main thread, so winit has to be told that is fine.
#[cfg(target_os = "linux")]
fn allow_any_thread<T>(builder: &mut winit::event_loop::EventLoopBuilder<T>) {
    winit::platform::x11::EventLoopBuilderExtX11::with_any_thread(builder, true);
    winit::platform::wayland::EventLoopBuilderExtWayland::with_any_thread(builder, true);
}

/// Runs `open` on its own thread. Whether the window closes, fails to open or
/// panics, the loop is told to shut down.
fn spawn_window<F>(events: Sender<Event>, logger: Arc<dyn Logger + Send + Sync>, open: F)
where
    F: FnOnce() -> Result<(), String> + Send + 'static,
{
    thread::spawn(move || {
        match thread::spawn(open).join() {
            Ok(Ok(())) => {
                let _ = logger.info("Window closed");
            }
            Ok(Err(e)) => {
                let _ = logger.error(&format!("Window failed: {}", e));
            }
            Err(_) => {
                let _ = logger.error("Window thread panicked");
            }
        }
        let _ = events.send(Event::Shutdown);
    });
}
