use crate::display::interface::{Display, Page, ResultsView};
use crate::upload_predict::core::{ContactField, Event};
use std::error::Error;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

const HELP: &str = "commands: upload <path> | predict | name <text> | email <text> | message <text> | send | quit";
const BAR_CELLS: usize = 20;

/// Draws the page as a text box and reads commands from stdin.
pub struct DisplayConsole {
    last_frame: Vec<String>,
}

impl DisplayConsole {
    pub fn new() -> Self {
        Self {
            last_frame: Vec::new(),
        }
    }
}

impl Display for DisplayConsole {
    fn init(&mut self, events: Sender<Event>) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("{}", HELP);

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let Some(event) = parse_command(&line) else {
                    println!("{}", HELP);
                    continue;
                };
                let quit = matches!(event, Event::Shutdown);
                if events.send(event).is_err() || quit {
                    return;
                }
            }
            let _ = events.send(Event::Shutdown);
        });

        Ok(())
    }

    fn show(&mut self, page: &Page) -> Result<(), Box<dyn Error + Send + Sync>> {
        let frame = page_lines(page);
        if frame == self.last_frame {
            return Ok(());
        }

        let width = frame.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        println!("┌{}┐", "─".repeat(width + 2));
        for line in &frame {
            let padding = width - line.chars().count();
            println!("│ {}{} │", line, " ".repeat(padding));
        }
        println!("└{}┘", "─".repeat(width + 2));

        self.last_frame = frame;
        Ok(())
    }
}

pub fn parse_command(line: &str) -> Option<Event> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_lowercase().as_str() {
        "upload" => Some(Event::FilesSelected(if rest.is_empty() {
            vec![]
        } else {
            vec![PathBuf::from(rest)]
        })),
        "predict" => Some(Event::PredictClicked),
        "name" => Some(contact_edit(ContactField::Name, rest)),
        "email" => Some(contact_edit(ContactField::Email, rest)),
        "message" => Some(contact_edit(ContactField::Message, rest)),
        "send" => Some(Event::ContactSubmitted),
        "quit" | "exit" => Some(Event::Shutdown),
        _ => None,
    }
}

fn contact_edit(field: ContactField, value: &str) -> Event {
    Event::ContactEdited {
        field,
        value: value.to_string(),
    }
}

/// Text frame for `page`. Animated values are left out so frames only
/// differ when something meaningful changes.
pub fn page_lines(page: &Page) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Upload: {}   Predict: {}",
            button(&page.upload_button.label, page.upload_button.enabled),
            button(&page.predict_button.label, page.predict_button.enabled),
        ),
    ];

    if page.upload_button.error_highlight {
        lines.push("! Choose an image first".to_string());
    }

    lines.push(match &page.preview {
        Some(preview) => format!("Image: {}x{}", preview.image.width, preview.image.height),
        None if page.upload_container.has_file => "Image: (not loaded)".to_string(),
        None => "Image: none".to_string(),
    });

    match &page.results {
        ResultsView::Hidden => {}
        ResultsView::Predictions { cards, .. } => {
            lines.push("Results:".to_string());
            for card in cards {
                let filled = ((card.target_width / 100.0) * BAR_CELLS as f32).round() as usize;
                lines.push(format!(
                    "{} {:<24} {:>8} {}{}",
                    if card.top { "*" } else { " " },
                    card.label,
                    card.percent,
                    "█".repeat(filled.min(BAR_CELLS)),
                    "·".repeat(BAR_CELLS - filled.min(BAR_CELLS)),
                ));
            }
        }
        ResultsView::Error { message, .. } => lines.push(format!("Results: ⚠ {}", message)),
    }

    lines.push(format!(
        "Contact: name={:?} email={:?} message={:?}",
        page.contact.name, page.contact.email, page.contact.message
    ));
    if let Some(notice) = &page.contact.notice {
        lines.push(notice.message.clone());
    }

    lines
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{}]", label)
    } else {
        format!("({})", label)
    }
}
