use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Console,
    Gui,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub server_url: String,
    pub predict_path: String,
    pub use_fake_server: bool,
    pub animations_enabled: bool,
    pub display_mode: DisplayMode,
    pub upload_label_revert_delay: Duration,
    pub error_cue_duration: Duration,
    pub scroll_to_results_delay: Duration,
    pub contact_notice_duration: Duration,
    pub prediction_error_message: String,
    pub contact_notice_message: String,
    pub fake_labels: Vec<String>,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(50),
            server_url: "http://127.0.0.1:5001".to_string(),
            predict_path: "/predict".to_string(),
            use_fake_server: false,
            animations_enabled: true,
            display_mode: DisplayMode::Console,
            upload_label_revert_delay: Duration::from_millis(2000),
            error_cue_duration: Duration::from_millis(500),
            scroll_to_results_delay: Duration::from_millis(300),
            contact_notice_duration: Duration::from_millis(3000),
            prediction_error_message: "Prediction failed. Please try again.".to_string(),
            contact_notice_message: "Thank you for your message! This is a demo form."
                .to_string(),
            fake_labels: vec![
                "bacterial_spot".to_string(),
                "early_blight".to_string(),
                "late_blight".to_string(),
                "leaf_mold".to_string(),
                "healthy".to_string(),
            ],
            logger_timezone: utc(),
        }
    }
}

impl Config {
    /// Overlays `LEAF_SCAN_*` environment variables on the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = var("LEAF_SCAN_SERVER_URL") {
            config.server_url = url.trim_end_matches('/').to_string();
        }

        if let Some(display) = var("LEAF_SCAN_DISPLAY") {
            config.display_mode = match display.to_lowercase().as_str() {
                "gui" => DisplayMode::Gui,
                _ => DisplayMode::Console,
            };
        }

        if let Some(reduced) = var("LEAF_SCAN_REDUCED_MOTION") {
            config.animations_enabled = !is_truthy(&reduced);
        }

        if let Some(fake) = var("LEAF_SCAN_FAKE_SERVER") {
            config.use_fake_server = is_truthy(&fake);
        }

        config
    }

    pub fn predict_url(&self) -> String {
        format!("{}{}", self.server_url, self.predict_path)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn utc() -> chrono::FixedOffset {
    chrono::Offset::fix(&chrono::Utc)
}
