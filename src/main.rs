use config::{Config, DisplayMode};
use display::impl_console::DisplayConsole;
use display::impl_gui::DisplayGui;
use display::interface::Display;
use file_reader::impl_image::FileReaderImage;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use predict_client::impl_fake::PredictClientFake;
use predict_client::impl_http::PredictClientHttp;
use predict_client::interface::PredictClient;
use std::sync::{Arc, Mutex};
use upload_predict::main::UploadPredict;

mod animation;
mod config;
mod display;
mod file_reader;
mod library;
mod predict_client;
mod upload_predict;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let animator = animation::detect(&config, logger.clone());

    let file_reader = Arc::new(FileReaderImage::new(logger.clone()));

    let predict_client: Arc<dyn PredictClient + Send + Sync> = if config.use_fake_server {
        Arc::new(PredictClientFake::random(
            config.fake_labels.clone(),
            logger.clone(),
        ))
    } else {
        Arc::new(PredictClientHttp::new(config.predict_url(), logger.clone())?)
    };

    let display: Arc<Mutex<dyn Display + Send + Sync>> = match config.display_mode {
        DisplayMode::Console => Arc::new(Mutex::new(DisplayConsole::new())),
        DisplayMode::Gui => Arc::new(Mutex::new(DisplayGui::new(logger.clone()))),
    };

    let upload_predict = UploadPredict::new(
        config,
        logger,
        animator,
        file_reader,
        predict_client,
        display,
    );

    upload_predict.run()?;

    Ok(())
}
