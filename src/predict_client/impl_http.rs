use crate::file_reader::interface::SelectedFile;
use crate::library::logger::interface::Logger;
use crate::predict_client::interface::{PredictClient, PredictError, PredictionResult};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use std::sync::Arc;
use std::time::Duration;

pub struct PredictClientHttp {
    url: String,
    client: Client,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictClientHttp {
    pub fn new(url: String, logger: Arc<dyn Logger + Send + Sync>) -> Result<Self, PredictError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| PredictError::Transport(e.to_string()))?;

        Ok(Self {
            url,
            client,
            logger: logger.with_namespace("predict_client").with_namespace("http"),
        })
    }
}

impl PredictClient for PredictClientHttp {
    fn predict(&self, file: &SelectedFile) -> Result<PredictionResult, PredictError> {
        let bytes = std::fs::read(&file.path).map_err(|e| PredictError::Io(e.to_string()))?;

        let _ = self.logger.info(&format!(
            "POST {} ({}, {} bytes)",
            self.url,
            file.name,
            bytes.len()
        ));

        let form = Form::new().part("image", Part::bytes(bytes).file_name(file.name.clone()));

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .map_err(|e| PredictError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| PredictError::Transport(e.to_string()))?;

        let predictions = PredictionResult::from_json(&body)?;

        let _ = self
            .logger
            .info(&format!("Received {} predictions", predictions.len()));

        Ok(predictions)
    }
}
