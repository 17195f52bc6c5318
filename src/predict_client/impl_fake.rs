use crate::file_reader::interface::SelectedFile;
use crate::library::logger::interface::Logger;
use crate::predict_client::interface::{PredictClient, PredictError, PredictionResult};
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

enum Response {
    Random { labels: Vec<String> },
    Fixed(Result<PredictionResult, PredictError>),
}

pub struct PredictClientFake {
    response: Mutex<Response>,
    latency: Duration,
    calls: AtomicUsize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictClientFake {
    /// Random probabilities over `labels`, summing to 100.
    pub fn random(labels: Vec<String>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self::with_response(Response::Random { labels }, Duration::from_millis(800), logger)
    }

    #[allow(dead_code)]
    pub fn fixed(
        result: Result<PredictionResult, PredictError>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self::with_response(Response::Fixed(result), Duration::ZERO, logger)
    }

    fn with_response(
        response: Response,
        latency: Duration,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            response: Mutex::new(response),
            latency,
            calls: AtomicUsize::new(0),
            logger: logger.with_namespace("predict_client").with_namespace("fake"),
        }
    }

    #[allow(dead_code)]
    pub fn set_result(&self, result: Result<PredictionResult, PredictError>) {
        let mut response = match self.response.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *response = Response::Fixed(result);
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PredictClient for PredictClientFake {
    fn predict(&self, file: &SelectedFile) -> Result<PredictionResult, PredictError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let _ = self.logger.info(&format!("Predicting {}...", file.name));

        std::thread::sleep(self.latency);

        let response = match self.response.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        match &*response {
            Response::Fixed(result) => result.clone(),
            Response::Random { labels } => Ok(random_predictions(labels)),
        }
    }
}

fn random_predictions(labels: &[String]) -> PredictionResult {
    let mut rng = rand::rng();
    let weights: Vec<f64> = labels
        .iter()
        .map(|_| rng.random_range(0.01..1.0f64).powi(3))
        .collect();
    let total: f64 = weights.iter().sum();

    PredictionResult::from_pairs(labels.iter().zip(weights).map(|(label, weight)| {
        let percent = (weight / total * 100.0 * 100.0).round() / 100.0;
        (label.clone(), percent)
    }))
}
