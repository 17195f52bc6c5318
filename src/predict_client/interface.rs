use crate::file_reader::interface::SelectedFile;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use thiserror::Error;

/// Label → probability (0–100) as returned by the prediction endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionResult(pub BTreeMap<String, f64>);

impl PredictionResult {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(label, probability)| (label.into(), probability))
                .collect(),
        )
    }

    pub fn from_json(body: &str) -> Result<Self, PredictError> {
        serde_json::from_str(body).map_err(|e| PredictError::Parse(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Highest probability first, ties broken by label.
    pub fn ranked(&self) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .0
            .iter()
            .map(|(label, probability)| (label.clone(), *probability))
            .collect();

        ranked.sort_by(|(label_a, a), (label_b, b)| match b.total_cmp(a) {
            Ordering::Equal => label_a.cmp(label_b),
            ordering => ordering,
        });

        ranked
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    #[error("could not read image file: {0}")]
    Io(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid prediction response: {0}")]
    Parse(String),
}

pub trait PredictClient {
    fn predict(&self, file: &SelectedFile) -> Result<PredictionResult, PredictError>;
}
