use crate::animation::interface::Tween;
use crate::predict_client::interface::PredictionResult;
use crate::upload_predict::motion;

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionCard {
    pub rank: usize,
    pub label: String,
    pub percent: String,
    pub probability: f64,
    pub top: bool,
    pub entrance: Tween,
    pub progress: Tween,
}

pub fn build_cards(predictions: &PredictionResult) -> Vec<PredictionCard> {
    predictions
        .ranked()
        .into_iter()
        .enumerate()
        .map(|(rank, (label, probability))| PredictionCard {
            rank,
            label: format_label(&label),
            percent: format_percent(probability),
            probability,
            top: rank == 0,
            entrance: motion::card_entrance(rank),
            progress: motion::card_progress(rank, probability),
        })
        .collect()
}

/// `"EARLY_BLIGHT"` → `"Early Blight"`
pub fn format_label(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.as_str().to_lowercase().chars())
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability)
}
