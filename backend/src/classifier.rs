use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::Deserialize;
use shared::ClassifyResponse;

use crate::animals::SUPPORTED_ANIMALS;
use crate::config::ApiConfig;
use crate::error::ApiError;

const MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/google/vit-base-patch16-224";

/// One candidate label from the hosted classifier, ordered by descending
/// confidence upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub label: String,
    pub score: f32,
}

#[derive(Clone)]
pub struct ClassifierService {
    client: Client,
    config: ApiConfig,
}

impl ClassifierService {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Classifies a base64 data URL image and returns the first allow-listed
    /// animal among the candidates, or a no-match response.
    pub async fn classify(&self, image: &str) -> Result<ClassifyResponse, ApiError> {
        let api_key = self.config.huggingface_api_key()?;
        let image_bytes = decode_image(image)?;

        let response = self
            .client
            .post(MODEL_URL)
            .bearer_auth(api_key)
            .body(image_bytes)
            .send()
            .await
            .map_err(|e| ApiError::Service(format!("Error calling Hugging Face API: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Service(format!(
                "Error calling Hugging Face API: {status} - {body}"
            )));
        }

        let candidates: Vec<Candidate> = response
            .json()
            .await
            .map_err(|e| ApiError::Service(format!("Error calling Hugging Face API: {e}")))?;

        match select_animal(&candidates) {
            Some((animal, confidence)) => {
                log::info!("Detected animal '{animal}' ({confidence:.3})");
                Ok(ClassifyResponse::matched(animal, confidence))
            }
            None => {
                log::info!("No supported animal among {} candidates", candidates.len());
                Ok(ClassifyResponse::no_match("No supported animal detected"))
            }
        }
    }
}

/// Strips any data-URL prefix (everything through the first comma) and decodes
/// the remaining base64 payload.
fn decode_image(image: &str) -> Result<Vec<u8>, ApiError> {
    let payload = match image.split_once(',') {
        Some((_, rest)) => rest,
        None => image,
    };
    STANDARD
        .decode(payload)
        .map_err(|e| ApiError::Service(format!("Invalid base64 image payload: {e}")))
}

/// Scans the candidates in upstream order for the first label containing an
/// allow-listed animal name, case-insensitively.
fn select_animal(candidates: &[Candidate]) -> Option<(String, f32)> {
    candidates.iter().find_map(|candidate| {
        let label = candidate.label.to_lowercase();
        let matched = SUPPORTED_ANIMALS.iter().any(|animal| label.contains(animal));
        matched.then(|| (label, candidate.score))
    })
}
