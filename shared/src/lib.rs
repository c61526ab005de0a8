use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct ClassifyRequest {
    /// Base64 data URL of the uploaded image.
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ClassifyResponse {
    pub animal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ClassifyResponse {
    pub fn matched(animal: String, confidence: f32) -> Self {
        Self {
            animal: Some(animal),
            confidence: Some(confidence),
            message: None,
        }
    }

    pub fn no_match(message: impl Into<String>) -> Self {
        Self {
            animal: None,
            confidence: None,
            message: Some(message.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct AnalyzeRequest {
    pub animal: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis: String,
    pub wikipedia_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ErrorBody {
    pub message: String,
}
