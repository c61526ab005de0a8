use reqwest::Client;
use serde_json::{Value, json};
use shared::AnalyzeResponse;

use crate::animals::FALLBACK_URLS;
use crate::config::ApiConfig;
use crate::error::ApiError;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str = "You are an AI agent that analyzes if animals are dangerous to humans. \
You MUST respond using EXACTLY this template, replacing the text in brackets:\n\n\
ANALYSIS: [Write a 2-3 sentence analysis of whether the animal is dangerous to humans]\n\n\
WIKIPEDIA: https://en.wikipedia.org/wiki/[Animal_Name]\n\n\
Do not deviate from this format. Always include both the ANALYSIS and WIKIPEDIA sections. \
The Wikipedia URL should be the main article for the animal species.";

const RABBIT_ANALYSIS: &str = "According to the Rabbit of Caerbannog article, while most rabbits \
are harmless, there exists a legendary rabbit that is \"the most foul, cruel, and bad-tempered \
rodent you ever set eyes on.\" This particular rabbit has been known to be capable of killing \
humans in a most unpleasant fashion. However, the likelihood of encountering this specific rabbit \
is extremely low, as it was last seen guarding the Cave of Caerbannog. Regular rabbits are \
completely harmless to humans.";

const RABBIT_URL: &str = "https://en.wikipedia.org/wiki/Rabbit_of_Caerbannog";

#[derive(Clone)]
pub struct AnalysisService {
    client: Client,
    config: ApiConfig,
}

impl AnalysisService {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Asks the text-generation service whether the animal is dangerous and
    /// parses the templated reply. Names containing "rabbit" are answered
    /// locally without touching credentials or the network.
    pub async fn analyze(&self, animal: &str) -> Result<AnalyzeResponse, ApiError> {
        if animal.contains("rabbit") {
            return Ok(AnalyzeResponse {
                analysis: RABBIT_ANALYSIS.to_string(),
                wikipedia_url: Some(RABBIT_URL.to_string()),
            });
        }

        let api_key = self.config.openai_api_key()?;

        let body = json!({
            "model": "gpt-4",
            "temperature": 0.7,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": format!("Analyze if a {animal} is dangerous to humans.") }
            ]
        });

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Service(format!("Error calling OpenAI API: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Service(format!(
                "Error calling OpenAI API: {status} - {body}"
            )));
        }

        let completion: Value = response
            .json()
            .await
            .map_err(|e| ApiError::Service(format!("Error calling OpenAI API: {e}")))?;

        let raw = completion["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                ApiError::Service("OpenAI API returned no completion content".into())
            })?;
        log::info!("Generated analysis for '{animal}' ({} chars)", raw.len());

        Ok(build_response(raw, animal))
    }
}

/// Splits a templated reply into its ANALYSIS and WIKIPEDIA sections. Missing
/// markers leave the corresponding field empty; no further validation happens
/// here.
fn parse_template(raw: &str) -> (String, String) {
    let mut analysis = String::new();
    let mut wikipedia_url = String::new();

    if let Some((_, rest)) = raw.split_once("ANALYSIS:") {
        let section = rest.split("WIKIPEDIA:").next().unwrap_or(rest);
        analysis = section.trim().to_string();
    }

    if let Some((_, rest)) = raw.split_once("WIKIPEDIA:") {
        let section = rest.split("WIKIPEDIA:").next().unwrap_or(rest);
        wikipedia_url = section.trim().to_string();
    }

    (analysis, wikipedia_url)
}

/// A parsed URL is kept only when it carries the https scheme; anything else
/// falls back to the static table for the queried animal, or to no URL at all.
fn resolve_url(parsed: String, animal: &str) -> Option<String> {
    if !parsed.is_empty() && parsed.starts_with("https://") {
        return Some(parsed);
    }
    FALLBACK_URLS
        .get(animal.to_lowercase().as_str())
        .map(|url| (*url).to_string())
}

fn build_response(raw: &str, animal: &str) -> AnalyzeResponse {
    let (analysis, wikipedia_url) = parse_template(raw);
    AnalyzeResponse {
        // The caller always receives some text, even for an off-template reply.
        analysis: if analysis.is_empty() {
            raw.to_string()
        } else {
            analysis
        },
        wikipedia_url: resolve_url(wikipedia_url, animal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_sections_of_a_well_formed_reply() {
        let raw = "ANALYSIS: Lions are dangerous.\nWIKIPEDIA: https://en.wikipedia.org/wiki/Lion";
        let (analysis, url) = parse_template(raw);
        assert_eq!(analysis, "Lions are dangerous.");
        assert_eq!(url, "https://en.wikipedia.org/wiki/Lion");
    }

    #[test]
    fn missing_wikipedia_marker_leaves_url_empty() {
        let (analysis, url) = parse_template("ANALYSIS: Some text");
        assert_eq!(analysis, "Some text");
        assert_eq!(url, "");
    }

    #[test]
    fn missing_both_markers_leaves_both_empty() {
        let (analysis, url) = parse_template("The lion is the king of the jungle.");
        assert_eq!(analysis, "");
        assert_eq!(url, "");
    }

    #[test]
    fn repeated_wikipedia_marker_takes_the_first_section() {
        let raw = "ANALYSIS: a\nWIKIPEDIA: https://one\nWIKIPEDIA: https://two";
        let (_, url) = parse_template(raw);
        assert_eq!(url, "https://one");
    }

    #[test]
    fn missing_url_falls_back_to_table_entry() {
        let response = build_response("ANALYSIS: Some text", "lion");
        assert_eq!(response.analysis, "Some text");
        assert_eq!(
            response.wikipedia_url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Lion")
        );
    }

    #[test]
    fn missing_url_for_unknown_animal_resolves_to_none() {
        let response = build_response("ANALYSIS: Some text", "axolotl");
        assert_eq!(response.wikipedia_url, None);
    }

    #[test]
    fn non_https_url_is_overridden_by_the_table() {
        for animal in crate::animals::FALLBACK_URLS.keys() {
            let response = build_response("ANALYSIS: a\nWIKIPEDIA: not-a-url", animal);
            assert_eq!(
                response.wikipedia_url.as_deref(),
                Some(*crate::animals::FALLBACK_URLS.get(animal).unwrap())
            );
        }
    }

    #[test]
    fn non_https_url_for_unknown_animal_resolves_to_none() {
        let response = build_response("ANALYSIS: a\nWIKIPEDIA: not-a-url", "axolotl");
        assert_eq!(response.wikipedia_url, None);
    }

    #[test]
    fn fallback_lookup_lowercases_the_animal_name() {
        let response = build_response("ANALYSIS: Some text", "Lion");
        assert_eq!(
            response.wikipedia_url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Lion")
        );
    }

    #[test]
    fn off_template_reply_is_returned_verbatim() {
        let raw = "The lion is the king of the jungle.";
        let response = build_response(raw, "lion");
        assert_eq!(response.analysis, raw);
    }

    #[actix_web::test]
    async fn rabbit_names_short_circuit_without_credentials() {
        let service = AnalysisService::new(ApiConfig::unconfigured());
        for name in ["rabbit", "jackrabbit", "rabbits", "wood rabbit"] {
            let response = service.analyze(name).await.unwrap();
            assert_eq!(response.analysis, RABBIT_ANALYSIS);
            assert_eq!(response.wikipedia_url.as_deref(), Some(RABBIT_URL));
        }
    }

    #[actix_web::test]
    async fn rabbit_check_is_case_sensitive() {
        // "RABBIT" does not contain the lowercase substring, so the request
        // proceeds to the credential check and fails closed here.
        let service = AnalysisService::new(ApiConfig::unconfigured());
        let err = service.analyze("RABBIT").await.unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[actix_web::test]
    async fn analyze_without_credential_fails_closed() {
        let service = AnalysisService::new(ApiConfig::unconfigured());
        let err = service.analyze("lion").await.unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }
}
