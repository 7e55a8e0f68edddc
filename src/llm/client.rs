use reqwest::Client;

use crate::error::{EvidenceReportError, Result};
use crate::llm::types::*;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Calls `generateContent` with a JSON response mime type and the given
    /// response schema, returning the raw text of the first candidate part.
    pub(crate) async fn generate_structured(
        &self,
        model: &str,
        contents: Vec<Content>,
        response_schema: serde_json::Value,
    ) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let payload = GenerateContentRequest {
            contents,
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Some(response_schema),
            },
        };

        let res = self.client.post(&url).json(&payload).send().await?;
        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await?;
            return Err(EvidenceReportError::ExtractionFailed(format!(
                "Gemini API Error (status {}): {}",
                status, err_text
            )));
        }

        let body: GenerateContentResponse = res.json().await?;

        let part = body
            .candidates
            .ok_or_else(|| {
                EvidenceReportError::ExtractionFailed("No candidates returned".to_string())
            })?
            .first()
            .ok_or_else(|| {
                EvidenceReportError::ExtractionFailed("Empty candidates list".to_string())
            })?
            .content
            .parts
            .first()
            .ok_or_else(|| {
                EvidenceReportError::ExtractionFailed("No parts in content".to_string())
            })?
            .clone();

        match part {
            Part::Text { text } => Ok(text),
            _ => Err(EvidenceReportError::ExtractionFailed(
                "Model returned non-text content".to_string(),
            )),
        }
    }
}
