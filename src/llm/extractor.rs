use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::debug;
use tokio::sync::mpsc::Sender;

use crate::error::Result;
use crate::extraction::ExtractionResult;
use crate::llm::client::GeminiClient;
use crate::llm::prompts::EXTRACTION_PROMPT;
use crate::llm::types::*;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Extracts case fields from a legal document in a single structured call:
/// the document is inlined as base64 next to the extraction prompt, and the
/// model is constrained to the [`ExtractionResult`] response schema.
pub struct CaseExtractor {
    client: GeminiClient,
    model: String,
}

impl CaseExtractor {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Use a different Gemini model (e.g. a pro tier for dense filings).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub async fn extract(
        &self,
        document: &CaseDocument,
        progress: Option<Sender<ExtractionEvent>>,
    ) -> Result<ExtractionResult> {
        self.send_event(&progress, ExtractionEvent::Starting).await;
        debug!(
            "Extracting case fields from '{}' ({}, {} bytes)",
            document.display_name,
            document.mime_type,
            document.data.len()
        );

        let schema = serde_json::to_value(ExtractionResult::generate_json_schema())?;

        let contents = vec![Content::user(vec![
            Part::Text {
                text: EXTRACTION_PROMPT.to_string(),
            },
            Part::InlineData {
                inline_data: Blob {
                    mime_type: document.mime_type.clone(),
                    data: STANDARD.encode(&document.data),
                },
            },
        ])];

        self.send_event(&progress, ExtractionEvent::AwaitingModel)
            .await;

        let raw = match self
            .client
            .generate_structured(&self.model, contents, schema)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                self.send_event(
                    &progress,
                    ExtractionEvent::Failed {
                        reason: e.to_string(),
                    },
                )
                .await;
                return Err(e);
            }
        };

        self.send_event(&progress, ExtractionEvent::ProcessingResponse)
            .await;

        match ExtractionResult::from_json(&raw) {
            Ok(result) => {
                self.send_event(&progress, ExtractionEvent::Success).await;
                Ok(result)
            }
            Err(e) => {
                self.send_event(
                    &progress,
                    ExtractionEvent::Failed {
                        reason: e.to_string(),
                    },
                )
                .await;
                Err(e)
            }
        }
    }

    async fn send_event(&self, sender: &Option<Sender<ExtractionEvent>>, event: ExtractionEvent) {
        if let Some(tx) = sender {
            let _ = tx.send(event).await;
        }
    }
}
