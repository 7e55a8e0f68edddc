use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{EvidenceReportError, Result};

/// Progress notifications emitted while a document is being extracted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExtractionEvent {
    Starting,
    AwaitingModel,
    ProcessingResponse,
    Success,
    Failed { reason: String },
}

/// A case document to be sent to the model inline, as raw bytes plus the
/// mime type the bytes should be interpreted as.
#[derive(Debug, Clone)]
pub struct CaseDocument {
    pub data: Vec<u8>,
    pub mime_type: String,
    pub display_name: String,
}

impl CaseDocument {
    pub async fn from_path(path: &Path) -> Result<Self> {
        let display_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                EvidenceReportError::ExtractionFailed("Invalid file name".to_string())
            })?
            .to_string();
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();
        let data = fs::read(path).await?;

        Ok(Self {
            data,
            mime_type,
            display_name,
        })
    }

    pub fn from_bytes(
        data: Vec<u8>,
        mime_type: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
            display_name: display_name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: "user".to_string(),
            parts,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}
