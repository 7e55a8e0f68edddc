use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvidenceReportError {
    #[error("Unsupported evidence type '{0}': expected 'oral' or 'pericial'")]
    UnsupportedEvidenceType(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "gemini")]
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, EvidenceReportError>;
