//! # Evidence Report Builder
//!
//! A library for assembling evidence specification reports ("relatório de
//! especificação de provas") for Brazilian civil case files.
//!
//! ## Core Concepts
//!
//! - **Case Record**: the mutable field set of one drafting session (parties, dispute summary, claim amounts, evidence opinion)
//! - **Amount Normalization**: claim amounts stay as raw text and are parsed leniently, accepting both Brazilian ("1.234,56") and English ("1,234.56") separator conventions; malformed amounts count as zero
//! - **Report Composition**: a fixed plain-text template rendered deterministically from the record, with pt-BR currency formatting
//! - **Field Extraction** (feature `gemini`): fills the record from a scanned filing via structured LLM output, never touching the record on failure
//!
//! ## Example
//!
//! ```rust,ignore
//! use evidence_report_builder::*;
//!
//! let mut record = CaseRecord::new();
//! record.process_number = "0001234-56.2024.8.26.0100".to_string();
//! record.claimant = "João da Silva".to_string();
//! record.moral_damages = "10.000,00".to_string();
//!
//! let report = generate_report(&record);
//! println!("{}", report);
//! ```

pub mod currency;
pub mod error;
pub mod extraction;
pub mod record;
pub mod report;

#[cfg(feature = "gemini")]
pub mod llm;

pub use currency::{format_brl, format_brl_raw, parse_amount};
pub use error::{EvidenceReportError, Result};
pub use extraction::{EvidenceOpinion, ExtractionResult};
pub use record::{CaseRecord, EvidenceType, ORAL_DETAILS_TEMPLATE};
pub use report::{compose_report, PLACEHOLDER_MISSING, PLACEHOLDER_NO_AMOUNT};

use log::{debug, info};

/// Renders the evidence specification report for the record's current state.
pub fn generate_report(record: &CaseRecord) -> String {
    info!(
        "Generating evidence report (process: '{}', evidence: {})",
        record.process_number,
        record.evidence_type.as_str()
    );
    debug!(
        "Total claim value across the four amount fields: {:.2}",
        record.total_claim_value()
    );

    compose_report(record)
}
