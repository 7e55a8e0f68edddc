use serde::{Deserialize, Serialize};

use crate::currency::parse_amount;
use crate::error::{EvidenceReportError, Result};

/// Detail text pre-filled when oral evidence is selected: a request to hear
/// the respondent company's representative.
pub const ORAL_DETAILS_TEMPLATE: &str =
    "Requer-se a oitiva do preposto da empresa requerida, para esclarecer: ";

/// The kind of proof recommended for the case: witness testimony (oral) or
/// expert technical examination (pericial). These are the only two legal
/// values; free-text input is funneled through [`EvidenceType::parse`] so an
/// unsupported kind can never reach the report composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceType {
    Oral,
    Pericial,
}

impl Default for EvidenceType {
    fn default() -> Self {
        Self::Oral
    }
}

impl EvidenceType {
    /// Strict parse for operator-facing surfaces.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "oral" => Ok(Self::Oral),
            "pericial" => Ok(Self::Pericial),
            other => Err(EvidenceReportError::UnsupportedEvidenceType(
                other.to_string(),
            )),
        }
    }

    /// Lenient parse for extraction output: an unrecognized kind falls back
    /// to oral instead of propagating an invalid value.
    pub fn from_extraction(value: &str) -> Self {
        Self::parse(value).unwrap_or(Self::Oral)
    }

    /// Fixed section label used in the generated report.
    pub fn report_label(&self) -> &'static str {
        match self {
            Self::Oral => "🗣 Prova Oral/Testemunhal:",
            Self::Pericial => "🔎 Prova Pericial:",
        }
    }

    /// Detail text swapped in when the operator switches to this kind.
    pub fn default_details(&self) -> &'static str {
        match self {
            Self::Oral => ORAL_DETAILS_TEMPLATE,
            Self::Pericial => "",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oral => "oral",
            Self::Pericial => "pericial",
        }
    }
}

/// The mutable state of one report-drafting session.
///
/// Every field is a plain string and absence is the empty string, never an
/// Option: the interactive form round-trips blank inputs, and the report
/// composer substitutes placeholders for them. Amount fields keep whatever
/// raw text was typed or extracted; normalization happens at aggregation and
/// formatting time only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CaseRecord {
    pub process_number: String,
    pub claimant: String,
    pub respondent: String,
    pub subject_matter: String,
    pub dispute_summary: String,
    pub contested_amount: String,
    pub moral_damages: String,
    pub material_damages: String,
    pub undue_repayment: String,
    pub evidence_type: EvidenceType,
    pub evidence_details: String,
}

impl CaseRecord {
    /// A fresh drafting session: all fields blank, oral evidence
    /// pre-selected with its boilerplate detail text.
    pub fn new() -> Self {
        Self {
            evidence_details: EvidenceType::Oral.default_details().to_string(),
            ..Self::default()
        }
    }

    /// Switches the evidence kind and swaps in that kind's detail template,
    /// discarding whatever was typed for the previous kind.
    pub fn set_evidence_type(&mut self, kind: EvidenceType) {
        self.evidence_type = kind;
        self.evidence_details = kind.default_details().to_string();
    }

    /// Clears the session back to its fresh state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The four claim amounts in report display order: contested amount,
    /// moral damages, material damages, undue repayment.
    pub fn amount_fields(&self) -> [&str; 4] {
        [
            &self.contested_amount,
            &self.moral_damages,
            &self.material_damages,
            &self.undue_repayment,
        ]
    }

    /// Total value attributed to the cause: the four claim amounts parsed
    /// independently and summed (blank fields count as zero).
    ///
    /// Derived on demand from the current field values; there is no cached
    /// total to go stale when a field changes.
    pub fn total_claim_value(&self) -> f64 {
        self.amount_fields()
            .iter()
            .map(|raw| parse_amount(raw))
            .sum()
    }
}
