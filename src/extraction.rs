use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{EvidenceReportError, Result};
use crate::record::{CaseRecord, EvidenceType};

/// Evidence opinion block of the extraction contract.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EvidenceOpinion {
    #[schemars(description = "O tipo de prova recomendado ('oral' ou 'pericial').")]
    pub tipo: String,
    #[schemars(description = "A justificativa para a escolha do tipo de prova.")]
    pub justificativa: String,
}

/// Structured output contract for document extraction, version 1.
///
/// Field names are the wire names of the extraction service. Every field is
/// optional: a field the document does not carry deserializes to its empty
/// default. Amount fields hold pre-normalized strings ("12345.67") exactly
/// as received; parsing happens downstream at aggregation and formatting
/// time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractionResult {
    #[schemars(description = "Número do processo")]
    pub processo: String,
    #[schemars(description = "Nome completo do requerente (autor)")]
    pub requerente: String,
    #[schemars(description = "Nome completo da requerida (réu)")]
    pub requerida: String,
    #[schemars(
        description = "O assunto principal do processo (e.g., Ação declaratória de inexistência de débito)"
    )]
    pub objeto: String,
    #[schemars(
        description = "Um resumo conciso do objeto da lide, descrevendo a disputa principal."
    )]
    pub objeto_lide: String,
    #[schemars(description = "Valor impugnado, se houver. Formatado como '12345.67'.")]
    pub valor_impugnado: String,
    #[schemars(description = "Valor de danos morais. Formatado como '12345.67'.")]
    pub danos_morais: String,
    #[schemars(description = "Valor de danos materiais. Formatado como '12345.67'.")]
    pub danos_materiais: String,
    #[schemars(description = "Valor de repetição do indébito. Formatado como '12345.67'.")]
    pub repeticao_indebito: String,
    #[schemars(description = "Opinião sobre a prova mais interessante a ser seguida.")]
    pub opiniao_prova: Option<EvidenceOpinion>,
}

fn overwrite_if_present(target: &mut String, value: &str) {
    if !value.is_empty() {
        *target = value.to_string();
    }
}

/// Isolates the JSON object in a raw model reply, dropping any prose or
/// markdown fences wrapped around it.
fn clean_json_output(raw: &str) -> &str {
    if let Some(start) = raw.find('{') {
        if let Some(end) = raw.rfind('}') {
            if start <= end {
                return &raw[start..=end];
            }
        }
    }
    raw.trim()
}

impl ExtractionResult {
    /// Parses the raw text returned by the extraction service.
    ///
    /// Unknown fields are ignored so newer service revisions stay readable.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(clean_json_output(raw)).map_err(|e| {
            EvidenceReportError::ExtractionFailed(format!(
                "structured output was not valid JSON: {e}"
            ))
        })
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ExtractionResult)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }

    /// Applies the extracted fields onto `record`.
    ///
    /// Non-empty scalars overwrite the corresponding record field; absent or
    /// empty ones leave whatever the operator already entered. A present
    /// evidence opinion always takes effect: its type falls back to oral
    /// when unrecognized, and its justification replaces the detail text
    /// even when empty.
    pub fn apply_to(&self, record: &mut CaseRecord) {
        overwrite_if_present(&mut record.process_number, &self.processo);
        overwrite_if_present(&mut record.claimant, &self.requerente);
        overwrite_if_present(&mut record.respondent, &self.requerida);
        overwrite_if_present(&mut record.subject_matter, &self.objeto);
        overwrite_if_present(&mut record.dispute_summary, &self.objeto_lide);
        overwrite_if_present(&mut record.contested_amount, &self.valor_impugnado);
        overwrite_if_present(&mut record.moral_damages, &self.danos_morais);
        overwrite_if_present(&mut record.material_damages, &self.danos_materiais);
        overwrite_if_present(&mut record.undue_repayment, &self.repeticao_indebito);

        if let Some(opinion) = &self.opiniao_prova {
            record.evidence_type = EvidenceType::from_extraction(&opinion.tipo);
            record.evidence_details = opinion.justificativa.clone();
        }
    }
}
