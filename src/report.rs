use crate::currency::{format_brl, format_brl_raw};
use crate::record::CaseRecord;

/// Placeholder shown for header and free-text fields left blank.
pub const PLACEHOLDER_MISSING: &str = "Não informado";

/// Placeholder shown for claim amounts left blank.
pub const PLACEHOLDER_NO_AMOUNT: &str = "(não houver)";

const REPORT_TITLE: &str = "RELATÓRIO DE ESPECIFICAÇÃO DE PROVAS";

fn or_missing(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER_MISSING
    } else {
        value
    }
}

fn amount_or_placeholder(raw: &str) -> String {
    if raw.is_empty() {
        PLACEHOLDER_NO_AMOUNT.to_string()
    } else {
        format_brl_raw(raw)
    }
}

/// Renders the evidence specification report for the record's current state.
///
/// The output is plain text with a fixed layout: a header block, the dispute
/// summary, the claim values with their aggregated total, and the evidence
/// opinion. Identical records always produce identical strings. Section
/// numbering (1, 2, 4) mirrors the filings this template was lifted from.
pub fn compose_report(record: &CaseRecord) -> String {
    let mut out = String::new();

    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&format!(
        "Processo n.º: {}\n",
        or_missing(&record.process_number)
    ));
    out.push_str(&format!("Requerente: {}\n", or_missing(&record.claimant)));
    out.push_str(&format!("Requerida: {}\n", or_missing(&record.respondent)));
    out.push_str(&format!("Objeto: {}\n\n", or_missing(&record.subject_matter)));

    out.push_str("1. Objeto da Lide\n");
    out.push_str(&format!("{}\n\n", or_missing(&record.dispute_summary)));

    out.push_str("2. 💰 Valor da Causa:\n");
    out.push_str(&format!(
        "➡️ Valor impugnado: {}\n",
        amount_or_placeholder(&record.contested_amount)
    ));
    out.push_str(&format!(
        "➡️ Valor pleiteado a título de danos morais: {}\n",
        amount_or_placeholder(&record.moral_damages)
    ));
    out.push_str(&format!(
        "➡️ Valor pleiteado a título de danos materiais: {}\n",
        amount_or_placeholder(&record.material_damages)
    ));
    out.push_str(&format!(
        "➡️ Valor pleiteado a título de repetição do indébito: {}\n",
        amount_or_placeholder(&record.undue_repayment)
    ));
    out.push_str(&format!(
        "📌 Valor total atribuído à causa: {}\n\n",
        format_brl(record.total_claim_value())
    ));

    // There is no section 3 in the filing template; the gap is deliberate.
    out.push_str("4. Opinião:\n");
    out.push_str(record.evidence_type.report_label());
    out.push('\n');
    out.push_str(or_missing(&record.evidence_details));
    out.push('\n');

    out
}
