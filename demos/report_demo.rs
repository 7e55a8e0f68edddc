use anyhow::Result;
use evidence_report_builder::{generate_report, CaseRecord, EvidenceType};

fn main() -> Result<()> {
    println!("🚀 Evidence Report Builder Demo\n");

    // 1. Start a drafting session and fill it in as an operator would
    let mut record = CaseRecord::new();
    record.process_number = "1002345-67.2024.8.26.0002".to_string();
    record.claimant = "Mariana Alves Ribeiro".to_string();
    record.respondent = "Companhia Aérea Nacional S.A.".to_string();
    record.subject_matter = "Ação de indenização por cancelamento de voo".to_string();
    record.dispute_summary =
        "Cancelamento de voo sem reacomodação nem reembolso, com pernoite não assistida."
            .to_string();

    // Amounts can arrive in either separator convention; they are normalized
    // only when the report is rendered
    record.contested_amount = "R$ 3.500,00".to_string();
    record.moral_damages = "15,000.00".to_string();
    record.material_damages = "850,25".to_string();

    record.evidence_details.push_str("o motivo do cancelamento e a assistência prestada.");

    // 2. Render the report
    println!("📄 Report with oral evidence:");
    println!("------------------------------------------------------------------");
    print!("{}", generate_report(&record));
    println!("------------------------------------------------------------------\n");

    // 3. Switch the evidence opinion and render again
    record.set_evidence_type(EvidenceType::Pericial);
    record.evidence_details =
        "Perícia técnica nos registros operacionais da companhia aérea.".to_string();

    println!("📄 Report with expert evidence:");
    println!("------------------------------------------------------------------");
    print!("{}", generate_report(&record));
    println!("------------------------------------------------------------------");

    Ok(())
}
