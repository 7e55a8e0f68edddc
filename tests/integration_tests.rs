use evidence_report_builder::*;
use std::fs::File;
use std::io::Write;

fn consumer_dispute_record() -> CaseRecord {
    CaseRecord {
        process_number: "1002345-67.2024.8.26.0002".to_string(),
        claimant: "Mariana Alves Ribeiro".to_string(),
        respondent: "Companhia Aérea Nacional S.A.".to_string(),
        subject_matter: "Ação de indenização por cancelamento de voo".to_string(),
        dispute_summary: "Cancelamento de voo sem reacomodação nem reembolso, com pernoite não assistida.".to_string(),
        contested_amount: "3.500,00".to_string(),
        moral_damages: "15000".to_string(),
        material_damages: "850,25".to_string(),
        undue_repayment: String::new(),
        evidence_type: EvidenceType::Oral,
        evidence_details: "Requer-se a oitiva do preposto da empresa requerida, para esclarecer: o motivo do cancelamento e a assistência prestada.".to_string(),
    }
}

#[test]
fn test_consumer_dispute_report() {
    let expected = "RELATÓRIO DE ESPECIFICAÇÃO DE PROVAS
Processo n.º: 1002345-67.2024.8.26.0002
Requerente: Mariana Alves Ribeiro
Requerida: Companhia Aérea Nacional S.A.
Objeto: Ação de indenização por cancelamento de voo

1. Objeto da Lide
Cancelamento de voo sem reacomodação nem reembolso, com pernoite não assistida.

2. 💰 Valor da Causa:
➡️ Valor impugnado: R$ 3.500,00
➡️ Valor pleiteado a título de danos morais: R$ 15.000,00
➡️ Valor pleiteado a título de danos materiais: R$ 850,25
➡️ Valor pleiteado a título de repetição do indébito: (não houver)
📌 Valor total atribuído à causa: R$ 19.350,25

4. Opinião:
🗣 Prova Oral/Testemunhal:
Requer-se a oitiva do preposto da empresa requerida, para esclarecer: o motivo do cancelamento e a assistência prestada.
";

    let report = generate_report(&consumer_dispute_record());
    assert_eq!(report, expected);

    println!("✓ Consumer dispute report test passed");
}

#[test]
fn test_blank_session_report() {
    let expected = "RELATÓRIO DE ESPECIFICAÇÃO DE PROVAS
Processo n.º: Não informado
Requerente: Não informado
Requerida: Não informado
Objeto: Não informado

1. Objeto da Lide
Não informado

2. 💰 Valor da Causa:
➡️ Valor impugnado: (não houver)
➡️ Valor pleiteado a título de danos morais: (não houver)
➡️ Valor pleiteado a título de danos materiais: (não houver)
➡️ Valor pleiteado a título de repetição do indébito: (não houver)
📌 Valor total atribuído à causa: R$ 0,00

4. Opinião:
🗣 Prova Oral/Testemunhal:
Requer-se a oitiva do preposto da empresa requerida, para esclarecer: 
";

    let report = generate_report(&CaseRecord::new());
    assert_eq!(report, expected);

    println!("✓ Blank session report test passed");
}

#[test]
fn test_mixed_convention_amounts() {
    let mut record = CaseRecord::new();
    record.contested_amount = "R$ 1.234,56".to_string();
    record.moral_damages = "1,234.56".to_string();
    record.material_damages = "1234.56".to_string();
    record.undue_repayment = "0,00".to_string();

    let report = generate_report(&record);

    assert!(report.contains("➡️ Valor impugnado: R$ 1.234,56\n"));
    assert!(report.contains("➡️ Valor pleiteado a título de danos morais: R$ 1.234,56\n"));
    assert!(report.contains("➡️ Valor pleiteado a título de danos materiais: R$ 1.234,56\n"));
    assert!(report.contains("➡️ Valor pleiteado a título de repetição do indébito: R$ 0,00\n"));
    assert!(report.contains("📌 Valor total atribuído à causa: R$ 3.703,68\n"));

    println!("✓ Mixed separator convention test passed");
}

#[test]
fn test_extraction_response_flows_into_report() {
    // Payload shaped like a real service reply: fenced, with an extra field
    // a newer revision might add.
    let raw = r#"```json
{
    "processo": "0009876-54.2023.8.26.0100",
    "requerente": "Pedro Santos",
    "requerida": "Energia Elétrica Distribuidora S.A.",
    "objeto": "Ação declaratória de inexistência de débito",
    "objetoLide": "Cobrança de consumo não registrado em medidor supostamente adulterado.",
    "valorImpugnado": "17740.59",
    "danosMorais": "8000.00",
    "danosMateriais": "",
    "repeticaoIndebito": "2359.18",
    "comarca": "São Paulo",
    "opiniaoProva": {
        "tipo": "pericial",
        "justificativa": "Necessária perícia técnica no medidor de energia."
    }
}
```"#;

    let result = ExtractionResult::from_json(raw).unwrap();
    let mut record = CaseRecord::new();
    result.apply_to(&mut record);

    let report = generate_report(&record);

    assert!(report.contains("Processo n.º: 0009876-54.2023.8.26.0100\n"));
    assert!(report.contains("Requerente: Pedro Santos\n"));
    assert!(report.contains("➡️ Valor impugnado: R$ 17.740,59\n"));
    assert!(report.contains("➡️ Valor pleiteado a título de danos morais: R$ 8.000,00\n"));
    assert!(report.contains("➡️ Valor pleiteado a título de danos materiais: (não houver)\n"));
    assert!(report.contains("📌 Valor total atribuído à causa: R$ 28.099,77\n"));
    assert!(report.contains("4. Opinião:\n🔎 Prova Pericial:\nNecessária perícia técnica no medidor de energia.\n"));

    println!("✓ Extraction to report flow test passed");
}

#[test]
fn test_extraction_preserves_user_entered_amounts() {
    let mut record = CaseRecord::new();
    record.contested_amount = "1.200,00".to_string();
    record.dispute_summary = "Resumo digitado pelo operador.".to_string();

    let raw = r#"{"requerente": "Lucia Barbosa", "valorImpugnado": "", "objetoLide": ""}"#;
    let result = ExtractionResult::from_json(raw).unwrap();
    result.apply_to(&mut record);

    assert_eq!(record.contested_amount, "1.200,00");
    assert_eq!(record.dispute_summary, "Resumo digitado pelo operador.");
    assert_eq!(record.claimant, "Lucia Barbosa");

    println!("✓ User-entered field preservation test passed");
}

#[test]
fn test_failed_extraction_leaves_record_intact() {
    let mut record = consumer_dispute_record();
    let snapshot = record.clone();

    let outcome = ExtractionResult::from_json("the service returned an error page");
    assert!(outcome.is_err());

    // Nothing was applied, so the session state is exactly as before.
    assert_eq!(record, snapshot);

    let report = generate_report(&record);
    assert!(report.contains("Requerente: Mariana Alves Ribeiro"));

    println!("✓ Failed extraction isolation test passed");
}

#[test]
fn test_schema_generation() {
    let schema_json = ExtractionResult::schema_as_json().unwrap();

    let mut file = File::create("schema_output.json").unwrap();
    file.write_all(schema_json.as_bytes()).unwrap();

    assert!(schema_json.contains("processo"));
    assert!(schema_json.contains("requerente"));
    assert!(schema_json.contains("objetoLide"));
    assert!(schema_json.contains("valorImpugnado"));
    assert!(schema_json.contains("danosMorais"));
    assert!(schema_json.contains("danosMateriais"));
    assert!(schema_json.contains("repeticaoIndebito"));
    assert!(schema_json.contains("opiniaoProva"));
    assert!(schema_json.contains("tipo"));
    assert!(schema_json.contains("justificativa"));

    println!("✓ Schema generation test passed - output: schema_output.json");
}

#[test]
fn test_session_reset_restores_blank_report() {
    let mut record = CaseRecord::new();
    record.process_number = "5005432-10.2024.8.26.0300".to_string();
    record.set_evidence_type(EvidenceType::Pericial);
    record.evidence_details = "Perícia grafotécnica no contrato.".to_string();

    record.reset();

    let report = generate_report(&record);
    assert!(report.contains("Processo n.º: Não informado\n"));
    assert!(report.contains("🗣 Prova Oral/Testemunhal:\n"));
    assert!(report.ends_with("para esclarecer: \n"));

    println!("✓ Session reset test passed");
}
