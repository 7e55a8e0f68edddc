use dotenv::dotenv;
use evidence_report_builder::llm::{CaseDocument, CaseExtractor, ExtractionEvent, GeminiClient};
use evidence_report_builder::{generate_report, CaseRecord};
use std::error::Error;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    let api_key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");

    let path = std::env::args()
        .nth(1)
        .ok_or("Usage: extract_and_report <case-document.pdf>")?;

    println!("🚀 Extracting case fields from '{}'...\n", path);

    // 1. Load the document to send inline
    let document = CaseDocument::from_path(Path::new(&path)).await?;
    println!(
        "📎 Loaded '{}' ({}, {} bytes)",
        document.display_name,
        document.mime_type,
        document.data.len()
    );

    // 2. Set up the extractor with a progress channel
    let client = GeminiClient::new(api_key);
    let extractor = CaseExtractor::new(client);

    let (tx, mut rx) = tokio::sync::mpsc::channel(16);
    let progress = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                ExtractionEvent::Starting => println!("🤖 Starting extraction..."),
                ExtractionEvent::AwaitingModel => println!("⏳ Waiting for Gemini..."),
                ExtractionEvent::ProcessingResponse => println!("🔄 Parsing structured output..."),
                ExtractionEvent::Success => println!("✅ Extraction complete."),
                ExtractionEvent::Failed { reason } => println!("❌ Extraction failed: {}", reason),
            }
        }
    });

    // 3. Extract, then map the result onto a fresh session record
    let mut record = CaseRecord::new();
    match extractor.extract(&document, Some(tx)).await {
        Ok(result) => {
            result.apply_to(&mut record);
        }
        Err(e) => {
            progress.await?;
            eprintln!(
                "Falha ao extrair dados do documento. Verifique o arquivo, a complexidade do documento ou tente novamente."
            );
            return Err(e.into());
        }
    }
    progress.await?;

    // 4. Render the evidence report
    println!("\n📄 Generated report:");
    println!("------------------------------------------------------------------");
    print!("{}", generate_report(&record));
    println!("------------------------------------------------------------------");

    Ok(())
}
