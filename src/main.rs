use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use redraft::application::services::{PipelineService, StructuringService};
use redraft::config::Settings;
use redraft::domain::DocumentFormat;
use redraft::infrastructure::llm::OpenAiClient;
use redraft::infrastructure::observability::{init_tracing, TracingConfig};
use redraft::infrastructure::text_processing::{
    CompositeFileLoader, DuplicateDetector, RecursiveCharacterSplitter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(TracingConfig::from(&settings.logging));

    let path = std::env::args()
        .nth(1)
        .context("usage: redraft <document.pdf|document.docx|document.txt>")?;
    let path = Path::new(&path);

    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(DocumentFormat::from_extension)
        .with_context(|| format!("unsupported file type: {}", path.display()))?;

    let data = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document")
        .to_string();

    anyhow::ensure!(
        !settings.llm.api_key.is_empty(),
        "OPENAI_API_KEY must be set"
    );

    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());
    let llm_client = Arc::new(OpenAiClient::new(
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
        settings.llm.temperature,
        Duration::from_secs(settings.llm.timeout_secs),
        settings.llm.max_concurrency,
    ));
    let text_splitter = Arc::new(RecursiveCharacterSplitter::new(
        settings.chunking.chunk_size,
        settings.chunking.chunk_overlap,
    ));
    let structuring_service = Arc::new(StructuringService::new(
        llm_client,
        text_splitter,
        settings.structuring.single_pass_threshold,
    ));
    let pipeline = PipelineService::new(
        file_loader,
        structuring_service,
        DuplicateDetector::new(settings.dedup.similarity_threshold),
        settings.structuring.advanced_cleaning,
    );

    let structured = pipeline.process(&data, filename, format).await?;
    println!("{structured}");

    Ok(())
}
