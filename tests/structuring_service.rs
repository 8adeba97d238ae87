use std::sync::Arc;

use redraft::application::ports::{LlmClientError, TextSplitter};
use redraft::application::services::{Stage, StructuringError, StructuringService};
use redraft::domain::DocumentId;
use redraft::infrastructure::llm::MockLlmClient;
use redraft::infrastructure::text_processing::RecursiveCharacterSplitter;

const SINGLE_PASS_THRESHOLD: usize = 6000;
const CHUNK_SIZE: usize = 8000;
const CHUNK_OVERLAP: usize = 200;
const TEST_CHUNK_SIZE: usize = 2000;
const TEST_CHUNK_OVERLAP: usize = 100;

fn service(
    llm_client: Arc<MockLlmClient>,
    chunk_size: usize,
    chunk_overlap: usize,
) -> StructuringService<MockLlmClient, RecursiveCharacterSplitter> {
    StructuringService::new(
        llm_client,
        Arc::new(RecursiveCharacterSplitter::new(chunk_size, chunk_overlap)),
        SINGLE_PASS_THRESHOLD,
    )
}

fn paragraphs(char_len: usize) -> String {
    let mut text = String::new();
    let mut topic = 0;
    while text.chars().count() < char_len {
        topic += 1;
        text.push_str(&format!(
            "TOPIC-{topic} covers one distinct subject in enough words to fill a paragraph of the test document.\n\n"
        ));
    }
    text.truncate(char_len);
    text
}

#[tokio::test]
async fn given_text_below_threshold_when_structuring_then_issues_one_call_and_returns_it_unmodified()
{
    let llm_client = Arc::new(MockLlmClient::new());
    llm_client.push_response("# Structured\n\n- point one");
    let service = service(Arc::clone(&llm_client), CHUNK_SIZE, CHUNK_OVERLAP);
    let text = "a".repeat(SINGLE_PASS_THRESHOLD - 1);

    let result = service.structure(&text, DocumentId::new()).await.unwrap();

    assert_eq!(llm_client.call_count(), 1);
    assert_eq!(result.as_str(), "# Structured\n\n- point one");
}

#[tokio::test]
async fn given_single_pass_when_structuring_then_prompt_embeds_the_full_text() {
    let llm_client = Arc::new(MockLlmClient::new());
    let service = service(Arc::clone(&llm_client), CHUNK_SIZE, CHUNK_OVERLAP);
    let text = "A short memo about quarterly planning.";

    service.structure(text, DocumentId::new()).await.unwrap();

    let calls = llm_client.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains(text));
}

#[tokio::test]
async fn given_text_above_threshold_when_structuring_then_uses_map_reduce() {
    let llm_client = Arc::new(MockLlmClient::new());
    let service = service(Arc::clone(&llm_client), CHUNK_SIZE, CHUNK_OVERLAP);
    // 7000 chars fits a single 8000-char chunk: one map call plus one reduce.
    let text = paragraphs(7000);

    service.structure(&text, DocumentId::new()).await.unwrap();

    assert_eq!(llm_client.call_count(), 2);
}

#[tokio::test]
async fn given_text_just_below_threshold_when_structuring_then_stays_single_pass() {
    let llm_client = Arc::new(MockLlmClient::new());
    let service = service(Arc::clone(&llm_client), CHUNK_SIZE, CHUNK_OVERLAP);
    let text = paragraphs(SINGLE_PASS_THRESHOLD - 1);

    service.structure(&text, DocumentId::new()).await.unwrap();

    assert_eq!(llm_client.call_count(), 1);
}

#[tokio::test]
async fn given_long_text_when_structuring_then_issues_one_map_call_per_chunk_plus_one_reduce() {
    let llm_client = Arc::new(MockLlmClient::new());
    let service = service(
        Arc::clone(&llm_client),
        TEST_CHUNK_SIZE,
        TEST_CHUNK_OVERLAP,
    );
    let text = paragraphs(7000);

    let splitter = RecursiveCharacterSplitter::new(TEST_CHUNK_SIZE, TEST_CHUNK_OVERLAP);
    let expected_chunks = splitter.split(&text, DocumentId::new()).await.unwrap().len();
    assert!(expected_chunks > 1);

    service.structure(&text, DocumentId::new()).await.unwrap();

    assert_eq!(llm_client.call_count(), expected_chunks + 1);
}

#[tokio::test]
async fn given_map_reduce_when_structuring_then_fragments_combine_in_chunk_order() {
    let llm_client = Arc::new(MockLlmClient::echoing());
    let service = service(
        Arc::clone(&llm_client),
        TEST_CHUNK_SIZE,
        TEST_CHUNK_OVERLAP,
    );
    let text = paragraphs(7000);

    let result = service.structure(&text, DocumentId::new()).await.unwrap();

    // With an echoing client the reduce output embeds every map fragment;
    // the topic markers must appear in their original order.
    let output = result.as_str();
    let mut last_position = 0;
    for topic in ["TOPIC-1 ", "TOPIC-20 ", "TOPIC-40 ", "TOPIC-60 "] {
        let position = output
            .find(topic)
            .unwrap_or_else(|| panic!("{topic} missing from combined output"));
        assert!(position >= last_position, "{topic} out of order");
        last_position = position;
    }
}

#[tokio::test]
async fn given_failing_call_in_single_pass_when_structuring_then_fails_with_stage_attribution() {
    let llm_client = Arc::new(MockLlmClient::new());
    llm_client.push_error(LlmClientError::RateLimited);
    let service = service(Arc::clone(&llm_client), CHUNK_SIZE, CHUNK_OVERLAP);

    let result = service.structure("short text", DocumentId::new()).await;

    match result {
        Err(error @ StructuringError::Completion { .. }) => {
            assert_eq!(error.stage(), Some(Stage::SinglePass));
        }
        other => panic!("expected completion error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_timeout_in_map_step_when_structuring_then_no_partial_document_is_returned() {
    let llm_client = Arc::new(MockLlmClient::new());
    llm_client.push_error(LlmClientError::Timeout);
    let service = service(
        Arc::clone(&llm_client),
        TEST_CHUNK_SIZE,
        TEST_CHUNK_OVERLAP,
    );
    let text = paragraphs(7000);

    let result = service.structure(&text, DocumentId::new()).await;

    match result {
        Err(error @ StructuringError::Completion { .. }) => {
            assert_eq!(error.stage(), Some(Stage::Map));
        }
        other => panic!("expected completion error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_empty_completion_when_structuring_then_fails_instead_of_returning_empty_document() {
    let llm_client = Arc::new(MockLlmClient::new());
    llm_client.push_response("   \n");
    let service = service(Arc::clone(&llm_client), CHUNK_SIZE, CHUNK_OVERLAP);

    let result = service.structure("short text", DocumentId::new()).await;

    assert!(matches!(
        result,
        Err(StructuringError::EmptyCompletion(Stage::SinglePass))
    ));
}
