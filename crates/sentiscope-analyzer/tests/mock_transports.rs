//! Mock chat transports for testing
//!
//! Provides configurable implementations of the ChatTransport trait for
//! exercising the remote scorer and its fallback to local scoring.

use async_trait::async_trait;
use sentiscope_analyzer::{ChatTransport, RemoteConfig, RemoteScorer, SentimentEngine};
use sentiscope_core::{
    AnalysisResult, ChatCompletionRequest, ChatCompletionResponse, Error, Result, SentimentLabel,
};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const MODEL: &str = "gpt-4o-mini";

/// A transport that answers every request with the same message content
pub struct MockTransport {
    content: Option<String>,
    simulated_latency: Option<Duration>,
    call_count: AtomicU32,
    last_request: Mutex<Option<ChatCompletionRequest>>,
}

impl MockTransport {
    /// Reply with `content` as the assistant message
    pub fn replying(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
            simulated_latency: None,
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Reply with no choices at all
    pub fn empty() -> Self {
        Self {
            content: None,
            ..Self::replying("")
        }
    }

    /// Set simulated latency for this transport
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = Some(latency);
        self
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn last_request(&self) -> Option<ChatCompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(latency) = self.simulated_latency {
            tokio::time::sleep(latency).await;
        }

        let body = match &self.content {
            Some(content) => serde_json::json!({
                "id": "chatcmpl-mock",
                "model": request.model,
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": content},
                    "finish_reason": "stop"
                }]
            }),
            None => serde_json::json!({"id": "chatcmpl-mock", "choices": []}),
        };

        Ok(serde_json::from_value(body)?)
    }
}

/// A transport that always fails - for testing error paths
pub struct FailingTransport {
    error_message: String,
}

impl FailingTransport {
    pub fn new() -> Self {
        Self {
            error_message: "Simulated connection refused".to_string(),
        }
    }
}

#[async_trait]
impl ChatTransport for FailingTransport {
    async fn complete(&self, _request: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        Err(Error::remote(&self.error_message))
    }
}

fn remote_config() -> RemoteConfig {
    RemoteConfig {
        api_key: Some("sk-test".to_string()),
        model: MODEL.to_string(),
        ..Default::default()
    }
}

fn engine_with(transport: Arc<dyn ChatTransport>) -> SentimentEngine {
    let scorer = RemoteScorer::with_transport(transport, &remote_config());
    SentimentEngine::builder()
        .remote(Some(scorer))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_remote_reply_is_used() {
    let transport = Arc::new(MockTransport::replying(
        r#"{"sentiment":"positive","polarity":0.8}"#,
    ));
    let engine = engine_with(transport.clone());

    let result = engine.analyze("Produit correct", true).await;
    assert_eq!(result.polarity, 0.8);
    assert!((result.subjectivity - 0.64).abs() < 1e-12);
    assert_eq!(result.sentiment, SentimentLabel::Positive);
    assert_eq!(result.model, MODEL);
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_request_carries_prompt_contract() {
    let transport = Arc::new(MockTransport::replying(r#"{"sentiment":"neutre","polarity":0}"#));
    let engine = engine_with(transport.clone());

    engine.analyze("Il pleut aujourd'hui", true).await;

    let request = transport.last_request().unwrap();
    assert_eq!(request.model, MODEL);
    assert_eq!(request.temperature, 0.0);
    assert_eq!(request.max_tokens, 100);
    assert_eq!(request.messages[0].role, "system");
    assert!(request.messages[0].content.contains("JSON"));
    assert_eq!(request.messages[1].role, "user");
    assert!(request.messages[1].content.contains("Il pleut aujourd'hui"));
}

#[tokio::test]
async fn test_malformed_reply_falls_back_to_local() {
    let transport = Arc::new(MockTransport::replying("Le sentiment est positif."));
    let engine = engine_with(transport.clone());

    let text = "Je suis très déçu !";
    let result = engine.analyze(text, true).await;

    assert_eq!(result.model, "local");
    assert_eq!(result, engine.analyze_local(text));
    assert_eq!(result.sentiment, SentimentLabel::Negative);
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_out_of_range_polarity_falls_back_to_local() {
    let transport = Arc::new(MockTransport::replying(
        r#"{"sentiment":"positive","polarity":2.0}"#,
    ));
    let engine = engine_with(transport.clone());

    let text = "Je suis très content de cette application !";
    let result = engine.analyze(text, true).await;

    assert_eq!(transport.call_count(), 1);
    assert!(result.is_local());
    assert_eq!(result, engine.analyze_local(text));
    assert!((0.0..=1.0).contains(&result.subjectivity));
    assert!((-1.0..=1.0).contains(&result.polarity));
}

#[tokio::test]
async fn test_empty_choices_fall_back_to_local() {
    let engine = engine_with(Arc::new(MockTransport::empty()));

    let result = engine.analyze("Je suis très content", true).await;
    assert!(result.is_local());
    assert_eq!(result.sentiment, SentimentLabel::Positive);
}

#[tokio::test]
async fn test_transport_failure_falls_back_to_local() {
    let engine = engine_with(Arc::new(FailingTransport::new()));

    let text = "Ce service ne fonctionne pas correctement.";
    let result = engine.analyze(text, true).await;
    assert!(result.is_local());
    assert_eq!(result.polarity, -0.5);
}

#[tokio::test]
async fn test_remote_not_called_when_not_requested() {
    let transport = Arc::new(MockTransport::replying(r#"{"sentiment":"positive","polarity":1}"#));
    let engine = engine_with(transport.clone());

    let result = engine.analyze("Super application", false).await;
    assert!(result.is_local());
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_blank_text_skips_remote() {
    let transport = Arc::new(MockTransport::replying(r#"{"sentiment":"positive","polarity":1}"#));
    let engine = engine_with(transport.clone());

    for text in ["", "   \n\t "] {
        assert_eq!(engine.analyze(text, true).await, AnalysisResult::neutral());
    }
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_batch_with_slow_remote_keeps_order() {
    let transport = Arc::new(
        MockTransport::replying(r#"{"sentiment":"negative","polarity":-0.4}"#)
            .with_latency(Duration::from_millis(5)),
    );
    let scorer = RemoteScorer::with_transport(transport.clone(), &remote_config());
    let engine = SentimentEngine::builder()
        .remote(Some(scorer))
        .batch_concurrency(4)
        .build()
        .unwrap();

    let texts = vec!["un", "", "trois", "quatre", "cinq", ""];
    let results = engine.analyze_batch(&texts, true).await;

    assert_eq!(results.len(), texts.len());
    for (text, result) in texts.iter().zip(&results) {
        if text.is_empty() {
            assert_eq!(result, &AnalysisResult::neutral());
        } else {
            assert_eq!(result.model, MODEL);
            assert_eq!(result.sentiment, SentimentLabel::Negative);
        }
    }
    assert_eq!(transport.call_count(), 4);
}
