//! Remote LLM scorer
//!
//! Sends a fixed two-message prompt to an OpenAI-compatible chat completion
//! endpoint and reads back a JSON object of the form
//! `{"sentiment": "positif", "polarity": 0.8}`.
//!
//! Every failure (missing credential, transport error, malformed reply) is
//! logged and reported as `None` so the caller can fall back to local scoring.

use crate::config::RemoteConfig;
use async_trait::async_trait;
use sentiscope_core::{
    AnalysisResult, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Error, Result,
    SentimentLabel,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// System instruction constraining the reply to a JSON object
pub const SYSTEM_PROMPT: &str = "Vous êtes un expert en analyse de sentiment. Analysez le sentiment du texte et répondez uniquement avec un objet JSON contenant 'sentiment' (positif, négatif ou neutre) et 'polarity' (valeur entre -1 et 1).";

/// The remote model reports no subjectivity; it is derived as |polarity| * 0.8
const SUBJECTIVITY_FACTOR: f64 = 0.8;

/// Chat completion transport
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<ChatCompletionResponse>;
}

/// reqwest-backed transport with bearer authentication
pub struct HttpChatTransport {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpChatTransport {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::remote(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::remote(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::remote(format!("endpoint returned {status}")));
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| Error::remote(format!("invalid response body: {e}")))
    }
}

pub struct RemoteScorer {
    transport: Arc<dyn ChatTransport>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl RemoteScorer {
    /// Build an HTTP-backed scorer, or `None` when no credential is configured
    pub fn from_config(config: &RemoteConfig) -> Result<Option<Self>> {
        let Some(api_key) = config.credential() else {
            return Ok(None);
        };

        let transport = HttpChatTransport::new(config.endpoint(), api_key)?;
        Ok(Some(Self::with_transport(Arc::new(transport), config)))
    }

    /// Build a scorer over an arbitrary transport
    pub fn with_transport(transport: Arc<dyn ChatTransport>, config: &RemoteConfig) -> Self {
        Self {
            transport,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Model identifier reported in results
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn build_request(&self, text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(format!("Texte à analyser: {text}")),
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Score `text` remotely; `None` means unavailable
    pub async fn score(&self, text: &str) -> Option<AnalysisResult> {
        let request = self.build_request(text);

        let response = match self.transport.complete(&request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Remote sentiment analysis failed: {}", e);
                record_fallback("transport");
                return None;
            }
        };

        let Some(content) = response.first_content() else {
            error!("Remote reply contained no message content");
            record_fallback("malformed");
            return None;
        };

        match parse_reply(content, &self.model) {
            Ok(result) => {
                debug!(
                    "Remote scorer {} returned {} ({:.3})",
                    self.model, result.sentiment, result.polarity
                );
                Some(result)
            }
            Err(e) => {
                error!("Failed to decode remote reply {:?}: {}", content, e);
                record_fallback("malformed");
                None
            }
        }
    }
}

/// Count a downgrade to the local path
pub(crate) fn record_fallback(reason: &'static str) {
    metrics::counter!("sentiscope_remote_fallbacks_total", "reason" => reason).increment(1);
}

/// Log and count a remote request made without a credential
pub(crate) fn report_unconfigured() {
    warn!("Remote API key missing, using local analysis");
    record_fallback("unconfigured");
}

/// Decode the model's JSON reply into a result tagged with `model`.
///
/// Missing `polarity` defaults to 0 and missing `sentiment` to neutral.
/// A polarity outside [-1, 1], or anything else that does not fit the
/// expected shape, is an error.
pub fn parse_reply(content: &str, model: &str) -> Result<AnalysisResult> {
    let value: Value = serde_json::from_str(content)?;
    let object = value
        .as_object()
        .ok_or_else(|| Error::remote("reply is not a JSON object"))?;

    let polarity = match object.get("polarity") {
        None => 0.0,
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| Error::remote("polarity is not representable"))?,
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| Error::remote(format!("polarity {s:?} is not a number: {e}")))?,
        Some(other) => return Err(Error::remote(format!("polarity has invalid type: {other}"))),
    };
    if !polarity.is_finite() {
        return Err(Error::remote("polarity is not finite"));
    }
    if !(-1.0..=1.0).contains(&polarity) {
        return Err(Error::remote(format!("polarity {polarity} is outside [-1, 1]")));
    }

    let sentiment = match object.get("sentiment") {
        None => SentimentLabel::Neutral,
        Some(Value::String(s)) => s.parse().unwrap_or_else(|_| {
            warn!("Unrecognized remote label {:?}, deriving from polarity", s);
            SentimentLabel::from_polarity(polarity)
        }),
        Some(other) => return Err(Error::remote(format!("sentiment has invalid type: {other}"))),
    };

    Ok(AnalysisResult {
        polarity,
        subjectivity: polarity.abs() * SUBJECTIVITY_FACTOR,
        sentiment,
        model: model.to_string(),
    })
}
