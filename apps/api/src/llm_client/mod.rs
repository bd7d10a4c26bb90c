//! LLM Client: the single point of entry for all text-generation calls.
//!
//! ARCHITECTURAL RULE: No other module may call a provider API directly.
//! Callers hand a prompt to a `TextGenerator` and get back text or nothing;
//! provider wire shapes never leave this module.
//!
//! Attempt order is fixed: the primary structured provider, then the fallback
//! chain in `ProviderKind::FALLBACK_ORDER`. One shot per provider, strictly
//! sequential, first non-empty reply wins.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub mod extract;
pub mod prompts;
pub mod providers;
pub mod registry;

use crate::llm_client::providers::{ProviderReply, ProviderRequest};
use crate::llm_client::registry::{ProviderKind, ProviderRegistry, ProviderSettings, ProviderStatus};

/// Gemini takes its API key in a header rather than the `key` query parameter.
const GEMINI_KEY_HEADER: &str = "x-goog-api-key";

/// Why a single provider attempt produced nothing. Logged, never surfaced.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Built with the URL stripped so endpoints never reach the logs.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("unrecognised payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("provider returned empty content")]
    EmptyPayload,

    #[error("cancelled before the provider answered")]
    Cancelled,
}

/// Anything that can turn a prompt into generated text.
///
/// `None` means "no AI content": every provider failed, none is configured,
/// or the call was cancelled. Callers fall back to deterministic content.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, cancel: &CancellationToken) -> Option<String>;

    /// Availability flags for diagnostics. Generators without providers report none.
    fn provider_statuses(&self) -> Vec<ProviderStatus> {
        Vec::new()
    }
}

/// Walks the provider registry for every prompt.
#[derive(Clone)]
pub struct GenerationDispatcher {
    client: Client,
    registry: Arc<ProviderRegistry>,
}

impl GenerationDispatcher {
    pub fn new(registry: Arc<ProviderRegistry>) -> anyhow::Result<Self> {
        // Per-provider timeouts are applied on each request.
        let client = Client::builder().build()?;
        Ok(Self { client, registry })
    }

    /// Tries every available provider in order and returns the first
    /// non-empty reply.
    pub async fn dispatch(&self, prompt: &str, cancel: &CancellationToken) -> Option<String> {
        for settings in self.registry.attempt_order() {
            if cancel.is_cancelled() {
                debug!("Dispatch cancelled before trying {}", settings.kind.name());
                return None;
            }

            match self.attempt(settings, prompt, cancel).await {
                Ok(text) => {
                    info!("Generated content using {}", settings.kind.name());
                    return Some(text);
                }
                Err(ProviderError::Cancelled) => {
                    debug!("Dispatch cancelled during {}", settings.kind.name());
                    return None;
                }
                Err(e) => warn!("{} request failed: {e}", settings.kind.name()),
            }
        }

        warn!("All generation providers failed; falling back to deterministic content");
        None
    }

    async fn attempt(
        &self,
        settings: &ProviderSettings,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<String, ProviderError> {
        tokio::select! {
            _ = cancel.cancelled() => Err(ProviderError::Cancelled),
            result = self.call_provider(settings, prompt) => result,
        }
    }

    async fn call_provider(
        &self,
        settings: &ProviderSettings,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let body = ProviderRequest::build(settings, prompt);

        let mut request = self
            .client
            .post(&settings.endpoint)
            .timeout(settings.timeout)
            .json(&body);
        if let Some(key) = &settings.api_key {
            request = match settings.kind {
                ProviderKind::Gemini => request.header(GEMINI_KEY_HEADER, key),
                _ => request.bearer_auth(key),
            };
        }

        let response = request.send().await.map_err(http_error)?;
        let status = response.status();
        let text = response.text().await.map_err(http_error)?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        ProviderReply::decode(settings.kind, &text)?
            .into_text()
            .ok_or(ProviderError::EmptyPayload)
    }
}

fn http_error(e: reqwest::Error) -> ProviderError {
    ProviderError::Http(e.without_url())
}

#[async_trait]
impl TextGenerator for GenerationDispatcher {
    async fn generate(&self, prompt: &str, cancel: &CancellationToken) -> Option<String> {
        self.dispatch(prompt, cancel).await
    }

    fn provider_statuses(&self) -> Vec<ProviderStatus> {
        self.registry.statuses()
    }
}

#[cfg(test)]
pub mod testing {
    //! Scripted generators for exercising callers without a network.

    use std::sync::Mutex;

    use super::*;

    /// Returns queued replies in order; `None` entries (or an empty queue)
    /// behave like a total provider failure. Records every prompt it sees.
    #[derive(Default)]
    pub struct ScriptedGenerator {
        replies: Mutex<Vec<Option<String>>>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        pub fn offline() -> Self {
            Self::default()
        }

        pub fn replying(replies: &[&str]) -> Self {
            Self {
                replies: Mutex::new(replies.iter().rev().map(|r| Some(r.to_string())).collect()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn prompt_count(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str, _cancel: &CancellationToken) -> Option<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies.lock().unwrap().pop().flatten()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;

    /// Spawns a local provider double and returns its base URL.
    async fn spawn_provider(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn counting_router(hits: Arc<AtomicUsize>, status: StatusCode, body: Value) -> Router {
        Router::new().route(
            "/generate",
            post(move |Json(_req): Json<Value>| {
                let hits = hits.clone();
                let body = body.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    (status, Json(body))
                }
            }),
        )
    }

    fn dispatcher(primary: Option<ProviderSettings>, fallbacks: Vec<ProviderSettings>) -> GenerationDispatcher {
        GenerationDispatcher::new(Arc::new(ProviderRegistry::new(primary, fallbacks))).unwrap()
    }

    #[tokio::test]
    async fn test_offline_registry_returns_none() {
        let d = dispatcher(None, vec![]);
        assert_eq!(d.dispatch("prompt", &CancellationToken::new()).await, None);
    }

    #[tokio::test]
    async fn test_primary_success_short_circuits_chain() {
        let vertex_hits = Arc::new(AtomicUsize::new(0));
        let groq_hits = Arc::new(AtomicUsize::new(0));
        let vertex = spawn_provider(counting_router(
            vertex_hits.clone(),
            StatusCode::OK,
            json!({"candidates": [{"content": {"parts": [{"text": "from vertex"}]}}]}),
        ))
        .await;
        let groq = spawn_provider(counting_router(
            groq_hits.clone(),
            StatusCode::OK,
            json!({"choices": [{"message": {"content": "from groq"}}]}),
        ))
        .await;

        let d = dispatcher(
            Some(
                ProviderSettings::new(ProviderKind::Vertex, format!("{vertex}/generate"), "m")
                    .with_api_key("token"),
            ),
            vec![ProviderSettings::new(ProviderKind::Groq, format!("{groq}/generate"), "m")],
        );

        let text = d.dispatch("prompt", &CancellationToken::new()).await;
        assert_eq!(text.as_deref(), Some("from vertex"));
        assert_eq!(vertex_hits.load(Ordering::SeqCst), 1);
        assert_eq!(groq_hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failures_fall_through_in_order() {
        let gemini_hits = Arc::new(AtomicUsize::new(0));
        let ollama_hits = Arc::new(AtomicUsize::new(0));
        let gemini = spawn_provider(counting_router(
            gemini_hits.clone(),
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "boom"}),
        ))
        .await;
        let ollama = spawn_provider(counting_router(
            ollama_hits.clone(),
            StatusCode::OK,
            json!({"response": "from ollama"}),
        ))
        .await;

        let d = dispatcher(
            None,
            vec![
                ProviderSettings::new(ProviderKind::Ollama, format!("{ollama}/generate"), "llama2"),
                ProviderSettings::new(ProviderKind::Gemini, format!("{gemini}/generate"), "g"),
            ],
        );

        let text = d.dispatch("prompt", &CancellationToken::new()).await;
        assert_eq!(text.as_deref(), Some("from ollama"));
        assert_eq!(gemini_hits.load(Ordering::SeqCst), 1, "no retries");
        assert_eq!(ollama_hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_payload_counts_as_failure() {
        let hf = spawn_provider(counting_router(
            Arc::new(AtomicUsize::new(0)),
            StatusCode::OK,
            json!([{"generated_text": ""}]),
        ))
        .await;
        let openai = spawn_provider(counting_router(
            Arc::new(AtomicUsize::new(0)),
            StatusCode::OK,
            json!({"choices": [{"message": {"content": "compatible"}}]}),
        ))
        .await;

        let d = dispatcher(
            None,
            vec![
                ProviderSettings::new(ProviderKind::HuggingFace, format!("{hf}/generate"), "m"),
                ProviderSettings::new(
                    ProviderKind::OpenAiCompatible,
                    format!("{openai}/generate"),
                    "m",
                ),
            ],
        );
        let text = d.dispatch("prompt", &CancellationToken::new()).await;
        assert_eq!(text.as_deref(), Some("compatible"));
    }

    #[tokio::test]
    async fn test_all_fail_returns_none() {
        let down = spawn_provider(counting_router(
            Arc::new(AtomicUsize::new(0)),
            StatusCode::SERVICE_UNAVAILABLE,
            json!({}),
        ))
        .await;
        let d = dispatcher(
            None,
            vec![
                ProviderSettings::new(ProviderKind::Gemini, format!("{down}/generate"), "m"),
                // Nothing listens on the discard port.
                ProviderSettings::new(ProviderKind::Groq, "http://127.0.0.1:9/generate", "m"),
            ],
        );
        assert_eq!(d.dispatch("prompt", &CancellationToken::new()).await, None);
    }

    #[tokio::test]
    async fn test_unavailable_provider_is_skipped() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = spawn_provider(counting_router(
            hits.clone(),
            StatusCode::OK,
            json!({"response": "should not be used"}),
        ))
        .await;
        let mut ollama = ProviderSettings::new(ProviderKind::Ollama, format!("{base}/generate"), "m");
        ollama.available = false;

        let d = dispatcher(None, vec![ollama]);
        assert_eq!(d.dispatch("prompt", &CancellationToken::new()).await, None);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_slow_provider_times_out_and_chain_continues() {
        let slow = spawn_provider(Router::new().route(
            "/generate",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"response": "too late"}))
            }),
        ))
        .await;
        let fast = spawn_provider(counting_router(
            Arc::new(AtomicUsize::new(0)),
            StatusCode::OK,
            json!({"choices": [{"message": {"content": "fast answer"}}]}),
        ))
        .await;

        let d = dispatcher(
            None,
            vec![
                ProviderSettings::new(ProviderKind::Ollama, format!("{slow}/generate"), "m")
                    .with_timeout(Duration::from_millis(200)),
                ProviderSettings::new(ProviderKind::Groq, format!("{fast}/generate"), "m"),
            ],
        );
        let text = d.dispatch("prompt", &CancellationToken::new()).await;
        assert_eq!(text.as_deref(), Some("fast answer"));
    }

    #[tokio::test]
    async fn test_cancellation_aborts_in_flight_call() {
        let fast_hits = Arc::new(AtomicUsize::new(0));
        let slow = spawn_provider(Router::new().route(
            "/generate",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Json(json!({"response": "never"}))
            }),
        ))
        .await;
        let fast = spawn_provider(counting_router(
            fast_hits.clone(),
            StatusCode::OK,
            json!({"choices": [{"message": {"content": "unused"}}]}),
        ))
        .await;

        let d = dispatcher(
            None,
            vec![
                ProviderSettings::new(ProviderKind::Ollama, format!("{slow}/generate"), "m"),
                ProviderSettings::new(ProviderKind::Groq, format!("{fast}/generate"), "m"),
            ],
        );

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            trigger.cancel();
        });

        let started = std::time::Instant::now();
        assert_eq!(d.dispatch("prompt", &cancel).await, None);
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(fast_hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_bearer_key_sent() {
        let router = Router::new().route(
            "/generate",
            post(|headers: axum::http::HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({"choices": [{"message": {"content": auth}}]}))
            }),
        );
        let base = spawn_provider(router).await;
        let d = dispatcher(
            None,
            vec![ProviderSettings::new(ProviderKind::Groq, format!("{base}/generate"), "m")
                .with_api_key("gsk-secret")],
        );
        let text = d.dispatch("prompt", &CancellationToken::new()).await;
        assert_eq!(text.as_deref(), Some("Bearer gsk-secret"));
    }

    #[tokio::test]
    async fn test_gemini_key_sent_in_header() {
        let router = Router::new().route(
            "/generate",
            post(
                |axum::extract::RawQuery(query): axum::extract::RawQuery,
                 headers: axum::http::HeaderMap| async move {
                    let key = headers
                        .get("x-goog-api-key")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    let text = format!(
                        "{key}|{}|{}",
                        query.unwrap_or_default(),
                        headers.contains_key("authorization")
                    );
                    Json(json!({"candidates": [{"content": {"parts": [{"text": text}]}}]}))
                },
            ),
        );
        let base = spawn_provider(router).await;
        let d = dispatcher(
            None,
            vec![ProviderSettings::new(ProviderKind::Gemini, format!("{base}/generate"), "g")
                .with_api_key("AIza-secret")],
        );
        let text = d.dispatch("prompt", &CancellationToken::new()).await;
        assert_eq!(text.as_deref(), Some("AIza-secret||false"));
    }

    #[tokio::test]
    async fn test_connection_error_omits_endpoint() {
        let d = dispatcher(None, vec![]);
        // Nothing listens on the discard port.
        let settings = ProviderSettings::new(
            ProviderKind::Gemini,
            "http://127.0.0.1:9/v1beta/models/g:generateContent?key=AIza-leaked",
            "g",
        )
        .with_api_key("AIza-secret");

        let err = d.call_provider(&settings, "prompt").await.unwrap_err();
        assert!(matches!(err, ProviderError::Http(_)));
        for rendered in [err.to_string(), format!("{err:?}")] {
            assert!(!rendered.contains("AIza-leaked"), "{rendered}");
            assert!(!rendered.contains("AIza-secret"), "{rendered}");
        }
    }
}
