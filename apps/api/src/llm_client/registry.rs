//! Provider registry: which generation providers exist, in what order they are
//! tried, and whether each one is usable. Built once at startup and shared
//! read-only afterwards.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
const VERTEX_MODEL: &str = "gemini-1.0-pro";
const HUGGINGFACE_API_BASE: &str = "https://api-inference.huggingface.co/models";
const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const OLLAMA_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Every provider the dispatcher knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Vertex AI `generateContent`: the primary structured-output provider.
    Vertex,
    /// Gemini REST API keyed by an API key.
    Gemini,
    /// Local Ollama server.
    Ollama,
    /// Hugging Face hosted inference.
    HuggingFace,
    /// Groq (OpenAI-compatible, low latency).
    Groq,
    /// Any other OpenAI-compatible endpoint.
    OpenAiCompatible,
}

impl ProviderKind {
    /// Fallback chain order. The primary provider is not part of it.
    pub const FALLBACK_ORDER: [ProviderKind; 5] = [
        ProviderKind::Gemini,
        ProviderKind::Ollama,
        ProviderKind::HuggingFace,
        ProviderKind::Groq,
        ProviderKind::OpenAiCompatible,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Vertex => "vertex_ai",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Ollama => "ollama",
            ProviderKind::HuggingFace => "huggingface",
            ProviderKind::Groq => "groq",
            ProviderKind::OpenAiCompatible => "openai_compatible",
        }
    }

    pub fn timeout(&self) -> Duration {
        match self {
            ProviderKind::Vertex | ProviderKind::Gemini => Duration::from_secs(45),
            ProviderKind::Groq => Duration::from_secs(20),
            ProviderKind::Ollama | ProviderKind::HuggingFace | ProviderKind::OpenAiCompatible => {
                Duration::from_secs(30)
            }
        }
    }
}

/// Connection parameters for one provider.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    pub available: bool,
    /// Full URL the generation request is POSTed to.
    pub endpoint: String,
    /// Bearer token / API key. `None` for keyless providers.
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl ProviderSettings {
    pub fn new(kind: ProviderKind, endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            kind,
            available: true,
            endpoint: endpoint.into(),
            api_key: None,
            model: model.into(),
            timeout: kind.timeout(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn unavailable(kind: ProviderKind) -> Self {
        Self {
            kind,
            available: false,
            endpoint: String::new(),
            api_key: None,
            model: String::new(),
            timeout: kind.timeout(),
        }
    }
}

/// Availability snapshot, exposed on `/health`.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderStatus {
    pub provider: ProviderKind,
    pub available: bool,
}

/// Ordered provider configuration: one optional primary, then the fixed
/// fallback chain. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    primary: ProviderSettings,
    fallbacks: Vec<ProviderSettings>,
}

impl ProviderRegistry {
    /// Builds a registry from explicit settings. Fallbacks are reordered into
    /// `ProviderKind::FALLBACK_ORDER`; kinds not supplied are marked unavailable.
    pub fn new(primary: Option<ProviderSettings>, fallbacks: Vec<ProviderSettings>) -> Self {
        let primary = primary.unwrap_or_else(|| ProviderSettings::unavailable(ProviderKind::Vertex));
        let fallbacks = ProviderKind::FALLBACK_ORDER
            .iter()
            .map(|kind| {
                fallbacks
                    .iter()
                    .find(|s| s.kind == *kind)
                    .cloned()
                    .unwrap_or_else(|| ProviderSettings::unavailable(*kind))
            })
            .collect();
        Self { primary, fallbacks }
    }

    /// A registry where every provider is unavailable. Every dispatch fails fast.
    pub fn offline() -> Self {
        Self::new(None, Vec::new())
    }

    /// Builds the registry from configuration. A provider is available only
    /// when all of its credentials are present; Ollama additionally has to
    /// answer a short probe.
    pub async fn from_config(config: &Config) -> Self {
        let primary = match (&config.google_cloud_project, &config.vertex_access_token) {
            (Some(project), Some(token)) => Some(
                ProviderSettings::new(
                    ProviderKind::Vertex,
                    format!(
                        "https://{loc}-aiplatform.googleapis.com/v1/projects/{project}/locations/{loc}/publishers/google/models/{VERTEX_MODEL}:generateContent",
                        loc = config.vertex_location,
                    ),
                    VERTEX_MODEL,
                )
                .with_api_key(token.clone()),
            ),
            _ => None,
        };

        let mut fallbacks = Vec::new();

        if let Some(key) = &config.google_genai_api_key {
            fallbacks.push(
                ProviderSettings::new(
                    ProviderKind::Gemini,
                    format!("{GEMINI_API_BASE}/{GEMINI_MODEL}:generateContent"),
                    GEMINI_MODEL,
                )
                .with_api_key(key.clone()),
            );
        }

        if let Some(base) = &config.ollama_url {
            if probe_ollama(base).await {
                fallbacks.push(ProviderSettings::new(
                    ProviderKind::Ollama,
                    format!("{}/api/generate", base.trim_end_matches('/')),
                    config.ollama_model.clone(),
                ));
            } else {
                debug!("Ollama not reachable at {base}");
            }
        }

        if let Some(key) = &config.huggingface_api_key {
            fallbacks.push(
                ProviderSettings::new(
                    ProviderKind::HuggingFace,
                    format!("{HUGGINGFACE_API_BASE}/{}", config.huggingface_model),
                    config.huggingface_model.clone(),
                )
                .with_api_key(key.clone()),
            );
        }

        if let Some(key) = &config.groq_api_key {
            fallbacks.push(
                ProviderSettings::new(ProviderKind::Groq, GROQ_CHAT_URL, config.groq_model.clone())
                    .with_api_key(key.clone()),
            );
        }

        if let (Some(url), Some(key)) = (&config.openai_free_api_url, &config.openai_free_api_key) {
            fallbacks.push(
                ProviderSettings::new(
                    ProviderKind::OpenAiCompatible,
                    format!("{}/v1/chat/completions", url.trim_end_matches('/')),
                    config.openai_free_model.clone(),
                )
                .with_api_key(key.clone()),
            );
        }

        let registry = Self::new(primary, fallbacks);
        let available: Vec<&str> = registry
            .statuses()
            .iter()
            .filter(|s| s.available)
            .map(|s| s.provider.name())
            .collect();
        if available.is_empty() {
            info!("No generation providers configured; using deterministic content only");
        } else {
            info!("Generation providers available: {}", available.join(", "));
        }
        registry
    }

    /// Providers in attempt order, skipping unavailable ones.
    pub fn attempt_order(&self) -> impl Iterator<Item = &ProviderSettings> {
        std::iter::once(&self.primary)
            .chain(self.fallbacks.iter())
            .filter(|s| s.available)
    }

    pub fn statuses(&self) -> Vec<ProviderStatus> {
        std::iter::once(&self.primary)
            .chain(self.fallbacks.iter())
            .map(|s| ProviderStatus {
                provider: s.kind,
                available: s.available,
            })
            .collect()
    }
}

/// `GET {base}/api/tags` with a short timeout; any error means "not running".
async fn probe_ollama(base: &str) -> bool {
    let client = match Client::builder().timeout(OLLAMA_PROBE_TIMEOUT).build() {
        Ok(c) => c,
        Err(_) => return false,
    };
    let url = format!("{}/api/tags", base.trim_end_matches('/'));
    matches!(client.get(url).send().await, Ok(r) if r.status().is_success())
}
