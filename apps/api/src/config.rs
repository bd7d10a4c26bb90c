use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8001;
const DEFAULT_VERTEX_LOCATION: &str = "us-central1";
const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables.
///
/// Every provider credential is optional: a missing, empty or placeholder
/// (`your-…`) value leaves that provider unavailable. Only malformed numeric
/// values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_cloud_project: Option<String>,
    pub vertex_location: String,
    pub vertex_access_token: Option<String>,
    pub google_genai_api_key: Option<String>,
    /// `None` when explicitly disabled with an empty `OLLAMA_URL`.
    pub ollama_url: Option<String>,
    pub ollama_model: String,
    pub huggingface_api_key: Option<String>,
    pub huggingface_model: String,
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    pub openai_free_api_url: Option<String>,
    pub openai_free_api_key: Option<String>,
    pub openai_free_model: String,
    pub port: u16,
    pub rust_log: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Tests pass a map here instead
    /// of touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).and_then(credential);
        let or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        // An explicitly empty OLLAMA_URL turns the local server off.
        let ollama_url = match lookup("OLLAMA_URL") {
            Some(v) if v.trim().is_empty() => None,
            Some(v) => Some(v.trim().to_string()),
            None => Some(DEFAULT_OLLAMA_URL.to_string()),
        };

        Ok(Config {
            google_cloud_project: optional("GOOGLE_CLOUD_PROJECT"),
            vertex_location: or_default("VERTEX_LOCATION", DEFAULT_VERTEX_LOCATION),
            vertex_access_token: optional("VERTEX_ACCESS_TOKEN"),
            google_genai_api_key: optional("GOOGLE_GENAI_API_KEY"),
            ollama_url,
            ollama_model: or_default("OLLAMA_MODEL", "llama2"),
            huggingface_api_key: optional("HUGGINGFACE_API_KEY"),
            huggingface_model: or_default("HUGGINGFACE_MODEL", "microsoft/DialoGPT-medium"),
            groq_api_key: optional("GROQ_API_KEY"),
            groq_model: or_default("GROQ_MODEL", "mixtral-8x7b-32768"),
            openai_free_api_url: optional("OPENAI_FREE_API_URL"),
            openai_free_api_key: optional("OPENAI_FREE_API_KEY"),
            openai_free_model: or_default("OPENAI_FREE_MODEL", "gpt-3.5-turbo"),
            port: match lookup("PORT") {
                Some(raw) => raw
                    .trim()
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => DEFAULT_PORT,
            },
            rust_log: or_default("RUST_LOG", "info"),
            request_timeout_secs: match lookup("REQUEST_TIMEOUT_SECS") {
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("REQUEST_TIMEOUT_SECS must be a number of seconds, got '{raw}'"))?,
                None => DEFAULT_REQUEST_TIMEOUT_SECS,
            },
        })
    }
}

/// Keeps a credential only if it looks real.
fn credential(raw: String) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() || value.starts_with("your-") || value.starts_with("your_") {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_empty_environment() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8001);
        assert_eq!(config.vertex_location, "us-central1");
        assert_eq!(config.ollama_url.as_deref(), Some("http://localhost:11434"));
        assert_eq!(config.ollama_model, "llama2");
        assert_eq!(config.request_timeout_secs, 120);
        assert!(config.groq_api_key.is_none());
    }

    #[test]
    fn test_placeholder_keys_are_ignored() {
        let config = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "your-groq-api-key"),
            ("GOOGLE_GENAI_API_KEY", "  "),
            ("HUGGINGFACE_API_KEY", "hf_real"),
        ]))
        .unwrap();
        assert!(config.groq_api_key.is_none());
        assert!(config.google_genai_api_key.is_none());
        assert_eq!(config.huggingface_api_key.as_deref(), Some("hf_real"));
    }

    #[test]
    fn test_empty_ollama_url_disables_local_server() {
        let config = Config::from_lookup(lookup_from(&[("OLLAMA_URL", "")])).unwrap();
        assert!(config.ollama_url.is_none());
    }

    #[test]
    fn test_invalid_port_fails() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
