//! Wire shapes for each provider family. Nothing in here escapes the
//! dispatcher: a request is built from a prompt, and a reply is reduced to
//! plain text (or nothing) at the boundary.

use serde::{Deserialize, Serialize};

use crate::llm_client::registry::{ProviderKind, ProviderSettings};

pub const TEMPERATURE: f32 = 0.7;
pub const TOP_P: f32 = 0.9;
pub const TOP_K: u32 = 40;
pub const MAX_OUTPUT_TOKENS: u32 = 1000;

const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";
const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

/// Request body for one provider call. Serialized without a tag.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProviderRequest<'a> {
    GenerateContent(GenerateContentRequest<'a>),
    Ollama(OllamaRequest<'a>),
    HuggingFace(HuggingFaceRequest<'a>),
    ChatCompletion(ChatCompletionRequest<'a>),
}

/// "contents/parts" shape shared by Vertex AI and the Gemini REST API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub generation_config: GenerationConfig,
    pub safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'a str,
    pub parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct TextPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub stop_sequences: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SafetySetting {
    pub category: &'static str,
    pub threshold: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OllamaRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub struct HuggingFaceRequest<'a> {
    pub inputs: &'a str,
    pub parameters: HuggingFaceParameters,
}

#[derive(Debug, Serialize)]
pub struct HuggingFaceParameters {
    pub max_length: u32,
    pub temperature: f32,
    pub do_sample: bool,
}

/// OpenAI-compatible chat completion (Groq and generic endpoints).
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> ProviderRequest<'a> {
    pub fn build(settings: &'a ProviderSettings, prompt: &'a str) -> Self {
        match settings.kind {
            ProviderKind::Vertex | ProviderKind::Gemini => {
                ProviderRequest::GenerateContent(GenerateContentRequest {
                    contents: vec![Content {
                        role: "user",
                        parts: vec![TextPart { text: prompt }],
                    }],
                    generation_config: GenerationConfig {
                        temperature: TEMPERATURE,
                        top_p: TOP_P,
                        top_k: TOP_K,
                        max_output_tokens: MAX_OUTPUT_TOKENS,
                        stop_sequences: Vec::new(),
                    },
                    safety_settings: HARM_CATEGORIES
                        .into_iter()
                        .map(|category| SafetySetting {
                            category,
                            threshold: SAFETY_THRESHOLD,
                        })
                        .collect(),
                })
            }
            ProviderKind::Ollama => ProviderRequest::Ollama(OllamaRequest {
                model: &settings.model,
                prompt,
                stream: false,
            }),
            ProviderKind::HuggingFace => ProviderRequest::HuggingFace(HuggingFaceRequest {
                inputs: prompt,
                parameters: HuggingFaceParameters {
                    max_length: MAX_OUTPUT_TOKENS,
                    temperature: TEMPERATURE,
                    do_sample: true,
                },
            }),
            ProviderKind::Groq | ProviderKind::OpenAiCompatible => {
                ProviderRequest::ChatCompletion(ChatCompletionRequest {
                    model: &settings.model,
                    messages: vec![ChatMessage {
                        role: "user",
                        content: prompt,
                    }],
                    max_tokens: MAX_OUTPUT_TOKENS,
                    temperature: TEMPERATURE,
                })
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Replies
// ────────────────────────────────────────────────────────────────────────────

/// A decoded provider reply, one variant per wire shape.
#[derive(Debug)]
pub enum ProviderReply {
    GenerateContent(GenerateContentResponse),
    Ollama(OllamaResponse),
    HuggingFace(Vec<HuggingFaceGeneration>),
    ChatCompletion(ChatCompletionResponse),
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OllamaResponse {
    pub response: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HuggingFaceGeneration {
    pub generated_text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ProviderReply {
    /// Decodes a successful response body according to the provider kind.
    pub fn decode(kind: ProviderKind, body: &str) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            ProviderKind::Vertex | ProviderKind::Gemini => {
                ProviderReply::GenerateContent(serde_json::from_str(body)?)
            }
            ProviderKind::Ollama => ProviderReply::Ollama(serde_json::from_str(body)?),
            ProviderKind::HuggingFace => ProviderReply::HuggingFace(serde_json::from_str(body)?),
            ProviderKind::Groq | ProviderKind::OpenAiCompatible => {
                ProviderReply::ChatCompletion(serde_json::from_str(body)?)
            }
        })
    }

    /// The generated text, if the payload field is present and non-blank.
    pub fn into_text(self) -> Option<String> {
        let text = match self {
            ProviderReply::GenerateContent(r) => r
                .candidates
                .into_iter()
                .next()
                .and_then(|c| c.content)
                .and_then(|c| c.parts.into_iter().next())
                .and_then(|p| p.text),
            ProviderReply::Ollama(r) => r.response,
            ProviderReply::HuggingFace(r) => r.into_iter().next().and_then(|g| g.generated_text),
            ProviderReply::ChatCompletion(r) => r
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message)
                .and_then(|m| m.content),
        };
        text.filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_content_request_shape() {
        let settings = ProviderSettings::new(ProviderKind::Gemini, "http://g", "gemini");
        let body = serde_json::to_value(ProviderRequest::build(&settings, "hello")).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["topK"], 40);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 1000);
        assert_eq!(body["safetySettings"].as_array().unwrap().len(), 4);
        assert_eq!(body["safetySettings"][0]["threshold"], "BLOCK_MEDIUM_AND_ABOVE");
    }

    #[test]
    fn test_ollama_request_shape() {
        let settings = ProviderSettings::new(ProviderKind::Ollama, "http://o", "llama2");
        let body = serde_json::to_value(ProviderRequest::build(&settings, "hi")).unwrap();
        assert_eq!(body, json!({"model": "llama2", "prompt": "hi", "stream": false}));
    }

    #[test]
    fn test_chat_completion_request_shape() {
        let settings = ProviderSettings::new(ProviderKind::Groq, "http://q", "mixtral");
        let body = serde_json::to_value(ProviderRequest::build(&settings, "hi")).unwrap();
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["model"], "mixtral");
    }

    #[test]
    fn test_decode_generate_content_text() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "career plan"}]}}]}"#;
        let reply = ProviderReply::decode(ProviderKind::Vertex, body).unwrap();
        assert_eq!(reply.into_text().as_deref(), Some("career plan"));
    }

    #[test]
    fn test_decode_generate_content_blocked_has_no_text() {
        let reply = ProviderReply::decode(ProviderKind::Gemini, r#"{"candidates": []}"#).unwrap();
        assert_eq!(reply.into_text(), None);
    }

    #[test]
    fn test_decode_huggingface_list() {
        let body = r#"[{"generated_text": "hf says hi"}]"#;
        let reply = ProviderReply::decode(ProviderKind::HuggingFace, body).unwrap();
        assert_eq!(reply.into_text().as_deref(), Some("hf says hi"));
    }

    #[test]
    fn test_blank_payload_is_no_text() {
        let body = r#"{"choices": [{"message": {"content": "   "}}]}"#;
        let reply = ProviderReply::decode(ProviderKind::OpenAiCompatible, body).unwrap();
        assert_eq!(reply.into_text(), None);
    }

    #[test]
    fn test_decode_wrong_shape_is_error() {
        assert!(ProviderReply::decode(ProviderKind::HuggingFace, r#"{"error": "loading"}"#).is_err());
    }
}
