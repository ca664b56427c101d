// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Language-model fallback for utterances no rule recognises.
//!
//! The wire format is the OpenAI-compatible chat-completions API. Request
//! building and response parsing are free functions so they can be checked
//! without a network.

use crate::config::LlmConfig;
use crate::prompts::NO_RESPONSE;
use crate::AssistantError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Produces a free-form answer for an unrecognised utterance.
pub trait FallbackResponder {
    fn respond(&self, system_context: &str, utterance: &str) -> Result<String, AssistantError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

pub fn build_request(config: &LlmConfig, system_context: &str, utterance: &str) -> ChatRequest {
    ChatRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_context.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: utterance.to_string(),
            },
        ],
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    }
}

/// Text of the first choice, or a canned apology when the model said nothing.
pub fn parse_completion(body: &str) -> Result<String, AssistantError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .map(|m| m.content)
        .filter(|c| !c.trim().is_empty());
    Ok(content.unwrap_or_else(|| NO_RESPONSE.to_string()))
}

/// Maps a non-success response to an error, preferring the provider's message.
pub fn parse_error(status: u16, body: &str) -> AssistantError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| format!("HTTP error! status: {}", status));
    AssistantError::Api { status, message }
}

/// Blocking client for an OpenAI-compatible endpoint.
pub struct ChatCompletionClient {
    config: LlmConfig,
    api_key: Option<String>,
    http: reqwest::blocking::Client,
}

impl ChatCompletionClient {
    pub fn new(config: LlmConfig, api_key: Option<String>) -> Result<Self, AssistantError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        Ok(Self {
            config,
            api_key,
            http,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl FallbackResponder for ChatCompletionClient {
    fn respond(&self, system_context: &str, utterance: &str) -> Result<String, AssistantError> {
        let key = self.api_key.as_deref().ok_or(AssistantError::MissingApiKey)?;
        let request = build_request(&self.config, system_context, utterance);

        info!(
            "[Fallback] Asking {} at {} ({} chars)",
            self.config.model,
            self.config.endpoint,
            utterance.len()
        );
        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(key)
            .json(&request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        debug!("[Fallback] status={} body_bytes={}", status, body.len());

        if !status.is_success() {
            return Err(parse_error(status.as_u16(), &body));
        }
        parse_completion(&body)
    }
}
