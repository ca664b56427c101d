// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod assistant;
pub mod config;
pub mod fallback;
pub mod prompts;
pub mod reply;

use std::path::PathBuf;
use thiserror::Error;

pub use assistant::Assistant;
pub use config::{AssistantConfig, LlmConfig};
pub use fallback::{ChatCompletionClient, FallbackResponder};
pub use reply::ReplyStyle;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("No API key configured for the language model (set GROQ_API_KEY or pass --api-key)")]
    MissingApiKey,
    #[error("Empty message")]
    EmptyMessage,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Language model returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Platform config directory shared by every tripbot front end.
pub fn get_config_root() -> PathBuf {
    directories::ProjectDirs::from("net", "codemagen", "tripbot")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
