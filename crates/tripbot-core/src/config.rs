// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::reply::ReplyStyle;
use crate::AssistantError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Bump when a stored value has to be rewritten on load.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

pub const DEFAULT_LLM_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "llama-3.3-70b-versatile";
// Shipped as the default in schema v1, since retired by the provider.
const RETIRED_LLM_MODEL: &str = "llama3-70b-8192";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_LLM_ENDPOINT.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            max_tokens: 1000,
            temperature: 0.7,
            timeout_secs: 30,
        }
    }
}

/// Stored as `assistant.json`. The API key is deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_site_domain")]
    pub site_domain: String,
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
    #[serde(default)]
    pub reply_style: ReplyStyle,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub schema_version: u32,
}

fn default_site_domain() -> String {
    tripbot_nlu::DEFAULT_SITE_DOMAIN.to_string()
}

fn default_brand_name() -> String {
    "Codemagen".to_string()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            site_domain: default_site_domain(),
            brand_name: default_brand_name(),
            reply_style: ReplyStyle::default(),
            llm: LlmConfig::default(),
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }
}

impl AssistantConfig {
    pub fn default_path() -> PathBuf {
        crate::get_config_root().join("assistant.json")
    }

    /// Missing file means defaults. Outdated files are migrated and written back.
    pub fn load(path: &Path) -> Result<Self, AssistantError> {
        if !path.exists() {
            log::debug!("[Config] No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut config: AssistantConfig = serde_json::from_str(&content).map_err(|e| {
            log::error!("[Config] JSON parse error for {:?}: {}", path, e);
            e
        })?;

        if config.schema_version < CURRENT_SCHEMA_VERSION {
            log::info!(
                "[Config] Migrating {:?} from schema v{} to v{}",
                path,
                config.schema_version,
                CURRENT_SCHEMA_VERSION
            );
            config.migrate();
            if let Err(e) = config.save(path) {
                log::warn!("[Config] Could not write migrated config {:?}: {}", path, e);
            }
        }

        log::debug!(
            "[Config] Loaded {:?} (domain={}, model={})",
            path,
            config.site_domain,
            config.llm.model
        );
        Ok(config)
    }

    /// Like [`load`](Self::load) but never fails; problems are logged.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("[Config] Falling back to defaults, {:?} unusable: {}", path, e);
            Self::default()
        })
    }

    fn migrate(&mut self) {
        // v1 -> v2: default model was retired upstream.
        if self.schema_version <= 1 && self.llm.model == RETIRED_LLM_MODEL {
            self.llm.model = DEFAULT_LLM_MODEL.to_string();
            log::info!("[Config] v1->v2: model {} -> {}", RETIRED_LLM_MODEL, DEFAULT_LLM_MODEL);
        }
        self.schema_version = CURRENT_SCHEMA_VERSION;
    }

    pub fn save(&self, path: &Path) -> Result<(), AssistantError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        log::debug!("[Config] Saved {:?}", path);
        Ok(())
    }
}
