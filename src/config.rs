use serde::{Deserialize, Serialize};

use crate::{QwenImageError, Result};

/// Credential value shipped in config templates; a key left at this value was
/// never configured and must be rejected.
pub const PLACEHOLDER_API_KEY: &str = "API_Key";

fn default_model() -> String {
    "Qwen/Qwen-Image".to_string()
}

fn default_size() -> String {
    "1024*1024".to_string()
}

fn default_num_inference_steps() -> u32 {
    20
}

fn default_api_url() -> String {
    "https://api.siliconflow.cn".to_string()
}

/// Host-supplied plugin configuration. Read-only for the lifetime of the
/// command once it has been handed over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_size")]
    pub size: String,
    #[serde(default = "default_num_inference_steps")]
    pub num_inference_steps: u32,
    /// Base URL; trailing slashes are tolerated and stripped on use.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Literal integer, `"random"`, or empty (also random).
    #[serde(default)]
    pub seed: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            size: default_size(),
            num_inference_steps: default_num_inference_steps(),
            api_url: default_api_url(),
            seed: String::new(),
        }
    }
}

impl PluginConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw)
            .map_err(|err| QwenImageError::Config(format!("invalid plugin config: {err}")))
    }

    /// Fails fast when the operator never configured a real credential.
    pub fn validate_api_key(&self) -> Result<()> {
        if self.api_key.trim().is_empty() || self.api_key == PLACEHOLDER_API_KEY {
            return Err(QwenImageError::Config(
                "api_key is missing or left at the placeholder; set a real API key in the plugin config"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
