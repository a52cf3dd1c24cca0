mod command;
mod config;
mod error;
mod generation;
mod seed;
pub mod utils;

pub use command::{COMMAND, ChatCommand, ChatReply, QwenImageCommand, USAGE};
pub use config::{PLACEHOLDER_API_KEY, PluginConfig};
pub use error::{QwenImageError, Result};
pub use generation::{GeneratedImage, GenerationRequest, ImageGenerationClient};
pub use seed::{SEED_MAX, SEED_RANDOM, SeedSetting};
