mod client;
mod config;
mod error;
mod model;
mod types;

pub use client::{ChatClient, parse_completion};
pub use config::{ChatConfig, DEFAULT_API_BASE, DEFAULT_MAX_TOKENS};
pub use error::Error;
pub use model::{DEFAULT_TEXT_MODEL, DEFAULT_VISION_MODEL, ModelSelection};
pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ChoiceMessage,
    ContentPart, ImageUrl, PNG_DATA_URI_PREFIX, Role,
};
