use serde::{Deserialize, Serialize};

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// The payload is expected to already be base64; it is not decoded or checked.
    pub fn png_base64(payload: &str) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl {
                url: format!("{PNG_DATA_URI_PREFIX}{payload}"),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

impl ChatCompletionRequest {
    /// A single user message: the prompt first, then one image part per payload in order.
    pub fn build(model: impl Into<String>, prompt: &str, images: &[String], max_tokens: u32) -> Self {
        let content = std::iter::once(ContentPart::text(prompt))
            .chain(images.iter().map(|image| ContentPart::png_base64(image)))
            .collect();

        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: Role::User,
                content,
            }],
            max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    pub fn into_first_content(self) -> Option<String> {
        self.choices?
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
    }
}
