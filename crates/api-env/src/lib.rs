use serde::Deserialize;

pub const DEFAULT_OPENAI_TIMEOUT_SECS: u64 = 120;

pub fn filter_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

pub fn non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.trim().is_empty() {
        return Err(serde::de::Error::custom("value must not be empty"));
    }
    Ok(s)
}

pub fn string_to_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

pub fn non_zero_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match string_to_u64(deserializer)? {
        0 => Err(serde::de::Error::custom("value must be greater than zero")),
        n => Ok(n),
    }
}

fn default_openai_timeout_secs() -> u64 {
    DEFAULT_OPENAI_TIMEOUT_SECS
}

#[derive(Clone, Deserialize)]
pub struct OpenAIEnv {
    #[serde(deserialize_with = "non_empty")]
    pub openai_api_key: String,
    #[serde(default, deserialize_with = "filter_empty")]
    pub openai_api_base: Option<String>,
    #[serde(default, deserialize_with = "filter_empty")]
    pub openai_text_model: Option<String>,
    #[serde(default, deserialize_with = "filter_empty")]
    pub openai_vision_model: Option<String>,
    #[serde(
        default = "default_openai_timeout_secs",
        deserialize_with = "non_zero_u64"
    )]
    pub openai_timeout_secs: u64,
}
