use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Target language for generated solutions. The identifiers match what the
/// desktop client's language selector sends.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    Python,
    Javascript,
    Java,
    Golang,
    #[default]
    Cpp,
    Swift,
    Kotlin,
    Ruby,
    Sql,
    R,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Javascript => "JavaScript",
            Self::Java => "Java",
            Self::Golang => "Go",
            Self::Cpp => "C++",
            Self::Swift => "Swift",
            Self::Kotlin => "Kotlin",
            Self::Ruby => "Ruby",
            Self::Sql => "SQL",
            Self::R => "R",
        }
    }

    /// Never fails: anything that is not a known identifier falls back to C++.
    pub fn from_payload(value: Option<&serde_json::Value>) -> Self {
        match value {
            None | Some(serde_json::Value::Null) => Self::default(),
            Some(serde_json::Value::String(s)) => {
                s.trim().to_lowercase().parse().unwrap_or_else(|_| {
                    tracing::warn!(language = %s, "unsupported_language_falling_back");
                    Self::default()
                })
            }
            Some(other) => {
                tracing::warn!(language = %other, "non_string_language_falling_back");
                Self::default()
            }
        }
    }
}
