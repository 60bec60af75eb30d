mod language;
mod openapi;
mod prompt;
mod routes;
mod solution;
mod types;

pub use hypr_openai_chat::{ChatConfig, ModelSelection};
pub use language::Language;
pub use openapi::openapi;
pub use prompt::{EXTRACT_PROMPT, generate_prompt};
pub use routes::{MAX_BODY_BYTES, router};
pub use solution::{Solution, split_solution};
pub use types::{
    ExtractRequest, ExtractResponse, GenerateRequest, GenerateResponse, QuestionError,
    validate_question,
};
