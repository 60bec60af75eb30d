const CODE_MARKER: &str = "CODE:";
const EXPLANATION_MARKER: &str = "EXPLANATION:";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pub code: String,
    pub explanation: String,
}

/// Splits model output on the first `EXPLANATION:` marker. `CODE:` is only
/// stripped when it is the very first thing in the output. Output that does
/// not follow the two-section format is returned whole as code.
pub fn split_solution(text: &str) -> Solution {
    match text.split_once(EXPLANATION_MARKER) {
        Some((code, explanation)) => Solution {
            code: code.strip_prefix(CODE_MARKER).unwrap_or(code).trim().to_string(),
            explanation: explanation.trim().to_string(),
        },
        None => Solution {
            code: text.trim().to_string(),
            explanation: String::new(),
        },
    }
}
