use indoc::formatdoc;

use crate::language::Language;

pub const EXTRACT_PROMPT: &str =
    "Extract the problem statement from this image, in clean text format.";

pub fn generate_prompt(question: &str, language: Language) -> String {
    let language = language.display_name();

    formatdoc! {"
        Write a clean, properly formatted, and idiomatic {language} solution to the following problem.
        Make sure the code includes:
        - Proper indentation and spacing
        - Descriptive comments where necessary
        - No markdown, no code block formatting, just raw code

        Use this response format exactly:
        CODE:
        <Insert only raw, cleanly formatted {language} code here>

        EXPLANATION:
        <Insert a brief plain-text explanation of the code logic and approach>

        Problem:
        {question}
    ", language = language, question = question}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_prompt_embeds_question_and_language() {
        let prompt = generate_prompt("Reverse a linked list.", Language::default());

        assert!(prompt.starts_with("Write a clean"));
        assert!(prompt.contains("idiomatic C++ solution"));
        assert!(prompt.contains("\nCODE:\n"));
        assert!(prompt.contains("\nEXPLANATION:\n"));
        assert!(prompt.ends_with("Problem:\nReverse a linked list.\n"));
    }

    #[test]
    fn generate_prompt_other_language() {
        let prompt = generate_prompt("Two sum", Language::Python);
        assert!(prompt.contains("idiomatic Python solution"));
        assert!(prompt.contains("formatted Python code here"));
    }
}
