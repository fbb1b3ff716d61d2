use super::catalog::Register;

/// Builds the instruction sent to the model.
///
/// The output format lines are what [`super::parser`] scrapes back out.
pub fn build_prompt(phrase: &str, source: Register, target: Register) -> String {
    format!(
        "Translate the following slang or colloquial phrase from {source} to {target}. \
Ensure you retain the slang's meaning and tone, providing necessary context.

Phrase: \"{phrase}\"

Output format:
1. Translated Phrase: [Provide translation]
2. Context Explanation: [Describe the meaning and context]"
    )
}
