//! Prompt templates for the completion model.
//!
//! Inputs are spliced in verbatim with plain concatenation, so braces or
//! other template-looking text in a question is never interpreted.

const FAQ_PREAMBLE: &str = "You are a professional and concise virtual assistant. \
Here is a factual answer from the FAQ:\n\n";

const FAQ_INSTRUCTION: &str = "Based on the FAQ answer above, rephrase it if necessary, \
but keep the tone formal, informative, and avoid exaggeration or emotional language. \
Be brief and to the point.";

const FALLBACK_PREAMBLE: &str = "You are a professional virtual assistant.\n";

const FALLBACK_INSTRUCTION: &str =
    "No relevant FAQ answer was found. Reply politely and formally to let them know.";

/// Render the prompt for `question`, embedding `matched_answer` when present.
pub fn build_prompt(question: &str, matched_answer: Option<&str>) -> String {
    match matched_answer {
        Some(answer) => faq_prompt(question, answer),
        None => fallback_prompt(question),
    }
}

fn faq_prompt(question: &str, answer: &str) -> String {
    let mut prompt = String::with_capacity(
        FAQ_PREAMBLE.len() + FAQ_INSTRUCTION.len() + answer.len() + question.len() + 32,
    );
    prompt.push_str(FAQ_PREAMBLE);
    prompt.push_str("FAQ Answer: ");
    prompt.push_str(answer);
    prompt.push_str("\n\nUser Question: ");
    prompt.push_str(question);
    prompt.push('\n');
    prompt.push_str(FAQ_INSTRUCTION);
    prompt
}

fn fallback_prompt(question: &str) -> String {
    let mut prompt = String::with_capacity(
        FALLBACK_PREAMBLE.len() + FALLBACK_INSTRUCTION.len() + question.len() + 16,
    );
    prompt.push_str(FALLBACK_PREAMBLE);
    prompt.push_str("The user asked: ");
    prompt.push_str(question);
    prompt.push('\n');
    prompt.push_str(FALLBACK_INSTRUCTION);
    prompt
}
