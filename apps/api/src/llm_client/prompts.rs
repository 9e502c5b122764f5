// Prompt templates for the recommendation pipeline.
// Placeholders use {braces} and are filled with .replace() at the call site.

/// Asks the model to recommend internship domains for a resume.
///
/// The reply format matters: the parser in `recommend::parser` keys on the
/// literal `Domain:` / `Reason:` / `-` markers below, so changes here must
/// stay in sync with it.
pub const ADVISOR_PROMPT_TEMPLATE: &str = "\
You are an experienced career advisor for students seeking internships.

Below is the extracted text of a student's resume:

{resume_text}

Choose the 3 internship domains that best fit this resume from the following list:
Web Development, Mobile App Development, Data Science, Machine Learning, \
Artificial Intelligence, Cloud Computing, Cybersecurity, DevOps, Blockchain, \
Game Development, Embedded Systems, UI/UX Design, Quality Assurance, \
Technical Writing, Product Management.

For each of the 3 domains, respond in EXACTLY this format:

Domain: <domain name>
Reason: <one sentence explaining why this domain fits the resume>
Improvement Suggestions:
- <first concrete suggestion>
- <second concrete suggestion>

Do not add any other headings or commentary.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisor_template_has_resume_placeholder() {
        assert!(ADVISOR_PROMPT_TEMPLATE.contains("{resume_text}"));
    }

    #[test]
    fn test_advisor_template_pins_reply_markers() {
        // The parser depends on these exact markers appearing in the
        // requested format.
        assert!(ADVISOR_PROMPT_TEMPLATE.contains("Domain:"));
        assert!(ADVISOR_PROMPT_TEMPLATE.contains("Reason:"));
        assert!(ADVISOR_PROMPT_TEMPLATE.contains("Improvement Suggestions:"));
        assert!(ADVISOR_PROMPT_TEMPLATE.contains("\n- "));
    }

    #[test]
    fn test_advisor_template_asks_for_three_domains() {
        assert!(ADVISOR_PROMPT_TEMPLATE.contains("each of the 3 domains"));
    }
}
