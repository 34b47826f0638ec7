//! LLM prompt engineering for summarization and structured extraction

use sift_domain::NOT_SPECIFIED;

/// Build the prompt asking for an `max_lines`-line summary of `text`
pub fn summary_prompt(text: &str, max_lines: usize) -> String {
    format!(
        "Summarize the following review into exactly {max_lines} lines, \
         retaining all key and important information. Be concise and clear:\n\n\
         {text}\n\n\
         Summary ({max_lines} lines):"
    )
}

/// Build the prompt asking for the structured JSON object for `summary`
pub fn extraction_prompt(summary: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(EXTRACTION_INSTRUCTIONS);
    prompt.push_str("\n\n");

    prompt.push_str("Review summary:\n");
    prompt.push_str("---\n");
    prompt.push_str(summary);
    prompt.push_str("\n---\n\n");

    prompt.push_str(&format!(
        "Use \"{}\" for any field that cannot be determined, and \"Unknown\" for sentiment.\n",
        NOT_SPECIFIED
    ));
    prompt.push_str(OUTPUT_FORMAT_REMINDER);

    prompt
}

const EXTRACTION_INSTRUCTIONS: &str = r#"Extract structured information from the following product or service review.
Return a JSON object with exactly these fields:

{
  "product_or_service_name": "name of the product or service",
  "key_point_description": "the main point the reviewer makes",
  "key_pain_point": "the main problem or complaint",
  "sentiment": "Positive | Negative | Neutral | Mixed",
  "test_steps": ["step 1", "step 2"],
  "test_environment": {
    "os": "operating system",
    "software_version": "software or firmware version",
    "product_model": "hardware or product model",
    "other": "any other relevant environment detail"
  }
}

Rules:
- test_steps lists the steps to reproduce the reported behaviour, in order; use [] if none are described
- Only report what the review states; do not invent versions or models"#;

const OUTPUT_FORMAT_REMINDER: &str =
    "Remember: Return ONLY the JSON object, no markdown code blocks, no explanations.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt() {
        let prompt = summary_prompt("The camera is great", 2);
        assert!(prompt.contains("exactly 2 lines"));
        assert!(prompt.contains("The camera is great"));
        assert!(prompt.ends_with("Summary (2 lines):"));
    }

    #[test]
    fn test_extraction_prompt_includes_summary() {
        let prompt = extraction_prompt("Dell XPS 15 overheats in Photoshop.");
        assert!(prompt.contains("Dell XPS 15 overheats in Photoshop."));
    }

    #[test]
    fn test_extraction_prompt_includes_schema() {
        let prompt = extraction_prompt("summary");
        for field in [
            "product_or_service_name",
            "key_point_description",
            "key_pain_point",
            "sentiment",
            "test_steps",
            "test_environment",
            "software_version",
            "product_model",
        ] {
            assert!(prompt.contains(field), "missing {}", field);
        }
        assert!(prompt.contains("\"Not specified\""));
        assert!(prompt.contains("ONLY the JSON object"));
    }
}
