use regex::Regex;

use crate::errors::RelayError;

const QUESTION_LABEL: &str = "問題:";

/// A single quiz question parsed out of upstream model output.
#[derive(Debug, Clone)]
pub struct ExtractedQuestion {
    pub question: String,
    pub answer: String,
    pub explanation: Option<String>,
}

impl ExtractedQuestion {
    /// Render the normalized labeled block returned to callers.
    pub fn render(&self) -> String {
        let mut out = format!("問題: {}\n正解: {}", self.question, self.answer);
        if let Some(explanation) = &self.explanation {
            out.push_str(&format!("\n解説: {}", explanation));
        }
        out
    }
}

/// Parse upstream content into a question/answer/explanation triple.
///
/// Only the first question block is considered: content is cut at the
/// second `問題:` label, so a malformed first block fails even when a
/// later block would match. Blank lines between the labels of a block
/// are tolerated, as is preamble text before the first label. A missing
/// mandatory label is terminal; no partial result is produced.
pub fn extract_question(content: &str) -> Result<ExtractedQuestion, RelayError> {
    let block = match content.match_indices(QUESTION_LABEL).nth(1) {
        Some((index, _)) => &content[..index],
        None => content,
    };

    let pattern = Regex::new(r"問題:\s*(.+)\n\s*正解:\s*(.+)(?:\n\s*解説:\s*(.+))?").unwrap();
    let captures = pattern.captures(block).ok_or(RelayError::ExtractionFailed)?;

    Ok(ExtractedQuestion {
        question: captures[1].trim().to_string(),
        answer: captures[2].trim().to_string(),
        explanation: captures
            .get(3)
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty()),
    })
}
