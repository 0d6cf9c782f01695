use crate::api::models::{ChatMessage, ChatRequest};

/// Instruction appended to the caller's prompt: demand exactly one 〇/×
/// network quiz question in the labeled three-line format.
pub const QUIZ_INSTRUCTION: &str = "\n\nネットワークに関する、〇か×で答えられる二者択一形式の問題を1つだけ生成してください。複数の問題は絶対に生成しないでください。以下の形式で厳密に出力してください：\n\n問題: [ここに1つの問題文を入れてください]\n正解: [〇または×]\n解説: [ここに解説を入れてください]";

/// Rewrite an inbound request into the single-message form sent
/// upstream: only the first message survives, with the quiz instruction
/// appended, and an empty model falls back to `default_model`.
///
/// Pure and deterministic. The caller validates that `messages` is
/// non-empty.
pub fn transform_request(request: &ChatRequest, default_model: &str) -> ChatRequest {
    let model = if request.model.is_empty() {
        default_model.to_string()
    } else {
        request.model.clone()
    };

    let content = format!("{}{}", request.messages[0].content, QUIZ_INSTRUCTION);

    ChatRequest {
        model,
        messages: vec![ChatMessage::user(&content)],
    }
}
