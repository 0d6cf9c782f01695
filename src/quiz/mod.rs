pub mod extract;
pub mod transform;

pub use extract::{extract_question, ExtractedQuestion};
pub use transform::{transform_request, QUIZ_INSTRUCTION};
