//! Website analyzer domain: target validation, prompt construction and
//! parsing of the model's structured critique.

mod errors;
mod prompt;
mod result;
mod target;

pub use errors::AnalysisError;
pub use prompt::{build_instruction, PageMetadata};
pub use result::{clamp_score, strip_code_fence, AnalysisResult, Scores};
pub use target::AnalysisTarget;
