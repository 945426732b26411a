//! Instruction text sent to the vision model alongside the screenshot.

use super::AnalysisTarget;

/// Page metadata gathered by the browser. Both fields may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

const RESPONSE_SHAPE: &str = r#"{
  "scores": { "design": 0-100, "ux": 0-100, "seo": 0-100, "content": 0-100 },
  "summary": "two or three sentences",
  "critical_issues": ["..."],
  "improvements": ["..."],
  "positive_points": ["..."]
}"#;

const ECOMMERCE_CRITERIA: &str = "\
This is an online store. Also evaluate:
- product presentation (imagery, pricing visibility, calls to action)
- trust signals (reviews, secure checkout badges, return policy)
- friction on the path from product page to checkout";

/// Builds the critique instruction for one page.
pub fn build_instruction(target: &AnalysisTarget, metadata: &PageMetadata, ecommerce: bool) -> String {
    let or_missing = |value: &str| {
        if value.trim().is_empty() {
            "(none)".to_string()
        } else {
            value.trim().to_string()
        }
    };

    let mut prompt = format!(
        "You are a senior web design, UX and SEO consultant. \
The attached image is a screenshot of {url}.\n\n\
Page title: {title}\n\
Meta description: {description}\n\n\
Critique the page's visual design, user experience, SEO and content quality.",
        url = target.as_str(),
        title = or_missing(&metadata.title),
        description = or_missing(&metadata.description),
    );

    if ecommerce {
        prompt.push_str("\n\n");
        prompt.push_str(ECOMMERCE_CRITERIA);
    }

    prompt.push_str("\n\nRespond with JSON only, no prose, in exactly this shape:\n");
    prompt.push_str(RESPONSE_SHAPE);
    prompt
}
