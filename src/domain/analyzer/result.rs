//! Structured critique parsed from model output.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AnalysisError;

/// Category scores, each an integer in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub design: u8,
    pub ux: u8,
    pub seo: u8,
    pub content: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub scores: Scores,
    pub summary: String,
    pub critical_issues: Vec<String>,
    pub improvements: Vec<String>,
    pub positive_points: Vec<String>,
}

#[derive(Deserialize)]
struct RawResult {
    scores: RawScores,
    #[serde(default)]
    summary: Value,
    #[serde(default)]
    critical_issues: Value,
    #[serde(default)]
    improvements: Value,
    #[serde(default)]
    positive_points: Value,
}

#[derive(Deserialize)]
struct RawScores {
    design: Value,
    ux: Value,
    seo: Value,
    content: Value,
}

/// Clamps a score into range and rounds to the nearest integer.
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 100.0).round() as u8
}

fn score(field: &str, value: &Value) -> Result<u8, AnalysisError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    number
        .map(clamp_score)
        .ok_or_else(|| AnalysisError::Parse(format!("score '{}' is not a number", field)))
}

fn text_list(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

/// Removes a surrounding markdown code fence (```json ... ```), if any.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`), which may share the line with the body.
    let info_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());
    let body = rest[info_len..].trim_start();
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// The outermost `{ ... }` span of `text`, for answers wrapped in prose.
fn json_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn parse_raw(text: &str) -> Result<RawResult, AnalysisError> {
    let body = strip_code_fence(text);
    match serde_json::from_str(body) {
        Ok(raw) => Ok(raw),
        Err(e) => json_object_span(body)
            .and_then(|span| serde_json::from_str(span).ok())
            .ok_or_else(|| AnalysisError::Parse(e.to_string())),
    }
}

impl AnalysisResult {
    /// Parses model text into a result.
    pub fn parse(text: &str) -> Result<Self, AnalysisError> {
        let raw = parse_raw(text)?;

        let scores = Scores {
            design: score("design", &raw.scores.design)?,
            ux: score("ux", &raw.scores.ux)?,
            seo: score("seo", &raw.scores.seo)?,
            content: score("content", &raw.scores.content)?,
        };

        let summary = match raw.summary {
            Value::String(s) => s.trim().to_string(),
            Value::Null => String::new(),
            other => other.to_string(),
        };

        Ok(Self {
            scores,
            summary,
            critical_issues: text_list(raw.critical_issues),
            improvements: text_list(raw.improvements),
            positive_points: text_list(raw.positive_points),
        })
    }
}
