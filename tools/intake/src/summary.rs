use crate::catalog::Question;
use crate::errors::IntakeError;
use crate::types::AnswerMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NOT_PROVIDED: &str = "(not provided)";

/// Structured form of a finished interview. `answers` covers every catalog
/// key; `next_steps` lists the gapped keys in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDocument {
    pub answers: BTreeMap<String, String>,
    pub next_steps: Vec<String>,
}

pub fn build_document(
    catalog: &[Question],
    answers: &AnswerMap,
    gaps: &[String],
) -> SummaryDocument {
    let mut full = BTreeMap::new();
    for question in catalog {
        let value = answers.get(&question.key).cloned().unwrap_or_default();
        full.insert(question.key.clone(), value);
    }
    SummaryDocument {
        answers: full,
        next_steps: gaps.to_vec(),
    }
}

pub fn render_text(catalog: &[Question], answers: &AnswerMap, gaps: &[String]) -> String {
    let mut lines = vec!["Failure report summary".to_string(), String::new()];
    for question in catalog {
        let answer = answers
            .get(&question.key)
            .filter(|value| !value.is_empty())
            .map(String::as_str)
            .unwrap_or(NOT_PROVIDED);
        lines.push(format!("{}: {answer}", question.prompt));
    }

    if !gaps.is_empty() {
        lines.push(String::new());
        lines.push("Next steps:".to_string());
        for key in gaps {
            if let Some(question) = catalog.iter().find(|q| &q.key == key) {
                lines.push(format!("- {}", question.prompt));
            }
        }
    }

    lines.join("\n")
}

pub fn render_json(
    catalog: &[Question],
    answers: &AnswerMap,
    gaps: &[String],
) -> Result<String, IntakeError> {
    let document = build_document(catalog, answers, gaps);
    serde_json::to_string_pretty(&document).map_err(|e| IntakeError::Render(e.to_string()))
}
