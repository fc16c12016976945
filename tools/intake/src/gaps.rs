use crate::catalog::Question;
use crate::types::AnswerMap;

/// Keys of required questions whose trimmed answer is empty, in catalog
/// order. A key missing from the answer map counts as unanswered.
pub fn gap_keys(catalog: &[Question], answers: &AnswerMap) -> Vec<String> {
    catalog
        .iter()
        .filter(|question| question.required)
        .filter(|question| {
            answers
                .get(&question.key)
                .map(|answer| answer.trim().is_empty())
                .unwrap_or(true)
        })
        .map(|question| question.key.clone())
        .collect()
}
