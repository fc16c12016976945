use crate::errors::IntakeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub key: String,
    pub prompt: String,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl Question {
    fn new(key: &str, prompt: &str, detail: &str, required: bool) -> Self {
        Self {
            key: key.to_string(),
            prompt: prompt.to_string(),
            detail: Some(detail.to_string()),
            required,
        }
    }
}

/// The built-in failure-report interview, in the order questions are asked.
pub fn default_catalog() -> Vec<Question> {
    vec![
        Question::new(
            "error_message",
            "What error did you see?",
            "Paste the exact message, stack trace, or describe what appeared on screen.",
            true,
        ),
        Question::new(
            "expected_result",
            "What did you expect to happen?",
            "Describe the correct behavior or the result you were after.",
            true,
        ),
        Question::new(
            "reproduction_steps",
            "How can we reproduce it?",
            "Step-by-step actions, including inputs, clicks, or commands.",
            true,
        ),
        Question::new(
            "frequency",
            "How often does it happen?",
            "Every time or intermittently, and when it last occurred.",
            false,
        ),
        Question::new(
            "impact_scope",
            "How is this impacting you?",
            "Severity, and which users or workflows are blocked.",
            true,
        ),
        Question::new(
            "environment",
            "What environment are you using?",
            "Operating system, browser or client version, network or permission constraints.",
            true,
        ),
        Question::new(
            "workaround",
            "Any workarounds tried?",
            "Temporary alternatives, or attempts that did not help.",
            false,
        ),
        Question::new(
            "attachments",
            "Any logs or attachments?",
            "Log excerpts, request IDs, screenshots, recordings.",
            true,
        ),
    ]
}

pub fn validate_catalog(questions: &[Question]) -> Result<(), IntakeError> {
    if questions.is_empty() {
        return Err(IntakeError::InvalidConfig(
            "catalog must contain at least one question".to_string(),
        ));
    }

    let mut seen = BTreeSet::new();
    for question in questions {
        if question.key.trim().is_empty() {
            return Err(IntakeError::InvalidConfig(
                "question keys must be non-empty".to_string(),
            ));
        }
        if question.prompt.trim().is_empty() {
            return Err(IntakeError::InvalidConfig(format!(
                "question {} has an empty prompt",
                question.key
            )));
        }
        if !seen.insert(question.key.as_str()) {
            return Err(IntakeError::InvalidConfig(format!(
                "duplicate question key {}",
                question.key
            )));
        }
    }
    Ok(())
}
