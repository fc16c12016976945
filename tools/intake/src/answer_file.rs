use crate::catalog::Question;
use crate::errors::IntakeError;
use crate::logging::append_run_log;
use crate::runtime::FileSystem;
use crate::types::AnswerMap;
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;

/// Loads a batch answer file: a JSON object mapping question key to answer.
/// Catalog keys absent from the file default to the empty string; file keys
/// outside the catalog are ignored.
pub fn load_answer_map(
    fs: &dyn FileSystem,
    path: &Path,
    catalog: &[Question],
) -> Result<AnswerMap, IntakeError> {
    let raw_text = fs.read_to_string(path)?;
    let raw: BTreeMap<String, String> = serde_json::from_str(&raw_text).map_err(|e| {
        IntakeError::ConfigParse(format!(
            "answers file {} must be a JSON object of strings: {e}",
            path.display()
        ))
    })?;

    let mut answers = AnswerMap::new();
    for question in catalog {
        let value = raw
            .get(&question.key)
            .map(|answer| answer.trim().to_string())
            .unwrap_or_default();
        answers.insert(question.key.clone(), value);
    }

    append_run_log(
        "info",
        "answers.loaded",
        json!({
            "path": path.display().to_string(),
            "provided": raw.len(),
            "matched": answers.values().filter(|a| !a.is_empty()).count(),
        }),
    );
    Ok(answers)
}
