use crate::catalog::Question;
use crate::errors::IntakeError;
use crate::logging::append_run_log;
use crate::runtime::Terminal;
use crate::types::{AnswerMap, EnvMap, NonInteractiveReason};
use serde_json::json;

/// Interviews need a human on the other end. `INTAKE_FORCE_TTY=1` bypasses
/// detection so PTY-driven tests can run the real binary.
pub fn is_non_interactive(env: &EnvMap, terminal: &dyn Terminal) -> Option<NonInteractiveReason> {
    if env.get("INTAKE_FORCE_TTY").map(String::as_str) == Some("1") {
        return None;
    }
    if env.contains_key("CI") {
        return Some(NonInteractiveReason::CiEnv);
    }
    if !terminal.stdin_is_tty() {
        return Some(NonInteractiveReason::NonTtyStdin);
    }
    None
}

pub fn run_interview(
    terminal: &dyn Terminal,
    catalog: &[Question],
) -> Result<AnswerMap, IntakeError> {
    append_run_log(
        "info",
        "interview.start",
        json!({ "question_count": catalog.len() }),
    );

    terminal.write_line(
        "━━━ Failure Report Interview ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━",
    )?;
    terminal.write_line("Answer each question; press Enter to leave one blank.")?;

    let mut answers = AnswerMap::new();
    for question in catalog {
        terminal.write_line("")?;
        terminal.write_line(&question.prompt)?;
        if let Some(detail) = &question.detail {
            terminal.write_line(&format!("  hint: {detail}"))?;
        }
        terminal.write_line("> ")?;
        let raw = terminal.read_line()?;
        answers.insert(question.key.clone(), raw.trim().to_string());
    }

    append_run_log(
        "info",
        "interview.complete",
        json!({
            "answered": answers.values().filter(|a| !a.is_empty()).count(),
        }),
    );
    Ok(answers)
}
