use expectrl::{Eof, Expect};
use std::process::Command;
use std::time::Duration;

fn interview_cmd() -> Command {
    let bin = std::path::PathBuf::from(env!("CARGO_BIN_EXE_intake"));
    let mut cmd = Command::new(bin);
    cmd.env("INTAKE_FORCE_TTY", "1");
    cmd
}

#[test]
fn pty_e2e_interview_collects_answers_and_flags_gaps() {
    let mut session = expectrl::Session::spawn(interview_cmd()).expect("spawn pty");
    session.set_expect_timeout(Some(Duration::from_secs(10)));

    session.expect("What error did you see?").expect("first prompt");
    session.send_line("NPE in the editor").expect("send answer");
    session
        .expect("What did you expect to happen?")
        .expect("second prompt");
    for _ in 0..7 {
        session.send_line("").expect("send empty answer");
    }

    session.expect("Next steps:").expect("gap section");
    session.expect(Eof).expect("session exited");
}

#[test]
fn pty_e2e_all_empty_interview_lists_every_required_prompt() {
    let mut session = expectrl::Session::spawn(interview_cmd()).expect("spawn pty");
    session.set_expect_timeout(Some(Duration::from_secs(10)));

    session.expect("What error did you see?").expect("first prompt");
    for _ in 0..8 {
        session.send_line("").expect("send empty answer");
    }

    session.expect("Next steps:").expect("gap section");
    session
        .expect("- Any logs or attachments?")
        .expect("last required prompt listed");
    session.expect(Eof).expect("session exited");
}
