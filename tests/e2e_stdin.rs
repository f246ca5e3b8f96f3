//! E2E tests for the piped stdin path
//!
//! Runs the binary behind a shell pipe, the way it is used in practice, so
//! the document comes from stdin while keys come from the terminal.
//!
//! Run with: `cargo test --features e2e-tests --test e2e_stdin`

#![cfg(feature = "e2e-tests")]

use std::process::Command;

use expectrl::{ControlCode, Eof, Regex, Session};

/// `sh -c "<producer> | rgx <args>"`.
fn piped_rgx(producer: &str, args: &str) -> Command {
    let pipeline = format!("{producer} | {} {args}", env!("CARGO_BIN_EXE_rgx"));
    let mut command = Command::new("sh");
    command.args(["-c", pipeline.as_str()]);
    command.env("RGX_CONFIG", "/nonexistent/rgx/config.toml");
    command.env_remove("RGX_PATTERN");
    command
}

/// Piped text becomes the document; stdout still carries only the pattern.
#[test]
fn piped_document_is_matched_and_pattern_printed() {
    let mut session = Session::spawn(piped_rgx("echo 'the cat sat'", "-p c.t"))
        .expect("Failed to spawn rgx with piped stdin");

    let _ = session
        .expect(Regex(r"\x1b\[\?1049h"))
        .expect("TUI should enter the alternate screen");
    // "cat" in the piped document matched once
    let _ = session
        .expect(Regex("1 match "))
        .expect("Piped document should be matched");

    session
        .send(ControlCode::Escape)
        .expect("Failed to send Escape");

    let _ = session
        .expect(Regex(r"\x1b\[\?1049lc\.t\r\n"))
        .expect("Pattern, not the document, should be printed");
    let _ = session.expect(Eof).expect("Process should exit");
}

/// A document with no match for the pattern still exits with the pattern.
#[test]
fn piped_document_without_match_prints_pattern() {
    let mut session = Session::spawn(piped_rgx("printf 'one\\ntwo\\n'", "-p '[0-9]+'"))
        .expect("Failed to spawn rgx with piped stdin");

    let _ = session
        .expect(Regex("0 matches"))
        .expect("First frame should be drawn");

    session
        .send(ControlCode::Escape)
        .expect("Failed to send Escape");

    let _ = session
        .expect(Regex(r"\x1b\[\?1049l\[0-9\]\+\r\n"))
        .expect("Pattern should be printed verbatim");
    let _ = session.expect(Eof).expect("Process should exit");
}
