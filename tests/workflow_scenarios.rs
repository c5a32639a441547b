//! End-to-end scenarios for the publishing pipeline.
//!
//! Covers the scripted workflow both programmatically (roles + coordinator)
//! and through full console sessions running against in-memory buffers.

use galleypress::console::{self, ConsoleError, SessionOptions};
use galleypress::manuscript::Status;
use galleypress::registry::Registry;
use galleypress::roles::{ActionOutcome, Role};
use galleypress::workflow::{AdvanceOutcome, Coordinator, Phase, Stage, StageKind};
use std::io::Cursor;

#[test]
fn manuscript_travels_the_full_pipeline() {
    let mut registry = Registry::new();
    let mut coordinator = Coordinator::new();
    let reviewer = Role::reviewer("Ada");
    let editor = Role::editor("Max");

    let serial = registry.create("M1", "Mystery", "Frank");
    let m = registry.get_mut(serial).unwrap();
    m.set_stage(Stage::review(2));

    reviewer.act(m);
    reviewer.act(m);
    assert!(m.stage().unwrap().is_complete());

    assert!(coordinator.advance(m).advanced());
    assert_eq!(m.stage().unwrap().kind(), StageKind::Editing);
    assert_eq!(m.status(), Status::Draft);

    editor.act(m);
    assert!(coordinator.advance(m).advanced());
    assert_eq!(m.stage().unwrap().kind(), StageKind::Approval);

    editor.act(m);
    assert!(coordinator.advance(m).advanced());
    assert_eq!(m.status(), Status::Published);
}

#[test]
fn advance_with_partial_approvals_holds_the_manuscript() {
    let mut registry = Registry::new();
    let mut coordinator = Coordinator::new();
    let reviewer = Role::reviewer("Ada");

    let serial = registry.create("M1", "Mystery", "Frank");
    let m = registry.get_mut(serial).unwrap();
    m.set_stage(Stage::review(2));

    assert_eq!(
        reviewer.act(m),
        ActionOutcome::ApprovalAdded { complete: false }
    );

    let outcome = coordinator.advance(m);

    assert_eq!(
        outcome,
        AdvanceOutcome::Incomplete {
            stage: StageKind::Review
        }
    );
    assert_eq!(m.stage().unwrap().kind(), StageKind::Review);
    assert_eq!(m.status(), Status::Draft);
}

#[test]
fn advancing_a_published_manuscript_changes_nothing() {
    let mut registry = Registry::new();
    let mut coordinator = Coordinator::new();
    let reviewer = Role::reviewer("Ada");
    let editor = Role::editor("Max");

    let serial = registry.create("M1", "Mystery", "Frank");
    let m = registry.get_mut(serial).unwrap();
    m.set_stage(Stage::review(1));
    reviewer.act(m);
    coordinator.advance(m);
    editor.act(m);
    coordinator.advance(m);
    editor.act(m);
    coordinator.advance(m);
    assert_eq!(m.status(), Status::Published);

    let outcome = coordinator.advance(m);

    assert_eq!(outcome, AdvanceOutcome::AlreadyPublished);
    assert_eq!(m.phase(), Phase::Published);
    assert_eq!(coordinator.journal().len(), 3);
}

fn run(input: &str, options: SessionOptions) -> String {
    let mut output = Vec::new();
    console::run_session(Cursor::new(input), &mut output, options).unwrap();
    String::from_utf8(output).unwrap()
}

const HAPPY_PATH: &str = "Dune\nScience Fiction\nFrank\nAda\nGrace\nMax\n1\n2\n1\n1\n";

#[test]
fn console_session_publishes_on_the_happy_path() {
    let output = run(HAPPY_PATH, SessionOptions::default());

    assert!(output.contains("Frank submitted the manuscript: Dune"));
    assert!(output.contains("---- Review Stage ----"));
    assert!(output.contains("Ada reviewed the manuscript."));
    assert!(output.contains("Grace reviewed the manuscript."));
    assert!(output.contains("The manuscript moved to In Editing."));
    assert!(output.contains("Max edited and approved the manuscript."));
    assert!(output.contains("The manuscript moved to In Approval."));
    assert!(output.contains("Max gave final approval for the manuscript."));
    assert!(output.contains("The manuscript has been published."));
    assert!(output.contains("Final Status: Published"));
    assert!(output.contains("Title: Dune, Serial Number: 1, Status: Published"));
}

#[test]
fn console_session_reprompts_on_malformed_choices() {
    let input = "Dune\nScience Fiction\nFrank\nAda\nGrace\nMax\nabc\n7\n1\n1\n1\n1\n";
    let output = run(input, SessionOptions::default());

    assert_eq!(output.matches("Please enter 1 or 2.").count(), 2);
    assert!(output.contains("Final Status: Published"));
}

#[test]
fn console_session_respects_the_required_approval_count() {
    let options = SessionOptions {
        required_approvals: 3,
        json_report: false,
    };
    let input = "Dune\nScience Fiction\nFrank\nAda\nGrace\nMax\n1\n2\n1\n1\n1\n";
    let output = run(input, options);

    assert_eq!(output.matches("reviewed the manuscript.").count(), 3);
    assert!(output.contains("Final Status: Published"));
}

#[test]
fn console_session_holds_when_editing_is_declined() {
    // Declining the editing sign-off leaves the Editing stage incomplete; the
    // later "final approval" then lands on the still-current Editing stage,
    // so the session ends one stage short of publication.
    let input = "Dune\nScience Fiction\nFrank\nAda\nGrace\nMax\n1\n2\n0\n1\n";
    let output = run(input, SessionOptions::default());

    assert!(output.contains("Editing Stage is not complete yet."));
    assert!(output.contains("Max edited and approved the manuscript."));
    assert!(output.contains("The manuscript moved to In Approval."));
    assert!(output.contains("Final Status: Draft"));
}

#[test]
fn console_session_can_emit_a_json_report() {
    let options = SessionOptions {
        required_approvals: 2,
        json_report: true,
    };
    let output = run(HAPPY_PATH, options);

    let json_start = output.find('{').expect("JSON payload in output");
    let payload: serde_json::Value = serde_json::from_str(&output[json_start..]).unwrap();

    assert_eq!(payload["report"]["title"], "Dune");
    assert_eq!(payload["report"]["status"], "Published");
    assert_eq!(payload["manuscripts"][0]["serial"], 1);
}

#[test]
fn console_session_fails_cleanly_on_truncated_input() {
    let mut output = Vec::new();
    let result = console::run_session(
        Cursor::new("Dune\nScience Fiction\n"),
        &mut output,
        SessionOptions::default(),
    );

    assert!(matches!(result, Err(ConsoleError::InputClosed)));
}
