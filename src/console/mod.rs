//! Interactive console shell.
//!
//! The shell owns every prompt, read, and printed line of the session. It is
//! generic over `BufRead`/`Write` so a full session can run against
//! in-memory buffers in tests. Malformed input is handled here by
//! re-prompting; the workflow core never sees it.

use crate::manuscript::{Manuscript, SerialNumber};
use crate::registry::{Registry, RegistryError};
use crate::roles::{ActionOutcome, Role};
use crate::workflow::{AdvanceOutcome, Coordinator, Phase, Stage, StageKind};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

/// Shell configuration, filled in from the command line.
#[derive(Clone, Copy, Debug)]
pub struct SessionOptions {
    /// Reviewer approvals required to complete the Review stage.
    pub required_approvals: u32,
    /// Also print the final report and listing as pretty JSON.
    pub json_report: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            required_approvals: 2,
            json_report: false,
        }
    }
}

/// Errors that can occur while running a session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("I/O error during session: {0}")]
    Io(#[from] io::Error),

    #[error("input ended before the session completed")]
    InputClosed,

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("failed to render JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run the fixed publishing session script against the given streams.
///
/// The script mirrors the workflow: gather names, submit, collect reviewer
/// approvals until the Review stage completes, then a single editing
/// sign-off and a single final approval, advancing and reporting after each
/// stage.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    options: SessionOptions,
) -> Result<(), ConsoleError> {
    let mut registry = Registry::new();
    let mut coordinator = Coordinator::new();

    let title = prompt_line(&mut input, &mut output, "Enter the title of the manuscript: ")?;
    let genre = prompt_line(&mut input, &mut output, "Enter the genre of the manuscript: ")?;
    let author_name = prompt_line(&mut input, &mut output, "Enter the name of the author: ")?;
    let author = Role::author(author_name);

    let first = prompt_line(&mut input, &mut output, "Enter the name of the first reviewer: ")?;
    let reviewer_one = Role::reviewer(first);
    let second = prompt_line(&mut input, &mut output, "Enter the name of the second reviewer: ")?;
    let reviewer_two = Role::reviewer(second);
    let editor_name = prompt_line(&mut input, &mut output, "Enter the name of the editor: ")?;
    let editor = Role::editor(editor_name);

    let serial = registry.create(title.as_str(), genre, author.name());
    info!(serial = %serial, "manuscript registered");

    let outcome = {
        let manuscript = manuscript_mut(&mut registry, serial)?;
        let outcome = author.act(manuscript);
        manuscript.set_stage(Stage::review(options.required_approvals));
        outcome
    };
    print_action(&mut output, author.name(), outcome, &title)?;

    writeln!(output, "---- Review Stage ----")?;
    loop {
        let complete = manuscript_mut(&mut registry, serial)?
            .stage()
            .is_some_and(Stage::is_complete);
        if complete {
            break;
        }

        let prompt = format!(
            "Enter 1 for a review by {}, 2 for a review by {}: ",
            reviewer_one.name(),
            reviewer_two.name()
        );
        let choice = prompt_line(&mut input, &mut output, &prompt)?;
        let reviewer = match choice.as_str() {
            "1" => &reviewer_one,
            "2" => &reviewer_two,
            _ => {
                writeln!(output, "Please enter 1 or 2.")?;
                continue;
            }
        };

        let outcome = reviewer.act(manuscript_mut(&mut registry, serial)?);
        print_action(&mut output, reviewer.name(), outcome, &title)?;
    }

    advance_and_report(&mut coordinator, &mut registry, serial, &mut output)?;

    writeln!(output, "---- Editing Stage ----")?;
    let prompt = format!("Enter 1 to approve editing by {}: ", editor.name());
    if prompt_line(&mut input, &mut output, &prompt)? == "1" {
        let outcome = editor.act(manuscript_mut(&mut registry, serial)?);
        print_action(&mut output, editor.name(), outcome, &title)?;
    }
    advance_and_report(&mut coordinator, &mut registry, serial, &mut output)?;

    writeln!(output, "---- Approval Stage ----")?;
    let prompt = format!("Enter 1 to give final approval by {}: ", editor.name());
    if prompt_line(&mut input, &mut output, &prompt)? == "1" {
        let outcome = editor.act(manuscript_mut(&mut registry, serial)?);
        print_action(&mut output, editor.name(), outcome, &title)?;
    }
    advance_and_report(&mut coordinator, &mut registry, serial, &mut output)?;

    let status = manuscript_mut(&mut registry, serial)?.status();
    writeln!(output, "Final Status: {status}")?;

    writeln!(output, "\nAll manuscripts in the system:")?;
    for summary in registry.summaries() {
        writeln!(output, "{summary}")?;
    }

    if options.json_report {
        let payload = serde_json::json!({
            "report": registry.report(serial)?,
            "manuscripts": registry.summaries(),
        });
        writeln!(output, "{}", serde_json::to_string_pretty(&payload)?)?;
    }

    Ok(())
}

/// Prompt and read one trimmed line. EOF is an error: the script expects
/// every prompt to be answered.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, ConsoleError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ConsoleError::InputClosed);
    }
    Ok(line.trim().to_string())
}

fn manuscript_mut(
    registry: &mut Registry,
    serial: SerialNumber,
) -> Result<&mut Manuscript, ConsoleError> {
    registry
        .get_mut(serial)
        .ok_or(ConsoleError::Registry(RegistryError::UnknownSerial(serial)))
}

/// Print the line describing what a role action actually did. Ignored
/// actions print nothing, matching the silent no-op contract of the roles.
fn print_action<W: Write>(
    output: &mut W,
    name: &str,
    outcome: ActionOutcome,
    title: &str,
) -> Result<(), ConsoleError> {
    let message = match outcome {
        ActionOutcome::Submitted => format!("{name} submitted the manuscript: {title}"),
        ActionOutcome::ApprovalAdded { .. } => format!("{name} reviewed the manuscript."),
        ActionOutcome::Approved {
            stage: StageKind::Editing,
        } => format!("{name} edited and approved the manuscript."),
        ActionOutcome::Approved { .. } => {
            format!("{name} gave final approval for the manuscript.")
        }
        ActionOutcome::Ignored => return Ok(()),
    };
    writeln!(output, "{message}")?;
    Ok(())
}

fn advance_and_report<W: Write>(
    coordinator: &mut Coordinator,
    registry: &mut Registry,
    serial: SerialNumber,
    output: &mut W,
) -> Result<(), ConsoleError> {
    let outcome = coordinator.advance(manuscript_mut(registry, serial)?);
    debug!(serial = %serial, ?outcome, "advance attempted");

    writeln!(output, "{}", advance_message(outcome))?;
    writeln!(output, "\n{}\n", registry.report(serial)?)?;
    Ok(())
}

fn advance_message(outcome: AdvanceOutcome) -> String {
    match outcome {
        AdvanceOutcome::Advanced {
            to: Phase::Published,
            ..
        } => "The manuscript has been published.".to_string(),
        AdvanceOutcome::Advanced { to, .. } => format!("The manuscript moved to {to}."),
        AdvanceOutcome::Incomplete { stage } => {
            format!("{stage} is not complete yet.")
        }
        AdvanceOutcome::Unstarted => "The manuscript has not entered the pipeline yet.".to_string(),
        AdvanceOutcome::AlreadyPublished => "The manuscript is already published.".to_string(),
    }
}
