//! `dialogue play` - walk a graph in the terminal
//!
//! Choices are shown numbered from 1. Besides a number the player can type
//! `lang <code>` to switch locale or `q` to leave.

use crate::commands::load_graph;
use crate::error::CliResult;
use dialogue_engine::{verify, DialogueEvent, DialogueSession, LoadPolicy, SessionConfig};
use std::io::{BufRead, Write};
use std::path::Path;

pub fn execute(
    path: &Path,
    policy: LoadPolicy,
    config: SessionConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> CliResult<()> {
    let graph = verify(load_graph(path)?, policy)?;
    let mut session = DialogueSession::start(&graph, config)?;
    let mut lines = input.lines();

    loop {
        for event in session.drain_events() {
            render(&event, out)?;
        }
        if !session.is_active() {
            return Ok(());
        }

        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            session.end();
            continue;
        };
        let line = line?;
        let command = line.trim();

        if command == "q" || command == "quit" {
            session.end();
        } else if let Some(code) = command.strip_prefix("lang ") {
            session.set_locale(code.trim());
            session.refresh()?;
        } else if let Ok(number) = command.parse::<usize>() {
            let picked = number.checked_sub(1).map(|index| session.select_choice(index));
            match picked {
                Some(Ok(())) => {}
                Some(Err(err)) if err.is_recoverable() => writeln!(out, "{err}")?,
                Some(Err(err)) => return Err(err.into()),
                None => writeln!(out, "choices start at 1")?,
            }
        } else if !command.is_empty() {
            writeln!(out, "type a choice number, `lang <code>`, or `q`")?;
        }
    }
}

fn render(event: &DialogueEvent, out: &mut impl Write) -> CliResult<()> {
    match event {
        DialogueEvent::NodeEntered(entered) => {
            writeln!(out, "{}: {}", entered.speaker, entered.body)?;
            for (index, choice) in entered.choices.iter().enumerate() {
                writeln!(out, "  {}) {choice}", index + 1)?;
            }
        }
        DialogueEvent::DialogueEnded(ended) => {
            writeln!(out, "-- conversation ended ({:?}) --", ended.reason)?;
        }
    }
    Ok(())
}
