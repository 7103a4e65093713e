//! Line-oriented terminal loop.
//!
//! Reads stdin a line at a time, dispatches commands, and prints assistant
//! replies piece by piece through the chunker.

use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use tutor_ai::{chunk, Role};
use tutor_common::{Notice, NoticeLevel};
use tutor_lessons::Move;

use crate::app_state::TutorApp;
use crate::commands::{self, Command, HELP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub async fn run(app: &mut TutorApp) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = io::stdout();

    writeln!(out, "{}", app.navigator().curriculum().title)?;
    writeln!(out, "Type /help for commands.\n")?;
    write_status_line(app, &mut out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("stdin closed");
            break;
        };

        let flow = match commands::parse(&line) {
            Ok(Some(command)) => execute(app, command, &mut out).await?,
            Ok(None) => Flow::Continue,
            Err(e) => {
                writeln!(out, "{e}")?;
                Flow::Continue
            }
        };
        write_notices(app, &mut out)?;

        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Run one command against the app, writing its output to `out`.
pub async fn execute<W: Write>(
    app: &mut TutorApp,
    command: Command,
    out: &mut W,
) -> io::Result<Flow> {
    match command {
        Command::Say(text) => {
            if let Some(reply) = app.submit(&text).await {
                write_reply(app, &reply.text, out)?;
            }
        }
        Command::Start => {
            if let Some(reply) = app.start().await {
                write_reply(app, &reply.text, out)?;
            }
        }
        Command::Units => {
            let (current, _) = app.navigator().position();
            for (i, unit) in app.navigator().curriculum().units().iter().enumerate() {
                let mark = if i == current { '*' } else { ' ' };
                writeln!(out, "{mark} {}. {}", i + 1, unit.name)?;
            }
        }
        Command::Lessons => {
            let (_, current) = app.navigator().position();
            for (i, lesson) in app.navigator().unit().lessons().iter().enumerate() {
                let mark = if i == current { '*' } else { ' ' };
                writeln!(out, "{mark} {}. {}", i + 1, lesson.name)?;
            }
        }
        Command::Unit(query) => {
            let step = app.select_unit(&query);
            write_move(app, &step, out)?;
        }
        Command::Lesson(query) => {
            let step = app.select_lesson(&query);
            write_move(app, &step, out)?;
        }
        Command::Next => {
            let step = app.next_lesson();
            write_move(app, &step, out)?;
        }
        Command::Prev => {
            let step = app.previous_lesson();
            write_move(app, &step, out)?;
        }
        Command::Tab(section) => {
            app.select_section(section);
            write_status_line(app, out)?;
        }
        Command::History => {
            let history = app.history();
            if history.is_empty() {
                writeln!(out, "(no messages yet)")?;
            }
            for message in history {
                match message.role {
                    Role::Assistant => write_reply(app, &message.content, out)?,
                    _ => writeln!(out, "you: {}", message.content)?,
                }
            }
        }
        Command::Reset => app.reset(),
        Command::Status => writeln!(out, "{}", app.status())?,
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Assistant text without the end marker, one chunk per paragraph.
fn write_reply<W: Write>(app: &TutorApp, text: &str, out: &mut W) -> io::Result<()> {
    let session = &app.config().session;
    let shown = if session.end_marker.is_empty() {
        text.to_string()
    } else {
        text.replace(&session.end_marker, "")
    };
    for piece in chunk(&shown, session.chunk_size) {
        writeln!(out, "tutor: {piece}")?;
    }
    Ok(())
}

fn write_move<W: Write>(app: &TutorApp, step: &Move, out: &mut W) -> io::Result<()> {
    if !step.moved() {
        writeln!(out, "(already here)")?;
    }
    write_status_line(app, out)
}

fn write_status_line<W: Write>(app: &TutorApp, out: &mut W) -> io::Result<()> {
    let nav = app.navigator();
    writeln!(
        out,
        "[{} / {} / {}]",
        nav.unit().name,
        nav.lesson().name,
        nav.section()
    )
}

fn write_notices<W: Write>(app: &mut TutorApp, out: &mut W) -> io::Result<()> {
    for notice in app.drain_notices() {
        writeln!(out, "{}", format_notice(&notice))?;
    }
    Ok(())
}

fn format_notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };
    format!("[{tag}] {}: {}", notice.title, notice.body)
}
