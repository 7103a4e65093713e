//! Shell input parsing.
//!
//! Lines starting with `/` are commands; anything else is a learner turn.

use tutor_common::Section;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text for the current section.
    Say(String),
    Start,
    Units,
    Lessons,
    Unit(String),
    Lesson(String),
    Next,
    Prev,
    Tab(Section),
    History,
    Reset,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: /{0} (try /help)")]
    Unknown(String),
    #[error("/{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("{0}")]
    BadSection(String),
}

pub const HELP: &str = "\
Commands:
  /start                 restart the current section and get the opening explanation
  /units                 list units
  /lessons               list lessons in the current unit
  /unit <name|number>    switch unit
  /lesson <name|number>  switch lesson
  /next, /prev           move between lessons
  /tab <section>         explanation, practice, grammar or general
  /history               show the current conversation
  /reset                 drop every conversation
  /status                show the current selection
  /help                  show this help
  /quit                  exit
Anything else is sent to the tutor.";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Some(Command::Say(line.to_string())));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "start" => Command::Start,
        "units" => Command::Units,
        "lessons" => Command::Lessons,
        "unit" => Command::Unit(required(arg, "unit")?),
        "lesson" => Command::Lesson(required(arg, "lesson")?),
        "next" => Command::Next,
        "prev" | "previous" => Command::Prev,
        "tab" => Command::Tab(
            required(arg, "tab")?
                .parse()
                .map_err(CommandError::BadSection)?,
        ),
        "history" => Command::History,
        "reset" => Command::Reset,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn required(arg: &str, command: &'static str) -> Result<String, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(arg.to_string())
    }
}
