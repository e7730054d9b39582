//! Line commands for the interactive session.

use anyhow::{bail, Context};
use todos_view_core::ViewEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Event(ViewEvent),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "commands: toggle <id> | delete <id> | home | show | help | quit";

pub fn parse(line: &str) -> anyhow::Result<Command> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Show);
    };
    let command = match verb {
        "toggle" | "t" => Command::Event(ViewEvent::Toggle(parse_id(words.next())?)),
        "delete" | "d" => Command::Event(ViewEvent::Delete(parse_id(words.next())?)),
        "home" => Command::Event(ViewEvent::NavigateHome),
        "show" | "s" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => bail!("unknown command `{other}`"),
    };
    if let Some(extra) = words.next() {
        bail!("unexpected argument `{extra}`");
    }
    Ok(command)
}

fn parse_id(word: Option<&str>) -> anyhow::Result<u64> {
    let word = word.context("missing todo id")?;
    word.parse::<u64>()
        .with_context(|| format!("invalid todo id `{word}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_events() {
        assert_eq!(
            parse("toggle 2").unwrap(),
            Command::Event(ViewEvent::Toggle(2))
        );
        assert_eq!(parse("d 7").unwrap(), Command::Event(ViewEvent::Delete(7)));
        assert_eq!(
            parse("  home ").unwrap(),
            Command::Event(ViewEvent::NavigateHome)
        );
    }

    #[test]
    fn blank_line_shows() {
        assert_eq!(parse("").unwrap(), Command::Show);
        assert_eq!(parse("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse("toggle").is_err());
        assert!(parse("toggle x").is_err());
        assert!(parse("delete 1 2").is_err());
        let err = parse("frobnicate").unwrap_err();
        assert_eq!(err.to_string(), "unknown command `frobnicate`");
    }
}
