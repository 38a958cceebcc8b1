//! Line-oriented command parser.
//!
//! Ids are matched case-insensitively on their snake_case names; dashes and
//! spaces are accepted in place of underscores (`energy-drink`).
use std::str::FromStr;

use game_core::{Command, ItemId, LocationId, NpcId};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  go <location>     travel (home, office, cafe, gym, bar)
  talk <npc>        talk to someone here (product_owner, scrum_master, barista, trainer, bartender)
  work              sit down at the workstation
  inventory         list held items
  next              continue to the next message
  skip              show the whole message at once
  choose <n>        pick choice n (a bare number works too)
  use <item>        consume an item (coffee, energy_drink, healthy_snack, meditation_guide)
  state             dump the current snapshot as JSON
  help              show this help
  quit              leave the game";

/// One parsed line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Game(Command),
    State,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("unknown command `{0}` (type `help`)")]
    UnknownCommand(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("unknown {kind} `{value}`")]
    UnknownId { kind: &'static str, value: String },

    #[error("`{0}` is not a choice number")]
    InvalidChoice(String),
}

pub fn parse_line(line: &str) -> Result<Input, InputError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let input = match verb.to_ascii_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "go" | "travel" => {
            let location = parse_id::<LocationId>(rest, "go", "location", "a location")?;
            Input::Game(Command::InteractPortal(location))
        }
        "talk" => {
            let npc = parse_id::<NpcId>(rest, "talk", "npc", "someone to talk to")?;
            Input::Game(Command::InteractNpc(npc))
        }
        "use" => {
            let item = parse_id::<ItemId>(rest, "use", "item", "an item")?;
            Input::Game(Command::ConsumeItem(item))
        }
        "choose" | "c" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument {
                    command: "choose",
                    expected: "a choice number",
                });
            }
            Input::Game(Command::DialogueSelectChoice(parse_choice(rest)?))
        }
        "work" => Input::Game(Command::InteractWorkstation),
        "inventory" | "inv" | "i" => Input::Game(Command::OpenInventory),
        "next" | "n" | "advance" => Input::Game(Command::DialogueAdvance),
        "skip" | "s" => Input::Game(Command::DialogueSkip),
        "tick" => Input::Game(Command::DialogueTick),
        "state" => Input::State,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other if other.starts_with(|c: char| c.is_ascii_digit()) => {
            Input::Game(Command::DialogueSelectChoice(parse_choice(other)?))
        }
        other => return Err(InputError::UnknownCommand(other.to_owned())),
    };
    Ok(input)
}

fn parse_id<T: FromStr>(
    raw: &str,
    command: &'static str,
    kind: &'static str,
    expected: &'static str,
) -> Result<T, InputError> {
    if raw.is_empty() {
        return Err(InputError::MissingArgument { command, expected });
    }
    let normalized: String = raw
        .chars()
        .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
        .collect();
    normalized.parse().map_err(|_| InputError::UnknownId {
        kind,
        value: raw.to_owned(),
    })
}

/// Choices are shown 1-based.
fn parse_choice(raw: &str) -> Result<usize, InputError> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(InputError::InvalidChoice(raw.to_owned())),
    }
}
