use std::sync::Arc;

use crate::{
    midi::Direction,
    yarns::{self, ChoiceRequest, Parameter, PartNumber},
};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown command {:?}, try \"help\"", .0)]
    UnknownCommand(String),

    #[error("Missing {} for {}", .arg, .cmd)]
    MissingArgument {
        cmd: &'static str,
        arg: &'static str,
    },

    #[error("Invalid number {:?}", .0)]
    InvalidNumber(String),

    #[error("Invalid part {} ({}..={})", .0, PartNumber::MIN, PartNumber::MAX)]
    InvalidPart(u8),

    #[error("{}", .0)]
    Yarns(#[from] yarns::Error),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Help,
    Status,
    Ports,
    Select(Direction, Arc<str>),
    /// Monitoring without input port.
    ClearInput,
    Channel(u8),
    Confirm,
    Choices(Parameter),
    Set {
        name: String,
        part: Option<u8>,
        request: ChoiceRequest,
    },
    Layout(ChoiceRequest),
    Randomize {
        part: PartNumber,
        names: Vec<String>,
    },
    /// `None` for the global settings.
    Reset(Option<PartNumber>),
    Monitor,
    Quit,
}

impl Command {
    pub const HELP: &'static str = "\
help
status
ports
in <port name | none>
out <port name>
channel <1..=16>
confirm
choices <parameter>
set <parameter> [part] <choice | default | random>
layout <choice | default | random>
randomize <part> <parameter>...
reset <part | global>
monitor
quit";

    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (cmd, args) = split_first(line);

        use Command::*;
        let cmd = match cmd {
            "help" | "?" => Help,
            "status" => Status,
            "ports" => Ports,
            "in" => match required(args, "in", "port name")? {
                "none" => ClearInput,
                port_name => Select(Direction::In, port_name.into()),
            },
            "out" => Select(Direction::Out, required(args, "out", "port name")?.into()),
            "channel" => Channel(number(required(args, "channel", "channel")?)?),
            "confirm" => Confirm,
            "choices" => Choices(required(args, "choices", "parameter")?.parse()?),
            "set" => parse_set(args)?,
            "layout" => Layout(required(args, "layout", "choice")?.into()),
            "randomize" => {
                let (part, names) = split_first(required(args, "randomize", "part")?);
                let names: Vec<String> = names.split_whitespace().map(str::to_string).collect();
                if names.is_empty() {
                    return Err(ParseError::MissingArgument {
                        cmd: "randomize",
                        arg: "parameter",
                    });
                }

                Randomize {
                    part: part_number(part)?,
                    names,
                }
            }
            "reset" => match required(args, "reset", "part")? {
                "global" => Reset(None),
                part => Reset(Some(part_number(part)?)),
            },
            "monitor" => Monitor,
            "quit" | "exit" => Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };

        Ok(Some(cmd))
    }
}

/// Parses `<parameter> [part] <choice>`, the part being expected
/// for per-part parameters only.
fn parse_set(args: &str) -> Result<Command, ParseError> {
    let (name, rem) = split_first(required(args, "set", "parameter")?);
    let param = name.parse::<Parameter>()?;

    let (part, choice) = if param.is_global() {
        (None, rem)
    } else {
        let (part, choice) = split_first(rem);
        if part.is_empty() {
            return Err(ParseError::MissingArgument {
                cmd: "set",
                arg: "part",
            });
        }

        (Some(number(part)?), choice)
    };

    Ok(Command::Set {
        name: name.to_string(),
        part,
        request: required(choice, "set", "choice")?.into(),
    })
}

fn split_first(args: &str) -> (&str, &str) {
    match args.trim().split_once(char::is_whitespace) {
        Some((first, rem)) => (first, rem.trim()),
        None => (args.trim(), ""),
    }
}

fn required<'a>(args: &'a str, cmd: &'static str, arg: &'static str) -> Result<&'a str, ParseError> {
    let args = args.trim();
    if args.is_empty() {
        return Err(ParseError::MissingArgument { cmd, arg });
    }

    Ok(args)
}

fn number(arg: &str) -> Result<u8, ParseError> {
    arg.parse::<u8>()
        .map_err(|_| ParseError::InvalidNumber(arg.to_string()))
}

fn part_number(arg: &str) -> Result<PartNumber, ParseError> {
    let nb = number(arg)?;
    PartNumber::new(nb).ok_or(ParseError::InvalidPart(nb))
}
