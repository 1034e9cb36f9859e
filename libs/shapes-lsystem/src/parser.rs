//! # Program Parser
//!
//! Turns program text into a [`Program`].
//!
//! ## Grammar
//!
//! ```text
//! program := (command argument)*
//! command := rule | shape | call | rx | ry | rz | tx | ty | tz | sx | sy | sz | sa
//! ```
//!
//! `rule name[.weight]` starts a new rule; commands before the first `rule`
//! belong to the implicit `entry` rule.
//!
//! ## Example
//!
//! ```rust
//! use shapes_lsystem::parse;
//!
//! let program = parse("sx 2 shape connect call grow rule grow.3 tz 1 shape connect").unwrap();
//! assert_eq!(program.rules().len(), 2);
//! assert_eq!(program.rules()[1].weight, 3);
//! ```

use crate::error::{ParseError, ParseErrorKind};
use crate::program::{Axis, Command, Program, Rule, ShapeMode, ENTRY_RULE};

/// Parses program text.
///
/// Tokens are separated by any whitespace and read in `command argument`
/// pairs.
///
/// # Errors
///
/// Returns a [`ParseError`] for an empty program, a trailing command with
/// no argument, unknown commands, malformed numbers or weights, and calls
/// to rules that are never defined.
pub fn parse(text: &str) -> Result<Program, ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyProgram, 0));
    }

    let mut rules = vec![Rule::new(ENTRY_RULE, 1)];
    let mut calls: Vec<(usize, &str)> = Vec::new();

    for (pair, chunk) in tokens.chunks(2).enumerate() {
        let at = pair * 2;
        let command = chunk[0];
        let Some(&argument) = chunk.get(1) else {
            return Err(ParseError::new(
                ParseErrorKind::MissingArgument {
                    command: command.to_string(),
                },
                at,
            ));
        };

        if command == "rule" {
            rules.push(parse_rule_header(argument, at + 1)?);
            continue;
        }

        let parsed = match command {
            "shape" if argument == "connect" => Command::Shape(ShapeMode::Connect),
            "shape" => Command::Shape(ShapeMode::Disjoint),
            "call" => {
                calls.push((at + 1, argument));
                Command::Call(argument.to_string())
            }
            "rx" | "ry" | "rz" => Command::Rotate {
                axis: axis_of(command),
                degrees: parse_number(command, argument, at + 1)?,
            },
            "tx" | "ty" | "tz" => Command::Translate {
                axis: axis_of(command),
                distance: parse_number(command, argument, at + 1)?,
            },
            "sx" | "sy" | "sz" => Command::Scale {
                axis: axis_of(command),
                factor: parse_number(command, argument, at + 1)?,
            },
            "sa" => Command::ScaleUniform(parse_number(command, argument, at + 1)?),
            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::UnknownCommand {
                        command: command.to_string(),
                    },
                    at,
                ))
            }
        };

        if let Some(rule) = rules.last_mut() {
            rule.commands.push(parsed);
        }
    }

    for (at, name) in calls {
        if !rules.iter().any(|r| r.name == name) {
            return Err(ParseError::new(
                ParseErrorKind::UnknownRule {
                    name: name.to_string(),
                },
                at,
            ));
        }
    }

    Ok(Program::from_rules(rules))
}

fn parse_rule_header(argument: &str, at: usize) -> Result<Rule, ParseError> {
    match argument.split_once('.') {
        None => Ok(Rule::new(argument, 1)),
        Some((name, weight)) => weight
            .parse::<u32>()
            .map(|w| Rule::new(name, w))
            .map_err(|_| {
                ParseError::new(
                    ParseErrorKind::InvalidWeight {
                        text: weight.to_string(),
                    },
                    at,
                )
            }),
    }
}

fn parse_number(command: &str, text: &str, at: usize) -> Result<f32, ParseError> {
    match text.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::new(
            ParseErrorKind::InvalidNumber {
                command: command.to_string(),
                text: text.to_string(),
            },
            at,
        )),
    }
}

/// Axis named by the last letter of a `rx`..`sz` command.
fn axis_of(command: &str) -> Axis {
    match command.as_bytes().last() {
        Some(b'x') => Axis::X,
        Some(b'y') => Axis::Y,
        _ => Axis::Z,
    }
}
