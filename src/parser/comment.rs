//! Description / `@parameter` parser for cleaned comment text.
//!
//! The description is everything before the first line starting with `@`.
//! Parameters are read by a two-state machine: either no parameter is open,
//! or one is open and following plain lines continue its value.

use crate::model::{Comment, ParamValue, Parameters};
use regex::Regex;
use std::sync::LazyLock;

static RE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@(\S+)(?:\s+(.*))?$").unwrap());

/// What to do with an `@` line that is not `@<name> [value]`, i.e. an `@`
/// followed by whitespace or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// Drop the line and keep going.
    Drop,
    /// Reject the whole block.
    Reject,
}

/// A line the parser discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dropped {
    Malformed(String),
    /// A plain line after the description with no parameter open.
    Orphan(String),
}

/// Result of parsing one cleaned block.
#[derive(Debug, Default)]
pub struct Parsed {
    /// `None` when the block had neither description nor parameters.
    pub comment: Option<Comment>,
    pub dropped: Vec<Dropped>,
}

/// The offending line when `Malformed::Reject` is in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine(pub String);

enum State {
    Idle,
    Open(String),
}

/// Parse cleaned comment text into a description and parameters.
pub fn parse(cleaned: &str, on_malformed: Malformed) -> Result<Parsed, MalformedLine> {
    let lines: Vec<&str> = cleaned.lines().collect();
    let split = lines
        .iter()
        .position(|l| l.starts_with('@'))
        .unwrap_or(lines.len());

    let description = lines[..split].join("\n").trim().to_string();

    let mut parameters = Parameters::new();
    let mut dropped = Vec::new();
    let mut state = State::Idle;

    for line in &lines[split..] {
        state = match state {
            _ if line.starts_with('@') => match RE_PARAM.captures(line) {
                Some(caps) => {
                    let name = caps[1].to_string();
                    let value = caps
                        .get(2)
                        .map(|m| m.as_str().trim())
                        .filter(|v| !v.is_empty())
                        .map(|v| ParamValue::Text(v.to_string()))
                        .unwrap_or(ParamValue::Flag);
                    parameters.insert(name.clone(), value);
                    State::Open(name)
                }
                None if on_malformed == Malformed::Reject => {
                    return Err(MalformedLine(line.to_string()));
                }
                None => {
                    dropped.push(Dropped::Malformed(line.to_string()));
                    State::Idle
                }
            },
            State::Open(name) => {
                if let Some(value) = parameters.get_mut(&name) {
                    continue_value(value, line.trim());
                }
                State::Open(name)
            }
            State::Idle => {
                if !line.trim().is_empty() {
                    dropped.push(Dropped::Orphan(line.to_string()));
                }
                State::Idle
            }
        };
    }

    let comment = Comment {
        description,
        parameters,
    };
    Ok(Parsed {
        comment: (!comment.is_empty()).then_some(comment),
        dropped,
    })
}

fn continue_value(value: &mut ParamValue, text: &str) {
    if text.is_empty() {
        return;
    }
    match value {
        ParamValue::Flag => *value = ParamValue::Text(text.to_string()),
        ParamValue::Text(existing) => {
            existing.push(' ');
            existing.push_str(text);
        }
    }
}
