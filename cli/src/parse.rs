//! Argument parsers for the repeated `--step` and `--property` flags.

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

use payloads::SequenceStep;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid step `{0}`; expected DAY:SUBJECT:BODY")]
    StepShape(String),
    #[error("invalid day offset `{0}`; expected a non-negative integer")]
    DayOffset(String),
    #[error("invalid property `{0}`; expected KEY=VALUE")]
    Property(String),
}

/// Parse `DAY:SUBJECT:BODY`. The body may itself contain `:`.
///
/// # Errors
///
/// Returns [`ParseError`] when a part is missing or the day is not a `u32`.
pub fn parse_step(raw: &str) -> Result<SequenceStep, ParseError> {
    let mut parts = raw.splitn(3, ':');
    let (Some(day), Some(subject), Some(body)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::StepShape(raw.to_owned()));
    };
    let day_offset = day
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseError::DayOffset(day.trim().to_owned()))?;
    Ok(SequenceStep {
        day_offset,
        subject: subject.to_owned(),
        body: body.to_owned(),
    })
}

/// Parse `KEY=VALUE`. Values that are valid JSON keep their type (`3`,
/// `true`, `{"a":1}`); anything else is sent as a string.
///
/// # Errors
///
/// Returns [`ParseError::Property`] when `=` is missing or the key is empty.
pub fn parse_property(raw: &str) -> Result<(String, Value), ParseError> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(ParseError::Property(raw.to_owned()));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::Property(raw.to_owned()));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));
    Ok((key.to_owned(), value))
}
