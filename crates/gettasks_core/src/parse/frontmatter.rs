//! Front-matter splitting.
//!
//! # Responsibility
//! - Split note text on `---` delimiter lines into metadata and body.
//! - Flatten the YAML metadata block into string keys and values; scalar keys
//!   such as `2023` are kept as text, nested values are dropped.
//!
//! # Invariants
//! - At least two delimiter lines are required; anything before the first one
//!   is ignored.
//! - The body is everything after the second delimiter, untouched.
//! - An unparsable metadata block yields an empty mapping, not an error.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static DELIMITER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^---[ \t]*\r?$").expect("valid delimiter regex"));

/// Flat metadata mapping; absent keys are simply missing.
pub type FrontMatter = BTreeMap<String, String>;

/// Front-matter parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontMatterError {
    /// Fewer than two `---` delimiter lines were found.
    MissingDelimiters { found: usize },
}

impl Display for FrontMatterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDelimiters { found } => write!(
                f,
                "front matter requires two `---` delimiter lines, found {found}"
            ),
        }
    }
}

impl Error for FrontMatterError {}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Splits raw note text into `(metadata, body)`.
///
/// # Errors
/// - Returns `MissingDelimiters` when the text has fewer than two delimiter
///   lines.
pub fn split_front_matter(raw: &str) -> Result<(FrontMatter, String), FrontMatterError> {
    let parts: Vec<&str> = DELIMITER_RE.splitn(raw, 3).collect();
    if parts.len() < 3 {
        return Err(FrontMatterError::MissingDelimiters {
            found: parts.len() - 1,
        });
    }

    Ok((parse_matter_block(parts[1]), parts[2].to_string()))
}

fn parse_matter_block(block: &str) -> FrontMatter {
    if block.trim().is_empty() {
        return FrontMatter::new();
    }

    match serde_yaml::from_str::<Mapping>(block) {
        Ok(values) => values
            .iter()
            .filter_map(|(key, value)| Some((scalar_text(key)?, scalar_text(value)?)))
            .collect(),
        Err(err) => {
            debug!("event=front_matter_parse module=parse status=skip error={err}");
            FrontMatter::new()
        }
    }
}
