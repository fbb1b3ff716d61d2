//! Extraction of the translation and its context from a model completion.
//!
//! The inference server returns free-form natural language, so everything
//! here is best-effort scraping: a model that ignores the requested output
//! format produces placeholders or a [`ParseError`], never a guaranteed
//! correct split. Keeping it behind [`parse_translation_response`] isolates
//! that fragility from the network and form code.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

pub const TRANSLATION_PREFIX: &str = "1. Translated Phrase: ";
pub const CONTEXT_PREFIX: &str = "2. Context Explanation: ";

pub const TRANSLATION_MARKER: &str = "**Translated Phrase:**";
pub const CONTEXT_MARKER: &str = "**Context Explanation:**";

pub const TRANSLATION_NOT_FOUND: &str = "Translation not found";
pub const CONTEXT_NOT_FOUND: &str = "Context not found";

static TRANSLATION_REGEX: OnceLock<Regex> = OnceLock::new();
static CONTEXT_REGEX: OnceLock<Regex> = OnceLock::new();

// Rest of the marker's line, or the next line when the marker ends its line.
fn translation_regex() -> &'static Regex {
    TRANSLATION_REGEX.get_or_init(|| {
        Regex::new(r"\*\*Translated Phrase:\*\*[ \t]*(?:\r?\n[ \t]*)?([^\n]*)").unwrap()
    })
}

fn context_regex() -> &'static Regex {
    CONTEXT_REGEX.get_or_init(|| {
        Regex::new(r"\*\*Context Explanation:\*\*[ \t]*(?:\r?\n[ \t]*)?([^\n]*)").unwrap()
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub translation: String,
    pub context: String,
}

impl Translation {
    pub fn new(translation: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            translation: translation.into(),
            context: context.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected a translation line and a context line, found {found} line(s)")]
    TooFewLines { found: usize },
}

/// How a completion is split into translation and context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStrategy {
    /// Markers when the completion contains either bold marker, lines otherwise.
    #[default]
    Auto,
    LineSplit,
    Marker,
}

impl ParseStrategy {
    pub fn parse(self, text: &str) -> Result<Translation, ParseError> {
        match self {
            ParseStrategy::Auto if has_markers(text) => Ok(parse_markers(text)),
            ParseStrategy::Auto => parse_line_split(text),
            ParseStrategy::LineSplit => parse_line_split(text),
            ParseStrategy::Marker => Ok(parse_markers(text)),
        }
    }
}

pub fn parse_translation_response(text: &str) -> Result<Translation, ParseError> {
    ParseStrategy::default().parse(text)
}

fn has_markers(text: &str) -> bool {
    text.contains(TRANSLATION_MARKER) || text.contains(CONTEXT_MARKER)
}

/// Reads the translation from the first line and the context from the second,
/// the shape the prompt asks for.
pub fn parse_line_split(text: &str) -> Result<Translation, ParseError> {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < 2 {
        return Err(ParseError::TooFewLines { found: lines.len() });
    }

    let translation = lines[0].replacen(TRANSLATION_PREFIX, "", 1);
    let context = lines[1].replacen(CONTEXT_PREFIX, "", 1);

    Ok(Translation::new(translation.trim(), context.trim()))
}

/// Searches the whole completion for the bold markdown markers. A missing
/// marker yields a placeholder for that field.
pub fn parse_markers(text: &str) -> Translation {
    // A blank capture or one that runs into the other marker counts as missing.
    let capture = |re: &Regex| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|value| !value.is_empty() && !has_markers(value))
            .map(str::to_string)
    };

    Translation {
        translation: capture(translation_regex())
            .unwrap_or_else(|| TRANSLATION_NOT_FOUND.to_string()),
        context: capture(context_regex()).unwrap_or_else(|| CONTEXT_NOT_FOUND.to_string()),
    }
}
