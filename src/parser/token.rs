//! Argument token classification
//!
//! A token is option-shaped if it starts with one or two dashes followed by
//! an alphanumeric character. Anything else is a command token.

use crate::error::{ParseError, ParseResult};
use regex::Regex;
use std::sync::LazyLock;

static OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--?[a-zA-Z0-9]").expect("option pattern is valid"));

static SHORT_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-[a-zA-Z0-9]").expect("short option pattern is valid"));

static OPTION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9_-]*$").expect("option name pattern is valid"));

static BOOL_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(true|false)$").expect("bool literal pattern is valid"));

/// A classified argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `-abc`: the packed characters after the dash
    ShortCluster(&'a str),

    /// `--name`
    Long,

    /// Anything that is not option-shaped
    Word,
}

/// Classify a raw argument
pub fn classify(arg: &str) -> Token<'_> {
    if is_short_option(arg) {
        Token::ShortCluster(&arg[1..])
    } else if is_option(arg) {
        Token::Long
    } else {
        Token::Word
    }
}

/// `^--?[a-zA-Z0-9]`
pub fn is_option(arg: &str) -> bool {
    OPTION.is_match(arg)
}

/// `^-[a-zA-Z0-9]`
pub fn is_short_option(arg: &str) -> bool {
    SHORT_OPTION.is_match(arg)
}

/// Case-insensitive `true` or `false`
pub fn is_bool_literal(arg: &str) -> bool {
    BOOL_LITERAL.is_match(arg)
}

/// Whether `name` (without dashes) is a valid long option name
pub fn is_valid_option_name(name: &str) -> bool {
    OPTION_NAME.is_match(name)
}

/// Extract the option name following the leading dashes
pub fn option_name(arg: &str) -> ParseResult<&str> {
    let name = arg
        .strip_prefix("--")
        .or_else(|| arg.strip_prefix('-'))
        .unwrap_or(arg);

    if is_valid_option_name(name) {
        Ok(name)
    } else {
        Err(ParseError::MalformedOptionName(arg.to_string()))
    }
}
