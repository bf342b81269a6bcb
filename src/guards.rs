//! Start/stop guard validation.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

use crate::encoding::EncodeError;

/// Guard synthesized around content that carries none of its own.
pub const DEFAULT_GUARD: char = 'A';

pub const PRIMARY_GUARDS: &str = "ABCD";
pub const ALTERNATE_GUARDS: &str = "TN*E";

/// Category of a character appearing at a guard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    Primary,
    Alternate,
    Neither,
}

impl GuardKind {
    pub fn classify(ch: char) -> Self {
        let up = ch.to_ascii_uppercase();
        if PRIMARY_GUARDS.contains(up) {
            GuardKind::Primary
        } else if ALTERNATE_GUARDS.contains(up) {
            GuardKind::Alternate
        } else {
            GuardKind::Neither
        }
    }
}

/// Outcome of pairing the first and last characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardPair {
    /// Both ends come from the same guard set.
    Matched(GuardKind),
    /// Neither end is a guard; default guards must be added.
    Missing,
    /// One end is a guard and the other is not, or the sets differ.
    Mismatched,
}

impl GuardPair {
    pub fn of(first: char, last: char) -> Self {
        match (GuardKind::classify(first), GuardKind::classify(last)) {
            (GuardKind::Neither, GuardKind::Neither) => GuardPair::Missing,
            (a, b) if a == b => GuardPair::Matched(a),
            _ => GuardPair::Mismatched,
        }
    }
}

/// Content that starts and ends with guards of the same set.
///
/// Only [`normalize`] constructs this, so anything holding one has passed
/// the guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<'a>(Cow<'a, str>);

impl Normalized<'_> {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Normalized<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Normalized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Normalized<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ensure `content` starts and ends with guards of the same set.
///
/// Content shorter than two characters, or content with no guard at either
/// end, is wrapped in [`DEFAULT_GUARD`]. Interior characters are untouched.
pub fn normalize(content: &str) -> Result<Normalized<'_>, EncodeError> {
    let mut chars = content.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return Ok(Normalized(Cow::Owned(wrap(content))));
    };

    match GuardPair::of(first, last) {
        GuardPair::Matched(_) => Ok(Normalized(Cow::Borrowed(content))),
        GuardPair::Missing => Ok(Normalized(Cow::Owned(wrap(content)))),
        GuardPair::Mismatched => Err(EncodeError::InvalidGuard { first, last }),
    }
}

fn wrap(content: &str) -> String {
    let mut wrapped = String::with_capacity(content.len() + 2);
    wrapped.push(DEFAULT_GUARD);
    wrapped.push_str(content);
    wrapped.push(DEFAULT_GUARD);
    wrapped
}
