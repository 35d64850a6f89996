//! Severity kinds and the cumulative level mask

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single log severity, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Fatal = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Debug = 4,
}

impl Severity {
    /// All severities in order of decreasing severity.
    pub const ALL: [Severity; 5] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
    ];

    /// Single-letter tag rendered in front of every message.
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Fatal => "F",
            Severity::Error => "E",
            Severity::Warning => "W",
            Severity::Info => "I",
            Severity::Debug => "D",
        }
    }

    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Fatal => Red,
            Severity::Error => Red,
            Severity::Warning => Yellow,
            Severity::Info => White,
            Severity::Debug => Cyan,
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// The set of severities a logger will emit.
///
/// Masks are cumulative: enabling a severity always enables everything
/// more severe, so a `Warning` mask carries `Error` and `Fatal` with it.
/// The only way to silence `Fatal` is the empty mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelMask(u8);

impl LevelMask {
    /// The empty mask; nothing is emitted.
    pub const NONE: LevelMask = LevelMask(0);

    /// Every severity enabled.
    pub fn all() -> Self {
        Self::at_least(Severity::Debug)
    }

    /// The cumulative mask enabling `cutoff` and every severity above it.
    pub fn at_least(cutoff: Severity) -> Self {
        Severity::ALL
            .iter()
            .filter(|s| **s <= cutoff)
            .fold(Self::NONE, |mask, s| mask.with(*s))
    }

    /// Add a single severity to the set.
    pub fn with(self, severity: Severity) -> Self {
        LevelMask(self.0 | severity.bit())
    }

    /// Whether this mask emits the given severity.
    pub fn enables(self, severity: Severity) -> bool {
        self.0 & severity.bit() != 0
    }

    /// Parse a mask from a level name, case-insensitively.
    ///
    /// Unknown and empty names resolve to the all-enabled mask rather
    /// than an error, so a misspelled level silently enables everything.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "fatal" => Self::at_least(Severity::Fatal),
            "error" => Self::at_least(Severity::Error),
            "warn" | "warning" => Self::at_least(Severity::Warning),
            "info" => Self::at_least(Severity::Info),
            "debug" => Self::at_least(Severity::Debug),
            _ => Self::all(),
        }
    }
}

impl Default for LevelMask {
    fn default() -> Self {
        Self::all()
    }
}
