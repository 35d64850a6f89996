//! Rotation policy and the time-bucket state machine
//!
//! Time-based policies (daily, hourly) swap the active file whenever the
//! wall clock crosses into a new bucket; the finished period is kept as
//! `<path>.<suffix>`. The size-based policy swaps once the file reaches a
//! byte threshold and keeps a bounded set of numbered backups.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub(crate) const DAY_SUFFIX_FORMAT: &str = "%Y-%m-%d";
pub(crate) const HOUR_SUFFIX_FORMAT: &str = "%Y-%m-%d-%H";

/// When the active output file is swapped for a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RotationPolicy {
    /// Never rotate
    #[default]
    Never,

    /// Swap at local-day boundaries, backups suffixed `YYYY-MM-DD`
    Daily,

    /// Swap at local-hour boundaries, backups suffixed `YYYY-MM-DD-HH`
    Hourly,

    /// Swap when the file reaches `max_bytes`, keeping up to
    /// `max_backups` numbered backups (`.1` newest, oldest deleted)
    Size { max_bytes: u64, max_backups: usize },
}

/// Tracks the policy together with the suffix of the bucket the current
/// file belongs to. Only meaningful for time-based policies; for the
/// others the suffix stays empty.
#[derive(Debug, Clone)]
pub(crate) struct Rotation {
    policy: RotationPolicy,
    suffix: String,
}

impl Rotation {
    pub(crate) fn new(policy: RotationPolicy, now: DateTime<Local>) -> Self {
        let suffix = match policy {
            RotationPolicy::Daily => day_suffix(now),
            RotationPolicy::Hourly => hour_suffix(now),
            RotationPolicy::Never | RotationPolicy::Size { .. } => String::new(),
        };
        Self { policy, suffix }
    }

    pub(crate) fn policy(&self) -> RotationPolicy {
        self.policy
    }

    /// Suffix of the bucket the current file covers. This is what a
    /// time-based backup gets named with when the bucket rolls over.
    pub(crate) fn stored_suffix(&self) -> &str {
        &self.suffix
    }

    /// For time-based policies: the candidate suffix for `now`, if it
    /// differs from the stored one. `None` means no rotation is due.
    pub(crate) fn time_due(&self, now: DateTime<Local>) -> Option<String> {
        let candidate = match self.policy {
            RotationPolicy::Daily => day_suffix(now),
            RotationPolicy::Hourly => hour_suffix(now),
            RotationPolicy::Never | RotationPolicy::Size { .. } => return None,
        };
        (candidate != self.suffix).then_some(candidate)
    }

    /// Record that the file for `candidate` is now the active one.
    pub(crate) fn advance(&mut self, candidate: String) {
        self.suffix = candidate;
    }
}

pub(crate) fn day_suffix(t: DateTime<Local>) -> String {
    t.format(DAY_SUFFIX_FORMAT).to_string()
}

pub(crate) fn hour_suffix(t: DateTime<Local>) -> String {
    t.format(HOUR_SUFFIX_FORMAT).to_string()
}
