//! Teaching-week applicability.
//!
//! A lesson may run only in some weeks of a term. Week sets arrive either
//! as text (`""`, `"1,3,5"`, `"1-16"`) or as a list of week numbers, and
//! can be further restricted to odd or even weeks.

use serde::{Deserialize, Serialize};

/// Odd/even week restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekType {
    /// Odd-numbered weeks only.
    #[serde(alias = "单")]
    Odd,
    /// Even-numbered weeks only.
    #[serde(alias = "双")]
    Even,
    /// Every week.
    #[default]
    All,
}

impl WeekType {
    /// Whether `week` has the right parity.
    pub fn matches(self, week: u32) -> bool {
        match self {
            WeekType::Odd => week % 2 == 1,
            WeekType::Even => week % 2 == 0,
            WeekType::All => true,
        }
    }
}

/// The set of weeks a lesson runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeekSpec {
    /// Explicit week numbers. Empty means every week.
    List(Vec<u32>),
    /// `""` (every week), `"1,3,5"` or an inclusive range `"1-16"`.
    Text(String),
}

impl WeekSpec {
    /// Whether `week` is in this set.
    ///
    /// Malformed text matches nothing.
    pub fn contains(&self, week: u32) -> bool {
        match self {
            WeekSpec::List(weeks) => weeks.is_empty() || weeks.contains(&week),
            WeekSpec::Text(text) => text_contains(text.trim(), week),
        }
    }
}

fn text_contains(spec: &str, week: u32) -> bool {
    if spec.is_empty() {
        return true;
    }

    let wanted = week.to_string();

    if spec.contains(',') && !spec.contains('-') {
        let listed = spec
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .any(|p| p == wanted);
        if listed {
            return true;
        }
    }

    if let Some((from, to)) = spec.split_once('-') {
        if let (Ok(from), Ok(to)) = (from.trim().parse::<u32>(), to.trim().parse::<u32>()) {
            if (from..=to).contains(&week) {
                return true;
            }
        }
    }

    spec == wanted
}
