//! Bases and batter advancement.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three occupiable bases. Home plate is never occupied; reaching
/// it means scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Base {
    First,
    Second,
    Third,
}

impl Base {
    /// All bases, ordered from first to third.
    pub const ALL: [Base; 3] = [Base::First, Base::Second, Base::Third];

    /// 1 for first, 2 for second, 3 for third.
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    /// Base reached after advancing `bases` from home plate; `None` means the
    /// runner scored (or `bases` was zero).
    pub fn from_number(bases: u8) -> Option<Self> {
        match bases {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }

    /// The next base around the diamond; `None` from third (home).
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::First => "1st",
            Self::Second => "2nd",
            Self::Third => "3rd",
        };
        f.write_str(label)
    }
}

/// Where the batter ends up as a direct result of the batting outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "base")]
pub enum BatterAdvance {
    /// The batter did not reach (out, or a sacrifice).
    None,
    /// The batter stands on the given base.
    To(Base),
    /// The batter circled the bases.
    Scores,
}

impl BatterAdvance {
    /// Bases gained by the batter: 0 to 3, or 4 when the batter scores.
    pub fn bases(self) -> u8 {
        match self {
            Self::None => 0,
            Self::To(base) => base.number(),
            Self::Scores => 4,
        }
    }

    /// Whether the batter reached base or scored.
    pub fn reached(self) -> bool {
        !matches!(self, Self::None)
    }
}
