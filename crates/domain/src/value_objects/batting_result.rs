//! Batting result codes and their static rule metadata.
//!
//! The set of outcomes is closed. Every metadata accessor is an exhaustive
//! `match`, so a new variant does not compile until it is classified.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{Base, BatterAdvance};

/// Outcome of a completed plate appearance, keyed by its scorebook code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattingResult {
    #[serde(rename = "1B")]
    Single,
    #[serde(rename = "2B")]
    Double,
    #[serde(rename = "3B")]
    Triple,
    #[serde(rename = "HR")]
    HomeRun,
    #[serde(rename = "BB")]
    Walk,
    #[serde(rename = "IBB")]
    IntentionalWalk,
    #[serde(rename = "SF")]
    SacrificeFly,
    #[serde(rename = "E")]
    Error,
    #[serde(rename = "FC")]
    FieldersChoice,
    #[serde(rename = "SO")]
    Strikeout,
    #[serde(rename = "GO")]
    GroundOut,
    #[serde(rename = "AO")]
    AirOut,
    #[serde(rename = "DP")]
    DoublePlay,
}

impl BattingResult {
    /// Every result code, in scorebook order.
    pub const ALL: [BattingResult; 13] = [
        Self::Single,
        Self::Double,
        Self::Triple,
        Self::HomeRun,
        Self::Walk,
        Self::IntentionalWalk,
        Self::SacrificeFly,
        Self::Error,
        Self::FieldersChoice,
        Self::Strikeout,
        Self::GroundOut,
        Self::AirOut,
        Self::DoublePlay,
    ];

    /// Scorebook code, e.g. `"1B"` or `"SF"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Single => "1B",
            Self::Double => "2B",
            Self::Triple => "3B",
            Self::HomeRun => "HR",
            Self::Walk => "BB",
            Self::IntentionalWalk => "IBB",
            Self::SacrificeFly => "SF",
            Self::Error => "E",
            Self::FieldersChoice => "FC",
            Self::Strikeout => "SO",
            Self::GroundOut => "GO",
            Self::AirOut => "AO",
            Self::DoublePlay => "DP",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Triple => "Triple",
            Self::HomeRun => "Home run",
            Self::Walk => "Walk",
            Self::IntentionalWalk => "Intentional walk",
            Self::SacrificeFly => "Sacrifice fly",
            Self::Error => "Error",
            Self::FieldersChoice => "Fielder's choice",
            Self::Strikeout => "Strikeout",
            Self::GroundOut => "Ground out",
            Self::AirOut => "Air out",
            Self::DoublePlay => "Double play",
        }
    }

    pub fn is_hit(self) -> bool {
        match self {
            Self::Single | Self::Double | Self::Triple | Self::HomeRun => true,
            Self::Walk
            | Self::IntentionalWalk
            | Self::SacrificeFly
            | Self::Error
            | Self::FieldersChoice
            | Self::Strikeout
            | Self::GroundOut
            | Self::AirOut
            | Self::DoublePlay => false,
        }
    }

    /// Whether the batter is put out.
    pub fn is_out(self) -> bool {
        match self {
            Self::SacrificeFly
            | Self::Strikeout
            | Self::GroundOut
            | Self::AirOut
            | Self::DoublePlay => true,
            Self::Single
            | Self::Double
            | Self::Triple
            | Self::HomeRun
            | Self::Walk
            | Self::IntentionalWalk
            | Self::Error
            | Self::FieldersChoice => false,
        }
    }

    /// Where the batter lands.
    pub fn batting_advancement(self) -> BatterAdvance {
        match self {
            Self::Single
            | Self::Walk
            | Self::IntentionalWalk
            | Self::Error
            | Self::FieldersChoice => BatterAdvance::To(Base::First),
            Self::Double => BatterAdvance::To(Base::Second),
            Self::Triple => BatterAdvance::To(Base::Third),
            Self::HomeRun => BatterAdvance::Scores,
            Self::SacrificeFly
            | Self::Strikeout
            | Self::GroundOut
            | Self::AirOut
            | Self::DoublePlay => BatterAdvance::None,
        }
    }

    /// Whether runners behind the batter's landing base are forced to move.
    pub fn forces_runner_advancement(self) -> bool {
        match self {
            Self::Single
            | Self::Double
            | Self::Triple
            | Self::HomeRun
            | Self::Walk
            | Self::IntentionalWalk
            | Self::Error
            | Self::FieldersChoice => true,
            Self::SacrificeFly
            | Self::Strikeout
            | Self::GroundOut
            | Self::AirOut
            | Self::DoublePlay => false,
        }
    }

    /// Outs the play records when the scorer supplies no override.
    pub fn default_outs(self) -> u8 {
        match self {
            Self::SacrificeFly | Self::Strikeout | Self::GroundOut | Self::AirOut => 1,
            Self::DoublePlay => 2,
            Self::Single
            | Self::Double
            | Self::Triple
            | Self::HomeRun
            | Self::Walk
            | Self::IntentionalWalk
            | Self::Error
            | Self::FieldersChoice => 0,
        }
    }

    /// Whether the plate appearance counts as an official at-bat.
    pub fn counts_as_at_bat(self) -> bool {
        !matches!(
            self,
            Self::Walk | Self::IntentionalWalk | Self::SacrificeFly
        )
    }

    pub fn is_walk(self) -> bool {
        matches!(self, Self::Walk | Self::IntentionalWalk)
    }
}

impl fmt::Display for BattingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BattingResult {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|result| result.code() == code)
            .ok_or_else(|| DomainError::parse(format!("Unknown batting result code: {}", s)))
    }
}
