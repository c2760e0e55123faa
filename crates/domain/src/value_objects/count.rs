//! Ball/strike count and pitch codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Balls that award first base.
pub const BALLS_FOR_WALK: u8 = 4;
/// Strikes that retire the batter.
pub const STRIKES_FOR_STRIKEOUT: u8 = 3;

/// A single pitch, keyed by its scorebook code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pitch {
    #[serde(rename = "B")]
    Ball,
    #[serde(rename = "C")]
    CalledStrike,
    #[serde(rename = "S")]
    SwingingStrike,
    #[serde(rename = "F")]
    Foul,
    #[serde(rename = "X")]
    InPlay,
}

impl Pitch {
    pub fn code(self) -> char {
        match self {
            Self::Ball => 'B',
            Self::CalledStrike => 'C',
            Self::SwingingStrike => 'S',
            Self::Foul => 'F',
            Self::InPlay => 'X',
        }
    }

    /// Parse a compact sequence such as `"BCFX"`.
    pub fn parse_sequence(sequence: &str) -> Result<Vec<Pitch>, DomainError> {
        sequence
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_string().parse())
            .collect()
    }
}

impl FromStr for Pitch {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "B" => Ok(Self::Ball),
            "C" => Ok(Self::CalledStrike),
            "S" => Ok(Self::SwingingStrike),
            "F" => Ok(Self::Foul),
            "X" => Ok(Self::InPlay),
            _ => Err(DomainError::parse(format!("Unknown pitch code: {}", s))),
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Ball/strike count for the current plate appearance.
///
/// Four balls and three strikes are representable so that the terminal count
/// of a walk or strikeout can be recorded on the at-bat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "CountWireFormat", into = "CountWireFormat")]
pub struct Count {
    balls: u8,
    strikes: u8,
}

impl Count {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if balls exceed 4 or strikes exceed 3.
    pub fn new(balls: u8, strikes: u8) -> Result<Self, DomainError> {
        if balls > BALLS_FOR_WALK {
            return Err(DomainError::validation(format!(
                "Ball count cannot exceed {}",
                BALLS_FOR_WALK
            )));
        }
        if strikes > STRIKES_FOR_STRIKEOUT {
            return Err(DomainError::validation(format!(
                "Strike count cannot exceed {}",
                STRIKES_FOR_STRIKEOUT
            )));
        }
        Ok(Self { balls, strikes })
    }

    #[inline]
    pub fn balls(&self) -> u8 {
        self.balls
    }

    #[inline]
    pub fn strikes(&self) -> u8 {
        self.strikes
    }

    pub fn is_walk(&self) -> bool {
        self.balls >= BALLS_FOR_WALK
    }

    pub fn is_strikeout(&self) -> bool {
        self.strikes >= STRIKES_FOR_STRIKEOUT
    }

    /// Whether the plate appearance has already ended on balls or strikes.
    pub fn is_terminal(&self) -> bool {
        self.is_walk() || self.is_strikeout()
    }

    /// Count after `pitch`. A foul with two strikes leaves the count
    /// unchanged, and a ball in play does not change it either.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if the count is already terminal.
    pub fn after(self, pitch: Pitch) -> Result<Self, DomainError> {
        if self.is_terminal() {
            return Err(DomainError::constraint(format!(
                "Count {} already ended the plate appearance",
                self
            )));
        }
        let next = match pitch {
            Pitch::Ball => Self {
                balls: self.balls + 1,
                ..self
            },
            Pitch::CalledStrike | Pitch::SwingingStrike => Self {
                strikes: self.strikes + 1,
                ..self
            },
            Pitch::Foul if self.strikes < STRIKES_FOR_STRIKEOUT - 1 => Self {
                strikes: self.strikes + 1,
                ..self
            },
            Pitch::Foul | Pitch::InPlay => self,
        };
        Ok(next)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.balls, self.strikes)
    }
}

#[derive(Serialize, Deserialize)]
struct CountWireFormat {
    balls: u8,
    strikes: u8,
}

impl TryFrom<CountWireFormat> for Count {
    type Error = DomainError;

    fn try_from(wire: CountWireFormat) -> Result<Self, Self::Error> {
        Self::new(wire.balls, wire.strikes)
    }
}

impl From<Count> for CountWireFormat {
    fn from(count: Count) -> Self {
        Self {
            balls: count.balls,
            strikes: count.strikes,
        }
    }
}
