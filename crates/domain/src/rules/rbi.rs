//! Runs-batted-in attribution
//!
//! Rules are evaluated in precedence order:
//!
//! 1. Home run: every run, batter included
//! 2. Sacrifice fly: every runner who scored; the batter's out does not cancel credit
//! 3. Walk / intentional walk: one RBI only when the bases were loaded before the pitch
//! 4. Error: never
//! 5. Everything else: every runner who scored
//!
//! Credit is capped at four per plate appearance.

use serde::{Deserialize, Serialize};

use crate::ids::PlayerId;
use crate::value_objects::{BaserunnerState, BattingResult};

/// Upper bound on RBIs from one plate appearance.
pub const MAX_RBIS_PER_AT_BAT: u8 = 4;

/// RBI credit for a plate appearance with a human-readable rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RbiCredit {
    pub rbis: u8,
    pub explanation: String,
}

/// Attribute RBIs for a plate appearance.
///
/// # Example
///
/// ```
/// use scorebook_domain::{calculate_rbis, BaserunnerState, BattingResult, PlayerId};
///
/// let (p1, p2, p3, batter) = (PlayerId::new(), PlayerId::new(), PlayerId::new(), PlayerId::new());
/// let before = BaserunnerState::new(Some(p1), Some(p2), Some(p3)).unwrap();
/// let credit = calculate_rbis(BattingResult::HomeRun, &before, &[p3, p2, p1, batter], batter);
///
/// assert_eq!(credit.rbis, 4);
/// assert_eq!(credit.explanation, "Home run: 4 RBIs (including batter)");
/// ```
pub fn calculate_rbis(
    result: BattingResult,
    before: &BaserunnerState,
    runs_scored: &[PlayerId],
    batter: PlayerId,
) -> RbiCredit {
    let runners_scored = runs_scored.iter().filter(|p| **p != batter).count();

    match result {
        BattingResult::HomeRun => {
            // The batter is always credited, listed or not.
            let rbis = capped(runners_scored + 1);
            RbiCredit {
                rbis,
                explanation: format!("Home run: {} (including batter)", rbi_phrase(rbis)),
            }
        }
        BattingResult::SacrificeFly => {
            let rbis = capped(runners_scored);
            RbiCredit {
                rbis,
                explanation: format!("Sacrifice fly: {}", rbi_phrase(rbis)),
            }
        }
        BattingResult::Walk | BattingResult::IntentionalWalk => {
            let label = result.description();
            if !before.bases_loaded() {
                RbiCredit {
                    rbis: 0,
                    explanation: format!("{} without bases loaded: no RBI", label),
                }
            } else if runners_scored == 0 {
                RbiCredit {
                    rbis: 0,
                    explanation: format!("{} with bases loaded but no run scored: no RBI", label),
                }
            } else {
                RbiCredit {
                    rbis: 1,
                    explanation: format!("{} with bases loaded: 1 RBI (forced run)", label),
                }
            }
        }
        BattingResult::Error => RbiCredit {
            rbis: 0,
            explanation: "Error: no RBI (runs scoring on an error are unearned)".to_string(),
        },
        BattingResult::Single
        | BattingResult::Double
        | BattingResult::Triple
        | BattingResult::FieldersChoice
        | BattingResult::Strikeout
        | BattingResult::GroundOut
        | BattingResult::AirOut
        | BattingResult::DoublePlay => {
            let rbis = capped(runners_scored);
            RbiCredit {
                rbis,
                explanation: format!("{}: {}", result.description(), rbi_phrase(rbis)),
            }
        }
    }
}

fn capped(runs: usize) -> u8 {
    u8::try_from(runs)
        .unwrap_or(MAX_RBIS_PER_AT_BAT)
        .min(MAX_RBIS_PER_AT_BAT)
}

fn rbi_phrase(rbis: u8) -> String {
    match rbis {
        0 => "no RBI".to_string(),
        1 => "1 RBI".to_string(),
        n => format!("{} RBIs", n),
    }
}
