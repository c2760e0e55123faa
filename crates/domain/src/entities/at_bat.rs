//! AtBat record - one completed plate appearance
//!
//! Records are created once and never mutated. A scorer correction produces a
//! new record that points at the one it replaces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{AtBatId, GameId, InningId, PlayerId};
use crate::rules::MAX_RBIS_PER_AT_BAT;
use crate::value_objects::{BaserunnerState, BattingResult, Count, Pitch};

/// Everything needed to build an [`AtBat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtBatDraft {
    pub game_id: GameId,
    pub inning_id: InningId,
    pub batter_id: PlayerId,
    /// 1-based position in the batting order
    pub batting_position: u8,
    pub result: BattingResult,
    pub rbis: u8,
    pub runs_scored: Vec<PlayerId>,
    /// Runners who advanced on a fielding error during the play
    pub running_errors: Vec<PlayerId>,
    pub baserunners_before: BaserunnerState,
    pub baserunners_after: BaserunnerState,
    pub final_count: Count,
    pub pitch_sequence: Vec<Pitch>,
}

/// A completed plate appearance.
///
/// # Invariants
///
/// - `rbis` is in `0..=4`
/// - `rbis <= runs_scored.len() + 1` for a home run, `<= runs_scored.len()` otherwise
/// - no player is listed twice in `runs_scored`
/// - `batting_position >= 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AtBatWireFormat", into = "AtBatWireFormat")]
pub struct AtBat {
    id: AtBatId,
    supersedes: Option<AtBatId>,
    game_id: GameId,
    inning_id: InningId,
    batter_id: PlayerId,
    batting_position: u8,
    result: BattingResult,
    rbis: u8,
    runs_scored: Vec<PlayerId>,
    running_errors: Vec<PlayerId>,
    baserunners_before: BaserunnerState,
    baserunners_after: BaserunnerState,
    final_count: Count,
    pitch_sequence: Vec<Pitch>,
    recorded_at: DateTime<Utc>,
}

impl AtBat {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Validate and build a new record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the RBI count breaks its bounds or
    /// the batting position is zero, and `DomainError::Constraint` if a runner
    /// is listed as scoring twice.
    pub fn new(draft: AtBatDraft, recorded_at: DateTime<Utc>) -> Result<Self, DomainError> {
        Self::validate(&draft)?;
        Ok(Self::from_draft(AtBatId::new(), None, draft, recorded_at))
    }

    /// Build the replacement for this record. The original stays untouched.
    ///
    /// # Errors
    ///
    /// Same as [`AtBat::new`], plus `DomainError::Constraint` if the
    /// correction names a different game.
    pub fn correct(&self, draft: AtBatDraft, recorded_at: DateTime<Utc>) -> Result<Self, DomainError> {
        if draft.game_id != self.game_id {
            return Err(DomainError::constraint(format!(
                "Correction for at-bat {} must stay in game {}",
                self.id, self.game_id
            )));
        }
        Self::validate(&draft)?;
        Ok(Self::from_draft(AtBatId::new(), Some(self.id), draft, recorded_at))
    }

    fn from_draft(
        id: AtBatId,
        supersedes: Option<AtBatId>,
        draft: AtBatDraft,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            supersedes,
            game_id: draft.game_id,
            inning_id: draft.inning_id,
            batter_id: draft.batter_id,
            batting_position: draft.batting_position,
            result: draft.result,
            rbis: draft.rbis,
            runs_scored: draft.runs_scored,
            running_errors: draft.running_errors,
            baserunners_before: draft.baserunners_before,
            baserunners_after: draft.baserunners_after,
            final_count: draft.final_count,
            pitch_sequence: draft.pitch_sequence,
            recorded_at,
        }
    }

    fn validate(draft: &AtBatDraft) -> Result<(), DomainError> {
        if draft.batting_position == 0 {
            return Err(DomainError::validation("Batting position starts at 1"));
        }
        if draft.rbis > MAX_RBIS_PER_AT_BAT {
            return Err(DomainError::validation(format!(
                "RBIs cannot exceed {} per at-bat, got {}",
                MAX_RBIS_PER_AT_BAT, draft.rbis
            )));
        }
        let home_run_bonus = usize::from(draft.result == BattingResult::HomeRun);
        let bound = draft.runs_scored.len() + home_run_bonus;
        if usize::from(draft.rbis) > bound {
            return Err(DomainError::validation(format!(
                "{} RBIs exceed the {} run(s) credited on a {}",
                draft.rbis,
                bound,
                draft.result.description()
            )));
        }
        for (index, player) in draft.runs_scored.iter().enumerate() {
            if draft.runs_scored[..index].contains(player) {
                return Err(DomainError::constraint(format!(
                    "Player {} is listed as scoring twice",
                    player
                )));
            }
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> AtBatId {
        self.id
    }

    /// The record this one corrects, if any.
    #[inline]
    pub fn supersedes(&self) -> Option<AtBatId> {
        self.supersedes
    }

    #[inline]
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    #[inline]
    pub fn inning_id(&self) -> InningId {
        self.inning_id
    }

    #[inline]
    pub fn batter_id(&self) -> PlayerId {
        self.batter_id
    }

    #[inline]
    pub fn batting_position(&self) -> u8 {
        self.batting_position
    }

    #[inline]
    pub fn result(&self) -> BattingResult {
        self.result
    }

    #[inline]
    pub fn rbis(&self) -> u8 {
        self.rbis
    }

    /// Players who scored, in the order they crossed the plate.
    #[inline]
    pub fn runs_scored(&self) -> &[PlayerId] {
        &self.runs_scored
    }

    #[inline]
    pub fn running_errors(&self) -> &[PlayerId] {
        &self.running_errors
    }

    #[inline]
    pub fn baserunners_before(&self) -> &BaserunnerState {
        &self.baserunners_before
    }

    #[inline]
    pub fn baserunners_after(&self) -> &BaserunnerState {
        &self.baserunners_after
    }

    #[inline]
    pub fn final_count(&self) -> Count {
        self.final_count
    }

    #[inline]
    pub fn pitch_sequence(&self) -> &[Pitch] {
        &self.pitch_sequence
    }

    #[inline]
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn scored(&self, player: PlayerId) -> bool {
        self.runs_scored.contains(&player)
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AtBatWireFormat {
    id: AtBatId,
    #[serde(default)]
    supersedes: Option<AtBatId>,
    game_id: GameId,
    inning_id: InningId,
    batter_id: PlayerId,
    batting_position: u8,
    result: BattingResult,
    rbis: u8,
    runs_scored: Vec<PlayerId>,
    #[serde(default)]
    running_errors: Vec<PlayerId>,
    baserunners_before: BaserunnerState,
    baserunners_after: BaserunnerState,
    final_count: Count,
    #[serde(default)]
    pitch_sequence: Vec<Pitch>,
    recorded_at: DateTime<Utc>,
}

impl TryFrom<AtBatWireFormat> for AtBat {
    type Error = DomainError;

    fn try_from(wire: AtBatWireFormat) -> Result<Self, Self::Error> {
        let draft = AtBatDraft {
            game_id: wire.game_id,
            inning_id: wire.inning_id,
            batter_id: wire.batter_id,
            batting_position: wire.batting_position,
            result: wire.result,
            rbis: wire.rbis,
            runs_scored: wire.runs_scored,
            running_errors: wire.running_errors,
            baserunners_before: wire.baserunners_before,
            baserunners_after: wire.baserunners_after,
            final_count: wire.final_count,
            pitch_sequence: wire.pitch_sequence,
        };
        Self::validate(&draft)?;
        Ok(Self::from_draft(wire.id, wire.supersedes, draft, wire.recorded_at))
    }
}

impl From<AtBat> for AtBatWireFormat {
    fn from(at_bat: AtBat) -> Self {
        Self {
            id: at_bat.id,
            supersedes: at_bat.supersedes,
            game_id: at_bat.game_id,
            inning_id: at_bat.inning_id,
            batter_id: at_bat.batter_id,
            batting_position: at_bat.batting_position,
            result: at_bat.result,
            rbis: at_bat.rbis,
            runs_scored: at_bat.runs_scored,
            running_errors: at_bat.running_errors,
            baserunners_before: at_bat.baserunners_before,
            baserunners_after: at_bat.baserunners_after,
            final_count: at_bat.final_count,
            pitch_sequence: at_bat.pitch_sequence,
            recorded_at: at_bat.recorded_at,
        }
    }
}
