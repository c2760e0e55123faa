//! Game session mutation outcomes.

use serde::{Deserialize, Serialize};

use crate::entities::{AtBatDraft, GameStatus};
use crate::ids::{GameId, InningId, PlayerId};
use crate::value_objects::{BaserunnerState, BattingResult, Count, HalfInning, Pitch};

/// Outcome of a session transition other than an at-bat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    GameStarted {
        leadoff: PlayerId,
    },
    StatusChanged {
        from: GameStatus,
        to: GameStatus,
    },
    PitchRecorded {
        pitch: Pitch,
        count: Count,
        /// Ball four or strike three was reached; the caller records the at-bat.
        plate_appearance_over: bool,
    },
    RunsAdded {
        runs: u32,
        total: u32,
    },
    InningAdvanced {
        from_inning: u32,
        from_half: HalfInning,
        to_inning: u32,
        to_half: HalfInning,
    },
    BatterChanged {
        from: PlayerId,
        to: PlayerId,
    },
    BaserunnersCleared {
        previous: BaserunnerState,
    },
    Restored {
        inning: u32,
        half: HalfInning,
        outs: u8,
    },
}

/// What one recorded at-bat did to the session.
///
/// The orchestration layer reads this back to persist the [`AtBat`](crate::entities::AtBat)
/// record and fold statistics; see [`AtBatOutcome::draft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtBatOutcome {
    pub inning_id: InningId,
    pub inning: u32,
    pub half: HalfInning,
    pub batter: PlayerId,
    pub batting_position: u8,
    pub result: BattingResult,
    pub before: BaserunnerState,
    pub after: BaserunnerState,
    pub runs_scored: Vec<PlayerId>,
    pub retired_runners: Vec<PlayerId>,
    pub rbis: u8,
    pub rbi_explanation: String,
    pub outs_recorded: u8,
    pub inning_advanced: bool,
    pub final_count: Count,
    pub pitches: Vec<Pitch>,
    pub running_errors: Vec<PlayerId>,
}

impl AtBatOutcome {
    /// Draft of the permanent record for this plate appearance.
    pub fn draft(&self, game_id: GameId) -> AtBatDraft {
        AtBatDraft {
            game_id,
            inning_id: self.inning_id,
            batter_id: self.batter,
            batting_position: self.batting_position,
            result: self.result,
            rbis: self.rbis,
            runs_scored: self.runs_scored.clone(),
            running_errors: self.running_errors.clone(),
            baserunners_before: self.before,
            baserunners_after: self.after,
            final_count: self.final_count,
            pitch_sequence: self.pitches.clone(),
        }
    }
}
