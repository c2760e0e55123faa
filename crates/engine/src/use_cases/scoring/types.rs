//! Scoring input and result types.

use scorebook_domain::{
    Advancement, AtBat, AtBatInput, AtBatOutcome, BattingResult, Count, GameId, ManualAdvancement,
    Pitch, PlayerId, PlayerStatistics,
};

/// Request to record one completed plate appearance.
#[derive(Debug, Clone)]
pub struct RecordAtBatInput {
    pub game_id: GameId,
    pub batter_id: PlayerId,
    pub result: BattingResult,
    /// Defaults to the count built from recorded pitches.
    pub final_count: Option<Count>,
    /// Defaults to the pitches recorded since the batter came up.
    pub pitch_sequence: Option<Vec<Pitch>>,
    /// Scorer-entered destinations replacing the standard advancement table.
    pub manual_advancement: Option<ManualAdvancement>,
    pub outs_override: Option<u8>,
    pub running_errors: Vec<PlayerId>,
}

impl RecordAtBatInput {
    pub fn new(game_id: GameId, batter_id: PlayerId, result: BattingResult) -> Self {
        Self {
            game_id,
            batter_id,
            result,
            final_count: None,
            pitch_sequence: None,
            manual_advancement: None,
            outs_override: None,
            running_errors: Vec::new(),
        }
    }

    pub fn with_final_count(mut self, count: Count) -> Self {
        self.final_count = Some(count);
        self
    }

    pub fn with_pitch_sequence(mut self, pitches: Vec<Pitch>) -> Self {
        self.pitch_sequence = Some(pitches);
        self
    }

    pub fn with_manual_advancement(mut self, manual: ManualAdvancement) -> Self {
        self.manual_advancement = Some(manual);
        self
    }

    pub fn with_outs(mut self, outs: u8) -> Self {
        self.outs_override = Some(outs);
        self
    }

    pub fn with_running_errors(mut self, runners: Vec<PlayerId>) -> Self {
        self.running_errors = runners;
        self
    }

    pub(super) fn into_session_input(self) -> AtBatInput {
        let mut input = AtBatInput::new(self.batter_id, self.result)
            .with_running_errors(self.running_errors);
        if let Some(count) = self.final_count {
            input = input.with_final_count(count);
        }
        if let Some(pitches) = self.pitch_sequence {
            input = input.with_pitches(pitches);
        }
        if let Some(manual) = self.manual_advancement {
            input = input.with_advancement(Advancement::Manual(manual));
        }
        if let Some(outs) = self.outs_override {
            input = input.with_outs(outs);
        }
        input
    }
}

/// What `RecordAtBat` stored.
#[derive(Debug, Clone)]
pub struct RecordAtBatResult {
    pub at_bat: AtBat,
    pub outcome: AtBatOutcome,
    /// Updated lines for the batter and every runner who scored, batter first.
    pub statistics: Vec<PlayerStatistics>,
}

/// Scorer corrections applied directly to the live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAdjustment {
    AddOuts(u8),
    AddRuns(i32),
    AdvanceInning,
    NextBatter,
    ClearBases,
}

impl SessionAdjustment {
    pub fn name(self) -> &'static str {
        match self {
            Self::AddOuts(_) => "add_outs",
            Self::AddRuns(_) => "add_runs",
            Self::AdvanceInning => "advance_inning",
            Self::NextBatter => "next_batter",
            Self::ClearBases => "clear_bases",
        }
    }
}
