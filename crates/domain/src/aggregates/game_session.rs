//! GameSession aggregate - live scoring state for one game
//!
//! # Responsibilities
//!
//! - Own everything that changes during play: inning, half, outs, count,
//!   current batter, baserunners, runs and the pitch sequence
//! - Run the advancement and RBI rules for each at-bat
//! - Replace the wrapped [`Game`] entity when its status changes
//!
//! # Failure semantics
//!
//! Every transition validates first. A rejected transition returns a
//! `DomainError` and leaves the session untouched.

use serde::{Deserialize, Serialize};

use crate::entities::{Game, GameStatus};
use crate::error::DomainError;
use crate::events::{AtBatOutcome, SessionUpdate};
use crate::ids::{InningId, PlayerId};
use crate::rules::{advance_with, calculate_rbis, Advancement};
use crate::value_objects::{
    BaserunnerState, BattingResult, Count, FinalScore, HalfInning, LineScore, Lineup, Pitch,
};

/// Outs that end a half-inning.
pub const OUTS_PER_HALF_INNING: u8 = 3;

/// One plate appearance as reported by the scorer.
///
/// Only `batter` and `result` are required; the rest default to the session's
/// own count and pitches, the standard advancement table, and the result's
/// usual number of outs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtBatInput {
    pub batter: PlayerId,
    pub result: BattingResult,
    pub final_count: Option<Count>,
    pub pitches: Option<Vec<Pitch>>,
    pub advancement: Advancement,
    pub outs_override: Option<u8>,
    pub running_errors: Vec<PlayerId>,
}

impl AtBatInput {
    pub fn new(batter: PlayerId, result: BattingResult) -> Self {
        Self {
            batter,
            result,
            final_count: None,
            pitches: None,
            advancement: Advancement::Standard,
            outs_override: None,
            running_errors: Vec::new(),
        }
    }

    pub fn with_final_count(mut self, count: Count) -> Self {
        self.final_count = Some(count);
        self
    }

    pub fn with_pitches(mut self, pitches: Vec<Pitch>) -> Self {
        self.pitches = Some(pitches);
        self
    }

    pub fn with_advancement(mut self, advancement: Advancement) -> Self {
        self.advancement = advancement;
        self
    }

    /// Record `outs` instead of the result's default.
    pub fn with_outs(mut self, outs: u8) -> Self {
        self.outs_override = Some(outs);
        self
    }

    pub fn with_running_errors(mut self, runners: Vec<PlayerId>) -> Self {
        self.running_errors = runners;
        self
    }
}

/// Deep copy of every mutable session field.
///
/// The wrapped `Game` and the lineup are not part of a snapshot; restoring
/// never changes game status or the batting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    inning_id: InningId,
    inning: u32,
    half: HalfInning,
    outs: u8,
    count: Count,
    batter_index: usize,
    baserunners: BaserunnerState,
    runs: u32,
    line_score: LineScore,
    pitches: Vec<Pitch>,
}

impl SessionSnapshot {
    #[inline]
    pub fn inning(&self) -> u32 {
        self.inning
    }

    #[inline]
    pub fn half(&self) -> HalfInning {
        self.half
    }

    #[inline]
    pub fn outs(&self) -> u8 {
        self.outs
    }

    #[inline]
    pub fn runs(&self) -> u32 {
        self.runs
    }

    #[inline]
    pub fn baserunners(&self) -> &BaserunnerState {
        &self.baserunners
    }
}

/// Live state of one game being scored.
///
/// # Invariants
///
/// - `outs <= 3`; at three outs only `advance_inning` moves play forward
/// - `batter_index` points into the lineup once the game has started
/// - live-play transitions require `GameStatus::InProgress`
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use scorebook_domain::{
///     AtBatInput, BattingResult, Game, GameSession, HomeAway, Lineup, OpponentName, PlayerId,
/// };
///
/// let (lead, second) = (PlayerId::new(), PlayerId::new());
/// let game = Game::new(
///     OpponentName::new("Rockets").unwrap(),
///     NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(),
///     HomeAway::Away,
/// );
/// let mut session = GameSession::new(game, Lineup::new([lead, second]).unwrap());
/// session.start_game().unwrap();
///
/// let outcome = session
///     .record_at_bat(AtBatInput::new(lead, BattingResult::Double))
///     .unwrap();
///
/// assert_eq!(outcome.after.second(), Some(lead));
/// assert_eq!(session.current_batter(), Some(second));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    game: Game,
    lineup: Lineup,
    inning_id: InningId,
    inning: u32,
    half: HalfInning,
    outs: u8,
    count: Count,
    batter_index: usize,
    baserunners: BaserunnerState,
    runs: u32,
    line_score: LineScore,
    pitches: Vec<Pitch>,
}

impl GameSession {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub fn new(game: Game, lineup: Lineup) -> Self {
        Self {
            game,
            lineup,
            inning_id: InningId::new(),
            inning: 1,
            half: HalfInning::Top,
            outs: 0,
            count: Count::default(),
            batter_index: 0,
            baserunners: BaserunnerState::empty(),
            runs: 0,
            line_score: LineScore::new(),
            pitches: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    #[inline]
    pub fn lineup(&self) -> &Lineup {
        &self.lineup
    }

    #[inline]
    pub fn inning_id(&self) -> InningId {
        self.inning_id
    }

    #[inline]
    pub fn inning(&self) -> u32 {
        self.inning
    }

    #[inline]
    pub fn half(&self) -> HalfInning {
        self.half
    }

    #[inline]
    pub fn outs(&self) -> u8 {
        self.outs
    }

    #[inline]
    pub fn count(&self) -> Count {
        self.count
    }

    #[inline]
    pub fn baserunners(&self) -> &BaserunnerState {
        &self.baserunners
    }

    /// Cumulative runs for the scored team.
    #[inline]
    pub fn runs(&self) -> u32 {
        self.runs
    }

    #[inline]
    pub fn line_score(&self) -> &LineScore {
        &self.line_score
    }

    /// Pitches thrown to the current batter.
    #[inline]
    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    pub fn current_batter(&self) -> Option<PlayerId> {
        self.lineup.player_at(self.batter_index)
    }

    /// 1-based position of the current batter.
    pub fn current_batting_position(&self) -> Option<u8> {
        u8::try_from(self.batter_index + 1).ok()
    }

    pub fn is_half_inning_over(&self) -> bool {
        self.outs >= OUTS_PER_HALF_INNING
    }

    /// Final score with the session's runs for the scored team.
    pub fn final_score(&self, opponent_runs: u32) -> FinalScore {
        FinalScore::new(self.runs, opponent_runs)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// `Setup -> InProgress`, with the leadoff hitter up in the top of the first.
    ///
    /// # Errors
    ///
    /// `DomainError::Constraint` if the lineup is empty;
    /// `DomainError::InvalidStateTransition` if the game is not in setup.
    pub fn start_game(&mut self) -> Result<SessionUpdate, DomainError> {
        let leadoff = self.lineup.player_at(0).ok_or_else(|| {
            DomainError::constraint(format!(
                "Game {} cannot start without a lineup",
                self.game.id()
            ))
        })?;
        let started = self.game.start()?;

        *self = Self::new(started, std::mem::take(&mut self.lineup));
        Ok(SessionUpdate::GameStarted { leadoff })
    }

    pub fn suspend_game(&mut self) -> Result<SessionUpdate, DomainError> {
        let next = self.game.suspend()?;
        Ok(self.replace_game(next))
    }

    pub fn resume_game(&mut self) -> Result<SessionUpdate, DomainError> {
        let next = self.game.resume()?;
        Ok(self.replace_game(next))
    }

    /// `InProgress -> Completed`, storing `final_score` on the game.
    pub fn complete_game(&mut self, final_score: FinalScore) -> Result<SessionUpdate, DomainError> {
        let next = self.game.complete(final_score)?;
        Ok(self.replace_game(next))
    }

    fn replace_game(&mut self, next: Game) -> SessionUpdate {
        let from = self.game.status();
        self.game = next;
        SessionUpdate::StatusChanged {
            from,
            to: self.game.status(),
        }
    }

    // =========================================================================
    // Live Play
    // =========================================================================

    /// Append a pitch to the current plate appearance and update the count.
    ///
    /// Reaching ball four or strike three is reported, not acted on: the
    /// caller still records the walk or strikeout.
    pub fn record_pitch(&mut self, pitch: Pitch) -> Result<SessionUpdate, DomainError> {
        self.ensure_in_progress("record a pitch")?;
        self.ensure_half_open()?;
        let count = self.count.after(pitch)?;

        self.count = count;
        self.pitches.push(pitch);
        Ok(SessionUpdate::PitchRecorded {
            pitch,
            count,
            plate_appearance_over: count.is_terminal(),
        })
    }

    /// Resolve one plate appearance.
    ///
    /// Applies the advancement and RBI rules, adds the runs, records the outs
    /// and then either ends the half-inning or brings up the next batter.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the game is not in progress or the
    ///   half-inning already has three outs
    /// - `Constraint` if `input.batter` is not the current batter, or the
    ///   advancement is structurally invalid
    /// - `Validation` if the outs override is above three
    pub fn record_at_bat(&mut self, input: AtBatInput) -> Result<AtBatOutcome, DomainError> {
        self.ensure_in_progress("record an at-bat")?;
        self.ensure_half_open()?;
        self.ensure_current_batter(input.batter)?;

        let outs_recorded = input
            .outs_override
            .unwrap_or_else(|| input.result.default_outs());
        if outs_recorded > OUTS_PER_HALF_INNING {
            return Err(DomainError::validation(format!(
                "A play cannot record {} outs",
                outs_recorded
            )));
        }
        let batting_position = self.current_batting_position().ok_or_else(|| {
            DomainError::constraint("Batting position does not fit the scorebook")
        })?;

        let before = self.baserunners;
        let advancement = advance_with(&before, input.result, input.batter, &input.advancement)?;
        let credit = calculate_rbis(input.result, &before, &advancement.runs_scored, input.batter);
        self.ensure_runs_fit(advancement.runs_scored.len() as u32)?;

        // Everything validated; apply.
        let (inning_id, inning, half) = (self.inning_id, self.inning, self.half);
        let final_count = input.final_count.unwrap_or(self.count);
        let pitches = input
            .pitches
            .unwrap_or_else(|| std::mem::take(&mut self.pitches));

        self.baserunners = advancement.after;
        self.credit_runs(advancement.runs_scored.len() as u32);
        let inning_advanced = self.apply_outs(outs_recorded);
        if inning_advanced {
            self.flip_half();
        } else {
            self.bring_up_next_batter();
        }

        Ok(AtBatOutcome {
            inning_id,
            inning,
            half,
            batter: input.batter,
            batting_position,
            result: input.result,
            before,
            after: advancement.after,
            runs_scored: advancement.runs_scored,
            retired_runners: advancement.retired_runners,
            rbis: credit.rbis,
            rbi_explanation: credit.explanation,
            outs_recorded,
            inning_advanced,
            final_count,
            pitches,
            running_errors: input.running_errors,
        })
    }

    /// Add outs outside an at-bat (pickoffs, caught stealing).
    ///
    /// Returns `true` when the half-inning is over; the caller then calls
    /// [`advance_inning`](Self::advance_inning). Outs saturate at three.
    pub fn add_outs(&mut self, outs: u8) -> Result<bool, DomainError> {
        self.ensure_in_progress("add outs")?;
        if outs > OUTS_PER_HALF_INNING {
            return Err(DomainError::validation(format!(
                "Cannot add {} outs at once",
                outs
            )));
        }
        self.ensure_half_open()?;
        Ok(self.apply_outs(outs))
    }

    /// Add runs outside an at-bat (steals of home, wild pitches).
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` for a negative count, or one the run total
    /// cannot hold; nothing is clamped.
    pub fn add_runs(&mut self, runs: i32) -> Result<SessionUpdate, DomainError> {
        self.ensure_in_progress("add runs")?;
        let runs = u32::try_from(runs)
            .map_err(|_| DomainError::validation(format!("Runs cannot be negative, got {}", runs)))?;
        self.ensure_runs_fit(runs)?;

        self.credit_runs(runs);
        Ok(SessionUpdate::RunsAdded {
            runs,
            total: self.runs,
        })
    }

    /// Move to the next half-inning. The inning number only increments going
    /// from the bottom to the top.
    pub fn advance_inning(&mut self) -> Result<SessionUpdate, DomainError> {
        self.ensure_in_progress("advance the inning")?;
        Ok(self.flip_half())
    }

    /// Next batter in the order, wrapping after the last.
    pub fn advance_to_next_batter(&mut self) -> Result<SessionUpdate, DomainError> {
        self.ensure_in_progress("advance the batter")?;
        let from = self.require_current_batter()?;
        self.bring_up_next_batter();
        let to = self.require_current_batter()?;
        Ok(SessionUpdate::BatterChanged { from, to })
    }

    pub fn clear_baserunners(&mut self) -> Result<SessionUpdate, DomainError> {
        self.ensure_in_progress("clear the bases")?;
        let previous = std::mem::take(&mut self.baserunners);
        Ok(SessionUpdate::BaserunnersCleared { previous })
    }

    // =========================================================================
    // Snapshot / Restore
    // =========================================================================

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            inning_id: self.inning_id,
            inning: self.inning,
            half: self.half,
            outs: self.outs,
            count: self.count,
            batter_index: self.batter_index,
            baserunners: self.baserunners,
            runs: self.runs,
            line_score: self.line_score.clone(),
            pitches: self.pitches.clone(),
        }
    }

    /// Replace all live state with a copy of `snapshot`.
    ///
    /// # Errors
    ///
    /// `DomainError::Constraint` if the snapshot does not fit this session's
    /// lineup or holds an impossible out count.
    pub fn restore_from_snapshot(
        &mut self,
        snapshot: &SessionSnapshot,
    ) -> Result<SessionUpdate, DomainError> {
        let batter_fits = snapshot.batter_index < self.lineup.len()
            || (self.lineup.is_empty() && snapshot.batter_index == 0);
        if !batter_fits {
            return Err(DomainError::constraint(format!(
                "Snapshot batter index {} is outside a lineup of {}",
                snapshot.batter_index,
                self.lineup.len()
            )));
        }
        if snapshot.outs > OUTS_PER_HALF_INNING || snapshot.inning == 0 {
            return Err(DomainError::constraint(format!(
                "Snapshot holds an impossible state: inning {}, {} outs",
                snapshot.inning, snapshot.outs
            )));
        }

        let restored = snapshot.clone();
        self.inning_id = restored.inning_id;
        self.inning = restored.inning;
        self.half = restored.half;
        self.outs = restored.outs;
        self.count = restored.count;
        self.batter_index = restored.batter_index;
        self.baserunners = restored.baserunners;
        self.runs = restored.runs;
        self.line_score = restored.line_score;
        self.pitches = restored.pitches;

        Ok(SessionUpdate::Restored {
            inning: self.inning,
            half: self.half,
            outs: self.outs,
        })
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn ensure_in_progress(&self, action: &str) -> Result<(), DomainError> {
        if self.game.is_in_progress() {
            Ok(())
        } else {
            Err(DomainError::invalid_state_transition(format!(
                "Cannot {} while game {} is {}",
                action,
                self.game.id(),
                self.game.status()
            )))
        }
    }

    fn ensure_half_open(&self) -> Result<(), DomainError> {
        if self.is_half_inning_over() {
            return Err(DomainError::invalid_state_transition(format!(
                "The {} of inning {} already has three outs",
                self.half, self.inning
            )));
        }
        Ok(())
    }

    fn require_current_batter(&self) -> Result<PlayerId, DomainError> {
        self.current_batter()
            .ok_or_else(|| DomainError::constraint("The lineup has no current batter"))
    }

    fn ensure_current_batter(&self, batter: PlayerId) -> Result<(), DomainError> {
        let current = self.require_current_batter()?;
        if current != batter {
            return Err(DomainError::constraint(format!(
                "Player {} is not up; {} is batting",
                batter, current
            )));
        }
        Ok(())
    }

    fn ensure_runs_fit(&self, runs: u32) -> Result<(), DomainError> {
        let in_half = self.line_score.runs_in(self.inning, self.half);
        if self.runs.checked_add(runs).is_none() || in_half.checked_add(runs).is_none() {
            return Err(DomainError::validation(format!(
                "Adding {} runs to {} overflows the run total",
                runs, self.runs
            )));
        }
        Ok(())
    }

    // Callers check `ensure_runs_fit` first.
    fn credit_runs(&mut self, runs: u32) {
        self.runs += runs;
        self.line_score.add(self.inning, self.half, runs);
    }

    fn apply_outs(&mut self, outs: u8) -> bool {
        self.outs = (self.outs + outs).min(OUTS_PER_HALF_INNING);
        self.is_half_inning_over()
    }

    fn bring_up_next_batter(&mut self) {
        self.batter_index = self.lineup.next_index(self.batter_index);
        self.count = Count::default();
        self.pitches.clear();
    }

    fn flip_half(&mut self) -> SessionUpdate {
        let (from_inning, from_half) = (self.inning, self.half);
        if self.half == HalfInning::Bottom {
            self.inning += 1;
        }
        self.half = self.half.flip();
        self.inning_id = InningId::new();
        self.outs = 0;
        self.count = Count::default();
        self.baserunners = BaserunnerState::empty();
        self.pitches.clear();
        self.batter_index = 0;

        SessionUpdate::InningAdvanced {
            from_inning,
            from_half,
            to_inning: self.inning,
            to_half: self.half,
        }
    }
}
