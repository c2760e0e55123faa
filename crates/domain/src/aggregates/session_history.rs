//! Bounded undo/redo over session snapshots.

use std::collections::VecDeque;

use crate::aggregates::{GameSession, SessionSnapshot};
use crate::error::DomainError;
use crate::events::SessionUpdate;

/// Snapshots kept per game when nothing else is configured.
pub const DEFAULT_UNDO_DEPTH: usize = 50;

/// Undo and redo stacks for one game session.
///
/// Record a snapshot *before* each transition that should be undoable.
/// Recording clears the redo stack; once `capacity` snapshots are held the
/// oldest is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHistory {
    undo: VecDeque<SessionSnapshot>,
    redo: Vec<SessionSnapshot>,
    capacity: usize,
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_DEPTH)
    }
}

impl SessionHistory {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo: VecDeque::with_capacity(capacity),
            redo: Vec::new(),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn record(&mut self, snapshot: SessionSnapshot) {
        self.push_undo(snapshot);
        self.redo.clear();
    }

    /// Restore the most recent snapshot. Returns `Ok(None)` when there is
    /// nothing to undo.
    ///
    /// # Errors
    ///
    /// Propagates a rejected restore; both stacks are left as they were.
    pub fn undo(&mut self, session: &mut GameSession) -> Result<Option<SessionUpdate>, DomainError> {
        let Some(previous) = self.undo.back() else {
            return Ok(None);
        };
        let current = session.snapshot();
        let update = session.restore_from_snapshot(previous)?;

        self.undo.pop_back();
        self.redo.push(current);
        Ok(Some(update))
    }

    /// Reapply the most recently undone snapshot.
    pub fn redo(&mut self, session: &mut GameSession) -> Result<Option<SessionUpdate>, DomainError> {
        let Some(next) = self.redo.last() else {
            return Ok(None);
        };
        let current = session.snapshot();
        let update = session.restore_from_snapshot(next)?;

        self.redo.pop();
        self.push_undo(current);
        Ok(Some(update))
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    fn push_undo(&mut self, snapshot: SessionSnapshot) {
        if self.undo.len() == self.capacity {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::aggregates::AtBatInput;
    use crate::entities::{Game, HomeAway};
    use crate::ids::PlayerId;
    use crate::value_objects::{BattingResult, Lineup, OpponentName};

    fn session() -> GameSession {
        let game = Game::new(
            OpponentName::new("Falcons").unwrap(),
            NaiveDate::from_ymd_opt(2026, 7, 4).unwrap(),
            HomeAway::Away,
        );
        let lineup = Lineup::new((0..4).map(|_| PlayerId::new())).unwrap();
        let mut session = GameSession::new(game, lineup);
        session.start_game().unwrap();
        session
    }

    fn recorded_at_bat(
        history: &mut SessionHistory,
        session: &mut GameSession,
        result: BattingResult,
    ) {
        history.record(session.snapshot());
        let batter = session.current_batter().unwrap();
        session.record_at_bat(AtBatInput::new(batter, result)).unwrap();
    }

    #[test]
    fn undo_then_redo_round_trips() {
        let mut history = SessionHistory::default();
        let mut session = session();
        let start = session.snapshot();

        recorded_at_bat(&mut history, &mut session, BattingResult::HomeRun);
        let after_home_run = session.snapshot();

        assert!(history.undo(&mut session).unwrap().is_some());
        assert_eq!(session.snapshot(), start);
        assert!(history.can_redo());

        assert!(history.redo(&mut session).unwrap().is_some());
        assert_eq!(session.snapshot(), after_home_run);
        assert_eq!(session.runs(), 1);
    }

    #[test]
    fn empty_history_is_a_no_op() {
        let mut history = SessionHistory::default();
        let mut session = session();
        let before = session.snapshot();

        assert_eq!(history.undo(&mut session).unwrap(), None);
        assert_eq!(history.redo(&mut session).unwrap(), None);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn recording_clears_redo() {
        let mut history = SessionHistory::default();
        let mut session = session();
        recorded_at_bat(&mut history, &mut session, BattingResult::Single);
        history.undo(&mut session).unwrap();
        assert_eq!(history.redo_depth(), 1);

        recorded_at_bat(&mut history, &mut session, BattingResult::Double);

        assert!(!history.can_redo());
    }

    #[test]
    fn oldest_snapshot_is_dropped_at_capacity() {
        let mut history = SessionHistory::new(2);
        let mut session = session();
        for result in [BattingResult::Walk, BattingResult::Walk, BattingResult::Walk] {
            recorded_at_bat(&mut history, &mut session, result);
        }

        assert_eq!(history.undo_depth(), 2);
        history.undo(&mut session).unwrap();
        history.undo(&mut session).unwrap();
        // one walk survives: the snapshot before it was dropped
        assert_eq!(session.baserunners().runner_count(), 1);
        assert!(!history.can_undo());
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        assert_eq!(SessionHistory::new(0).capacity(), 1);
    }
}
