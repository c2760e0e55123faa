//! Manual session adjustments.
//!
//! Outs on pickoffs, runs on steals of home, and the occasional scorer fix.
//! Each adjustment is undoable like any other scoring action.

use std::sync::Arc;

use scorebook_domain::{GameId, SessionUpdate};

use crate::stores::SessionStore;

use super::error::ScoringError;
use super::lock_in_progress;
use super::types::SessionAdjustment;

/// Result of one adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjustmentOutcome {
    /// Outs were added. The half-inning is not advanced automatically.
    OutsAdded { outs: u8, half_inning_over: bool },
    Updated(SessionUpdate),
}

pub struct AdjustSession {
    sessions: Arc<SessionStore>,
}

impl AdjustSession {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(
        &self,
        game_id: GameId,
        adjustment: SessionAdjustment,
    ) -> Result<AdjustmentOutcome, ScoringError> {
        let mut live = lock_in_progress(&self.sessions, game_id).await?;
        let snapshot = live.session.snapshot();

        let session = &mut live.session;
        let outcome = match adjustment {
            SessionAdjustment::AddOuts(outs) => {
                let half_inning_over = session.add_outs(outs)?;
                AdjustmentOutcome::OutsAdded {
                    outs: session.outs(),
                    half_inning_over,
                }
            }
            SessionAdjustment::AddRuns(runs) => AdjustmentOutcome::Updated(session.add_runs(runs)?),
            SessionAdjustment::AdvanceInning => {
                AdjustmentOutcome::Updated(session.advance_inning()?)
            }
            SessionAdjustment::NextBatter => {
                AdjustmentOutcome::Updated(session.advance_to_next_batter()?)
            }
            SessionAdjustment::ClearBases => {
                AdjustmentOutcome::Updated(session.clear_baserunners()?)
            }
        };
        live.history.record(snapshot);

        tracing::info!(
            game_id = %game_id,
            adjustment = adjustment.name(),
            outs = live.session.outs(),
            runs = live.session.runs(),
            "Adjusted session"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use scorebook_domain::{
        DomainError, Game, GameSession, HalfInning, HomeAway, Lineup, OpponentName, PlayerId,
    };

    fn started(sessions: &SessionStore, players: &[PlayerId]) -> GameId {
        let game = Game::new(
            OpponentName::new("Hornets").unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 6).unwrap(),
            HomeAway::Home,
        );
        let game_id = game.id();
        let mut session = GameSession::new(game, Lineup::new(players.iter().copied()).unwrap());
        session.start_game().unwrap();
        sessions.open(session);
        game_id
    }

    #[tokio::test]
    async fn third_out_reports_half_over_without_advancing() {
        let sessions = Arc::new(SessionStore::new(10));
        let game_id = started(&sessions, &[PlayerId::new()]);
        let adjust = AdjustSession::new(sessions.clone());

        adjust.execute(game_id, SessionAdjustment::AddOuts(2)).await.unwrap();
        let outcome = adjust.execute(game_id, SessionAdjustment::AddOuts(1)).await.unwrap();

        assert_eq!(
            outcome,
            AdjustmentOutcome::OutsAdded {
                outs: 3,
                half_inning_over: true
            }
        );

        let update = adjust
            .execute(game_id, SessionAdjustment::AdvanceInning)
            .await
            .unwrap();
        assert_eq!(
            update,
            AdjustmentOutcome::Updated(SessionUpdate::InningAdvanced {
                from_inning: 1,
                from_half: HalfInning::Top,
                to_inning: 1,
                to_half: HalfInning::Bottom,
            })
        );
    }

    #[tokio::test]
    async fn negative_runs_are_rejected_and_not_recorded() {
        let sessions = Arc::new(SessionStore::new(10));
        let game_id = started(&sessions, &[PlayerId::new()]);

        let result = AdjustSession::new(sessions.clone())
            .execute(game_id, SessionAdjustment::AddRuns(-1))
            .await;

        assert!(matches!(
            result,
            Err(ScoringError::Validation(DomainError::Validation(_)))
        ));
        let live = sessions.lock(game_id).await.unwrap();
        assert_eq!(live.session.runs(), 0);
        assert!(!live.history.can_undo());
    }

    #[tokio::test]
    async fn next_batter_wraps_the_order() {
        let sessions = Arc::new(SessionStore::new(10));
        let players = [PlayerId::new(), PlayerId::new()];
        let game_id = started(&sessions, &players);
        let adjust = AdjustSession::new(sessions.clone());

        adjust.execute(game_id, SessionAdjustment::NextBatter).await.unwrap();
        let outcome = adjust.execute(game_id, SessionAdjustment::NextBatter).await.unwrap();

        assert_eq!(
            outcome,
            AdjustmentOutcome::Updated(SessionUpdate::BatterChanged {
                from: players[1],
                to: players[0],
            })
        );
    }
}
