//! Record at-bat use case.
//!
//! The central scoring operation. Order of effects:
//!
//! 1. Check the game is in progress and the batter is the one due up
//! 2. Snapshot the session for undo
//! 3. Apply the at-bat to a copy of the session
//! 4. Build and save the `AtBat` record
//! 5. Commit the session copy and the snapshot
//! 6. Fold the at-bat into statistics for the batter and each runner who scored
//!
//! A failure before step 5 leaves the live session untouched.

use std::sync::Arc;

use scorebook_domain::{
    update_player_statistics, validate_statistics, AtBat, PlayerId, PlayerStatistics,
};

use crate::infrastructure::ports::{AtBatRepo, ClockPort, PlayerStatsRepo};
use crate::stores::SessionStore;

use super::error::ScoringError;
use super::lock_in_progress;
use super::types::{RecordAtBatInput, RecordAtBatResult};

pub struct RecordAtBat {
    at_bats: Arc<dyn AtBatRepo>,
    player_stats: Arc<dyn PlayerStatsRepo>,
    sessions: Arc<SessionStore>,
    clock: Arc<dyn ClockPort>,
}

impl RecordAtBat {
    pub fn new(
        at_bats: Arc<dyn AtBatRepo>,
        player_stats: Arc<dyn PlayerStatsRepo>,
        sessions: Arc<SessionStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            at_bats,
            player_stats,
            sessions,
            clock,
        }
    }

    pub async fn execute(&self, input: RecordAtBatInput) -> Result<RecordAtBatResult, ScoringError> {
        let game_id = input.game_id;
        let batter_id = input.batter_id;
        let mut live = lock_in_progress(&self.sessions, game_id).await?;

        if let Some(expected) = live.session.current_batter() {
            if expected != batter_id {
                tracing::warn!(
                    game_id = %game_id,
                    batter_id = %batter_id,
                    expected = %expected,
                    "Rejected at-bat for a batter out of order"
                );
                return Err(ScoringError::WrongBatter {
                    expected,
                    actual: batter_id,
                });
            }
        }

        let snapshot = live.session.snapshot();
        let mut next = live.session.clone();
        let outcome = next.record_at_bat(input.into_session_input())?;

        let at_bat = AtBat::new(outcome.draft(game_id), self.clock.now())?;
        self.at_bats.save(&at_bat).await?;

        live.session = next;
        live.history.record(snapshot);

        tracing::info!(
            game_id = %game_id,
            batter_id = %batter_id,
            result = %at_bat.result(),
            runs = outcome.runs_scored.len(),
            rbis = outcome.rbis,
            outs = live.session.outs(),
            inning = live.session.inning(),
            half = %live.session.half(),
            "Recorded at-bat"
        );
        if outcome.inning_advanced {
            tracing::debug!(
                game_id = %game_id,
                inning = live.session.inning(),
                half = %live.session.half(),
                "Half-inning over"
            );
        }

        let mut credited = vec![batter_id];
        credited.extend(outcome.runs_scored.iter().copied().filter(|p| *p != batter_id));

        let mut statistics = Vec::with_capacity(credited.len());
        for player in credited {
            statistics.push(self.fold_statistics(player, &at_bat).await?);
        }

        Ok(RecordAtBatResult {
            at_bat,
            outcome,
            statistics,
        })
    }

    async fn fold_statistics(
        &self,
        player: PlayerId,
        at_bat: &AtBat,
    ) -> Result<PlayerStatistics, ScoringError> {
        let current = self
            .player_stats
            .get(player)
            .await?
            .unwrap_or_else(|| PlayerStatistics::new(player));
        let updated = update_player_statistics(&current, at_bat);

        for violation in validate_statistics(&updated) {
            tracing::warn!(player_id = %player, %violation, "Inconsistent statistics");
        }

        self.player_stats.save(&updated).await?;
        Ok(updated)
    }
}
