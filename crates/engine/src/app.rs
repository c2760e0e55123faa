//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    config::EngineConfig,
    memory::InMemoryRepositories,
    ports::{AtBatRepo, ClockPort, GameRepo, PlayerStatsRepo},
};
use crate::stores::SessionStore;
use crate::use_cases;

/// Main application state.
///
/// Holds the repositories, the live sessions and every use case.
pub struct App {
    pub repositories: Repositories,
    pub sessions: Arc<SessionStore>,
    pub use_cases: UseCases,
    pub config: EngineConfig,
}

/// Container for all repositories, injected as port traits.
pub struct Repositories {
    pub games: Arc<dyn GameRepo>,
    pub at_bats: Arc<dyn AtBatRepo>,
    pub player_stats: Arc<dyn PlayerStatsRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub lifecycle: use_cases::LifecycleUseCases,
    pub scoring: use_cases::ScoringUseCases,
    pub statistics: Arc<use_cases::StatisticsQueries>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repos: InMemoryRepositories, clock: Arc<dyn ClockPort>, config: EngineConfig) -> Self {
        let games: Arc<dyn GameRepo> = repos.games.clone();
        let at_bats: Arc<dyn AtBatRepo> = repos.at_bats.clone();
        let player_stats: Arc<dyn PlayerStatsRepo> = repos.player_stats.clone();

        let sessions = Arc::new(SessionStore::new(config.undo_depth));

        let lifecycle = use_cases::LifecycleUseCases::new(
            Arc::new(use_cases::lifecycle::OpenGame::new(
                games.clone(),
                sessions.clone(),
            )),
            Arc::new(use_cases::lifecycle::StartGame::new(
                games.clone(),
                player_stats.clone(),
                sessions.clone(),
            )),
            Arc::new(use_cases::lifecycle::SuspendGame::new(
                games.clone(),
                sessions.clone(),
            )),
            Arc::new(use_cases::lifecycle::ResumeGame::new(
                games.clone(),
                sessions.clone(),
            )),
            Arc::new(use_cases::lifecycle::CompleteGame::new(
                games.clone(),
                sessions.clone(),
            )),
        );

        let scoring = use_cases::ScoringUseCases::new(
            Arc::new(use_cases::scoring::RecordAtBat::new(
                at_bats.clone(),
                player_stats.clone(),
                sessions.clone(),
                clock,
            )),
            Arc::new(use_cases::scoring::RecordPitch::new(sessions.clone())),
            Arc::new(use_cases::scoring::AdjustSession::new(sessions.clone())),
            Arc::new(use_cases::scoring::UndoLastAction::new(sessions.clone())),
            Arc::new(use_cases::scoring::RedoLastAction::new(sessions.clone())),
        );

        let statistics = Arc::new(use_cases::StatisticsQueries::new(
            player_stats.clone(),
            at_bats.clone(),
        ));

        Self {
            repositories: Repositories {
                games,
                at_bats,
                player_stats,
            },
            sessions,
            use_cases: UseCases {
                lifecycle,
                scoring,
                statistics,
            },
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SystemClock;
    use crate::use_cases::lifecycle::OpenGameInput;
    use crate::use_cases::scoring::RecordAtBatInput;
    use chrono::NaiveDate;
    use scorebook_domain::{BattingResult, GameStatus, HomeAway, PlayerId};

    #[tokio::test]
    async fn full_game_through_the_app() {
        let app = App::new(
            InMemoryRepositories::new(),
            Arc::new(SystemClock::new()),
            EngineConfig::default(),
        );
        let players = [PlayerId::new(), PlayerId::new(), PlayerId::new()];

        let game = app
            .use_cases
            .lifecycle
            .open
            .execute(OpenGameInput {
                opponent: "Owls".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
                home_away: HomeAway::Home,
                lineup: players.to_vec(),
            })
            .await
            .unwrap();
        app.use_cases.lifecycle.start.execute(game.id()).await.unwrap();

        let scoring = &app.use_cases.scoring;
        for (batter, result) in [
            (players[0], BattingResult::Double),
            (players[1], BattingResult::Single),
            (players[2], BattingResult::HomeRun),
        ] {
            scoring
                .record_at_bat
                .execute(RecordAtBatInput::new(game.id(), batter, result))
                .await
                .unwrap();
        }
        app.use_cases
            .lifecycle
            .complete
            .execute(game.id(), 2)
            .await
            .unwrap();

        let stored = app.repositories.games.get(game.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), GameStatus::Completed);
        assert_eq!(stored.final_score().map(|s| s.team_runs), Some(3));

        let team = app.use_cases.statistics.team(&players).await.unwrap();
        assert_eq!(team.counters.hits, 3);
        assert_eq!(team.counters.games, 1);
        assert_eq!(team.counters.rbis, 3);
        assert_eq!(
            app.use_cases.statistics.at_bats(game.id()).await.unwrap().len(),
            3
        );
    }
}
