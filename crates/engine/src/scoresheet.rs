//! Scoresheet replay.
//!
//! A scoresheet is a JSON description of one game: the opponent, the lineup
//! by name, and the plays in the order the scorer entered them. Replaying it
//! drives the same use cases a live scorer would.
//!
//! ```json
//! {
//!   "opponent": "Rockets",
//!   "date": "2026-05-02",
//!   "homeAway": "home",
//!   "lineup": ["Ava", "Bea", "Cal"],
//!   "opponentRuns": 2,
//!   "plays": [
//!     { "type": "atBat", "batter": "Ava", "result": "1B", "pitches": "BCX" },
//!     { "type": "atBat", "batter": "Bea", "result": "FC", "outs": 1,
//!       "manual": { "destinations": { "first": "Bea" }, "scored": [] } },
//!     { "type": "undo" },
//!     { "type": "addOuts", "outs": 1 }
//!   ]
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use scorebook_domain::{
    Base, BattingResult, DomainError, Game, GameId, GameStatus, HomeAway, LineScore,
    ManualAdvancement, Pitch, PlayerId, PlayerStatistics, TeamStatistics,
};

use crate::infrastructure::ports::RepoError;
use crate::use_cases::lifecycle::{LifecycleError, OpenGameInput};
use crate::use_cases::scoring::{RecordAtBatInput, ScoringError, SessionAdjustment};
use crate::App;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("Failed to read scoresheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed scoresheet: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Player {0:?} is not in the lineup")]
    UnknownPlayer(String),
    #[error("Player {0:?} appears twice in the lineup")]
    DuplicatePlayer(String),
    #[error("Play {index}: {source}")]
    Play {
        index: usize,
        #[source]
        source: PlayFailure,
    },
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Why a single play was rejected.
#[derive(Debug, thiserror::Error)]
pub enum PlayFailure {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    /// Pitch codes or a manual advancement that do not parse
    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn at<E: Into<PlayFailure>>(index: usize) -> impl Fn(E) -> ReplayError {
    move |source| ReplayError::Play {
        index,
        source: source.into(),
    }
}

// =============================================================================
// Scoresheet format
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoresheet {
    pub opponent: String,
    pub date: NaiveDate,
    pub home_away: HomeAway,
    /// Batting order by name, leadoff first
    pub lineup: Vec<String>,
    #[serde(default)]
    pub opponent_runs: u32,
    #[serde(default)]
    pub plays: Vec<Play>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Play {
    #[serde(rename_all = "camelCase")]
    AtBat {
        batter: String,
        result: BattingResult,
        /// Pitch codes, e.g. `"BCFX"`
        #[serde(default)]
        pitches: Option<String>,
        #[serde(default)]
        outs: Option<u8>,
        #[serde(default)]
        manual: Option<ManualPlay>,
        #[serde(default)]
        running_errors: Vec<String>,
    },
    Pitch {
        pitch: String,
    },
    AddOuts {
        outs: u8,
    },
    AddRuns {
        runs: i32,
    },
    AdvanceInning,
    NextBatter,
    ClearBases,
    Suspend,
    Resume,
    Undo,
    Redo,
}

/// Manual runner destinations by player name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManualPlay {
    #[serde(default)]
    pub destinations: BTreeMap<Base, Option<String>>,
    #[serde(default)]
    pub scored: Vec<String>,
}

impl Scoresheet {
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

// =============================================================================
// Replay
// =============================================================================

/// Where a replayed game ended up.
#[derive(Debug, Clone)]
pub struct ReplaySummary {
    pub game: Game,
    pub line_score: LineScore,
    pub innings_played: u32,
    pub scheduled_innings: u32,
    /// Per-player lines in batting order
    pub players: Vec<(String, PlayerStatistics)>,
    pub team: TeamStatistics,
}

impl ReplaySummary {
    /// The game stopped before the scheduled innings were reached.
    pub fn ended_early(&self) -> bool {
        self.innings_played < self.scheduled_innings
    }
}

struct Roster {
    ids: HashMap<String, PlayerId>,
    order: Vec<(String, PlayerId)>,
}

impl Roster {
    fn new(names: &[String]) -> Result<Self, ReplayError> {
        let mut ids = HashMap::with_capacity(names.len());
        let mut order = Vec::with_capacity(names.len());
        for name in names {
            let id = PlayerId::new();
            if ids.insert(name.clone(), id).is_some() {
                return Err(ReplayError::DuplicatePlayer(name.clone()));
            }
            order.push((name.clone(), id));
        }
        Ok(Self { ids, order })
    }

    fn id(&self, name: &str) -> Result<PlayerId, ReplayError> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| ReplayError::UnknownPlayer(name.to_string()))
    }

    fn ids(&self) -> Vec<PlayerId> {
        self.order.iter().map(|(_, id)| *id).collect()
    }
}

/// Replay a scoresheet from opening the game to completing it.
///
/// A game left suspended by its last play is not completed.
pub async fn replay(app: &App, sheet: Scoresheet) -> Result<ReplaySummary, ReplayError> {
    let roster = Roster::new(&sheet.lineup)?;
    let lifecycle = &app.use_cases.lifecycle;

    let game = lifecycle
        .open
        .execute(OpenGameInput {
            opponent: sheet.opponent.clone(),
            date: sheet.date,
            home_away: sheet.home_away,
            lineup: roster.ids(),
        })
        .await?;
    let game_id = game.id();
    lifecycle.start.execute(game_id).await?;

    for (index, play) in sheet.plays.iter().enumerate() {
        tracing::debug!(game_id = %game_id, index, ?play, "Replaying play");
        apply_play(app, &roster, game_id, index, play).await?;
    }

    let status = match app.sessions.lock(game_id).await {
        Some(live) => live.session.status(),
        None => return Err(LifecycleError::SessionNotFound(game_id).into()),
    };
    if status == GameStatus::InProgress {
        lifecycle.complete.execute(game_id, sheet.opponent_runs).await?;
    } else {
        tracing::info!(game_id = %game_id, status = %status, "Scoresheet ends with the game not in progress");
    }

    let (game, line_score, innings_played) = match app.sessions.lock(game_id).await {
        Some(live) => (
            live.session.game().clone(),
            live.session.line_score().clone(),
            live.session.inning(),
        ),
        None => return Err(LifecycleError::SessionNotFound(game_id).into()),
    };

    let statistics = &app.use_cases.statistics;
    let mut players = Vec::with_capacity(roster.order.len());
    for (name, id) in &roster.order {
        players.push((name.clone(), statistics.player(*id).await?));
    }
    let team = TeamStatistics::from_players(players.iter().map(|(_, line)| line));

    Ok(ReplaySummary {
        game,
        line_score,
        innings_played,
        scheduled_innings: app.config.innings,
        players,
        team,
    })
}

async fn apply_play(
    app: &App,
    roster: &Roster,
    game_id: GameId,
    index: usize,
    play: &Play,
) -> Result<(), ReplayError> {
    let scoring = &app.use_cases.scoring;
    let lifecycle = &app.use_cases.lifecycle;

    match play {
        Play::AtBat {
            batter,
            result,
            pitches,
            outs,
            manual,
            running_errors,
        } => {
            let mut input = RecordAtBatInput::new(game_id, roster.id(batter)?, *result);
            if let Some(sequence) = pitches {
                let sequence = Pitch::parse_sequence(sequence).map_err(at(index))?;
                input = input.with_pitch_sequence(sequence);
            }
            if let Some(outs) = outs {
                input = input.with_outs(*outs);
            }
            if let Some(manual) = manual {
                input = input.with_manual_advancement(manual_advancement(roster, index, manual)?);
            }
            if !running_errors.is_empty() {
                let runners = running_errors
                    .iter()
                    .map(|name| roster.id(name))
                    .collect::<Result<Vec<_>, _>>()?;
                input = input.with_running_errors(runners);
            }
            scoring.record_at_bat.execute(input).await.map_err(at(index))?;
        }
        Play::Pitch { pitch } => {
            for pitch in Pitch::parse_sequence(pitch).map_err(at(index))? {
                scoring.record_pitch.execute(game_id, pitch).await.map_err(at(index))?;
            }
        }
        Play::AddOuts { outs } => {
            adjust(app, game_id, SessionAdjustment::AddOuts(*outs))
                .await
                .map_err(at(index))?;
        }
        Play::AddRuns { runs } => {
            adjust(app, game_id, SessionAdjustment::AddRuns(*runs))
                .await
                .map_err(at(index))?;
        }
        Play::AdvanceInning => {
            adjust(app, game_id, SessionAdjustment::AdvanceInning)
                .await
                .map_err(at(index))?;
        }
        Play::NextBatter => {
            adjust(app, game_id, SessionAdjustment::NextBatter)
                .await
                .map_err(at(index))?;
        }
        Play::ClearBases => {
            adjust(app, game_id, SessionAdjustment::ClearBases)
                .await
                .map_err(at(index))?;
        }
        Play::Suspend => {
            lifecycle.suspend.execute(game_id).await.map_err(at(index))?;
        }
        Play::Resume => {
            lifecycle.resume.execute(game_id).await.map_err(at(index))?;
        }
        Play::Undo => {
            scoring.undo.execute(game_id).await.map_err(at(index))?;
        }
        Play::Redo => {
            scoring.redo.execute(game_id).await.map_err(at(index))?;
        }
    }
    Ok(())
}

async fn adjust(
    app: &App,
    game_id: GameId,
    adjustment: SessionAdjustment,
) -> Result<(), ScoringError> {
    app.use_cases
        .scoring
        .adjust
        .execute(game_id, adjustment)
        .await
        .map(|_| ())
}

fn manual_advancement(
    roster: &Roster,
    index: usize,
    manual: &ManualPlay,
) -> Result<ManualAdvancement, ReplayError> {
    let mut destinations = BTreeMap::new();
    for (base, name) in &manual.destinations {
        let runner = name.as_deref().map(|n| roster.id(n)).transpose()?;
        destinations.insert(*base, runner);
    }
    let scored = manual
        .scored
        .iter()
        .map(|name| roster.id(name))
        .collect::<Result<Vec<_>, _>>()?;
    ManualAdvancement::new(destinations, scored).map_err(at(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SystemClock;
    use crate::infrastructure::config::EngineConfig;
    use crate::infrastructure::memory::InMemoryRepositories;
    use std::sync::Arc;

    fn app() -> App {
        App::new(
            InMemoryRepositories::new(),
            Arc::new(SystemClock::new()),
            EngineConfig::default(),
        )
    }

    fn line<'a>(summary: &'a ReplaySummary, name: &str) -> &'a PlayerStatistics {
        summary
            .players
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, line)| line)
            .unwrap()
    }

    #[tokio::test]
    async fn replays_a_short_game() {
        let sheet = Scoresheet::from_json(
            r#"{
                "opponent": "Rockets",
                "date": "2026-05-02",
                "homeAway": "away",
                "lineup": ["Ava", "Bea", "Cal"],
                "opponentRuns": 1,
                "plays": [
                    { "type": "atBat", "batter": "Ava", "result": "2B", "pitches": "BX" },
                    { "type": "atBat", "batter": "Bea", "result": "1B" },
                    { "type": "atBat", "batter": "Cal", "result": "HR" },
                    { "type": "atBat", "batter": "Ava", "result": "SO" },
                    { "type": "atBat", "batter": "Bea", "result": "GO" },
                    { "type": "atBat", "batter": "Cal", "result": "AO" }
                ]
            }"#,
        )
        .unwrap();

        let summary = replay(&app(), sheet).await.unwrap();

        assert_eq!(summary.game.status(), GameStatus::Completed);
        assert_eq!(summary.game.final_score().map(|s| s.team_runs), Some(3));
        assert_eq!(summary.line_score.total(), 3);
        assert_eq!(summary.innings_played, 1);
        assert!(summary.ended_early());

        let cal = line(&summary, "Cal");
        assert_eq!(cal.home_runs(), 1);
        assert_eq!(cal.rbis(), 3);
        assert_eq!(cal.at_bats(), 2);
        assert_eq!(line(&summary, "Ava").runs(), 1);
        assert_eq!(summary.team.counters.hits, 3);
    }

    #[tokio::test]
    async fn undo_removes_a_play_from_the_session() {
        let sheet = Scoresheet::from_json(
            r#"{
                "opponent": "Comets",
                "date": "2026-05-09",
                "homeAway": "home",
                "lineup": ["Ava", "Bea"],
                "plays": [
                    { "type": "atBat", "batter": "Ava", "result": "HR" },
                    { "type": "undo" },
                    { "type": "atBat", "batter": "Ava", "result": "BB" }
                ]
            }"#,
        )
        .unwrap();

        let summary = replay(&app(), sheet).await.unwrap();

        assert_eq!(summary.line_score.total(), 0);
        // The undone home run stays in the persisted line.
        let ava = line(&summary, "Ava");
        assert_eq!(ava.home_runs(), 1);
        assert_eq!(ava.walks(), 1);
    }

    #[tokio::test]
    async fn manual_fielders_choice_by_name() {
        let sheet = Scoresheet::from_json(
            r#"{
                "opponent": "Owls",
                "date": "2026-05-16",
                "homeAway": "home",
                "lineup": ["Ava", "Bea", "Cal"],
                "plays": [
                    { "type": "atBat", "batter": "Ava", "result": "1B" },
                    { "type": "atBat", "batter": "Bea", "result": "FC", "outs": 1,
                      "manual": { "destinations": { "first": "Bea" } } },
                    { "type": "suspend" }
                ]
            }"#,
        )
        .unwrap();

        let summary = replay(&app(), sheet).await.unwrap();

        assert_eq!(summary.game.status(), GameStatus::Suspended);
        assert_eq!(line(&summary, "Bea").at_bats(), 1);
    }

    #[tokio::test]
    async fn unknown_batter_is_reported_by_name() {
        let sheet = Scoresheet::from_json(
            r#"{
                "opponent": "Owls",
                "date": "2026-05-16",
                "homeAway": "home",
                "lineup": ["Ava"],
                "plays": [{ "type": "atBat", "batter": "Zed", "result": "1B" }]
            }"#,
        )
        .unwrap();

        let result = replay(&app(), sheet).await;
        assert!(matches!(result, Err(ReplayError::UnknownPlayer(name)) if name == "Zed"));
    }

    #[tokio::test]
    async fn out_of_order_batter_reports_play_index() {
        let sheet = Scoresheet::from_json(
            r#"{
                "opponent": "Owls",
                "date": "2026-05-16",
                "homeAway": "home",
                "lineup": ["Ava", "Bea"],
                "plays": [{ "type": "atBat", "batter": "Bea", "result": "1B" }]
            }"#,
        )
        .unwrap();

        let result = replay(&app(), sheet).await;
        assert!(matches!(
            result,
            Err(ReplayError::Play {
                index: 0,
                source: PlayFailure::Scoring(ScoringError::WrongBatter { .. })
            })
        ));
    }

    #[tokio::test]
    async fn bad_pitch_code_names_the_play() {
        let sheet = Scoresheet::from_json(
            r#"{
                "opponent": "Owls", "date": "2026-05-16", "homeAway": "home",
                "lineup": ["Ava", "Bea"],
                "plays": [
                    { "type": "pitch", "pitch": "B" },
                    { "type": "pitch", "pitch": "Q" }
                ]
            }"#,
        )
        .unwrap();

        let result = replay(&app(), sheet).await;
        assert!(matches!(
            result,
            Err(ReplayError::Play {
                index: 1,
                source: PlayFailure::Domain(DomainError::Parse(_))
            })
        ));
    }

    #[tokio::test]
    async fn suspending_twice_names_the_second_suspend() {
        let sheet = Scoresheet::from_json(
            r#"{
                "opponent": "Owls", "date": "2026-05-16", "homeAway": "home",
                "lineup": ["Ava", "Bea"],
                "plays": [{ "type": "suspend" }, { "type": "suspend" }]
            }"#,
        )
        .unwrap();

        let err = replay(&app(), sheet).await.unwrap_err();
        assert!(err.to_string().starts_with("Play 1:"));
        assert!(matches!(
            err,
            ReplayError::Play {
                index: 1,
                source: PlayFailure::Lifecycle(LifecycleError::Validation(
                    DomainError::InvalidStateTransition(_)
                ))
            }
        ));
    }

    #[test]
    fn duplicate_lineup_names_are_rejected() {
        let names = vec!["Ava".to_string(), "Ava".to_string()];
        assert!(matches!(Roster::new(&names), Err(ReplayError::DuplicatePlayer(_))));
    }

    #[test]
    fn unknown_result_code_fails_to_parse() {
        let result = Scoresheet::from_json(
            r#"{
                "opponent": "Owls", "date": "2026-05-16", "homeAway": "home",
                "lineup": ["Ava"],
                "plays": [{ "type": "atBat", "batter": "Ava", "result": "XX" }]
            }"#,
        );
        assert!(matches!(result, Err(ReplayError::Parse(_))));
    }
}
