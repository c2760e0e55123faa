//! Game entity - identity and lifecycle status of a scheduled game
//!
//! The entity is immutable. Status transitions return a new `Game`; the live
//! inning, count, and baserunner state belong to `GameSession`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::GameId;
use crate::value_objects::{FinalScore, HalfInning, OpponentName};

/// Lifecycle status of a game.
///
/// ```text
/// Setup -> InProgress -> Completed
///              ^  |
///              |  v
///           Suspended
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Setup,
    InProgress,
    Suspended,
    Completed,
}

impl GameStatus {
    pub fn can_transition_to(self, next: GameStatus) -> bool {
        matches!(
            (self, next),
            (Self::Setup, Self::InProgress)
                | (Self::InProgress, Self::Suspended)
                | (Self::Suspended, Self::InProgress)
                | (Self::InProgress, Self::Completed)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::InProgress => "in_progress",
            Self::Suspended => "suspended",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "setup" => Ok(Self::Setup),
            "in_progress" => Ok(Self::InProgress),
            "suspended" => Ok(Self::Suspended),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::parse(format!("Unknown game status: {}", s))),
        }
    }
}

/// Whether the scored team is the home or the visiting side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HomeAway {
    Home,
    Away,
}

impl HomeAway {
    /// The half-inning in which the scored team bats.
    pub fn batting_half(self) -> HalfInning {
        match self {
            Self::Home => HalfInning::Bottom,
            Self::Away => HalfInning::Top,
        }
    }
}

/// A game against one opponent on one date.
///
/// # Invariants
///
/// - `final_score` is present exactly when the status is `Completed`
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use scorebook_domain::{FinalScore, Game, GameStatus, HomeAway, OpponentName};
///
/// let date = NaiveDate::from_ymd_opt(2026, 5, 2).unwrap();
/// let game = Game::new(OpponentName::new("Rockets").unwrap(), date, HomeAway::Home);
/// let started = game.start().unwrap();
/// let finished = started.complete(FinalScore::new(6, 4)).unwrap();
///
/// assert_eq!(game.status(), GameStatus::Setup);
/// assert_eq!(finished.status(), GameStatus::Completed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    id: GameId,
    opponent: OpponentName,
    date: NaiveDate,
    home_away: HomeAway,
    status: GameStatus,
    final_score: Option<FinalScore>,
}

impl Game {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub fn new(opponent: OpponentName, date: NaiveDate, home_away: HomeAway) -> Self {
        Self {
            id: GameId::new(),
            opponent,
            date,
            home_away,
            status: GameStatus::Setup,
            final_score: None,
        }
    }

    /// Set the game's ID (used when loading from storage).
    pub fn with_id(mut self, id: GameId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[inline]
    pub fn opponent(&self) -> &OpponentName {
        &self.opponent
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    pub fn home_away(&self) -> HomeAway {
        self.home_away
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn final_score(&self) -> Option<FinalScore> {
        self.final_score
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    // =========================================================================
    // Lifecycle Transitions (each returns a replacement value)
    // =========================================================================

    /// `Setup -> InProgress`
    pub fn start(&self) -> Result<Game, DomainError> {
        self.transition(GameStatus::Setup, GameStatus::InProgress)
    }

    /// `InProgress -> Suspended`
    pub fn suspend(&self) -> Result<Game, DomainError> {
        self.transition(GameStatus::InProgress, GameStatus::Suspended)
    }

    /// `Suspended -> InProgress`
    pub fn resume(&self) -> Result<Game, DomainError> {
        self.transition(GameStatus::Suspended, GameStatus::InProgress)
    }

    /// `InProgress -> Completed`, recording the final score.
    pub fn complete(&self, final_score: FinalScore) -> Result<Game, DomainError> {
        let mut next = self.transition(GameStatus::InProgress, GameStatus::Completed)?;
        next.final_score = Some(final_score);
        Ok(next)
    }

    fn transition(&self, expected: GameStatus, next: GameStatus) -> Result<Game, DomainError> {
        if self.status != expected || !self.status.can_transition_to(next) {
            return Err(DomainError::invalid_state_transition(format!(
                "Game {} cannot move from {} to {}",
                self.id, self.status, next
            )));
        }
        Ok(Game {
            status: next,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_game() -> Game {
        Game::new(
            OpponentName::new("Comets").unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            HomeAway::Away,
        )
    }

    mod transitions {
        use super::*;

        #[test]
        fn full_lifecycle() {
            let game = setup_game();
            let live = game.start().unwrap();
            let paused = live.suspend().unwrap();
            let resumed = paused.resume().unwrap();
            let done = resumed.complete(FinalScore::new(3, 2)).unwrap();

            assert_eq!(live.status(), GameStatus::InProgress);
            assert_eq!(paused.status(), GameStatus::Suspended);
            assert_eq!(resumed.status(), GameStatus::InProgress);
            assert_eq!(done.final_score(), Some(FinalScore::new(3, 2)));
            assert_eq!(done.id(), game.id());
        }

        #[test]
        fn transitions_do_not_mutate_the_original() {
            let game = setup_game();
            let _ = game.start().unwrap();
            assert_eq!(game.status(), GameStatus::Setup);
        }

        #[test]
        fn cannot_complete_from_setup() {
            let err = setup_game().complete(FinalScore::new(1, 0)).unwrap_err();
            assert!(matches!(err, DomainError::InvalidStateTransition(_)));
        }

        #[test]
        fn cannot_resume_a_running_game() {
            let live = setup_game().start().unwrap();
            assert!(live.resume().is_err());
            assert!(live.start().is_err());
        }

        #[test]
        fn completed_is_terminal() {
            let done = setup_game()
                .start()
                .unwrap()
                .complete(FinalScore::new(0, 1))
                .unwrap();
            assert!(done.suspend().is_err());
            assert!(done.resume().is_err());
            assert!(done.start().is_err());
        }
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            GameStatus::Setup,
            GameStatus::InProgress,
            GameStatus::Suspended,
            GameStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<GameStatus>().unwrap(), status);
        }
        assert!("paused".parse::<GameStatus>().is_err());
    }

    #[test]
    fn home_team_bats_in_the_bottom() {
        assert_eq!(HomeAway::Home.batting_half(), HalfInning::Bottom);
        assert_eq!(HomeAway::Away.batting_half(), HalfInning::Top);
    }
}
