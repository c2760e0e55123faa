//! Baserunner advancement
//!
//! Computes the baserunner state after a batting result, together with the
//! ordered list of players who scored. The standard table is deterministic:
//!
//! | Result | Batter | Runners |
//! |--------|--------|---------|
//! | 1B | first | every runner moves up one base |
//! | 2B / 3B | second / third | runners at or past the landing base score, trailing runners move up by the same number of bases |
//! | HR | scores | everyone scores, lead runner first |
//! | BB / IBB / E | first | forced runners only |
//! | FC | first | lead runner retired, then forced runners |
//! | SF | out | runner on third scores |
//! | SO / GO / AO / DP | out | unchanged |
//!
//! Scorer corrections bypass the table through [`Advancement::Manual`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::PlayerId;
use crate::value_objects::{Base, BaserunnerState, BatterAdvance, BattingResult};

/// How runners move on a play.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Advancement {
    /// Apply the standard rule table for the batting result.
    #[default]
    Standard,
    /// Scorer-supplied destinations.
    Manual(ManualAdvancement),
}

/// Explicit per-base destinations entered by the scorer.
///
/// Bases missing from the map are empty afterwards. Validation is structural
/// only: a player may not stand on two bases, nor stand on a base and score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ManualAdvancementWireFormat")]
pub struct ManualAdvancement {
    destinations: BTreeMap<Base, Option<PlayerId>>,
    runs_scored: Vec<PlayerId>,
}

impl ManualAdvancement {
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if a player appears on two bases,
    /// appears twice among the scorers, or both scores and stays on base.
    pub fn new(
        destinations: BTreeMap<Base, Option<PlayerId>>,
        runs_scored: Vec<PlayerId>,
    ) -> Result<Self, DomainError> {
        let manual = Self {
            destinations,
            runs_scored,
        };
        let after = manual.after_state()?;

        for (index, player) in manual.runs_scored.iter().enumerate() {
            if manual.runs_scored[..index].contains(player) {
                return Err(DomainError::constraint(format!(
                    "Player {} cannot score twice on one play",
                    player
                )));
            }
            if let Some(base) = after.base_of(*player) {
                return Err(DomainError::constraint(format!(
                    "Player {} cannot both score and remain on {}",
                    player, base
                )));
            }
        }
        Ok(manual)
    }

    pub fn destinations(&self) -> &BTreeMap<Base, Option<PlayerId>> {
        &self.destinations
    }

    pub fn runs_scored(&self) -> &[PlayerId] {
        &self.runs_scored
    }

    fn after_state(&self) -> Result<BaserunnerState, DomainError> {
        let slot = |base| self.destinations.get(&base).copied().flatten();
        BaserunnerState::new(slot(Base::First), slot(Base::Second), slot(Base::Third))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManualAdvancementWireFormat {
    destinations: BTreeMap<Base, Option<PlayerId>>,
    #[serde(default)]
    runs_scored: Vec<PlayerId>,
}

impl TryFrom<ManualAdvancementWireFormat> for ManualAdvancement {
    type Error = DomainError;

    fn try_from(wire: ManualAdvancementWireFormat) -> Result<Self, Self::Error> {
        Self::new(wire.destinations, wire.runs_scored)
    }
}

/// Result of applying a batting result to the bases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancementOutcome {
    /// Baserunner state after the play
    pub after: BaserunnerState,
    /// Players who crossed home, lead runner first, batter last
    pub runs_scored: Vec<PlayerId>,
    /// Runners removed from the bases without scoring (e.g. the lead runner on a fielder's choice)
    pub retired_runners: Vec<PlayerId>,
    /// Where the batter ended up
    pub batting_advancement: BatterAdvance,
}

/// Apply the standard rule table.
///
/// # Errors
///
/// Returns `DomainError::Constraint` if the batter is already standing on a base.
///
/// # Example
///
/// ```
/// use scorebook_domain::{advance, BaserunnerState, BattingResult, PlayerId};
///
/// let (runner, batter) = (PlayerId::new(), PlayerId::new());
/// let before = BaserunnerState::new(None, None, Some(runner)).unwrap();
/// let outcome = advance(&before, BattingResult::Single, batter).unwrap();
///
/// assert_eq!(outcome.after.first(), Some(batter));
/// assert_eq!(outcome.runs_scored, vec![runner]);
/// ```
pub fn advance(
    before: &BaserunnerState,
    result: BattingResult,
    batter: PlayerId,
) -> Result<AdvancementOutcome, DomainError> {
    advance_with(before, result, batter, &Advancement::Standard)
}

/// Apply either the standard table or a scorer-supplied override.
pub fn advance_with(
    before: &BaserunnerState,
    result: BattingResult,
    batter: PlayerId,
    advancement: &Advancement,
) -> Result<AdvancementOutcome, DomainError> {
    if let Some(base) = before.base_of(batter) {
        return Err(DomainError::constraint(format!(
            "Batter {} is already on {}",
            batter, base
        )));
    }

    match advancement {
        Advancement::Standard => Ok(standard(before, result, batter)),
        Advancement::Manual(manual) => manual_outcome(before, batter, manual),
    }
}

fn standard(before: &BaserunnerState, result: BattingResult, batter: PlayerId) -> AdvancementOutcome {
    let mut play = Play::new(*before);

    match result {
        BattingResult::HomeRun => {
            play.score_all();
            play.runs_scored.push(batter);
        }
        BattingResult::Single => {
            play.move_all_up(1);
            play.place(Base::First, batter);
        }
        BattingResult::Double => play.extra_base_hit(Base::Second, batter),
        BattingResult::Triple => play.extra_base_hit(Base::Third, batter),
        BattingResult::Walk | BattingResult::IntentionalWalk | BattingResult::Error => {
            play.force(Base::First, batter);
        }
        BattingResult::FieldersChoice => {
            play.retire_lead_runner();
            play.force(Base::First, batter);
        }
        BattingResult::SacrificeFly => {
            if let Some(runner) = play.take(Base::Third) {
                play.runs_scored.push(runner);
            }
        }
        BattingResult::Strikeout
        | BattingResult::GroundOut
        | BattingResult::AirOut
        | BattingResult::DoublePlay => {}
    }

    AdvancementOutcome {
        after: play.bases(),
        runs_scored: play.runs_scored,
        retired_runners: play.retired,
        batting_advancement: result.batting_advancement(),
    }
}

fn manual_outcome(
    before: &BaserunnerState,
    batter: PlayerId,
    manual: &ManualAdvancement,
) -> Result<AdvancementOutcome, DomainError> {
    let after = manual.after_state()?;
    let runs_scored = manual.runs_scored.clone();

    let batting_advancement = if runs_scored.contains(&batter) {
        BatterAdvance::Scores
    } else {
        after
            .base_of(batter)
            .map_or(BatterAdvance::None, BatterAdvance::To)
    };

    let retired_runners = before
        .runners()
        .map(|(_, runner)| runner)
        .filter(|runner| !after.contains(*runner) && !runs_scored.contains(runner))
        .collect();

    Ok(AdvancementOutcome {
        after,
        runs_scored,
        retired_runners,
        batting_advancement,
    })
}

/// Working copy of the bases while a play is resolved.
struct Play {
    slots: [Option<PlayerId>; 3],
    runs_scored: Vec<PlayerId>,
    retired: Vec<PlayerId>,
}

impl Play {
    fn new(before: BaserunnerState) -> Self {
        Self {
            slots: [before.first(), before.second(), before.third()],
            runs_scored: Vec::new(),
            retired: Vec::new(),
        }
    }

    fn index(base: Base) -> usize {
        usize::from(base.number() - 1)
    }

    fn take(&mut self, base: Base) -> Option<PlayerId> {
        self.slots[Self::index(base)].take()
    }

    fn place(&mut self, base: Base, player: PlayerId) {
        self.slots[Self::index(base)] = Some(player);
    }

    /// Everyone on base scores, lead runner first.
    fn score_all(&mut self) {
        for base in Base::ALL.into_iter().rev() {
            if let Some(runner) = self.take(base) {
                self.runs_scored.push(runner);
            }
        }
    }

    /// Every runner moves up `bases`, lead runner first; overflow scores.
    fn move_all_up(&mut self, bases: u8) {
        for base in Base::ALL.into_iter().rev() {
            if let Some(runner) = self.take(base) {
                match Base::from_number(base.number() + bases) {
                    Some(target) => self.place(target, runner),
                    None => self.runs_scored.push(runner),
                }
            }
        }
    }

    /// Runners at or ahead of `landing` score; trailing runners move up by
    /// the batter's base count, capped at scoring.
    fn extra_base_hit(&mut self, landing: Base, batter: PlayerId) {
        for base in Base::ALL.into_iter().rev() {
            if let Some(runner) = self.take(base) {
                let target = if base >= landing {
                    None
                } else {
                    Base::from_number(base.number() + landing.number())
                };
                match target {
                    Some(target) => self.place(target, runner),
                    None => self.runs_scored.push(runner),
                }
            }
        }
        self.place(landing, batter);
    }

    /// Put `player` on `base`, pushing the occupant ahead only when forced.
    fn force(&mut self, base: Base, player: PlayerId) {
        if let Some(displaced) = self.take(base) {
            match base.next() {
                Some(next) => self.force(next, displaced),
                None => self.runs_scored.push(displaced),
            }
        }
        self.place(base, player);
    }

    fn retire_lead_runner(&mut self) {
        for base in Base::ALL.into_iter().rev() {
            if let Some(runner) = self.take(base) {
                self.retired.push(runner);
                return;
            }
        }
    }

    fn bases(&self) -> BaserunnerState {
        let [first, second, third] = self.slots;
        BaserunnerState::from_moved_runners(first, second, third)
    }
}
