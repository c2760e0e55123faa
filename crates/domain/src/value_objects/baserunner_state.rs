//! Baserunner occupancy value object
//!
//! An immutable snapshot of who stands on first, second, and third. Every
//! change produces a new value; equality is slot-by-slot.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as DeError;

use crate::error::DomainError;
use crate::ids::PlayerId;
use crate::value_objects::Base;

/// Occupancy of the three bases by player identity.
///
/// # Invariants
///
/// - A player appears on at most one base.
///
/// # Example
///
/// ```
/// use scorebook_domain::{Base, BaserunnerState, PlayerId};
///
/// let runner = PlayerId::new();
/// let state = BaserunnerState::empty().with_runner(Base::Second, Some(runner)).unwrap();
///
/// assert_eq!(state.runner_on(Base::Second), Some(runner));
/// assert_eq!(state.runner_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BaserunnerState {
    first: Option<PlayerId>,
    second: Option<PlayerId>,
    third: Option<PlayerId>,
}

impl BaserunnerState {
    /// Build a state from explicit slots.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if the same player occupies two bases.
    pub fn new(
        first: Option<PlayerId>,
        second: Option<PlayerId>,
        third: Option<PlayerId>,
    ) -> Result<Self, DomainError> {
        let state = Self {
            first,
            second,
            third,
        };
        state.ensure_unique()?;
        Ok(state)
    }

    /// Build a state from runners that were moved, never copied, out of a
    /// valid state. Occupancy is still unique.
    pub(crate) fn from_moved_runners(
        first: Option<PlayerId>,
        second: Option<PlayerId>,
        third: Option<PlayerId>,
    ) -> Self {
        let state = Self {
            first,
            second,
            third,
        };
        debug_assert!(state.ensure_unique().is_ok());
        state
    }

    /// No runners on base.
    pub const fn empty() -> Self {
        Self {
            first: None,
            second: None,
            third: None,
        }
    }

    #[inline]
    pub fn first(&self) -> Option<PlayerId> {
        self.first
    }

    #[inline]
    pub fn second(&self) -> Option<PlayerId> {
        self.second
    }

    #[inline]
    pub fn third(&self) -> Option<PlayerId> {
        self.third
    }

    /// Returns the runner on `base`, if any.
    pub fn runner_on(&self, base: Base) -> Option<PlayerId> {
        match base {
            Base::First => self.first,
            Base::Second => self.second,
            Base::Third => self.third,
        }
    }

    pub fn is_occupied(&self, base: Base) -> bool {
        self.runner_on(base).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.runner_count() == 0
    }

    pub fn runner_count(&self) -> usize {
        self.runners().count()
    }

    pub fn bases_loaded(&self) -> bool {
        self.first.is_some() && self.second.is_some() && self.third.is_some()
    }

    /// Occupied bases with their runners, ordered first to third.
    pub fn runners(&self) -> impl Iterator<Item = (Base, PlayerId)> + '_ {
        Base::ALL
            .into_iter()
            .filter_map(|base| self.runner_on(base).map(|player| (base, player)))
    }

    /// The most advanced runner.
    pub fn lead_runner(&self) -> Option<(Base, PlayerId)> {
        self.runners().last()
    }

    /// The base `player` is standing on, if any.
    pub fn base_of(&self, player: PlayerId) -> Option<Base> {
        self.runners()
            .find(|(_, runner)| *runner == player)
            .map(|(base, _)| base)
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.base_of(player).is_some()
    }

    /// Returns a new state with `base` set to `runner`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if `runner` already stands on another base.
    pub fn with_runner(self, base: Base, runner: Option<PlayerId>) -> Result<Self, DomainError> {
        let mut next = self;
        *next.slot_mut(base) = runner;
        next.ensure_unique()?;
        Ok(next)
    }

    /// Returns a new state with `base` vacated.
    pub fn without_runner(self, base: Base) -> Self {
        let mut next = self;
        *next.slot_mut(base) = None;
        next
    }

    fn slot_mut(&mut self, base: Base) -> &mut Option<PlayerId> {
        match base {
            Base::First => &mut self.first,
            Base::Second => &mut self.second,
            Base::Third => &mut self.third,
        }
    }

    fn ensure_unique(&self) -> Result<(), DomainError> {
        let runners: Vec<(Base, PlayerId)> = self.runners().collect();
        for (index, (base, player)) in runners.iter().enumerate() {
            if let Some((other, _)) = runners[index + 1..].iter().find(|(_, p)| p == player) {
                return Err(DomainError::constraint(format!(
                    "Player {} cannot occupy both {} and {}",
                    player, base, other
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BaserunnerStateWireFormat {
    first: Option<PlayerId>,
    second: Option<PlayerId>,
    third: Option<PlayerId>,
}

impl Serialize for BaserunnerState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BaserunnerStateWireFormat {
            first: self.first,
            second: self.second,
            third: self.third,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BaserunnerState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = BaserunnerStateWireFormat::deserialize(deserializer)?;
        BaserunnerState::new(wire.first, wire.second, wire.third).map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_runner_is_rejected() {
        let p = PlayerId::new();
        let err = BaserunnerState::new(Some(p), None, Some(p)).unwrap_err();
        assert!(matches!(err, DomainError::Constraint(_)));
    }

    #[test]
    fn with_runner_rejects_player_already_on_base() {
        let p = PlayerId::new();
        let state = BaserunnerState::new(Some(p), None, None).unwrap();
        assert!(state.with_runner(Base::Third, Some(p)).is_err());
        // moving the same player onto their own base is fine
        assert!(state.with_runner(Base::First, Some(p)).is_ok());
    }

    #[test]
    fn with_runner_leaves_original_untouched() {
        let p = PlayerId::new();
        let before = BaserunnerState::empty();
        let after = before.with_runner(Base::First, Some(p)).unwrap();
        assert!(before.is_empty());
        assert_eq!(after.first(), Some(p));
    }

    #[test]
    fn queries_report_occupancy() {
        let (p1, p3) = (PlayerId::new(), PlayerId::new());
        let state = BaserunnerState::new(Some(p1), None, Some(p3)).unwrap();

        assert_eq!(state.runner_count(), 2);
        assert!(!state.bases_loaded());
        assert_eq!(state.lead_runner(), Some((Base::Third, p3)));
        assert_eq!(state.base_of(p1), Some(Base::First));
        assert!(!state.is_occupied(Base::Second));
        assert_eq!(
            state.runners().collect::<Vec<_>>(),
            vec![(Base::First, p1), (Base::Third, p3)]
        );
    }

    #[test]
    fn equality_is_structural() {
        let p = PlayerId::new();
        let a = BaserunnerState::new(None, Some(p), None).unwrap();
        let b = BaserunnerState::empty().with_runner(Base::Second, Some(p)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn deserialize_rejects_duplicates() {
        let p = PlayerId::new();
        let json = format!(r#"{{"first":"{p}","second":"{p}","third":null}}"#);
        let result: Result<BaserunnerState, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }
}
