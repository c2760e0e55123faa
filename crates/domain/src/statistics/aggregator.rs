//! Incremental statistics aggregation
//!
//! The orchestration layer calls [`update_player_statistics`] once per
//! affected player per at-bat: once for the batter and once for every runner
//! who scored. Which counters move depends on whose record is being updated.

use crate::entities::{AtBat, PlayerStatistics};
use crate::value_objects::BattingResult;

/// Fold one at-bat into a player's batting line.
///
/// - Batting counters (at-bats, hits, walks, strikeouts, sacrifice flies, RBIs)
///   move only when `current` belongs to the batter.
/// - `runs` moves when `current`'s player is listed among the scorers, which
///   includes the batter on a home run.
pub fn update_player_statistics(current: &PlayerStatistics, at_bat: &AtBat) -> PlayerStatistics {
    let is_batter = current.player_id() == at_bat.batter_id();
    let scored = at_bat.scored(current.player_id());
    let result = at_bat.result();

    current.with_counters(|c| {
        if is_batter {
            if result.counts_as_at_bat() {
                c.at_bats += 1;
            }
            match result {
                BattingResult::Single => c.singles += 1,
                BattingResult::Double => c.doubles += 1,
                BattingResult::Triple => c.triples += 1,
                BattingResult::HomeRun => c.home_runs += 1,
                BattingResult::Walk | BattingResult::IntentionalWalk => c.walks += 1,
                BattingResult::Strikeout => c.strikeouts += 1,
                BattingResult::SacrificeFly => c.sacrifice_flies += 1,
                BattingResult::Error
                | BattingResult::FieldersChoice
                | BattingResult::GroundOut
                | BattingResult::AirOut
                | BattingResult::DoublePlay => {}
            }
            if result.is_hit() {
                c.hits += 1;
            }
            c.rbis += u32::from(at_bat.rbis());
        }
        if scored {
            c.runs += 1;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    use crate::entities::AtBatDraft;
    use crate::ids::{GameId, InningId, PlayerId};
    use crate::rules::{advance, calculate_rbis};
    use crate::statistics::validate_statistics;
    use crate::value_objects::{BaserunnerState, Count};

    fn at_bat(batter: PlayerId, result: BattingResult, before: BaserunnerState) -> AtBat {
        let outcome = advance(&before, result, batter).unwrap();
        let credit = calculate_rbis(result, &before, &outcome.runs_scored, batter);
        AtBat::new(
            AtBatDraft {
                game_id: GameId::new(),
                inning_id: InningId::new(),
                batter_id: batter,
                batting_position: 1,
                result,
                rbis: credit.rbis,
                runs_scored: outcome.runs_scored,
                running_errors: Vec::new(),
                baserunners_before: before,
                baserunners_after: outcome.after,
                final_count: Count::default(),
                pitch_sequence: Vec::new(),
            },
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn single_counts_at_bat_and_hit() {
        let batter = PlayerId::new();
        let stats = update_player_statistics(
            &PlayerStatistics::new(batter),
            &at_bat(batter, BattingResult::Single, BaserunnerState::empty()),
        );
        assert_eq!(stats.at_bats(), 1);
        assert_eq!(stats.hits(), 1);
        assert_eq!(stats.counters().singles, 1);
        assert_eq!(stats.batting_average(), 1.0);
    }

    #[test]
    fn walk_and_sacrifice_fly_are_not_at_bats() {
        let batter = PlayerId::new();
        let runner = PlayerId::new();
        let third = BaserunnerState::new(None, None, Some(runner)).unwrap();

        let stats = update_player_statistics(
            &PlayerStatistics::new(batter),
            &at_bat(batter, BattingResult::Walk, BaserunnerState::empty()),
        );
        let stats = update_player_statistics(&stats, &at_bat(batter, BattingResult::SacrificeFly, third));

        assert_eq!(stats.at_bats(), 0);
        assert_eq!(stats.walks(), 1);
        assert_eq!(stats.rbis(), 1);
        assert_eq!(stats.counters().sacrifice_flies, 1);
        assert_eq!(stats.on_base_percentage(), 0.5);
    }

    #[test]
    fn home_run_credits_batter_run_and_rbis() {
        let (p1, p2, p3, batter) = (PlayerId::new(), PlayerId::new(), PlayerId::new(), PlayerId::new());
        let loaded = BaserunnerState::new(Some(p1), Some(p2), Some(p3)).unwrap();
        let grand_slam = at_bat(batter, BattingResult::HomeRun, loaded);

        let batter_stats = update_player_statistics(&PlayerStatistics::new(batter), &grand_slam);
        assert_eq!(batter_stats.home_runs(), 1);
        assert_eq!(batter_stats.runs(), 1);
        assert_eq!(batter_stats.rbis(), 4);
        assert_eq!(batter_stats.slugging_percentage(), 4.0);

        let runner_stats = update_player_statistics(&PlayerStatistics::new(p2), &grand_slam);
        assert_eq!(runner_stats.runs(), 1);
        assert_eq!(runner_stats.rbis(), 0);
        assert_eq!(runner_stats.at_bats(), 0);
    }

    #[test]
    fn bystander_is_unchanged() {
        let bystander = PlayerStatistics::new(PlayerId::new());
        let updated = update_player_statistics(
            &bystander,
            &at_bat(PlayerId::new(), BattingResult::Double, BaserunnerState::empty()),
        );
        assert_eq!(updated, bystander);
    }

    #[test]
    fn input_is_not_modified() {
        let batter = PlayerId::new();
        let before = PlayerStatistics::new(batter);
        let _ = update_player_statistics(
            &before,
            &at_bat(batter, BattingResult::Strikeout, BaserunnerState::empty()),
        );
        assert_eq!(before.at_bats(), 0);
    }

    // Bit 0 is first base. `runner` takes the lead occupied base.
    fn bases_from(occupied: u8, runner: PlayerId) -> BaserunnerState {
        let mut slots = [None; 3];
        let mut placed = false;
        for i in (0..3).rev() {
            if occupied & (1 << i) != 0 {
                slots[i] = Some(if placed { PlayerId::new() } else { runner });
                placed = true;
            }
        }
        BaserunnerState::new(slots[0], slots[1], slots[2]).unwrap()
    }

    proptest! {
        #[test]
        fn any_sequence_stays_consistent(
            plays in proptest::collection::vec(
                (proptest::sample::select(BattingResult::ALL.to_vec()), 0u8..8),
                0..60,
            )
        ) {
            let (batter, runner) = (PlayerId::new(), PlayerId::new());
            let mut batter_stats = PlayerStatistics::new(batter);
            let mut runner_stats = PlayerStatistics::new(runner);
            let mut runner_scored = 0;
            for (result, occupied) in plays {
                let play = at_bat(batter, result, bases_from(occupied, runner));
                if play.scored(runner) {
                    runner_scored += 1;
                }
                batter_stats = update_player_statistics(&batter_stats, &play);
                runner_stats = update_player_statistics(&runner_stats, &play);
                prop_assert!(validate_statistics(&batter_stats).is_empty());
                prop_assert!(validate_statistics(&runner_stats).is_empty());
            }
            prop_assert_eq!(runner_stats.runs(), runner_scored);
            prop_assert_eq!(runner_stats.at_bats(), 0);
            prop_assert_eq!(runner_stats.rbis(), 0);
        }
    }
}
