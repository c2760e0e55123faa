//! Run totals: per half-inning line score and the final score of a game.

use serde::{Deserialize, Serialize};

use crate::value_objects::HalfInning;

/// Final score recorded when a game is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalScore {
    pub team_runs: u32,
    pub opponent_runs: u32,
}

impl FinalScore {
    pub fn new(team_runs: u32, opponent_runs: u32) -> Self {
        Self {
            team_runs,
            opponent_runs,
        }
    }

    pub fn is_win(&self) -> bool {
        self.team_runs > self.opponent_runs
    }
}

/// Runs scored in one half-inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HalfInningRuns {
    pub inning: u32,
    pub half: HalfInning,
    pub runs: u32,
}

/// Runs per half-inning, in the order the halves were played.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineScore(Vec<HalfInningRuns>);

impl LineScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add runs to the given half-inning, opening it if this is the first entry.
    pub fn add(&mut self, inning: u32, half: HalfInning, runs: u32) {
        match self
            .0
            .iter_mut()
            .find(|entry| entry.inning == inning && entry.half == half)
        {
            Some(entry) => entry.runs += runs,
            None => self.0.push(HalfInningRuns { inning, half, runs }),
        }
    }

    pub fn runs_in(&self, inning: u32, half: HalfInning) -> u32 {
        self.0
            .iter()
            .find(|entry| entry.inning == inning && entry.half == half)
            .map_or(0, |entry| entry.runs)
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|entry| entry.runs).sum()
    }

    pub fn entries(&self) -> &[HalfInningRuns] {
        &self.0
    }
}
