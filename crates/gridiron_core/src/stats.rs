//! Derived team statistics.

use crate::models::{ClosedDrive, PerSide, PlayType};
use serde::{Deserialize, Serialize};

/// Yardage summary for one team.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamStats {
    pub total_yards: i32,
    pub passing_yards: i32,
    pub rushing_yards: i32,
}

/// Re-derive per-team yardage from the committed drive history.
///
/// Pure function: repeated calls over the same history give the same
/// answer. Complete passes count toward passing and total yards, runs
/// toward rushing and total; incomplete passes and scoring plays
/// contribute nothing.
pub fn compute_stats(drives: &[ClosedDrive]) -> PerSide<TeamStats> {
    let mut stats = PerSide::<TeamStats>::default();

    for drive in drives {
        let team = &mut stats[drive.side];
        for play in &drive.plays {
            match play.play_type {
                PlayType::Pass if play.is_complete == Some(true) => {
                    team.passing_yards += play.yards;
                    team.total_yards += play.yards;
                }
                PlayType::Run => {
                    team.rushing_yards += play.yards;
                    team.total_yards += play.yards;
                }
                _ => {}
            }
        }
    }

    stats
}
