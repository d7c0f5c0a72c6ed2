use super::player::PlayerRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point-awarding event and its fixed point value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ScoreType {
    Touchdown,
    FieldGoal,
    ExtraPoint,
    TwoPointConversion,
    Safety,
}

impl ScoreType {
    pub const ALL: [ScoreType; 5] = [
        ScoreType::Touchdown,
        ScoreType::FieldGoal,
        ScoreType::ExtraPoint,
        ScoreType::TwoPointConversion,
        ScoreType::Safety,
    ];

    pub fn points(&self) -> u32 {
        match self {
            ScoreType::Touchdown => 6,
            ScoreType::FieldGoal => 3,
            ScoreType::ExtraPoint => 1,
            ScoreType::TwoPointConversion => 2,
            ScoreType::Safety => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreType::Touchdown => "Touchdown",
            ScoreType::FieldGoal => "Field Goal",
            ScoreType::ExtraPoint => "Extra Point",
            ScoreType::TwoPointConversion => "Two-Point Conversion",
            ScoreType::Safety => "Safety",
        }
    }
}

impl fmt::Display for ScoreType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cumulative team score. `record` is the only mutation point, so the
/// points total always equals the weighted sum of the category counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
    pub touchdowns: u32,
    pub field_goals: u32,
    pub extra_points: u32,
    pub two_point_conversions: u32,
    pub safeties: u32,
}

impl Score {
    pub fn record(&mut self, score_type: ScoreType) {
        match score_type {
            ScoreType::Touchdown => self.touchdowns += 1,
            ScoreType::FieldGoal => self.field_goals += 1,
            ScoreType::ExtraPoint => self.extra_points += 1,
            ScoreType::TwoPointConversion => self.two_point_conversions += 1,
            ScoreType::Safety => self.safeties += 1,
        }
        self.points += score_type.points();
    }
}

/// Cumulative scoring line for one player. Created lazily on the
/// player's first scoring event; never removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerScore {
    pub player: PlayerRef,
    pub touchdowns: u32,
    pub field_goals: u32,
    pub extra_points: u32,
    pub two_point_conversions: u32,
    pub safeties: u32,
}

impl PlayerScore {
    pub fn new(player: PlayerRef) -> Self {
        Self {
            player,
            touchdowns: 0,
            field_goals: 0,
            extra_points: 0,
            two_point_conversions: 0,
            safeties: 0,
        }
    }

    pub fn record(&mut self, score_type: ScoreType) {
        match score_type {
            ScoreType::Touchdown => self.touchdowns += 1,
            ScoreType::FieldGoal => self.field_goals += 1,
            ScoreType::ExtraPoint => self.extra_points += 1,
            ScoreType::TwoPointConversion => self.two_point_conversions += 1,
            ScoreType::Safety => self.safeties += 1,
        }
    }

    /// Derived from the counters, never stored.
    pub fn total_points(&self) -> u32 {
        self.touchdowns * 6
            + self.field_goals * 3
            + self.extra_points
            + self.two_point_conversions * 2
            + self.safeties * 2
    }
}
