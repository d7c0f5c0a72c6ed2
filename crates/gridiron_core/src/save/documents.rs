//! On-disk document shapes for the persistence collaborator.
//!
//! Two JSON documents: the game document (committed drives plus all
//! scoring state) and the teams document (the two rosters). Wire field
//! names are camelCase.

use crate::models::{ClosedDrive, PerSide, PlayerScore, Score, Team};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Game progress document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDocument {
    pub drives: Vec<ClosedDrive>,
    pub home_score: Score,
    pub away_score: Score,
    pub player_scores: PerSide<BTreeMap<u8, PlayerScore>>,
    pub last_updated: DateTime<Utc>,
}

impl GameDocument {
    /// An empty game: no drives, zeroed scores.
    pub fn empty() -> Self {
        Self {
            drives: Vec::new(),
            home_score: Score::default(),
            away_score: Score::default(),
            player_scores: PerSide::default(),
            last_updated: Utc::now(),
        }
    }
}

/// Roster document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsDocument {
    pub home_team: Team,
    pub away_team: Team,
    pub last_updated: DateTime<Utc>,
}
