use super::player::{Player, PlayerRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayType {
    Run,
    Pass,
    Scoring,
}

impl PlayType {
    pub fn label(&self) -> &'static str {
        match self {
            PlayType::Run => "Run",
            PlayType::Pass => "Pass",
            PlayType::Scoring => "Scoring",
        }
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A committed play. Created by the play or scoring engine, appended to
/// its drive, never mutated or deleted afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Play {
    pub id: Uuid,
    /// 1-based position within the owning drive.
    pub sequence: u32,
    pub play_type: PlayType,
    pub description: String,
    pub yards: i32,
    pub is_first_down: bool,
    pub is_scoring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarterback: Option<PlayerRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<PlayerRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner: Option<PlayerRef>,
    /// Pass plays only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
    /// Down at the time of the snap.
    pub down: u8,
    /// Distance at the time of the snap.
    pub yards_to_go: u32,
}

/// Staging area for the play being entered. No validation happens here;
/// `is_valid_for` is the advisory gate callers use to enable commit.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingPlay {
    pub quarterback: Option<PlayerRef>,
    pub receiver: Option<PlayerRef>,
    pub runner: Option<PlayerRef>,
    pub yards: i32,
    pub is_complete: bool,
}

impl Default for PendingPlay {
    fn default() -> Self {
        Self { quarterback: None, receiver: None, runner: None, yards: 0, is_complete: true }
    }
}

impl PendingPlay {
    pub fn clear(&mut self) {
        *self = PendingPlay::default();
    }

    /// Merge a partial update; unsupplied fields are left unchanged.
    pub fn apply(&mut self, update: PlayUpdate) {
        if let Some(quarterback) = update.quarterback {
            self.quarterback = Some(quarterback);
        }
        if let Some(receiver) = update.receiver {
            self.receiver = Some(receiver);
        }
        if let Some(runner) = update.runner {
            self.runner = Some(runner);
        }
        if let Some(yards) = update.yards {
            self.yards = yards;
        }
        if let Some(is_complete) = update.is_complete {
            self.is_complete = is_complete;
        }
    }

    /// Advisory commit gate: a run needs a runner and nonzero yards; a
    /// pass needs a quarterback, plus a receiver and nonzero yards when
    /// marked complete. Scoring plays are built by the scoring engine
    /// directly and never staged here.
    pub fn is_valid_for(&self, play_type: PlayType) -> bool {
        match play_type {
            PlayType::Run => self.runner.is_some() && self.yards != 0,
            PlayType::Pass => {
                if self.is_complete {
                    self.quarterback.is_some() && self.receiver.is_some() && self.yards != 0
                } else {
                    self.quarterback.is_some()
                }
            }
            PlayType::Scoring => false,
        }
    }
}

/// Partial update merged into the pending play; `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct PlayUpdate {
    pub quarterback: Option<PlayerRef>,
    pub receiver: Option<PlayerRef>,
    pub runner: Option<PlayerRef>,
    pub yards: Option<i32>,
    pub is_complete: Option<bool>,
}

impl PlayUpdate {
    pub fn quarterback(player: &Player) -> Self {
        Self { quarterback: Some(player.into()), ..Default::default() }
    }

    pub fn receiver(player: &Player) -> Self {
        Self { receiver: Some(player.into()), ..Default::default() }
    }

    pub fn runner(player: &Player) -> Self {
        Self { runner: Some(player.into()), ..Default::default() }
    }

    pub fn yards(yards: i32) -> Self {
        Self { yards: Some(yards), ..Default::default() }
    }

    pub fn complete(is_complete: bool) -> Self {
        Self { is_complete: Some(is_complete), ..Default::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::Position;

    #[test]
    fn test_apply_merges_only_supplied_fields() {
        let qb = Player::new(12, "Brady", Position::QB);
        let wr = Player::new(88, "Jones", Position::WR);

        let mut pending = PendingPlay::default();
        pending.apply(PlayUpdate::quarterback(&qb));
        pending.apply(PlayUpdate::yards(15));
        pending.apply(PlayUpdate::receiver(&wr));

        assert_eq!(pending.quarterback.as_ref().map(|p| p.number), Some(12));
        assert_eq!(pending.receiver.as_ref().map(|p| p.number), Some(88));
        assert_eq!(pending.yards, 15);
        assert!(pending.is_complete);
        assert!(pending.runner.is_none());
    }

    #[test]
    fn test_validity_gate_run() {
        let rb = Player::new(22, "Williams", Position::RB);

        let mut pending = PendingPlay::default();
        assert!(!pending.is_valid_for(PlayType::Run));

        pending.apply(PlayUpdate::runner(&rb));
        assert!(!pending.is_valid_for(PlayType::Run));

        pending.apply(PlayUpdate::yards(4));
        assert!(pending.is_valid_for(PlayType::Run));
    }

    #[test]
    fn test_validity_gate_pass() {
        let qb = Player::new(12, "Brady", Position::QB);
        let wr = Player::new(88, "Jones", Position::WR);

        let mut pending = PendingPlay::default();
        pending.apply(PlayUpdate::quarterback(&qb));

        // Complete pass still needs a receiver and yardage.
        assert!(!pending.is_valid_for(PlayType::Pass));

        // An incomplete pass needs only the quarterback.
        pending.apply(PlayUpdate::complete(false));
        assert!(pending.is_valid_for(PlayType::Pass));

        pending.apply(PlayUpdate::complete(true));
        pending.apply(PlayUpdate::receiver(&wr));
        pending.apply(PlayUpdate::yards(12));
        assert!(pending.is_valid_for(PlayType::Pass));
    }

    #[test]
    fn test_clear_resets_to_defaults() {
        let rb = Player::new(22, "Williams", Position::RB);
        let mut pending = PendingPlay::default();
        pending.apply(PlayUpdate::runner(&rb));
        pending.apply(PlayUpdate::yards(7));
        pending.apply(PlayUpdate::complete(false));

        pending.clear();
        assert_eq!(pending, PendingPlay::default());
    }
}
