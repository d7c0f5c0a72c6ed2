//! Scoring engine: point-awarding events against the active drive.

use super::GameSession;
use crate::models::{Play, PlayType, Player, PlayerScore, ScoreType};
use uuid::Uuid;

impl GameSession {
    /// Record a scoring event for a player on the current offense.
    /// Updates the team score and the player's cumulative line, and
    /// appends a zero-yardage scoring play to the active drive.
    /// Rejected as a no-op when no drive is underway.
    ///
    /// Player eligibility is advisory (`Team::eligible_scorers`); any
    /// player is accepted here.
    pub fn add_score(&mut self, score_type: ScoreType, player: &Player) -> Option<&Play> {
        let side = self.active_drive.as_ref()?.side;

        self.scores[side].record(score_type);
        self.player_scores[side]
            .entry(player.number)
            .or_insert_with(|| PlayerScore::new(player.into()))
            .record(score_type);

        let description = scoring_description(score_type, player);
        let down = self.down_state;
        log::debug!("Score: {} by #{} {}", score_type.label(), player.number, player.name);

        let drive = self.active_drive.as_mut()?;
        drive.plays.push(Play {
            id: Uuid::new_v4(),
            sequence: drive.plays.len() as u32 + 1,
            play_type: PlayType::Scoring,
            description,
            yards: 0,
            is_first_down: false,
            is_scoring: true,
            quarterback: None,
            receiver: None,
            runner: None,
            is_complete: None,
            down: down.down,
            yards_to_go: down.yards_to_go,
        });
        drive.plays.last()
    }
}

fn scoring_description(score_type: ScoreType, player: &Player) -> String {
    match score_type {
        ScoreType::Touchdown => {
            format!("TOUCHDOWN: #{} {} (6 pts)", player.number, player.name)
        }
        ScoreType::FieldGoal => {
            format!("FIELD GOAL: #{} {} (3 pts)", player.number, player.name)
        }
        ScoreType::ExtraPoint => {
            format!("EXTRA POINT: #{} {} (1 pt)", player.number, player.name)
        }
        ScoreType::TwoPointConversion => {
            format!("2-PT CONVERSION: #{} {} (2 pts)", player.number, player.name)
        }
        ScoreType::Safety => {
            format!("SAFETY: #{} {} (2 pts)", player.number, player.name)
        }
    }
}
