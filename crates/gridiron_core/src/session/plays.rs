//! Play engine: staging partial input and committing plays.

use super::GameSession;
use crate::models::{Play, PlayType, PlayUpdate, PlayerRef};
use uuid::Uuid;

impl GameSession {
    /// Choose the play form being entered. Switching always clears the
    /// staged fields so a stale participant cannot leak across types.
    pub fn set_play_type(&mut self, play_type: PlayType) {
        self.play_type = play_type;
        self.pending_play.clear();
    }

    /// Merge partial input into the staged play. No validation happens
    /// here; see `PendingPlay::is_valid_for`.
    pub fn update_pending_play(&mut self, update: PlayUpdate) {
        self.pending_play.apply(update);
    }

    /// Commit the staged play against the active drive. Rejected as a
    /// no-op when no drive is underway.
    ///
    /// The play snapshots the down and distance at the snap; the drive's
    /// yard line, the down-and-distance cursor, and the staging area are
    /// all updated afterwards.
    pub fn commit_play(&mut self) -> Option<&Play> {
        if self.active_drive.is_none() {
            return None;
        }

        let yards = self.pending_play.yards;
        let first_down = self.down_state.is_first_down(yards);
        let description = self.describe_play(first_down);
        let is_complete = match self.play_type {
            PlayType::Pass => Some(self.pending_play.is_complete),
            _ => None,
        };
        let down = self.down_state;

        let drive = self.active_drive.as_mut()?;
        drive.plays.push(Play {
            id: Uuid::new_v4(),
            sequence: drive.plays.len() as u32 + 1,
            play_type: self.play_type,
            description,
            yards,
            is_first_down: first_down,
            is_scoring: false,
            quarterback: self.pending_play.quarterback.take(),
            receiver: self.pending_play.receiver.take(),
            runner: self.pending_play.runner.take(),
            is_complete,
            down: down.down,
            yards_to_go: down.yards_to_go,
        });
        drive.current_yard_line += yards;

        self.down_state.advance(yards);
        self.pending_play.clear();
        self.active_drive.as_ref().and_then(|d| d.plays.last())
    }

    /// Human-readable line for the staged play, e.g.
    /// "1st & 10: Pass #12 Brady to #88 Jones, 15 yards (FIRST DOWN)".
    /// Incomplete passes omit the receiver and yardage.
    fn describe_play(&self, first_down: bool) -> String {
        let prefix = format!(
            "{}{} & {}: ",
            self.down_state.down,
            down_suffix(self.down_state.down),
            self.down_state.yards_to_go
        );

        let mut description = match self.play_type {
            PlayType::Pass => {
                let quarterback = participant_label(&self.pending_play.quarterback);
                if self.pending_play.is_complete {
                    format!(
                        "{}Pass {} to {}, {} yards",
                        prefix,
                        quarterback,
                        participant_label(&self.pending_play.receiver),
                        self.pending_play.yards
                    )
                } else {
                    format!("{}Pass {}, incomplete", prefix, quarterback)
                }
            }
            _ => format!(
                "{}Run {}, {} yards",
                prefix,
                participant_label(&self.pending_play.runner),
                self.pending_play.yards
            ),
        };

        if first_down {
            description.push_str(" (FIRST DOWN)");
        }
        description
    }
}

fn participant_label(player: &Option<PlayerRef>) -> String {
    match player {
        Some(p) => format!("#{} {}", p.number, p.name),
        None => "#--".to_string(),
    }
}

fn down_suffix(down: u8) -> &'static str {
    match down {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
