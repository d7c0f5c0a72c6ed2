use super::play::Play;
use super::team::TeamSide;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// How a possession ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DriveResult {
    Touchdown,
    FieldGoal,
    Punt,
    Turnover,
    TurnoverOnDowns,
    EndOfHalf,
    EndOfGame,
}

impl DriveResult {
    pub const ALL: [DriveResult; 7] = [
        DriveResult::Touchdown,
        DriveResult::FieldGoal,
        DriveResult::Punt,
        DriveResult::Turnover,
        DriveResult::TurnoverOnDowns,
        DriveResult::EndOfHalf,
        DriveResult::EndOfGame,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DriveResult::Touchdown => "Touchdown",
            DriveResult::FieldGoal => "Field Goal",
            DriveResult::Punt => "Punt",
            DriveResult::Turnover => "Turnover",
            DriveResult::TurnoverOnDowns => "Turnover on Downs",
            DriveResult::EndOfHalf => "End of Half",
            DriveResult::EndOfGame => "End of Game",
        }
    }
}

impl fmt::Display for DriveResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The drive currently being built. Mutable while open; `close` freezes
/// it into a `ClosedDrive`.
#[derive(Debug, Clone)]
pub struct ActiveDrive {
    pub id: Uuid,
    /// 1-based position in the game's drive history.
    pub sequence: u32,
    pub side: TeamSide,
    /// Offense name snapshot, used by the export tables.
    pub team_name: String,
    pub start_yard_line: i32,
    /// Advances with every committed play; always equals
    /// `start_yard_line + sum(play.yards)`.
    pub current_yard_line: i32,
    /// Game clock at the start of the possession (`m:ss`).
    pub start_time: String,
    pub plays: Vec<Play>,
}

impl ActiveDrive {
    pub fn new(
        sequence: u32,
        side: TeamSide,
        team_name: impl Into<String>,
        start_yard_line: i32,
        start_time: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sequence,
            side,
            team_name: team_name.into(),
            start_yard_line,
            current_yard_line: start_yard_line,
            start_time: start_time.into(),
            plays: Vec::new(),
        }
    }

    pub fn total_yards(&self) -> i32 {
        self.plays.iter().map(|p| p.yards).sum()
    }

    pub fn first_downs(&self) -> usize {
        self.plays.iter().filter(|p| p.is_first_down).count()
    }

    pub fn close(
        self,
        end_time: impl Into<String>,
        result: DriveResult,
        possession: Option<String>,
    ) -> ClosedDrive {
        ClosedDrive {
            id: self.id,
            sequence: self.sequence,
            side: self.side,
            team_name: self.team_name,
            start_yard_line: self.start_yard_line,
            current_yard_line: self.current_yard_line,
            start_time: self.start_time,
            end_time: end_time.into(),
            result,
            possession,
            plays: self.plays,
        }
    }
}

/// A finished possession in the committed history. Result and end time
/// are always present; possession stays `None` when either clock string
/// failed to parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosedDrive {
    pub id: Uuid,
    pub sequence: u32,
    pub side: TeamSide,
    pub team_name: String,
    pub start_yard_line: i32,
    pub current_yard_line: i32,
    pub start_time: String,
    pub end_time: String,
    pub result: DriveResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possession: Option<String>,
    pub plays: Vec<Play>,
}

impl ClosedDrive {
    pub fn total_yards(&self) -> i32 {
        self.plays.iter().map(|p| p.yards).sum()
    }

    pub fn first_downs(&self) -> usize {
        self.plays.iter().filter(|p| p.is_first_down).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_carries_drive_fields_over() {
        let drive = ActiveDrive::new(3, TeamSide::Away, "Away", 20, "10:00");
        let closed = drive.close("7:12", DriveResult::Punt, Some("2:48".to_string()));

        assert_eq!(closed.sequence, 3);
        assert_eq!(closed.side, TeamSide::Away);
        assert_eq!(closed.start_yard_line, 20);
        assert_eq!(closed.current_yard_line, 20);
        assert_eq!(closed.end_time, "7:12");
        assert_eq!(closed.result, DriveResult::Punt);
        assert_eq!(closed.possession.as_deref(), Some("2:48"));
        assert!(closed.plays.is_empty());
    }

    #[test]
    fn test_result_labels() {
        assert_eq!(DriveResult::TurnoverOnDowns.label(), "Turnover on Downs");
        assert_eq!(DriveResult::EndOfHalf.label(), "End of Half");
        assert_eq!(DriveResult::ALL.len(), 7);
    }
}
