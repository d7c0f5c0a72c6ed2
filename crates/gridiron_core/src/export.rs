//! Flat CSV export of the full game state.
//!
//! A sectioned report: team scores, player scoring, drives, then every
//! play. Only the free-text play description is quoted; embedded quote
//! characters are not escaped, a known limitation of the format.

use crate::models::{ClosedDrive, PerSide, PlayerScore, Score, TeamSide};
use std::collections::BTreeMap;

/// Flatten scores, player scoring lines, and the committed drive
/// history into the CSV report. Pure and deterministic: player rows are
/// grouped home-then-away and ordered by jersey number, drives and
/// plays by sequence.
pub fn export_csv(
    scores: &PerSide<Score>,
    player_scores: &PerSide<BTreeMap<u8, PlayerScore>>,
    drives: &[ClosedDrive],
) -> String {
    let mut csv = String::from("Game Statistics\n");

    csv.push_str("\nTeam Scores\n");
    csv.push_str("Team,Total,Touchdowns,Field Goals,Extra Points,Two-Point Conversions,Safeties\n");
    for side in [TeamSide::Home, TeamSide::Away] {
        let score = &scores[side];
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            side.label(),
            score.points,
            score.touchdowns,
            score.field_goals,
            score.extra_points,
            score.two_point_conversions,
            score.safeties
        ));
    }

    csv.push_str("\nPlayer Scoring\n");
    csv.push_str(
        "Team,Player Number,Player Name,Touchdowns,Field Goals,Extra Points,Two-Point Conversions,Safeties,Total Points\n",
    );
    for side in [TeamSide::Home, TeamSide::Away] {
        for line in player_scores[side].values() {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{}\n",
                side.label(),
                line.player.number,
                line.player.name,
                line.touchdowns,
                line.field_goals,
                line.extra_points,
                line.two_point_conversions,
                line.safeties,
                line.total_points()
            ));
        }
    }

    csv.push_str("\nDrives\n");
    csv.push_str(
        "Drive Number,Team,Start Yard Line,Start Time,End Time,Result,Plays,Total Yards,First Downs,Possession\n",
    );
    for drive in drives {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{}\n",
            drive.sequence,
            drive.team_name,
            drive.start_yard_line,
            drive.start_time,
            drive.end_time,
            drive.result.label(),
            drive.plays.len(),
            drive.total_yards(),
            drive.first_downs(),
            drive.possession.as_deref().unwrap_or("")
        ));
    }

    csv.push_str("\nPlays\n");
    csv.push_str("Drive Number,Play Number,Type,Description,Yards,First Down,Scoring\n");
    for drive in drives {
        for play in &drive.plays {
            csv.push_str(&format!(
                "{},{},{},\"{}\",{},{},{}\n",
                drive.sequence,
                play.sequence,
                play.play_type.label(),
                play.description,
                play.yards,
                yes_no(play.is_first_down),
                yes_no(play.is_scoring)
            ));
        }
    }

    csv
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DriveResult, PlayType, PlayUpdate, ScoreType};
    use crate::session::GameSession;

    // Golden output for a short scripted game.
    #[test]
    fn test_export_golden() {
        let mut session = GameSession::default();
        session.select_team(TeamSide::Home);
        session.start_drive(25, "15:00");

        let runner = session.team(TeamSide::Home).find_player(22).expect("runner").clone();
        session.set_play_type(PlayType::Run);
        session.update_pending_play(PlayUpdate::runner(&runner));
        session.update_pending_play(PlayUpdate::yards(12));
        session.commit_play().expect("play commits");

        session.add_score(ScoreType::Touchdown, &runner);
        session.end_drive("12:34", DriveResult::Touchdown);

        let csv = session.export_csv();
        let expected = "\
Game Statistics

Team Scores
Team,Total,Touchdowns,Field Goals,Extra Points,Two-Point Conversions,Safeties
Home,12,2,0,0,0,0
Away,0,0,0,0,0,0

Player Scoring
Team,Player Number,Player Name,Touchdowns,Field Goals,Extra Points,Two-Point Conversions,Safeties,Total Points
Home,22,Williams,1,0,0,0,0,6

Drives
Drive Number,Team,Start Yard Line,Start Time,End Time,Result,Plays,Total Yards,First Downs,Possession
1,Home,25,15:00,12:34,Touchdown,2,12,1,2:26

Plays
Drive Number,Play Number,Type,Description,Yards,First Down,Scoring
1,1,Run,\"1st & 10: Run #22 Williams, 12 yards (FIRST DOWN)\",12,Yes,No
1,2,Scoring,\"TOUCHDOWN: #22 Williams (6 pts)\",0,No,Yes
";
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_export_empty_game() {
        let csv = export_csv(&PerSide::default(), &PerSide::default(), &[]);
        assert!(csv.starts_with("Game Statistics\n"));
        assert!(csv.contains("\nTeam Scores\n"));
        assert!(csv.contains("Home,0,0,0,0,0,0\n"));
        assert!(csv.contains("Away,0,0,0,0,0,0\n"));
        assert!(csv.contains("\nDrives\n"));
        assert!(csv.ends_with("Drive Number,Play Number,Type,Description,Yards,First Down,Scoring\n"));
    }

    #[test]
    fn test_missing_possession_exports_empty_field() {
        let mut session = GameSession::default();
        session.select_team(TeamSide::Away);
        session.start_drive(30, "8:00");
        session.end_drive("bad clock", DriveResult::Punt);

        let csv = session.export_csv();
        assert!(csv.contains("1,Away,30,8:00,bad clock,Punt,0,0,0,\n"));
    }
}
