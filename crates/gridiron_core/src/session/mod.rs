//! Live game state and the engines that mutate it.
//!
//! `GameSession` owns every piece of mutable game state: the two
//! rosters, team and player scores, the committed drive history, the
//! active drive, and the down-and-distance cursor. All mutation goes
//! through the methods here and in the submodules; an operation whose
//! precondition is unmet (no active drive, no team selected) is
//! rejected synchronously as a no-op.

mod drives;
mod plays;
mod scoring;

use crate::export::export_csv;
use crate::models::{
    ActiveDrive, ClosedDrive, PendingPlay, PerSide, PlayType, PlayerScore, Score, Team, TeamSide,
};
use crate::save::{GameDocument, TeamsDocument};
use crate::stats::{compute_stats, TeamStats};
use chrono::Utc;
use std::collections::BTreeMap;

/// Down-and-distance cursor for the active drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownState {
    /// Current down, 1 through 4.
    pub down: u8,
    pub yards_to_go: u32,
}

impl DownState {
    pub const FIRST_AND_TEN: DownState = DownState { down: 1, yards_to_go: 10 };

    /// Whether a gain of `yards` covers the remaining distance.
    pub fn is_first_down(&self, yards: i32) -> bool {
        yards >= self.yards_to_go as i32
    }

    /// Advance after a play of `yards`: a gain covering the distance
    /// resets to 1st & 10; otherwise the down increments (4 wraps to 1)
    /// and the distance shrinks by the gain, floored at zero. A loss
    /// stretches the distance.
    pub fn advance(&mut self, yards: i32) -> bool {
        let first_down = self.is_first_down(yards);
        if first_down {
            *self = DownState::FIRST_AND_TEN;
        } else {
            self.down = if self.down < 4 { self.down + 1 } else { 1 };
            self.yards_to_go = (self.yards_to_go as i32 - yards).max(0) as u32;
        }
        first_down
    }
}

impl Default for DownState {
    fn default() -> Self {
        DownState::FIRST_AND_TEN
    }
}

/// The state-owning aggregate for one game. Single-threaded and
/// synchronous; callers invoke one operation at a time.
#[derive(Debug, Clone)]
pub struct GameSession {
    teams: PerSide<Team>,
    scores: PerSide<Score>,
    player_scores: PerSide<BTreeMap<u8, PlayerScore>>,
    drives: Vec<ClosedDrive>,
    active_drive: Option<ActiveDrive>,
    possession: Option<TeamSide>,
    down_state: DownState,
    play_type: PlayType,
    pending_play: PendingPlay,
}

impl GameSession {
    /// Start a fresh session with the given rosters.
    pub fn new(home: Team, away: Team) -> Self {
        Self {
            teams: PerSide::new(home, away),
            scores: PerSide::default(),
            player_scores: PerSide::default(),
            drives: Vec::new(),
            active_drive: None,
            possession: None,
            down_state: DownState::FIRST_AND_TEN,
            play_type: PlayType::Run,
            pending_play: PendingPlay::default(),
        }
    }

    // ========================
    // Read access
    // ========================

    pub fn team(&self, side: TeamSide) -> &Team {
        &self.teams[side]
    }

    pub fn teams(&self) -> &PerSide<Team> {
        &self.teams
    }

    pub fn score(&self, side: TeamSide) -> &Score {
        &self.scores[side]
    }

    pub fn scores(&self) -> &PerSide<Score> {
        &self.scores
    }

    pub fn player_scores(&self) -> &PerSide<BTreeMap<u8, PlayerScore>> {
        &self.player_scores
    }

    /// Committed drive history, oldest first.
    pub fn drives(&self) -> &[ClosedDrive] {
        &self.drives
    }

    pub fn active_drive(&self) -> Option<&ActiveDrive> {
        self.active_drive.as_ref()
    }

    /// The offense selected for the next (or current) drive.
    pub fn possession(&self) -> Option<TeamSide> {
        self.possession
    }

    pub fn down_state(&self) -> DownState {
        self.down_state
    }

    pub fn play_type(&self) -> PlayType {
        self.play_type
    }

    pub fn pending_play(&self) -> &PendingPlay {
        &self.pending_play
    }

    // ========================
    // Team selection
    // ========================

    /// Pick the offense for the next drive. Ignored while a drive is
    /// underway.
    pub fn select_team(&mut self, side: TeamSide) -> bool {
        if self.active_drive.is_some() {
            return false;
        }
        self.possession = Some(side);
        true
    }

    // ========================
    // Derivations
    // ========================

    /// Re-derive yardage statistics from the committed history.
    pub fn stats(&self) -> PerSide<TeamStats> {
        compute_stats(&self.drives)
    }

    /// Flatten the committed game state into the CSV report.
    pub fn export_csv(&self) -> String {
        export_csv(&self.scores, &self.player_scores, &self.drives)
    }

    // ========================
    // Persistence conversion
    // ========================

    /// Snapshot the committed game state as a persistence document.
    pub fn to_game_document(&self) -> GameDocument {
        GameDocument {
            drives: self.drives.clone(),
            home_score: self.scores.home.clone(),
            away_score: self.scores.away.clone(),
            player_scores: self.player_scores.clone(),
            last_updated: Utc::now(),
        }
    }

    pub fn to_teams_document(&self) -> TeamsDocument {
        TeamsDocument {
            home_team: self.teams.home.clone(),
            away_team: self.teams.away.clone(),
            last_updated: Utc::now(),
        }
    }

    /// Rebuild a session from loaded documents. Only committed state is
    /// persisted, so the restored session has no active drive, no
    /// selected offense, and a fresh down-and-distance cursor.
    pub fn restore(game: GameDocument, teams: TeamsDocument) -> Self {
        Self {
            teams: PerSide::new(teams.home_team, teams.away_team),
            scores: PerSide::new(game.home_score, game.away_score),
            player_scores: game.player_scores,
            drives: game.drives,
            active_drive: None,
            possession: None,
            down_state: DownState::FIRST_AND_TEN,
            play_type: PlayType::Run,
            pending_play: PendingPlay::default(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Team::default_home(), Team::default_away())
    }
}
