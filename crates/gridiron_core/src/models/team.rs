use super::player::{Player, Position};
use super::score::ScoreType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Which bench a team occupies. Used as the key for every per-team
/// table in the crate instead of "home"/"away" strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn label(&self) -> &'static str {
        match self {
            TeamSide::Home => "Home",
            TeamSide::Away => "Away",
        }
    }

    pub fn opponent(&self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Two-slot container indexed by `TeamSide`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PerSide<T> {
    pub home: T,
    pub away: T,
}

impl<T> PerSide<T> {
    pub fn new(home: T, away: T) -> Self {
        Self { home, away }
    }

    pub fn get(&self, side: TeamSide) -> &T {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn get_mut(&mut self, side: TeamSide) -> &mut T {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }
}

impl<T> Index<TeamSide> for PerSide<T> {
    type Output = T;

    fn index(&self, side: TeamSide) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<TeamSide> for PerSide<T> {
    fn index_mut(&mut self, side: TeamSide) -> &mut T {
        self.get_mut(side)
    }
}

/// A team with its roster partitioned by role. Created at game setup;
/// roster membership does not change while a game is in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    /// Display abbreviation (e.g. "HOME", "KC").
    pub short_name: String,
    pub side: TeamSide,
    /// Hex color strings (e.g. "#00338D"), consumed by presentation only.
    pub primary_color: String,
    pub secondary_color: String,
    pub quarterbacks: Vec<Player>,
    pub receivers: Vec<Player>,
    pub runners: Vec<Player>,
    pub kickers: Vec<Player>,
}

impl Team {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Team name must not be empty".to_string());
        }

        // Jersey numbers key the scoring tables, so they must be unique
        // across the whole roster.
        let mut numbers = HashSet::new();
        for player in self.all_players() {
            if !numbers.insert(player.number) {
                return Err(format!(
                    "Duplicate jersey number {} on team {}",
                    player.number, self.name
                ));
            }
        }

        Ok(())
    }

    pub fn all_players(&self) -> impl Iterator<Item = &Player> {
        self.quarterbacks
            .iter()
            .chain(&self.receivers)
            .chain(&self.runners)
            .chain(&self.kickers)
    }

    pub fn find_player(&self, number: u8) -> Option<&Player> {
        self.all_players().find(|p| p.number == number)
    }

    /// Players a caller should offer for a given scoring event: kickers
    /// for field goals and extra points, skill players for everything
    /// else. Advisory only; the scoring engine accepts any player.
    pub fn eligible_scorers(&self, score_type: ScoreType) -> Vec<&Player> {
        match score_type {
            ScoreType::FieldGoal | ScoreType::ExtraPoint => self.kickers.iter().collect(),
            ScoreType::Touchdown | ScoreType::TwoPointConversion | ScoreType::Safety => self
                .quarterbacks
                .iter()
                .chain(&self.runners)
                .chain(&self.receivers)
                .collect(),
        }
    }

    /// Built-in home roster, handy for demos and tests.
    pub fn default_home() -> Self {
        Self {
            name: "Home".to_string(),
            short_name: "HOME".to_string(),
            side: TeamSide::Home,
            primary_color: "#00338D".to_string(),
            secondary_color: "#FFFFFF".to_string(),
            quarterbacks: vec![
                Player::new(12, "Brady", Position::QB),
                Player::new(7, "Rivers", Position::QB),
            ],
            receivers: vec![
                Player::new(80, "Smith", Position::WR),
                Player::new(88, "Jones", Position::WR),
                Player::new(84, "Brown", Position::TE),
            ],
            runners: vec![
                Player::new(22, "Williams", Position::RB),
                Player::new(26, "Taylor", Position::RB),
                Player::new(30, "Harris", Position::FB),
            ],
            kickers: vec![Player::new(3, "Tucker", Position::K)],
        }
    }

    /// Built-in away roster.
    pub fn default_away() -> Self {
        Self {
            name: "Away".to_string(),
            short_name: "AWAY".to_string(),
            side: TeamSide::Away,
            primary_color: "#C60C30".to_string(),
            secondary_color: "#FFFFFF".to_string(),
            quarterbacks: vec![
                Player::new(9, "Stafford", Position::QB),
                Player::new(5, "Jackson", Position::QB),
            ],
            receivers: vec![
                Player::new(81, "Johnson", Position::WR),
                Player::new(85, "Cooper", Position::WR),
                Player::new(87, "Andrews", Position::TE),
            ],
            runners: vec![
                Player::new(23, "Barkley", Position::RB),
                Player::new(25, "Edwards", Position::RB),
                Player::new(45, "Ricard", Position::FB),
            ],
            kickers: vec![Player::new(4, "Butker", Position::K)],
        }
    }
}
