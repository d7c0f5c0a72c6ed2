use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A roster entry. Immutable once created; a player belongs to exactly
/// one team roster for the duration of a game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: Uuid,
    /// Jersey number, the key used for scoring lookups.
    pub number: u8,
    pub name: String,
    pub position: Position,
}

impl Player {
    pub fn new(number: u8, name: impl Into<String>, position: Position) -> Self {
        Self { id: Uuid::new_v4(), number, name: name.into(), position }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    QB,
    RB,
    FB,
    WR,
    TE,
    K,
}

impl Position {
    pub fn is_quarterback(&self) -> bool {
        matches!(self, Position::QB)
    }

    pub fn is_runner(&self) -> bool {
        matches!(self, Position::RB | Position::FB)
    }

    pub fn is_receiver(&self) -> bool {
        matches!(self, Position::WR | Position::TE)
    }

    pub fn is_kicker(&self) -> bool {
        matches!(self, Position::K)
    }

    /// Offensive skill players: everyone on the roster except kickers.
    pub fn is_skill_player(&self) -> bool {
        !self.is_kicker()
    }
}

/// Participant snapshot embedded in play and scoring records, so a
/// record stays readable even if rosters are later replaced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerRef {
    pub number: u8,
    pub name: String,
}

impl From<&Player> for PlayerRef {
    fn from(player: &Player) -> Self {
        Self { number: player.number, name: player.name.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_roles() {
        assert!(Position::QB.is_quarterback());
        assert!(Position::RB.is_runner());
        assert!(Position::FB.is_runner());
        assert!(Position::WR.is_receiver());
        assert!(Position::TE.is_receiver());
        assert!(Position::K.is_kicker());
        assert!(!Position::K.is_skill_player());
        assert!(Position::TE.is_skill_player());
    }

    #[test]
    fn test_player_ref_snapshot() {
        let player = Player::new(12, "Brady", Position::QB);
        let snapshot = PlayerRef::from(&player);
        assert_eq!(snapshot.number, 12);
        assert_eq!(snapshot.name, "Brady");
    }
}
