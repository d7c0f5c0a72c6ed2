pub mod drive;
pub mod play;
pub mod player;
pub mod score;
pub mod team;

pub use drive::{ActiveDrive, ClosedDrive, DriveResult};
pub use play::{PendingPlay, Play, PlayType, PlayUpdate};
pub use player::{Player, PlayerRef, Position};
pub use score::{PlayerScore, Score, ScoreType};
pub use team::{PerSide, Team, TeamSide};
