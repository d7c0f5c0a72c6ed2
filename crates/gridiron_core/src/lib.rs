//! # gridiron_core - American Football Play-by-Play Engine
//!
//! This library tracks a live American-football game one play at a
//! time: possession, downs, drives, and scoring, with derived team
//! statistics and a flat CSV export for sharing.
//!
//! ## Features
//! - Drive/down/distance state machine with first-down handling
//! - Team and per-player scoring with a maintained points invariant
//! - Pure statistics aggregation over the committed history
//! - JSON persistence documents with atomic file writes
//! - Deterministic sectioned CSV export

pub mod clock;
pub mod export;
pub mod models;
pub mod save;
pub mod session;
pub mod stats;

pub use export::export_csv;
pub use models::{
    ActiveDrive, ClosedDrive, DriveResult, PendingPlay, PerSide, Play, PlayType, PlayUpdate,
    Player, PlayerRef, PlayerScore, Position, Score, ScoreType, Team, TeamSide,
};
pub use save::{GameDocument, SaveError, SaveManager, TeamsDocument};
pub use session::{DownState, GameSession};
pub use stats::{compute_stats, TeamStats};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
