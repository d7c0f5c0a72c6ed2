// Persistence collaborator: two JSON documents with atomic writes.

pub mod documents;
pub mod error;
pub mod manager;

pub use documents::{GameDocument, TeamsDocument};
pub use error::SaveError;
pub use manager::{SaveManager, GAME_FILE, TEAMS_FILE};
