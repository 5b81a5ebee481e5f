pub mod leveling;
pub mod models;

pub use leveling::{LevelProgress, level_for_xp};
pub use models::*;
