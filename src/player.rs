//! Player state record.
//!
//! A passive data holder created once at bootstrap and owned by the host. The
//! session loop does not read or write it yet.

use crate::error::{MatcherError, Result};
use chrono::{DateTime, Utc};

/// Matchmaking/game state of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerStatus {
    #[default]
    Idle,
    Searching,
    InRoom,
    Playing,
}

/// Snapshot of a single player's session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub player_id: String,
    pub current_room_id: String,
    pub status: PlayerStatus,
    /// None if the player never joined `current_room_id`
    pub room_join_time: Option<DateTime<Utc>>,
}

impl PlayerState {
    /// Create an idle player that has not joined its room yet.
    ///
    /// Both identifiers must be non-empty after trimming.
    pub fn new(player_id: impl Into<String>, current_room_id: impl Into<String>) -> Result<Self> {
        let player_id = player_id.into();
        let current_room_id = current_room_id.into();

        if player_id.trim().is_empty() {
            return Err(MatcherError::invalid_argument("player id must not be empty"));
        }
        if current_room_id.trim().is_empty() {
            return Err(MatcherError::invalid_argument("room id must not be empty"));
        }

        Ok(Self {
            player_id,
            current_room_id,
            status: PlayerStatus::default(),
            room_join_time: None,
        })
    }
}
