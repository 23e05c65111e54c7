//! Read-only view of the game handed to the presentation layer.

use crate::registry::Player;
use crate::resolver::ResolvedCommand;
use crate::vocabulary::Combination;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCell {
    pub combination: Combination,
    pub label: &'static str,
    pub points: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRow {
    pub name: String,
    pub scores: Vec<ScoreCell>,
    pub total: i64,
}

impl From<&Player> for PlayerRow {
    fn from(player: &Player) -> Self {
        let scores = player
            .scores()
            .map(|(combination, points)| ScoreCell {
                combination,
                label: combination.label(),
                points,
            })
            .collect();
        Self {
            name: player.name().to_string(),
            scores,
            total: player.total(),
        }
    }
}

/// Snapshot of everything a front end renders after a committed change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSheet {
    pub players: Vec<PlayerRow>,
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub last_raw: Option<String>,
    pub last_resolved: Option<ResolvedCommand>,
    pub listening: bool,
    pub notice: Option<String>,
}

impl ScoreSheet {
    pub fn can_undo(&self) -> bool {
        self.undo_depth > 0
    }

    pub fn can_redo(&self) -> bool {
        self.redo_depth > 0
    }

    pub fn player(&self, name: &str) -> Option<&PlayerRow> {
        let wanted = name.to_lowercase();
        self.players
            .iter()
            .find(|row| row.name.to_lowercase() == wanted)
    }
}
