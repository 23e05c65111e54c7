//! Ordered collection of players and their score rows.

use crate::error::{LedgerError, Result};
use crate::normalize::{normalize, tokenize};
use crate::vocabulary::Combination;
use serde::Serialize;

/// A player and one score slot per combination.
///
/// Scores live in a fixed array owned by the player, so cloning a player
/// never shares storage with the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    scores: [Option<i32>; Combination::COUNT],
}

impl Player {
    fn new(name: String) -> Self {
        Self {
            name,
            scores: [None; Combination::COUNT],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self, combination: Combination) -> Option<i32> {
        self.scores[combination.index()]
    }

    /// Scores in [`Combination::ALL`] order.
    pub fn scores(&self) -> impl Iterator<Item = (Combination, Option<i32>)> + '_ {
        Combination::ALL
            .into_iter()
            .map(move |combination| (combination, self.score(combination)))
    }

    /// Sum of recorded scores; missing entries count as zero.
    pub fn total(&self) -> i64 {
        self.scores.iter().flatten().map(|&points| i64::from(points)).sum()
    }

    /// Normalized tokens of the player's name, as matched against transcripts.
    pub fn name_tokens(&self) -> Vec<String> {
        tokenize(&self.name)
    }

    pub(crate) fn set_score(&mut self, combination: Combination, points: i32) {
        self.scores[combination.index()] = Some(points);
    }

    pub(crate) fn clear_scores(&mut self) {
        self.scores = [None; Combination::COUNT];
    }

    /// Two names are the same when they normalize to the same tokens.
    fn same_name(&self, other: &str) -> bool {
        normalize(&self.name) == normalize(other)
    }
}

/// Players in insertion order. Order is the display order and the tie-break
/// order when two names match a transcript equally well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Lookup by name, compared in normalized form.
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.same_name(name))
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.same_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Append a player with an empty score row.
    ///
    /// The name is trimmed. Names with no matchable tokens are rejected, as
    /// are names that normalize to the same tokens as an existing player.
    pub fn add(&mut self, name: &str) -> Result<&Player> {
        let name = name.trim();
        if tokenize(name).is_empty() {
            return Err(LedgerError::EmptyPlayerName);
        }
        if self.contains(name) {
            return Err(LedgerError::DuplicatePlayer(name.to_string()));
        }
        self.players.push(Player::new(name.to_string()));
        Ok(&self.players[self.players.len() - 1])
    }

    pub(crate) fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }
}
