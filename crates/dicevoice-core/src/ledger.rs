//! Score ledger with undo/redo.
//!
//! Each mutation clones the live registry, edits the clone and commits it.
//! A failed edit returns before the commit, so history only ever grows by
//! complete states.

use crate::error::{LedgerError, Result};
use crate::history::History;
use crate::registry::{Player, PlayerRegistry};
use crate::vocabulary::Combination;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ScoreLedger {
    history: History<PlayerRegistry>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &PlayerRegistry {
        self.history.current()
    }

    pub fn players(&self) -> &[Player] {
        self.registry().players()
    }

    pub fn add_player(&mut self, name: &str) -> Result<()> {
        let mut next = self.registry().clone();
        let added = next.add(name)?.name().to_string();
        self.history.commit(next);
        info!(player = %added, "player added");
        Ok(())
    }

    /// Record `points` for a player's combination, replacing any earlier value.
    pub fn apply_score(
        &mut self,
        player: &str,
        combination: Combination,
        points: i32,
    ) -> Result<()> {
        let mut next = self.registry().clone();
        let row = next
            .get_mut(player)
            .ok_or_else(|| LedgerError::UnknownPlayer(player.to_string()))?;
        row.set_score(combination, points);
        self.history.commit(next);
        info!(player, combination = combination.key(), points, "score recorded");
        Ok(())
    }

    /// Clear every score while keeping the players.
    pub fn reset_scores(&mut self) {
        let mut next = self.registry().clone();
        for player in next.players_mut() {
            player.clear_scores();
        }
        self.history.commit(next);
        info!("scores reset");
    }

    /// Drop all players and all history. Not undoable.
    pub fn new_game(&mut self) {
        self.history.reset(PlayerRegistry::new());
        info!("new game started");
    }

    /// Forget undo/redo history without touching the live state.
    pub fn clear_history(&mut self) {
        self.history.forget();
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn total(&self, player: &str) -> Option<i64> {
        self.registry().get(player).map(Player::total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(names: &[&str]) -> ScoreLedger {
        let mut ledger = ScoreLedger::new();
        for name in names {
            ledger.add_player(name).unwrap();
        }
        ledger
    }

    #[test]
    fn test_add_player_is_undoable() {
        let mut ledger = ledger_with(&["Дима"]);
        assert_eq!(ledger.undo_depth(), 1);
        assert!(ledger.undo());
        assert!(ledger.players().is_empty());
        assert!(ledger.redo());
        assert_eq!(ledger.players()[0].name(), "Дима");
    }

    #[test]
    fn test_duplicate_add_leaves_history_untouched() {
        let mut ledger = ledger_with(&["Анна"]);
        let err = ledger.add_player("анна").unwrap_err();
        assert_eq!(err, LedgerError::DuplicatePlayer("анна".to_string()));
        assert_eq!(ledger.players().len(), 1);
        assert_eq!(ledger.undo_depth(), 1);
    }

    #[test]
    fn test_apply_score_overwrites() {
        let mut ledger = ledger_with(&["Дима"]);
        ledger.apply_score("Дима", Combination::Ones, 3).unwrap();
        ledger.apply_score("Дима", Combination::Ones, 5).unwrap();
        assert_eq!(ledger.players()[0].score(Combination::Ones), Some(5));
        assert_eq!(ledger.total("Дима"), Some(5));
    }

    #[test]
    fn test_apply_score_unknown_player() {
        let mut ledger = ledger_with(&["Дима"]);
        let err = ledger.apply_score("Вася", Combination::Ones, 3).unwrap_err();
        assert_eq!(err, LedgerError::UnknownPlayer("Вася".to_string()));
        assert_eq!(ledger.undo_depth(), 1);
    }

    #[test]
    fn test_undo_does_not_leak_into_snapshots() {
        let mut ledger = ledger_with(&["Дима"]);
        ledger.apply_score("Дима", Combination::Poker, 50).unwrap();
        ledger.apply_score("Дима", Combination::Poker, 60).unwrap();

        assert!(ledger.undo());
        assert_eq!(ledger.players()[0].score(Combination::Poker), Some(50));
        assert!(ledger.undo());
        assert_eq!(ledger.players()[0].score(Combination::Poker), None);
        assert!(ledger.redo());
        assert!(ledger.redo());
        assert_eq!(ledger.players()[0].score(Combination::Poker), Some(60));
    }

    #[test]
    fn test_reset_scores_keeps_players() {
        let mut ledger = ledger_with(&["Дима", "Андрей"]);
        ledger.apply_score("Дима", Combination::Sixes, 24).unwrap();
        ledger.apply_score("Андрей", Combination::FullHouse, 30).unwrap();
        ledger.reset_scores();

        assert_eq!(ledger.players().len(), 2);
        for player in ledger.players() {
            assert_eq!(ledger.total(player.name()), Some(0));
        }
        assert!(ledger.undo());
        assert_eq!(ledger.total("Андрей"), Some(30));
    }

    #[test]
    fn test_new_game_clears_everything() {
        let mut ledger = ledger_with(&["Дима"]);
        ledger.apply_score("Дима", Combination::Any, 17).unwrap();
        ledger.undo();
        ledger.new_game();

        assert!(ledger.players().is_empty());
        assert_eq!(ledger.undo_depth(), 0);
        assert_eq!(ledger.redo_depth(), 0);
        assert!(!ledger.undo());
        assert!(!ledger.redo());
    }

    #[test]
    fn test_mutation_after_undo_clears_redo() {
        let mut ledger = ledger_with(&["Дима"]);
        ledger.apply_score("Дима", Combination::Twos, 4).unwrap();
        ledger.undo();
        assert_eq!(ledger.redo_depth(), 1);
        ledger.apply_score("Дима", Combination::Twos, 6).unwrap();
        assert_eq!(ledger.redo_depth(), 0);
    }

    #[test]
    fn test_history_round_trip() {
        let mut ledger = ledger_with(&["Дима"]);
        let before = ledger.registry().clone();

        ledger.add_player("Андрей").unwrap();
        ledger.apply_score("Андрей", Combination::FourOfAKind, 25).unwrap();
        ledger.apply_score("Дима", Combination::Threes, 9).unwrap();
        ledger.reset_scores();
        let after = ledger.registry().clone();

        for _ in 0..4 {
            assert!(ledger.undo());
        }
        assert_eq!(ledger.registry(), &before);

        for _ in 0..4 {
            assert!(ledger.redo());
        }
        assert_eq!(ledger.registry(), &after);
    }
}
