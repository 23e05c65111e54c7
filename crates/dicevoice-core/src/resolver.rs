//! Transcript resolution: `<player> <combination> <points>`.
//!
//! Resolution is three prefix-matching stages over one token stream. Each
//! stage consumes the tokens it matched and hands the rest to the next one;
//! the first stage that fails ends resolution with no result.

use crate::matcher::longest_match;
use crate::registry::PlayerRegistry;
use crate::vocabulary::{Combination, Vocabulary};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A fully resolved scoring command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCommand {
    /// Player name as registered
    pub player: String,
    pub combination: Combination,
    pub points: i32,
}

impl fmt::Display for ResolvedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.player, self.combination, self.points)
    }
}

/// Resolve normalized tokens against the registered players and vocabulary.
pub fn resolve<T: AsRef<str>>(
    tokens: &[T],
    registry: &PlayerRegistry,
    vocabulary: &Vocabulary,
) -> Option<ResolvedCommand> {
    let candidates = registry
        .players()
        .iter()
        .map(|player| (player, player.name_tokens()));
    let Some((player, consumed)) = longest_match(tokens, candidates) else {
        debug!("no player name matched");
        return None;
    };
    let rest = &tokens[consumed..];

    let candidates = vocabulary
        .alias_patterns()
        .map(|(combination, pattern)| (combination, pattern.to_vec()));
    let Some((combination, consumed)) = longest_match(rest, candidates) else {
        debug!(player = player.name(), "no combination alias matched");
        return None;
    };
    let rest = &rest[consumed..];

    let Some(points) = rest.first().and_then(|token| parse_points(token.as_ref(), vocabulary))
    else {
        debug!(
            player = player.name(),
            combination = combination.key(),
            "points token missing or not a number"
        );
        return None;
    };

    Some(ResolvedCommand {
        player: player.name().to_string(),
        combination,
        points,
    })
}

/// Parse a single points token: decimal digits first, then number words.
pub fn parse_points(token: &str, vocabulary: &Vocabulary) -> Option<i32> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(points) = token.parse::<i32>() {
            return Some(points);
        }
    }
    vocabulary.number_word(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::tokenize;

    fn registry(names: &[&str]) -> PlayerRegistry {
        let mut registry = PlayerRegistry::new();
        for name in names {
            registry.add(name).unwrap();
        }
        registry
    }

    fn run(text: &str, names: &[&str]) -> Option<ResolvedCommand> {
        resolve(&tokenize(text), &registry(names), &Vocabulary::builtin())
    }

    #[test]
    fn test_resolves_number_combination() {
        let resolved = run("Дима единицы 5", &["Дима"]).unwrap();
        assert_eq!(resolved.player, "Дима");
        assert_eq!(resolved.combination, Combination::Ones);
        assert_eq!(resolved.points, 5);
    }

    #[test]
    fn test_resolves_named_combination() {
        let resolved = run("Андрей каре 25", &["Андрей"]).unwrap();
        assert_eq!(resolved.combination, Combination::FourOfAKind);
        assert_eq!(resolved.points, 25);
        assert_eq!(resolved.to_string(), "Андрей каре 25");
    }

    #[test]
    fn test_multi_token_alias_and_number_word() {
        let resolved = run("дима, фулл-хаус: тридцать!", &["Дима"]).unwrap();
        assert_eq!(resolved.combination, Combination::FullHouse);
        assert_eq!(resolved.points, 30);
    }

    #[test]
    fn test_longest_player_name_wins() {
        let names = ["Анна", "Анна Мария"];
        let resolved = run("Анна Мария покер 50", &names).unwrap();
        assert_eq!(resolved.player, "Анна Мария");

        let resolved = run("Анна покер 50", &names).unwrap();
        assert_eq!(resolved.player, "Анна");
    }

    #[test]
    fn test_longest_player_name_wins_regardless_of_order() {
        let resolved = run("Анна Мария покер 50", &["Анна Мария", "Анна"]).unwrap();
        assert_eq!(resolved.player, "Анна Мария");
    }

    #[test]
    fn test_longest_alias_wins() {
        // "четыре" alone names the fours row
        let resolved = run("Дима четыре одинаковых 20", &["Дима"]).unwrap();
        assert_eq!(resolved.combination, Combination::FourOfAKind);
        assert_eq!(resolved.points, 20);

        let resolved = run("Дима четыре 12", &["Дима"]).unwrap();
        assert_eq!(resolved.combination, Combination::Fours);
    }

    #[test]
    fn test_unknown_player_fails() {
        assert_eq!(run("Вася каре 25", &["Дима", "Андрей"]), None);
    }

    #[test]
    fn test_unknown_combination_fails() {
        assert_eq!(run("Дима зонтик 25", &["Дима"]), None);
    }

    #[test]
    fn test_missing_points_fails() {
        assert_eq!(run("Дима каре", &["Дима"]), None);
    }

    #[test]
    fn test_bad_points_fails() {
        assert_eq!(run("Дима каре много", &["Дима"]), None);
        assert_eq!(run("Дима каре 2x", &["Дима"]), None);
        assert_eq!(run("Дима каре 99999999999", &["Дима"]), None);
    }

    #[test]
    fn test_only_one_points_token_is_read() {
        // compound number phrases are not composed
        let resolved = run("Дима каре двадцать пять", &["Дима"]).unwrap();
        assert_eq!(resolved.points, 20);
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(run("", &["Дима"]), None);
        assert_eq!(run("Дима", &[]), None);
    }

    #[test]
    fn test_parse_points() {
        let vocabulary = Vocabulary::builtin();
        assert_eq!(parse_points("0", &vocabulary), Some(0));
        assert_eq!(parse_points("025", &vocabulary), Some(25));
        assert_eq!(parse_points("+5", &vocabulary), None);
        assert_eq!(parse_points("пять", &vocabulary), Some(5));
        assert_eq!(parse_points("", &vocabulary), None);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let tokens = tokenize("Дима малый стрит 15");
        let players = registry(&["Дима", "Андрей"]);
        let vocabulary = Vocabulary::builtin();
        let first = resolve(&tokens, &players, &vocabulary);
        let second = resolve(&tokens, &players, &vocabulary);
        assert_eq!(first, second);
        assert_eq!(first.unwrap().combination, Combination::SmallStraight);
    }
}
