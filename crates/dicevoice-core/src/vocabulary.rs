//! Static vocabulary: scoring combinations, their spoken aliases and number words.

use crate::normalize::tokenize;
use dicevoice_config::{ConfigError, VocabularyConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// One row of the dice-poker score sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combination {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Poker,
    Any,
}

impl Combination {
    pub const COUNT: usize = 12;

    /// All combinations in score-sheet order. This order is also the
    /// tie-break order when two aliases match the same number of tokens.
    pub const ALL: [Combination; Combination::COUNT] = [
        Combination::Ones,
        Combination::Twos,
        Combination::Threes,
        Combination::Fours,
        Combination::Fives,
        Combination::Sixes,
        Combination::FourOfAKind,
        Combination::FullHouse,
        Combination::SmallStraight,
        Combination::LargeStraight,
        Combination::Poker,
        Combination::Any,
    ];

    /// Position in [`Combination::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Label shown on the score sheet.
    pub fn label(self) -> &'static str {
        match self {
            Combination::Ones => "1",
            Combination::Twos => "2",
            Combination::Threes => "3",
            Combination::Fours => "4",
            Combination::Fives => "5",
            Combination::Sixes => "6",
            Combination::FourOfAKind => "каре",
            Combination::FullHouse => "фулл-хаус",
            Combination::SmallStraight => "малый стрит",
            Combination::LargeStraight => "большой стрит",
            Combination::Poker => "покер",
            Combination::Any => "любая",
        }
    }

    /// Stable key used in configuration files and JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Combination::Ones => "ones",
            Combination::Twos => "twos",
            Combination::Threes => "threes",
            Combination::Fours => "fours",
            Combination::Fives => "fives",
            Combination::Sixes => "sixes",
            Combination::FourOfAKind => "four_of_a_kind",
            Combination::FullHouse => "full_house",
            Combination::SmallStraight => "small_straight",
            Combination::LargeStraight => "large_straight",
            Combination::Poker => "poker",
            Combination::Any => "any",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|combination| combination.key() == key)
    }

    fn default_aliases(self) -> &'static [&'static str] {
        match self {
            Combination::Ones => &[
                "1", "единицы", "единица", "единички", "единичка", "единиц", "один",
            ],
            Combination::Twos => &["2", "двойки", "двойка", "двоек", "два"],
            Combination::Threes => &["3", "тройки", "тройка", "троек", "три"],
            Combination::Fours => &[
                "4", "четверки", "четвёрки", "четверка", "четвёрка", "четверок", "четыре",
            ],
            Combination::Fives => &[
                "5", "пятерки", "пятёрки", "пятерка", "пятёрка", "пятерок", "пять",
            ],
            Combination::Sixes => &[
                "6", "шестерки", "шестёрки", "шестерка", "шестёрка", "шестерок", "шесть",
            ],
            Combination::FourOfAKind => &["каре", "карэ", "четыре одинаковых"],
            Combination::FullHouse => &[
                "фулл хаус",
                "фул хаус",
                "фуллхаус",
                "фулхаус",
                "full house",
            ],
            Combination::SmallStraight => &["малый стрит", "маленький стрит", "малый"],
            Combination::LargeStraight => &["большой стрит", "большой"],
            Combination::Poker => &["покер", "пять одинаковых", "яцзы"],
            Combination::Any => &["любая", "любое", "шанс", "сумма"],
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const DEFAULT_NUMBER_WORDS: &[(&str, i32)] = &[
    ("ноль", 0),
    ("нуль", 0),
    ("один", 1),
    ("одна", 1),
    ("одно", 1),
    ("два", 2),
    ("две", 2),
    ("три", 3),
    ("четыре", 4),
    ("пять", 5),
    ("шесть", 6),
    ("семь", 7),
    ("восемь", 8),
    ("девять", 9),
    ("десять", 10),
    ("одиннадцать", 11),
    ("двенадцать", 12),
    ("тринадцать", 13),
    ("четырнадцать", 14),
    ("пятнадцать", 15),
    ("шестнадцать", 16),
    ("семнадцать", 17),
    ("восемнадцать", 18),
    ("девятнадцать", 19),
    ("двадцать", 20),
    ("тридцать", 30),
    ("сорок", 40),
    ("пятьдесят", 50),
    ("шестьдесят", 60),
    ("семьдесят", 70),
    ("восемьдесят", 80),
    ("девяносто", 90),
    ("сто", 100),
];

/// Immutable matching tables. Aliases are tokenized once at construction.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    aliases: Vec<(Combination, Vec<Vec<String>>)>,
    number_words: HashMap<String, i32>,
}

impl Vocabulary {
    /// Built-in Russian vocabulary.
    pub fn builtin() -> Self {
        let aliases = Combination::ALL
            .into_iter()
            .map(|combination| {
                let patterns = combination
                    .default_aliases()
                    .iter()
                    .map(|alias| tokenize(alias))
                    .collect();
                (combination, patterns)
            })
            .collect();

        let number_words = DEFAULT_NUMBER_WORDS
            .iter()
            .map(|(word, value)| (word.to_string(), *value))
            .collect();

        Self {
            aliases,
            number_words,
        }
    }

    /// Built-in vocabulary extended with configured aliases and number words.
    pub fn from_config(config: &VocabularyConfig) -> Result<Self, ConfigError> {
        let mut vocabulary = Self::builtin();

        for (key, extra) in &config.aliases {
            let combination = Combination::from_key(key)
                .ok_or_else(|| ConfigError::UnknownCombination(key.clone()))?;
            let patterns = &mut vocabulary.aliases[combination.index()].1;
            for alias in extra {
                let pattern = tokenize(alias);
                if pattern.is_empty() {
                    return Err(ConfigError::EmptyAlias {
                        combination: key.clone(),
                        alias: alias.clone(),
                    });
                }
                patterns.push(pattern);
            }
        }

        for (word, value) in &config.number_words {
            let mut tokens = tokenize(word);
            if tokens.len() != 1 {
                return Err(ConfigError::InvalidNumberWord(word.clone()));
            }
            vocabulary.number_words.insert(tokens.remove(0), *value);
        }

        debug!(
            aliases = vocabulary.alias_count(),
            number_words = vocabulary.number_words.len(),
            "vocabulary loaded"
        );
        Ok(vocabulary)
    }

    /// Every `(combination, alias tokens)` pair, in enumeration then alias order.
    pub fn alias_patterns(&self) -> impl Iterator<Item = (Combination, &[String])> + '_ {
        self.aliases.iter().flat_map(|(combination, patterns)| {
            patterns
                .iter()
                .map(move |pattern| (*combination, pattern.as_slice()))
        })
    }

    pub fn aliases_for(&self, combination: Combination) -> &[Vec<String>] {
        &self.aliases[combination.index()].1
    }

    /// Value of a normalized single-token number word.
    pub fn number_word(&self, token: &str) -> Option<i32> {
        self.number_words.get(token).copied()
    }

    fn alias_count(&self) -> usize {
        self.aliases.iter().map(|(_, patterns)| patterns.len()).sum()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (position, combination) in Combination::ALL.into_iter().enumerate() {
            assert_eq!(combination.index(), position);
        }
    }

    #[test]
    fn test_key_roundtrip() {
        for combination in Combination::ALL {
            assert_eq!(Combination::from_key(combination.key()), Some(combination));
        }
        assert_eq!(Combination::from_key("yahtzee"), None);
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Combination::FourOfAKind).unwrap();
        assert_eq!(json, "\"four_of_a_kind\"");
    }

    #[test]
    fn test_builtin_aliases_are_normalized() {
        let vocabulary = Vocabulary::builtin();
        let full_house = vocabulary.aliases_for(Combination::FullHouse);
        assert_eq!(full_house[0], vec!["фулл", "хаус"]);
        for (_, pattern) in vocabulary.alias_patterns() {
            assert!(!pattern.is_empty());
        }
    }

    #[test]
    fn test_builtin_number_words() {
        let vocabulary = Vocabulary::builtin();
        assert_eq!(vocabulary.number_word("пять"), Some(5));
        assert_eq!(vocabulary.number_word("двадцать"), Some(20));
        assert_eq!(vocabulary.number_word("пятьсот"), None);
    }

    #[test]
    fn test_config_appends_aliases_after_builtins() {
        let mut config = VocabularyConfig::default();
        config
            .aliases
            .insert("full_house".to_string(), vec!["Хаус".to_string()]);
        let vocabulary = Vocabulary::from_config(&config).unwrap();
        let patterns = vocabulary.aliases_for(Combination::FullHouse);
        assert_eq!(patterns.last().unwrap(), &vec!["хаус".to_string()]);
        assert_eq!(patterns[0], vec!["фулл", "хаус"]);
    }

    #[test]
    fn test_config_number_words_override() {
        let mut config = VocabularyConfig::default();
        config.number_words.insert("Полтинник".to_string(), 50);
        config.number_words.insert("сто".to_string(), 99);
        let vocabulary = Vocabulary::from_config(&config).unwrap();
        assert_eq!(vocabulary.number_word("полтинник"), Some(50));
        assert_eq!(vocabulary.number_word("сто"), Some(99));
    }

    #[test]
    fn test_config_rejects_unknown_combination() {
        let mut config = VocabularyConfig::default();
        config
            .aliases
            .insert("yahtzee".to_string(), vec!["яцзы".to_string()]);
        let err = Vocabulary::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCombination(key) if key == "yahtzee"));
    }

    #[test]
    fn test_config_rejects_multi_token_number_word() {
        let mut config = VocabularyConfig::default();
        config
            .number_words
            .insert("двадцать пять".to_string(), 25);
        let err = Vocabulary::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumberWord(_)));
    }

    #[test]
    fn test_config_rejects_empty_alias() {
        let mut config = VocabularyConfig::default();
        config.aliases.insert("any".to_string(), vec!["--".to_string()]);
        let err = Vocabulary::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyAlias { .. }));
    }
}
