//! Puzzle catalog
//!
//! Categories, "choose for me" selections and uniform random puzzle generation
//! over the embedded content.

pub mod embedded;

use crate::core::{DifficultyError, DifficultyTable, PuzzleContent, PuzzleError};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Keyword accepted wherever a category or difficulty can be left to chance
pub const RANDOM_KEYWORD: &str = "random";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("invalid difficulty '{input}', expected 1 to {max} or 'random'")]
    InvalidDifficulty { input: String, max: usize },
    #[error("category {0} has no puzzles")]
    EmptyCategory(Category),
    #[error("invalid {category} puzzle: {source}")]
    InvalidEntry {
        category: Category,
        source: PuzzleError,
    },
    #[error(transparent)]
    Difficulty(#[from] DifficultyError),
}

/// Word category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Animals,
    Fruits,
    Nature,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Animals, Self::Fruits, Self::Nature];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Animals => "animals",
            Self::Fruits => "fruits",
            Self::Nature => "nature",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.name() == wanted)
            .ok_or_else(|| CatalogError::UnknownCategory(s.trim().to_string()))
    }
}

/// A concrete selection, or a request to pick one at random
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    Random,
    Fixed(T),
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str(RANDOM_KEYWORD),
            Self::Fixed(value) => value.fmt(f),
        }
    }
}

impl FromStr for Choice<Category> {
    type Err = CatalogError;

    /// Case-insensitive category name or `random`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(RANDOM_KEYWORD) {
            return Ok(Self::Random);
        }
        s.parse().map(Self::Fixed)
    }
}

/// Parse a difficulty selection: a level of `table` or `random`
///
/// # Errors
/// Returns `CatalogError::InvalidDifficulty` for anything else.
///
/// # Examples
/// ```
/// use hangman::catalog::{Choice, parse_difficulty};
/// use hangman::core::DifficultyTable;
///
/// let table = DifficultyTable::STANDARD;
/// assert_eq!(parse_difficulty("3", table), Ok(Choice::Fixed(3)));
/// assert_eq!(parse_difficulty("RanDoM", table), Ok(Choice::Random));
/// assert!(parse_difficulty("-10", table).is_err());
/// ```
pub fn parse_difficulty(
    input: &str,
    table: DifficultyTable,
) -> Result<Choice<usize>, CatalogError> {
    let trimmed = input.trim();

    if trimmed.eq_ignore_ascii_case(RANDOM_KEYWORD) {
        return Ok(Choice::Random);
    }

    let invalid = || CatalogError::InvalidDifficulty {
        input: trimmed.to_string(),
        max: table.max_difficulty(),
    };

    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let level: usize = trimmed.parse().map_err(|_| invalid())?;
    table.validate(level).map(Choice::Fixed).map_err(|_| invalid())
}

/// A puzzle drawn from the catalog with its resolved selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    pub category: Category,
    pub difficulty: usize,
    pub puzzle: PuzzleContent,
}

/// Puzzles grouped by category
#[derive(Debug, Clone)]
pub struct Catalog {
    puzzles: FxHashMap<Category, Vec<PuzzleContent>>,
}

impl Catalog {
    /// The built-in catalog
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidEntry` if an embedded word is malformed.
    pub fn embedded() -> Result<Self, CatalogError> {
        let entries = [
            (Category::Animals, embedded::ANIMALS),
            (Category::Fruits, embedded::FRUITS),
            (Category::Nature, embedded::NATURE),
        ];

        Self::from_entries(entries.into_iter().flat_map(|(category, list)| {
            list.iter().map(move |&(word, hint)| (category, word, hint))
        }))
    }

    /// Build a catalog from `(category, word, hint)` entries
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidEntry` for the first malformed word.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (Category, &'a str, &'a str)>,
    ) -> Result<Self, CatalogError> {
        let mut puzzles: FxHashMap<Category, Vec<PuzzleContent>> = FxHashMap::default();

        for (category, word, hint) in entries {
            let puzzle = PuzzleContent::new(word, hint)
                .map_err(|source| CatalogError::InvalidEntry { category, source })?;
            puzzles.entry(category).or_default().push(puzzle);
        }

        Ok(Self { puzzles })
    }

    /// Puzzles of one category, empty if it has none
    pub fn puzzles(&self, category: Category) -> &[PuzzleContent] {
        self.puzzles
            .get(&category)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Every puzzle with its category, in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &PuzzleContent)> {
        Category::ALL.into_iter().flat_map(move |category| {
            self.puzzles(category)
                .iter()
                .map(move |puzzle| (category, puzzle))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve the selections and draw a puzzle uniformly from the category
    ///
    /// `Random` category and difficulty choices are resolved uniformly over
    /// every category and every level of `table`.
    ///
    /// # Errors
    /// Returns `CatalogError` if a fixed difficulty is not a level of `table`
    /// or the resolved category has no puzzles.
    pub fn generate<R: Rng>(
        &self,
        category: Choice<Category>,
        difficulty: Choice<usize>,
        table: DifficultyTable,
        rng: &mut R,
    ) -> Result<GeneratedPuzzle, CatalogError> {
        let category = match category {
            Choice::Fixed(category) => category,
            Choice::Random => *Category::ALL
                .choose(rng)
                .ok_or_else(|| CatalogError::UnknownCategory(RANDOM_KEYWORD.to_string()))?,
        };

        let difficulty = match difficulty {
            Choice::Fixed(level) => table.validate(level)?,
            Choice::Random => rng.random_range(1..=table.max_difficulty()),
        };

        let puzzle = self
            .puzzles(category)
            .choose(rng)
            .cloned()
            .ok_or(CatalogError::EmptyCategory(category))?;

        debug!(%category, difficulty, "puzzle generated");

        Ok(GeneratedPuzzle {
            category,
            difficulty,
            puzzle,
        })
    }
}
