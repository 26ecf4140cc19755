//! Gallows picture driven by mistakes and difficulty
//!
//! The picture has one stage per mistake allowed at level 1. Harder levels
//! reveal several stages per mistake so the figure is complete exactly when
//! the budget runs out.

use super::{DifficultyError, DifficultyTable};
use std::fmt;
use thiserror::Error;

/// Stage symbols in reveal order: head, body, left arm, right arm, left leg, right leg
pub const STAGE_SYMBOLS: [char; 6] = ['O', '|', '/', '\\', '/', '\\'];

const HIDDEN_STAGE: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error(transparent)]
    Difficulty(#[from] DifficultyError),
    #[error("difficulty table defines {actual} stages but the picture has {expected}")]
    StageCountMismatch { expected: usize, actual: usize },
}

/// Stage visibility for the gallows picture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRenderer {
    table: DifficultyTable,
    stages: [char; STAGE_SYMBOLS.len()],
    revealed_count: usize,
}

impl ProgressRenderer {
    /// Create an empty picture for `table`
    ///
    /// # Errors
    /// Returns `ProgressError::StageCountMismatch` if the level 1 budget of
    /// `table` differs from the number of stage symbols.
    pub fn new(table: DifficultyTable) -> Result<Self, ProgressError> {
        let actual = table.base_budget() as usize;
        if actual != STAGE_SYMBOLS.len() {
            return Err(ProgressError::StageCountMismatch {
                expected: STAGE_SYMBOLS.len(),
                actual,
            });
        }

        Ok(Self {
            table,
            stages: [HIDDEN_STAGE; STAGE_SYMBOLS.len()],
            revealed_count: 0,
        })
    }

    /// Recompute stage visibility from scratch
    ///
    /// Returns the number of visible stages, never more than the stage total.
    ///
    /// # Errors
    /// Returns `ProgressError::Difficulty` if `difficulty` is not a level of the table.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{DifficultyTable, ProgressRenderer};
    ///
    /// let mut gallows = ProgressRenderer::new(DifficultyTable::STANDARD).unwrap();
    /// assert_eq!(gallows.update(1, 1).unwrap(), 1);
    /// assert_eq!(gallows.update(1, 4).unwrap(), 6);
    /// assert!(gallows.update(1, 5).is_err());
    /// ```
    pub fn update(&mut self, mistakes: u32, difficulty: usize) -> Result<usize, ProgressError> {
        let per_mistake = self.table.stages_per_mistake(difficulty)?;
        let total = STAGE_SYMBOLS.len();
        let revealed = (mistakes as usize)
            .saturating_mul(per_mistake as usize)
            .min(total);

        for (index, stage) in self.stages.iter_mut().enumerate() {
            *stage = if index < revealed {
                STAGE_SYMBOLS[index]
            } else {
                HIDDEN_STAGE
            };
        }
        self.revealed_count = revealed;

        Ok(revealed)
    }

    #[inline]
    #[must_use]
    pub const fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    #[inline]
    #[must_use]
    pub const fn total_stages(&self) -> usize {
        STAGE_SYMBOLS.len()
    }

    /// Current stage slots, blanks for hidden stages
    #[inline]
    #[must_use]
    pub const fn stages(&self) -> &[char] {
        &self.stages
    }

    /// The picture as lines, without trailing newline
    #[must_use]
    pub fn lines(&self) -> [String; 7] {
        let [head, body, left_arm, right_arm, left_leg, right_leg] = self.stages;
        [
            "+---+".to_string(),
            "|   |".to_string(),
            format!("|   {head}"),
            format!("|  {left_arm}{body}{right_arm}"),
            format!("|  {left_leg} {right_leg}"),
            "|".to_string(),
            "=======".to_string(),
        ]
    }

    /// The full multi-line picture, newline terminated
    #[must_use]
    pub fn render(&self) -> String {
        let mut picture = self.lines().join("\n");
        picture.push('\n');
        picture
    }
}

impl fmt::Display for ProgressRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stages_after(mistakes: u32, difficulty: usize) -> Vec<char> {
        let mut gallows = ProgressRenderer::new(DifficultyTable::STANDARD).unwrap();
        gallows.update(mistakes, difficulty).unwrap();
        gallows.stages().to_vec()
    }

    #[test]
    fn easiest_level_reveals_one_stage_per_mistake() {
        assert_eq!(stages_after(1, 1), vec!['O', ' ', ' ', ' ', ' ', ' ']);
        assert_eq!(stages_after(5, 1), vec!['O', '|', '/', '\\', '/', ' ']);
        assert_eq!(stages_after(6, 1), vec!['O', '|', '/', '\\', '/', '\\']);
    }

    #[test]
    fn second_level_reveals_two_stages_per_mistake() {
        assert_eq!(stages_after(1, 2), vec!['O', '|', ' ', ' ', ' ', ' ']);
        assert_eq!(stages_after(2, 2), vec!['O', '|', '/', '\\', ' ', ' ']);
        assert_eq!(stages_after(3, 2), vec!['O', '|', '/', '\\', '/', '\\']);
    }

    #[test]
    fn third_level_reveals_three_stages_per_mistake() {
        assert_eq!(stages_after(1, 3), vec!['O', '|', '/', ' ', ' ', ' ']);
        assert_eq!(stages_after(2, 3), vec!['O', '|', '/', '\\', '/', '\\']);
    }

    #[test]
    fn hardest_level_reveals_everything_at_once() {
        assert_eq!(stages_after(1, 4), STAGE_SYMBOLS.to_vec());
    }

    #[test]
    fn overshoot_is_clamped() {
        let mut gallows = ProgressRenderer::new(DifficultyTable::STANDARD).unwrap();
        assert_eq!(gallows.update(40, 4).unwrap(), 6);
        assert_eq!(gallows.revealed_count(), gallows.total_stages());
    }

    #[test]
    fn update_is_recomputed_from_scratch() {
        let mut gallows = ProgressRenderer::new(DifficultyTable::STANDARD).unwrap();
        gallows.update(4, 1).unwrap();
        gallows.update(2, 1).unwrap();
        assert_eq!(gallows.stages(), &['O', '|', ' ', ' ', ' ', ' ']);

        gallows.update(0, 1).unwrap();
        assert_eq!(gallows.revealed_count(), 0);
    }

    #[test]
    fn update_is_deterministic() {
        for difficulty in 1..=4 {
            for mistakes in 0..8 {
                assert_eq!(
                    stages_after(mistakes, difficulty),
                    stages_after(mistakes, difficulty)
                );
            }
        }
    }

    #[test]
    fn invalid_difficulty_fails_loudly() {
        let mut gallows = ProgressRenderer::new(DifficultyTable::STANDARD).unwrap();
        assert_eq!(
            gallows.update(1, 0),
            Err(ProgressError::Difficulty(DifficultyError::OutOfRange {
                level: 0,
                max: 4
            }))
        );
        assert!(gallows.update(1, 5).is_err());
        assert_eq!(gallows.revealed_count(), 0);
    }

    #[test]
    fn mismatched_table_rejected() {
        let table = DifficultyTable::new(&[8, 4]).unwrap();
        assert_eq!(
            ProgressRenderer::new(table),
            Err(ProgressError::StageCountMismatch {
                expected: 6,
                actual: 8
            })
        );
    }

    #[test]
    fn empty_picture() {
        let gallows = ProgressRenderer::new(DifficultyTable::STANDARD).unwrap();
        assert_eq!(
            gallows.render(),
            "+---+\n|   |\n|    \n|     \n|     \n|\n=======\n"
        );
    }

    #[test]
    fn full_picture() {
        let mut gallows = ProgressRenderer::new(DifficultyTable::STANDARD).unwrap();
        gallows.update(6, 1).unwrap();
        assert_eq!(
            gallows.render(),
            "+---+\n|   |\n|   O\n|  /|\\\n|  / \\\n|\n=======\n"
        );
    }
}
