//! Difficulty levels and their mistake budgets
//!
//! Level 1 is the most lenient. The budget of level 1 doubles as the number of
//! stages in the gallows picture and as the exponent base of the score.

use thiserror::Error;

/// Error type for invalid difficulty tables and level lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DifficultyError {
    #[error("difficulty table must contain at least one level")]
    EmptyTable,
    #[error("difficulty level {level} has a zero mistake budget")]
    ZeroBudget { level: usize },
    #[error("difficulty must be between 1 and {max}, got {level}")]
    OutOfRange { level: usize, max: usize },
}

/// Ordered mapping from difficulty level (1..=N) to a maximum-mistakes budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyTable {
    levels: &'static [u32],
}

impl DifficultyTable {
    /// The table every front end plays with: 6, 3, 2 and 1 allowed mistakes
    pub const STANDARD: Self = Self {
        levels: &[6, 3, 2, 1],
    };

    /// Create a custom table
    ///
    /// # Errors
    /// Returns `DifficultyError` if the table is empty or any budget is zero.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::DifficultyTable;
    ///
    /// let table = DifficultyTable::new(&[4, 2]).unwrap();
    /// assert_eq!(table.max_difficulty(), 2);
    /// assert!(DifficultyTable::new(&[]).is_err());
    /// ```
    pub fn new(levels: &'static [u32]) -> Result<Self, DifficultyError> {
        if levels.is_empty() {
            return Err(DifficultyError::EmptyTable);
        }

        if let Some(index) = levels.iter().position(|&budget| budget == 0) {
            return Err(DifficultyError::ZeroBudget { level: index + 1 });
        }

        Ok(Self { levels })
    }

    /// Highest selectable difficulty level
    #[inline]
    #[must_use]
    pub const fn max_difficulty(&self) -> usize {
        self.levels.len()
    }

    /// Raw budgets, index 0 being level 1
    #[inline]
    #[must_use]
    pub const fn levels(&self) -> &'static [u32] {
        self.levels
    }

    /// Mistake budget of the easiest level, also the total number of stages
    #[inline]
    #[must_use]
    pub const fn base_budget(&self) -> u32 {
        self.levels[0]
    }

    /// Check that `level` is selectable
    ///
    /// # Errors
    /// Returns `DifficultyError::OutOfRange` if `level` is not in `1..=max_difficulty()`.
    pub const fn validate(&self, level: usize) -> Result<usize, DifficultyError> {
        if level == 0 || level > self.levels.len() {
            return Err(DifficultyError::OutOfRange {
                level,
                max: self.levels.len(),
            });
        }
        Ok(level)
    }

    /// Mistakes allowed at `level`
    ///
    /// # Errors
    /// Returns `DifficultyError::OutOfRange` for an unknown level.
    pub const fn max_mistakes(&self, level: usize) -> Result<u32, DifficultyError> {
        match self.validate(level) {
            Ok(level) => Ok(self.levels[level - 1]),
            Err(err) => Err(err),
        }
    }

    /// Number of stages revealed per mistake at `level`
    ///
    /// # Errors
    /// Returns `DifficultyError::OutOfRange` for an unknown level.
    pub const fn stages_per_mistake(&self, level: usize) -> Result<u32, DifficultyError> {
        match self.max_mistakes(level) {
            Ok(budget) => Ok(self.base_budget() / budget),
            Err(err) => Err(err),
        }
    }

    /// Points for a win after `mistakes` misses: `2^(base_budget - mistakes)`
    ///
    /// The base is the level 1 budget whatever level was played.
    #[must_use]
    pub fn win_reward(&self, mistakes: u32) -> u64 {
        1u64 << self.base_budget().saturating_sub(mistakes).min(63)
    }

    /// Human-readable listing of every level and its budget
    #[must_use]
    pub fn report(&self) -> String {
        let mut report = String::from("Difficulty levels:\n");
        for (index, budget) in self.levels.iter().enumerate() {
            report.push_str(&format!("{} - {budget} mistakes\n", index + 1));
        }
        report
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_shape() {
        let table = DifficultyTable::STANDARD;
        assert_eq!(table.max_difficulty(), 4);
        assert_eq!(table.base_budget(), 6);
        assert_eq!(table.levels(), &[6, 3, 2, 1]);
    }

    #[test]
    fn max_mistakes_per_level() {
        let table = DifficultyTable::STANDARD;
        assert_eq!(table.max_mistakes(1), Ok(6));
        assert_eq!(table.max_mistakes(2), Ok(3));
        assert_eq!(table.max_mistakes(3), Ok(2));
        assert_eq!(table.max_mistakes(4), Ok(1));
    }

    #[test]
    fn out_of_range_levels_rejected() {
        let table = DifficultyTable::STANDARD;
        assert_eq!(
            table.max_mistakes(0),
            Err(DifficultyError::OutOfRange { level: 0, max: 4 })
        );
        assert_eq!(
            table.max_mistakes(5),
            Err(DifficultyError::OutOfRange { level: 5, max: 4 })
        );
        assert!(table.stages_per_mistake(9).is_err());
    }

    #[test]
    fn stages_per_mistake_uses_integer_division() {
        let table = DifficultyTable::STANDARD;
        assert_eq!(table.stages_per_mistake(1), Ok(1));
        assert_eq!(table.stages_per_mistake(2), Ok(2));
        assert_eq!(table.stages_per_mistake(3), Ok(3));
        assert_eq!(table.stages_per_mistake(4), Ok(6));

        let uneven = DifficultyTable::new(&[5, 2]).unwrap();
        assert_eq!(uneven.stages_per_mistake(2), Ok(2));
    }

    #[test]
    fn custom_table_validation() {
        assert_eq!(DifficultyTable::new(&[]), Err(DifficultyError::EmptyTable));
        assert_eq!(
            DifficultyTable::new(&[3, 0]),
            Err(DifficultyError::ZeroBudget { level: 2 })
        );
        assert!(DifficultyTable::new(&[1]).is_ok());
    }

    #[test]
    fn win_reward_is_exponential_in_remaining_budget() {
        let table = DifficultyTable::STANDARD;
        assert_eq!(table.win_reward(0), 64);
        assert_eq!(table.win_reward(2), 16);
        assert_eq!(table.win_reward(6), 1);
        // Never negative exponents
        assert_eq!(table.win_reward(9), 1);
    }

    #[test]
    fn report_lists_every_level() {
        let report = DifficultyTable::STANDARD.report();
        assert_eq!(
            report,
            "Difficulty levels:\n1 - 6 mistakes\n2 - 3 mistakes\n3 - 2 mistakes\n4 - 1 mistakes\n"
        );
    }

    #[test]
    fn report_of_custom_table() {
        let table = DifficultyTable::new(&[4, 2]).unwrap();
        assert_eq!(
            table.report(),
            "Difficulty levels:\n1 - 4 mistakes\n2 - 2 mistakes\n"
        );
    }
}
