//! Player input interpretation

/// Typed instead of a letter to end the game
pub const QUIT_COMMAND: &str = "quit";
/// Typed instead of a letter to see the hint
pub const HELP_COMMAND: &str = "help";

/// One line of player input during a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Letter(char),
    /// Empty, several characters, or not a letter
    Invalid,
}

impl Command {
    /// Interpret a raw input line
    ///
    /// Surrounding whitespace is ignored and case is folded.
    ///
    /// # Examples
    /// ```
    /// use hangman::game::Command;
    ///
    /// assert_eq!(Command::parse(" Q "), Command::Letter('q'));
    /// assert_eq!(Command::parse("QUIT"), Command::Quit);
    /// assert_eq!(Command::parse("ab"), Command::Invalid);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim().to_lowercase();

        match input.as_str() {
            QUIT_COMMAND => Self::Quit,
            HELP_COMMAND => Self::Help,
            _ => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_alphabetic() => Self::Letter(c),
                    _ => Self::Invalid,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_special_commands() {
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("Help\n"), Command::Help);
    }

    #[test]
    fn parses_single_letters() {
        assert_eq!(Command::parse("a"), Command::Letter('a'));
        assert_eq!(Command::parse("Z"), Command::Letter('z'));
        assert_eq!(Command::parse("  k\n"), Command::Letter('k'));
    }

    #[test]
    fn parses_non_latin_letters() {
        assert_eq!(Command::parse("ж"), Command::Letter('ж'));
        assert_eq!(Command::parse("Ж"), Command::Letter('ж'));
        assert_eq!(Command::parse("é"), Command::Letter('é'));
        assert_eq!(Command::parse("жж"), Command::Invalid);
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(Command::parse(""), Command::Invalid);
        assert_eq!(Command::parse("   "), Command::Invalid);
        assert_eq!(Command::parse("ab"), Command::Invalid);
        assert_eq!(Command::parse("7"), Command::Invalid);
        assert_eq!(Command::parse("!"), Command::Invalid);
        assert_eq!(Command::parse("quitting"), Command::Invalid);
    }
}
