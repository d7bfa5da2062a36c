use crate::code::Code;

/// The feedback for a single scored guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    /// The number of positions where the guess and the secret hold the same color.
    pub exact_matches: usize,
    /// The number of other guess colors that occur elsewhere in the secret, counting
    /// each secret color at most once.
    pub color_matches: usize,
}

/// Indicates that an error occurred while handling a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MastermindError {
    /// Indicates that a code did not have the required number of colors. Holds the
    /// expected count.
    WrongCodeLength(usize),
    /// Indicates that one or more tokens did not name a color in the game's alphabet.
    UnknownColors(Vec<String>),
    /// Indicates that the guess and the secret differ in length, so they cannot be
    /// scored against each other.
    MismatchedLengths { guess: usize, secret: usize },
    /// Indicates that a guess was applied after the game had already ended.
    GameOver,
}

/// Whether the game was won or lost by the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Indicates that the player found the secret code, and provides the number of
    /// attempts used.
    Won { attempts: u32 },
    /// Indicates that the player ran out of attempts, and reveals the secret code.
    Exhausted { secret: Code },
}
