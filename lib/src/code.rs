use crate::results::MastermindError;
use rand::Rng;
use std::fmt;

/// A single peg color from the game's alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Orange,
}

/// The classic six-color alphabet, in canonical order.
pub const DEFAULT_ALPHABET: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::White,
    Color::Orange,
];

impl Color {
    /// The canonical one-letter token for this color, as used in prompts and guesses.
    pub fn token(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::White => 'W',
            Color::Orange => 'O',
        }
    }

    /// Parses a single color token, ignoring ASCII case.
    pub fn from_token(token: &str) -> Option<Color> {
        match token.to_ascii_uppercase().as_str() {
            "R" => Some(Color::Red),
            "G" => Some(Color::Green),
            "B" => Some(Color::Blue),
            "Y" => Some(Color::Yellow),
            "W" => Some(Color::White),
            "O" => Some(Color::Orange),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Settings for a single game session.
///
/// The alphabet must be non-empty, and both `code_length` and `max_attempts` must be at
/// least 1. The defaults match the classic game: six colors, codes of four, ten tries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// The colors that codes may be built from.
    pub alphabet: Vec<Color>,
    /// The number of colors in the secret code and in every guess.
    pub code_length: usize,
    /// The number of guesses the player gets.
    pub max_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            alphabet: DEFAULT_ALPHABET.to_vec(),
            code_length: 4,
            max_attempts: 10,
        }
    }
}

/// An ordered sequence of colors: either the secret or a single guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Code(Vec<Color>);

impl Code {
    pub fn new(colors: Vec<Color>) -> Code {
        Code(colors)
    }

    /// Parses a whitespace-separated sequence of color tokens, e.g. `"R g b Y"`.
    ///
    /// Input is case-insensitive and normalized to the canonical tokens. Fails with
    /// [`MastermindError::WrongCodeLength`] if the token count differs from the config's
    /// code length, and with [`MastermindError::UnknownColors`] listing every token that
    /// does not name a color in the config's alphabet.
    pub fn from_tokens(input: &str, config: &GameConfig) -> Result<Code, MastermindError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.len() != config.code_length {
            return Err(MastermindError::WrongCodeLength(config.code_length));
        }
        let mut colors = Vec::with_capacity(tokens.len());
        let mut unknown: Vec<String> = Vec::new();
        for token in tokens {
            match Color::from_token(token) {
                Some(color) if config.alphabet.contains(&color) => colors.push(color),
                _ => unknown.push(token.to_string()),
            }
        }
        if !unknown.is_empty() {
            return Err(MastermindError::UnknownColors(unknown));
        }
        Ok(Code(colors))
    }

    /// The number of colors in this code.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The colors in order.
    pub fn colors(&self) -> &[Color] {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, color) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

/// Generates a secret code of `length` colors drawn independently and uniformly, with
/// replacement, from `alphabet`.
///
/// The random source is injected, so a seeded RNG produces the same code on every run.
/// The alphabet must be non-empty and `length` must be at least 1.
pub fn generate_code<R: Rng>(alphabet: &[Color], length: usize, rng: &mut R) -> Code {
    Code(
        (0..length)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect(),
    )
}
