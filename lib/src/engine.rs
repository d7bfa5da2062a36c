use crate::code::*;
use crate::results::*;
use rand::Rng;
use std::collections::HashMap;
use std::io;

/// Determines the score of the given `guess` when applied to the given `secret`.
///
/// Exact matches are settled first. Every non-matching secret position leaves its color
/// available in a per-color counter, and each non-matching guess color then consumes at
/// most one available unit. A color is therefore never credited more often than the
/// secret still holds it: secret `R R G B` against guess `R R R R` scores two exact
/// matches and zero color matches.
pub fn get_score_for_guess(guess: &Code, secret: &Code) -> Result<Score, MastermindError> {
    if guess.len() != secret.len() {
        return Err(MastermindError::MismatchedLengths {
            guess: guess.len(),
            secret: secret.len(),
        });
    }
    let mut exact_matches = 0;
    let mut remaining: HashMap<Color, usize> = HashMap::new();
    for (guessed, actual) in guess.colors().iter().zip(secret.colors()) {
        if guessed == actual {
            exact_matches += 1;
        } else {
            *remaining.entry(*actual).or_insert(0) += 1;
        }
    }
    let mut color_matches = 0;
    for (guessed, actual) in guess.colors().iter().zip(secret.colors()) {
        if guessed == actual {
            continue;
        }
        if let Some(available) = remaining.get_mut(guessed) {
            if *available > 0 {
                color_matches += 1;
                *available -= 1;
            }
        }
    }
    Ok(Score {
        exact_matches,
        color_matches,
    })
}

/// A single game session.
///
/// The secret code is fixed at construction and never exposed while the game is in
/// progress; losing reveals it through [`GameResult::Exhausted`].
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    secret: Code,
    attempts: u32,
    result: Option<GameResult>,
}

impl Game {
    /// Starts a game with a freshly generated secret code.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Game {
        let secret = generate_code(&config.alphabet, config.code_length, rng);
        Game {
            config,
            secret,
            attempts: 0,
            result: None,
        }
    }

    /// Starts a game with the given secret code, validated against the config.
    pub fn with_secret(config: GameConfig, secret: Code) -> Result<Game, MastermindError> {
        validate_code(&secret, &config)?;
        Ok(Game {
            config,
            secret,
            attempts: 0,
            result: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The number of guesses scored so far. Rejected guesses are not counted.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The terminal result, or `None` while the game is still in progress.
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Scores a guess against the secret and advances the attempt counter.
    ///
    /// A malformed guess (wrong length, or a color outside the alphabet) is rejected
    /// without consuming an attempt. Scoring the last allowed attempt without a full
    /// match ends the game as [`GameResult::Exhausted`]; further guesses fail with
    /// [`MastermindError::GameOver`].
    pub fn apply_guess(&mut self, guess: &Code) -> Result<Score, MastermindError> {
        if self.result.is_some() {
            return Err(MastermindError::GameOver);
        }
        validate_code(guess, &self.config)?;
        let score = get_score_for_guess(guess, &self.secret)?;
        self.attempts += 1;
        if score.exact_matches == self.config.code_length {
            self.result = Some(GameResult::Won {
                attempts: self.attempts,
            });
        } else if self.attempts >= self.config.max_attempts {
            self.result = Some(GameResult::Exhausted {
                secret: self.secret.clone(),
            });
        }
        Ok(score)
    }
}

fn validate_code(code: &Code, config: &GameConfig) -> Result<(), MastermindError> {
    if code.len() != config.code_length {
        return Err(MastermindError::WrongCodeLength(config.code_length));
    }
    let unknown: Vec<String> = code
        .colors()
        .iter()
        .filter(|color| !config.alphabet.contains(*color))
        .map(|color| color.to_string())
        .collect();
    if !unknown.is_empty() {
        return Err(MastermindError::UnknownColors(unknown));
    }
    Ok(())
}

/// Supplies guesses for a game, one per attempt.
///
/// Implementations own their input validation: `next_guess` must only return codes that
/// match the game's configuration, re-prompting (or otherwise recovering) on malformed
/// input so that a bad entry never consumes an attempt.
pub trait GuessProvider {
    /// Returns the next guess to play.
    fn next_guess(&mut self, game: &Game) -> io::Result<Code>;

    /// Receives the attempt number and score of the latest non-winning guess before the
    /// next attempt begins.
    fn update(&mut self, attempt: u32, guess: &Code, score: &Score);
}

/// Plays the given game to completion with guesses from the provider.
///
/// A provider that returns a guess the game rejects has broken its contract; this
/// surfaces as an error of kind `InvalidInput`.
pub fn play_game<P: GuessProvider>(mut game: Game, provider: &mut P) -> io::Result<GameResult> {
    loop {
        let guess = provider.next_guess(&game)?;
        let score = game.apply_guess(&guess).map_err(|error| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unplayable guess {}: {:?}", guess, error),
            )
        })?;
        match game.result() {
            Some(GameResult::Won { .. }) => {}
            _ => provider.update(game.attempts(), &guess, &score),
        }
        if let Some(result) = game.result() {
            return Ok(result.clone());
        }
    }
}
