use clap::Parser;
use colored::ColoredString;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_mastermind::*;
use std::io;

/// Simple program to play Mastermind in the terminal: guess the secret color code
/// before your tries run out.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// The number of colors in the secret code.
    #[clap(short = 'l', long, default_value_t = 4)]
    code_length: usize,

    /// The maximum number of guesses allowed.
    #[clap(short = 't', long, default_value_t = 10)]
    tries: u32,

    /// Seeds the random generator, so the same secret code is chosen on every run.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if args.code_length == 0 || args.tries == 0 {
        eprintln!("Error: the code length and the number of tries must both be at least 1.");
        std::process::exit(1);
    }

    let config = GameConfig {
        alphabet: DEFAULT_ALPHABET.to_vec(),
        code_length: args.code_length,
        max_attempts: args.tries,
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let game = Game::new(config.clone(), &mut rng);

    println!(
        "Welcome to Mastermind! You have {} tries to guess the code.",
        config.max_attempts
    );
    println!(
        "The valid colors are: {}.",
        format_alphabet(&config.alphabet)
    );

    let mut player = TerminalPlayer {
        max_attempts: config.max_attempts,
    };
    match play_game(game, &mut player)? {
        GameResult::Won { attempts } => {
            println!(
                "Congratulations! You guessed the code in {} attempts.",
                attempts
            );
        }
        GameResult::Exhausted { secret } => {
            println!(
                "Sorry, you ran out of tries. The code was: {}.",
                paint_code(&secret)
            );
        }
    }

    Ok(())
}

/// Reads guesses from stdin, re-prompting until the entry is valid so that a malformed
/// guess never costs an attempt.
struct TerminalPlayer {
    max_attempts: u32,
}

impl GuessProvider for TerminalPlayer {
    fn next_guess(&mut self, game: &Game) -> io::Result<Code> {
        let config = game.config();
        loop {
            println!(
                "Enter your guess ({} space-separated colors):",
                config.code_length
            );

            let mut buffer = String::new();
            if io::stdin().read_line(&mut buffer)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "Input ended before the game was over.",
                ));
            }

            match Code::from_tokens(buffer.trim(), config) {
                Ok(guess) => return Ok(guess),
                Err(MastermindError::WrongCodeLength(expected)) => {
                    println!("Invalid input! You must guess exactly {} colors.", expected);
                }
                Err(MastermindError::UnknownColors(tokens)) => {
                    println!(
                        "Invalid colors: {}. Allowed colors are {}. Try again!",
                        tokens.join(", "),
                        format_alphabet(&config.alphabet)
                    );
                }
                Err(error) => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("{:?}", error),
                    ));
                }
            }
        }
    }

    fn update(&mut self, attempt: u32, _guess: &Code, score: &Score) {
        println!(
            "Attempt {}/{}: correct positions: {}, misplaced colors: {}",
            attempt, self.max_attempts, score.exact_matches, score.color_matches
        );
    }
}

fn paint(color: Color) -> ColoredString {
    match color {
        Color::Red => "R".red(),
        Color::Green => "G".green(),
        Color::Blue => "B".blue(),
        Color::Yellow => "Y".yellow(),
        Color::White => "W".white(),
        Color::Orange => "O".truecolor(255, 165, 0),
    }
}

fn format_alphabet(alphabet: &[Color]) -> String {
    alphabet
        .iter()
        .map(|color| paint(*color).to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

fn paint_code(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|color| paint(*color).to_string())
        .collect::<Vec<String>>()
        .join(" ")
}
