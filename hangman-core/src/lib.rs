mod game;
mod word_bank;

pub use game::{GuessOutcome, GuessRejection, HangmanGame, MAX_MISSES, render_board};
pub use word_bank::{DEFAULT_WORDS, WordBank, WordBankError};
