use std::collections::HashSet;

pub const MAX_MISSES: u32 = 6;

const HIDDEN_LETTER: char = '_';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HangmanGame {
    pub target: String,
    pub bad_guesses: Vec<String>,
    pub good_guesses: Vec<String>,
    pub status: String,
    pub misses_remaining: u32,
    pub game_over: bool,
    pub history: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Rejected(GuessRejection),
    Hit,
    Miss,
    Won,
    Lost,
}

impl GuessOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, GuessOutcome::Won | GuessOutcome::Lost)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessRejection {
    GameOver,
    NotSingleLetter,
    AlreadyGuessed,
    NotAlphabetic,
}

impl GuessRejection {
    pub fn message(&self) -> &'static str {
        match self {
            GuessRejection::GameOver => "Game already over!",
            GuessRejection::NotSingleLetter => {
                "You can only guess a single letter or the whole word."
            }
            GuessRejection::AlreadyGuessed => "You've already guessed that letter.",
            GuessRejection::NotAlphabetic => "You can only guess letters.",
        }
    }
}

/// Renders the board for `target`, revealing letters found in `good_guesses`.
pub fn render_board(target: &str, good_guesses: &[String], reveal_all: bool) -> String {
    let revealed: HashSet<char> = good_guesses
        .iter()
        .filter_map(|guess| {
            let mut chars = guess.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        })
        .collect();

    target
        .chars()
        .map(|c| {
            if reveal_all || revealed.contains(&c) {
                c.to_string()
            } else {
                HIDDEN_LETTER.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl HangmanGame {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into().to_lowercase();
        let status = render_board(&target, &[], false);
        HangmanGame {
            target,
            bad_guesses: Vec::new(),
            good_guesses: Vec::new(),
            status,
            misses_remaining: MAX_MISSES,
            game_over: false,
            history: Vec::new(),
        }
    }

    fn has_guessed(&self, guess: &str) -> bool {
        self.good_guesses.iter().any(|g| g == guess) || self.bad_guesses.iter().any(|g| g == guess)
    }

    fn all_letters_revealed(&self) -> bool {
        self.target
            .chars()
            .collect::<HashSet<char>>()
            .iter()
            .all(|c| self.good_guesses.iter().any(|g| g.len() == c.len_utf8() && g.starts_with(*c)))
    }

    fn record(&mut self, guess: &str, result: &str) {
        self.history
            .push(format!("guess: {}, result: {}", guess, result));
    }

    fn finish(&mut self, guess: &str, won: bool) -> GuessOutcome {
        self.game_over = true;
        if won {
            self.record(guess, "win");
            GuessOutcome::Won
        } else {
            self.record(guess, "lose");
            GuessOutcome::Lost
        }
    }

    /// Applies one guess. Rejected guesses leave the game untouched.
    pub fn apply_guess(&mut self, raw_guess: &str) -> GuessOutcome {
        if self.game_over {
            return GuessOutcome::Rejected(GuessRejection::GameOver);
        }

        let guess = raw_guess.trim().to_lowercase();

        if guess == self.target {
            self.good_guesses.push(guess.clone());
            self.status = render_board(&self.target, &self.good_guesses, true);
            return self.finish(&guess, true);
        }
        if guess.chars().count() != 1 {
            return GuessOutcome::Rejected(GuessRejection::NotSingleLetter);
        }
        if self.has_guessed(&guess) {
            return GuessOutcome::Rejected(GuessRejection::AlreadyGuessed);
        }
        if !guess.chars().all(char::is_alphabetic) {
            return GuessOutcome::Rejected(GuessRejection::NotAlphabetic);
        }

        if self.target.contains(guess.as_str()) {
            self.good_guesses.push(guess.clone());
            self.status = render_board(&self.target, &self.good_guesses, false);
            if self.all_letters_revealed() {
                return self.finish(&guess, true);
            }
            self.record(&guess, "hit");
            GuessOutcome::Hit
        } else {
            self.bad_guesses.push(guess.clone());
            self.misses_remaining = self.misses_remaining.saturating_sub(1);
            if self.misses_remaining < 1 {
                return self.finish(&guess, false);
            }
            self.record(&guess, "miss");
            GuessOutcome::Miss
        }
    }

    pub fn outcome_message(&self, outcome: &GuessOutcome) -> String {
        match outcome {
            GuessOutcome::Rejected(rejection) => rejection.message().to_string(),
            GuessOutcome::Hit => "good guess".to_string(),
            GuessOutcome::Miss => "bad guess".to_string(),
            GuessOutcome::Won => format!("You win! The word was {}.", self.target),
            GuessOutcome::Lost => format!("You lost! The word was {}.", self.target),
        }
    }

    pub fn misses(&self) -> u32 {
        self.bad_guesses.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut HangmanGame, guesses: &[&str]) -> Vec<GuessOutcome> {
        guesses.iter().map(|g| game.apply_guess(g)).collect()
    }

    #[test]
    fn test_new_game_board() {
        let game = HangmanGame::new("cat");
        assert_eq!(game.status, "_ _ _");
        assert_eq!(game.misses_remaining, MAX_MISSES);
        assert!(!game.game_over);
        assert!(game.history.is_empty());
    }

    #[test]
    fn test_good_guess_reveals_letter() {
        let mut game = HangmanGame::new("cat");
        let outcome = game.apply_guess("c");
        assert_eq!(outcome, GuessOutcome::Hit);
        assert_eq!(game.status, "c _ _");
        assert_eq!(game.good_guesses, vec!["c".to_string()]);
        assert!(!game.game_over);
        assert_eq!(game.history, vec!["guess: c, result: hit".to_string()]);
        assert_eq!(game.outcome_message(&outcome), "good guess");
    }

    #[test]
    fn test_repeated_letters_revealed_together() {
        let mut game = HangmanGame::new("puppy");
        assert_eq!(game.apply_guess("p"), GuessOutcome::Hit);
        assert_eq!(game.status, "p _ p p _");
    }

    #[test]
    fn test_win_by_letters() {
        let mut game = HangmanGame::new("cat");
        let outcomes = play(&mut game, &["c", "a", "t"]);
        assert_eq!(
            outcomes,
            vec![GuessOutcome::Hit, GuessOutcome::Hit, GuessOutcome::Won]
        );
        assert!(game.game_over);
        assert_eq!(game.status, "c a t");
        assert_eq!(game.misses(), 0);
        assert_eq!(
            game.history.last().map(String::as_str),
            Some("guess: t, result: win")
        );
        let message = game.outcome_message(&GuessOutcome::Won);
        assert!(message.contains("cat"));
        assert_eq!(message, "You win! The word was cat.");
    }

    #[test]
    fn test_uppercase_guess_is_normalized() {
        let mut game = HangmanGame::new("cat");
        assert_eq!(game.apply_guess("C"), GuessOutcome::Hit);
        assert_eq!(game.good_guesses, vec!["c".to_string()]);
        assert_eq!(
            game.apply_guess("c"),
            GuessOutcome::Rejected(GuessRejection::AlreadyGuessed)
        );
    }

    #[test]
    fn test_whole_word_always_wins() {
        let mut game = HangmanGame::new("dog");
        play(&mut game, &["x", "y", "z", "q", "w"]);
        assert_eq!(game.misses_remaining, 1);
        assert_eq!(game.apply_guess("DOG"), GuessOutcome::Won);
        assert!(game.game_over);
        assert_eq!(game.status, "d o g");
        assert_eq!(game.good_guesses, vec!["dog".to_string()]);
        assert_eq!(game.misses(), 5);
    }

    #[test]
    fn test_loss_after_six_misses() {
        let mut game = HangmanGame::new("dog");
        let outcomes = play(&mut game, &["x", "y", "z", "q", "w", "v"]);
        assert_eq!(outcomes[..5], [GuessOutcome::Miss; 5]);
        assert_eq!(outcomes[5], GuessOutcome::Lost);
        assert_eq!(game.misses_remaining, 0);
        assert!(game.game_over);
        assert_eq!(game.status, "_ _ _");
        let message = game.outcome_message(&GuessOutcome::Lost);
        assert_eq!(message, "You lost! The word was dog.");
        assert_eq!(
            game.history.last().map(String::as_str),
            Some("guess: v, result: lose")
        );
        assert_eq!(game.history.len(), 6);
    }

    #[test]
    fn test_misses_never_increase() {
        let mut game = HangmanGame::new("dog");
        let mut previous = game.misses_remaining;
        for guess in ["x", "o", "x", "12", "y", "z", "d", "q", "w", "v", "a", "b"] {
            game.apply_guess(guess);
            assert!(game.misses_remaining <= previous);
            previous = game.misses_remaining;
        }
        assert!(game.game_over);
        assert_eq!(game.misses_remaining, 0);
    }

    #[test]
    fn test_rejections_do_not_mutate() {
        let mut game = HangmanGame::new("cat");
        game.apply_guess("c");
        game.apply_guess("x");
        let before = game.clone();

        assert_eq!(
            game.apply_guess("ca"),
            GuessOutcome::Rejected(GuessRejection::NotSingleLetter)
        );
        assert_eq!(
            game.apply_guess(""),
            GuessOutcome::Rejected(GuessRejection::NotSingleLetter)
        );
        assert_eq!(
            game.apply_guess("x"),
            GuessOutcome::Rejected(GuessRejection::AlreadyGuessed)
        );
        assert_eq!(
            game.apply_guess("c"),
            GuessOutcome::Rejected(GuessRejection::AlreadyGuessed)
        );
        assert_eq!(
            game.apply_guess("7"),
            GuessOutcome::Rejected(GuessRejection::NotAlphabetic)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_finished_game_is_frozen() {
        let mut game = HangmanGame::new("cat");
        game.apply_guess("cat");
        let before = game.clone();
        for guess in ["a", "z", "cat", "12"] {
            let outcome = game.apply_guess(guess);
            assert_eq!(outcome, GuessOutcome::Rejected(GuessRejection::GameOver));
            assert_eq!(game.outcome_message(&outcome), "Game already over!");
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_render_board_ignores_whole_word_guesses() {
        let good = vec!["ab".to_string(), "c".to_string()];
        assert_eq!(render_board("cab", &good, false), "c _ _");
        assert_eq!(render_board("cab", &good, true), "c a b");
    }
}
