use rand::Rng;

pub const DEFAULT_WORDS: [&str; 32] = [
    "alligator",
    "camel",
    "cheetah",
    "chicken",
    "chimpanzee",
    "crocodile",
    "dolphin",
    "eagle",
    "elephant",
    "giraffe",
    "goldfish",
    "hamster",
    "hippopotamus",
    "horse",
    "kangaroo",
    "kitten",
    "lobster",
    "monkey",
    "octopus",
    "panda",
    "puppy",
    "rabbit",
    "scorpion",
    "shark",
    "sheep",
    "snail",
    "snake",
    "spider",
    "squirrel",
    "tiger",
    "turtle",
    "zebra",
];

/// Read-only list of candidate target words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordBankError {
    Empty,
    InvalidWord(String),
}

impl std::fmt::Display for WordBankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordBankError::Empty => write!(f, "word bank must contain at least one word"),
            WordBankError::InvalidWord(word) => {
                write!(f, "word '{}' must consist of letters only", word)
            }
        }
    }
}

impl std::error::Error for WordBankError {}

impl WordBank {
    pub fn new<I, S>(words: I) -> Result<Self, WordBankError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() || !word.chars().all(char::is_alphabetic) {
                return Err(WordBankError::InvalidWord(word));
            }
            normalized.push(word);
        }
        if normalized.is_empty() {
            return Err(WordBankError::Empty);
        }
        Ok(WordBank { words: normalized })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Picks a word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.words.len());
        &self.words[index]
    }
}

impl Default for WordBank {
    fn default() -> Self {
        WordBank {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}
