use std::num::ParseIntError;

use hangman_core::{WordBank, WordBankError};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HANGMAN_HTTP_PORT must be a valid u16: {0}")]
    InvalidPort(ParseIntError),
    #[error("HANGMAN_WORD_SEED must be a valid u64: {0}")]
    InvalidSeed(ParseIntError),
    #[error("HANGMAN_WORDS is invalid: {0}")]
    InvalidWords(WordBankError),
}

#[derive(Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub word_bank: WordBank,
    pub word_seed: Option<u64>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = var("HANGMAN_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match var("HANGMAN_HTTP_PORT") {
            Some(port) => port.trim().parse().map_err(ConfigError::InvalidPort)?,
            None => DEFAULT_HTTP_PORT,
        };
        let word_bank = match var("HANGMAN_WORDS") {
            Some(words) => WordBank::new(words.split(',')).map_err(ConfigError::InvalidWords)?,
            None => WordBank::default(),
        };
        let word_seed = var("HANGMAN_WORD_SEED")
            .map(|seed| seed.trim().parse())
            .transpose()
            .map_err(ConfigError::InvalidSeed)?;

        Ok(ServerConfig {
            host,
            port,
            database_url: var("HANGMAN_DATABASE_URL"),
            word_bank,
            word_seed,
        })
    }
}
