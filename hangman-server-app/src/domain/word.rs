use hangman_core::WordBank;
use parking_lot::Mutex;
use rand::{SeedableRng, rngs::StdRng};

pub trait WordSource {
    fn next_word(&self) -> String;
}

pub struct RandomWordSource {
    bank: WordBank,
    rng: Mutex<StdRng>,
}

impl RandomWordSource {
    pub fn new(bank: WordBank, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            bank,
            rng: Mutex::new(rng),
        }
    }
}

impl WordSource for RandomWordSource {
    fn next_word(&self) -> String {
        let mut rng = self.rng.lock();
        self.bank.choose(&mut *rng).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sources_agree() {
        let a = RandomWordSource::new(WordBank::default(), Some(3));
        let b = RandomWordSource::new(WordBank::default(), Some(3));
        let words_a: Vec<String> = (0..10).map(|_| a.next_word()).collect();
        let words_b: Vec<String> = (0..10).map(|_| b.next_word()).collect();
        assert_eq!(words_a, words_b);
    }

    #[test]
    fn test_words_come_from_bank() {
        let bank = WordBank::new(["cat", "dog"]).unwrap();
        let source = RandomWordSource::new(bank, None);
        for _ in 0..20 {
            let word = source.next_word();
            assert!(word == "cat" || word == "dog");
        }
    }
}
