//! Word Source: vocabulary and per-session word selection
//!
//! Each slot of a session independently becomes either a single random letter
//! (with the configured probability) or a vocabulary word drawn with
//! replacement. Repeats within a session are allowed.

use crate::encoding::{normalize, InvalidWordError};
use rand::Rng;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Built-in vocabulary, one lowercase word per line
const BUILTIN_WORDS: &str = include_str!("../data/words.txt");

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("vocabulary has no words")]
    Empty,
    #[error("vocabulary word {0:?} is shorter than two letters")]
    TooShort(String),
    #[error(transparent)]
    InvalidWord(#[from] InvalidWordError),
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Fixed vocabulary of uppercase words
#[derive(Clone, Debug)]
pub struct WordSource {
    vocabulary: Vec<String>,
}

impl WordSource {
    /// The embedded common-word list
    pub fn builtin() -> Self {
        WordSource {
            vocabulary: BUILTIN_WORDS
                .split_whitespace()
                .map(str::to_ascii_uppercase)
                .collect(),
        }
    }

    /// Build from a custom list; every entry must be two or more letters A-Z
    pub fn from_words<I, S>(words: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Vec::new();
        for word in words {
            let word = word.as_ref();
            let letters = normalize(word)?;
            if letters.len() < 2 {
                return Err(VocabularyError::TooShort(word.to_string()));
            }
            vocabulary.push(letters.into_iter().collect());
        }

        if vocabulary.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(WordSource { vocabulary })
    }

    /// Load a whitespace separated word list
    pub fn from_file(path: &Path) -> Result<Self, VocabularyError> {
        let content = fs::read_to_string(path).map_err(|source| VocabularyError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let source = Self::from_words(content.split_whitespace())?;
        tracing::info!(
            path = %path.display(),
            words = source.vocabulary.len(),
            "loaded word list"
        );
        Ok(source)
    }

    /// All words a session can draw, uppercase
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Uniform pick from the vocabulary
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        // vocabulary is never empty once constructed
        self.vocabulary[rng.gen_range(0..self.vocabulary.len())].clone()
    }

    /// Uniform pick from A-Z
    pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> String {
        char::from(rng.gen_range(b'A'..=b'Z')).to_string()
    }

    /// Words for one session, exactly `n` long
    ///
    /// `single_letter_probability` is clamped to [0, 1]; 0 never yields a
    /// letter and 1 always does.
    pub fn next_words<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n: usize,
        single_letter_probability: f64,
    ) -> Vec<String> {
        let p = if single_letter_probability.is_nan() {
            0.0
        } else {
            single_letter_probability.clamp(0.0, 1.0)
        };

        (0..n)
            .map(|_| {
                if rng.gen::<f64>() < p {
                    Self::random_letter(rng)
                } else {
                    self.random_word(rng)
                }
            })
            .collect()
    }
}

impl Default for WordSource {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    #[test]
    fn test_builtin_is_valid() {
        let builtin = WordSource::builtin();
        assert!(!builtin.vocabulary().is_empty());
        let checked = WordSource::from_words(builtin.vocabulary()).unwrap();
        assert_eq!(checked.vocabulary(), builtin.vocabulary());
        assert!(builtin
            .vocabulary()
            .iter()
            .all(|w| w.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn test_zero_probability_never_yields_letters() {
        let source = WordSource::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let words = source.next_words(&mut rng, 10, 0.0);
            assert_eq!(words.len(), 10);
            assert!(words.iter().all(|w| source.vocabulary().contains(w) && w.len() >= 2));
        }
    }

    #[test]
    fn test_full_probability_always_yields_letters() {
        let source = WordSource::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        let words = source.next_words(&mut rng, 500, 1.0);
        assert!(words
            .iter()
            .all(|w| w.len() == 1 && w.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn test_out_of_range_probability_is_clamped() {
        let source = WordSource::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(source
            .next_words(&mut rng, 50, 7.5)
            .iter()
            .all(|w| w.len() == 1));
        assert!(source
            .next_words(&mut rng, 50, -1.0)
            .iter()
            .all(|w| w.len() > 1));
        assert!(source
            .next_words(&mut rng, 50, f64::NAN)
            .iter()
            .all(|w| w.len() > 1));
    }

    #[test]
    fn test_mixed_probability_yields_both() {
        let source = WordSource::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let words = source.next_words(&mut rng, 400, 0.5);
        assert!(words.iter().any(|w| w.len() == 1));
        assert!(words.iter().any(|w| w.len() > 1));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let source = WordSource::builtin();
        let a = source.next_words(&mut StdRng::seed_from_u64(99), 20, 0.3);
        let b = source.next_words(&mut StdRng::seed_from_u64(99), 20, 0.3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count() {
        let source = WordSource::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(source.next_words(&mut rng, 0, 0.3).is_empty());
    }

    #[test]
    fn test_from_words_validation() {
        assert!(matches!(
            WordSource::from_words(Vec::<String>::new()),
            Err(VocabularyError::Empty)
        ));
        assert!(matches!(
            WordSource::from_words(["ok", "a"]),
            Err(VocabularyError::TooShort(_))
        ));
        assert!(matches!(
            WordSource::from_words(["ok", "no-go"]),
            Err(VocabularyError::InvalidWord(_))
        ));
        let source = WordSource::from_words(["cat", "Dog"]).unwrap();
        assert_eq!(source.vocabulary(), ["CAT", "DOG"]);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha bravo\ncharlie").unwrap();
        let source = WordSource::from_file(file.path()).unwrap();
        assert_eq!(source.vocabulary(), ["ALPHA", "BRAVO", "CHARLIE"]);

        let missing = WordSource::from_file(Path::new("/nonexistent/words.txt"));
        assert!(matches!(missing, Err(VocabularyError::Read { .. })));
    }
}
