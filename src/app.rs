//! Application context: the one owned bag of process-wide state
//!
//! Built once at startup and lent to the game loop. Holds the config
//! snapshot, the loaded progress record, the vocabulary and the random source
//! used for word selection.

use crate::config::Config;
use crate::encoding::Encoding;
use crate::progress::{PersistenceError, ProgressRecord};
use crate::session::{Session, Tally};
use crate::words::WordSource;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct AppContext {
    config: Config,
    progress: ProgressRecord,
    words: WordSource,
    rng: StdRng,
}

impl AppContext {
    /// Load progress from the configured file and seed the RNG
    ///
    /// With `seed` set, word selection is reproducible.
    pub fn new(config: Config, words: WordSource, seed: Option<u64>) -> Self {
        let progress = ProgressRecord::load(&config.progress_file);
        Self::with_progress(config, words, progress, seed)
    }

    /// Build around an already loaded progress record
    pub fn with_progress(
        config: Config,
        words: WordSource,
        progress: ProgressRecord,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        AppContext {
            config,
            progress,
            words,
            rng,
        }
    }

    /// Settings in effect
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Per-day history, including sessions recorded this run
    pub fn progress(&self) -> &ProgressRecord {
        &self.progress
    }

    /// Vocabulary sessions draw from
    pub fn words(&self) -> &WordSource {
        &self.words
    }

    /// Draw a fresh word sequence and build an unstarted session
    pub fn new_session(&mut self, encoding: Encoding) -> Session {
        let words = self.words.next_words(
            &mut self.rng,
            self.config.words_per_game as usize,
            self.config.single_letter_probability,
        );
        Session::new(encoding, words)
    }

    /// Add a session's tally to `date` and write progress to disk
    ///
    /// An empty tally is a no-op. On a write error the in-memory record
    /// keeps the counts so a later save can still persist them.
    pub fn record_session(&mut self, date: NaiveDate, tally: Tally) -> Result<(), PersistenceError> {
        if tally.total == 0 {
            return Ok(());
        }
        self.progress
            .record_session(date, tally.correct, tally.total);
        tracing::info!(
            %date,
            correct = tally.correct,
            total = tally.total,
            "session recorded"
        );
        self.progress.save(&self.config.progress_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(dir: &tempfile::TempDir, words_per_game: u32) -> AppContext {
        let config = Config {
            progress_file: dir.path().join("progress.json"),
            words_per_game,
            single_letter_probability: 0.0,
        };
        AppContext::new(config, WordSource::builtin(), Some(5))
    }

    #[test]
    fn test_new_session_uses_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(&dir, 4);
        let session = ctx.new_session(Encoding::Braille);
        assert_eq!(session.words().len(), 4);
        assert_eq!(session.encoding(), Encoding::Braille);
        assert!(session.words().iter().all(|w| ctx.words().vocabulary().contains(w)));
    }

    #[test]
    fn test_seeded_sessions_repeat() {
        let dir = tempfile::tempdir().unwrap();
        let a = context(&dir, 6).new_session(Encoding::Morse);
        let b = context(&dir, 6).new_session(Encoding::Morse);
        assert_eq!(a.words(), b.words());
    }

    #[test]
    fn test_record_session_persists() {
        let dir = tempfile::tempdir().unwrap();
        let date: NaiveDate = "2024-06-01".parse().unwrap();

        let mut ctx = context(&dir, 2);
        let mut session = ctx.new_session(Encoding::A1Z26);
        session.start();
        let first = session.current_word().unwrap().to_string();
        session.submit_guess(&first).unwrap();
        session.submit_guess("zzz").unwrap();
        ctx.record_session(date, session.tally()).unwrap();

        let reloaded = context(&dir, 2);
        let day = reloaded.progress().day(date);
        assert_eq!((day.correct, day.total), (1, 2));
    }

    #[test]
    fn test_empty_tally_not_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(&dir, 2);
        ctx.record_session("2024-06-01".parse().unwrap(), Tally::new())
            .unwrap();
        assert!(ctx.progress().is_empty());
        assert!(!dir.path().join("progress.json").exists());
    }
}
