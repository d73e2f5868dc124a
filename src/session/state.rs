//! Session state machine
//!
//! ```text
//! NotStarted --start--> AwaitingGuess --submit_guess--> Scoring
//!                             ^                            |
//!                             +------ words remain --------+
//!                                                          |
//!                              Completed <-- last word ----+
//! ```
//!
//! The word order is fixed when the session is built. Every word is scored
//! exactly once; there are no retries and no going back.

use super::misses::MissLog;
use super::tally::Tally;
use crate::encoding::{Encoding, InvalidWordError, RenderedForm};
use thiserror::Error;

/// Session lifecycle phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    AwaitingGuess,
    /// Transient while a guess is judged
    Scoring,
    Completed,
}

/// Protocol misuse by the caller
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session has not been started")]
    NotStarted,
    #[error("session already completed")]
    AlreadyCompleted,
}

/// Outcome of a single guess
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessResult {
    pub correct: bool,
    /// This was the final word of the session
    pub is_last: bool,
}

/// One scored round, kept for the summary screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub word: String,
    pub guess: String,
    pub correct: bool,
}

/// Trimmed, uppercased guess
pub fn normalize_guess(text: &str) -> String {
    text.trim().to_uppercase()
}

#[derive(Clone, Debug)]
pub struct Session {
    encoding: Encoding,
    words: Vec<String>,
    index: usize,
    phase: SessionPhase,
    tally: Tally,
    outcomes: Vec<RoundOutcome>,
    misses: MissLog,
}

impl Session {
    /// Create a session over a fixed word sequence
    pub fn new(encoding: Encoding, words: Vec<String>) -> Self {
        Session {
            encoding,
            words: words.into_iter().map(|w| w.to_uppercase()).collect(),
            index: 0,
            phase: SessionPhase::NotStarted,
            tally: Tally::new(),
            outcomes: Vec::new(),
            misses: MissLog::new(),
        }
    }

    /// Begin presenting words; an empty session completes immediately
    pub fn start(&mut self) {
        if self.phase != SessionPhase::NotStarted {
            return;
        }
        self.phase = if self.words.is_empty() {
            SessionPhase::Completed
        } else {
            SessionPhase::AwaitingGuess
        };
        tracing::debug!(
            encoding = ?self.encoding,
            words = self.words.len(),
            "session started"
        );
    }

    /// Encoding every word is shown in
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Current lifecycle state
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// True once every word has been scored
    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    /// The full word sequence, fixed at construction
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Word awaiting a guess
    pub fn current_word(&self) -> Option<&str> {
        match self.phase {
            SessionPhase::AwaitingGuess => self.words.get(self.index).map(String::as_str),
            _ => None,
        }
    }

    /// Current word in the session's encoding
    pub fn current_render(&self) -> Option<Result<RenderedForm, InvalidWordError>> {
        self.current_word().map(|word| self.encoding.render(word))
    }

    /// (1-based number of the current word, session length)
    pub fn position(&self) -> (usize, usize) {
        ((self.index + 1).min(self.words.len()), self.words.len())
    }

    /// Judge a guess for the current word and advance
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessResult, SessionError> {
        match self.phase {
            SessionPhase::NotStarted => return Err(SessionError::NotStarted),
            SessionPhase::Completed => return Err(SessionError::AlreadyCompleted),
            SessionPhase::AwaitingGuess | SessionPhase::Scoring => {}
        }
        self.phase = SessionPhase::Scoring;

        let word = self.words[self.index].clone();
        let guess = normalize_guess(text);
        let correct = guess == word;

        self.tally.record(correct);
        if !correct {
            self.misses.record_miss(&word, &guess);
        }
        tracing::debug!(%word, %guess, correct, "guess scored");
        self.outcomes.push(RoundOutcome {
            word,
            guess,
            correct,
        });

        self.index += 1;
        let is_last = self.index >= self.words.len();
        self.phase = if is_last {
            SessionPhase::Completed
        } else {
            SessionPhase::AwaitingGuess
        };

        Ok(GuessResult { correct, is_last })
    }

    /// Running (or final) score
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Scored rounds so far, in order
    pub fn outcomes(&self) -> &[RoundOutcome] {
        &self.outcomes
    }

    /// Letter confusions from wrong guesses
    pub fn misses(&self) -> &MissLog {
        &self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(words: &[&str]) -> Session {
        let mut session = Session::new(
            Encoding::Morse,
            words.iter().map(|w| w.to_string()).collect(),
        );
        session.start();
        session
    }

    #[test]
    fn test_cat_dog_scoring() {
        let mut session = started(&["CAT", "DOG"]);
        assert_eq!(session.current_word(), Some("CAT"));

        let first = session.submit_guess("cat").unwrap();
        assert_eq!(
            first,
            GuessResult {
                correct: true,
                is_last: false
            }
        );
        assert_eq!(session.current_word(), Some("DOG"));
        assert_eq!(session.position(), (2, 2));

        let second = session.submit_guess("fox").unwrap();
        assert_eq!(
            second,
            GuessResult {
                correct: false,
                is_last: true
            }
        );

        assert!(session.is_complete());
        let tally = session.tally();
        assert_eq!((tally.correct, tally.total), (1, 2));
        assert_eq!(session.misses().missed_words().len(), 1);
    }

    #[test]
    fn test_submit_after_completion_fails() {
        let mut session = started(&["HI"]);
        session.submit_guess("hi").unwrap();
        assert_eq!(
            session.submit_guess("hi"),
            Err(SessionError::AlreadyCompleted)
        );
        assert_eq!(session.tally().total, 1);
    }

    #[test]
    fn test_submit_before_start_fails() {
        let mut session = Session::new(Encoding::Braille, vec!["HI".to_string()]);
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert_eq!(session.submit_guess("hi"), Err(SessionError::NotStarted));
        assert_eq!(session.current_word(), None);
    }

    #[test]
    fn test_guess_is_trimmed_and_case_insensitive() {
        let mut session = started(&["sun"]);
        assert!(session.submit_guess("  SuN \n").unwrap().correct);
        assert_eq!(session.outcomes()[0].guess, "SUN");
    }

    #[test]
    fn test_empty_session_completes_on_start() {
        let mut session = started(&[]);
        assert!(session.is_complete());
        assert_eq!(session.current_render(), None);
        assert_eq!(session.submit_guess("x"), Err(SessionError::AlreadyCompleted));
    }

    #[test]
    fn test_current_render_uses_encoding() {
        let mut session = Session::new(Encoding::A1Z26, vec!["cab".to_string()]);
        session.start();
        let form = session.current_render().unwrap().unwrap();
        assert_eq!(form.lines(), ["3 1 2"]);
    }

    #[test]
    fn test_invalid_word_surfaces_on_render() {
        let session = started(&["NO WAY"]);
        assert!(matches!(session.current_render(), Some(Err(_))));
    }
}
