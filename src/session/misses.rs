//! Miss log: which letters keep being misread
//!
//! Wrong guesses are compared letter by letter against the word. Each
//! mismatch counts as a confusion (expected letter -> typed letter). A letter
//! misread the same way three or more times is flagged for review.

use rustc_hash::FxHashMap;

/// Confusion count that marks a letter as a problem
const MISS_THRESHOLD: u32 = 3;

/// Placeholder for a letter the guess left out
pub const MISSING: char = '_';

#[derive(Clone, Debug, Default)]
pub struct MissLog {
    /// expected letter -> (typed letter -> count)
    confusions: FxHashMap<char, FxHashMap<char, u32>>,
    /// Words answered wrongly, with the guess given
    missed_words: Vec<(String, String)>,
}

impl MissLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a wrong guess against the word it should have been
    ///
    /// Both sides are expected uppercase. Letters past the end of the guess
    /// are recorded as [`MISSING`].
    pub fn record_miss(&mut self, word: &str, guess: &str) {
        let mut typed = guess.chars();
        for expected in word.chars() {
            let got = typed.next().unwrap_or(MISSING);
            self.record_confusion(expected, got);
        }
        self.missed_words.push((word.to_string(), guess.to_string()));
    }

    fn record_confusion(&mut self, expected: char, got: char) {
        if expected == got {
            return;
        }
        *self
            .confusions
            .entry(expected)
            .or_default()
            .entry(got)
            .or_insert(0) += 1;
    }

    /// (word, guess) for every wrong answer, in order
    pub fn missed_words(&self) -> &[(String, String)] {
        &self.missed_words
    }

    /// No wrong guess recorded
    pub fn is_empty(&self) -> bool {
        self.missed_words.is_empty()
    }

    /// Most common misreading of a letter
    pub fn primary_confusion(&self, expected: char) -> Option<(char, u32)> {
        self.confusions.get(&expected).and_then(|map| {
            map.iter()
                .max_by_key(|(&got, &count)| (count, std::cmp::Reverse(got)))
                .map(|(&got, &count)| (got, count))
        })
    }

    /// Letters misread the same way at least three times, sorted
    pub fn problem_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .confusions
            .iter()
            .filter(|(_, map)| map.values().any(|&count| count >= MISS_THRESHOLD))
            .map(|(&expected, _)| expected)
            .collect();
        letters.sort_unstable();
        letters
    }

    /// Most frequent confusions, highest first
    pub fn top_confusions(&self, count: usize) -> Vec<((char, char), u32)> {
        let mut pairs: Vec<((char, char), u32)> = self
            .confusions
            .iter()
            .flat_map(|(&expected, map)| {
                map.iter()
                    .map(move |(&got, &n)| ((expected, got), n))
            })
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        pairs.truncate(count);
        pairs
    }
}
