//! Encoding Library: word -> symbolic form and text rendering
//!
//! # Components
//! - `morse.rs`: International Morse code, canonical dot/dash string + decode
//! - `braille.rs`: Grade 1 braille cells drawn as 3x2 dot blocks
//! - `semaphore.rs`: Flag semaphore arm pairs drawn on a 5x5 grid
//! - `a1z26.rs`: Letter positions (A=1 ... Z=26)
//!
//! Every encoder is pure: same word in, same lines out.

pub mod a1z26;
pub mod braille;
pub mod morse;
pub mod semaphore;

use clap::ValueEnum;
use thiserror::Error;

/// A word could not be encoded
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidWordError {
    #[error("word is empty")]
    Empty,
    #[error("invalid character {ch:?} in word {word:?}")]
    InvalidChar { word: String, ch: char },
}

/// Validate a word and return its uppercase letters
///
/// Lowercase is accepted; anything outside A-Z is rejected.
pub fn normalize(word: &str) -> Result<Vec<char>, InvalidWordError> {
    if word.is_empty() {
        return Err(InvalidWordError::Empty);
    }

    word.chars()
        .map(|c| {
            let upper = c.to_ascii_uppercase();
            if upper.is_ascii_uppercase() {
                Ok(upper)
            } else {
                Err(InvalidWordError::InvalidChar {
                    word: word.to_string(),
                    ch: c,
                })
            }
        })
        .collect()
}

/// Zero-based alphabet index of an uppercase letter
pub(crate) fn letter_index(letter: char) -> usize {
    (letter as u8 - b'A') as usize
}

/// Lines of text representing a word in one encoding
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedForm {
    lines: Vec<String>,
}

impl RenderedForm {
    pub fn new(lines: Vec<String>) -> Self {
        RenderedForm { lines }
    }

    /// Display lines, top to bottom
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of display rows
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Widest row, counted in characters (glyphs like ● are multi-byte)
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// True when every line is blank
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.is_empty())
    }
}

/// Join per-letter blocks of equal height side by side
pub(crate) fn join_blocks(blocks: &[Vec<String>], rows: usize, gap: &str) -> RenderedForm {
    let lines = (0..rows)
        .map(|row| {
            blocks
                .iter()
                .map(|block| block[row].as_str())
                .collect::<Vec<_>>()
                .join(gap)
        })
        .collect();
    RenderedForm::new(lines)
}

/// Game mode: which encoding a session drills
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Encoding {
    Morse,
    Braille,
    Semaphore,
    #[value(name = "a1z26")]
    A1Z26,
}

impl Encoding {
    /// Menu order
    pub const ALL: [Encoding; 4] = [
        Encoding::Morse,
        Encoding::Braille,
        Encoding::Semaphore,
        Encoding::A1Z26,
    ];

    /// Render a word in this encoding
    pub fn render(self, word: &str) -> Result<RenderedForm, InvalidWordError> {
        match self {
            Encoding::Morse => morse::render(word),
            Encoding::Braille => braille::render(word),
            Encoding::Semaphore => semaphore::render(word),
            Encoding::A1Z26 => a1z26::render(word),
        }
    }

    /// Name shown in menus and titles
    pub fn display_name(self) -> &'static str {
        match self {
            Encoding::Morse => "Morse Code",
            Encoding::Braille => "Braille",
            Encoding::Semaphore => "Flag Semaphore",
            Encoding::A1Z26 => "A1Z26",
        }
    }

    /// Menu shortcut key (matched case-insensitively)
    pub fn shortcut(self) -> char {
        match self {
            Encoding::Morse => 'M',
            Encoding::Braille => 'B',
            Encoding::Semaphore => 'S',
            Encoding::A1Z26 => 'A',
        }
    }

    /// Encoding for a menu key, case-insensitive
    pub fn from_shortcut(key: char) -> Option<Encoding> {
        let key = key.to_ascii_uppercase();
        Encoding::ALL.into_iter().find(|mode| mode.shortcut() == key)
    }
}
