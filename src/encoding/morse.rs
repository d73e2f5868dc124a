//! International Morse code
//!
//! Two forms per word:
//! - canonical: `.`/`-` codes, one space between letters (`... --- ...`)
//! - display: each letter as one run of `●`/`━` glyphs, five spaces between letters

use super::{letter_index, normalize, InvalidWordError, RenderedForm};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Codes for A-Z, indexed by letter
const MORSE_CODE: [&str; 26] = [
    ".-", "-...", "-.-.", "-..", ".", "..-.", "--.", "....", "..", ".---", "-.-", ".-..", "--",
    "-.", "---", ".--.", "--.-", ".-.", "...", "-", "..-", "...-", ".--", "-..-", "-.--", "--..",
];

pub const DOT: char = '●';
pub const DASH: char = '━';

/// Gap between letters on the display line
const LETTER_GAP: &str = "     ";

/// Code for a single uppercase letter
pub fn code_for(letter: char) -> Option<&'static str> {
    if letter.is_ascii_uppercase() {
        Some(MORSE_CODE[letter_index(letter)])
    } else {
        None
    }
}

/// Canonical dot/dash string for a word
pub fn encode_word(word: &str) -> Result<String, InvalidWordError> {
    let letters = normalize(word)?;
    Ok(letters
        .into_iter()
        .filter_map(code_for)
        .collect::<Vec<_>>()
        .join(" "))
}

/// Swap `.`/`-` for display glyphs
fn display_code(code: &str) -> String {
    code.chars()
        .map(|symbol| if symbol == '.' { DOT } else { DASH })
        .collect()
}

/// Single display line, letters split by a five-space gap
pub fn render(word: &str) -> Result<RenderedForm, InvalidWordError> {
    let letters = normalize(word)?;
    let line = letters
        .into_iter()
        .filter_map(code_for)
        .map(display_code)
        .collect::<Vec<_>>()
        .join(LETTER_GAP);
    Ok(RenderedForm::new(vec![line]))
}

fn reverse_table() -> &'static FxHashMap<&'static str, char> {
    static TABLE: OnceLock<FxHashMap<&'static str, char>> = OnceLock::new();
    TABLE.get_or_init(|| {
        MORSE_CODE
            .iter()
            .zip('A'..='Z')
            .map(|(&code, letter)| (code, letter))
            .collect()
    })
}

/// Decode a canonical string back to its word
///
/// Returns `None` for unknown codes or an empty input.
pub fn decode(code: &str) -> Option<String> {
    let table = reverse_table();
    let word: Option<String> = code
        .split_whitespace()
        .map(|letter_code| table.get(letter_code).copied())
        .collect();
    word.filter(|w| !w.is_empty())
}
