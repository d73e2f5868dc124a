//! A1Z26: each letter becomes its position in the alphabet

use super::{letter_index, normalize, InvalidWordError, RenderedForm};

/// 1-based alphabet position of an uppercase letter
pub fn number_for(letter: char) -> Option<u8> {
    if letter.is_ascii_uppercase() {
        Some(letter_index(letter) as u8 + 1)
    } else {
        None
    }
}

/// Space separated numbers, e.g. `CAB` -> `3 1 2`
pub fn encode_word(word: &str) -> Result<String, InvalidWordError> {
    let letters = normalize(word)?;
    Ok(letters
        .into_iter()
        .filter_map(number_for)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" "))
}

/// Single line of numbers
pub fn render(word: &str) -> Result<RenderedForm, InvalidWordError> {
    Ok(RenderedForm::new(vec![encode_word(word)?]))
}
