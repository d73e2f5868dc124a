//! Grade 1 braille letter cells
//!
//! Dots are numbered down the left column then the right:
//!
//! ```text
//! 1 4
//! 2 5
//! 3 6
//! ```

use super::{join_blocks, letter_index, normalize, InvalidWordError, RenderedForm};

/// Raised dots for A-Z
const BRAILLE_PATTERNS: [&[u8]; 26] = [
    &[1],
    &[1, 2],
    &[1, 4],
    &[1, 4, 5],
    &[1, 5],
    &[1, 2, 4],
    &[1, 2, 4, 5],
    &[1, 2, 5],
    &[2, 4],
    &[2, 4, 5],
    &[1, 3],
    &[1, 2, 3],
    &[1, 3, 4],
    &[1, 3, 4, 5],
    &[1, 3, 5],
    &[1, 2, 3, 4],
    &[1, 2, 3, 4, 5],
    &[1, 2, 3, 5],
    &[2, 3, 4],
    &[2, 3, 4, 5],
    &[1, 3, 6],
    &[1, 2, 3, 6],
    &[2, 4, 5, 6],
    &[1, 3, 4, 6],
    &[1, 3, 4, 5, 6],
    &[1, 3, 5, 6],
];

pub const FILLED: char = '●';
pub const UNFILLED: char = '○';

pub const CELL_ROWS: usize = 3;
const CELL_GAP: &str = "   ";

/// (left, right) dot numbers per row
const ROW_DOTS: [(u8, u8); CELL_ROWS] = [(1, 4), (2, 5), (3, 6)];

/// Raised dots for an uppercase letter
pub fn dots_for(letter: char) -> Option<&'static [u8]> {
    if letter.is_ascii_uppercase() {
        Some(BRAILLE_PATTERNS[letter_index(letter)])
    } else {
        None
    }
}

/// Six-bit cell mask, bit `n - 1` set for raised dot `n`
pub fn cell_mask(letter: char) -> Option<u8> {
    dots_for(letter).map(|dots| dots.iter().fold(0, |mask, dot| mask | 1 << (dot - 1)))
}

fn draw_cell(mask: u8) -> Vec<String> {
    let glyph = |dot: u8| if mask & 1 << (dot - 1) != 0 { FILLED } else { UNFILLED };
    ROW_DOTS
        .iter()
        .map(|&(left, right)| format!("{} {}", glyph(left), glyph(right)))
        .collect()
}

/// 3-row art, one cell per letter
pub fn render(word: &str) -> Result<RenderedForm, InvalidWordError> {
    let cells: Vec<Vec<String>> = normalize(word)?
        .into_iter()
        .filter_map(cell_mask)
        .map(draw_cell)
        .collect();
    Ok(join_blocks(&cells, CELL_ROWS, CELL_GAP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_render_a() {
        let form = render("a").unwrap();
        assert_eq!(form.lines(), ["● ○", "○ ○", "○ ○"]);
    }

    #[test]
    fn test_render_c_and_q() {
        assert_eq!(render("C").unwrap().lines(), ["● ●", "○ ○", "○ ○"]);
        assert_eq!(render("Q").unwrap().lines(), ["● ●", "● ●", "● ○"]);
    }

    #[test]
    fn test_cells_joined_with_gap() {
        let form = render("AB").unwrap();
        assert_eq!(form.lines(), ["● ○   ● ○", "○ ○   ● ○", "○ ○   ○ ○"]);
    }

    #[test]
    fn test_every_letter_has_distinct_cell() {
        let masks: HashSet<u8> = ('A'..='Z').filter_map(cell_mask).collect();
        assert_eq!(masks.len(), 26);
        assert!(!masks.contains(&0));
    }

    #[test]
    fn test_rows_constant_width_linear() {
        for k in 1..=8 {
            let word = "Z".repeat(k);
            let form = render(&word).unwrap();
            assert_eq!(form.height(), CELL_ROWS);
            assert_eq!(form.width(), 6 * k - 3);
        }
    }
}
