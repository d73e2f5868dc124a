//! Flag semaphore
//!
//! Each letter is a pair of arm positions. A letter is drawn on a 5x5 grid
//! with the signaller `O` in the centre, each arm one cell out and its flag
//! `#` two cells out:
//!
//! ```text
//!     #      D: Down + Up
//!     |
//!     O
//!     |
//!     #
//! ```

use super::{join_blocks, letter_index, normalize, InvalidWordError, RenderedForm};

/// Eighth-of-a-circle arm positions, clockwise from straight down
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArmPosition {
    Down,
    DownLeft,
    Left,
    UpLeft,
    Up,
    UpRight,
    Right,
    DownRight,
}

impl ArmPosition {
    /// (row, column) step away from the body
    fn offset(self) -> (isize, isize) {
        match self {
            ArmPosition::Down => (1, 0),
            ArmPosition::DownLeft => (1, -1),
            ArmPosition::Left => (0, -1),
            ArmPosition::UpLeft => (-1, -1),
            ArmPosition::Up => (-1, 0),
            ArmPosition::UpRight => (-1, 1),
            ArmPosition::Right => (0, 1),
            ArmPosition::DownRight => (1, 1),
        }
    }

    fn glyph(self) -> char {
        match self {
            ArmPosition::Down | ArmPosition::Up => '|',
            ArmPosition::Left | ArmPosition::Right => '-',
            ArmPosition::DownLeft | ArmPosition::UpRight => '/',
            ArmPosition::UpLeft | ArmPosition::DownRight => '\\',
        }
    }
}

use ArmPosition::{Down, DownLeft, DownRight, Left, Right, Up, UpLeft, UpRight};

/// (left arm, right arm) for A-Z
const SEMAPHORE_POSITIONS: [(ArmPosition, ArmPosition); 26] = [
    (Down, DownLeft),
    (Down, Left),
    (Down, UpLeft),
    (Down, Up),
    (Down, UpRight),
    (Down, Right),
    (Down, DownRight),
    (DownLeft, Left),
    (DownLeft, UpLeft),
    (Up, Right),
    (DownLeft, Up),
    (DownLeft, UpRight),
    (DownLeft, Right),
    (DownLeft, DownRight),
    (Left, UpLeft),
    (Left, Up),
    (Left, UpRight),
    (Left, Right),
    (Left, DownRight),
    (UpLeft, Up),
    (UpLeft, UpRight),
    (Up, DownRight),
    (UpRight, Right),
    (UpRight, DownRight),
    (UpLeft, Right),
    (Right, DownRight),
];

pub const GRID_SIZE: usize = 5;
const CENTER: isize = 2;
pub const BODY: char = 'O';
pub const FLAG: char = '#';
const LETTER_GAP: &str = "  ";

/// Arm positions for an uppercase letter
pub fn positions_for(letter: char) -> Option<(ArmPosition, ArmPosition)> {
    if letter.is_ascii_uppercase() {
        Some(SEMAPHORE_POSITIONS[letter_index(letter)])
    } else {
        None
    }
}

fn draw_letter((left, right): (ArmPosition, ArmPosition)) -> Vec<String> {
    let mut grid = [[' '; GRID_SIZE]; GRID_SIZE];
    grid[CENTER as usize][CENTER as usize] = BODY;

    for arm in [left, right] {
        let (dr, dc) = arm.offset();
        for (distance, glyph) in [(1, arm.glyph()), (2, FLAG)] {
            let row = (CENTER + dr * distance) as usize;
            let col = (CENTER + dc * distance) as usize;
            grid[row][col] = glyph;
        }
    }

    grid.iter().map(|row| row.iter().collect()).collect()
}

/// 5-row art, one flag figure per letter
pub fn render(word: &str) -> Result<RenderedForm, InvalidWordError> {
    let letters: Vec<Vec<String>> = normalize(word)?
        .into_iter()
        .filter_map(positions_for)
        .map(draw_letter)
        .collect();
    Ok(join_blocks(&letters, GRID_SIZE, LETTER_GAP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn cell(form: &RenderedForm, row: usize, col: usize) -> char {
        form.lines()[row].chars().nth(col).unwrap()
    }

    #[test]
    fn test_render_d() {
        let form = render("D").unwrap();
        assert_eq!(form.lines(), ["  #  ", "  |  ", "  O  ", "  |  ", "  #  "]);
    }

    #[test]
    fn test_render_a() {
        let form = render("a").unwrap();
        assert_eq!(cell(&form, 3, 2), '|');
        assert_eq!(cell(&form, 4, 2), '#');
        assert_eq!(cell(&form, 3, 1), '/');
        assert_eq!(cell(&form, 4, 0), '#');
    }

    #[test]
    fn test_body_always_centered() {
        for letter in 'A'..='Z' {
            let form = render(&letter.to_string()).unwrap();
            assert_eq!(cell(&form, 2, 2), BODY, "letter {letter}");
        }
    }

    #[test]
    fn test_arms_never_overlap_and_letters_distinct() {
        let mut seen = HashSet::new();
        for letter in 'A'..='Z' {
            let (left, right) = positions_for(letter).unwrap();
            assert_ne!(left, right, "letter {letter}");
            let mut pair = [left as u8, right as u8];
            pair.sort();
            assert!(seen.insert(pair), "duplicate signal for {letter}");
        }
    }

    #[test]
    fn test_rows_constant_width_linear() {
        for k in 1..=8 {
            let form = render(&"K".repeat(k)).unwrap();
            assert_eq!(form.height(), GRID_SIZE);
            assert_eq!(form.width(), 7 * k - 2);
        }
    }
}
