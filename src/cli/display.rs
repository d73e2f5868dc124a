//! Terminal display and UI rendering
//!
//! Features:
//! - Main menu with today's progress
//! - Encoded word, typed guess and running score
//! - Round feedback and completion summary
//! - Per-day history table
//!
//! Text layout lives in plain functions returning `String`s so it can be
//! tested without a terminal; `Display` only positions and colours it.

use crate::encoding::{Encoding, RenderedForm};
use crate::progress::{DayCount, DayEntry};
use crate::session::{RoundOutcome, Session, Tally, MISSING};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{
    cursor, execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::cell::Cell;
use std::io::{stdout, Result as IoResult, Write};

/// Left margin for all text
const MARGIN: u16 = 2;
/// Extra indent for encoded words
const ART_INDENT: u16 = 4;
const BAR_WIDTH: usize = 20;
/// Mix-ups listed on the completion screen
const TOP_CONFUSIONS: usize = 3;

/// Menu entries in display order: the four modes, then history and quit
pub fn menu_items() -> Vec<String> {
    let mut items: Vec<String> = Encoding::ALL
        .iter()
        .map(|mode| format!("[{}] {}", mode.shortcut(), mode.display_name()))
        .collect();
    items.push("[H] History".to_string());
    items.push("[Q] Quit".to_string());
    items
}

fn percent(correct: u32, total: u32) -> u32 {
    if total == 0 {
        0
    } else {
        (correct as f64 * 100.0 / total as f64).round() as u32
    }
}

/// Menu status line: today's counts and the all-time word count
pub fn today_line(today: DayCount, all_time: DayCount) -> String {
    let pct = today.accuracy().map_or(0, |a| (a * 100.0).round() as u32);
    format!(
        "Today: {}/{} correct ({}%)  |  All time: {} words",
        today.correct, today.total, pct, all_time.total
    )
}

/// Running score shown under each word
pub fn score_line(tally: Tally) -> String {
    format!(
        "Score: {}/{}  |  Missed: {}  |  Streak: {}",
        tally.correct,
        tally.total,
        tally.incorrect(),
        tally.streak
    )
}

/// Result of the previous round
pub fn feedback_line(outcome: &RoundOutcome) -> String {
    if outcome.correct {
        format!("Correct! {}", outcome.word)
    } else {
        format!("Not quite: it was {} (you typed {})", outcome.word, outcome.guess)
    }
}

/// One row per day: date, counts, percentage and a bar
pub fn history_lines(entries: &[DayEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let pct = percent(entry.correct, entry.total);
            let filled = (pct as usize * BAR_WIDTH) / 100;
            format!(
                "{}  {:>5}/{:<5} {:>3}%  {}{}",
                entry.date,
                entry.correct,
                entry.total,
                pct,
                "█".repeat(filled),
                "░".repeat(BAR_WIDTH - filled)
            )
        })
        .collect()
}

/// Heading for the summary screen; abandoned sessions are not "complete"
pub fn completion_title(session: &Session) -> &'static str {
    if session.is_complete() {
        "Session Complete!"
    } else {
        "Session Ended"
    }
}

/// Summary lines for a finished (or abandoned) session
pub fn completion_lines(session: &Session) -> Vec<String> {
    let tally = session.tally();
    let mut lines = vec![format!(
        "You read {} of {} {} words ({}%)",
        tally.correct,
        tally.total,
        session.encoding().display_name(),
        percent(tally.correct, tally.total)
    )];

    if !session.is_complete() {
        let (_, planned) = session.position();
        lines.push(format!("Session ended early after {} of {} words", tally.total, planned));
    }
    lines.push(format!("Best streak: {}", tally.best_streak));

    let misses = session.misses();
    if !misses.is_empty() {
        let missed: Vec<String> = misses
            .missed_words()
            .iter()
            .map(|(word, guess)| {
                if guess.is_empty() {
                    word.clone()
                } else {
                    format!("{word} ({guess})")
                }
            })
            .collect();
        lines.push(format!("Missed: {}", missed.join(", ")));
    }

    let mixups: Vec<String> = misses
        .top_confusions(TOP_CONFUSIONS)
        .into_iter()
        .map(|((expected, got), count)| confusion_text(expected, got, count))
        .collect();
    if !mixups.is_empty() {
        lines.push(format!("Common mix-ups: {}", mixups.join(", ")));
    }

    let problems: Vec<String> = misses
        .problem_letters()
        .into_iter()
        .map(|letter| match misses.primary_confusion(letter) {
            Some((got, _)) if got != MISSING => format!("{letter} (read as {got})"),
            _ => letter.to_string(),
        })
        .collect();
    if !problems.is_empty() {
        lines.push(format!("Letters to review: {}", problems.join(", ")));
    }
    lines
}

fn confusion_text(expected: char, got: char, count: u32) -> String {
    if got == MISSING {
        format!("{expected} left out ×{count}")
    } else {
        format!("{expected} read as {got} ×{count}")
    }
}

/// Run `undo` if `result` failed, then pass the result through
fn undo_on_error<T>(result: IoResult<T>, undo: impl FnOnce() -> IoResult<()>) -> IoResult<T> {
    if result.is_err() {
        let _ = undo();
    }
    result
}

/// Terminal display manager
pub struct Display {
    /// Cleared once the terminal has been restored
    active: Cell<bool>,
}

impl Display {
    /// Enter raw mode and the alternate screen; both are undone by `shutdown`
    pub fn alternate() -> IoResult<Self> {
        terminal::enable_raw_mode()?;
        undo_on_error(
            execute!(stdout(), EnterAlternateScreen),
            terminal::disable_raw_mode,
        )?;
        Ok(Display {
            active: Cell::new(true),
        })
    }

    /// Terminal height in rows
    pub fn height(&self) -> u16 {
        terminal::size().map(|(_, rows)| rows).unwrap_or(24)
    }

    /// Terminal width in columns
    pub fn width(&self) -> u16 {
        terminal::size().map(|(cols, _)| cols).unwrap_or(80)
    }

    /// Clear the screen and home the cursor
    pub fn clear(&self) -> IoResult<()> {
        execute!(
            stdout(),
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    /// Clear and draw a title; returns the next free row
    pub fn show_title(&self, title: &str) -> IoResult<u16> {
        self.clear()?;
        execute!(
            stdout(),
            cursor::MoveTo(MARGIN, 1),
            SetForegroundColor(Color::Yellow),
            SetAttribute(Attribute::Bold),
            Print(title),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        Ok(3)
    }

    fn print_at(&self, row: u16, text: &str, color: Option<Color>) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(stdout, cursor::MoveTo(MARGIN, row))?;
        match color {
            Some(color) => execute!(stdout, SetForegroundColor(color), Print(text), ResetColor)?,
            None => execute!(stdout, Print(text))?,
        }
        Ok(())
    }

    /// Main menu with `selected` highlighted
    pub fn show_menu(&self, selected: usize, today: &str) -> IoResult<()> {
        let mut row = self.show_title("BORSE - Code Practice Game")?;
        self.print_at(row, today, Some(Color::Cyan))?;
        row += 2;
        self.print_at(row, "Select a mode to practice:", None)?;
        row += 2;

        let mut stdout = stdout();
        let items = menu_items();
        for (i, item) in items.iter().enumerate() {
            execute!(stdout, cursor::MoveTo(MARGIN + 2, row + i as u16))?;
            if i == selected {
                execute!(
                    stdout,
                    SetAttribute(Attribute::Reverse),
                    Print(format!("  {item}  ")),
                    SetAttribute(Attribute::Reset)
                )?;
            } else {
                execute!(stdout, Print(format!("  {item}  ")))?;
            }
        }

        let hint_row = (row + items.len() as u16 + 2).min(self.height().saturating_sub(2));
        self.print_at(
            hint_row,
            "Use arrows + Enter, or press shortcut key",
            Some(Color::DarkGrey),
        )?;
        stdout.flush()
    }

    /// Draw an encoded word centred when it fits; returns the next free row
    pub fn show_rendered(&self, row: u16, form: &RenderedForm) -> IoResult<u16> {
        let art_width = u16::try_from(form.width()).unwrap_or(u16::MAX);
        let col = ART_INDENT.max(self.width().saturating_sub(art_width) / 2);
        let mut stdout = stdout();
        for (i, line) in form.lines().iter().enumerate() {
            execute!(stdout, cursor::MoveTo(col, row + i as u16), Print(line))?;
        }
        Ok(row + form.height() as u16 + 2)
    }

    /// Guess prompt; leaves the cursor after the typed text
    pub fn show_prompt(&self, row: u16, guess: &str) -> IoResult<()> {
        const PROMPT: &str = "Type the word: ";
        execute!(
            stdout(),
            cursor::MoveTo(MARGIN, row),
            SetForegroundColor(Color::Yellow),
            Print(PROMPT),
            ResetColor,
            Print(guess),
            cursor::Show,
            cursor::MoveTo(MARGIN + (PROMPT.len() + guess.chars().count()) as u16, row)
        )?;
        stdout().flush()
    }

    /// Score line, coloured by accuracy
    pub fn show_score(&self, row: u16, tally: Tally) -> IoResult<()> {
        let color = if tally.accuracy() > 0.9 {
            Color::Green
        } else if tally.accuracy() > 0.7 {
            Color::Yellow
        } else {
            Color::Red
        };
        self.print_at(row, &score_line(tally), Some(color))
    }

    /// Previous round's result in green or red
    pub fn show_feedback(&self, row: u16, outcome: &RoundOutcome) -> IoResult<()> {
        let color = if outcome.correct {
            Color::Green
        } else {
            Color::Red
        };
        self.print_at(row, &feedback_line(outcome), Some(color))
    }

    /// Dimmed hint text
    pub fn show_help(&self, row: u16, text: &str) -> IoResult<()> {
        self.print_at(row, text, Some(Color::DarkGrey))
    }

    /// Summary screen after a session
    pub fn show_completion(
        &self,
        session: &Session,
        today: &str,
        save_error: Option<&str>,
    ) -> IoResult<()> {
        let mut row = self.show_title(completion_title(session))?;
        for (i, line) in completion_lines(session).iter().enumerate() {
            let color = if i == 0 { Some(Color::Green) } else { None };
            self.print_at(row, line, color)?;
            row += 1;
        }
        row += 1;
        self.print_at(row, today, Some(Color::Cyan))?;
        row += 2;

        if let Some(error) = save_error {
            self.print_at(row, &format!("Could not save progress: {error}"), Some(Color::Red))?;
            row += 2;
        }

        let bottom = row.max(self.height().saturating_sub(3));
        self.show_help(bottom, "Press any key to continue...")?;
        stdout().flush()
    }

    /// Per-day history table, newest rows kept when it overflows
    pub fn show_history(&self, entries: &[DayEntry]) -> IoResult<()> {
        let mut row = self.show_title("Progress History")?;
        if entries.is_empty() {
            self.print_at(row, "No sessions recorded yet.", None)?;
            row += 2;
        } else {
            // Most recent days that fit on screen
            let room = self.height().saturating_sub(row + 3) as usize;
            let lines = history_lines(entries);
            let skip = lines.len().saturating_sub(room.max(1));
            for line in &lines[skip..] {
                self.print_at(row, line, None)?;
                row += 1;
            }
            row += 1;
        }
        self.show_help(row, "Press any key to return to the menu")?;
        stdout().flush()
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&self) -> IoResult<()> {
        if !self.active.replace(false) {
            return Ok(());
        }
        execute!(stdout(), LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}
