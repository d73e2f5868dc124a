//! Game loop: menu -> session -> completion, and the history screen

use super::display::{today_line, Display};
use super::input::{InputHandler, MenuAction};
use crate::app::AppContext;
use crate::encoding::{Encoding, InvalidWordError};
use crate::session::{RoundOutcome, Session, SessionError};
use chrono::{Local, NaiveDate};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    InvalidWord(#[from] InvalidWordError),
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Owns the terminal for the duration of play
pub struct Game {
    ctx: AppContext,
    display: Display,
    input: InputHandler,
}

impl Game {
    /// Take over the terminal (raw mode + alternate screen)
    pub fn new(ctx: AppContext) -> Result<Self, UiError> {
        let display = Display::alternate()?;
        Ok(Game {
            ctx,
            display,
            input: InputHandler::new(),
        })
    }

    fn today_summary(&self) -> String {
        let progress = self.ctx.progress();
        today_line(progress.day(today()), progress.all_time())
    }

    /// Main menu loop until the user quits
    pub fn run(&mut self) -> Result<(), UiError> {
        let item_count = super::display::menu_items().len();
        let mut selected = 0usize;

        loop {
            self.display.show_menu(selected, &self.today_summary())?;
            let key = self.input.wait_key()?;

            let action = match InputHandler::menu_action(&key) {
                Some(MenuAction::Select) => match Encoding::ALL.get(selected) {
                    Some(&mode) => MenuAction::Play(mode),
                    None if selected == Encoding::ALL.len() => MenuAction::History,
                    None => MenuAction::Quit,
                },
                Some(action) => action,
                None => continue,
            };

            match action {
                MenuAction::Up => selected = (selected + item_count - 1) % item_count,
                MenuAction::Down => selected = (selected + 1) % item_count,
                MenuAction::Play(mode) => self.play(mode)?,
                MenuAction::History => self.history()?,
                MenuAction::Quit => return Ok(()),
                MenuAction::Select => {}
            }
        }
    }

    /// Play one session in `mode`
    pub fn play(&mut self, mode: Encoding) -> Result<(), UiError> {
        let mut session = self.ctx.new_session(mode);
        session.start();
        tracing::info!(?mode, words = session.words().len(), "session begins");

        let mut guess = String::new();
        let mut last: Option<RoundOutcome> = None;

        while !session.is_complete() {
            self.draw_round(&session, &guess, last.as_ref())?;

            let key = self.input.wait_key()?;
            if InputHandler::is_exit(&key) {
                tracing::info!(scored = session.tally().total, "session abandoned");
                break;
            } else if InputHandler::is_backspace(&key) {
                guess.pop();
            } else if InputHandler::is_enter(&key) {
                if !guess.is_empty() {
                    session.submit_guess(&guess)?;
                    last = session.outcomes().last().cloned();
                    guess.clear();
                }
            } else if let Some(letter) = InputHandler::key_to_letter(&key) {
                guess.push(letter);
            }
        }

        self.finish(&session)
    }

    fn draw_round(
        &self,
        session: &Session,
        guess: &str,
        last: Option<&RoundOutcome>,
    ) -> Result<(), UiError> {
        let (number, total) = session.position();
        let title = format!(
            "{} - Word {}/{}",
            session.encoding().display_name(),
            number,
            total
        );
        let mut row = self.display.show_title(&title)?;

        if let Some(form) = session.current_render() {
            row = self.display.show_rendered(row, &form?)?;
        }

        let prompt_row = row;
        row += 2;
        self.display.show_score(row, session.tally())?;
        row += 1;
        if let Some(outcome) = last {
            self.display.show_feedback(row, outcome)?;
        }
        row += 2;
        self.display
            .show_help(row, "Press Enter to submit  |  Esc to return to menu")?;

        // Drawn last so the cursor rests in the prompt
        self.display.show_prompt(prompt_row, guess)?;
        Ok(())
    }

    /// Record whatever was scored, then show the summary
    ///
    /// A session abandoned before any guess leaves no trace.
    fn finish(&mut self, session: &Session) -> Result<(), UiError> {
        let tally = session.tally();
        if tally.total == 0 {
            return Ok(());
        }

        let save_error = match self.ctx.record_session(today(), tally) {
            Ok(()) => None,
            Err(e) => {
                tracing::error!(error = %e, "failed to save progress");
                Some(e.to_string())
            }
        };

        self.display
            .show_completion(session, &self.today_summary(), save_error.as_deref())?;
        self.input.wait_key()?;
        Ok(())
    }

    fn history(&mut self) -> Result<(), UiError> {
        let entries = self.ctx.progress().get_history();
        self.display.show_history(&entries)?;
        self.input.wait_key()?;
        Ok(())
    }

    /// Restore the terminal and hand back the context
    pub fn shutdown(self) -> Result<AppContext, UiError> {
        self.display.shutdown()?;
        let Game { ctx, .. } = self;
        Ok(ctx)
    }
}
