//! Borse - read Morse code, braille, flag semaphore and A1Z26 at a glance
//!
//! The core is a set of pure encoders, a word source, a per-session state
//! machine and a per-day progress record. The `cli` module is the terminal
//! front end that drives them.

pub mod app;
pub mod cli;
pub mod config;
pub mod encoding;
pub mod progress;
pub mod session;
pub mod words;

pub use app::AppContext;
pub use config::Config;
pub use encoding::{Encoding, InvalidWordError, RenderedForm};
pub use progress::{PersistenceError, ProgressRecord};
pub use session::{GuessResult, Session, SessionError};
pub use words::WordSource;
