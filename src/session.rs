use crate::config::Config;
use crate::error::Error;
use crate::expr::eval;
use crate::format::format_number;
use crate::history::{History, HistoryEntry};
use tracing::debug;

/// Where the calculator display stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing typed
    Empty,
    /// An expression is being typed, or has just failed to evaluate
    Composing,
    /// The display holds the most recent result
    Evaluated,
}

/// The calculator as driven by key presses.
///
/// A session owns the display string and the history of evaluations. Typing
/// after a successful evaluation starts a fresh expression. A failed
/// evaluation keeps the expression on the display for correction and exposes
/// the error through [`error`](#method.error) until the next key press.
///
/// ```
/// # use torchlite::{Session, State};
/// let mut session = Session::new();
/// session.append("2+3×4");
/// assert_eq!(session.evaluate(), Some(Ok(14.0)));
/// assert_eq!(session.display(), "14");
/// assert_eq!(session.state(), State::Evaluated);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    display: String,
    state: State,
    error: Option<Error>,
    history: History,
    config: Config,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            display: String::new(),
            state: State::Empty,
            error: None,
            history: History::new(config.history_limit),
            config,
        }
    }

    /// Type `text` on the keypad: digits, operators, glyphs or function
    /// names such as `sin(`.
    pub fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.state == State::Evaluated {
            self.display.clear();
        }
        self.display.push_str(text);
        self.state = State::Composing;
        self.error = None;
    }

    /// Empty the display. History is kept.
    pub fn clear(&mut self) {
        debug!("display cleared");
        self.display.clear();
        self.state = State::Empty;
        self.error = None;
    }

    /// Remove the last character of the display.
    pub fn backspace(&mut self) {
        if self.display.pop().is_none() {
            return;
        }
        self.state = if self.display.is_empty() {
            State::Empty
        } else {
            State::Composing
        };
        self.error = None;
    }

    /// Evaluate the display and record the outcome in history.
    ///
    /// Returns `None` without touching anything when the display is empty.
    /// On success the display is replaced by the formatted result.
    pub fn evaluate(&mut self) -> Option<Result<f64, Error>> {
        if self.state == State::Empty || self.display.is_empty() {
            return None;
        }

        let expression = self.display.clone();
        let result = eval(&expression);
        match result {
            Ok(value) => {
                debug!(%expression, value, "expression evaluated");
                self.display = format_number(value, self.config.precision);
                self.state = State::Evaluated;
                self.error = None;
            }
            Err(ref error) => {
                debug!(%expression, %error, "evaluation failed");
                self.state = State::Composing;
                self.error = Some(error.clone());
            }
        }

        if result.is_ok() || self.config.record_failures {
            self.history.push(HistoryEntry::new(expression, result.clone()));
        }
        Some(result)
    }

    /// The current display string
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The error of the last evaluation, until the display changes
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Forget everything, as when the calculator is closed.
    pub fn reset(&mut self) {
        self.clear();
        self.history.clear();
    }
}
