#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::non_ascii_literal,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]

//! Torch Lite, the calculator core of a torch-and-calculator widget.
//!
//! The calculator is driven by key presses through a [`Session`], which owns
//! the display string and a history of evaluations:
//!
//! ```
//! use torchlite::Session;
//!
//! let mut session = Session::new();
//! session.append("2×π");
//! let value = session.evaluate().unwrap().unwrap();
//! assert!((value - 6.28318530718).abs() < 1e-9);
//! assert_eq!(session.display(), "6.2831853072");
//! assert_eq!(session.history().len(), 1);
//! ```
//!
//! Expressions can also be evaluated directly with [`eval`]:
//!
//! ```
//! assert_eq!(torchlite::eval("2 + 3 × 4"), Ok(14.0));
//! assert_eq!(torchlite::eval("2^3^2"), Ok(512.0));
//! assert_eq!(torchlite::eval("5 ÷ 0"), Err(torchlite::Error::DivisionByZero));
//! ```
//!
//! # Language definition
//!
//! The language understood by the calculator contains:
//!
//! - decimal literals: `12`, `0.5`, `.5`, `3.`;
//! - left and right parenthesis;
//! - operators, tightest first: `^` (or `**`) for exponentiation, right
//!   associative; unary `-`; `*` (`×`), `/` (`÷`) and `%` (remainder), left
//!   associative; `+` and `-` (`−`), left associative;
//! - the constants `π` and `e`;
//! - the functions `sin`, `cos`, `tan` (arguments in degrees), `ln`, `log`
//!   (base 10) and `sqrt` (or `√`), always followed by a parenthesized
//!   argument which may itself contain function calls.
//!
//! Any other symbol is forbidden in the input, and there is no implicit
//! multiplication: `2π` is a syntax error.
//!
//! Evaluation never yields infinities or `NaN`: division by zero, logarithms
//! of non-positive values, square roots of negative values and overflows are
//! reported as [`Error`]s.
//!
//! # Technical details
//!
//! Glyphs and constants are first rewritten in a plain ASCII syntax. Function
//! calls are then reduced to values in a single pass, innermost first. What
//! remains is tokenized, put in reverse polish notation by a shunting-yard
//! pass, and evaluated on a stack of `f64` values. No stage recurses, so the
//! length or nesting of the input is bounded by memory only.
//!
//! The [`Torch`] state machine drives the flashlight half of the widget. It
//! shares nothing with the calculator.

#[macro_use]
extern crate lazy_static;

mod config;
mod error;
mod expr;
mod format;
mod functions;
mod history;
mod lexer;
mod normalize;
mod resolve;
mod rpn;
mod session;
mod token;
mod torch;

pub use config::Config;
pub use error::Error;
pub use expr::{eval, Expr};
pub use format::format_number;
pub use functions::{Function, FUNCTIONS};
pub use history::{History, HistoryEntry};
pub use normalize::normalize;
pub use session::{Session, State};
pub use torch::{Torch, TorchCommand, TorchError, TorchState, UNSUPPORTED_MESSAGE};
