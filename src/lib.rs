//! # rust-guess
//!
//! A console number-guessing game with a deterministic, testable core.
//!
//! The player picks an inclusive integer range and an optional attempt
//! budget (defaulting to the range's cardinality), then guesses a secret
//! drawn uniformly from the range until correct or out of attempts.
//!
//! ## Design
//!
//! - **IO seam**: every read and write goes through [`Console`], generic
//!   over `BufRead`/`Write` streams, so tests script stdin and capture
//!   both output streams without touching real terminals.
//! - **Fail-fast validation**: a malformed line, an inverted range, or a
//!   non-positive budget writes one diagnostic to the error stream and
//!   aborts the run as a [`GameError`]. No re-prompting, no retries.
//! - **Deterministic draws**: [`GameRng`] is a seeded ChaCha8 stream drawn
//!   with uniform integer ranges, entropy-seeded in the binary and
//!   fixed-seeded in tests.
//!
//! ## Modules
//!
//! - `core`: bounds, attempt budgets, errors, RNG
//! - `console`: the IO seam and the line parser
//! - `game`: setup prompts, the guess loop, the run orchestration

pub mod console;
pub mod core;
pub mod game;

pub use crate::console::{BlankPolicy, Console};
pub use crate::core::{AttemptBudget, Bounds, GameError, GameRng};
pub use crate::game::{GameOutcome, GuessOutcome};
