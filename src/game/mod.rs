//! Game flow: setup prompts and the guess loop.
//!
//! One linear run: collect bounds, resolve the attempt budget, draw a
//! secret, loop over guesses. Control flows strictly top to bottom and the
//! first error aborts everything; the only process-level decision (the
//! exit status) belongs to the binary.

pub mod setup;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::Console;
use crate::core::{AttemptBudget, Bounds, GameError, GameRng};

/// Per-guess result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess equals the secret. Terminal.
    Match,
    /// Not this time; the loop continues or exhausts.
    Mismatch,
}

/// Terminal state of a finished game. Both variants are a completed game
/// as far as the process is concerned; only errors are abnormal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// The player matched the secret, using this many guesses.
    Won { attempts_used: i64 },
    /// The budget ran out; the secret is revealed on the way out.
    Lost { secret: i64 },
}

/// Compare one guess against the secret.
#[must_use]
pub fn check_guess(guess: i64, secret: i64) -> GuessOutcome {
    if guess == secret {
        GuessOutcome::Match
    } else {
        GuessOutcome::Mismatch
    }
}

/// Play one game: draw a secret from `bounds`, then run the guess loop.
pub fn play<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    bounds: Bounds,
    budget: AttemptBudget,
    rng: &mut GameRng,
) -> Result<GameOutcome, GameError> {
    let secret = rng.draw_secret(bounds);
    debug!(
        min = bounds.min(),
        max = bounds.max(),
        budget = budget.get(),
        "game start"
    );
    play_with_secret(console, secret, budget)
}

/// The guess loop, with the secret supplied by the caller.
///
/// Scenario tests use this directly to force a secret; [`play`] is the
/// only production caller. The secret does not have to lie inside any
/// bounds — an unreachable secret simply exhausts the budget.
///
/// A correct guess stops the loop at once: remaining attempts are neither
/// consumed nor reported. A malformed guess aborts the game as an error,
/// not a loss.
pub fn play_with_secret<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    secret: i64,
    budget: AttemptBudget,
) -> Result<GameOutcome, GameError> {
    for attempt in 1..=budget.get() {
        let guess = console.prompt_required_int("Enter your guess: ")?;

        match check_guess(guess, secret) {
            GuessOutcome::Match => {
                console.say_line("Correct answer!")?;
                debug!(attempt, "game won");
                return Ok(GameOutcome::Won {
                    attempts_used: attempt,
                });
            }
            GuessOutcome::Mismatch => console.say("Wrong answer. ")?,
        }
    }

    console.say_line(&format!(
        "You've reached the limit! The correct answer was {secret}"
    ))?;
    debug!("game lost");
    Ok(GameOutcome::Lost { secret })
}

/// One complete run: collect bounds, resolve the budget, play.
///
/// Errors from any stage propagate unchanged; nothing is retried.
pub fn run<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    rng: &mut GameRng,
) -> Result<GameOutcome, GameError> {
    let bounds = setup::collect_bounds(console)?;
    let budget = setup::resolve_attempts(console, bounds)?;
    play(console, bounds, budget, rng)
}
