//! Console IO seam.
//!
//! All prompts, reads, and diagnostics flow through [`Console`], which is
//! generic over its streams: the binary hands it locked stdio, tests hand
//! it a scripted byte slice and capture buffers. Game logic never touches
//! `std::io::stdin` directly, so every component stays testable in
//! isolation.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::core::GameError;

/// Whether an empty line is an acceptable answer to a prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlankPolicy {
    /// An empty line reads as the blank sentinel (`None`).
    Allow,
    /// An empty line is a malformed integer.
    Reject,
}

/// The game's view of the terminal: one input stream, one output stream
/// for prompts and results, one error stream for diagnostics.
#[derive(Debug)]
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    /// Prompt for one line and parse it as a base-10 signed integer.
    ///
    /// Returns `Ok(None)` for an empty line under [`BlankPolicy::Allow`] —
    /// the "no value" sentinel, distinct from every integer. A line that
    /// parses comes back as `Ok(Some(value))`, negative values and zero
    /// included.
    ///
    /// Anything else writes the malformed-integer diagnostic to the error
    /// stream and fails with [`GameError::Input`]. Callers propagate the
    /// error; there is no re-prompting.
    ///
    /// ```
    /// use rust_guess::{BlankPolicy, Console};
    ///
    /// let mut console = Console::new(&b"-41\n"[..], Vec::new(), Vec::new());
    /// let value = console.prompt_int("Guess: ", BlankPolicy::Reject)?;
    /// assert_eq!(value, Some(-41));
    /// # Ok::<(), rust_guess::GameError>(())
    /// ```
    pub fn prompt_int(
        &mut self,
        prompt: &str,
        blank: BlankPolicy,
    ) -> Result<Option<i64>, GameError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let line = self.read_line()?;
        if blank == BlankPolicy::Allow && line.is_empty() {
            return Ok(None);
        }

        match line.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                debug!(line = %line, "rejected non-integer input");
                Err(self.fail(GameError::Input))
            }
        }
    }

    /// [`Self::prompt_int`] with blanks rejected, unwrapped: under
    /// [`BlankPolicy::Reject`] a successful parse always carries a value.
    pub fn prompt_required_int(&mut self, prompt: &str) -> Result<i64, GameError> {
        match self.prompt_int(prompt, BlankPolicy::Reject)? {
            Some(value) => Ok(value),
            None => unreachable!("BlankPolicy::Reject never yields the blank sentinel"),
        }
    }

    /// Write a message plus line terminator to the output stream.
    pub fn say_line(&mut self, message: &str) -> Result<(), GameError> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    /// Write a bare fragment, flushed so it lands before the next prompt.
    pub fn say(&mut self, message: &str) -> Result<(), GameError> {
        write!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Write `err`'s diagnostic to the error stream and hand the error
    /// back for propagation. Diagnostics carry no trailing newline.
    ///
    /// Stream failures while reporting are swallowed: the original error
    /// is the one worth keeping.
    pub fn fail(&mut self, err: GameError) -> GameError {
        let _ = write!(self.err, "{err}");
        let _ = self.err.flush();
        err
    }

    /// Consume the console, returning its streams. Tests use this to
    /// inspect captured output.
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }

    /// Read one line, stripping the terminator. End of stream reads as an
    /// empty line.
    fn read_line(&mut self) -> Result<String, GameError> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
