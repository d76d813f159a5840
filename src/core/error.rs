//! Error taxonomy for a game run.
//!
//! Every validation failure is fatal: the failing step writes one diagnostic
//! to the error stream and the error propagates unchanged to the process
//! entry point, which owns the only translation to an exit status. There is
//! no re-prompting and no partial retry.

use thiserror::Error;

/// Fatal errors for a single game run.
///
/// The `Display` text of the three validation variants is exactly the
/// diagnostic line written to stderr at the point of failure.
#[derive(Debug, Error)]
pub enum GameError {
    /// A line that should have held an integer did not.
    #[error("Invalid input: Input must be an integer.")]
    Input,

    /// The range bounds arrived inverted.
    #[error("Invalid input: Min number must be less than or equal to the max number.")]
    Range,

    /// An explicit attempt count below one.
    #[error("Invalid input: Number of attempts must be a positive integer.")]
    AttemptBudget,

    /// A console stream failed mid-read or mid-write.
    #[error("console stream error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_match_the_documented_strings() {
        assert_eq!(
            GameError::Input.to_string(),
            "Invalid input: Input must be an integer."
        );
        assert_eq!(
            GameError::Range.to_string(),
            "Invalid input: Min number must be less than or equal to the max number."
        );
        assert_eq!(
            GameError::AttemptBudget.to_string(),
            "Invalid input: Number of attempts must be a positive integer."
        );
    }
}
