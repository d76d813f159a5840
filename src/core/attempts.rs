//! Attempt budget: how many guesses one game allows.

use std::fmt;

use super::bounds::Bounds;
use super::error::GameError;

/// A validated, positive guess allowance, fixed once resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptBudget(i64);

impl AttemptBudget {
    /// Accept any count of one or more. Fails with
    /// [`GameError::AttemptBudget`] for zero or negative counts.
    pub fn new(count: i64) -> Result<Self, GameError> {
        if count < 1 {
            return Err(GameError::AttemptBudget);
        }
        Ok(Self(count))
    }

    /// The default allowance for `bounds`: one guess per distinct value.
    ///
    /// `Bounds::cardinality` is always at least one, so the default is
    /// always a valid budget.
    #[must_use]
    pub fn default_for(bounds: Bounds) -> Self {
        Self(bounds.cardinality())
    }

    /// The raw count.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AttemptBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
