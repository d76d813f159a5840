//! Inclusive integer bounds for one game.

use super::error::GameError;

/// The inclusive `[min, max]` interval the secret is drawn from.
///
/// Construction enforces `min <= max`, so every value of this type is a
/// valid interval. A degenerate single-value range (`min == max`) is legal.
///
/// ```
/// use rust_guess::Bounds;
///
/// let bounds = Bounds::new(1, 5).unwrap();
/// assert_eq!(bounds.cardinality(), 5);
///
/// // Inverted bounds never construct.
/// assert!(Bounds::new(5, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    min: i64,
    max: i64,
}

impl Bounds {
    /// Validate and build an interval. Fails with [`GameError::Range`]
    /// when `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self, GameError> {
        if min > max {
            return Err(GameError::Range);
        }
        Ok(Self { min, max })
    }

    /// Lower end, inclusive.
    #[must_use]
    pub const fn min(self) -> i64 {
        self.min
    }

    /// Upper end, inclusive.
    #[must_use]
    pub const fn max(self) -> i64 {
        self.max
    }

    /// Number of distinct values in the interval.
    ///
    /// Saturates at `i64::MAX` for intervals too wide to count in an i64.
    #[must_use]
    pub fn cardinality(self) -> i64 {
        self.max.saturating_sub(self.min).saturating_add(1)
    }

    /// Check whether `value` lies inside the interval.
    #[must_use]
    pub fn contains(self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}
