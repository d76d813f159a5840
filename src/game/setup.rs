//! Pre-game prompts: range collection and attempt-budget resolution.

use std::io::{BufRead, Write};

use crate::console::{BlankPolicy, Console};
use crate::core::{AttemptBudget, Bounds, GameError};

/// Prompt for the min and max bounds, in that order.
///
/// Equal bounds are fine (a single-value range). Inverted bounds write the
/// range diagnostic and fail with [`GameError::Range`]; parser errors
/// propagate unchanged.
pub fn collect_bounds<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
) -> Result<Bounds, GameError> {
    let min = console.prompt_required_int("Min number: ")?;
    let max = console.prompt_required_int("Max number: ")?;
    Bounds::new(min, max).map_err(|err| console.fail(err))
}

/// Prompt for the attempt budget, defaulting to the range's cardinality.
///
/// A blank line takes the default. Any explicit count of one or more is
/// accepted, above or below the default; zero or less writes the budget
/// diagnostic and fails with [`GameError::AttemptBudget`].
pub fn resolve_attempts<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    bounds: Bounds,
) -> Result<AttemptBudget, GameError> {
    let default = AttemptBudget::default_for(bounds);
    let prompt = format!("Number of attempts (default is {default}): ");

    match console.prompt_int(&prompt, BlankPolicy::Allow)? {
        None => Ok(default),
        Some(count) => AttemptBudget::new(count).map_err(|err| console.fail(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(input: &str) -> Console<&[u8], Vec<u8>, Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new(), Vec::new())
    }

    #[test]
    fn collects_ordered_bounds_unchanged() {
        let mut console = scripted("1\n2\n");
        let bounds = collect_bounds(&mut console).unwrap();
        assert_eq!(bounds, Bounds::new(1, 2).unwrap());

        let (_, out, err) = console.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "Min number: Max number: ");
        assert!(err.is_empty());
    }

    #[test]
    fn collects_a_degenerate_range() {
        let mut console = scripted("3\n3\n");
        let bounds = collect_bounds(&mut console).unwrap();
        assert_eq!(bounds, Bounds::new(3, 3).unwrap());
    }

    #[test]
    fn inverted_bounds_write_the_range_diagnostic() {
        let mut console = scripted("2\n1\n");
        let result = collect_bounds(&mut console);
        assert!(matches!(result, Err(GameError::Range)));

        let (_, _, err) = console.into_parts();
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Invalid input: Min number must be less than or equal to the max number."
        );
    }

    #[test]
    fn malformed_min_propagates_the_parser_error() {
        let mut console = scripted("a\n");
        let result = collect_bounds(&mut console);
        assert!(matches!(result, Err(GameError::Input)));

        // The max prompt was never issued.
        let (_, out, _) = console.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "Min number: ");
    }

    #[test]
    fn blank_budget_takes_the_default() {
        let bounds = Bounds::new(1, 2).unwrap();
        let mut console = scripted("\n");
        let budget = resolve_attempts(&mut console, bounds).unwrap();
        assert_eq!(budget.get(), 2);

        let (_, out, _) = console.into_parts();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Number of attempts (default is 2): "
        );
    }

    #[test]
    fn blank_budget_default_covers_a_single_value_range() {
        let bounds = Bounds::new(1, 1).unwrap();
        let mut console = scripted("\n");
        let budget = resolve_attempts(&mut console, bounds).unwrap();
        assert_eq!(budget.get(), 1);
    }

    #[test]
    fn explicit_budget_overrides_the_default() {
        let bounds = Bounds::new(1, 2).unwrap();
        let mut console = scripted("10\n");
        let budget = resolve_attempts(&mut console, bounds).unwrap();
        assert_eq!(budget.get(), 10);
    }

    #[test]
    fn non_positive_budget_writes_the_budget_diagnostic() {
        let bounds = Bounds::new(1, 2).unwrap();
        for input in ["0\n", "-1\n"] {
            let mut console = scripted(input);
            let result = resolve_attempts(&mut console, bounds);
            assert!(matches!(result, Err(GameError::AttemptBudget)));

            let (_, _, err) = console.into_parts();
            assert_eq!(
                String::from_utf8(err).unwrap(),
                "Invalid input: Number of attempts must be a positive integer."
            );
        }
    }

    #[test]
    fn malformed_budget_propagates_the_parser_error() {
        let bounds = Bounds::new(1, 2).unwrap();
        let mut console = scripted("ten\n");
        let result = resolve_attempts(&mut console, bounds);
        assert!(matches!(result, Err(GameError::Input)));
    }
}
