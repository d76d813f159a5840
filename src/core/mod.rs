//! Core game types: bounds, attempt budgets, errors, RNG.
//!
//! Everything here is a transient, stack-scoped value. Nothing survives
//! past a single game run and nothing touches the console; IO lives in
//! `crate::console`.

pub mod attempts;
pub mod bounds;
pub mod error;
pub mod rng;

pub use attempts::AttemptBudget;
pub use bounds::Bounds;
pub use error::GameError;
pub use rng::GameRng;
