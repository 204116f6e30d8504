//! Core library for the wildfire classification sandbox.
//!
//! Draws a forest-sized set of correlated environmental fields (lightning,
//! rain, temperature), derives a deterministic per-cell "on fire" ground
//! truth, and evaluates user hypotheses against it. All computation is
//! synchronous and in-memory; a UI shell owns rendering and input.

pub mod field;
pub mod forest;
pub mod ignition;
pub mod predict;

// Re-export the main entry points
pub use field::{generate_fields, FieldSet};
pub use forest::{CellConditions, ForestState};
pub use ignition::IgnitionRule;
pub use predict::{diff, evaluate, predicted_fire, MismatchGrid};
