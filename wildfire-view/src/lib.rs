//! Screen-space layer for the wildfire sandbox: the grid-to-canvas
//! coordinate mapping, the placement table shared by drawing and
//! hit-testing, mismatch overlay geometry, and annotation text. Supplies
//! data and geometry only; a render collaborator draws the pixels.

pub mod annotation;
pub mod view;

pub use annotation::{annotation_grid, describe_cell};
pub use view::{GridView, OverlayRect, PlacementEntry};
