//! Bottom-Left placement engine for the 2D orthogonal knapsack problem:
//! place non-rotated rectangles inside a fixed container, maximizing the packed value.

/// Entities to model 2D orthogonal knapsack problems
pub mod entities;

/// Evaluation of layouts
pub mod eval;

/// Exhaustive search for provably optimal packings of small instances
pub mod exact;

/// Axis-aligned rectangles and the predicates used during placement
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// The Bottom-Left placement heuristic
pub mod placement;

/// Helper functions which do not belong to any specific module
pub mod util;
