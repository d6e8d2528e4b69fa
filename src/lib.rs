//! # cellgrid - Regular Grid Partition of a 2D Integer Space
//!
//! A small static spatial index that cuts a bounded integer coordinate space
//! into a regular array of rectangular cells and answers two questions:
//! which cell contains a point, and which cells lie within a ring radius of a
//! given cell.
//!
//! ## Features
//!
//! - **Remainder absorption**: when the space is not a multiple of the cell
//!   extent, the last column and row shrink to fit exactly
//! - **Ring queries**: square neighborhoods around a cell, clamped at the edges
//! - **Custom cells**: a cell factory attaches caller payload to every cell
//! - **On-demand geometry**: [`Layout`] computes any cell without allocating
//!
//! ## Quick Start
//!
//! ```rust
//! use cellgrid::prelude::*;
//!
//! // 10x10 space, 2x2 cells -> 5x5 cells
//! let partition = Partition::builder(10, 10)
//!     .cell_width(2)
//!     .cell_height(2)
//!     .build();
//! assert_eq!(partition.cell_size(), (5, 5));
//!
//! // Which cell covers point (3, 7)?
//! let cell = partition.cell_by_position(3, 7).unwrap();
//! assert_eq!((cell.id(), cell.x(), cell.y()), (16, 1, 3));
//!
//! // The cell and its 8 neighbors
//! let ring = partition.surround_cells_by_id(cell.id(), 1);
//! assert_eq!(ring.len(), 9);
//! ```
//!
//! ## How It Works
//!
//! Column and row counts use ceiling division. Cells are stored in row-major
//! order, so the id of the cell at `(x, y)` is `x + y * columns` and point
//! lookup is two integer divisions followed by an index. Ring queries clamp
//! the square `[x - round, x + round] x [y - round, y + round]` to the grid
//! and walk it row by row.
//!
//! Failed lookups never panic: they return `None` or an empty vector.

pub mod cell;
pub mod error;
pub mod layout;
pub mod partition;
pub mod prelude;

pub use cell::{Cell, GridCell};
pub use error::{PartitionError, PartitionResult};
pub use layout::{EdgePolicy, Layout};
pub use partition::{Partition, PartitionBuilder};

#[cfg(test)]
mod integration_test;
