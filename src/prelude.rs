//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use cellgrid::prelude::*;
//! ```

pub use crate::{Cell, EdgePolicy, GridCell, Layout, Partition, PartitionBuilder};
