//! Cell value and the read-only capability interface shared by custom cells.
//!
//! A [`Cell`] is created once while a partition is built and never changes
//! afterwards. Callers that want to attach their own payload to each cell
//! implement [`GridCell`] for their type, usually by embedding a [`Cell`]
//! and delegating the accessors to it.

use std::fmt;

/// Read-only view of a cell's identity and bounding box.
///
/// Grid coordinates `(x, y)` are the column and row of the cell inside the
/// partition. The bounding box `(min_x, min_y)-(max_x, max_y)` is inclusive
/// and expressed in the underlying coordinate space.
pub trait GridCell {
    /// Row-major identifier: `x + y * columns`
    fn id(&self) -> i32;

    /// Column of the cell
    fn x(&self) -> i32;

    /// Row of the cell
    fn y(&self) -> i32;

    /// Left edge (inclusive)
    fn min_x(&self) -> i32;

    /// Bottom edge (inclusive)
    fn min_y(&self) -> i32;

    /// Right edge (inclusive)
    fn max_x(&self) -> i32;

    /// Top edge (inclusive)
    fn max_y(&self) -> i32;

    /// Number of coordinate points covered along the x axis
    fn width(&self) -> i32 {
        self.max_x() - self.min_x() + 1
    }

    /// Number of coordinate points covered along the y axis
    fn height(&self) -> i32 {
        self.max_y() - self.min_y() + 1
    }
}

/// One rectangular region of a partition.
///
/// # Example
/// ```
/// use cellgrid::{Cell, GridCell};
/// let cell = Cell::new(7, 2, 1, 4, 2, 5, 3);
/// assert_eq!(cell.width(), 2);
/// assert!(cell.contains(5, 3));
/// assert!(!cell.contains(6, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    id: i32,
    x: i32,
    y: i32,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl Cell {
    /// Creates a cell from its id, grid coordinate and inclusive bounding box.
    pub const fn new(id: i32, x: i32, y: i32, min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self { id, x, y, min_x, min_y, max_x, max_y }
    }

    /// Returns true when the point lies inside the inclusive bounding box.
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.min_x && px <= self.max_x && py >= self.min_y && py <= self.max_y
    }
}

impl GridCell for Cell {
    fn id(&self) -> i32 {
        self.id
    }

    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }

    fn min_x(&self) -> i32 {
        self.min_x
    }

    fn min_y(&self) -> i32 {
        self.min_y
    }

    fn max_x(&self) -> i32 {
        self.max_x
    }

    fn max_y(&self) -> i32 {
        self.max_y
    }
}

impl fmt::Display for Cell {
    /// Formats as `[  7 (004,002)-(005,003)]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:>3} ({:03},{:03})-({:03},{:03})]",
            self.id, self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
