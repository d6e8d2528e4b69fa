//! Pure geometry of a regular partition.
//!
//! A [`Layout`] knows the space extent, the cell extent and the resulting
//! column/row counts. Every cell is a pure function of its grid coordinate,
//! so the layout can answer lookups and ring queries without allocating a
//! single cell. [`Partition`](crate::Partition) materializes the same cells
//! eagerly on top of it.
//!
//! Counts use ceiling division: when the space extent is not a multiple of
//! the cell extent, the last column (row) is narrower and ends exactly at
//! the far edge of the space.

use crate::cell::Cell;

/// How lookups treat coordinates on or past the far edge.
///
/// `Compatible` keeps the historical behavior of the grid/zone API:
/// a point with `x == space_width` (or `y == space_height`) passes the
/// bounds check, and a cell coordinate is turned into an id without a
/// per-axis check, so an out-of-range column can alias a cell of the next
/// row. `Strict` rejects both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EdgePolicy {
    /// Accept `x <= space_width`, no per-axis check on cell coordinates
    #[default]
    Compatible,
    /// Accept `x < space_width`, cell coordinates must lie in the grid
    Strict,
}

/// Space and cell extents plus the derived column/row counts.
///
/// # Example
/// ```
/// use cellgrid::{GridCell, Layout};
/// let layout = Layout::new(7, 7, 2, 2);
/// assert_eq!(layout.cell_size(), (4, 4));
///
/// let last = layout.cell(3, 3).unwrap();
/// assert_eq!(last.width(), 1);
/// assert_eq!(last.height(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    space_width: i32,
    space_height: i32,
    cell_width: i32,
    cell_height: i32,
    columns: i32,
    rows: i32,
}

impl Layout {
    /// Creates the layout of a `space_width` x `space_height` space cut into
    /// `cell_width` x `cell_height` cells.
    ///
    /// Cell extents below 1 are coerced to 1. Non-positive space extents
    /// give an empty layout with zero columns or rows.
    pub fn new(space_width: i32, space_height: i32, cell_width: i32, cell_height: i32) -> Self {
        let cell_width = cell_width.max(1);
        let cell_height = cell_height.max(1);
        Self {
            space_width,
            space_height,
            cell_width,
            cell_height,
            columns: axis_count(space_width, cell_width),
            rows: axis_count(space_height, cell_height),
        }
    }

    /// Number of addressable points along x
    pub const fn space_width(&self) -> i32 {
        self.space_width
    }

    /// Number of addressable points along y
    pub const fn space_height(&self) -> i32 {
        self.space_height
    }

    /// Nominal cell extent along x (at least 1)
    pub const fn cell_width(&self) -> i32 {
        self.cell_width
    }

    /// Nominal cell extent along y (at least 1)
    pub const fn cell_height(&self) -> i32 {
        self.cell_height
    }

    /// Number of cell columns
    pub const fn columns(&self) -> i32 {
        self.columns
    }

    /// Number of cell rows
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Returns `(columns, rows)`.
    pub const fn cell_size(&self) -> (i32, i32) {
        (self.columns, self.rows)
    }

    /// Total number of cells. Widened so huge layouts cannot overflow.
    pub fn cell_count(&self) -> i64 {
        i64::from(self.columns) * i64::from(self.rows)
    }

    /// Returns true when `(cell_x, cell_y)` lies inside the grid.
    pub const fn contains_coord(&self, cell_x: i32, cell_y: i32) -> bool {
        cell_x >= 0 && cell_y >= 0 && cell_x < self.columns && cell_y < self.rows
    }

    /// Bounds check applied to points before they are mapped to a cell.
    pub const fn accepts_point(&self, px: i32, py: i32, policy: EdgePolicy) -> bool {
        if px < 0 || py < 0 {
            return false;
        }
        match policy {
            EdgePolicy::Compatible => px <= self.space_width && py <= self.space_height,
            EdgePolicy::Strict => px < self.space_width && py < self.space_height,
        }
    }

    /// Grid coordinate of the cell covering `(px, py)`. No bounds check.
    pub const fn cell_coord_at(&self, px: i32, py: i32) -> (i32, i32) {
        (px / self.cell_width, py / self.cell_height)
    }

    /// Row-major id `cell_x + cell_y * columns` without a per-axis check.
    ///
    /// Returns `None` only when the id does not fit in an `i32`. An
    /// out-of-range column still yields an id, which may belong to a
    /// different row.
    pub fn cell_id(&self, cell_x: i32, cell_y: i32) -> Option<i32> {
        let id = i64::from(cell_x) + i64::from(cell_y) * i64::from(self.columns);
        i32::try_from(id).ok()
    }

    /// Computes the cell at grid coordinate `(cell_x, cell_y)`.
    pub fn cell(&self, cell_x: i32, cell_y: i32) -> Option<Cell> {
        if !self.contains_coord(cell_x, cell_y) {
            return None;
        }
        let id = self.cell_id(cell_x, cell_y)?;
        Some(self.geometry(id, cell_x, cell_y))
    }

    /// Computes the cell with the given row-major id.
    pub fn cell_by_id(&self, id: i32) -> Option<Cell> {
        if id < 0 || i64::from(id) >= self.cell_count() {
            return None;
        }
        Some(self.geometry(id, id % self.columns, id / self.columns))
    }

    /// Computes the cell covering `(px, py)`, rejecting points outside the space.
    pub fn cell_at(&self, px: i32, py: i32) -> Option<Cell> {
        if !self.accepts_point(px, py, EdgePolicy::Strict) {
            return None;
        }
        let (cell_x, cell_y) = self.cell_coord_at(px, py);
        self.cell(cell_x, cell_y)
    }

    /// Clamped grid box `(min_x, min_y, max_x, max_y)` of the ring of radius
    /// `round` around `(cell_x, cell_y)`.
    ///
    /// Returns `None` for `round <= 0` or when the clamped box is empty.
    pub fn ring_bounds(&self, cell_x: i32, cell_y: i32, round: i32) -> Option<(i32, i32, i32, i32)> {
        if round <= 0 {
            return None;
        }
        let min_x = cell_x.saturating_sub(round).max(0);
        let min_y = cell_y.saturating_sub(round).max(0);
        let max_x = cell_x.saturating_add(round).min(self.columns - 1);
        let max_y = cell_y.saturating_add(round).min(self.rows - 1);
        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some((min_x, min_y, max_x, max_y))
    }

    /// Collects the ids of the ring around `(cell_x, cell_y)`, center included.
    ///
    /// Ids are pushed row by row (`y` outer, `x` inner).
    ///
    /// # Arguments
    /// * `cell_x` - Column of the center cell
    /// * `cell_y` - Row of the center cell
    /// * `round` - Number of layers around the center
    /// * `results` - Output vector; cleared, then filled with cell ids
    ///
    /// # Example
    /// ```
    /// use cellgrid::Layout;
    /// let layout = Layout::new(10, 10, 1, 1);
    /// let mut results = Vec::new();
    /// layout.ring_ids(0, 0, 1, &mut results);
    /// assert_eq!(results, vec![0, 1, 10, 11]);
    /// ```
    pub fn ring_ids(&self, cell_x: i32, cell_y: i32, round: i32, results: &mut Vec<i32>) {
        results.clear();
        let Some((min_x, min_y, max_x, max_y)) = self.ring_bounds(cell_x, cell_y, round) else {
            return;
        };

        let span_x = usize::try_from(max_x - min_x + 1).unwrap_or_default();
        let span_y = usize::try_from(max_y - min_y + 1).unwrap_or_default();
        results.reserve(span_x * span_y);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if let Some(id) = self.cell_id(x, y) {
                    results.push(id);
                }
            }
        }
    }

    /// Builds the cell for an in-range coordinate. The nominal far edge is
    /// computed in i64 and clamped to the last point of the space.
    pub(crate) fn geometry(&self, id: i32, cell_x: i32, cell_y: i32) -> Cell {
        let min_x = cell_x * self.cell_width;
        let min_y = cell_y * self.cell_height;
        let max_x = far_edge(cell_x, self.cell_width, self.space_width);
        let max_y = far_edge(cell_y, self.cell_height, self.space_height);
        Cell::new(id, cell_x, cell_y, min_x, min_y, max_x, max_y)
    }
}

/// Ceiling division by truncating division plus a remainder check.
fn axis_count(extent: i32, step: i32) -> i32 {
    if extent <= 0 {
        return 0;
    }
    let mut count = extent / step;
    if extent % step > 0 {
        count += 1;
    }
    count
}

fn far_edge(index: i32, step: i32, extent: i32) -> i32 {
    let nominal = (i64::from(index) + 1) * i64::from(step) - 1;
    let last = i64::from(extent) - 1;
    // Both sides of the min are >= the cell's min edge, which fits in i32.
    i32::try_from(nominal.min(last)).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{EdgePolicy, Layout, axis_count};
    use crate::GridCell;

    #[test]
    fn test_axis_count_ceiling() {
        assert_eq!(axis_count(10, 2), 5);
        assert_eq!(axis_count(7, 2), 4);
        assert_eq!(axis_count(1, 5), 1);
        assert_eq!(axis_count(0, 3), 0);
        assert_eq!(axis_count(-4, 3), 0);
    }

    #[test]
    fn test_non_positive_cell_extent_is_coerced() {
        let layout = Layout::new(5, 5, 0, -3);
        assert_eq!(layout.cell_width(), 1);
        assert_eq!(layout.cell_height(), 1);
        assert_eq!(layout.cell_size(), (5, 5));
    }

    #[test]
    fn test_huge_cell_extent_does_not_overflow() {
        let layout = Layout::new(10, 10, i32::MAX, i32::MAX);
        assert_eq!(layout.cell_size(), (1, 1));
        let cell = layout.cell(0, 0).unwrap();
        assert_eq!((cell.max_x(), cell.max_y()), (9, 9));
    }

    #[test]
    fn test_point_acceptance_by_policy() {
        let layout = Layout::new(10, 10, 1, 1);
        assert!(layout.accepts_point(10, 10, EdgePolicy::Compatible));
        assert!(!layout.accepts_point(10, 10, EdgePolicy::Strict));
        assert!(layout.accepts_point(9, 9, EdgePolicy::Strict));
        assert!(!layout.accepts_point(11, 0, EdgePolicy::Compatible));
        assert!(!layout.accepts_point(-1, 0, EdgePolicy::Compatible));
    }

    #[test]
    fn test_ring_bounds_clamp() {
        let layout = Layout::new(10, 10, 1, 1);
        assert_eq!(layout.ring_bounds(0, 0, 2), Some((0, 0, 2, 2)));
        assert_eq!(layout.ring_bounds(9, 9, 1), Some((8, 8, 9, 9)));
        assert_eq!(layout.ring_bounds(5, 5, i32::MAX), Some((0, 0, 9, 9)));
        assert_eq!(layout.ring_bounds(5, 5, 0), None);
    }

    #[test]
    fn test_cell_id_aliases_out_of_range_column() {
        let layout = Layout::new(10, 10, 1, 1);
        assert_eq!(layout.cell_id(10, 0), Some(10));
        assert_eq!(layout.cell(10, 0), None);
        assert_eq!(layout.cell_id(i32::MAX, i32::MAX), None);
    }
}
