//! Eagerly materialized partition of a 2D integer space.
//!
//! The partition is built once by [`PartitionBuilder`] and is read-only
//! afterwards, so a built partition can be shared between threads freely.
//! Every query reports failure as an absent result: `None` for single-cell
//! lookups and an empty vector for ring queries.

use std::slice;

use tracing::{debug, trace};

use crate::cell::{Cell, GridCell};
use crate::error::{PartitionError, PartitionResult};
use crate::layout::{EdgePolicy, Layout};

/// Configuration for a [`Partition`].
///
/// Options apply in call order, so a later call overrides an earlier one.
/// Defaults: 1x1 cells, [`EdgePolicy::Compatible`].
///
/// # Example
/// ```
/// use cellgrid::{EdgePolicy, PartitionBuilder};
/// let partition = PartitionBuilder::new(10, 10)
///     .cell_width(2)
///     .cell_height(2)
///     .edge_policy(EdgePolicy::Strict)
///     .build();
/// assert_eq!(partition.cell_size(), (5, 5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionBuilder {
    space_width: i32,
    space_height: i32,
    cell_width: i32,
    cell_height: i32,
    edge_policy: EdgePolicy,
}

impl PartitionBuilder {
    /// Starts a configuration for a `space_width` x `space_height` space.
    pub const fn new(space_width: i32, space_height: i32) -> Self {
        Self {
            space_width,
            space_height,
            cell_width: 1,
            cell_height: 1,
            edge_policy: EdgePolicy::Compatible,
        }
    }

    /// Sets the nominal cell extent along x. Values below 1 become 1.
    #[must_use]
    pub const fn cell_width(mut self, width: i32) -> Self {
        self.cell_width = width;
        self
    }

    /// Sets the nominal cell extent along y. Values below 1 become 1.
    #[must_use]
    pub const fn cell_height(mut self, height: i32) -> Self {
        self.cell_height = height;
        self
    }

    /// Selects how lookups treat coordinates on the far edge.
    #[must_use]
    pub const fn edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Geometry the configuration produces.
    pub fn layout(&self) -> Layout {
        Layout::new(self.space_width, self.space_height, self.cell_width, self.cell_height)
    }

    /// Builds a partition of plain [`Cell`] values.
    ///
    /// # Panics
    /// Panics when the cell count exceeds the `i32` id range. Use
    /// [`try_build`](Self::try_build) to get an error instead.
    pub fn build(self) -> Partition<Cell> {
        self.build_with(|cell| cell)
    }

    /// Builds a partition whose cells are produced by `factory`.
    ///
    /// The factory is called once per cell in row-major order with the
    /// computed id, grid coordinate and bounding box. The partition never
    /// looks at whatever payload the factory attaches.
    ///
    /// Non-positive space extents are not rejected here; they yield an empty
    /// partition.
    ///
    /// # Panics
    /// Panics when the cell count exceeds the `i32` id range.
    ///
    /// # Example
    /// ```
    /// use cellgrid::{GridCell, PartitionBuilder};
    /// let partition = PartitionBuilder::new(4, 4)
    ///     .cell_width(2)
    ///     .cell_height(2)
    ///     .build_with(|cell| (cell, cell.id() * 10));
    /// assert_eq!(partition.cell_by_id(3).map(|c| c.1), Some(30));
    /// ```
    pub fn build_with<C, F>(self, mut factory: F) -> Partition<C>
    where
        F: FnMut(Cell) -> C,
    {
        let layout = self.layout();
        let count = layout.cell_count();
        assert!(
            count <= i64::from(i32::MAX),
            "{}x{} cells exceed the i32 id range",
            layout.columns(),
            layout.rows()
        );

        let mut cells = Vec::with_capacity(usize::try_from(count).unwrap_or_default());
        for y in 0..layout.rows() {
            for x in 0..layout.columns() {
                let id = x + y * layout.columns();
                cells.push(factory(layout.geometry(id, x, y)));
            }
        }

        debug!(
            space_width = layout.space_width(),
            space_height = layout.space_height(),
            cell_width = layout.cell_width(),
            cell_height = layout.cell_height(),
            columns = layout.columns(),
            rows = layout.rows(),
            "partition built"
        );

        Partition {
            layout,
            edge_policy: self.edge_policy,
            cells,
        }
    }

    /// Validating variant of [`build`](Self::build).
    ///
    /// # Errors
    /// [`PartitionError::InvalidSpace`] for a non-positive space extent,
    /// [`PartitionError::TooManyCells`] when ids would overflow `i32`.
    pub fn try_build(self) -> PartitionResult<Partition<Cell>> {
        self.try_build_with(|cell| cell)
    }

    /// Validating variant of [`build_with`](Self::build_with).
    ///
    /// # Errors
    /// Same as [`try_build`](Self::try_build).
    pub fn try_build_with<C, F>(self, factory: F) -> PartitionResult<Partition<C>>
    where
        F: FnMut(Cell) -> C,
    {
        if self.space_width <= 0 || self.space_height <= 0 {
            return Err(PartitionError::InvalidSpace {
                width: self.space_width,
                height: self.space_height,
            });
        }
        let layout = self.layout();
        if layout.cell_count() > i64::from(i32::MAX) {
            return Err(PartitionError::TooManyCells {
                columns: layout.columns(),
                rows: layout.rows(),
            });
        }
        Ok(self.build_with(factory))
    }
}

/// Regular grid of cells covering `[0, space_width) x [0, space_height)`.
///
/// Cells are stored in row-major order and indexed by id, where
/// `id = x + y * columns`.
#[derive(Clone, Debug)]
pub struct Partition<C = Cell> {
    layout: Layout,
    edge_policy: EdgePolicy,
    cells: Vec<C>,
}

impl Partition<Cell> {
    /// Partition with 1x1 cells.
    ///
    /// # Example
    /// ```
    /// use cellgrid::Partition;
    /// let partition = Partition::new(5, 5);
    /// assert_eq!(partition.len(), 25);
    /// ```
    pub fn new(space_width: i32, space_height: i32) -> Self {
        PartitionBuilder::new(space_width, space_height).build()
    }

    /// Partition with the given nominal cell extent.
    pub fn with_cell_size(space_width: i32, space_height: i32, cell_width: i32, cell_height: i32) -> Self {
        PartitionBuilder::new(space_width, space_height)
            .cell_width(cell_width)
            .cell_height(cell_height)
            .build()
    }

    /// Shorthand for [`PartitionBuilder::new`].
    pub const fn builder(space_width: i32, space_height: i32) -> PartitionBuilder {
        PartitionBuilder::new(space_width, space_height)
    }
}

impl<C> Partition<C> {
    /// Number of addressable points along x
    pub const fn space_width(&self) -> i32 {
        self.layout.space_width()
    }

    /// Number of addressable points along y
    pub const fn space_height(&self) -> i32 {
        self.layout.space_height()
    }

    /// Normalized cell extent along x
    pub const fn cell_width(&self) -> i32 {
        self.layout.cell_width()
    }

    /// Normalized cell extent along y
    pub const fn cell_height(&self) -> i32 {
        self.layout.cell_height()
    }

    /// Returns `(columns, rows)`.
    pub const fn cell_size(&self) -> (i32, i32) {
        self.layout.cell_size()
    }

    /// Geometry shared by every cell of this partition.
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Boundary policy chosen at build time.
    pub const fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true for a degenerate partition without cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in id order.
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Iterates the cells in id order.
    pub fn iter(&self) -> slice::Iter<'_, C> {
        self.cells.iter()
    }

    /// Looks a cell up by id.
    ///
    /// Returns `None` when `id < 0` or `id >= len()`.
    pub fn cell_by_id(&self, id: i32) -> Option<&C> {
        let found = usize::try_from(id).ok().and_then(|index| self.cells.get(index));
        if found.is_none() {
            trace!(id, "cell id out of range");
        }
        found
    }

    /// Looks a cell up by grid coordinate.
    ///
    /// Under [`EdgePolicy::Compatible`] the coordinate is turned into an id
    /// without a per-axis check, so `(columns, 0)` resolves to the first
    /// cell of row 1. Under [`EdgePolicy::Strict`] such coordinates give
    /// `None`.
    pub fn cell(&self, cell_x: i32, cell_y: i32) -> Option<&C> {
        let id = self.resolve_coord(cell_x, cell_y)?;
        self.cell_by_id(id)
    }

    /// Looks up the cell covering the point `(px, py)`.
    ///
    /// # Example
    /// ```
    /// use cellgrid::{GridCell, Partition};
    /// let partition = Partition::with_cell_size(10, 10, 2, 2);
    /// let cell = partition.cell_by_position(3, 5).unwrap();
    /// assert_eq!((cell.x(), cell.y()), (1, 2));
    /// assert!(partition.cell_by_position(-1, 0).is_none());
    /// ```
    pub fn cell_by_position(&self, px: i32, py: i32) -> Option<&C> {
        let (cell_x, cell_y) = self.resolve_point(px, py)?;
        self.cell(cell_x, cell_y)
    }

    fn resolve_point(&self, px: i32, py: i32) -> Option<(i32, i32)> {
        if !self.layout.accepts_point(px, py, self.edge_policy) {
            trace!(px, py, policy = ?self.edge_policy, "point outside partition");
            return None;
        }
        Some(self.layout.cell_coord_at(px, py))
    }

    fn resolve_coord(&self, cell_x: i32, cell_y: i32) -> Option<i32> {
        if self.edge_policy == EdgePolicy::Strict && !self.layout.contains_coord(cell_x, cell_y) {
            trace!(cell_x, cell_y, "cell coordinate outside grid");
            return None;
        }
        self.layout.cell_id(cell_x, cell_y)
    }
}

impl<C: GridCell> Partition<C> {
    /// Collects the ids of every cell within `round` layers of the cell
    /// `cell_id`, the center included.
    ///
    /// Ids come out row by row over the clamped box. Nothing is collected
    /// when `round <= 0` or the id does not resolve. Reusing `results`
    /// across calls avoids reallocating.
    ///
    /// # Arguments
    /// * `cell_id` - Id of the center cell
    /// * `round` - Number of layers around the center
    /// * `results` - Output vector; cleared, then filled with cell ids
    ///
    /// # Example
    /// ```
    /// use cellgrid::Partition;
    /// let partition = Partition::new(10, 10);
    /// let mut results = Vec::new();
    /// partition.query_surround(55, 1, &mut results);
    /// assert_eq!(results, vec![44, 45, 46, 54, 55, 56, 64, 65, 66]);
    /// ```
    pub fn query_surround(&self, cell_id: i32, round: i32, results: &mut Vec<i32>) {
        results.clear();
        if round <= 0 {
            trace!(cell_id, round, "ring radius must be positive");
            return;
        }
        let Some(center) = self.cell_by_id(cell_id) else {
            return;
        };
        self.layout.ring_ids(center.x(), center.y(), round, results);
    }

    /// Cells within `round` layers of the cell `cell_id`, center included.
    ///
    /// An interior cell yields `(2 * round + 1)^2` cells; cells near an edge
    /// yield fewer.
    pub fn surround_cells_by_id(&self, cell_id: i32, round: i32) -> Vec<&C> {
        let mut ids = Vec::new();
        self.query_surround(cell_id, round, &mut ids);
        ids.into_iter().filter_map(|id| self.cell_by_id(id)).collect()
    }

    /// Cells within `round` layers of the cell at grid coordinate
    /// `(cell_x, cell_y)`. The coordinate resolves as in [`cell`](Self::cell).
    pub fn surround_cells(&self, cell_x: i32, cell_y: i32, round: i32) -> Vec<&C> {
        match self.resolve_coord(cell_x, cell_y) {
            Some(id) => self.surround_cells_by_id(id, round),
            None => Vec::new(),
        }
    }

    /// Cells within `round` layers of the cell covering `(px, py)`.
    ///
    /// # Example
    /// ```
    /// use cellgrid::{GridCell, Partition};
    /// let partition = Partition::new(10, 10);
    /// let ids: Vec<i32> = partition
    ///     .surround_cells_by_position(0, 0, 2)
    ///     .iter()
    ///     .map(|c| c.id())
    ///     .collect();
    /// assert_eq!(ids, vec![0, 1, 2, 10, 11, 12, 20, 21, 22]);
    /// ```
    pub fn surround_cells_by_position(&self, px: i32, py: i32, round: i32) -> Vec<&C> {
        match self.resolve_point(px, py) {
            Some((cell_x, cell_y)) => self.surround_cells(cell_x, cell_y, round),
            None => Vec::new(),
        }
    }
}

impl<'a, C> IntoIterator for &'a Partition<C> {
    type Item = &'a C;
    type IntoIter = slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
