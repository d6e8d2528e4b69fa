//! Attach a payload to every cell with a cell factory.
use cellgrid::prelude::*;
use tracing_subscriber::EnvFilter;

/// Terrain region carrying a movement cost
#[derive(Debug)]
struct Region {
    cell: Cell,
    cost: u32,
}

impl GridCell for Region {
    fn id(&self) -> i32 {
        self.cell.id()
    }
    fn x(&self) -> i32 {
        self.cell.x()
    }
    fn y(&self) -> i32 {
        self.cell.y()
    }
    fn min_x(&self) -> i32 {
        self.cell.min_x()
    }
    fn min_y(&self) -> i32 {
        self.cell.min_y()
    }
    fn max_x(&self) -> i32 {
        self.cell.max_x()
    }
    fn max_y(&self) -> i32 {
        self.cell.max_y()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 100x60 space, 16x16 regions; the last column and row are narrower
    let partition = PartitionBuilder::new(100, 60)
        .cell_width(16)
        .cell_height(16)
        .edge_policy(EdgePolicy::Strict)
        .build_with(|cell| Region {
            cell,
            cost: 1 + (cell.x() as u32 + cell.y() as u32) % 3,
        });

    let (columns, rows) = partition.cell_size();
    println!("{} regions ({}x{})", partition.len(), columns, rows);

    let Some(here) = partition.cell_by_position(50, 30) else {
        return;
    };
    println!("Region at (50, 30): {} cost {}", here.cell, here.cost);

    let total: u32 = partition
        .surround_cells_by_id(here.id(), 1)
        .iter()
        .map(|r| r.cost)
        .sum();
    println!("Total cost of the surrounding ring: {}", total);

    for region in partition.iter().filter(|r| r.width() < 16 || r.height() < 16).take(3) {
        println!("Remainder region: {} ({}x{})", region.cell, region.width(), region.height());
    }
}
