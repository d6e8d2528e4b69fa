//! Print every cell of a 10x10 partition, then the ring around point (0, 0).
//!
//! Run with `RUST_LOG=cellgrid=trace` to see construction and rejected lookups.
use cellgrid::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let partition = Partition::new(10, 10);
    let (columns, rows) = partition.cell_size();

    for y in 0..rows {
        for x in 0..columns {
            if let Some(cell) = partition.cell(x, y) {
                print!("{cell} ");
            }
        }
        println!();
    }

    let ring = partition.surround_cells_by_position(0, 0, 2);
    let ids: Vec<i32> = ring.iter().map(|c| c.id()).collect();
    println!("Ring of radius 2 around (0, 0): {:?}", ids);

    // Rejected lookups are reported as absent results
    println!("Cell at (-1, 0): {:?}", partition.cell_by_position(-1, 0));
}
