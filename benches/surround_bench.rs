//! Benchmark for ring queries
//!
//! Builds a 4000x4000 space of 4x4 cells (1M cells) and times point lookups
//! and ring queries of growing radius at random positions.

use cellgrid::Partition;
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

const SPACE: i32 = 4_000;

fn random_points<R: Rng>(rng: &mut R, count: usize) -> Vec<(i32, i32)> {
    (0..count)
        .map(|_| (rng.random_range(0..SPACE), rng.random_range(0..SPACE)))
        .collect()
}

fn bench_lookup(partition: &Partition, points: &[(i32, i32)]) {
    let start = Instant::now();
    let mut found = 0_usize;
    for &(x, y) in points {
        if partition.cell_by_position(x, y).is_some() {
            found += 1;
        }
    }
    let elapsed = start.elapsed();
    println!(
        "{} point lookups ({} found): {:.2}ms",
        points.len(),
        found,
        elapsed.as_secs_f64() * 1000.0
    );
}

/// Reuses one id buffer across queries
fn bench_surround(partition: &Partition, points: &[(i32, i32)], round: i32) {
    let mut results = Vec::new();
    let mut total = 0_usize;
    let start = Instant::now();
    for &(x, y) in points {
        let (cx, cy) = partition.layout().cell_coord_at(x, y);
        if let Some(id) = partition.layout().cell_id(cx, cy) {
            partition.query_surround(id, round, &mut results);
            total += results.len();
        }
    }
    let elapsed = start.elapsed();
    println!(
        "{} ring queries round {}: {:.2}ms ({} ids)",
        points.len(),
        round,
        elapsed.as_secs_f64() * 1000.0,
        total
    );
}

fn bench_surround_cells(partition: &Partition, points: &[(i32, i32)], round: i32) {
    let mut total = 0_usize;
    let start = Instant::now();
    for &(x, y) in points {
        total += partition.surround_cells_by_position(x, y, round).len();
    }
    let elapsed = start.elapsed();
    println!(
        "{} ring cell queries round {}: {:.2}ms ({} cells)",
        points.len(),
        round,
        elapsed.as_secs_f64() * 1000.0,
        total
    );
}

fn main() {
    println!("cellgrid Ring Query Benchmark");
    println!("=============================\n");

    let num_tests = 100_000;
    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let points = random_points(&mut rng, num_tests);

    let start = Instant::now();
    let partition = Partition::with_cell_size(SPACE, SPACE, 4, 4);
    println!(
        "Partition of {} cells built in {:.2}ms\n",
        partition.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    bench_lookup(&partition, &points);
    for round in [1, 2, 4, 8] {
        bench_surround(&partition, &points, round);
    }
    for round in [1, 4] {
        bench_surround_cells(&partition, &points, round);
    }
}
