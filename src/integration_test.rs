#[cfg(test)]
mod integration_tests {
    use crate::{Cell, GridCell, Partition, PartitionBuilder};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_print_grid_walkthrough() {
        // Same flow as the print_grid demo: walk every cell, then one ring
        let partition = Partition::new(10, 10);
        let (columns, rows) = partition.cell_size();

        let mut lines = Vec::new();
        for y in 0..rows {
            let row: Vec<String> = (0..columns)
                .filter_map(|x| partition.cell(x, y))
                .map(Cell::to_string)
                .collect();
            lines.push(row.join(" "));
        }
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("[  0 (000,000)-(000,000)] [  1 (001,000)-(001,000)]"));
        assert!(lines[9].ends_with("[ 99 (009,009)-(009,009)]"));

        let ring = partition.surround_cells_by_position(0, 0, 2);
        let ids: Vec<i32> = ring.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 10, 11, 12, 20, 21, 22]);
    }

    #[test]
    fn test_six_by_six_example() {
        let partition = PartitionBuilder::new(6, 6).cell_width(2).cell_height(2).build();
        assert_eq!(partition.len(), 9);

        let first = partition.cell(0, 0).unwrap();
        assert_eq!((first.min_x(), first.min_y(), first.max_x(), first.max_y()), (0, 0, 1, 1));

        let last = partition.cell(2, 2).unwrap();
        assert_eq!((last.min_x(), last.min_y(), last.max_x(), last.max_y()), (4, 4, 5, 5));
    }

    #[test]
    fn test_shared_between_threads() {
        let partition = Arc::new(Partition::with_cell_size(64, 64, 4, 4));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let partition = Arc::clone(&partition);
                thread::spawn(move || {
                    let px = t * 16 + 5;
                    let cell = partition.cell_by_position(px, px).map(|c| c.id());
                    let ring = partition.surround_cells_by_position(px, px, 1).len();
                    (cell, ring)
                })
            })
            .collect();

        for (t, handle) in handles.into_iter().enumerate() {
            let (cell, ring) = handle.join().unwrap();
            let expected = (t as i32 * 16 + 5) / 4;
            assert_eq!(cell, Some(expected + expected * 16));
            assert_eq!(ring, 9);
        }
    }
}
