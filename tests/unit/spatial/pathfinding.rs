//! Tests for breadth-first shortest paths and distance enumeration

#[cfg(test)]
mod tests {
    use dungeon_forge::spatial::grid::{GridMap, Position};
    use dungeon_forge::spatial::pathfinding::{
        NEIGHBOR_OFFSETS, breadth_first_distances, find_shortest_path, floor_neighbors,
        reachable_count,
    };

    fn open_grid(width: usize, height: usize) -> GridMap {
        let mut grid = GridMap::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.carve(Position::new(x, y));
            }
        }
        grid
    }

    // Tests path endpoints, contiguity and optimal length on an open grid
    // Verified by replacing the queue with a stack (depth-first order)
    #[test]
    fn test_shortest_path_on_open_grid() {
        let grid = open_grid(6, 5);
        let start = Position::new(0, 0);
        let end = Position::new(5, 4);

        let path = find_shortest_path(&grid, start, end);

        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        assert_eq!(path.len(), start.manhattan_distance(end) + 1);
        for pair in path.windows(2) {
            if let [a, b] = pair {
                assert_eq!(a.manhattan_distance(*b), 1);
            }
        }
    }

    // Tests the fixed East, West, South, North order decides ties
    // Verified by reordering NEIGHBOR_OFFSETS
    #[test]
    fn test_neighbor_order_breaks_ties() {
        assert_eq!(NEIGHBOR_OFFSETS, [(1, 0), (-1, 0), (0, 1), (0, -1)]);

        let grid = open_grid(2, 2);
        let path = find_shortest_path(&grid, Position::new(0, 0), Position::new(1, 1));

        assert_eq!(
            path,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    // Tests the route bends around walls
    // Verified by ignoring cell state in floor_neighbors
    #[test]
    fn test_path_avoids_walls() {
        let mut grid = open_grid(3, 3);
        grid.set_cell(Position::new(1, 0), dungeon_forge::Cell::Wall);
        grid.set_cell(Position::new(1, 1), dungeon_forge::Cell::Wall);

        let path = find_shortest_path(&grid, Position::new(0, 0), Position::new(2, 0));

        assert_eq!(path.len(), 7);
        assert!(path.iter().all(|&pos| grid.is_floor(pos)));
    }

    // Tests disconnected regions yield an empty path
    // Verified by returning the partial trace when end is unvisited
    #[test]
    fn test_unreachable_end_returns_empty() {
        let mut grid = GridMap::new(5, 1);
        grid.carve(Position::new(0, 0));
        grid.carve(Position::new(1, 0));
        grid.carve(Position::new(4, 0));

        assert!(find_shortest_path(&grid, Position::new(0, 0), Position::new(4, 0)).is_empty());
    }

    // Tests wall or out-of-bounds endpoints yield an empty path
    // Verified by removing the endpoint floor check
    #[test]
    fn test_invalid_endpoints_return_empty() {
        let mut grid = GridMap::new(3, 3);
        grid.carve(Position::new(0, 0));

        assert!(find_shortest_path(&grid, Position::new(0, 0), Position::new(2, 2)).is_empty());
        assert!(find_shortest_path(&grid, Position::new(2, 2), Position::new(0, 0)).is_empty());
        assert!(find_shortest_path(&grid, Position::new(0, 0), Position::new(9, 9)).is_empty());
    }

    // Tests a path to itself is a single cell
    // Verified by skipping the end cell during reconstruction
    #[test]
    fn test_start_equals_end() {
        let grid = open_grid(2, 2);
        let cell = Position::new(1, 1);

        assert_eq!(find_shortest_path(&grid, cell, cell), vec![cell]);
    }

    // Tests discovery order and distances from the middle of a corridor
    // Verified by recording distances after dequeue instead of on discovery
    #[test]
    fn test_breadth_first_distances_discovery_order() {
        let grid = open_grid(3, 1);
        let distances = breadth_first_distances(&grid, Position::new(1, 0));

        assert_eq!(
            distances,
            vec![
                (Position::new(1, 0), 0),
                (Position::new(2, 0), 1),
                (Position::new(0, 0), 1),
            ]
        );
    }

    // Tests reachability counting and floor neighbor filtering
    // Verified by counting wall cells as reachable
    #[test]
    fn test_reachable_count_and_neighbors() {
        let mut grid = GridMap::new(4, 2);
        grid.carve(Position::new(0, 0));
        grid.carve(Position::new(1, 0));
        grid.carve(Position::new(1, 1));
        grid.carve(Position::new(3, 1));

        assert_eq!(reachable_count(&grid, Position::new(0, 0)), 3);
        assert_eq!(reachable_count(&grid, Position::new(2, 0)), 0);

        let neighbors: Vec<Position> = floor_neighbors(&grid, Position::new(1, 0)).collect();
        assert_eq!(neighbors, vec![Position::new(0, 0), Position::new(1, 1)]);
    }
}
