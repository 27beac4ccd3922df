//! Tests for map snapshots in text and JSON form

#[cfg(test)]
mod tests {
    use dungeon_forge::algorithm::strategy::Strategy;
    use dungeon_forge::io::export::{MapDocument, OutputFormat, to_json, write_map};
    use dungeon_forge::spatial::grid::{GridMap, Position};
    use serde_json::Value;

    fn small_map() -> GridMap {
        let mut grid = GridMap::new(3, 2);
        for x in 0..3 {
            grid.carve(Position::new(x, 0));
        }
        grid.finalize(Position::new(0, 0), Position::new(2, 0));
        grid
    }

    // Tests each format maps to its file extension
    // Verified by writing ASCII maps with an .ascii extension
    #[test]
    fn test_extensions() {
        assert_eq!(OutputFormat::default(), OutputFormat::Png);
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::Ascii.extension(), "txt");
        assert_eq!(OutputFormat::Json.extension(), "json");
    }

    // Tests the document captures rows, endpoints and metrics
    // Verified by storing rows bottom to top
    #[test]
    fn test_map_document() {
        let document = MapDocument::new(&small_map(), Strategy::Maze, 9);

        assert_eq!(document.strategy, "maze");
        assert_eq!(document.rows, vec!["...", "###"]);
        assert_eq!(document.path.len(), 3);
        assert_eq!(document.metrics.floor_cells, 3);
    }

    // Tests the JSON layout
    // Verified by renaming the rows field
    #[test]
    fn test_to_json() -> Result<(), Box<dyn std::error::Error>> {
        let json = to_json(&small_map(), Strategy::Poi, 4)?;
        let value: Value = serde_json::from_str(&json)?;

        assert_eq!(value["strategy"], "poi");
        assert_eq!(value["seed"], 4);
        assert_eq!(value["width"], 3);
        assert_eq!(value["start"]["x"], 0);
        assert_eq!(value["end"]["x"], 2);
        assert_eq!(value["rows"][1], "###");
        assert_eq!(value["metrics"]["path_length"], 3);
        Ok(())
    }

    // Tests ASCII output matches the grid display and lands in new directories
    // Verified by writing JSON for the ASCII format
    #[test]
    fn test_write_ascii_and_json() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let grid = small_map();

        let ascii_path = dir.path().join("maps").join("poi_4.txt");
        write_map(&grid, Strategy::Poi, 4, OutputFormat::Ascii, 1, &ascii_path)?;
        assert_eq!(std::fs::read_to_string(&ascii_path)?, "S*E\n###\n");

        let json_path = dir.path().join("poi_4.json");
        write_map(&grid, Strategy::Poi, 4, OutputFormat::Json, 1, &json_path)?;
        let value: Value = serde_json::from_str(&std::fs::read_to_string(&json_path)?)?;
        assert_eq!(value["height"], 2);
        Ok(())
    }
}
