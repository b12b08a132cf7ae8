//! Tile identifiers and column-major tile layout.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Parsed `"<column>;<row>"` tile file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileId {
    Indexed { column: u32, row: u32 },
    Malformed,
}

impl TileId {
    pub fn parse(stem: &str) -> Self {
        let Some((column, row)) = stem.split_once(';') else {
            return Self::Malformed;
        };
        match (column.trim().parse(), row.trim().parse()) {
            (Ok(column), Ok(row)) => Self::Indexed { column, row },
            _ => Self::Malformed,
        }
    }

    /// Parse the file stem of a tile path.
    pub fn from_path(path: &Path) -> Self {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .map(Self::parse)
            .unwrap_or(Self::Malformed)
    }
}

/// Where one tile lands in the stitched image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePlacement {
    pub path: PathBuf,
    pub column: u32,
    pub row: u32,
    pub x: u32,
    pub y: u32,
}

/// Tiles grouped by column, each column sorted by row.
#[derive(Debug, Clone, Default)]
pub struct TileGrid {
    columns: BTreeMap<u32, Vec<(u32, PathBuf)>>,
}

impl TileGrid {
    /// Group tile files by column.
    ///
    /// Tiles whose column or row exceeds `max_index` are dropped, as are
    /// files whose name is not a tile identifier.
    pub fn from_tiles(tiles: &[PathBuf], max_index: u32) -> Self {
        let mut columns: BTreeMap<u32, Vec<(u32, PathBuf)>> = BTreeMap::new();
        for path in tiles {
            match TileId::from_path(path) {
                TileId::Indexed { column, row } if column <= max_index && row <= max_index => {
                    columns.entry(column).or_default().push((row, path.clone()));
                }
                TileId::Indexed { column, row } => {
                    tracing::debug!(column, row, max_index, "Dropping out-of-range tile");
                }
                TileId::Malformed => {
                    tracing::debug!(path = %path.display(), "Skipping malformed tile name");
                }
            }
        }
        for rows in columns.values_mut() {
            rows.sort_by_key(|(row, _)| *row);
        }
        Self { columns }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn tile_count(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column-major placements at each tile's own grid cell:
    /// `x = column * tile_width`, `y = row * tile_height`. Missing tiles
    /// leave their cell empty.
    pub fn placements(&self, tile_width: u32, tile_height: u32) -> Vec<TilePlacement> {
        self.columns
            .iter()
            .flat_map(|(&column, rows)| {
                rows.iter().map(move |(row, path)| TilePlacement {
                    path: path.clone(),
                    column,
                    row: *row,
                    x: column.saturating_mul(tile_width),
                    y: row.saturating_mul(tile_height),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names
            .iter()
            .map(|n| PathBuf::from("/capture").join(n))
            .collect()
    }

    #[test]
    fn parses_tile_identifiers() {
        assert_eq!(
            TileId::parse("3;12"),
            TileId::Indexed { column: 3, row: 12 }
        );
        assert_eq!(TileId::parse("3"), TileId::Malformed);
        assert_eq!(TileId::parse("a;1"), TileId::Malformed);
        assert_eq!(TileId::parse("1;-2"), TileId::Malformed);
        assert_eq!(
            TileId::from_path(Path::new("/tmp/hires/2;0.png")),
            TileId::Indexed { column: 2, row: 0 }
        );
    }

    #[test]
    fn two_by_two_grid_is_column_major() {
        let grid = TileGrid::from_tiles(&paths(&["1;1.png", "0;1.png", "1;0.png", "0;0.png"]), 15);
        let placed: Vec<_> = grid
            .placements(1000, 1000)
            .into_iter()
            .map(|p| (p.column, p.row, p.x, p.y))
            .collect();
        assert_eq!(
            placed,
            vec![
                (0, 0, 0, 0),
                (0, 1, 0, 1000),
                (1, 0, 1000, 0),
                (1, 1, 1000, 1000),
            ]
        );
    }

    #[test]
    fn sparse_grid_keeps_tiles_in_their_cells() {
        let grid = TileGrid::from_tiles(&paths(&["0;1.png", "1;0.png", "1;1.png", "0;0.png.bak"]), 15);
        let placed: Vec<_> = grid
            .placements(10, 10)
            .into_iter()
            .map(|p| (p.column, p.row, p.x, p.y))
            .collect();
        assert_eq!(placed, vec![(0, 1, 0, 10), (1, 0, 10, 0), (1, 1, 10, 10)]);

        let right_column = TileGrid::from_tiles(&paths(&["1;0.png", "1;1.png"]), 15);
        let placed: Vec<_> = right_column
            .placements(10, 10)
            .into_iter()
            .map(|p| (p.x, p.y))
            .collect();
        assert_eq!(placed, vec![(10, 0), (10, 10)]);
    }

    #[test]
    fn tiles_beyond_index_ceiling_are_dropped() {
        let grid = TileGrid::from_tiles(
            &paths(&["0;0.png", "16;0.png", "0;16.png", "15;15.png", "junk.png"]),
            15,
        );
        assert_eq!(grid.tile_count(), 2);
        assert_eq!(grid.column_count(), 2);
    }

    #[test]
    fn empty_input_gives_empty_grid() {
        let grid = TileGrid::from_tiles(&[], 15);
        assert!(grid.is_empty());
        assert!(grid.placements(10, 10).is_empty());
    }
}
