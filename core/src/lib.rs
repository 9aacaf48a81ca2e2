#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cursor::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use glyph::*;
pub use tile::*;
pub use types::*;

mod cursor;
mod engine;
mod error;
mod generator;
mod glyph;
mod tile;
mod types;

/// Session parameters: board size `(rows, cols)` and how many mines to place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates the parameters, at least one tile must remain clear.
    pub fn new((rows, cols): Coord2, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }
        if mines >= tile_count((rows, cols)) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked((rows, cols), mines))
    }

    /// Picks a mine count in `[N/4, N/2)` for a board of `N` tiles.
    ///
    /// Boards too small for that range get no mines at all.
    pub fn with_random_density<R: RandomSource>(size: Coord2, source: &mut R) -> Result<Self> {
        let total_tiles = Self::new(size, 0)?.total_tiles();
        let quarter = total_tiles / 4;
        let mines = if quarter == 0 {
            0
        } else {
            quarter + source.next_index(quarter)
        };
        Self::new(size, mines)
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_tiles(&self) -> CellCount {
        tile_count(self.size)
    }
}

/// The tile grid of one session.
///
/// Tiles are stored contiguously in row-major order, tile `(row, col)` lives
/// at linear index `row * cols + col`. The size never changes after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    tiles: Array2<Tile>,
    mine_count: CellCount,
}

impl Minefield {
    /// A field of hidden, unmarked tiles without any mines.
    pub(crate) fn new_clear(size: Coord2) -> Self {
        Self {
            tiles: Array2::default(nd_index(size)),
            mine_count: 0,
        }
    }

    /// Builds a field with mines at fixed positions, duplicates are ignored.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let config = GameConfig::new(size, 0)?;
        let mut field = Self::new_clear(config.size);

        for &coords in mine_coords {
            let coords = field.validate_coords(coords)?;
            field.place_mine(coords);
        }

        if field.mine_count >= field.total_tiles() {
            return Err(GameError::TooManyMines);
        }
        Ok(field)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            mines: self.mine_count,
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.tiles.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_tiles(&self) -> CellCount {
        self.tiles.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_tile_count(&self) -> CellCount {
        self.total_tiles() - self.mine_count
    }

    /// Row-major position of `coords` in the tile storage.
    pub fn linear_index(&self, (row, col): Coord2) -> usize {
        usize::from(row) * usize::from(self.cols()) + usize::from(col)
    }

    /// Inverse of [`Minefield::linear_index`].
    pub fn coords_of(&self, index: usize) -> Coord2 {
        let cols = usize::from(self.cols());
        ((index / cols) as Coord, (index % cols) as Coord)
    }

    pub fn tile(&self, coords: Coord2) -> &Tile {
        &self.tiles[nd_index(coords)]
    }

    pub(crate) fn tile_mut(&mut self, coords: Coord2) -> &mut Tile {
        &mut self.tiles[nd_index(coords)]
    }

    pub fn tiles(&self) -> &Array2<Tile> {
        &self.tiles
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }

    /// Mines found by scanning every tile, independent of the running count.
    pub(crate) fn recount_mines(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_mine()).count()
    }

    /// Turns the tile into a mine and bumps the count of every clear neighbor.
    ///
    /// Returns `false` without touching anything when the tile already is a mine.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        if self[coords].is_mine() {
            return false;
        }

        self.tile_mut(coords).set_mine();
        for pos in neighbors(coords, self.size()) {
            self.tile_mut(pos).add_adjacent_mine();
        }
        self.mine_count += 1;
        true
    }
}

impl Index<Coord2> for Minefield {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        self.tile(coords)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    /// Recounts the mines around `coords` from scratch.
    pub(crate) fn brute_force_count(field: &Minefield, (row, col): Coord2) -> u8 {
        let (rows, cols) = field.size();
        let mut count = 0;
        for r in row.saturating_sub(1)..=row.saturating_add(1) {
            for c in col.saturating_sub(1)..=col.saturating_add(1) {
                if (r, c) == (row, col) || r >= rows || c >= cols {
                    continue;
                }
                if field.contains_mine((r, c)) {
                    count += 1;
                }
            }
        }
        count
    }

    pub(crate) fn assert_counts_consistent(field: &Minefield) {
        let (rows, cols) = field.size();
        for row in 0..rows {
            for col in 0..cols {
                let tile = field[(row, col)];
                if let Some(count) = tile.adjacent_mines() {
                    assert_eq!(
                        count,
                        brute_force_count(field, (row, col)),
                        "wrong count at {:?}",
                        (row, col)
                    );
                }
            }
        }
    }
}
