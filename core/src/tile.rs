use serde::{Deserialize, Serialize};

/// What a tile hides: the number of neighboring mines, or a mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileContent {
    Clear(u8),
    Mine,
}

impl Default for TileContent {
    fn default() -> Self {
        Self::Clear(0)
    }
}

/// Player annotation on a tile.
///
/// Cycles `Unmarked -> Flagged -> Suspected -> Unmarked`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Unmarked,
    Flagged,
    Suspected,
}

impl Mark {
    pub const fn next(self) -> Self {
        use Mark::*;
        match self {
            Unmarked => Flagged,
            Flagged => Suspected,
            Suspected => Unmarked,
        }
    }
}

impl Default for Mark {
    fn default() -> Self {
        Self::Unmarked
    }
}

/// A single cell of the minefield.
///
/// The reveal flag and the mark are independent: revealing keeps the mark
/// and marking never reveals.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    content: TileContent,
    revealed: bool,
    mark: Mark,
}

impl Tile {
    pub const fn content(&self) -> TileContent {
        self.content
    }

    pub const fn is_mine(&self) -> bool {
        matches!(self.content, TileContent::Mine)
    }

    /// Number of neighboring mines, `None` when the tile is a mine itself.
    pub const fn adjacent_mines(&self) -> Option<u8> {
        match self.content {
            TileContent::Clear(count) => Some(count),
            TileContent::Mine => None,
        }
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn mark(&self) -> Mark {
        self.mark
    }

    /// Reveals the tile, returns whether anything changed.
    pub fn reveal(&mut self) -> bool {
        let changed = !self.revealed;
        self.revealed = true;
        changed
    }

    pub fn cycle_mark(&mut self) -> Mark {
        self.mark = self.mark.next();
        self.mark
    }

    pub(crate) fn set_mine(&mut self) {
        self.content = TileContent::Mine;
    }

    /// Bumps the neighbor count, mines are left untouched.
    pub(crate) fn add_adjacent_mine(&mut self) {
        if let TileContent::Clear(count) = self.content {
            self.content = TileContent::Clear(count + 1);
        }
    }
}
