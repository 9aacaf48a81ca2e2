use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Decoded player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    CycleMark,
    Reveal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    NoChange,
    Moved,
    MarkChanged(Mark),
    Revealed,
}

impl CommandOutcome {
    pub const fn has_update(self) -> bool {
        use CommandOutcome::*;
        match self {
            NoChange => false,
            Moved => true,
            MarkChanged(_) => true,
            Revealed => true,
        }
    }
}

/// Applies player commands to the field through the cursor.
///
/// There is a single playing state: nothing ends the session, revealing a
/// mine only exposes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    minefield: Minefield,
    cursor: Cursor,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
}

impl PlayEngine {
    /// Starts a session with the cursor at the origin.
    ///
    /// A field without tiles has nowhere to put the cursor and is refused.
    pub fn new(minefield: Minefield) -> Result<Self> {
        if minefield.total_tiles() == 0 {
            log::warn!("Refusing to play on an empty {:?} field", minefield.size());
            return Err(GameError::InvalidSize);
        }

        let cursor = Cursor::new(minefield.size());
        Ok(Self {
            minefield,
            cursor,
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
        })
    }

    pub fn size(&self) -> Coord2 {
        self.minefield.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.minefield.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn tile_at_cursor(&self) -> &Tile {
        &self.minefield[self.cursor.position()]
    }

    pub fn glyphs(&self) -> Array2<Glyph> {
        project(&self.minefield)
    }

    /// Applies one polled input, `None` means nothing was pressed.
    pub fn apply_input(&mut self, input: Option<Command>) -> CommandOutcome {
        match input {
            Some(command) => self.apply(command),
            None => CommandOutcome::NoChange,
        }
    }

    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        use CommandOutcome::*;

        match command {
            Command::Move(direction) => {
                if self.cursor.step(direction) {
                    log::trace!("Cursor moved to {:?}", self.cursor.position());
                    Moved
                } else {
                    NoChange
                }
            }
            Command::CycleMark => MarkChanged(self.cycle_mark()),
            Command::Reveal => {
                if self.reveal() {
                    Revealed
                } else {
                    NoChange
                }
            }
        }
    }

    fn cycle_mark(&mut self) -> Mark {
        let coords = self.cursor.position();
        let mark = self.minefield.tile_mut(coords).cycle_mark();

        match mark {
            Mark::Flagged => self.flagged_count += 1,
            Mark::Suspected => self.flagged_count -= 1,
            Mark::Unmarked => {}
        }
        log::debug!("Mark at {:?} is now {:?}", coords, mark);
        mark
    }

    fn reveal(&mut self) -> bool {
        let coords = self.cursor.position();
        let tile = self.minefield.tile_mut(coords);

        if !tile.reveal() {
            return false;
        }

        self.revealed_count += 1;
        match tile.content() {
            TileContent::Mine => log::debug!("Revealed mine at {:?}", coords),
            TileContent::Clear(count) => {
                log::debug!("Revealed tile at {:?}, mine count: {}", coords, count)
            }
        }
        true
    }
}
