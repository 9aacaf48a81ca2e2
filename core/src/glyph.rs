use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the display shows for one tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    Empty,
    Mine,
    Digit(u8),
    Hidden,
    Flagged,
    Suspected,
}

impl Glyph {
    pub const fn symbol(self) -> char {
        use Glyph::*;
        match self {
            Empty => '.',
            Mine => '@',
            Digit(count) => (b'0' + count) as char,
            Hidden => '#',
            Flagged => 'X',
            Suspected => '?',
        }
    }
}

/// Revealed tiles show their content, hidden ones their mark.
pub const fn glyph_for(tile: &Tile) -> Glyph {
    if tile.is_revealed() {
        match tile.content() {
            TileContent::Clear(0) => Glyph::Empty,
            TileContent::Clear(count) => Glyph::Digit(count),
            TileContent::Mine => Glyph::Mine,
        }
    } else {
        match tile.mark() {
            Mark::Unmarked => Glyph::Hidden,
            Mark::Flagged => Glyph::Flagged,
            Mark::Suspected => Glyph::Suspected,
        }
    }
}

/// Row-major glyph grid with the same shape as the field.
pub fn project(minefield: &Minefield) -> Array2<Glyph> {
    minefield.tiles().map(glyph_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Minefield {
        // row 0: @ 1 .
        Minefield::from_mine_coords((1, 3), &[(0, 0)]).unwrap()
    }

    #[test]
    fn hidden_tiles_show_their_mark() {
        let mut minefield = field();
        assert_eq!(glyph_for(&minefield[(0, 0)]), Glyph::Hidden);

        minefield.tile_mut((0, 0)).cycle_mark();
        assert_eq!(glyph_for(&minefield[(0, 0)]), Glyph::Flagged);

        minefield.tile_mut((0, 0)).cycle_mark();
        assert_eq!(glyph_for(&minefield[(0, 0)]), Glyph::Suspected);
    }

    #[test]
    fn revealed_tiles_show_their_content() {
        let mut minefield = field();
        for col in 0..3 {
            minefield.tile_mut((0, col)).reveal();
        }

        assert_eq!(glyph_for(&minefield[(0, 0)]), Glyph::Mine);
        assert_eq!(glyph_for(&minefield[(0, 1)]), Glyph::Digit(1));
        assert_eq!(glyph_for(&minefield[(0, 2)]), Glyph::Empty);
    }

    #[test]
    fn reveal_wins_over_mark() {
        let mut minefield = field();
        minefield.tile_mut((0, 1)).cycle_mark();
        minefield.tile_mut((0, 1)).reveal();

        assert_eq!(glyph_for(&minefield[(0, 1)]), Glyph::Digit(1));
    }

    #[test]
    fn symbols_match_terminal_charset() {
        assert_eq!(Glyph::Empty.symbol(), '.');
        assert_eq!(Glyph::Mine.symbol(), '@');
        assert_eq!(Glyph::Digit(1).symbol(), '1');
        assert_eq!(Glyph::Digit(8).symbol(), '8');
        assert_eq!(Glyph::Hidden.symbol(), '#');
        assert_eq!(Glyph::Flagged.symbol(), 'X');
        assert_eq!(Glyph::Suspected.symbol(), '?');
    }

    #[test]
    fn projection_keeps_shape_and_order() {
        let mut minefield = Minefield::from_mine_coords((2, 3), &[(1, 2)]).unwrap();
        minefield.tile_mut((1, 1)).reveal();

        let glyphs = project(&minefield);

        assert_eq!(glyphs.dim(), (2, 3));
        assert_eq!(glyphs[[1, 1]], Glyph::Digit(1));
        assert_eq!(
            glyphs
                .iter()
                .filter(|&&glyph| glyph == Glyph::Hidden)
                .count(),
            5
        );
    }
}
