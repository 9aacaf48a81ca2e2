use crate::*;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield;
}

/// Supplier of uniformly distributed tile indices.
pub trait RandomSource {
    /// Returns a value in `[0, bound)`, `bound` is never zero.
    fn next_index(&mut self, bound: CellCount) -> CellCount;
}

impl RandomSource for SmallRng {
    fn next_index(&mut self, bound: CellCount) -> CellCount {
        use rand::prelude::*;
        self.random_range(0..bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: CellCount) -> CellCount {
        (**self).next_index(bound)
    }
}

/// How mines are spread over the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Draw any tile, redraw when it already holds a mine.
    Rejection,
    /// Draw among the tiles still clear, one draw per mine.
    #[default]
    FreeTile,
}
