use super::*;
use alloc::vec::Vec;

/// Seeded generator for reproducible fields.
pub fn seeded_rng(seed: u64) -> SmallRng {
    use rand::prelude::*;
    SmallRng::seed_from_u64(seed)
}

/// Purely random generation strategy, every tile is equally likely to hold a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator<R> {
    source: R,
    placement: Placement,
}

impl<R: RandomSource> RandomMinefieldGenerator<R> {
    pub fn new(source: R, placement: Placement) -> Self {
        Self { source, placement }
    }
}

impl RandomMinefieldGenerator<SmallRng> {
    pub fn from_seed(seed: u64, placement: Placement) -> Self {
        Self::new(seeded_rng(seed), placement)
    }
}

impl<R: RandomSource> MinefieldGenerator for RandomMinefieldGenerator<R> {
    fn generate(mut self, config: GameConfig) -> Minefield {
        let mut minefield = Minefield::new_clear(config.size);
        let total_tiles = minefield.total_tiles();

        let mines = if config.mines > total_tiles {
            log::warn!(
                "Minefield too small, requested {} mines but only fits {}",
                config.mines,
                total_tiles
            );
            total_tiles
        } else {
            config.mines
        };

        match self.placement {
            Placement::Rejection => place_rejecting(&mut minefield, &mut self.source, mines),
            Placement::FreeTile => place_on_free_tiles(&mut minefield, &mut self.source, mines),
        }

        // double check mine count
        let count = minefield.recount_mines();
        if count != usize::from(mines) {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                count,
                mines
            );
        }
        log::debug!(
            "Generated {}x{} minefield with {} mines ({:?})",
            config.rows(),
            config.cols(),
            minefield.mine_count(),
            self.placement
        );
        minefield
    }
}

fn place_rejecting<R: RandomSource>(minefield: &mut Minefield, source: &mut R, mines: CellCount) {
    let total_tiles = minefield.total_tiles();
    let mut draws: u32 = 0;

    while minefield.mine_count() < mines {
        let index = source.next_index(total_tiles);
        draws += 1;
        if index >= total_tiles {
            log::warn!("Random source out of range: {} >= {}", index, total_tiles);
            continue;
        }

        let coords = minefield.coords_of(index.into());
        if !minefield.place_mine(coords) {
            log::trace!("Tile {:?} already holds a mine, redraw", coords);
        }
    }

    log::trace!(
        "Rejection placement used {} draws for {} mines",
        draws,
        mines
    );
}

/// Partial Fisher-Yates shuffle over the linear tile indices.
///
/// `order[..placed]` holds the mined tiles and `order[placed..]` the clear
/// ones, so every draw picks among the clear tiles left, one draw per mine.
fn place_on_free_tiles<R: RandomSource>(
    minefield: &mut Minefield,
    source: &mut R,
    mines: CellCount,
) {
    let total_tiles = minefield.total_tiles();
    let mut order: Vec<CellCount> = (0..total_tiles).collect();
    let mut placed: CellCount = 0;

    while placed < mines {
        let free_tiles = total_tiles - placed;
        let pick = source.next_index(free_tiles);
        if pick >= free_tiles {
            log::warn!("Random source out of range: {} >= {}", pick, free_tiles);
            continue;
        }

        let slot = usize::from(placed);
        order.swap(slot, slot + usize::from(pick));
        let coords = minefield.coords_of(order[slot].into());
        minefield.place_mine(coords);
        placed += 1;
    }
}
