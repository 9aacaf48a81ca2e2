/// Single coordinate axis used for board rows, columns and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
///
/// Board sizes use the same shape: `(rows, cols)`.
pub type Coord2 = (Coord, Coord);

/// Signed unit step `(d_row, d_col)`.
pub type Delta = (i8, i8);

/// Position or shape as an `ndarray` index.
pub const fn nd_index((row, col): Coord2) -> [usize; 2] {
    [row as usize, col as usize]
}

/// Number of tiles on a board of `(rows, cols)`.
pub const fn tile_count((rows, cols): Coord2) -> CellCount {
    (rows as CellCount).saturating_mul(cols as CellCount)
}

/// `from + delta` when it stays inside `[0, rows) x [0, cols)`.
pub(crate) fn offset_within(
    from: Coord2,
    (d_row, d_col): Delta,
    (rows, cols): Coord2,
) -> Option<Coord2> {
    let row = from.0.checked_add_signed(d_row).filter(|&row| row < rows)?;
    let col = from.1.checked_add_signed(d_col).filter(|&col| col < cols)?;
    Some((row, col))
}

/// The up-to-8 in-bounds tiles touching `center`, in row-major order.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    (-1..=1i8)
        .flat_map(|d_row| (-1..=1i8).map(move |d_col| (d_row, d_col)))
        .filter(|&delta| delta != (0, 0))
        .filter_map(move |delta| offset_within(center, delta, bounds))
}
