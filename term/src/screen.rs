use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType},
};
use minefield_core::{Coord2, Glyph, PlayEngine};
use ndarray::Array2;

const TITLE: &str = "> MINESWEEPER <";
const SCORE_TEXT: &str = "BOMBS : ";

/// Text of the mine counter, always three digits.
pub fn counter_text(mines: u16) -> String {
    format!("{SCORE_TEXT}{:03}", mines % 1000)
}

/// Where the board goes on the terminal. Positions are `(column, row)` cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Top-left tile of the board.
    pub origin: (u16, u16),
    /// Board size in cells, `(columns, rows)`.
    pub board: (u16, u16),
}

impl Layout {
    /// Centers a board of `(rows, cols)` tiles on a terminal of `(columns, rows)`.
    ///
    /// Returns `None` when the board with its border, title and counter does
    /// not fit.
    pub fn centered(terminal: (u16, u16), (rows, cols): Coord2) -> Option<Self> {
        let (term_cols, term_rows) = terminal;
        let board = (u16::from(cols), u16::from(rows));

        let min_width = (board.0 + 2)
            .max(TITLE.len() as u16)
            .max(counter_text(0).len() as u16);
        // title, top border, board, bottom border, counter
        let min_height = board.1 + 4;
        if term_cols < min_width || term_rows < min_height {
            return None;
        }

        let left = ((term_cols - board.0) / 2).max(1);
        let top = ((term_rows - board.1) / 2).max(2);
        if left + board.0 + 1 > term_cols || top + board.1 + 2 > term_rows {
            return None;
        }

        Some(Self {
            origin: (left, top),
            board,
        })
    }

    pub fn title_position(&self) -> (u16, u16) {
        let (left, top) = self.origin;
        let center = left + self.board.0 / 2;
        (center.saturating_sub(TITLE.len() as u16 / 2), top - 2)
    }

    /// The counter ends at the right border.
    pub fn counter_position(&self, text_len: u16) -> (u16, u16) {
        let (left, top) = self.origin;
        let right = left + self.board.0 + 1;
        (right.saturating_sub(text_len), top + self.board.1 + 1)
    }

    /// Terminal cell of the tile at `(row, col)`.
    pub fn tile_position(&self, (row, col): Coord2) -> (u16, u16) {
        let (left, top) = self.origin;
        (left + u16::from(col), top + u16::from(row))
    }
}

/// Owns the terminal while the game runs, restores it when dropped.
pub struct Screen {
    writer: BufWriter<Stdout>,
}

impl Screen {
    pub fn enter() -> io::Result<Self> {
        let mut writer = BufWriter::with_capacity(16384, io::stdout());
        terminal::enable_raw_mode()?;
        execute!(
            writer,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        log::debug!("Terminal switched to raw mode");
        Ok(Self { writer })
    }

    pub fn draw(&mut self, engine: &PlayEngine) -> io::Result<()> {
        let size = terminal::size().unwrap_or((80, 24));
        queue!(self.writer, Clear(ClearType::All))?;

        match Layout::centered(size, engine.size()) {
            Some(layout) => self.draw_game(&layout, engine)?,
            None => {
                let (rows, cols) = engine.size();
                queue!(
                    self.writer,
                    MoveTo(0, 0),
                    Print(format!(
                        "Terminal too small, need at least {}x{}",
                        (u16::from(cols) + 2).max(TITLE.len() as u16),
                        u16::from(rows) + 4
                    ))
                )?;
            }
        }

        self.writer.flush()
    }

    fn draw_game(&mut self, layout: &Layout, engine: &PlayEngine) -> io::Result<()> {
        self.draw_border(layout)?;

        let (x, y) = layout.title_position();
        queue!(self.writer, MoveTo(x, y), Print(TITLE))?;

        let counter = counter_text(engine.total_mines());
        let (x, y) = layout.counter_position(counter.len() as u16);
        queue!(self.writer, MoveTo(x, y), Print(counter))?;

        self.draw_board(layout, &engine.glyphs(), engine.cursor().position())
    }

    fn draw_border(&mut self, layout: &Layout) -> io::Result<()> {
        let (left, top) = layout.origin;
        let (width, height) = layout.board;
        let horizontal = format!("+{}+", "-".repeat(usize::from(width)));

        queue!(
            self.writer,
            MoveTo(left - 1, top - 1),
            Print(&horizontal),
            MoveTo(left - 1, top + height),
            Print(&horizontal)
        )?;
        for row in top..top + height {
            queue!(
                self.writer,
                MoveTo(left - 1, row),
                Print('|'),
                MoveTo(left + width, row),
                Print('|')
            )?;
        }
        Ok(())
    }

    fn draw_board(
        &mut self,
        layout: &Layout,
        glyphs: &Array2<Glyph>,
        cursor: Coord2,
    ) -> io::Result<()> {
        for (row, line) in glyphs.rows().into_iter().enumerate() {
            let text: String = line.iter().map(|glyph| glyph.symbol()).collect();
            let (x, y) = layout.tile_position((row as u8, 0));
            queue!(self.writer, MoveTo(x, y), Print(text))?;
        }

        let (x, y) = layout.tile_position(cursor);
        let symbol = glyphs[[usize::from(cursor.0), usize::from(cursor.1)]].symbol();
        queue!(
            self.writer,
            MoveTo(x, y),
            SetAttribute(Attribute::Reverse),
            Print(symbol),
            SetAttribute(Attribute::NoReverse)
        )
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let restored = execute!(
            self.writer,
            SetAttribute(Attribute::Reset),
            cursor::Show,
            terminal::LeaveAlternateScreen
        )
        .and_then(|()| terminal::disable_raw_mode());

        match restored {
            Ok(()) => log::debug!("Terminal restored"),
            Err(err) => log::error!("Failed to restore terminal: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_three_digits() {
        assert_eq!(counter_text(7), "BOMBS : 007");
        assert_eq!(counter_text(42), "BOMBS : 042");
        assert_eq!(counter_text(999), "BOMBS : 999");
        assert_eq!(counter_text(1234), "BOMBS : 234");
    }

    #[test]
    fn board_is_centered() {
        let layout = Layout::centered((80, 50), (40, 60)).unwrap();

        assert_eq!(layout.origin, (10, 5));
        assert_eq!(layout.tile_position((0, 0)), (10, 5));
        assert_eq!(layout.tile_position((39, 59)), (69, 44));
    }

    #[test]
    fn decorations_surround_the_board() {
        let layout = Layout::centered((80, 50), (40, 60)).unwrap();

        // title two rows above the board, centered on it
        assert_eq!(layout.title_position(), (33, 3));
        // counter one row below the bottom border, flush with the right border
        assert_eq!(layout.counter_position(11), (60, 46));
    }

    #[test]
    fn tight_terminal_keeps_room_for_decorations() {
        let layout = Layout::centered((17, 7), (3, 3)).unwrap();

        let (left, top) = layout.origin;
        assert!(left >= 1);
        assert!(top >= 2);
        assert!(top + 3 + 2 <= 7);
    }

    #[test]
    fn too_small_terminal_has_no_layout() {
        assert_eq!(Layout::centered((61, 50), (40, 60)), None);
        assert_eq!(Layout::centered((80, 43), (40, 60)), None);
        assert_eq!(Layout::centered((10, 20), (3, 3)), None);
    }
}
