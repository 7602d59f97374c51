use ratatui::style::Color;

use crate::snake::Position;

/// Logical board width in pixels.
pub const SCREEN_WIDTH: i32 = 640;

/// Logical board height in pixels.
pub const SCREEN_HEIGHT: i32 = 480;

/// Side length of one grid cell in pixels.
pub const GRID_SIZE: i32 = 20;

/// Simulation ticks per second; controls perceived snake speed.
pub const TICKS_PER_SECOND: u64 = 20;

/// Background color for the play field.
pub const BOARD_BACKGROUND_COLOR: Color = Color::Black;

/// Color of the play-field frame.
pub const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);

/// Solid color for the food cell.
pub const FOOD_COLOR: Color = Color::Rgb(255, 0, 0);

/// Solid color for snake segments.
pub const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);

/// Board geometry passed explicitly to everything that needs it.
///
/// Replaces process-wide screen constants with a single context value
/// constructed at startup. Positions are in pixel units; the board is a
/// torus, so wrapping happens modulo `width` and `height`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Board {
    /// The standard 640×480 board with 20-px cells (a 32×24 cell grid).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            cell_size: GRID_SIZE,
        }
    }

    /// Number of cells per row.
    #[must_use]
    pub fn cells_wide(self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cells per column.
    #[must_use]
    pub fn cells_high(self) -> i32 {
        self.height / self.cell_size
    }

    /// Board center snapped down onto the cell grid.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: (self.width / 2) - (self.width / 2) % self.cell_size,
            y: (self.height / 2) - (self.height / 2) % self.cell_size,
        }
    }

    /// Wraps a position onto the torus on both axes.
    #[must_use]
    pub fn wrap(self, position: Position) -> Position {
        Position {
            x: wrap_axis(position.x, self.width),
            y: wrap_axis(position.y, self.height),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::snake::Position;

    #[test]
    fn standard_board_is_a_32_by_24_grid() {
        let board = Board::standard();

        assert_eq!(board.cells_wide(), 32);
        assert_eq!(board.cells_high(), 24);
    }

    #[test]
    fn center_lands_on_a_cell_boundary() {
        let board = Board::standard();
        let center = board.center();

        assert_eq!(center, Position { x: 320, y: 240 });
        assert_eq!(center.x % board.cell_size, 0);
        assert_eq!(center.y % board.cell_size, 0);
    }

    #[test]
    fn wrapping_keeps_coordinates_inside_the_board() {
        let board = Board::standard();

        let past_right = board.wrap(Position { x: 640, y: 100 });
        let past_left = board.wrap(Position { x: -20, y: 100 });
        let past_bottom = board.wrap(Position { x: 100, y: 480 });
        let past_top = board.wrap(Position { x: 100, y: -20 });

        assert_eq!(past_right, Position { x: 0, y: 100 });
        assert_eq!(past_left, Position { x: 620, y: 100 });
        assert_eq!(past_bottom, Position { x: 100, y: 0 });
        assert_eq!(past_top, Position { x: 100, y: 460 });
    }
}
