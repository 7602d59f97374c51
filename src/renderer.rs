use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{Board, BOARD_BACKGROUND_COLOR, BORDER_COLOR, FOOD_COLOR, SNAKE_COLOR};
use crate::game::GameState;
use crate::snake::Position;

const CELL_GLYPH: &str = "█";

/// Renders the full game frame from immutable state.
///
/// The play field is drawn as a bordered block centered in the terminal,
/// one terminal cell per grid cell. Food is drawn before the snake so the
/// snake is always on top.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let play_area = centered_play_area(frame.area(), state.board());

    let block = Block::bordered()
        .title(" Snake ")
        .border_style(Style::new().fg(BORDER_COLOR))
        .style(Style::new().bg(BOARD_BACKGROUND_COLOR));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state);
    render_snake(frame, inner, state);
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some((x, y)) = logical_to_terminal(inner, state.board(), state.food.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, CELL_GLYPH, Style::new().fg(FOOD_COLOR));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.board(), *segment) else {
            continue;
        };

        buffer.set_string(x, y, CELL_GLYPH, Style::new().fg(SNAKE_COLOR));
    }
}

/// Play-field rect sized to the board's cell grid plus the frame, centered
/// in `area` and clamped to whatever fits.
fn centered_play_area(area: Rect, board: Board) -> Rect {
    let want_width = u16::try_from(board.cells_wide()).unwrap_or(u16::MAX).saturating_add(2);
    let want_height = u16::try_from(board.cells_high()).unwrap_or(u16::MAX).saturating_add(2);

    let width = want_width.min(area.width);
    let height = want_height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Maps a pixel-unit board position to terminal coordinates inside `inner`.
///
/// Returns `None` for cells that fall outside the visible area, so an
/// undersized terminal degrades to a cropped view instead of panicking.
fn logical_to_terminal(inner: Rect, board: Board, position: Position) -> Option<(u16, u16)> {
    let cell_x = u16::try_from(position.x / board.cell_size).ok()?;
    let cell_y = u16::try_from(position.y / board.cell_size).ok()?;

    let x = inner.x.saturating_add(cell_x);
    let y = inner.y.saturating_add(cell_y);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
