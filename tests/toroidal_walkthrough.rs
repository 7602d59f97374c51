use wrap_snake::config::Board;
use wrap_snake::food::Food;
use wrap_snake::game::GameState;
use wrap_snake::input::{Direction, GameInput};
use wrap_snake::snake::{Position, Snake};

/// Straight run from the board center on the standard 32-cell-wide board:
/// the head crosses the right edge exactly once and is back in the starting
/// column after 32 moves.
#[test]
fn straight_run_wraps_once_and_returns_to_start_column() {
    let board = Board::standard();
    let mut state = GameState::new_with_seed(board, 42);
    // Park the food away from the snake's row so nothing is eaten.
    state.food = Food::at(Position { x: 0, y: 0 });

    let start = state.snake.head();
    assert_eq!(start, Position { x: 320, y: 240 });

    let mut wraps = 0;
    for _ in 0..32 {
        let before = state.snake.head().x;
        state.tick();
        if state.snake.head().x < before {
            wraps += 1;
        }
    }

    assert_eq!(wraps, 1);
    assert_eq!(state.snake.head(), start);
    assert_eq!(state.snake.len(), 1);
}

/// Eat, grow, turn into the body, reset: one seeded session end to end.
#[test]
fn stepwise_eating_and_collision_reset() {
    let board = Board::standard();
    let mut state = GameState::new_with_seed(board, 7);

    // Four food cells laid out along the snake's path, eaten one per tick.
    let row = 240;
    state.snake = Snake::from_segments(vec![Position { x: 300, y: row }], Direction::Right);
    for step in 1..=4 {
        state.food = Food::at(Position {
            x: 300 + step * 20,
            y: row,
        });
        state.tick();
    }
    assert_eq!(state.snake.length(), 5);

    // One more plain move realizes the last queued growth.
    state.food = Food::at(Position { x: 0, y: 0 });
    state.tick();
    assert_eq!(state.snake.len(), 5);
    assert_eq!(state.snake.head(), Position { x: 400, y: row });

    // Hook back into the body: up, left, down lands the head on a segment.
    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick();
    state.apply_input(GameInput::Direction(Direction::Left));
    state.tick();
    state.apply_input(GameInput::Direction(Direction::Down));
    state.tick();

    // The collision tick reset the snake to a single cell at the center.
    assert_eq!(
        state.snake.segments().copied().collect::<Vec<_>>(),
        vec![board.center()]
    );
    assert_eq!(state.snake.length(), 1);
    assert_eq!(state.snake.direction(), Direction::Right);
}
