use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Board;
use crate::food::Food;
use crate::input::GameInput;
use crate::snake::Snake;

/// Complete mutable game state for one session.
///
/// Owns the snake, the food, the board geometry, and the RNG used for food
/// placement, so a seeded state replays deterministically.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub tick_count: u64,
    board: Board,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from OS entropy.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_rng(board, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(board: Board, seed: u64) -> Self {
        Self::with_rng(board, StdRng::seed_from_u64(seed))
    }

    fn with_rng(board: Board, mut rng: StdRng) -> Self {
        let snake = Snake::new(board);
        let food = Food::spawn(&mut rng, board);

        Self {
            snake,
            food,
            tick_count: 0,
            board,
            rng,
        }
    }

    /// Returns the board geometry.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Advances the simulation by one tick.
    ///
    /// Order per tick: commit the buffered direction, move, resolve eating,
    /// then resolve self-collision. Self-collision resets the snake and
    /// relocates the food; it never ends the run.
    pub fn tick(&mut self) {
        self.tick_count += 1;

        self.snake.update_direction();
        self.snake.move_forward(self.board);

        let head = self.snake.head();
        if head == self.food.position {
            self.snake.eat();
            self.food
                .relocate_avoiding_head(&mut self.rng, self.board, head);
        }

        if self.snake.head_overlaps_body() {
            self.snake.reset(self.board);
            self.food.randomize_position(&mut self.rng, self.board);
        }
    }

    /// Applies one external input event. Quit is handled by the caller.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.snake.buffer_direction(direction),
            GameInput::Quit => {}
        }
    }
}
