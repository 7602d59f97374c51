use rand::Rng;

use crate::config::Board;
use crate::snake::Position;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food on a uniformly random cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, board: Board) -> Self {
        Self {
            position: random_cell(rng, board),
        }
    }

    /// Creates food at an explicit position.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Moves the food to a uniformly random cell, each coordinate drawn
    /// independently over the grid. Makes no attempt to avoid the snake.
    pub fn randomize_position<R: Rng + ?Sized>(&mut self, rng: &mut R, board: Board) {
        self.position = random_cell(rng, board);
    }

    /// Relocates after the food was eaten, retrying while the new cell
    /// equals `head`.
    ///
    /// Only the head cell is excluded; body cells are fair game, so food
    /// can reappear underneath the snake. Kept deliberately narrow to
    /// match the game's established behavior.
    pub fn relocate_avoiding_head<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        board: Board,
        head: Position,
    ) {
        loop {
            self.randomize_position(rng, board);
            if self.position != head {
                break;
            }
        }
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, board: Board) -> Position {
    let cell_x = rng.gen_range(0..board.cells_wide());
    let cell_y = rng.gen_range(0..board.cells_high());

    Position {
        x: cell_x * board.cell_size,
        y: cell_y * board.cell_size,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::Board;
    use crate::snake::Position;

    use super::Food;

    #[test]
    fn randomized_position_stays_on_the_cell_grid() {
        let board = Board::standard();
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::spawn(&mut rng, board);

        for _ in 0..200 {
            food.randomize_position(&mut rng, board);

            assert!(food.position.x >= 0 && food.position.x < board.width);
            assert!(food.position.y >= 0 && food.position.y < board.height);
            assert_eq!(food.position.x % board.cell_size, 0);
            assert_eq!(food.position.y % board.cell_size, 0);
        }
    }

    #[test]
    fn relocation_never_lands_on_the_head() {
        let board = Board::standard();
        let mut rng = StdRng::seed_from_u64(11);
        let head = board.center();
        let mut food = Food::at(head);

        for _ in 0..100 {
            food.relocate_avoiding_head(&mut rng, board, head);
            assert_ne!(food.position, head);
        }
    }

    #[test]
    fn seeded_rng_gives_reproducible_positions() {
        let board = Board::standard();

        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        let a = Food::spawn(&mut first, board);
        let b = Food::spawn(&mut second, board);

        assert_eq!(a, b);
    }
}
