use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};
use crate::games::SessionRng;
use super::types::{Cell, Direction, WallCollisionMode};

const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    wall_collision_mode: WallCollisionMode,
}

impl Board {
    pub fn new(rows: usize, cols: usize, wall_collision_mode: WallCollisionMode) -> EngineResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "board dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self {
            rows,
            cols,
            wall_collision_mode,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_inside(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Neighbour of `cell` in `direction`. `None` means the move leaves the board.
    pub fn next_cell(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (d_row, d_col) = direction.delta();
        let row = cell.row as isize + d_row;
        let col = cell.col as isize + d_col;

        match self.wall_collision_mode {
            WallCollisionMode::Death => {
                let next = Cell::new(usize::try_from(row).ok()?, usize::try_from(col).ok()?);
                self.is_inside(next).then_some(next)
            }
            WallCollisionMode::WrapAround => Some(Cell::new(
                row.rem_euclid(self.rows as isize) as usize,
                col.rem_euclid(self.cols as isize) as usize,
            )),
        }
    }

    /// Picks a uniformly random cell not in `excluding`. Tries blind sampling
    /// first, then scans the free cells so a nearly full board still terminates.
    pub fn random_empty_cell(&self, excluding: &HashSet<Cell>, rng: &mut SessionRng) -> Option<Cell> {
        if excluding.len() < self.cell_count() {
            for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
                let cell = Cell::new(rng.random_range(0..self.rows), rng.random_range(0..self.cols));
                if !excluding.contains(&cell) {
                    return Some(cell);
                }
            }
        }

        let free: Vec<Cell> = self.cells().filter(|c| !excluding.contains(c)).collect();
        if free.is_empty() {
            return None;
        }
        Some(free[rng.random_range(0..free.len())])
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }
}
