use std::collections::{HashSet, VecDeque};

use crate::error::{EngineError, EngineResult};
use super::board::Board;
use super::types::{Cell, Direction, MoveOutcome};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    body_set: HashSet<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
}

impl Snake {
    /// Lays out `length` cells starting at `head` and trailing away from `direction`.
    pub fn new(head: Cell, direction: Direction, length: usize, board: &Board) -> EngineResult<Self> {
        if !board.is_inside(head) {
            return Err(EngineError::CellOutsideBoard(head));
        }

        let mut cells = Vec::with_capacity(length);
        let mut current = head;
        cells.push(current);
        for _ in 1..length {
            current = board.next_cell(current, direction.opposite()).ok_or_else(|| {
                EngineError::InvalidConfiguration(format!(
                    "snake of length {} does not fit behind {}",
                    length, head
                ))
            })?;
            cells.push(current);
        }

        Self::from_cells(cells, direction)
    }

    pub fn from_cells(cells: Vec<Cell>, direction: Direction) -> EngineResult<Self> {
        if cells.is_empty() {
            return Err(EngineError::EmptySnake);
        }

        let mut body_set = HashSet::with_capacity(cells.len());
        for cell in &cells {
            if !body_set.insert(*cell) {
                return Err(EngineError::DuplicateCell(*cell));
            }
        }

        Ok(Self {
            body: cells.into(),
            body_set,
            direction,
            pending_direction: None,
        })
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Cell {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body_set.contains(cell)
    }

    pub fn occupied(&self) -> &HashSet<Cell> {
        &self.body_set
    }

    /// Head first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Queues a turn for the next `advance`. Returns `false` when the turn
    /// would reverse the current heading.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn advance(&mut self, board: &Board, food: Option<Cell>) -> MoveOutcome {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let Some(next_head) = board.next_cell(self.head(), self.direction) else {
            return MoveOutcome::CollidedWall;
        };

        let eats = food == Some(next_head);
        let vacates_tail = !eats && next_head == self.tail();
        if self.body_set.contains(&next_head) && !vacates_tail {
            return MoveOutcome::CollidedSelf;
        }

        if !eats
            && let Some(tail) = self.body.pop_back()
        {
            self.body_set.remove(&tail);
        }
        self.body.push_front(next_head);
        self.body_set.insert(next_head);

        if eats { MoveOutcome::Ate } else { MoveOutcome::Moved }
    }
}
