//! Grid coordinates and per-player field occupancy.
//!
//! Each player owns a `GRID_ROWS` x `grid_size` grid. The two grids are
//! separate namespaces: player 1's (0, 2) and player 2's (0, 2) never
//! conflict. A column index is shared across both grids and forms a lane.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::GRID_ROWS;
use crate::core::entity::EntityId;

/// A cell on one player's grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: u8,
    pub col: u8,
}

impl GridPos {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether the cell lies on a grid with `grid_size` columns.
    #[must_use]
    pub const fn in_bounds(self, grid_size: u8) -> bool {
        self.row < GRID_ROWS && self.col < grid_size
    }

    /// Every cell of a grid, row-major.
    pub fn all(grid_size: u8) -> impl Iterator<Item = GridPos> {
        (0..GRID_ROWS).flat_map(move |row| (0..grid_size).map(move |col| GridPos::new(row, col)))
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Instance id -> cell map for one player's field.
///
/// Holds at most one instance per cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPositions {
    cells: FxHashMap<EntityId, GridPos>,
}

impl FieldPositions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The instance standing on `pos`, if any.
    #[must_use]
    pub fn occupant(&self, pos: GridPos) -> Option<EntityId> {
        self.cells
            .iter()
            .find(|(_, &p)| p == pos)
            .map(|(&id, _)| id)
    }

    #[must_use]
    pub fn is_occupied(&self, pos: GridPos) -> bool {
        self.occupant(pos).is_some()
    }

    /// Record `entity` at `pos`.
    ///
    /// Returns false (and records nothing) when the cell is taken.
    pub fn place(&mut self, entity: EntityId, pos: GridPos) -> bool {
        if self.is_occupied(pos) {
            return false;
        }
        self.cells.insert(entity, pos);
        true
    }

    /// Forget an instance's cell.
    pub fn remove(&mut self, entity: EntityId) -> Option<GridPos> {
        self.cells.remove(&entity)
    }

    #[must_use]
    pub fn get(&self, entity: EntityId) -> Option<GridPos> {
        self.cells.get(&entity).copied()
    }

    /// The lane an instance fights in.
    #[must_use]
    pub fn column_of(&self, entity: EntityId) -> Option<u8> {
        self.get(entity).map(|pos| pos.col)
    }

    #[must_use]
    pub fn contains(&self, entity: EntityId) -> bool {
        self.cells.contains_key(&entity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, GridPos)> + '_ {
        self.cells.iter().map(|(&id, &pos)| (id, pos))
    }

    /// Unoccupied cells of a `grid_size`-column grid, row-major.
    pub fn free_cells(&self, grid_size: u8) -> impl Iterator<Item = GridPos> + '_ {
        GridPos::all(grid_size).filter(move |&pos| !self.is_occupied(pos))
    }
}
