use crate::agent::EntityRef;
use crate::world::{Grid, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    Food,
    EatenFood,
    Prey,
    Predator,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Water => '.',
            Cell::Food => '*',
            Cell::EatenFood => ',',
            Cell::Prey => 'o',
            Cell::Predator => 'X',
        }
    }
}

/// One cell per grid square; later entities overwrite earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    size: usize,
    cells: Vec<Cell>,
}

impl Raster {
    pub fn paint<'a>(grid: &Grid, entities: impl Iterator<Item = EntityRef<'a>>) -> Self {
        let size = grid.size();
        let mut cells = vec![Cell::Water; size * size];

        for entity in entities {
            let pos = entity.position();
            debug_assert!(grid.contains(pos));
            let cell = match entity {
                EntityRef::Food(food) if food.is_available() => Cell::Food,
                EntityRef::Food(_) => Cell::EatenFood,
                EntityRef::Prey(_) => Cell::Prey,
                EntityRef::Predator(_) => Cell::Predator,
            };
            if let Some(slot) = cells.get_mut(pos.y * size + pos.x) {
                *slot = cell;
            }
        }

        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if pos.x >= self.size || pos.y >= self.size {
            return None;
        }
        self.cells.get(pos.y * self.size + pos.x).copied()
    }

    pub fn to_ascii(&self) -> String {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.glyph()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
