use super::Position;
use crate::agent::{EntityKind, GridEntity};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Occupants {
    pub prey: usize,
    pub predators: usize,
}

/// Which animals stood where when the map was built. Rebuilt every tick and only
/// consulted to decide whether a newborn may be placed on a cell.
#[derive(Debug, Clone, Default)]
pub struct OccupancyMap {
    cells: HashMap<Position, Occupants>,
}

impl OccupancyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<E: GridEntity>(&mut self, entity: &E) {
        if E::KIND == EntityKind::Food {
            return;
        }
        let entry = self.cells.entry(entity.position()).or_default();
        match E::KIND {
            EntityKind::Prey => entry.prey += 1,
            EntityKind::Predator => entry.predators += 1,
            EntityKind::Food => {}
        }
    }

    pub fn extend<'a, E: GridEntity + 'a>(&mut self, entities: impl IntoIterator<Item = &'a E>) {
        for entity in entities {
            self.insert(entity);
        }
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    pub fn occupants(&self, pos: Position) -> Occupants {
        self.cells.get(&pos).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
