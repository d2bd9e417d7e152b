pub mod metabolism;
pub mod predator;
pub mod prey;

use crate::world::food::Food;
use crate::world::{Direction, Grid, Position};
use predator::Predator;
use prey::Prey;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Prey,
    Predator,
    Food,
}

/// Anything that sits on a grid cell.
pub trait GridEntity {
    const KIND: EntityKind;

    fn position(&self) -> Position;
}

/// Entities that can walk the torus.
pub trait Mobile: GridEntity {
    fn relocate(&mut self, to: Position);

    /// One step in a uniformly chosen orthogonal direction.
    fn wander<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        let to = grid.step(self.position(), Direction::random(rng));
        self.relocate(to);
    }
}

impl GridEntity for Prey {
    const KIND: EntityKind = EntityKind::Prey;

    fn position(&self) -> Position {
        self.position
    }
}

impl Mobile for Prey {
    fn relocate(&mut self, to: Position) {
        self.position = to;
    }
}

impl GridEntity for Predator {
    const KIND: EntityKind = EntityKind::Predator;

    fn position(&self) -> Position {
        self.position
    }
}

impl Mobile for Predator {
    fn relocate(&mut self, to: Position) {
        self.position = to;
    }
}

impl GridEntity for Food {
    const KIND: EntityKind = EntityKind::Food;

    fn position(&self) -> Position {
        self.position
    }
}

/// Borrowed view of any entity, tagged by kind.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Prey(&'a Prey),
    Predator(&'a Predator),
    Food(&'a Food),
}

impl EntityRef<'_> {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Prey(_) => EntityKind::Prey,
            EntityRef::Predator(_) => EntityKind::Predator,
            EntityRef::Food(_) => EntityKind::Food,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            EntityRef::Prey(p) => p.position(),
            EntityRef::Predator(p) => p.position(),
            EntityRef::Food(f) => f.position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_wander_moves_one_cell() {
        let grid = Grid::new(10);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut predator = Predator::new(Position::new(5, 5), 10);

        for _ in 0..50 {
            let before = predator.position();
            predator.wander(&grid, &mut rng);
            let after = predator.position();
            let dx = before.x.abs_diff(after.x);
            let dy = before.y.abs_diff(after.y);
            // Either a unit step or a wrap across the seam.
            assert!(dx + dy == 1 || dx == 9 || dy == 9);
        }
    }

    #[test]
    fn test_entity_ref_dispatch() {
        let prey = Prey::without_energy(Position::new(1, 2));
        let food = Food::new(Position::new(3, 4), 5);

        let refs = [EntityRef::Prey(&prey), EntityRef::Food(&food)];
        assert_eq!(refs[0].kind(), EntityKind::Prey);
        assert_eq!(refs[0].position(), Position::new(1, 2));
        assert_eq!(refs[1].kind(), EntityKind::Food);
        assert_eq!(refs[1].position(), Position::new(3, 4));
    }
}
