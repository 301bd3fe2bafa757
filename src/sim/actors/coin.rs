use std::f32::consts::TAU;

use rand::Rng;

use crate::consts::{COIN_OFFSET, COIN_SIZE, COIN_SPRING_DIST, COIN_SPRING_SPEED};
use crate::error::SimError;
use crate::sim::actor::{Actor, ActorKind, Body};
use crate::sim::grid::Grid;
use crate::sim::vector::Vector;

/// A collectible that hovers in place on a sine spring.
///
/// The box sits at `start_location + COIN_OFFSET` (centred in its cell) and
/// bobs vertically around that point. Coins ignore terrain.
#[derive(Debug)]
pub struct Coin {
    body: Body,
    start_location: Vector,
    spring: f32,
    spring_speed: f32,
    spring_dist: f32,
}

impl Coin {
    /// Coin with a random spring phase from the thread RNG
    pub fn new(pos: Vector) -> Result<Self, SimError> {
        Self::with_rng(pos, &mut rand::rng())
    }

    /// Coin with a spring phase drawn from `rng`, in `[0, 2π)`
    pub fn with_rng<R: Rng>(pos: Vector, rng: &mut R) -> Result<Self, SimError> {
        Self::with_phase(pos, rng.random_range(0.0..TAU))
    }

    pub fn with_phase(pos: Vector, spring: f32) -> Result<Self, SimError> {
        let body = Body::new(
            pos.plus(Vector::from(COIN_OFFSET)),
            Vector::from(COIN_SIZE),
            Vector::ZERO,
        )?;
        Ok(Self {
            body,
            start_location: pos,
            spring,
            spring_speed: COIN_SPRING_SPEED,
            spring_dist: COIN_SPRING_DIST,
        })
    }

    /// Spawn cell position, before the in-cell offset
    pub fn start_location(&self) -> Vector {
        self.start_location
    }

    /// Current spring phase (radians)
    pub fn spring(&self) -> f32 {
        self.spring
    }

    /// Resting point the coin bobs around
    pub fn center(&self) -> Vector {
        self.start_location.plus(Vector::from(COIN_OFFSET))
    }

    pub fn update_spring(&mut self, time: f32) {
        self.spring += self.spring_speed * time;
    }

    pub fn spring_vector(&self) -> Vector {
        Vector::new(0.0, self.spring.sin() * self.spring_dist)
    }

    /// Advance the spring by `time` and return where the coin now hovers
    pub fn next_position(&mut self, time: f32) -> Vector {
        self.update_spring(time);
        self.center().plus(self.spring_vector())
    }
}

impl Actor for Coin {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Coin
    }

    fn act(&mut self, time: f32, _grid: &Grid) {
        self.body.pos = self.next_position(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::Obstacle;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn approx(a: Vector, b: Vector) -> bool {
        (a.x() - b.x()).abs() < 1e-5 && (a.y() - b.y()).abs() < 1e-5
    }

    #[test]
    fn test_spawn_box() {
        let coin = Coin::with_phase(Vector::new(2.0, 3.0), 0.0).unwrap();
        assert_eq!(coin.kind(), ActorKind::Coin);
        assert_eq!(coin.start_location(), Vector::new(2.0, 3.0));
        assert!(approx(coin.pos(), Vector::new(2.2, 3.1)));
        assert!(approx(coin.size(), Vector::new(0.6, 0.6)));
    }

    #[test]
    fn test_phase_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let coin = Coin::with_rng(Vector::ZERO, &mut rng).unwrap();
            assert!((0.0..TAU).contains(&coin.spring()));
        }
        let coin = Coin::new(Vector::ZERO).unwrap();
        assert!((0.0..TAU).contains(&coin.spring()));
    }

    #[test]
    fn test_seeded_phases_repeat() {
        let a = Coin::with_rng(Vector::ZERO, &mut Pcg32::seed_from_u64(42)).unwrap();
        let b = Coin::with_rng(Vector::ZERO, &mut Pcg32::seed_from_u64(42)).unwrap();
        assert_eq!(a.spring(), b.spring());
    }

    #[test]
    fn test_spring_advances() {
        let mut coin = Coin::with_phase(Vector::ZERO, 1.0).unwrap();
        coin.update_spring(0.5);
        assert!((coin.spring() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_bobs_around_center() {
        let mut coin = Coin::with_phase(Vector::new(1.0, 1.0), 0.0).unwrap();
        let quarter = std::f32::consts::FRAC_PI_2 / COIN_SPRING_SPEED;
        let grid = Grid::default();

        coin.act(quarter, &grid);
        assert!(approx(coin.pos(), Vector::new(1.2, 1.1 + COIN_SPRING_DIST)));

        coin.act(2.0 * quarter, &grid);
        assert!(approx(coin.pos(), Vector::new(1.2, 1.1 - COIN_SPRING_DIST)));
        assert_eq!(coin.start_location(), Vector::new(1.0, 1.0));
    }

    #[test]
    fn test_ignores_terrain() {
        let lava = Grid::new(vec![vec![Some(Obstacle::Lava)]]);
        let mut coin = Coin::with_phase(Vector::ZERO, 0.0).unwrap();
        coin.act(0.1, &lava);
        assert!((coin.pos().y() - (0.1 + (0.8f32).sin() * COIN_SPRING_DIST)).abs() < 1e-5);
    }
}
