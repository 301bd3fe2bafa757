//! Fireballs: fixed-velocity hazards that react when the grid blocks them

use crate::consts::{
    FIRE_RAIN_SPEED, FIREBALL_SIZE, HORIZONTAL_FIREBALL_SPEED, VERTICAL_FIREBALL_SPEED,
};
use crate::error::SimError;
use crate::sim::actor::{Actor, ActorKind, Body};
use crate::sim::grid::Grid;
use crate::sim::vector::Vector;

/// Shared fireball movement. On its own it bounces: a blocked move reverses its velocity.
#[derive(Debug)]
pub struct Fireball {
    body: Body,
}

impl Fireball {
    pub fn new(pos: Vector, speed: Vector) -> Result<Self, SimError> {
        Ok(Self {
            body: Body::new(pos, Vector::from(FIREBALL_SIZE), speed)?,
        })
    }

    /// Where the fireball would be after `time` seconds
    pub fn next_position(&self, time: f32) -> Vector {
        self.body.pos.plus(self.body.speed.times(time))
    }

    /// Reverse direction
    pub fn bounce(&mut self) {
        self.body.speed = self.body.speed.times(-1.0);
    }

    /// Move unless the grid blocks the destination. Returns true when blocked;
    /// the position is left unchanged in that case.
    fn try_advance(&mut self, time: f32, grid: &Grid) -> bool {
        let next = self.next_position(time);
        if grid.obstacle_at(next, self.body.size).is_some() {
            return true;
        }
        self.body.pos = next;
        false
    }
}

impl Actor for Fireball {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Fireball
    }

    fn act(&mut self, time: f32, grid: &Grid) {
        if self.try_advance(time, grid) {
            self.bounce();
        }
    }
}

/// Patrols left and right
#[derive(Debug)]
pub struct HorizontalFireball(Fireball);

impl HorizontalFireball {
    pub fn new(pos: Vector) -> Result<Self, SimError> {
        Fireball::new(pos, Vector::from(HORIZONTAL_FIREBALL_SPEED)).map(Self)
    }
}

impl Actor for HorizontalFireball {
    fn body(&self) -> &Body {
        self.0.body()
    }

    fn body_mut(&mut self) -> &mut Body {
        self.0.body_mut()
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Fireball
    }

    fn act(&mut self, time: f32, grid: &Grid) {
        self.0.act(time, grid);
    }
}

/// Patrols up and down
#[derive(Debug)]
pub struct VerticalFireball(Fireball);

impl VerticalFireball {
    pub fn new(pos: Vector) -> Result<Self, SimError> {
        Fireball::new(pos, Vector::from(VERTICAL_FIREBALL_SPEED)).map(Self)
    }
}

impl Actor for VerticalFireball {
    fn body(&self) -> &Body {
        self.0.body()
    }

    fn body_mut(&mut self) -> &mut Body {
        self.0.body_mut()
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Fireball
    }

    fn act(&mut self, time: f32, grid: &Grid) {
        self.0.act(time, grid);
    }
}

/// Falls from its spawn cell; when it lands on something it starts over from the spawn cell.
#[derive(Debug)]
pub struct FireRain {
    fireball: Fireball,
    spawn: Vector,
}

impl FireRain {
    pub fn new(pos: Vector) -> Result<Self, SimError> {
        Ok(Self {
            fireball: Fireball::new(pos, Vector::from(FIRE_RAIN_SPEED))?,
            spawn: pos,
        })
    }

    pub fn spawn(&self) -> Vector {
        self.spawn
    }
}

impl Actor for FireRain {
    fn body(&self) -> &Body {
        self.fireball.body()
    }

    fn body_mut(&mut self) -> &mut Body {
        self.fireball.body_mut()
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Fireball
    }

    fn act(&mut self, time: f32, grid: &Grid) {
        if self.fireball.try_advance(time, grid) {
            self.fireball.body.pos = self.spawn;
        }
    }
}
