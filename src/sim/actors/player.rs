use crate::consts::{PLAYER_LIFT, PLAYER_SIZE};
use crate::error::SimError;
use crate::sim::actor::{Actor, ActorKind, Body};
use crate::sim::vector::Vector;

/// The player. Movement comes from input, which lives outside the core,
/// so the player never acts on its own.
#[derive(Debug)]
pub struct Player {
    body: Body,
}

impl Player {
    /// `pos` is the spawn cell; the box is lifted so its feet rest on the cell's bottom edge
    pub fn new(pos: Vector) -> Result<Self, SimError> {
        let body = Body::new(
            pos.plus(Vector::new(0.0, -PLAYER_LIFT)),
            Vector::from(PLAYER_SIZE),
            Vector::ZERO,
        )?;
        Ok(Self { body })
    }
}

impl Actor for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Player
    }
}
