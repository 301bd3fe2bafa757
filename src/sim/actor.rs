//! The actor capability shared by everything placed in a level

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::grid::Grid;
use super::vector::Vector;
use crate::error::SimError;

static NEXT_ACTOR_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique actor identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl ActorId {
    fn next() -> Self {
        Self(NEXT_ACTOR_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Type tag reported by an actor. All fireball variants report `Fireball`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Actor,
    Player,
    Coin,
    Fireball,
}

impl ActorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::Actor => "actor",
            ActorKind::Player => "player",
            ActorKind::Coin => "coin",
            ActorKind::Fireball => "fireball",
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position, size and velocity of an actor, plus its identity.
///
/// The vectors are finite from construction on. Code outside the crate goes
/// through the checked setters.
#[derive(Debug, PartialEq)]
pub struct Body {
    id: ActorId,
    pub(crate) pos: Vector,
    pub(crate) size: Vector,
    pub(crate) speed: Vector,
}

fn check_finite(field: &'static str, v: Vector) -> Result<Vector, SimError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SimError::InvalidVector {
            field,
            x: v.x(),
            y: v.y(),
        })
    }
}

impl Body {
    /// Build a body, rejecting non-finite vectors
    pub fn new(pos: Vector, size: Vector, speed: Vector) -> Result<Self, SimError> {
        Ok(Self {
            id: ActorId::next(),
            pos: check_finite("pos", pos)?,
            size: check_finite("size", size)?,
            speed: check_finite("speed", speed)?,
        })
    }

    /// Unit body at the given position, at rest
    pub fn at(pos: Vector) -> Result<Self, SimError> {
        Self::new(pos, Vector::ONE, Vector::ZERO)
    }

    #[inline]
    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn set_pos(&mut self, pos: Vector) -> Result<(), SimError> {
        self.pos = check_finite("pos", pos)?;
        Ok(())
    }

    pub fn set_size(&mut self, size: Vector) -> Result<(), SimError> {
        self.size = check_finite("size", size)?;
        Ok(())
    }

    pub fn set_speed(&mut self, speed: Vector) -> Result<(), SimError> {
        self.speed = check_finite("speed", speed)?;
        Ok(())
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

impl Default for Body {
    fn default() -> Self {
        Self {
            id: ActorId::next(),
            pos: Vector::ZERO,
            size: Vector::ONE,
            speed: Vector::ZERO,
        }
    }
}

/// Anything with a bounding box that lives in a level.
///
/// Implementors supply the body accessors and, when they move, `act`.
/// Bounds and intersection come for free.
pub trait Actor: fmt::Debug {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    fn kind(&self) -> ActorKind {
        ActorKind::Actor
    }

    /// Advance by `time` seconds. `grid` is the terrain of the level the actor lives in.
    fn act(&mut self, _time: f32, _grid: &Grid) {}

    fn id(&self) -> ActorId {
        self.body().id()
    }

    fn pos(&self) -> Vector {
        self.body().pos
    }

    fn size(&self) -> Vector {
        self.body().size
    }

    fn speed(&self) -> Vector {
        self.body().speed
    }

    fn left(&self) -> f32 {
        self.body().aabb().left
    }

    fn right(&self) -> f32 {
        self.body().aabb().right
    }

    fn top(&self) -> f32 {
        self.body().aabb().top
    }

    fn bottom(&self) -> f32 {
        self.body().aabb().bottom
    }

    /// True when the two boxes overlap. An actor never intersects itself.
    fn is_intersect(&self, other: &dyn Actor) -> bool {
        if other.id() == self.id() {
            return false;
        }
        self.body().aabb().overlaps(&other.body().aabb())
    }
}

/// A bare body is the base actor: it has a box and never moves on its own.
impl Actor for Body {
    fn body(&self) -> &Body {
        self
    }

    fn body_mut(&mut self) -> &mut Body {
        self
    }
}
