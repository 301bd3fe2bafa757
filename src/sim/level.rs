//! Level state: terrain, live actors and the win/lose status
//!
//! Status only ever moves from unset to `Won` or `Lost`, and only through
//! [`Level::player_touched`]. A level with a status still plays out until
//! `finish_delay` drops below one.

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorKind};
use super::grid::{Grid, Obstacle};
use super::vector::Vector;
use crate::consts::FINISH_DELAY;

/// Outcome of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelStatus {
    Won,
    Lost,
}

/// Something the player ran into: either terrain or another actor's kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touched {
    Obstacle(Obstacle),
    Actor(ActorKind),
}

impl From<Obstacle> for Touched {
    fn from(obstacle: Obstacle) -> Self {
        Touched::Obstacle(obstacle)
    }
}

impl From<ActorKind> for Touched {
    fn from(kind: ActorKind) -> Self {
        Touched::Actor(kind)
    }
}

impl Touched {
    /// Lava and fireballs lose the level
    pub fn is_deadly(&self) -> bool {
        matches!(
            self,
            Touched::Obstacle(Obstacle::Lava) | Touched::Actor(ActorKind::Fireball)
        )
    }
}

#[derive(Debug)]
pub struct Level {
    grid: Grid,
    actors: Vec<Box<dyn Actor>>,
    status: Option<LevelStatus>,
    /// Seconds of grace left once a status is set; the level finishes below 1
    pub finish_delay: f32,
    player: Option<ActorId>,
}

impl Default for Level {
    fn default() -> Self {
        Self::new(Grid::default(), Vec::new())
    }
}

impl Level {
    pub fn new(grid: Grid, actors: Vec<Box<dyn Actor>>) -> Self {
        let player = actors
            .iter()
            .find(|a| a.kind() == ActorKind::Player)
            .map(|a| a.id());
        log::debug!(
            "Level {}x{} with {} actors (player: {:?})",
            grid.width(),
            grid.height(),
            actors.len(),
            player
        );
        Self {
            grid,
            actors,
            status: None,
            finish_delay: FINISH_DELAY,
            player,
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn actors(&self) -> &[Box<dyn Actor>] {
        &self.actors
    }

    pub fn status(&self) -> Option<LevelStatus> {
        self.status
    }

    /// The first player-kind actor the level was built with, while it is still in the level
    pub fn player(&self) -> Option<&dyn Actor> {
        let id = self.player?;
        self.actor(id)
    }

    pub fn actor(&self, id: ActorId) -> Option<&dyn Actor> {
        self.actors.iter().find(|a| a.id() == id).map(|a| a.as_ref())
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_some() && self.finish_delay < 1.0
    }

    /// First actor, in level order, whose box intersects `query`
    pub fn actor_at(&self, query: &dyn Actor) -> Option<&dyn Actor> {
        self.actors
            .iter()
            .find(|a| a.is_intersect(query))
            .map(|a| a.as_ref())
    }

    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        self.grid.obstacle_at(pos, size)
    }

    /// Remove the actor with this identity. Returns it, or `None` if it was not in the level.
    pub fn remove_actor(&mut self, id: ActorId) -> Option<Box<dyn Actor>> {
        let index = self.actors.iter().position(|a| a.id() == id)?;
        Some(self.actors.remove(index))
    }

    pub fn no_more_actors(&self, kind: ActorKind) -> bool {
        !self.actors.iter().any(|a| a.kind() == kind)
    }

    /// React to the player touching something.
    ///
    /// Lava or a fireball loses the level. A coin is removed (when `target`
    /// names it) and collecting the last one wins the level. Neither branch
    /// overrides a status that is already set.
    pub fn player_touched(&mut self, touched: impl Into<Touched>, target: Option<ActorId>) {
        let touched = touched.into();

        if self.status.is_none() && touched.is_deadly() {
            self.set_status(LevelStatus::Lost);
        }

        // The coin goes even when the level is already decided
        if touched == Touched::Actor(ActorKind::Coin) {
            if let Some(id) = target {
                self.remove_actor(id);
            }
            if self.status.is_none() && self.no_more_actors(ActorKind::Coin) {
                self.set_status(LevelStatus::Won);
            }
        }
    }

    fn set_status(&mut self, status: LevelStatus) {
        log::info!("Level {:?}", status);
        self.status = Some(status);
    }

    /// Terrain and actors borrowed apart, so actors can move while reading the grid
    pub(crate) fn split_mut(&mut self) -> (&Grid, &mut [Box<dyn Actor>]) {
        (&self.grid, &mut self.actors)
    }
}
