//! Per-tick reducer
//!
//! Moves every actor, then reports what the player is touching to the level.
//! Player movement itself is driven by input outside this crate.

use serde::{Deserialize, Serialize};

use super::actor::{ActorId, ActorKind};
use super::level::{Level, LevelStatus};
use crate::consts::MAX_STEP;

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelEvent {
    CoinCollected { id: ActorId },
    StatusChanged(LevelStatus),
}

/// Advance the level by `dt` seconds.
///
/// Time is cut into equal slices of at most [`MAX_STEP`] so fast actors cannot
/// skip over thin walls. After each slice the player's surroundings are
/// reported through [`Level::player_touched`]. A negative or non-finite `dt`
/// advances nothing.
pub fn tick(level: &mut Level, dt: f32) -> Vec<LevelEvent> {
    let mut events = Vec::new();

    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Ignoring tick of {dt} seconds");
        return events;
    }

    // Count down the grace period once the level is decided
    if level.status().is_some() {
        level.finish_delay -= dt;
    }

    // Slice count is fixed up front
    let slices = (dt / MAX_STEP).ceil() as u32;
    if slices == 0 {
        return events;
    }
    let step = dt / slices as f32;

    for _ in 0..slices {
        let (grid, actors) = level.split_mut();
        for actor in actors.iter_mut() {
            actor.act(step, grid);
        }

        check_player(level, &mut events);
    }

    events
}

fn check_player(level: &mut Level, events: &mut Vec<LevelEvent>) {
    let Some(player) = level.player() else {
        return;
    };

    // Gather what the player touches before mutating the level
    let obstacle = level.obstacle_at(player.pos(), player.size());
    let touched: Option<(ActorKind, ActorId)> = level.actor_at(player).map(|a| (a.kind(), a.id()));

    let before = level.status();

    if let Some(obstacle) = obstacle {
        level.player_touched(obstacle, None);
    }
    if let Some((kind, id)) = touched {
        let count = level.actors().len();
        level.player_touched(kind, Some(id));
        if kind == ActorKind::Coin && level.actors().len() < count {
            events.push(LevelEvent::CoinCollected { id });
        }
    }

    // Only the first transition is reported
    if before.is_none() {
        if let Some(status) = level.status() {
            events.push(LevelEvent::StatusChanged(status));
        }
    }
}
