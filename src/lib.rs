//! Lava Run - a tile-grid platformer simulation core
//!
//! Core modules:
//! - `sim`: Actors, AABB collisions, the obstacle grid and level state
//! - `settings`: Symbol dictionary, seeding and harness tuning
//! - `error`: Crate error type

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{ErrorKind, SimError};
pub use settings::Settings;

/// Simulation constants
pub mod consts {
    /// Default harness timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Longest slice of time actors are advanced by in one go
    pub const MAX_STEP: f32 = 0.05;
    /// Grace period between a level's status being set and it counting as finished
    pub const FINISH_DELAY: f32 = 1.0;

    /// Player box, and how far the spawn point is lifted
    pub const PLAYER_SIZE: (f32, f32) = (0.8, 1.5);
    pub const PLAYER_LIFT: f32 = 0.5;

    /// Coin box and its offset inside the spawn cell
    pub const COIN_SIZE: (f32, f32) = (0.6, 0.6);
    pub const COIN_OFFSET: (f32, f32) = (0.2, 0.1);
    /// Spring phase advance per second (radians)
    pub const COIN_SPRING_SPEED: f32 = 8.0;
    /// Vertical wobble amplitude
    pub const COIN_SPRING_DIST: f32 = 0.07;

    /// Fireball box and per-variant velocities
    pub const FIREBALL_SIZE: (f32, f32) = (1.0, 1.0);
    pub const HORIZONTAL_FIREBALL_SPEED: (f32, f32) = (2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: (f32, f32) = (0.0, 2.0);
    pub const FIRE_RAIN_SPEED: (f32, f32) = (0.0, 3.0);
}
