//! Simulation module
//!
//! Everything in here is in-memory computation over a single level:
//! - No I/O except reading schema documents in `schema`
//! - Actors act in level order, one slice at a time
//! - No rendering or input dependencies

pub mod actor;
pub mod actors;
pub mod collision;
pub mod grid;
pub mod level;
pub mod parser;
pub mod schema;
pub mod tick;
pub mod vector;

pub use actor::{Actor, ActorId, ActorKind, Body};
pub use actors::{Coin, FireRain, Fireball, HorizontalFireball, Player, VerticalFireball};
pub use collision::{Aabb, CellSpan};
pub use grid::{Grid, Obstacle};
pub use level::{Level, LevelStatus, Touched};
pub use parser::{ActorClass, ActorFactory, ActorRegistry, LevelParser, default_symbols};
pub use schema::{Plan, load_schemas, parse_schemas};
pub use tick::{LevelEvent, tick};
pub use vector::Vector;
