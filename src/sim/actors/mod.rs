//! Concrete actors: the player, coins and fireballs

pub mod coin;
pub mod fireball;
pub mod player;

pub use coin::Coin;
pub use fireball::{FireRain, Fireball, HorizontalFireball, VerticalFireball};
pub use player::Player;
