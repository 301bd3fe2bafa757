//! Plan parsing: text rows to a grid plus actors
//!
//! Each character of a plan is both a potential obstacle (`x`, `!`) and a
//! potential actor (looked up in the [`ActorRegistry`]). Cell `(x, y)` is
//! column `x` of row `y`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::actors::{Coin, FireRain, HorizontalFireball, Player, VerticalFireball};
use super::grid::{Grid, Obstacle};
use super::level::Level;
use super::vector::Vector;
use crate::error::SimError;

/// Builds an actor standing in the given cell
pub type ActorFactory = Box<dyn Fn(Vector) -> Result<Box<dyn Actor>, SimError>>;

/// The actor types a symbol can spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorClass {
    Player,
    Coin,
    HorizontalFireball,
    VerticalFireball,
    FireRain,
}

impl ActorClass {
    pub const ALL: [ActorClass; 5] = [
        ActorClass::Player,
        ActorClass::Coin,
        ActorClass::HorizontalFireball,
        ActorClass::VerticalFireball,
        ActorClass::FireRain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActorClass::Player => "player",
            ActorClass::Coin => "coin",
            ActorClass::HorizontalFireball => "horizontal_fireball",
            ActorClass::VerticalFireball => "vertical_fireball",
            ActorClass::FireRain => "fire_rain",
        }
    }

    /// Construct one actor of this class. Coins draw their phase from the thread RNG.
    pub fn spawn(&self, pos: Vector) -> Result<Box<dyn Actor>, SimError> {
        let actor: Box<dyn Actor> = match self {
            ActorClass::Player => Box::new(Player::new(pos)?),
            ActorClass::Coin => Box::new(Coin::new(pos)?),
            ActorClass::HorizontalFireball => Box::new(HorizontalFireball::new(pos)?),
            ActorClass::VerticalFireball => Box::new(VerticalFireball::new(pos)?),
            ActorClass::FireRain => Box::new(FireRain::new(pos)?),
        };
        Ok(actor)
    }
}

impl fmt::Display for ActorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActorClass {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActorClass::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SimError::UnknownActorClass(s.to_string()))
    }
}

/// The classic symbol dictionary
pub fn default_symbols() -> BTreeMap<char, ActorClass> {
    BTreeMap::from([
        ('@', ActorClass::Player),
        ('v', ActorClass::FireRain),
        ('=', ActorClass::HorizontalFireball),
        ('|', ActorClass::VerticalFireball),
        ('o', ActorClass::Coin),
    ])
}

/// Symbol to actor factory dictionary
#[derive(Default)]
pub struct ActorRegistry {
    factories: BTreeMap<char, ActorFactory>,
}

impl fmt::Debug for ActorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic dictionary with thread-random coin phases
    pub fn standard() -> Self {
        Self::from_classes(&default_symbols(), None)
    }

    /// The classic dictionary with coin phases drawn from a seeded RNG
    pub fn seeded(seed: u64) -> Self {
        Self::from_classes(&default_symbols(), Some(seed))
    }

    /// Registry for a symbol-to-class map. With a seed, every coin built by
    /// this registry shares one seeded RNG, so parsing the same plans in the
    /// same order repeats the same phases.
    pub fn from_classes(classes: &BTreeMap<char, ActorClass>, seed: Option<u64>) -> Self {
        let rng = seed.map(|s| Rc::new(RefCell::new(Pcg32::seed_from_u64(s))));
        let mut registry = Self::new();
        for (&symbol, &class) in classes {
            match (&rng, class) {
                (Some(rng), ActorClass::Coin) => {
                    let rng = rng.clone();
                    registry.register(symbol, move |pos| {
                        let coin = Coin::with_rng(pos, &mut *rng.borrow_mut())?;
                        Ok(Box::new(coin) as Box<dyn Actor>)
                    });
                }
                _ => registry.register_class(symbol, class),
            }
        }
        registry
    }

    /// Map `symbol` to a factory, replacing any previous entry
    pub fn register<F>(&mut self, symbol: char, factory: F)
    where
        F: Fn(Vector) -> Result<Box<dyn Actor>, SimError> + 'static,
    {
        self.factories.insert(symbol, Box::new(factory));
    }

    pub fn register_class(&mut self, symbol: char, class: ActorClass) {
        self.register(symbol, move |pos| class.spawn(pos));
    }

    pub fn get(&self, symbol: char) -> Option<&ActorFactory> {
        self.factories.get(&symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.factories.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// Turns text plans into levels
#[derive(Debug)]
pub struct LevelParser {
    registry: ActorRegistry,
}

impl Default for LevelParser {
    fn default() -> Self {
        Self::new(ActorRegistry::standard())
    }
}

impl LevelParser {
    pub fn new(registry: ActorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ActorRegistry {
        &self.registry
    }

    pub fn actor_from_symbol(&self, symbol: char) -> Option<&ActorFactory> {
        self.registry.get(symbol)
    }

    pub fn obstacle_from_symbol(&self, symbol: char) -> Option<Obstacle> {
        Obstacle::from_symbol(symbol)
    }

    /// One grid row per plan row, one cell per character
    pub fn create_grid<S: AsRef<str>>(&self, plan: &[S]) -> Grid {
        let rows = plan
            .iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .map(|c| self.obstacle_from_symbol(c))
                    .collect()
            })
            .collect();
        Grid::new(rows)
    }

    /// Actors for every registered symbol, top to bottom, left to right.
    /// The first factory failure aborts the whole plan.
    pub fn create_actors<S: AsRef<str>>(&self, plan: &[S]) -> Result<Vec<Box<dyn Actor>>, SimError> {
        let mut actors = Vec::new();
        for (y, row) in plan.iter().enumerate() {
            for (x, symbol) in row.as_ref().chars().enumerate() {
                let Some(factory) = self.actor_from_symbol(symbol) else {
                    continue;
                };
                let actor = factory(Vector::new(x as f32, y as f32)).map_err(|e| {
                    SimError::Factory {
                        symbol,
                        x,
                        y,
                        source: Box::new(e),
                    }
                })?;
                actors.push(actor);
            }
        }
        Ok(actors)
    }

    pub fn parse<S: AsRef<str>>(&self, plan: &[S]) -> Result<Level, SimError> {
        let grid = self.create_grid(plan);
        let actors = self.create_actors(plan)?;
        log::debug!(
            "Parsed {}x{} plan into {} actors",
            grid.width(),
            grid.height(),
            actors.len()
        );
        Ok(Level::new(grid, actors))
    }

    /// Parse a list of plans in order
    pub fn parse_all<P: AsRef<[S]>, S: AsRef<str>>(&self, plans: &[P]) -> Result<Vec<Level>, SimError> {
        plans.iter().map(|plan| self.parse(plan.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::sim::actor::{ActorKind, Body};

    #[test]
    fn test_obstacle_symbols() {
        let parser = LevelParser::default();
        assert_eq!(parser.obstacle_from_symbol('x'), Some(Obstacle::Wall));
        assert_eq!(parser.obstacle_from_symbol('!'), Some(Obstacle::Lava));
        assert_eq!(parser.obstacle_from_symbol('o'), None);
    }

    #[test]
    fn test_actor_symbols() {
        let parser = LevelParser::default();
        assert!(parser.actor_from_symbol('@').is_some());
        assert!(parser.actor_from_symbol('o').is_some());
        assert!(parser.actor_from_symbol('x').is_none());
        assert!(parser.actor_from_symbol(' ').is_none());
    }

    #[test]
    fn test_empty_plan() {
        let parser = LevelParser::default();
        let empty: [&str; 0] = [];
        assert_eq!(parser.create_grid(&empty), Grid::default());
        assert!(parser.create_actors(&empty).unwrap().is_empty());
        let level = parser.parse(&empty).unwrap();
        assert_eq!(level.width(), 0);
        assert_eq!(level.height(), 0);
    }

    #[test]
    fn test_create_grid() {
        let parser = LevelParser::default();
        let grid = parser.create_grid(&["x o", "!!"]);
        assert_eq!(
            grid.rows(),
            &[
                vec![Some(Obstacle::Wall), None, None],
                vec![Some(Obstacle::Lava), Some(Obstacle::Lava)],
            ]
        );
        assert_eq!(grid.width(), 3);
    }

    #[test]
    fn test_parse_small_plan() {
        let parser = LevelParser::default();
        let level = parser.parse(&["@ ", "x!"]).unwrap();

        assert_eq!(level.width(), 2);
        assert_eq!(level.height(), 2);
        assert_eq!(level.grid().rows()[0], vec![None, None]);
        assert_eq!(
            level.grid().rows()[1],
            vec![Some(Obstacle::Wall), Some(Obstacle::Lava)]
        );

        assert_eq!(level.actors().len(), 1);
        let player = level.player().unwrap();
        assert_eq!(player.kind(), ActorKind::Player);
        assert_eq!(player.pos(), Vector::new(0.0, -0.5));
    }

    #[test]
    fn test_actor_order_is_row_major() {
        let parser = LevelParser::default();
        let actors = parser.create_actors(&[" =o", "@  ", "  v"]).unwrap();
        let kinds: Vec<_> = actors.iter().map(|a| a.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ActorKind::Fireball,
                ActorKind::Coin,
                ActorKind::Player,
                ActorKind::Fireball
            ]
        );
        assert_eq!(actors[0].pos(), Vector::new(1.0, 0.0));
        assert_eq!(actors[3].pos(), Vector::new(2.0, 2.0));
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = ActorRegistry::new();
        registry.register('#', |pos| Ok(Box::new(Body::at(pos)?) as Box<dyn Actor>));
        let parser = LevelParser::new(registry);
        let actors = parser.create_actors(&["@#"]).unwrap();
        assert_eq!(actors.len(), 1);
        assert_eq!(actors[0].kind(), ActorKind::Actor);
        assert_eq!(actors[0].pos(), Vector::new(1.0, 0.0));
    }

    #[test]
    fn test_factory_failure_propagates() {
        let mut registry = ActorRegistry::new();
        registry.register('?', |_| Err(SimError::UnknownActorClass("ghost".into())));
        let parser = LevelParser::new(registry);

        let err = parser.parse(&["  ", " ?"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(matches!(err, SimError::Factory { symbol: '?', x: 1, y: 1, .. }));
    }

    #[test]
    fn test_class_names() {
        assert_eq!("fire_rain".parse::<ActorClass>().unwrap(), ActorClass::FireRain);
        assert_eq!("player".parse::<ActorClass>().unwrap(), ActorClass::Player);
        let err = "dragon".parse::<ActorClass>().unwrap_err();
        assert!(matches!(err, SimError::UnknownActorClass(ref name) if name == "dragon"));
        for class in ActorClass::ALL {
            assert_eq!(class.as_str().parse::<ActorClass>().unwrap(), class);
        }
    }

    #[test]
    fn test_spawned_kinds() {
        let p = Vector::ZERO;
        assert_eq!(ActorClass::Player.spawn(p).unwrap().kind(), ActorKind::Player);
        assert_eq!(ActorClass::Coin.spawn(p).unwrap().kind(), ActorKind::Coin);
        assert_eq!(ActorClass::FireRain.spawn(p).unwrap().kind(), ActorKind::Fireball);
    }

    #[test]
    fn test_seeded_registry_repeats() {
        let plan = ["o o o"];
        let mut a = LevelParser::new(ActorRegistry::seeded(9)).parse(&plan).unwrap();
        let mut b = LevelParser::new(ActorRegistry::seeded(9)).parse(&plan).unwrap();
        crate::sim::tick(&mut a, 0.1);
        crate::sim::tick(&mut b, 0.1);
        let ys = |l: &Level| l.actors().iter().map(|c| c.pos().y()).collect::<Vec<_>>();
        assert_eq!(ys(&a), ys(&b));
    }

    #[test]
    fn test_parse_all() {
        let parser = LevelParser::default();
        let plans = vec![vec!["@o".to_string()], vec!["x".to_string(), "x".to_string()]];
        let levels = parser.parse_all(&plans).unwrap();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[1].height(), 2);
    }
}
