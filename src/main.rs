//! Headless harness
//!
//! Usage: `lava-run <levels.json> [settings.json]`
//!
//! Plays every level of a schema document with no input until it finishes or
//! hits the tick cap, and logs how each one ended.

use std::process::ExitCode;

use lava_run::sim::{self, LevelEvent, LevelStatus};
use lava_run::{Settings, SimError};

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(levels_path) = args.next() else {
        eprintln!("usage: lava-run <levels.json> [settings.json]");
        return ExitCode::FAILURE;
    };
    let settings_path = args.next().unwrap_or_else(|| "settings.json".to_string());

    match run(&levels_path, &settings_path) {
        Ok(true) => {
            log::info!("All levels won");
            ExitCode::SUCCESS
        }
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns true when every level was won
fn run(levels_path: &str, settings_path: &str) -> Result<bool, SimError> {
    let settings = Settings::load(settings_path)?;
    let plans = sim::load_schemas(levels_path)?;
    let parser = settings.parser();

    let mut all_won = true;
    for (index, plan) in plans.iter().enumerate() {
        let mut level = parser.parse(plan)?;
        let mut ticks = 0;
        while !level.is_finished() && ticks < settings.max_ticks {
            for event in sim::tick(&mut level, settings.step) {
                match event {
                    LevelEvent::CoinCollected { id } => log::debug!("Level {}: coin {id} collected", index + 1),
                    LevelEvent::StatusChanged(status) => {
                        log::info!("Level {}: {:?} after {} ticks", index + 1, status, ticks + 1)
                    }
                }
            }
            ticks += 1;
        }

        match level.status() {
            Some(LevelStatus::Won) => {}
            Some(LevelStatus::Lost) => all_won = false,
            None => {
                log::warn!("Level {}: undecided after {} ticks", index + 1, ticks);
                all_won = false;
            }
        }
    }
    Ok(all_won)
}
