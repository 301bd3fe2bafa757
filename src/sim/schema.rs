//! Level schema documents
//!
//! A schema document is a JSON array of plans, each plan an array of row
//! strings, played in order:
//!
//! ```json
//! [
//!   ["     v", "@   o ", "xxxxxx"],
//!   ["  =  o", "@     ", "xx!!xx"]
//! ]
//! ```

use std::path::Path;

use crate::error::SimError;

/// One level layout: rows of symbols, top to bottom
pub type Plan = Vec<String>;

pub fn parse_schemas(json: &str) -> Result<Vec<Plan>, SimError> {
    let plans: Vec<Plan> = serde_json::from_str(json)?;
    log::debug!("Decoded {} level plans", plans.len());
    Ok(plans)
}

pub fn load_schemas(path: impl AsRef<Path>) -> Result<Vec<Plan>, SimError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    log::info!("Loading levels from {}", path.display());
    parse_schemas(&json)
}
