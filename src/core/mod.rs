pub mod config;
pub mod error;
pub mod types;

pub use config::{BattleSettings, Scenario, SquadParams};
pub use error::{Result, SimError};
pub use types::{DamageCategory, Winner};
