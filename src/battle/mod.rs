//! Battle simulation: engine, log, reports and series

pub mod engine;
pub mod events;
pub mod output;
pub mod series;

pub use engine::{nearest_defender, resolve_attack, run_scenario, simulate_battle};
pub use events::{AttackOutcome, BattleEvent, BattleLog, LogEntry};
pub use output::{BattleReport, BattleStats};
pub use series::{run_series, SeriesSummary};
