//! Squad Battle - seeded turn-based combat between two squads

pub mod battle;
pub mod combat;
pub mod core;
