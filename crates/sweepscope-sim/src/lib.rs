//! Simulation engine for SWEEPSCOPE.
//!
//! Owns the hecs world of radar contacts, the zone store and the sweep beam,
//! advances them on caller-supplied clock ticks, and produces RadarSnapshots
//! for the display.

pub mod engine;
pub mod systems;
pub mod trajectory;
pub mod world_setup;

pub use engine::RadarEngine;
pub use sweepscope_core as core;
pub use systems::spawner::SpawnOutcome;
pub use world_setup::ContactSpec;
