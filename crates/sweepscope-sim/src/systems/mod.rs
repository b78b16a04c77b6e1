//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! Apart from the small state structs the engine hands them, they own nothing.

pub mod cleanup;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod sweep;
