//! Core types and definitions for the SWEEPSCOPE radar display simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vector and time types, enums, configuration, operator commands,
//! snapshot views, events, errors, and the geometry helpers that both
//! the simulation and the terrain crates rely on.
//! It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;
