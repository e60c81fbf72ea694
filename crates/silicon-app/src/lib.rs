//! SILICON DEFENDER headless host.
//!
//! This crate runs the simulation engine on its own thread at a fixed frame
//! rate and exposes it through a small control surface: start, send
//! commands, poll the latest snapshot, stop. A renderer or UI plugs in as a
//! `SnapshotSink`.

pub mod autopilot;
pub mod control;
pub mod game_loop;
pub mod state;

pub use silicon_core as core;
