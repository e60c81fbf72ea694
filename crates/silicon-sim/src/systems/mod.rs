//! Systems that make up the simulation step.
//!
//! Systems are plain functions over `&mut WorldState`. They do not own
//! state; everything they touch lives in the world or is passed in.

pub mod cleanup;
pub mod collision;
pub mod contact;
pub mod movement;
pub mod population;
pub mod snapshot;
