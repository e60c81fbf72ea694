//! Core types and definitions for SILICON DEFENDER.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity components, the defect catalog, commands, events, tunable
//! configuration, frontend snapshots, and constants.
//! It has no dependency on a renderer or any runtime framework.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
