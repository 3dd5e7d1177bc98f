//! The rules of play.
//!
//! Each submodule adds an `impl Game` block for one area of the rules:
//!
//! - [`movement`]: move budgets, stepping, waiting and ending turns
//! - [`exploration`]: drawing and fitting tiles into empty cells
//! - [`actions`]: trading, resting, Agents and expeditions
//! - [`city`]: banking and hiring at cities
//! - [`piracy`]: attacks and disasters
//!
//! Rules never choose for a player. Whenever one offers a choice it asks
//! the [`DecisionMaker`](crate::decision::DecisionMaker) passed in by the
//! caller.

pub mod actions;
pub mod city;
pub mod exploration;
pub mod movement;
pub mod piracy;

pub use exploration::{exploration_value, rotation_candidates, Exploration};
