//! Tokens that stand on tiles: Adventurers and Agents.
//!
//! Token state is plain data. The rules that change it live in
//! [`rules`](crate::rules) and act through the [`Game`](crate::game::Game),
//! which owns every token in per-kind arenas.

pub mod adventurer;
pub mod agent;

pub use adventurer::Adventurer;
pub use agent::Agent;
