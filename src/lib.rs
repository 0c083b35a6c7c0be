//! Food Grab: a two-player, turn-based grid game where players race to the
//! food cell, with each player's moves supplied by a pluggable provider:
//! a scripted bot or a remote text-generation model queried over HTTP.
//!
//! ## Modules
//!
//! - [`foodgrab`] - Core engine: board, players, game state, move validation
//! - [`provider`] - Move providers: random bot, greedy bot, remote model
//! - [`game_loop`] - Turn-alternating driver and final outcome
//! - [`render`] - Text rendering of the board and scoreboard
//! - [`config`] - TOML configuration, one section per player

pub mod config;
pub mod foodgrab;
pub mod game_loop;
pub mod provider;
pub mod render;
