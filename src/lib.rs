//! Fable - Turn-Based Terminal Text Adventure Library
//!
//! This module exposes the game logic for testing and external use.
//! The engine performs no I/O of its own: it communicates with its host
//! through the typed event channel in [`events`], and the host wires those
//! events to a presentation adapter and the [`save_manager`].

pub mod character;
pub mod combat_logic;
pub mod constants;
pub mod enemy;
pub mod engine;
pub mod error;
pub mod events;
pub mod game_state;
pub mod inventory;
pub mod save_manager;
