//! Board state management for Plank.
//!
//! This module implements the full board store: creating, editing,
//! deleting, and reordering boards, columns, and tasks; translating
//! drag-and-drop gestures into single move operations; filtering tasks
//! into a derived view; and persisting the whole document to a named
//! snapshot slot after every mutation. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Operation services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
