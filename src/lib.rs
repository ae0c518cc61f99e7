//! Plank: client-side Kanban board state core.
//!
//! This crate provides the state container behind a Kanban task board:
//! boards hold ordered columns, columns hold ordered tasks, and a single
//! local actor mutates the hierarchy through a fixed operation set while
//! dense positional ordering is preserved on every path.
//!
//! # Architecture
//!
//! Plank follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board/column/task model with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for snapshot persistence
//! - **Adapters**: Concrete snapshot stores (in-memory, JSON file)
//! - **Services**: The board store operation set and drag-and-drop
//!   resolution
//!
//! # Modules
//!
//! - [`board`]: The board bounded context

pub mod board;
