//! A discrete-event simulator for a voxel, redstone-style signal
//! propagation model: a bounds-tolerant grid of cells, advanced one tick at
//! a time by a two-queue scheduler, with per-kind update rules for solid
//! blocks, dust wires, torches, and switches.
//!
//! This crate is the simulation core only. It has no binary, no schematic
//! codec, and no rendering — those are external concerns; callers construct
//! a [`grid::Grid`], hand it to an [`engine::Engine`], and drive it tick by
//! tick.

pub mod cell;
pub mod cells;
pub mod coord;
pub mod engine;
pub mod error;
pub mod grid;

pub use cell::{Cell, DustDirections};
pub use cells::switch::flip;
pub use coord::{Coordinate, Direction, Size};
pub use engine::Engine;
pub use error::GridError;
pub use grid::Grid;
