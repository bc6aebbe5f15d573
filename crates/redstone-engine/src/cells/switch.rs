//! Switch (lever): a player-toggled strong power source. The reference
//! implementation's `Switch` stashes a raw back-pointer to the engine,
//! acquired lazily on its first `update()`, so `flip()` can re-run
//! propagation without the caller passing the engine in. That back-pointer
//! dangles as soon as the map is copied, which doesn't translate to Rust
//! cleanly — this crate drops it and makes `flip` a free function that
//! takes the engine explicitly instead.

use log::debug;

use crate::cell::Cell;
use crate::coord::{Coordinate, Direction};
use crate::engine::Engine;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SwitchState {
    pub is_on: bool,
    /// The direction from the switch to the block it's mounted against.
    pub direction: Direction,
}

impl Default for SwitchState {
    fn default() -> Self {
        Self { is_on: false, direction: Direction::Down }
    }
}

/// A switch never changes on its own; its `update` callback is a no-op.
pub(crate) fn update(_engine: &mut Engine, _coord: Coordinate, _state: SwitchState) {}

/// Toggles the switch at `coord` and schedules its neighbors. Takes the
/// engine explicitly rather than stashing a back-reference on the cell —
/// see the module docs above.
pub fn flip(engine: &mut Engine, coord: Coordinate) {
    if let Cell::Switch(mut state) = engine.map_ref().get(coord) {
        state.is_on = !state.is_on;
        debug!("switch at {coord:?} flipped to {}", state.is_on);
        engine.map().set(coord, Cell::Switch(state));
        engine.update_surrounding(coord);
    }
}
