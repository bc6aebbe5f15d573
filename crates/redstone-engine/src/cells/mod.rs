//! Per-kind update rules, dispatched from [`crate::engine::Engine::run`].
//! One module per stateful component.

pub mod redstone_dust;
pub mod redstone_torch;
pub mod solid_block;
pub mod switch;

use crate::cell::Cell;
use crate::coord::Coordinate;
use crate::engine::Engine;

/// Runs the update rule for whatever is at `coord`, or does nothing if the
/// slot is empty or holds a cell kind with no dynamics.
pub(crate) fn dispatch_update(engine: &mut Engine, coord: Coordinate) {
    match engine.map_ref().get(coord) {
        Cell::SolidBlock(state) => solid_block::update(engine, coord, state),
        Cell::RedstoneDust(state) => redstone_dust::update(engine, coord, state),
        Cell::RedstoneTorch(state) => redstone_torch::update(engine, coord, state),
        Cell::Switch(state) => switch::update(engine, coord, state),
        _ => {}
    }
}
