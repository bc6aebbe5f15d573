//! The discrete-event scheduler: two FIFO queues of coordinates to
//! re-evaluate, interleaving current-tick and next-tick work. The
//! scheduling shape is adapted from ComputerGhost's `RedstoneSimulator`
//! engine.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::cells::dispatch_update;
use crate::coord::{Coordinate, Direction};
use crate::grid::Grid;

/// Owns the grid plus the scheduler state driving it forward in discrete
/// ticks. Construct one, call [`Self::set_map`] to seed it with a grid, then
/// call [`Self::run`] to advance one tick at a time until
/// [`Self::is_still`].
#[derive(Clone, Debug)]
pub struct Engine {
    map: Grid,
    tick: u64,
    updates: VecDeque<Coordinate>,
    next_updates: VecDeque<Coordinate>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// An engine over an empty, zero-sized grid. Call [`Self::set_map`]
    /// before running it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: Grid::new(crate::coord::Size::default()),
            tick: 0,
            updates: VecDeque::new(),
            next_updates: VecDeque::new(),
        }
    }

    /// Replaces the engine's grid, resets the tick counter to zero, and
    /// seeds the next-tick queue with every slot in storage order so the
    /// whole grid gets one evaluation pass before anything settles, then
    /// immediately runs that first tick (matching the reference engine's
    /// `setMap`, which ends with a call to `run()` — a grid with no ongoing
    /// dynamics is already still by the time `set_map` returns).
    ///
    /// `grid` is taken by value: in Rust, moving it in already gives the
    /// engine sole ownership of independent state — the deep-copy semantics
    /// the reference engine's copy-assignment provides are automatic.
    /// Callers who want to keep their own copy should `clone()` it first.
    pub fn set_map(&mut self, grid: Grid) {
        let volume = grid.size().volume();
        self.map = grid;
        self.tick = 0;
        self.updates.clear();
        self.next_updates.clear();
        for coord in self.map.coordinates() {
            self.next_updates.push_back(coord);
        }
        debug!("set_map: volume={volume} seeded={}", self.next_updates.len());
        self.run();
    }

    /// Advances the simulation by one tick: everything queued for "next
    /// tick" becomes "this tick", then every coordinate in the current-tick
    /// queue is evaluated, in FIFO order, including coordinates enqueued by
    /// earlier evaluations within the same call.
    pub fn run(&mut self) {
        while let Some(coord) = self.next_updates.pop_front() {
            self.updates.push_back(coord);
        }
        let mut processed = 0usize;
        while let Some(coord) = self.updates.pop_front() {
            dispatch_update(self, coord);
            processed += 1;
        }
        trace!(
            "tick {}: processed={processed} deferred={}",
            self.tick,
            self.next_updates.len()
        );
        self.tick += 1;
    }

    /// Whether both queues are empty — the grid has fully stabilized and
    /// further [`Self::run`] calls would do nothing.
    #[must_use]
    pub fn is_still(&self) -> bool {
        self.updates.is_empty() && self.next_updates.is_empty()
    }

    #[must_use]
    pub fn tick_number(&self) -> u64 {
        self.tick
    }

    pub fn map(&mut self) -> &mut Grid {
        &mut self.map
    }

    #[must_use]
    pub fn map_ref(&self) -> &Grid {
        &self.map
    }

    /// Queues `coord` for evaluation within the tick currently running.
    pub(crate) fn mark_update(&mut self, coord: Coordinate) {
        self.updates.push_back(coord);
    }

    /// Queues `coord` for evaluation on the *next* tick.
    pub(crate) fn mark_next_update(&mut self, coord: Coordinate) {
        self.next_updates.push_back(coord);
    }

    /// Queues all six axis-aligned neighbors of `coord` for evaluation this
    /// tick, in `Direction::AXIS_ORDER` (`-x, +x, -z, +z, -y, +y`).
    pub(crate) fn update_surrounding(&mut self, coord: Coordinate) {
        for direction in Direction::AXIS_ORDER {
            self.mark_update(coord.offset(direction));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::coord::Size;

    #[test]
    fn empty_grid_is_immediately_still() {
        let mut engine = Engine::new();
        engine.set_map(Grid::new(Size::new(0, 0, 0)));
        assert!(engine.is_still());
    }

    #[test]
    fn all_air_grid_settles_during_set_map() {
        let mut engine = Engine::new();
        engine.set_map(Grid::new(Size::new(2, 2, 2)));
        assert!(
            engine.is_still(),
            "set_map seeds a full pass and runs it immediately, like the original's setMap"
        );
    }

    #[test]
    fn set_map_resets_tick_number_then_runs_one_tick() {
        let mut engine = Engine::new();
        engine.set_map(Grid::new(Size::new(2, 2, 2)));
        engine.run();
        engine.run();
        assert_eq!(engine.tick_number(), 3);
        engine.set_map(Grid::new(Size::new(1, 1, 1)));
        assert_eq!(engine.tick_number(), 1);
    }

    #[test]
    fn update_surrounding_enqueues_all_six_neighbors() {
        let mut engine = Engine::new();
        engine.set_map(Grid::new(Size::new(5, 5, 5)));
        assert!(engine.is_still());
        let center = Coordinate::new(2, 2, 2);
        engine.map().set(center, Cell::RedstoneBlock);
        engine.update_surrounding(center);
        assert_eq!(engine.updates.len(), 6);
    }

    use proptest::prelude::*;

    proptest! {
        // Feature: tick scheduling, Property: once an engine has stabilized,
        // further ticks only advance the tick counter — the grid itself is
        // a fixed point.
        #[test]
        fn prop_still_engine_is_a_fixed_point(sx in 1usize..5, sy in 1usize..5, sz in 1usize..5) {
            let mut engine = Engine::new();
            engine.set_map(Grid::new(Size::new(sx, sy, sz)));
            prop_assert!(engine.is_still());
            let before = engine.map_ref().clone();
            let tick_before = engine.tick_number();
            engine.run();
            prop_assert!(engine.is_still());
            prop_assert_eq!(engine.tick_number(), tick_before + 1);
            for coord in before.coordinates() {
                prop_assert_eq!(before.get(coord), engine.map_ref().get(coord));
            }
        }
    }
}
