//! The voxel grid: a flat, bounds-tolerant store of [`Cell`]s.
//!
//! There is deliberately no `get_mut`: every [`Cell`] is a plain `Copy`
//! value, so every rule already reads with [`Grid::get`], computes the new
//! state into a local, and commits it with [`Grid::set`] rather than
//! mutating a cell in place. An in-place mutable accessor would just be a
//! second, redundant way to do the same write.

use log::debug;

use crate::cell::Cell;
use crate::coord::{Coordinate, Size};
use crate::error::GridError;

/// A dense `X × Y × Z` array of cells. Reads outside the bounds return
/// [`Cell::Empty`]; writes outside the bounds are silently discarded — no
/// grid operation ever panics or errors on an out-of-range coordinate.
#[derive(Clone, Debug)]
pub struct Grid {
    size: Size,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds an empty grid of the given size. Panics only if `size`'s
    /// volume overflows or is unreasonably large — see [`Self::try_new`].
    #[must_use]
    pub fn new(size: Size) -> Self {
        match Self::try_new(size) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible constructor: the only place this crate's error type is
    /// actually reachable.
    pub fn try_new(size: Size) -> Result<Self, GridError> {
        let volume = size
            .x
            .checked_mul(size.y)
            .and_then(|xy| xy.checked_mul(size.z))
            .filter(|&v| v <= MAX_VOLUME)
            .ok_or(GridError::VolumeOverflow { size })?;
        debug!("allocating grid {:?} ({volume} cells)", size);
        Ok(Self { size, cells: vec![Cell::Empty; volume] })
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Reads the cell at `coord`, or [`Cell::Empty`] if it's out of bounds.
    #[must_use]
    pub fn get(&self, coord: Coordinate) -> Cell {
        self.offset(coord).map_or(Cell::Empty, |i| self.cells[i])
    }

    /// Writes `cell` at `coord`. A no-op if `coord` is out of bounds.
    pub fn set(&mut self, coord: Coordinate, cell: Cell) {
        if let Some(i) = self.offset(coord) {
            self.cells[i] = cell;
        }
    }

    /// Every in-bounds coordinate, in `x` outermost, `z` middle, `y`
    /// innermost order — the order [`crate::engine::Engine::set_map`]
    /// seeds its initial update queue in.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let size = self.size;
        (0..size.x).flat_map(move |x| {
            (0..size.z).flat_map(move |z| {
                (0..size.y).map(move |y| Coordinate::new(x as i32, y as i32, z as i32))
            })
        })
    }

    /// Every in-bounds `(coordinate, cell)` pair, in the same order as
    /// [`Self::coordinates`].
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        self.coordinates().map(|coord| (coord, self.get(coord)))
    }

    fn offset(&self, coord: Coordinate) -> Option<usize> {
        if !self.size.contains(coord) {
            return None;
        }
        let (x, y, z) = (coord.x as usize, coord.y as usize, coord.z as usize);
        Some((z * self.size.y + y) * self.size.x + x)
    }
}

/// An arbitrary ceiling well above any grid a redstone build needs
/// (roughly 2^15 per axis), chosen so `Vec<Cell>` allocation stays sane.
const MAX_VOLUME: usize = 1 << 32;
