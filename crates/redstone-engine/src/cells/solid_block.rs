//! Solid block: aggregates power from redstone dust, torches, and switches
//! touching its six faces.

use crate::cell::Cell;
use crate::coord::{Coordinate, Direction};
use crate::engine::Engine;

/// A generic solid Minecraft block. `power_level` tracks weak power from
/// adjacent dust; `strongly_powered` tracks direct power from a torch
/// underneath or a switch mounted against it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SolidBlockState {
    pub power_level: u8,
    pub strongly_powered: bool,
}

impl SolidBlockState {
    /// The level this block presents to neighbors: 15 if strongly powered,
    /// else `power_level`.
    #[must_use]
    pub fn effective_level(self) -> u8 {
        if self.strongly_powered {
            15
        } else {
            self.power_level
        }
    }
}

pub(crate) fn update(engine: &mut Engine, coord: Coordinate, old: SolidBlockState) {
    let mut state = SolidBlockState::default();

    for offset_dir in Direction::AXIS_ORDER {
        let neighbor_coord = coord.offset(offset_dir);
        let neighbor = engine.map_ref().get(neighbor_coord);
        // `toward_self` is the direction a viewer standing at `neighbor`
        // would point to reach `coord` — the convention every rule table
        // in the spec is written against.
        let toward_self = offset_dir.opposite();

        match neighbor {
            Cell::RedstoneDust(dust) => match toward_self {
                Direction::Down => {
                    state.power_level = state.power_level.max(dust.level);
                }
                Direction::Up => {
                    // Dust directly below never powers the block above it.
                }
                cardinal => {
                    if dust.direction.has_cardinal(cardinal) {
                        state.power_level = state.power_level.max(dust.level);
                    }
                }
            },
            Cell::RedstoneTorch(torch) => {
                if toward_self == Direction::Up && torch.is_on {
                    state.strongly_powered = true;
                }
            }
            Cell::Switch(toggle) => {
                if toggle.direction == toward_self && toggle.is_on {
                    state.strongly_powered = true;
                }
            }
            _ => {}
        }
    }

    if state != old {
        engine.map().set(coord, Cell::SolidBlock(state));
        engine.update_surrounding(coord);
    }
}
