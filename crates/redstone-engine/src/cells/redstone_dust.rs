//! Redstone dust: the wire. Carries power away from a source, attenuating
//! by one per hop, and connects diagonally across a one-block drop.

use crate::cell::{Cell, DustDirections};
use crate::coord::{Coordinate, Direction};
use crate::engine::Engine;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RedstoneDustState {
    pub level: u8,
    pub direction: DustDirections,
}

/// Sets the bit for the cardinal opposite `toward_self` — the cardinal a
/// viewer standing at `coord` would point to reach the neighbor that just
/// attached. No-op when `toward_self` is `Up`/`Down`.
fn attach(direction: &mut DustDirections, toward_self: Direction) {
    *direction |= DustDirections::bit_for(toward_self.opposite());
}

/// Maps a lower-diagonal index (`4..8`) to the cardinal `SolidBlock` beside
/// it disables, following the reference implementation's `_onSolidBeside`
/// exactly (its cardinal→index pairing does not line up with the `i % 4`
/// diagonal-offset pairing below — that's the reference implementation's
/// wiring, kept faithfully rather than "fixed").
fn solid_beside_diag_index(cardinal: Direction) -> usize {
    match cardinal {
        Direction::South => 4,
        Direction::West => 5,
        Direction::North => 6,
        Direction::East => 7,
        Direction::Up | Direction::Down => unreachable!("not a cardinal"),
    }
}

/// `(dx, dy, dz)` for diagonal slot `i` (`0..8`): `i < 4` is the upper ring
/// (`y+1`), `i >= 4` the lower ring (`y-1`); `i % 4` selects `+z, +x, -z, -x`.
fn diagonal_offset(i: usize) -> (i32, i32, i32) {
    let dy = if i < 4 { 1 } else { -1 };
    let (dx, dz) = match i % 4 {
        0 => (0, 1),
        1 => (1, 0),
        2 => (0, -1),
        _ => (-1, 0),
    };
    (dx, dy, dz)
}

pub(crate) fn update(engine: &mut Engine, coord: Coordinate, old: RedstoneDustState) {
    let mut level: u8 = 0;
    let mut direction = DustDirections::empty();
    let mut diag_alive = [true; 8];

    for offset_dir in Direction::AXIS_ORDER {
        let neighbor_coord = coord.offset(offset_dir);
        let neighbor = engine.map_ref().get(neighbor_coord);
        let toward_self = offset_dir.opposite();

        match neighbor {
            Cell::RedstoneBlock => {
                attach(&mut direction, toward_self);
                level = 15;
            }
            Cell::Switch(toggle) => {
                attach(&mut direction, toward_self);
                if toggle.is_on {
                    level = 15;
                }
            }
            Cell::RedstoneTorch(torch) => {
                attach(&mut direction, toward_self);
                if torch.is_on {
                    level = 15;
                }
            }
            Cell::RedstoneDust(other) => {
                attach(&mut direction, toward_self);
                level = level.max(other.level.saturating_sub(1));
            }
            Cell::SolidBlock(solid) => match toward_self {
                Direction::Down => {
                    // Solid directly above: the upper diagonal ring can't
                    // see across it.
                    diag_alive[0] = false;
                    diag_alive[1] = false;
                    diag_alive[2] = false;
                    diag_alive[3] = false;
                    if solid.strongly_powered {
                        level = 15;
                    }
                }
                Direction::Up => {
                    if solid.strongly_powered {
                        level = 15;
                    }
                }
                cardinal => {
                    diag_alive[solid_beside_diag_index(cardinal)] = false;
                    if solid.strongly_powered {
                        level = 15;
                    }
                }
            },
            _ => {}
        }
    }

    for (i, alive) in diag_alive.iter_mut().enumerate() {
        if !*alive {
            continue;
        }
        let (dx, dy, dz) = diagonal_offset(i);
        let diag_coord = Coordinate::new(coord.x + dx, coord.y + dy, coord.z + dz);
        match engine.map_ref().get(diag_coord) {
            Cell::RedstoneDust(other) => {
                direction |= DustDirections::from_bits_truncate(1 << (i % 4));
                level = level.max(other.level.saturating_sub(1));
            }
            _ => *alive = false,
        }
    }

    let state = RedstoneDustState { level, direction };
    if state != old {
        engine.map().set(coord, Cell::RedstoneDust(state));
        engine.update_surrounding(coord);
        for (i, alive) in diag_alive.iter().enumerate() {
            if *alive {
                let (dx, dy, dz) = diagonal_offset(i);
                engine.mark_update(Coordinate::new(coord.x + dx, coord.y + dy, coord.z + dz));
            }
        }
    }
}
