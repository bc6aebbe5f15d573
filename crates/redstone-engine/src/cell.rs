//! The [`Cell`] enum: every slot in the grid is one of these, by value, with
//! no indirection. The tag set follows the component kinds modeled by
//! ComputerGhost's `RedstoneSimulator`, the Minecraft redstone simulator
//! this crate's rules are adapted from.

use bitflags::bitflags;

use crate::cells::redstone_dust::RedstoneDustState;
use crate::cells::redstone_torch::RedstoneTorchState;
use crate::cells::solid_block::SolidBlockState;
use crate::cells::switch::SwitchState;
use crate::coord::Direction;

bitflags! {
    /// Which cardinal neighbors a dust wire is visually/topologically
    /// connected to. Bit assignment matches the reference implementation's
    /// `RedstoneDust::hasDirection`.
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
    pub struct DustDirections: u8 {
        const NORTH = 0b1000;
        const EAST  = 0b0100;
        const SOUTH = 0b0010;
        const WEST  = 0b0001;
    }
}

impl DustDirections {
    /// The single-bit mask for a cardinal direction. Empty for `Up`/`Down`.
    #[must_use]
    pub fn bit_for(direction: Direction) -> Self {
        match direction {
            Direction::North => Self::NORTH,
            Direction::East => Self::EAST,
            Direction::South => Self::SOUTH,
            Direction::West => Self::WEST,
            Direction::Up | Direction::Down => Self::empty(),
        }
    }

    /// Whether the wire is connected toward `cardinal`.
    #[must_use]
    pub fn has_cardinal(self, cardinal: Direction) -> bool {
        self.contains(Self::bit_for(cardinal))
    }
}

/// A single grid slot. Every variant is plain data — no heap allocation, no
/// pointers back into the engine — so `Cell` is `Copy` and a `Grid` clone is
/// a flat `Vec` clone.
///
/// Equality is "kind plus observable fields": unit variants compare by kind
/// alone; the four stateful variants also compare their visible fields, but
/// not bookkeeping the rules use internally (dust's scratch diagonal state
/// never becomes part of the stored `Cell` at all; a torch's switching
/// history and last-seen tick are excluded). See the manual [`PartialEq`]
/// impl below.
#[derive(Clone, Copy, Debug)]
pub enum Cell {
    /// No cell occupies this slot. Also the value returned for any
    /// out-of-bounds read.
    Empty,
    Air,
    SolidBlock(SolidBlockState),
    GlassBlock,
    RedstoneBlock,
    RedstoneDust(RedstoneDustState),
    RedstoneTorch(RedstoneTorchState),
    Switch(SwitchState),

    // Reserved inert tags: round-trip through an external codec, but the
    // core never inspects or updates them.
    HalfBlock,
    SandBlock,
    SlimeBlock,
    WoodenButton,
    StoneButton,
    TripwireHook,
    WoodenPressurePlate,
    StonePressurePlate,
    Repeater,
    Comparator,
    Hopper,
    Dropper,
    Dispenser,
    RegularPiston,
    StickyPiston,
    Diamond,
    Bed,
    Cart,
    Rail,
    PoweredRail,
    DetectorRail,
    Tripwire,
}

impl Cell {
    /// A freshly placed redstone torch, on, mounted downward — matches the
    /// reference implementation's default-constructed torch.
    #[must_use]
    pub fn redstone_torch() -> Self {
        Self::RedstoneTorch(RedstoneTorchState::default())
    }

    /// A freshly placed switch, off, mounted downward.
    #[must_use]
    pub fn switch() -> Self {
        Self::Switch(SwitchState::default())
    }

    /// An unpowered, unattached solid block.
    #[must_use]
    pub fn solid_block() -> Self {
        Self::SolidBlock(SolidBlockState::default())
    }

    /// A freshly placed dust wire, carrying no power and connected nowhere.
    #[must_use]
    pub fn redstone_dust() -> Self {
        Self::RedstoneDust(RedstoneDustState::default())
    }

    /// Whether this slot has an update rule at all.
    #[must_use]
    pub fn is_dynamic(self) -> bool {
        matches!(
            self,
            Self::SolidBlock(_) | Self::RedstoneDust(_) | Self::RedstoneTorch(_) | Self::Switch(_)
        )
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        use Cell::{RedstoneDust, RedstoneTorch, SolidBlock, Switch};
        match (self, other) {
            (SolidBlock(a), SolidBlock(b)) => a == b,
            (RedstoneDust(a), RedstoneDust(b)) => a == b,
            (RedstoneTorch(a), RedstoneTorch(b)) => a.is_on == b.is_on && a.direction == b.direction,
            (Switch(a), Switch(b)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Eq for Cell {}
