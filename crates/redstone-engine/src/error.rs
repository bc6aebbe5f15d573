//! The crate's narrow error surface: almost every boundary condition is
//! absorbed by sentinel values rather than `Result`.

use crate::coord::Size;
use thiserror::Error;

/// Errors constructing a [`crate::grid::Grid`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// `size.x * size.y * size.z` overflows `usize`, or is large enough
    /// that allocating `Vec<Cell>` for it would be unreasonable. Ordinary
    /// grid sizes (up to roughly 2^15 per axis) never hit this.
    #[error("grid volume for size {size:?} overflows or is unreasonably large")]
    VolumeOverflow {
        /// The requested size.
        size: Size,
    },
}
