//! Error types for the grid.

mod cell_set;
mod hex_grid;
mod invalid_value;
mod localij;
mod resolution_mismatch;

#[cfg(test)]
mod tests;

pub use cell_set::CellSetError;
pub use hex_grid::HexGridError;
pub use invalid_value::{
    InvalidBaseCell, InvalidCellIndex, InvalidDirection, InvalidFace,
    InvalidLatLng, InvalidResolution,
};
pub use localij::LocalIjError;
pub use resolution_mismatch::ResolutionMismatch;
