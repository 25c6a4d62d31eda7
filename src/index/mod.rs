//! H3 index types

pub mod bits;
mod cell;
mod iterator;
mod mode;

pub use cell::CellIndex;
pub use iterator::{Children, GridPathCells};
pub use mode::IndexMode;
