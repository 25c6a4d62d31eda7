use crate::error::{
    CellSetError, HexGridError, InvalidBaseCell, InvalidCellIndex,
    InvalidDirection, InvalidFace, InvalidLatLng, InvalidResolution,
    LocalIjError, ResolutionMismatch,
};
use std::error::Error as _;

// All error must have a non-empty display.
#[test]
fn display() {
    let hex_grid = HexGridError::new("error");

    assert!(!hex_grid.to_string().is_empty());

    assert!(!InvalidResolution::new(Some(32), "error")
        .to_string()
        .is_empty());
    assert!(!InvalidCellIndex::new(Some(0), "error")
        .to_string()
        .is_empty());
    assert!(!InvalidLatLng::new(f64::NAN, "error").to_string().is_empty());
    assert!(!InvalidFace::new(33, "error").to_string().is_empty());
    assert!(!InvalidBaseCell::new(128, "error").to_string().is_empty());
    assert!(!InvalidDirection::new(9, "error").to_string().is_empty());

    assert!(!LocalIjError::ResolutionMismatch.to_string().is_empty());
    assert!(!LocalIjError::Pentagon.to_string().is_empty());
    assert!(!LocalIjError::HexGrid(hex_grid).to_string().is_empty());

    assert!(!ResolutionMismatch.to_string().is_empty());

    assert!(!CellSetError::EmptySet.to_string().is_empty());
    assert!(!CellSetError::ResolutionMismatch.to_string().is_empty());
    assert!(!CellSetError::LocalIj(LocalIjError::Pentagon)
        .to_string()
        .is_empty());
}

#[test]
fn source() {
    let hex_grid = HexGridError::new("error");

    assert!(hex_grid.source().is_none());

    assert!(InvalidResolution::new(Some(32), "error").source().is_none());
    assert!(InvalidCellIndex::new(Some(0), "error").source().is_none());
    assert!(InvalidLatLng::new(f64::NAN, "error").source().is_none());
    assert!(InvalidFace::new(33, "error").source().is_none());
    assert!(InvalidBaseCell::new(128, "error").source().is_none());
    assert!(InvalidDirection::new(9, "error").source().is_none());

    assert!(LocalIjError::ResolutionMismatch.source().is_none());
    assert!(LocalIjError::Pentagon.source().is_none());
    assert!(LocalIjError::HexGrid(hex_grid).source().is_some());

    assert!(ResolutionMismatch.source().is_none());

    assert!(CellSetError::EmptySet.source().is_none());
    assert!(CellSetError::ResolutionMismatch.source().is_none());
    assert!(CellSetError::LocalIj(LocalIjError::Pentagon).source().is_some());
}
