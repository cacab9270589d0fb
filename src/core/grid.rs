use crate::core::bounds::{Bounds, DIGIPIN_BOUNDS};
use crate::core::constants::{PIN_LENGTH, SYMBOL_GRID, symbol_position};
use crate::util::coord::Coordinate;
use crate::util::error::DigipinError;
use crate::util::format::normalize_pin;
use geo_types::Point;

/// Encodes a WGS84 coordinate (x = longitude, y = latitude) as a 10-symbol
/// DIGIPIN.
///
/// Fails with [`DigipinError::OutOfRange`] when the coordinate lies outside
/// the DIGIPIN region, before any subdivision happens.
pub fn point_to_pin<C: Coordinate>(coord: &C) -> Result<String, DigipinError> {
    let (lat, lon) = (coord.y(), coord.x());
    if !DIGIPIN_BOUNDS.contains(lat, lon) {
        return Err(DigipinError::OutOfRange { lat, lon });
    }

    let mut bounds = DIGIPIN_BOUNDS;
    let mut pin = String::with_capacity(PIN_LENGTH);

    for _ in 0..PIN_LENGTH {
        let (row, col) = bounds.cell_index(lat, lon);
        pin.push(SYMBOL_GRID[row][col]);
        bounds = bounds.quarter(row, col);
    }

    Ok(pin)
}

/// Resolves a pin to the level-10 cell it addresses.
///
/// Separators and any other non-alphanumeric characters are stripped and the
/// remainder uppercased before validation, so `"39J-49L-L8T4"` and
/// `"39j49ll8t4"` resolve to the same cell.
pub fn pin_to_bounds(pin: &str) -> Result<Bounds, DigipinError> {
    let normalized = normalize_pin(pin);
    if normalized.chars().count() != PIN_LENGTH {
        return Err(DigipinError::InvalidLength(normalized.chars().count()));
    }

    let mut bounds = DIGIPIN_BOUNDS;
    for c in normalized.chars() {
        let (row, col) = symbol_position(c).ok_or(DigipinError::InvalidSymbol(c))?;
        bounds = bounds.quarter_from_top(row, col);
    }

    Ok(bounds)
}

/// Decodes a pin to the centroid of its level-10 cell
/// (x = longitude, y = latitude).
///
/// The cell measures 36°/4¹⁰ ≈ 3.4e-5° per axis, so the centroid is distinct
/// from its neighbours well within six decimal digits.
pub fn pin_to_point(pin: &str) -> Result<Point<f64>, DigipinError> {
    Ok(pin_to_bounds(pin)?.center())
}
