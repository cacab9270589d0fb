use crate::core::constants::{GRID_EXTENTS, GRID_SIZE};
use geo_types::{Point, Rect, coord};
use serde::{Deserialize, Serialize};

/// A latitude/longitude rectangle.
///
/// Encoding narrows one of these through ten levels of 4x4 subdivision;
/// decoding rebuilds the same nesting from the symbols.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// The full DIGIPIN region.
pub const DIGIPIN_BOUNDS: Bounds = Bounds {
    min_lat: GRID_EXTENTS[0],
    max_lat: GRID_EXTENTS[1],
    min_lon: GRID_EXTENTS[2],
    max_lon: GRID_EXTENTS[3],
};

impl Bounds {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Center point with x = longitude, y = latitude.
    pub fn center(&self) -> Point<f64> {
        Point::new(
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Grid position of the sub-cell containing the given coordinate.
    ///
    /// Row 0 is the northernmost band, so the raw latitude index is inverted.
    /// Both indices are clamped to [0, 3]; a coordinate exactly on the
    /// `max_lat`/`max_lon` edge would otherwise index one past the grid.
    pub fn cell_index(&self, lat: f64, lon: f64) -> (usize, usize) {
        let lat_div = self.lat_span() / GRID_SIZE as f64;
        let lon_div = self.lon_span() / GRID_SIZE as f64;

        let row = 3 - ((lat - self.min_lat) / lat_div).floor() as i64;
        let col = ((lon - self.min_lon) / lon_div).floor() as i64;

        (
            row.clamp(0, GRID_SIZE as i64 - 1) as usize,
            col.clamp(0, GRID_SIZE as i64 - 1) as usize,
        )
    }

    /// The sub-cell at `(row, col)`, with latitude bands derived from
    /// `min_lat`. This is the direction the encoder narrows in.
    pub fn quarter(&self, row: usize, col: usize) -> Bounds {
        let lat_div = self.lat_span() / GRID_SIZE as f64;
        let lon_div = self.lon_span() / GRID_SIZE as f64;

        let min_lon = self.min_lon + lon_div * col as f64;
        Bounds {
            min_lat: self.min_lat + lat_div * (3 - row) as f64,
            max_lat: self.min_lat + lat_div * (4 - row) as f64,
            min_lon,
            max_lon: min_lon + lon_div,
        }
    }

    /// The sub-cell at `(row, col)`, with latitude bands derived from
    /// `max_lat`. This is the direction the decoder narrows in; it agrees
    /// with [`Bounds::quarter`] up to floating-point rounding.
    pub fn quarter_from_top(&self, row: usize, col: usize) -> Bounds {
        let lat_div = self.lat_span() / GRID_SIZE as f64;
        let lon_div = self.lon_span() / GRID_SIZE as f64;

        Bounds {
            min_lat: self.max_lat - lat_div * (row + 1) as f64,
            max_lat: self.max_lat - lat_div * row as f64,
            min_lon: self.min_lon + lon_div * col as f64,
            max_lon: self.min_lon + lon_div * (col + 1) as f64,
        }
    }

    /// Conversion to a `geo_types` rectangle (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lon, y: self.min_lat },
            coord! { x: self.max_lon, y: self.max_lat },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let b = DIGIPIN_BOUNDS;
        assert!(b.contains(2.5, 63.5));
        assert!(b.contains(38.5, 99.5));
        assert!(b.contains(20.5, 81.5));
        assert!(!b.contains(2.4999, 81.5));
        assert!(!b.contains(38.5001, 81.5));
        assert!(!b.contains(20.5, 63.4999));
        assert!(!b.contains(20.5, 99.5001));
    }

    #[test]
    fn test_cell_index_inverts_rows() {
        let b = DIGIPIN_BOUNDS;
        // Just inside the south-west corner: bottom row, first column.
        assert_eq!(b.cell_index(2.6, 63.6), (3, 0));
        // Just inside the north-east corner: top row, last column.
        assert_eq!(b.cell_index(38.4, 99.4), (0, 3));
    }

    #[test]
    fn test_cell_index_clamps_upper_edge() {
        let b = DIGIPIN_BOUNDS;
        assert_eq!(b.cell_index(38.5, 99.5), (0, 3));
        assert_eq!(b.cell_index(2.5, 63.5), (3, 0));
    }

    #[test]
    fn test_quarter_narrows_to_selected_cell() {
        let b = DIGIPIN_BOUNDS;
        for row in 0..4 {
            for col in 0..4 {
                let q = b.quarter(row, col);
                assert!((q.lat_span() - b.lat_span() / 4.0).abs() < 1e-12);
                assert!((q.lon_span() - b.lon_span() / 4.0).abs() < 1e-12);
                // The quarter's own center maps back to the same indices.
                let c = q.center();
                assert_eq!(b.cell_index(c.y(), c.x()), (row, col));
            }
        }
    }

    #[test]
    fn test_quarter_directions_agree() {
        let b = DIGIPIN_BOUNDS;
        for row in 0..4 {
            for col in 0..4 {
                let bottom = b.quarter(row, col);
                let top = b.quarter_from_top(row, col);
                assert!((bottom.min_lat - top.min_lat).abs() < 1e-9);
                assert!((bottom.max_lat - top.max_lat).abs() < 1e-9);
                assert!((bottom.min_lon - top.min_lon).abs() < 1e-9);
                assert!((bottom.max_lon - top.max_lon).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_center_and_rect() {
        let b = DIGIPIN_BOUNDS;
        let c = b.center();
        assert!((c.y() - 20.5).abs() < 1e-12);
        assert!((c.x() - 81.5).abs() < 1e-12);

        let rect = b.to_rect();
        assert_eq!(rect.min().x, 63.5);
        assert_eq!(rect.max().y, 38.5);
    }
}
