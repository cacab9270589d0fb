use crate::core::bounds::Bounds;
use geo_types::{Coord, LineString, Polygon};

/// Builds the closed rectangle polygon for a cell, wound counter-clockwise
/// starting at the south-west corner (x = longitude, y = latitude).
pub fn create_cell_polygon(bounds: &Bounds) -> Polygon<f64> {
    let coords = vec![
        Coord { x: bounds.min_lon, y: bounds.min_lat },
        Coord { x: bounds.max_lon, y: bounds.min_lat },
        Coord { x: bounds.max_lon, y: bounds.max_lat },
        Coord { x: bounds.min_lon, y: bounds.max_lat },
        Coord { x: bounds.min_lon, y: bounds.min_lat },
    ];

    Polygon::new(LineString::from(coords), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bounds::DIGIPIN_BOUNDS;

    #[test]
    fn test_create_cell_polygon() {
        let polygon = create_cell_polygon(&DIGIPIN_BOUNDS);
        let exterior = polygon.exterior();
        assert_eq!(exterior.coords().count(), 5); // 4 corners + 1 to close
        assert_eq!(exterior.0[0], exterior.0[4]); // First and last are same
    }

    #[test]
    fn test_polygon_corners() {
        let polygon = create_cell_polygon(&DIGIPIN_BOUNDS);
        let exterior = polygon.exterior();
        assert_eq!(exterior.0[0], Coord { x: 63.5, y: 2.5 });
        assert_eq!(exterior.0[2], Coord { x: 99.5, y: 38.5 });
    }
}
