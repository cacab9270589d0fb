use crate::core::bounds::Bounds;
use crate::core::constants::CELL_SPAN;
use crate::core::geometry::create_cell_polygon;
use crate::core::grid::{pin_to_bounds, point_to_pin};
use crate::util::coord::Coordinate;
use crate::util::error::DigipinError;
use crate::util::format::{format_pin, normalize_pin};
use geo_types::{LineString, Point, Polygon};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single level-10 cell in the DIGIPIN grid.
///
/// Each `PinCell` carries its 10-symbol pin, the cell centroid, and the cell
/// rectangle in WGS84 coordinates.
///
/// # Example
///
/// ```
/// use digipin_rs::PinCell;
///
/// # fn main() -> Result<(), digipin_rs::DigipinError> {
/// // Dak Bhawan, New Delhi
/// let cell = PinCell::from_latlon(28.622788, 77.213033)?;
/// assert_eq!(cell.formatted(), "39J-49L-L8T4");
///
/// // Convert to polygon for GIS operations
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinCell {
    /// The 10-symbol pin in canonical form (uppercase, no separators)
    pub id: String,
    /// Cell centroid (x = longitude, y = latitude)
    pub center: Point<f64>,
    /// The cell rectangle addressed by the pin
    pub bounds: Bounds,
}

impl PinCell {
    pub(crate) fn new(id: String, center: Point<f64>, bounds: Bounds) -> Self {
        Self { id, center, bounds }
    }

    /// Create a PinCell from a pin string.
    ///
    /// Accepts any cosmetic formatting; the stored id is canonical.
    ///
    /// # Example
    /// ```
    /// use digipin_rs::PinCell;
    ///
    /// # fn main() -> Result<(), digipin_rs::DigipinError> {
    /// let cell = PinCell::from_pin("39J-49L-L8T4")?;
    /// assert_eq!(cell.id, "39J49LL8T4");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_pin(pin: &str) -> Result<Self, DigipinError> {
        let bounds = pin_to_bounds(pin)?;
        Ok(Self::new(normalize_pin(pin), bounds.center(), bounds))
    }

    /// Create a PinCell from a WGS84 coordinate (x = longitude, y = latitude)
    ///
    /// # Example
    /// ```
    /// use digipin_rs::PinCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), digipin_rs::DigipinError> {
    /// // From tuple
    /// let cell = PinCell::from_wgs84(&(77.213033, 28.622788))?;
    /// // From Point
    /// let cell = PinCell::from_wgs84(&Point::new(77.213033, 28.622788))?;
    /// println!("DIGIPIN: {}", cell.id);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84<C: Coordinate>(coord: &C) -> Result<Self, DigipinError> {
        let pin = point_to_pin(coord)?;
        let bounds = pin_to_bounds(&pin)?;
        Ok(Self::new(pin, bounds.center(), bounds))
    }

    /// Create a PinCell from latitude/longitude in the usual spoken order.
    pub fn from_latlon(lat: f64, lon: f64) -> Result<Self, DigipinError> {
        Self::from_wgs84(&(lon, lat))
    }

    /// Create PinCells along a LineString in WGS84 coordinates.
    ///
    /// Samples points along the line at half-cell steps and returns all
    /// unique cells it passes through. Fails if any vertex leaves the
    /// DIGIPIN region.
    pub fn from_line_string(line: &LineString) -> Result<Vec<Self>, DigipinError> {
        let step_size = CELL_SPAN * 0.5;

        let total_length: f64 = line
            .0
            .windows(2)
            .map(|w| {
                let dx = w[1].x - w[0].x;
                let dy = w[1].y - w[0].y;
                (dx * dx + dy * dy).sqrt()
            })
            .sum();
        let estimated_cells = ((total_length / CELL_SPAN) * 1.5) as usize + line.0.len();

        let mut seen: HashSet<String> = HashSet::with_capacity(estimated_cells);
        let mut cells: Vec<PinCell> = Vec::with_capacity(estimated_cells);

        for window in line.0.windows(2) {
            let start = &window[0];
            let end = &window[1];

            let dx = end.x - start.x;
            let dy = end.y - start.y;
            let segment_length = (dx * dx + dy * dy).sqrt();
            let steps = (segment_length / step_size).ceil() as usize;

            for i in 0..=steps {
                let t = if steps == 0 {
                    0.0
                } else {
                    i as f64 / steps as f64
                };
                let x = start.x + t * dx;
                let y = start.y + t * dy;

                let pin = point_to_pin(&(x, y))?;
                if seen.insert(pin.clone()) {
                    let bounds = pin_to_bounds(&pin)?;
                    cells.push(PinCell::new(pin, bounds.center(), bounds));
                }
            }
        }

        Ok(cells)
    }

    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    pub fn longitude(&self) -> f64 {
        self.center.x()
    }

    /// The pin in 3-3-4 display form, e.g. `39J-49L-L8T4`.
    pub fn formatted(&self) -> String {
        format_pin(&self.id)
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        create_cell_polygon(&self.bounds)
    }

    /// The cell as a GeoJSON feature with the pin as a `digipin` property.
    pub fn to_geojson_feature(&self) -> geojson::Feature {
        let geometry = geojson::Geometry::from(&self.to_polygon());

        let mut properties = serde_json::Map::new();
        properties.insert(
            "digipin".to_string(),
            serde_json::Value::String(self.id.clone()),
        );

        geojson::Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::line_string;

    #[test]
    fn test_from_latlon() -> Result<(), DigipinError> {
        let cell = PinCell::from_latlon(28.622788, 77.213033)?;

        assert_eq!(cell.id, "39J49LL8T4");
        assert_eq!(cell.formatted(), "39J-49L-L8T4");
        assert!(cell.bounds.contains(28.622788, 77.213033));
        Ok(())
    }

    #[test]
    fn test_from_pin_normalizes() -> Result<(), DigipinError> {
        let cell = PinCell::from_pin("39j-49l-l8t4")?;
        assert_eq!(cell.id, "39J49LL8T4");
        Ok(())
    }

    #[test]
    fn test_same_point_same_cell() -> Result<(), DigipinError> {
        // The same point should always return the same cell
        let cell1 = PinCell::from_latlon(12.9716, 77.5946)?;
        let cell2 = PinCell::from_latlon(12.9716, 77.5946)?;
        assert_eq!(cell1, cell2);

        // A point inside the cell rectangle maps to the same cell
        let cell3 = PinCell::from_latlon(cell1.latitude(), cell1.longitude())?;
        assert_eq!(cell1.id, cell3.id);
        Ok(())
    }

    #[test]
    fn test_roundtrip_through_pin() -> Result<(), DigipinError> {
        let cell = PinCell::from_latlon(21.1861, 81.3071)?;
        let restored = PinCell::from_pin(&cell.id)?;

        assert_eq!(cell, restored);
        Ok(())
    }

    #[test]
    fn test_to_polygon() -> Result<(), DigipinError> {
        let cell = PinCell::from_latlon(20.5, 81.5)?;
        let polygon = cell.to_polygon();

        assert_eq!(polygon.exterior().coords().count(), 5);
        Ok(())
    }

    #[test]
    fn test_to_geojson_feature() -> Result<(), DigipinError> {
        let cell = PinCell::from_latlon(28.622788, 77.213033)?;
        let feature = cell.to_geojson_feature();

        assert!(feature.geometry.is_some());
        let properties = feature.properties.expect("feature has properties");
        assert_eq!(
            properties.get("digipin"),
            Some(&serde_json::Value::String("39J49LL8T4".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_from_line_string() -> Result<(), DigipinError> {
        let line = line_string![
            (x: 77.5946, y: 12.9716),
            (x: 77.5950, y: 12.9720),
        ];
        let cells = PinCell::from_line_string(&line)?;

        assert!(!cells.is_empty());
        // All cells unique
        let ids: HashSet<&str> = cells.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), cells.len());
        // Endpoints are covered
        assert!(ids.contains(PinCell::from_latlon(12.9716, 77.5946)?.id.as_str()));
        assert!(ids.contains(PinCell::from_latlon(12.9720, 77.5950)?.id.as_str()));
        Ok(())
    }

    #[test]
    fn test_from_line_string_out_of_range() {
        let line = line_string![
            (x: 0.0, y: 51.5),
            (x: 0.1, y: 51.6),
        ];
        assert!(matches!(
            PinCell::from_line_string(&line),
            Err(DigipinError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_serde_roundtrip() -> Result<(), DigipinError> {
        let cell = PinCell::from_latlon(28.622788, 77.213033)?;
        let json = serde_json::to_string(&cell)
            .map_err(|e| DigipinError::IoError(e.to_string()))?;
        let back: PinCell =
            serde_json::from_str(&json).map_err(|e| DigipinError::IoError(e.to_string()))?;
        assert_eq!(cell, back);
        Ok(())
    }
}
