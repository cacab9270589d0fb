use crate::api::pin_cell::PinCell;
use crate::util::error::DigipinError;
use geo::Centroid;
use geo_types::Geometry;
use geojson::GeoJson;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

/// For the type of location source in the file
enum SourceIndices {
    Geometry(usize),
    Coordinates { lon_idx: usize, lat_idx: usize },
}

/// Output format for cell geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Specifies how to extract location data from CSV rows.
#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry in WGS84
    GeometryColumn(String),
    /// Separate longitude and latitude columns
    CoordinateColumns { lon_column: String, lat_column: String },
}

/// Configuration for CSV to DIGIPIN conversion.
#[derive(Debug, Clone)]
pub struct CsvPinConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub include_cell_geometry: Option<GeometryFormat>,
}

impl CsvPinConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use digipin_rs::CsvPinConfig;
    ///
    /// let config = CsvPinConfig::new("geometry");
    /// ```
    pub fn new(geometry_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            include_cell_geometry: None,
        }
    }

    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use digipin_rs::CsvPinConfig;
    ///
    /// let config = CsvPinConfig::from_coords("Longitude", "Latitude");
    /// ```
    pub fn from_coords(
        lon_column: impl Into<String>,
        lat_column: impl Into<String>,
    ) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lon_column: lon_column.into(),
                lat_column: lat_column.into(),
            },
            exclude_columns: Vec::new(),
            include_cell_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the level-10 cell polygon in the output.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }
}

pub trait CsvToPin {
    fn to_pin_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvPinConfig,
    ) -> Result<(), DigipinError>;
}

impl<P: AsRef<Path>> CsvToPin for P {
    fn to_pin_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvPinConfig,
    ) -> Result<(), DigipinError> {
        csv_to_pin_csv(self, output_path, config)
    }
}

fn parse_geometry(s: &str) -> Result<Geometry<f64>, DigipinError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

fn parse_geojson(s: &str) -> Result<Geometry<f64>, DigipinError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| DigipinError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => {
            Geometry::try_from(geom).map_err(|e| DigipinError::GeometryParseError(e.to_string()))
        }
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| DigipinError::GeometryParseError("Feature has no geometry".to_string()))
            .and_then(|g| {
                Geometry::try_from(g).map_err(|e| DigipinError::GeometryParseError(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(DigipinError::GeometryParseError(
            "FeatureCollection not supported, use individual geometries".to_string(),
        )),
    }
}

fn parse_wkt(s: &str) -> Result<Geometry<f64>, DigipinError> {
    let wkt: wkt::Wkt<f64> =
        wkt::Wkt::from_str(s).map_err(|e| DigipinError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        DigipinError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}

fn polygon_to_wkt(polygon: &geo_types::Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &geo_types::Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

fn geometry_to_pin_cells(geom: Geometry<f64>) -> Result<Vec<PinCell>, DigipinError> {
    match geom {
        Geometry::Point(pt) => Ok(vec![PinCell::from_wgs84(&pt)?]),
        Geometry::MultiPoint(mp) => {
            let mut cells = Vec::new();
            for pt in mp.0 {
                cells.push(PinCell::from_wgs84(&pt)?);
            }
            Ok(cells)
        }
        Geometry::LineString(line) => PinCell::from_line_string(&line),
        Geometry::MultiLineString(mls) => {
            let mut all_cells = Vec::new();
            let mut seen = HashSet::new();
            for line in mls.0 {
                for cell in PinCell::from_line_string(&line)? {
                    if seen.insert(cell.id.clone()) {
                        all_cells.push(cell);
                    }
                }
            }
            Ok(all_cells)
        }
        Geometry::Polygon(poly) => match poly.centroid() {
            Some(centroid) => Ok(vec![PinCell::from_wgs84(&centroid)?]),
            None => Ok(vec![]),
        },
        Geometry::MultiPolygon(mp) => {
            let mut cells = Vec::new();
            for poly in mp.0 {
                if let Some(centroid) = poly.centroid() {
                    cells.push(PinCell::from_wgs84(&centroid)?);
                }
            }
            Ok(cells)
        }
        Geometry::GeometryCollection(gc) => {
            let mut all_cells = Vec::new();
            for g in gc.0 {
                all_cells.extend(geometry_to_pin_cells(g)?);
            }
            Ok(all_cells)
        }
        _ => Err(DigipinError::GeometryParseError(
            "Unsupported geometry type".to_string(),
        )),
    }
}

// ============================================================================
// CSV Conversion
// ============================================================================

/// Converts a CSV file with geometry or coordinate columns to a CSV file with
/// a `digipin` column.
///
/// Streams output to minimize memory usage for large files. Rows whose
/// location falls outside the DIGIPIN region fail the conversion with
/// [`DigipinError::OutOfRange`].
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use digipin_rs::{csv_to_pin_csv, CsvPinConfig, GeometryFormat};
///
/// let config = CsvPinConfig::new("Geo Shape")
///     .exclude(vec!["Geo Point".into()])
///     .with_cell_geometry(GeometryFormat::Wkt);
///
/// csv_to_pin_csv("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use digipin_rs::{csv_to_pin_csv, CsvPinConfig};
///
/// let config = CsvPinConfig::from_coords("Longitude", "Latitude");
///
/// csv_to_pin_csv("post_offices.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_pin_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvPinConfig,
) -> Result<(), DigipinError> {
    let file = File::open(csv_path).map_err(|e| DigipinError::CsvError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| DigipinError::CsvError(e.to_string()))?
        .clone();

    // Determine which columns to exclude based on source type
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = headers.iter().position(|h| h == col).ok_or_else(|| {
                DigipinError::CsvError(format!("Geometry column '{}' not found", col))
            })?;
            let mut exclude = HashSet::new();
            exclude.insert(idx);
            (SourceIndices::Geometry(idx), exclude)
        }
        CoordinateSource::CoordinateColumns { lon_column, lat_column } => {
            let lon_idx = headers.iter().position(|h| h == lon_column).ok_or_else(|| {
                DigipinError::CsvError(format!("Longitude column '{}' not found", lon_column))
            })?;
            let lat_idx = headers.iter().position(|h| h == lat_column).ok_or_else(|| {
                DigipinError::CsvError(format!("Latitude column '{}' not found", lat_column))
            })?;
            let mut exclude = HashSet::new();
            exclude.insert(lon_idx);
            exclude.insert(lat_idx);
            (SourceIndices::Coordinates { lon_idx, lat_idx }, exclude)
        }
    };

    // Add user-specified exclusions
    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| DigipinError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    // Write header row
    let mut header_row: Vec<&str> = vec!["digipin"];
    if config.include_cell_geometry.is_some() {
        header_row.push("digipin_cell");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| DigipinError::CsvError(e.to_string()))?;

    // Process rows
    for result in reader.records() {
        let record = result.map_err(|e| DigipinError::CsvError(e.to_string()))?;

        let cells = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    DigipinError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                let geom = parse_geometry(geom_str)?;
                geometry_to_pin_cells(geom)?
            }
            SourceIndices::Coordinates { lon_idx, lat_idx } => {
                let lon_str = record
                    .get(*lon_idx)
                    .ok_or_else(|| {
                        DigipinError::CsvError(format!(
                            "Missing longitude column at index {}",
                            lon_idx
                        ))
                    })?
                    .trim();
                let lat_str = record
                    .get(*lat_idx)
                    .ok_or_else(|| {
                        DigipinError::CsvError(format!(
                            "Missing latitude column at index {}",
                            lat_idx
                        ))
                    })?
                    .trim();

                let lon: f64 = lon_str.parse().map_err(|_| {
                    DigipinError::CsvError(format!("Invalid longitude: '{}'", lon_str))
                })?;
                let lat: f64 = lat_str.parse().map_err(|_| {
                    DigipinError::CsvError(format!("Invalid latitude: '{}'", lat_str))
                })?;

                vec![PinCell::from_wgs84(&(lon, lat))?]
            }
        };

        for cell in cells {
            let mut row: Vec<String> = vec![cell.id.clone()];

            if let Some(format) = config.include_cell_geometry {
                let polygon = cell.to_polygon();
                let geom_str = match format {
                    GeometryFormat::Wkt => polygon_to_wkt(&polygon),
                    GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
                };
                row.push(geom_str);
            }

            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer
                .write_record(&row)
                .map_err(|e| DigipinError::CsvError(e.to_string()))?;
        }
    }

    writer
        .flush()
        .map_err(|e| DigipinError::CsvError(e.to_string()))?;

    Ok(())
}
