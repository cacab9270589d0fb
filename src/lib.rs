//! # digipin-rs
//!
//! DIGIPIN is India Post's national addressing grid: ten levels of 4x4
//! subdivision map any point in a fixed region covering India to a 10-symbol
//! pin, and back to the centroid of the addressed cell (about 3.8m x 3.8m).
//!
//! There are currently three main entry points.
//!
//! ### 1. `PinCell` - Single Cell Operations
//!
//! ```
//! use digipin_rs::PinCell;
//!
//! # fn main() -> Result<(), digipin_rs::DigipinError> {
//! let cell = PinCell::from_latlon(28.622788, 77.213033)?;
//! println!("{}", cell.formatted()); // 39J-49L-L8T4
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Codec functions - Pins Without the Cell Type
//!
//! ```
//! use digipin_rs::{pin_to_point, point_to_pin};
//! use geo_types::point;
//!
//! # fn main() -> Result<(), digipin_rs::DigipinError> {
//! let pt = point! { x: 77.213033, y: 28.622788 };
//! let pin = point_to_pin(&pt)?;
//! let center = pin_to_point(&pin)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToPin` - CSV File Conversion
//!
//! Convert CSV files with geometry columns (WKT or GeoJSON) or lon/lat
//! columns to DIGIPIN-indexed CSVs:
//!
//! ```no_run
//! use digipin_rs::{CsvPinConfig, CsvToPin, GeometryFormat};
//!
//! let config = CsvPinConfig::new("geometry")
//!     .exclude(vec!["Geo Point".into()])
//!     .with_cell_geometry(GeometryFormat::Wkt);
//!
//! // Using trait method
//! "input.csv".to_pin_csv("output.csv", &config).unwrap();
//! ```
//!
//! Or use separate coordinate columns:
//!
//! ```no_run
//! use digipin_rs::{CsvPinConfig, csv_to_pin_csv};
//!
//! let config = CsvPinConfig::from_coords("Longitude", "Latitude");
//!
//! csv_to_pin_csv("post_offices.csv", "output.csv", &config).unwrap();
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    CoordinateSource, CsvPinConfig, CsvToPin, GeometryFormat, PinCell, csv_to_pin_csv,
};
pub use core::{
    Bounds, CELL_SPAN, DIGIPIN_BOUNDS, GRID_EXTENTS, GRID_SIZE, PIN_LENGTH, SEPARATOR,
    SYMBOL_GRID, create_cell_polygon, pin_to_bounds, pin_to_point, point_to_pin, symbol_position,
};
pub use util::{Coordinate, DigipinError, format_pin, normalize_pin};

pub use geo_types;
