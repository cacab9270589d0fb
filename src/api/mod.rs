pub mod pin_cell;
pub mod pin_csv;

pub use pin_cell::PinCell;
pub use pin_csv::{CoordinateSource, CsvPinConfig, CsvToPin, GeometryFormat, csv_to_pin_csv};
