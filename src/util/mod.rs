pub mod coord;
pub mod error;
pub mod format;

pub use coord::Coordinate;
pub use error::DigipinError;
pub use format::{format_pin, normalize_pin};
