/// Error type for digipin-rs operations.
#[derive(Debug, PartialEq)]
pub enum DigipinError {
    /// The coordinate lies outside the DIGIPIN region.
    OutOfRange { lat: f64, lon: f64 },
    /// The normalized pin is not exactly 10 symbols long.
    InvalidLength(usize),
    /// The pin contains a character outside the 16-symbol table.
    InvalidSymbol(char),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or writing error.
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl std::fmt::Display for DigipinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigipinError::OutOfRange { lat, lon } => {
                write!(f, "Coordinate ({}, {}) outside DIGIPIN range (India)", lat, lon)
            }
            DigipinError::InvalidLength(len) => {
                write!(f, "DIGIPIN must be exactly 10 symbols, got {}", len)
            }
            DigipinError::InvalidSymbol(c) => write!(f, "Invalid character '{}' in DIGIPIN", c),
            DigipinError::IoError(msg) => write!(f, "IO error: {}", msg),
            DigipinError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            DigipinError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for DigipinError {}
