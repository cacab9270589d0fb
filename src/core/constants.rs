/// The official 4x4 DIGIPIN symbol table.
///
/// Row 0 is the northernmost latitude band. The 16 symbols are distinct, so
/// the table is a bijection between (row, col) and the symbol set.
pub const SYMBOL_GRID: [[char; 4]; 4] = [
    ['F', 'C', '9', '8'],
    ['J', '3', '2', '7'],
    ['K', '4', '5', '6'],
    ['L', 'M', 'P', 'T'],
];

/// Region extents [min_lat, max_lat, min_lon, max_lon] covering India.
pub const GRID_EXTENTS: [f64; 4] = [2.5, 38.5, 63.5, 99.5];

/// Number of subdivision levels, one symbol each.
pub const PIN_LENGTH: usize = 10;

/// Rows/columns per subdivision level.
pub const GRID_SIZE: usize = 4;

/// Separator inserted after the 3rd and 6th symbol for display.
pub const SEPARATOR: char = '-';

/// Span of a level-10 cell in degrees, identical on both axes
/// (the region is square and every level divides by 4).
pub const CELL_SPAN: f64 = (GRID_EXTENTS[1] - GRID_EXTENTS[0]) / 1_048_576.0;

/// Looks up the grid position of a symbol.
///
/// Returns `(row, col)` if the character is one of the 16 DIGIPIN symbols.
pub fn symbol_position(c: char) -> Option<(usize, usize)> {
    for (row, symbols) in SYMBOL_GRID.iter().enumerate() {
        for (col, &symbol) in symbols.iter().enumerate() {
            if symbol == c {
                return Some((row, col));
            }
        }
    }
    None
}
