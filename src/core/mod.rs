pub mod bounds;
pub mod constants;
pub mod geometry;
pub mod grid;

pub use bounds::{Bounds, DIGIPIN_BOUNDS};
pub use constants::{
    CELL_SPAN, GRID_EXTENTS, GRID_SIZE, PIN_LENGTH, SEPARATOR, SYMBOL_GRID, symbol_position,
};
pub use geometry::create_cell_polygon;
pub use grid::{pin_to_bounds, pin_to_point, point_to_pin};
