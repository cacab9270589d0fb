use geo_types::Point;

/// Anything that can supply an x/y pair (x = longitude, y = latitude).
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 { self.0 }
    fn y(&self) -> f64 { self.1 }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 { Point::x(*self) }
    fn y(&self) -> f64 { Point::y(*self) }
}

impl Coordinate for geo_types::Coord<f64> {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::point_to_pin;
    use crate::util::error::DigipinError;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (81.3071, 21.1861);
        assert_eq!(tuple.x(), 81.3071);
        assert_eq!(tuple.y(), 21.1861);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(81.3071, 21.1861);
        assert_eq!(point.x(), 81.3071);
        assert_eq!(point.y(), 21.1861);
    }

    #[test]
    fn test_same_pin_tuple_and_point() -> Result<(), DigipinError> {
        let from_tuple = point_to_pin(&(81.3071, 21.1861))?;
        let from_point = point_to_pin(&Point::new(81.3071, 21.1861))?;
        assert_eq!(from_tuple, from_point);
        Ok(())
    }

    #[test]
    fn test_generic_function_accepts_both_types() -> Result<(), DigipinError> {
        fn encode<C: Coordinate>(coord: &C) -> Result<String, DigipinError> {
            point_to_pin(coord)
        }

        let tuple_result = encode(&(77.5946, 12.9716))?;
        let point_result = encode(&Point::new(77.5946, 12.9716))?;
        assert_eq!(tuple_result, point_result);
        Ok(())
    }
}
