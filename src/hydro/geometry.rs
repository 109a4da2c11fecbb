use crate::index_space::Axis;




/**
 * Enum to hold a unit vector in the plane. The direction selects which
 * velocity component is normal to a cell interface.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    X,
    Y,
}




// ============================================================================
impl Direction {

    /**
     * Return the projection of this unit vector onto another one.
     */
    pub fn along(&self, other: Direction) -> f64 {
        match (self, other) {
            (Direction::X, Direction::X) => 1.0,
            (Direction::Y, Direction::Y) => 1.0,
            _ => 0.0,
        }
    }
}

impl From<Axis> for Direction {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::I => Direction::X,
            Axis::J => Direction::Y,
        }
    }
}





// ============================================================================
#[cfg(test)]
mod test {

    use super::Direction;
    use crate::index_space::Axis;

    #[test]
    fn projection_is_kronecker_delta() {
        assert_eq!(Direction::X.along(Direction::X), 1.0);
        assert_eq!(Direction::X.along(Direction::Y), 0.0);
        assert_eq!(Direction::Y.along(Direction::X), 0.0);
        assert_eq!(Direction::Y.along(Direction::Y), 1.0);
    }

    #[test]
    fn axes_map_to_directions() {
        assert_eq!(Direction::from(Axis::I), Direction::X);
        assert_eq!(Direction::from(Axis::J), Direction::Y);
    }
}
