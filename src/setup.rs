use serde::{Deserialize, Serialize};
use crate::hydro::euler::Primitive;




/**
 * An initial condition profile: a pure function of position yielding the
 * primitive state at that point.
 */
pub trait InitialCondition {
    fn primitive_at(&self, position: (f64, f64)) -> Primitive;
}

impl<F> InitialCondition for F
where
    F: Fn((f64, f64)) -> Primitive,
{
    fn primitive_at(&self, position: (f64, f64)) -> Primitive {
        self(position)
    }
}




/**
 * Two constant states separated by a plane normal to the x-axis. Points with
 * x < `position` take the left state.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShockTube {
    pub position: f64,
    pub left: Primitive,
    pub right: Primitive,
}

impl ShockTube {

    /// Sod's problem: (1, 0, 1) on the left, (0.125, 0, 0.1) on the right,
    /// with the diaphragm at x = 0.5.
    pub fn sod() -> Self {
        Self {
            position: 0.5,
            left: Primitive::new(1.0, 0.0, 0.0, 1.0),
            right: Primitive::new(0.125, 0.0, 0.0, 0.1),
        }
    }
}

impl InitialCondition for ShockTube {
    fn primitive_at(&self, position: (f64, f64)) -> Primitive {
        if position.0 < self.position {
            self.left
        } else {
            self.right
        }
    }
}
