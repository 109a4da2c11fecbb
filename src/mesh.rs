use std::ops::Range;
use serde::{Deserialize, Serialize};
use crate::hydro::error::Error;
use crate::index_space::{Axis, IndexSpace};




/// Number of guard zones on each side of an active axis.
pub const NUM_GUARD: i64 = 1;




/**
 * Number of spatial dimensions the mesh resolves. A one-dimensional mesh has
 * a single zone along the second axis and no guard zones on it.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    One,
    Two,
}




/// A simple rectilinear structured mesh
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub area: (Range<f64>, Range<f64>),
    pub size: (usize, usize),
    pub rank: Rank,
}




// ============================================================================
impl Mesh {

    /**
     * A one-dimensional mesh over `x`, with `nx` zones. The second axis spans
     * a unit extent that never enters the update.
     */
    pub fn new_1d(x: Range<f64>, nx: usize) -> Result<Self, Error> {
        let mesh = Self { area: (x, 0.0..1.0), size: (nx, 1), rank: Rank::One };
        mesh.validate()?;
        Ok(mesh)
    }

    pub fn new_2d(area: (Range<f64>, Range<f64>), size: (usize, usize)) -> Result<Self, Error> {
        let mesh = Self { area, size, rank: Rank::Two };
        mesh.validate()?;
        Ok(mesh)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let (x, y) = &self.area;

        if self.size.0 == 0 || self.size.1 == 0 {
            Err(Error::InvalidMesh(format!("zone count must be positive, got {:?}", self.size)))
        } else if self.rank == Rank::One && self.size.1 != 1 {
            Err(Error::InvalidMesh("a one-dimensional mesh has one zone on the second axis".into()))
        } else if !(x.end > x.start) || !(y.end > y.start) {
            Err(Error::InvalidMesh(format!("domain extent must be positive, got {:?}", self.area)))
        } else if !(x.start.is_finite() && x.end.is_finite() && y.start.is_finite() && y.end.is_finite()) {
            Err(Error::InvalidMesh("domain extent must be finite".into()))
        } else {
            Ok(())
        }
    }

    pub fn cell_spacing(&self) -> (f64, f64) {
        let d0 = (self.area.0.end - self.area.0.start) / self.size.0 as f64;
        let d1 = (self.area.1.end - self.area.1.start) / self.size.1 as f64;
        (d0, d1)
    }

    /**
     * The smallest zone width over the axes the mesh resolves.
     */
    pub fn min_spacing(&self) -> f64 {
        let (dx, dy) = self.cell_spacing();
        match self.rank {
            Rank::One => dx,
            Rank::Two => dx.min(dy),
        }
    }

    pub fn cell_volume(&self) -> f64 {
        let (dx, dy) = self.cell_spacing();
        match self.rank {
            Rank::One => dx,
            Rank::Two => dx * dy,
        }
    }

    pub fn cell_center(&self, index: (i64, i64)) -> (f64, f64) {
        let (d0, d1) = self.cell_spacing();
        let x0 = self.area.0.start + d0 * (index.0 as f64 + 0.5);
        let x1 = self.area.1.start + d1 * (index.1 as f64 + 0.5);
        (x0, x1)
    }

    pub fn total_zones(&self) -> usize {
        self.size.0 * self.size.1
    }

    /**
     * The axes along which the solution varies, in sweep order.
     */
    pub fn axes(&self) -> &'static [Axis] {
        match self.rank {
            Rank::One => &[Axis::I],
            Rank::Two => &[Axis::I, Axis::J],
        }
    }

    /**
     * The index space of the interior zones.
     */
    pub fn index_space(&self) -> IndexSpace {
        IndexSpace::new(0..self.size.0 as i64, 0..self.size.1 as i64)
    }

    /**
     * The index space of the interior zones plus the guard layer on each
     * active axis.
     */
    pub fn extended_index_space(&self) -> IndexSpace {
        self.axes()
            .iter()
            .fold(self.index_space(), |space, &axis| space.extend_axis(NUM_GUARD, axis))
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{Mesh, Rank};
    use crate::index_space::range2d;

    #[test]
    fn one_dimensional_mesh_has_guards_on_one_axis() {
        let mesh = Mesh::new_1d(0.0..1.0, 500).unwrap();
        assert_eq!(mesh.rank, Rank::One);
        assert_eq!(mesh.extended_index_space(), range2d(-1..501, 0..1));
        assert_eq!(mesh.min_spacing(), 1.0 / 500.0);
        assert_eq!(mesh.cell_center((0, 0)).0, 0.001);
    }

    #[test]
    fn two_dimensional_mesh_uses_smallest_spacing() {
        let mesh = Mesh::new_2d((0.0..1.0, 0.0..0.2), (400, 80)).unwrap();
        assert_eq!(mesh.extended_index_space(), range2d(-1..401, -1..81));
        let (dx, dy) = mesh.cell_spacing();
        assert!((dx - 0.0025).abs() < 1e-15 && (dy - 0.0025).abs() < 1e-15);
        assert_eq!(mesh.min_spacing(), dx.min(dy));
        assert_eq!(mesh.total_zones(), 32000);
    }

    #[test]
    fn degenerate_meshes_are_rejected() {
        assert!(Mesh::new_1d(0.0..1.0, 0).is_err());
        assert!(Mesh::new_1d(1.0..0.0, 10).is_err());
        assert!(Mesh::new_2d((0.0..1.0, 0.0..f64::INFINITY), (4, 4)).is_err());
        assert!(Mesh::new_2d((0.0..1.0, 0.0..0.0), (4, 4)).is_err());
    }
}
