use serde::{Deserialize, Serialize};
use crate::hydro::euler::Conserved;
use crate::hydro::geometry::Direction;
use crate::index_space::{Axis, IndexSpace};
use crate::mesh::{Mesh, NUM_GUARD};
use crate::patch::Patch;




/**
 * The condition imposed at the two ends of one axis of the domain.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryCondition {
    /// A solid wall: the guard zone mirrors its interior neighbor with the
    /// normal momentum negated, so the normal velocity vanishes at the wall.
    Reflective,
    /// Zero-gradient outflow: the guard zone copies its interior neighbor.
    Transmissive,
}

impl Default for BoundaryCondition {
    fn default() -> Self {
        BoundaryCondition::Reflective
    }
}




/**
 * Boundary conditions on each axis of the domain. The second axis is ignored
 * for one-dimensional meshes.
 */
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundaries {
    pub x: BoundaryCondition,
    pub y: BoundaryCondition,
}

impl Boundaries {
    pub fn reflective() -> Self {
        Self { x: BoundaryCondition::Reflective, y: BoundaryCondition::Reflective }
    }

    pub fn on(&self, axis: Axis) -> BoundaryCondition {
        match axis {
            Axis::I => self.x,
            Axis::J => self.y,
        }
    }
}




// ============================================================================
impl BoundaryCondition {

    /**
     * Return the guard zone value next to the interior zone `interior`, on a
     * boundary normal to `direction`.
     */
    pub fn guard_value(&self, interior: Conserved, direction: Direction) -> Conserved {
        match self {
            BoundaryCondition::Reflective => interior.reflect(direction),
            BoundaryCondition::Transmissive => interior,
        }
    }
}




/// Fill the guard zones of a patch of conserved variables covering the
/// mesh's extended index space. Each guard zone is computed from the interior
/// zone adjacent to it across the boundary. Axes are filled in sweep order,
/// and each pass covers the whole extended range of the other axis, so the
/// corner zones of a two-dimensional patch are filled by the second pass.
///
pub fn apply_boundaries(conserved: &mut Patch, mesh: &Mesh, boundaries: &Boundaries) {
    let extended = mesh.extended_index_space();
    let interior = mesh.index_space();

    assert_eq!(conserved.index_space(), &extended, "patch does not cover the extended mesh");

    for &axis in mesh.axes() {
        let condition = boundaries.on(axis);
        let direction = Direction::from(axis);
        let (lo, hi) = (interior.range(axis).start, interior.range(axis).end);

        fill_slab(conserved, &extended.lower_slab(NUM_GUARD, axis), axis, condition, direction, |n| 2 * lo - 1 - n);
        fill_slab(conserved, &extended.upper_slab(NUM_GUARD, axis), axis, condition, direction, |n| 2 * hi - 1 - n);
    }
}

fn fill_slab<M>(
    conserved: &mut Patch,
    slab: &IndexSpace,
    axis: Axis,
    condition: BoundaryCondition,
    direction: Direction,
    mirror: M,
) where
    M: Fn(i64) -> i64,
{
    for (i, j) in slab.iter() {
        let source = match axis {
            Axis::I => (mirror(i), j),
            Axis::J => (i, mirror(j)),
        };
        let u = Conserved::from_slice(conserved.get_slice(source));
        condition.guard_value(u, direction).write_to_slice(conserved.get_slice_mut((i, j)));
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{apply_boundaries, BoundaryCondition, Boundaries};
    use crate::hydro::euler::{Conserved, Primitive, NUM_FIELDS};
    use crate::mesh::Mesh;
    use crate::patch::Patch;

    const GAMMA: f64 = 1.4;

    fn sample_patch(mesh: &Mesh) -> Patch {
        Patch::from_slice_function(mesh.extended_index_space(), NUM_FIELDS, |(i, j), s| {
            let p = Primitive::new(1.0 + 0.1 * i as f64, 0.3 + 0.01 * j as f64, -0.2, 1.0 + 0.05 * j as f64);
            p.to_conserved(GAMMA).write_to_slice(s)
        })
    }

    #[test]
    fn reflective_guards_mirror_the_interior_with_negated_normal_momentum() {
        let mesh = Mesh::new_2d((0.0..1.0, 0.0..1.0), (6, 4)).unwrap();
        let mut patch = sample_patch(&mesh);
        apply_boundaries(&mut patch, &mesh, &Boundaries::reflective());

        for j in 0..4 {
            for &(g, n) in &[(-1, 0), (6, 5)] {
                let ug = Conserved::from_slice(patch.get_slice((g, j)));
                let un = Conserved::from_slice(patch.get_slice((n, j)));
                assert_eq!(ug.mass_density(), un.mass_density());
                assert_eq!(ug.momentum_1(), -un.momentum_1());
                assert_eq!(ug.momentum_2(), un.momentum_2());
                assert_eq!(ug.to_primitive(GAMMA).gas_pressure(), un.to_primitive(GAMMA).gas_pressure());
            }
        }
        for i in 0..6 {
            for &(g, n) in &[(-1, 0), (4, 3)] {
                let ug = Conserved::from_slice(patch.get_slice((i, g)));
                let un = Conserved::from_slice(patch.get_slice((i, n)));
                assert_eq!(ug.mass_density(), un.mass_density());
                assert_eq!(ug.momentum_1(), un.momentum_1());
                assert_eq!(ug.momentum_2(), -un.momentum_2());
                assert_eq!(ug.energy_density(), un.energy_density());
            }
        }
    }

    #[test]
    fn corner_guards_are_filled_from_the_x_guards() {
        let mesh = Mesh::new_2d((0.0..1.0, 0.0..1.0), (3, 3)).unwrap();
        let mut patch = sample_patch(&mesh);
        apply_boundaries(&mut patch, &mesh, &Boundaries::reflective());

        let corner = Conserved::from_slice(patch.get_slice((-1, -1)));
        let inner = Conserved::from_slice(patch.get_slice((0, 0)));
        assert_eq!(corner, inner.reflect(crate::hydro::geometry::Direction::X).reflect(crate::hydro::geometry::Direction::Y));
    }

    #[test]
    fn transmissive_guards_copy_the_interior() {
        let mesh = Mesh::new_1d(0.0..1.0, 8).unwrap();
        let mut patch = sample_patch(&mesh);
        let boundaries = Boundaries { x: BoundaryCondition::Transmissive, y: BoundaryCondition::Reflective };
        apply_boundaries(&mut patch, &mesh, &boundaries);
        assert_eq!(patch.get_slice((-1, 0)), patch.get_slice((0, 0)));
        assert_eq!(patch.get_slice((8, 0)), patch.get_slice((7, 0)));
    }

    #[test]
    fn one_dimensional_patch_has_no_y_guards() {
        let mesh = Mesh::new_1d(0.0..1.0, 8).unwrap();
        let mut patch = sample_patch(&mesh);
        apply_boundaries(&mut patch, &mesh, &Boundaries::reflective());
        assert_eq!(patch.index_space().dim(), (10, 1));
        assert_eq!(patch.get_slice((-1, 0))[1], -patch.get_slice((0, 0))[1]);
    }
}
