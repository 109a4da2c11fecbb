use rayon::prelude::*;
use crate::index_space::IndexSpace;




/**
 * A patch is a mapping from a rectangular subset of an index space to
 * associated field values. Each index holds `num_fields` contiguous values,
 * and indexes are laid out in row-major order. Indexes may be negative, so a
 * patch can hold the guard zones surrounding a block of interior zones.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct Patch {
    space: IndexSpace,
    num_fields: usize,
    data: Vec<f64>,
}




// ============================================================================
impl Patch {

    /**
     * Generate a patch covering the given space, with values defined from a
     * closure which writes a slice of `num_fields` values for each index.
     */
    pub fn from_slice_function<F>(space: IndexSpace, num_fields: usize, f: F) -> Self
    where
        F: Fn((i64, i64), &mut [f64])
    {
        let mut data = vec![0.0; space.len() * num_fields];

        for (index, slice) in space.iter().zip(data.chunks_exact_mut(num_fields)) {
            f(index, slice)
        }
        Self { space, num_fields, data }
    }

    /**
     * Generate a patch in parallel, with each zone's values returned by a
     * closure evaluated on the rayon thread pool. The closure must only read
     * data that is not owned by the patch under construction.
     */
    pub fn par_from_slice_function<F>(space: IndexSpace, num_fields: usize, f: F) -> Self
    where
        F: Fn((i64, i64), &mut [f64]) + Sync
    {
        let mut data = vec![0.0; space.len() * num_fields];

        data.par_chunks_exact_mut(num_fields)
            .enumerate()
            .for_each(|(n, slice)| f(space.index_at(n), slice));

        Self { space, num_fields, data }
    }

    pub fn index_space(&self) -> &IndexSpace {
        &self.space
    }

    /**
     * Return the field values at the given index.
     */
    pub fn get_slice(&self, index: (i64, i64)) -> &[f64] {
        self.validate_index(index);
        let s = self.space.row_major_offset(index) * self.num_fields;
        &self.data[s..s + self.num_fields]
    }

    pub fn get_slice_mut(&mut self, index: (i64, i64)) -> &mut [f64] {
        self.validate_index(index);
        let s = self.space.row_major_offset(index) * self.num_fields;
        &mut self.data[s..s + self.num_fields]
    }

    /**
     * Overwrite the values on a sub-region of this patch with values from
     * another patch, which must cover the region.
     */
    pub fn copy_region_from(&mut self, other: &Patch, space: &IndexSpace) {
        assert_eq!(self.num_fields, other.num_fields);
        assert!(other.space.contains_space(space), "source patch does not cover the region");

        for index in space.iter() {
            self.get_slice_mut(index).copy_from_slice(other.get_slice(index))
        }
    }

    fn validate_index(&self, index: (i64, i64)) {
        if !self.space.contains(index) {
            let (i0, j0) = self.space.start();
            let (i1, j1) = self.space.end();
            panic!("index ({} {}) out of range on patch ({}..{} {}..{})",
                index.0,
                index.1,
                i0,
                i1,
                j0,
                j1);
        }
    }
}
