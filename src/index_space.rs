use core::ops::Range;
use rayon::prelude::*;




/**
 * Identifier for a Cartesian axis
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    I,
    J,
}




#[derive(Clone, Debug, PartialEq, Eq)]


/**
 * Represents a rectangular region in a discrete index space
 */
pub struct IndexSpace {
    di: Range<i64>,
    dj: Range<i64>,
}




/**
 * Describes a rectangular index space. The index type is signed 64-bit
 * integer, so that guard zones may carry negative indexes.
 */
impl IndexSpace {


    pub fn new(di: Range<i64>, dj: Range<i64>) -> Self {

        assert!(
            di.start <= di.end && dj.start <= dj.end,
            "index space has negative volume");

        Self { di, dj }
    }


    /**
     * Return the number of indexes on each axis.
     */
    pub fn dim(&self) -> (usize, usize) {
        ((self.di.end - self.di.start) as usize,
         (self.dj.end - self.dj.start) as usize)
    }


    /**
     * Return the number of elements in this index space.
     */
    pub fn len(&self) -> usize {
        let (l, m) = self.dim();
        l * m
    }


    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }


    /**
     * Return the minimum index (inclusive).
     */
    pub fn start(&self) -> (i64, i64) {
        (self.di.start, self.dj.start)
    }


    /**
     * Return the maximum index (exclusive).
     */
    pub fn end(&self) -> (i64, i64) {
        (self.di.end, self.dj.end)
    }


    /**
     * Return the index range along the given axis.
     */
    pub fn range(&self, axis: Axis) -> Range<i64> {
        match axis {
            Axis::I => self.di.clone(),
            Axis::J => self.dj.clone(),
        }
    }


    /**
     * Determine whether this index space contains the given index.
     */
    pub fn contains(&self, index: (i64, i64)) -> bool {
        self.di.contains(&index.0) && self.dj.contains(&index.1)
    }


    /**
     * Determine whether another index space is a subset of this one.
     */
    pub fn contains_space(&self, other: &Self) -> bool {
        other.di.start >= self.di.start && other.di.end <= self.di.end &&
        other.dj.start >= self.dj.start && other.dj.end <= self.dj.end
    }


    /**
     * Expand this index space by the given number of elements on both ends
     * of a single axis.
     */
    pub fn extend_axis(&self, delta: i64, axis: Axis) -> Self {
        match axis {
            Axis::I => Self::new(self.di.start - delta .. self.di.end + delta, self.dj.clone()),
            Axis::J => Self::new(self.di.clone(), self.dj.start - delta .. self.dj.end + delta),
        }
    }


    /**
     * Expand just the upper end of this index space on the given axis. The
     * space of cell faces normal to an axis is the cell space extended by
     * one on the upper end: face `i` separates cells `i - 1` and `i`.
     */
    pub fn extend_upper(&self, delta: i64, axis: Axis) -> Self {
        match axis {
            Axis::I => Self::new(self.di.start .. self.di.end + delta, self.dj.clone()),
            Axis::J => Self::new(self.di.clone(), self.dj.start .. self.dj.end + delta),
        }
    }


    /**
     * Return the slab of this index space which lies on the lower (or upper)
     * end of the given axis, with the given thickness.
     */
    pub fn lower_slab(&self, thickness: i64, axis: Axis) -> Self {
        match axis {
            Axis::I => Self::new(self.di.start .. self.di.start + thickness, self.dj.clone()),
            Axis::J => Self::new(self.di.clone(), self.dj.start .. self.dj.start + thickness),
        }
    }

    pub fn upper_slab(&self, thickness: i64, axis: Axis) -> Self {
        match axis {
            Axis::I => Self::new(self.di.end - thickness .. self.di.end, self.dj.clone()),
            Axis::J => Self::new(self.di.clone(), self.dj.end - thickness .. self.dj.end),
        }
    }


    /**
     * Return the linear offset for the given index, in a row-major memory
     * buffer aligned with the start of this index space.
     */
    pub fn row_major_offset(&self, index: (i64, i64)) -> usize {
        let i = (index.0 - self.di.start) as usize;
        let j = (index.1 - self.dj.start) as usize;
        let m = (self.dj.end - self.dj.start) as usize;
        i * m + j
    }


    /**
     * Return the index at the given linear offset in row-major order. This
     * is the inverse of `row_major_offset`.
     */
    pub fn index_at(&self, offset: usize) -> (i64, i64) {
        let m = (self.dj.end - self.dj.start) as usize;
        let i = (offset / m) as i64 + self.di.start;
        let j = (offset % m) as i64 + self.dj.start;
        (i, j)
    }


    /**
     * Return an iterator which traverses the index space in row-major order
     * (C-like; the final index increases fastest).
     */
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.di.clone().map(move |i| self.dj.clone().map(move |j| (i, j))).flatten()
    }


    /**
     * Return a parallel iterator over the index space. The items are yielded
     * in row-major order when collected.
     */
    pub fn par_iter(&self) -> impl IndexedParallelIterator<Item = (i64, i64)> + '_ {
        (0..self.len()).into_par_iter().map(move |n| self.index_at(n))
    }
}




/**
 * Less imposing factory function to construct an IndexSpace object.
 */
pub fn range2d(di: Range<i64>, dj: Range<i64>) -> IndexSpace {
    IndexSpace::new(di, dj)
}




// ============================================================================
#[cfg(test)]
mod test {

    use rayon::prelude::*;
    use super::{range2d, Axis};

    #[test]
    fn row_major_offset_and_index_at_are_inverses() {
        let space = range2d(-1..5, -1..3);
        for (n, index) in space.iter().enumerate() {
            assert_eq!(space.row_major_offset(index), n);
            assert_eq!(space.index_at(n), index);
        }
    }

    #[test]
    fn parallel_traversal_matches_serial_order() {
        let space = range2d(0..7, 2..5);
        let serial: Vec<_> = space.iter().collect();
        let parallel: Vec<_> = space.par_iter().collect();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn face_space_has_one_more_index_on_the_normal_axis() {
        let cells = range2d(0..10, 0..4);
        assert_eq!(cells.extend_upper(1, Axis::I).dim(), (11, 4));
        assert_eq!(cells.extend_upper(1, Axis::J).dim(), (10, 5));
    }

    #[test]
    fn axis_extension_only_grows_one_axis() {
        let cells = range2d(0..10, 0..1);
        let halo = cells.extend_axis(1, Axis::I);
        assert_eq!(halo.start(), (-1, 0));
        assert_eq!(halo.end(), (11, 1));
        assert!(halo.contains_space(&cells));
        assert!(!cells.contains_space(&halo));
    }

    #[test]
    fn slabs_select_the_outer_layers() {
        let space = range2d(-1..11, -1..5);
        assert_eq!(space.lower_slab(1, Axis::I), range2d(-1..0, -1..5));
        assert_eq!(space.upper_slab(1, Axis::J), range2d(-1..11, 4..5));
    }
}
