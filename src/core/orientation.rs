//! Distinct rotations and reflections of a shape.

use core::slice;

use crate::core::config::{CELLS_PER_PIECE, MAX_ORIENTATIONS};
use crate::core::shape::{flip_x, rotate_cw, Cell, Cells, Shape, Signature};

/// The deduplicated orientation set of one shape, in generation order.
///
/// Each member is normalized and stored in signature order. Fixed capacity,
/// so generating a set never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientations {
    sets: [Cells; MAX_ORIENTATIONS],
    len: usize,
}

impl Orientations {
    fn empty() -> Self {
        Self {
            sets: [[Cell::default(); CELLS_PER_PIECE]; MAX_ORIENTATIONS],
            len: 0,
        }
    }

    /// Push `cells` unless an equal orientation is already present.
    fn add_if_new(&mut self, cells: &Cells) {
        let sig = Signature::of(cells);
        if self.iter().any(|seen| Signature::of(seen) == sig) {
            return;
        }
        self.sets[self.len] = *sig.cells();
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<&Cells> {
        self.as_slice().get(index)
    }

    pub fn as_slice(&self) -> &[Cells] {
        &self.sets[..self.len]
    }

    pub fn iter(&self) -> slice::Iter<'_, Cells> {
        self.as_slice().iter()
    }

    /// Index of the member equal to `cells` up to ordering.
    pub fn position(&self, cells: &Cells) -> Option<usize> {
        let sig = Signature::of(cells);
        self.iter().position(|o| Signature::of(o) == sig)
    }
}

impl<'a> IntoIterator for &'a Orientations {
    type Item = &'a Cells;
    type IntoIter = slice::Iter<'a, Cells>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Generate the orientation set of `shape`.
///
/// Order: the four quarter turns of the shape, then the four quarter turns
/// of its horizontal mirror, skipping repeats.
pub fn orientations_of(shape: &Shape) -> Orientations {
    orientations_of_cells(shape.cells())
}

/// [`orientations_of`] for a bare cell set.
pub fn orientations_of_cells(cells: &Cells) -> Orientations {
    let mut out = Orientations::empty();
    let mut cur = *cells;
    for _ in 0..4 {
        out.add_if_new(&cur);
        cur = rotate_cw(&cur);
    }
    cur = flip_x(cells);
    for _ in 0..4 {
        out.add_if_new(&cur);
        cur = rotate_cw(&cur);
    }
    out
}
