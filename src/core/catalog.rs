//! The twelve canonical pentominoes and their cached orientation sets.

use alloc::vec::Vec;

use crate::core::common::GameError;
use crate::core::orientation::{orientations_of, Orientations};
use crate::core::shape::{Cell, Cells, Shape, ShapeKey};

const fn c(x: i32, y: i32) -> Cell {
    Cell::new(x, y)
}

/// Canonical cells per key, in catalog order.
pub const SHAPE_TABLE: [(ShapeKey, Cells); 12] = [
    (ShapeKey::F, [c(1, 0), c(0, 1), c(1, 1), c(1, 2), c(2, 2)]),
    (ShapeKey::I, [c(0, 0), c(1, 0), c(2, 0), c(3, 0), c(4, 0)]),
    (ShapeKey::L, [c(0, 0), c(0, 1), c(0, 2), c(0, 3), c(1, 0)]),
    (ShapeKey::N, [c(0, 0), c(0, 1), c(0, 2), c(1, 2), c(1, 3)]),
    (ShapeKey::P, [c(0, 0), c(1, 0), c(0, 1), c(1, 1), c(0, 2)]),
    (ShapeKey::T, [c(0, 2), c(1, 2), c(2, 2), c(1, 1), c(1, 0)]),
    (ShapeKey::U, [c(0, 0), c(0, 1), c(1, 0), c(2, 0), c(2, 1)]),
    (ShapeKey::V, [c(0, 0), c(0, 1), c(0, 2), c(1, 0), c(2, 0)]),
    (ShapeKey::W, [c(0, 0), c(1, 0), c(1, 1), c(2, 1), c(2, 2)]),
    (ShapeKey::X, [c(1, 0), c(0, 1), c(1, 1), c(2, 1), c(1, 2)]),
    (ShapeKey::Y, [c(0, 0), c(0, 1), c(0, 2), c(0, 3), c(1, 2)]),
    (ShapeKey::Z, [c(0, 2), c(1, 2), c(1, 1), c(1, 0), c(2, 0)]),
];

/// Validated, read-only lookup table of the canonical shapes.
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
    orientations: Vec<Orientations>,
}

impl ShapeCatalog {
    /// Build the standard catalog from [`SHAPE_TABLE`].
    pub fn standard() -> Result<Self, GameError> {
        Self::from_table(&SHAPE_TABLE)
    }

    /// Build a catalog from raw entries, one per key in [`ShapeKey::ALL`]
    /// order. Fails with `InvalidShape` if any entry is malformed, out of
    /// order, or a rotation/reflection of an earlier entry.
    pub fn from_table(table: &[(ShapeKey, Cells)]) -> Result<Self, GameError> {
        if table.len() != ShapeKey::ALL.len() {
            return Err(GameError::InvalidShape);
        }
        let mut shapes = Vec::with_capacity(table.len());
        let mut orientations: Vec<Orientations> = Vec::with_capacity(table.len());
        for (i, (key, cells)) in table.iter().enumerate() {
            if key.index() != i {
                return Err(GameError::InvalidShape);
            }
            let shape = Shape::new(*key, *cells)?;
            let set = orientations_of(&shape);
            if orientations.iter().any(|o| o.position(shape.cells()).is_some()) {
                return Err(GameError::InvalidShape);
            }
            shapes.push(shape);
            orientations.push(set);
        }
        log::debug!("shape catalog built with {} shapes", shapes.len());
        Ok(Self {
            shapes,
            orientations,
        })
    }

    /// Canonical shape for `key`.
    pub fn shape(&self, key: ShapeKey) -> &Shape {
        &self.shapes[key.index()]
    }

    /// Canonical shape by textual key such as `"f"` or `" Z "`.
    pub fn shape_for_name(&self, name: &str) -> Result<&Shape, GameError> {
        let key: ShapeKey = name.parse()?;
        Ok(self.shape(key))
    }

    /// Cached orientation set of the canonical shape for `key`.
    pub fn orientations(&self, key: ShapeKey) -> &Orientations {
        &self.orientations[key.index()]
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }
}
