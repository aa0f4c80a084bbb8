//! Rotational and mirror symmetry.
//!
//! The active transforms are never edited piecemeal. [`derive`] rebuilds the
//! whole [`TransformSet`] from the declared rotations, the four mirror flags
//! and the pivot, and [`TransformStack`] calls it after every change so the
//! set always matches its inputs.

pub mod matrix;
pub mod stack;

pub use matrix::{Transform, TransformSet};
pub use stack::TransformStack;

use crate::error::EditorError;
use crate::geometry::SizePx;

/// Center of the logical grid, the fixed point of every symmetry transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    pub x: f64,
    pub y: f64,
}

impl Pivot {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The pivot of an `x` by `y` grid: `(x / 2, y / 2)`.
    pub fn of_grid(grid: SizePx) -> Self {
        Self::new(f64::from(grid.width) / 2.0, f64::from(grid.height) / 2.0)
    }
}

/// The four mirror slots, in flag order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    /// Flip across the vertical axis.
    X,
    /// Flip across the horizontal axis.
    Y,
    /// Flip across the vertical axis, then rotate by +90°.
    XRotatePositive,
    /// Flip across the vertical axis, then rotate by -90°.
    XRotateNegative,
}

impl Mirror {
    pub const ALL: [Mirror; 4] = [
        Mirror::X,
        Mirror::Y,
        Mirror::XRotatePositive,
        Mirror::XRotateNegative,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn transform(self, pivot: Pivot) -> Transform {
        let Pivot { x, y } = pivot;
        let base = Transform::identity();
        match self {
            Mirror::X => base.mirror_x_at(x, y),
            Mirror::Y => base.mirror_y_at(x, y),
            Mirror::XRotatePositive => base.mirror_x_at(x, y).rotate_at(90.0, x, y),
            Mirror::XRotateNegative => base.mirror_x_at(x, y).rotate_at(-90.0, x, y),
        }
    }
}

impl TryFrom<usize> for Mirror {
    type Error = EditorError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(EditorError::InvalidMirror(index))
    }
}

/// Builds the transform set for the given symmetry declaration.
///
/// Rotations are added in order, then every flagged mirror slot from 0 to 3.
/// Transforms equal to one already present are skipped.
pub fn derive(rotations: &[i32], mirrors: &[bool; 4], pivot: Pivot) -> TransformSet {
    let mut set = TransformSet::new();
    for &degrees in rotations {
        set.add(Transform::identity().rotate_at(f64::from(degrees), pivot.x, pivot.y));
    }
    for mirror in Mirror::ALL {
        if mirrors[mirror.index()] {
            set.add(mirror.transform(pivot));
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_rotation_and_mirror() {
        let set = derive(&[90], &[true, false, false, false], Pivot::new(8.0, 8.0));
        assert_eq!(
            set.as_slice(),
            &[
                Transform::new(0.0, 1.0, -1.0, 0.0, 16.0, 0.0),
                Transform::new(-1.0, 0.0, 0.0, 1.0, 16.0, 0.0),
            ]
        );
    }

    #[test]
    fn derive_includes_fourth_mirror() {
        let set = derive(&[], &[false, false, false, true], Pivot::new(8.0, 8.0));
        assert_eq!(set.len(), 1);
        assert_eq!(set.as_slice()[0], Mirror::XRotateNegative.transform(Pivot::new(8.0, 8.0)));
    }

    #[test]
    fn derive_collapses_equal_rotations() {
        let set = derive(&[0, 360, 180, -180], &[false; 4], Pivot::new(4.0, 4.0));
        assert_eq!(set.len(), 2);
        assert!(set.as_slice()[0].is_identity());
    }

    #[test]
    fn derive_empty_declaration() {
        assert!(derive(&[], &[false; 4], Pivot::new(1.0, 1.0)).is_empty());
    }

    #[test]
    fn diagonal_mirrors_differ() {
        let p = Pivot::new(8.0, 8.0);
        assert_ne!(
            Mirror::XRotatePositive.transform(p),
            Mirror::XRotateNegative.transform(p)
        );
    }

    #[test]
    fn mirror_index_out_of_range() {
        assert!(matches!(Mirror::try_from(4), Err(EditorError::InvalidMirror(4))));
        assert_eq!(Mirror::try_from(2).ok(), Some(Mirror::XRotatePositive));
    }

    #[test]
    fn pivot_of_odd_grid() {
        assert_eq!(Pivot::of_grid(SizePx::new(5, 3)), Pivot::new(2.5, 1.5));
    }
}
