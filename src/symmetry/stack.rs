//! Declared symmetry state and its derived transform set.

use super::{Mirror, Pivot, TransformSet, derive};
use crate::error::EditorError;

/// Rotations, mirror flags and pivot, with the transform set derived from them.
///
/// Every setter rederives the set, so [`transforms`](Self::transforms) always
/// equals `derive(rotations, mirrors, pivot)`.
#[derive(Debug, Clone)]
pub struct TransformStack {
    rotations: Vec<i32>,
    mirrors: [bool; 4],
    pivot: Pivot,
    transforms: TransformSet,
}

impl TransformStack {
    pub fn new(pivot: Pivot) -> Self {
        Self {
            rotations: Vec::new(),
            mirrors: [false; 4],
            pivot,
            transforms: TransformSet::new(),
        }
    }

    /// Replaces the active rotations. Repeated angles keep their first position.
    pub fn set_rotations(&mut self, angles: &[i32]) {
        self.rotations.clear();
        for &angle in angles {
            if !self.rotations.contains(&angle) {
                self.rotations.push(angle);
            }
        }
        self.rederive();
    }

    pub fn set_mirrors(&mut self, flags: [bool; 4]) {
        self.mirrors = flags;
        self.rederive();
    }

    /// Moves the pivot and rebuilds the set from scratch.
    pub fn reapply(&mut self, pivot: Pivot) -> &TransformSet {
        self.pivot = pivot;
        self.rederive();
        &self.transforms
    }

    /// Enables or disables one rotation angle.
    ///
    /// Enabling an active angle, or disabling an inactive one, changes nothing.
    pub fn toggle_rotation(&mut self, degrees: i32, enabled: bool) {
        if enabled {
            if !self.rotations.contains(&degrees) {
                self.rotations.push(degrees);
            }
        } else {
            self.rotations.retain(|&r| r != degrees);
        }
        self.rederive();
    }

    /// Sets one mirror flag. Indices outside `0..=3` leave the stack untouched.
    pub fn toggle_mirror(&mut self, index: usize, enabled: bool) -> Result<(), EditorError> {
        let mirror = Mirror::try_from(index)?;
        self.mirrors[mirror.index()] = enabled;
        self.rederive();
        Ok(())
    }

    pub fn rotations(&self) -> &[i32] {
        &self.rotations
    }

    pub fn mirrors(&self) -> [bool; 4] {
        self.mirrors
    }

    pub fn has_rotation(&self, degrees: i32) -> bool {
        self.rotations.contains(&degrees)
    }

    pub fn has_mirror(&self, index: usize) -> bool {
        self.mirrors.get(index).copied().unwrap_or(false)
    }

    pub fn pivot(&self) -> Pivot {
        self.pivot
    }

    pub fn transforms(&self) -> &TransformSet {
        &self.transforms
    }

    fn rederive(&mut self) {
        self.transforms = derive(&self.rotations, &self.mirrors, self.pivot);
    }
}
