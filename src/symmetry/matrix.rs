//! Affine matrices and the deduplicated set of active transforms.

use std::fmt;

// ============================================================================
// Transform
// ============================================================================

/// A 2D affine matrix in canvas order:
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
///
/// Builder methods post-multiply, so `identity().translate(..).rotate(..)`
/// rotates a point first and translates it second. Two transforms are equal
/// when all six coefficients are equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Returns `self * other`.
    pub fn multiply(&self, other: &Transform) -> Transform {
        Transform {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    pub fn translate(&self, tx: f64, ty: f64) -> Transform {
        self.multiply(&Transform::new(1.0, 0.0, 0.0, 1.0, tx, ty))
    }

    pub fn scale(&self, sx: f64, sy: f64) -> Transform {
        self.multiply(&Transform::new(sx, 0.0, 0.0, sy, 0.0, 0.0))
    }

    /// Rotates clockwise on screen (y axis pointing down) by `degrees`.
    pub fn rotate(&self, degrees: f64) -> Transform {
        let (sin, cos) = sin_cos(degrees);
        self.multiply(&Transform::new(cos, sin, -sin, cos, 0.0, 0.0))
    }

    pub fn rotate_at(&self, degrees: f64, px: f64, py: f64) -> Transform {
        self.translate(px, py).rotate(degrees).translate(-px, -py)
    }

    /// Flips x coordinates across the vertical line through `px`.
    pub fn mirror_x_at(&self, px: f64, py: f64) -> Transform {
        self.translate(px, py).scale(-1.0, 1.0).translate(-px, -py)
    }

    /// Flips y coordinates across the horizontal line through `py`.
    pub fn mirror_y_at(&self, px: f64, py: f64) -> Transform {
        self.translate(px, py).scale(1.0, -1.0).translate(-px, -py)
    }

    /// Maps a point through this transform.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Formats the matrix as an SVG transform list, e.g. `matrix(0,1,-1,0,16,0)`.
    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding zero turns -0 into 0 so equal matrices print identically.
        write!(
            f,
            "matrix({},{},{},{},{},{})",
            self.a + 0.0,
            self.b + 0.0,
            self.c + 0.0,
            self.d + 0.0,
            self.e + 0.0,
            self.f + 0.0
        )
    }
}

/// Sine and cosine of an angle in degrees, exact for quarter turns.
fn sin_cos(degrees: f64) -> (f64, f64) {
    let turn = degrees.rem_euclid(360.0);
    if turn == 0.0 {
        (0.0, 1.0)
    } else if turn == 90.0 {
        (1.0, 0.0)
    } else if turn == 180.0 {
        (0.0, -1.0)
    } else if turn == 270.0 {
        (-1.0, 0.0)
    } else {
        turn.to_radians().sin_cos()
    }
}

// ============================================================================
// TransformSet
// ============================================================================

/// Ordered collection of transforms without duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformSet {
    members: Vec<Transform>,
}

impl TransformSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `transform` unless an equal one is already present.
    ///
    /// Returns true if the set grew.
    pub fn add(&mut self, transform: Transform) -> bool {
        if self.contains(&transform) {
            return false;
        }
        self.members.push(transform);
        true
    }

    /// Removes every member equal to `transform`, returning how many went.
    pub fn remove(&mut self, transform: &Transform) -> usize {
        let before = self.members.len();
        self.members.retain(|t| t != transform);
        before - self.members.len()
    }

    pub fn contains(&self, transform: &Transform) -> bool {
        self.members.iter().any(|t| t == transform)
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transform> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[Transform] {
        &self.members
    }
}

impl<'a> IntoIterator for &'a TransformSet {
    type Item = &'a Transform;
    type IntoIter = std::slice::Iter<'a, Transform>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
