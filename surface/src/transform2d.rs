use std::ops::*;

///
/// Represents a 2D affine transformation matrix
///
/// Points are treated as column vectors, so `a * b` applies `b` first and then `a`. Multiplying a new
/// transform on to the right of the current one is how a canvas composes `translate`, `rotate` and `scale`.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transform2D(pub [[f32; 3]; 3]);

impl Transform2D {
    ///
    /// Creates the identity transform
    ///
    pub fn identity() -> Transform2D {
        Transform2D([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// Creates a translation transform
    ///
    pub fn translate(x: f32, y: f32) -> Transform2D {
        Transform2D([[1.0, 0.0, x], [0.0, 1.0, y], [0.0, 0.0, 1.0]])
    }

    ///
    /// Creates a scale transform
    ///
    pub fn scale(scale_x: f32, scale_y: f32) -> Transform2D {
        Transform2D([[scale_x, 0.0, 0.0], [0.0, scale_y, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// Creates a rotation transform (angle in radians)
    ///
    pub fn rotate(radians: f32) -> Transform2D {
        let (sin, cos) = radians.sin_cos();

        Transform2D([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// Creates a rotation transform (angle in degrees)
    ///
    pub fn rotate_degrees(degrees: f32) -> Transform2D {
        Self::rotate(degrees.to_radians())
    }

    ///
    /// Creates a transform from the six values used by a canvas `setTransform(a, b, c, d, e, f)` call
    ///
    /// A point `(x, y)` maps to `(a*x + c*y + tx, b*x + d*y + ty)`
    ///
    pub fn from_affine(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Transform2D {
        Transform2D([[a, c, tx], [b, d, ty], [0.0, 0.0, 1.0]])
    }

    ///
    /// Returns the six canvas values `(a, b, c, d, tx, ty)` for this transform
    ///
    pub fn to_affine(&self) -> (f32, f32, f32, f32, f32, f32) {
        let Transform2D(m) = self;

        (m[0][0], m[1][0], m[0][1], m[1][1], m[0][2], m[1][2])
    }

    ///
    /// Transforms a point
    ///
    #[inline]
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let Transform2D(m) = self;

        (m[0][0]*x + m[0][1]*y + m[0][2], m[1][0]*x + m[1][1]*y + m[1][2])
    }

    ///
    /// The determinant of this transform (negative when it mirrors the coordinate space)
    ///
    pub fn determinant(&self) -> f32 {
        let Transform2D(m) = self;

        m[0][0]*(m[1][1]*m[2][2] - m[1][2]*m[2][1])
            - m[0][1]*(m[1][0]*m[2][2] - m[1][2]*m[2][0])
            + m[0][2]*(m[1][0]*m[2][1] - m[1][1]*m[2][0])
    }

    ///
    /// Computes the inverse of this transform, if it exists
    ///
    pub fn invert(&self) -> Option<Transform2D> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() { return None; }

        let Transform2D(m)  = self;
        let inv_det         = 1.0/det;

        let mut inverse     = [[0.0; 3]; 3];
        inverse[0][0]       = (m[1][1]*m[2][2] - m[2][1]*m[1][2]) * inv_det;
        inverse[0][1]       = (m[0][2]*m[2][1] - m[0][1]*m[2][2]) * inv_det;
        inverse[0][2]       = (m[0][1]*m[1][2] - m[0][2]*m[1][1]) * inv_det;
        inverse[1][0]       = (m[1][2]*m[2][0] - m[1][0]*m[2][2]) * inv_det;
        inverse[1][1]       = (m[0][0]*m[2][2] - m[0][2]*m[2][0]) * inv_det;
        inverse[1][2]       = (m[1][0]*m[0][2] - m[0][0]*m[1][2]) * inv_det;
        inverse[2][0]       = (m[1][0]*m[2][1] - m[2][0]*m[1][1]) * inv_det;
        inverse[2][1]       = (m[2][0]*m[0][1] - m[0][0]*m[2][1]) * inv_det;
        inverse[2][2]       = (m[0][0]*m[1][1] - m[1][0]*m[0][1]) * inv_det;

        Some(Transform2D(inverse))
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Transform2D::identity()
    }
}

impl Mul<Transform2D> for Transform2D {
    type Output = Transform2D;

    fn mul(self, other: Transform2D) -> Transform2D {
        let Transform2D(a) = self;
        let Transform2D(b) = other;

        let mut result = [[0.0; 3]; 3];
        for row in 0..3 {
            for col in 0..3 {
                result[row][col] = a[row][0]*b[0][col] + a[row][1]*b[1][col] + a[row][2]*b[2][col];
            }
        }

        Transform2D(result)
    }
}

impl MulAssign<Transform2D> for Transform2D {
    fn mul_assign(&mut self, other: Transform2D) {
        *self = *self * other;
    }
}
