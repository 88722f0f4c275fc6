//! 2D affine math in homogeneous coordinates

use std::ops::Mul;
use serde::{Serialize, Deserialize};

/// Integer pixel coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 3x3 matrix, row-major. Represents a 2D affine map; the bottom row is
/// `[0, 0, 1]` for everything built here but is not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Uniform scale about the origin. Non-finite factors are not rejected.
    pub fn scale(s: f64) -> Self {
        let mut mat = Self::IDENTITY;
        mat.m[0][0] = s;
        mat.m[1][1] = s;
        mat
    }

    /// Rotation by `angle_deg` about `pivot`, folded into a single matrix
    /// equivalent to translate(pivot) * rotate * translate(-pivot).
    pub fn rotate(angle_deg: f64, pivot: Point) -> Self {
        let (s, c) = angle_deg.to_radians().sin_cos();
        let px = pivot.x as f64;
        let py = pivot.y as f64;
        Self {
            m: [
                [c, -s, px * (1.0 - c) + py * s],
                [s, c, py * (1.0 - c) - px * s],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn translate(dx: i32, dy: i32) -> Self {
        let mut mat = Self::IDENTITY;
        mat.m[0][2] = dx as f64;
        mat.m[1][2] = dy as f64;
        mat
    }

    /// Matrix product `a * b`: `b` is applied to a point first, then `a`.
    pub fn compose(a: Mat3, b: Mat3) -> Mat3 {
        let mut r = [[0.0; 3]; 3];
        for (i, row) in r.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += a.m[i][k] * b.m[k][j];
                }
            }
        }
        Mat3 { m: r }
    }

    /// Reduce factors left to right: `[a, b, c]` gives `(a * b) * c`, so the
    /// last factor is the first one applied to a point.
    pub fn product<I: IntoIterator<Item = Mat3>>(factors: I) -> Mat3 {
        factors.into_iter().fold(Self::identity(), Mat3::compose)
    }

    /// Map a point (implicit w = 1). Coordinates are rounded half away from
    /// zero; values outside the i32 range saturate and NaN maps to 0.
    pub fn apply(&self, p: Point) -> Point {
        let x = self.m[0][0] * p.x as f64 + self.m[0][1] * p.y as f64 + self.m[0][2];
        let y = self.m[1][0] * p.x as f64 + self.m[1][1] * p.y as f64 + self.m[1][2];
        Point {
            x: x.round() as i32,
            y: y.round() as i32,
        }
    }
}

impl Mul for Mat3 {
    type Output = Mat3;
    fn mul(self, other: Mat3) -> Mat3 {
        Mat3::compose(self, other)
    }
}
