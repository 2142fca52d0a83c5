use nalgebra::{Matrix4, Point3 as NaPoint3, Vector3};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<NaPoint3<f64>> for Point3 {
    fn from(p: NaPoint3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Point3> for NaPoint3<f64> {
    fn from(p: Point3) -> Self {
        NaPoint3::new(p.x, p.y, p.z)
    }
}

/// Rigid/affine 4x4 transformation acting on points.
///
/// Serialized as the 16 matrix entries in column-major order, which is also
/// the layout three.js uses for `matrix`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 16]", into = "[f64; 16]")]
pub struct Transform {
    pub matrix: Matrix4<f64>,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    pub fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vector3::new(x, y, z)),
        }
    }

    /// Rotation about the z axis by `degrees`, counter-clockwise seen from +z.
    pub fn rotation_z(degrees: f64) -> Self {
        let axis = Vector3::z() * degrees.to_radians();
        Self {
            matrix: Matrix4::new_rotation(axis),
        }
    }

    /// Falls back to identity for singular matrices.
    pub fn inverse(&self) -> Self {
        Self {
            matrix: self.matrix.try_inverse().unwrap_or_else(Matrix4::identity),
        }
    }

    pub fn apply(&self, point: &Point3) -> Point3 {
        self.matrix
            .transform_point(&NaPoint3::from(*point))
            .into()
    }

    pub fn apply_all(&self, points: &[Point3]) -> Vec<Point3> {
        points.iter().map(|p| self.apply(p)).collect()
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix4::identity()
    }

    pub fn to_column_major(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        out.copy_from_slice(self.matrix.as_slice());
        out
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            matrix: self.matrix * rhs.matrix,
        }
    }
}

impl From<[f64; 16]> for Transform {
    fn from(values: [f64; 16]) -> Self {
        Self {
            matrix: Matrix4::from_column_slice(&values),
        }
    }
}

impl From<Transform> for [f64; 16] {
    fn from(t: Transform) -> Self {
        t.to_column_major()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox3 {
    pub min: Point3,
    pub max: Point3,
}

impl BBox3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn include_point(&mut self, point: Point3) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let mut out = *self;
        out.include_point(other.min);
        out.include_point(other.max);
        out
    }

    pub fn diag(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.min.distance(&self.max)
    }
}
