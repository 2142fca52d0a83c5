use crate::kernel::GeometryKernel;
use va3c_core::geom::{BBox3, Point3};

pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Welds the vertices of one geometry.
///
/// Lookup is a linear scan in insertion order, so the first accepted point
/// within `tolerance` wins. Surfaces carry tens of distinct vertices, not
/// thousands.
pub struct VertexIndexer<'k, K: GeometryKernel + ?Sized> {
    kernel: &'k K,
    tolerance: f64,
    points: Vec<Point3>,
}

impl<'k, K: GeometryKernel + ?Sized> VertexIndexer<'k, K> {
    pub fn new(kernel: &'k K, tolerance: f64) -> Self {
        Self {
            kernel,
            tolerance,
            points: Vec::new(),
        }
    }

    pub fn index_of(&mut self, point: Point3) -> u32 {
        for (idx, existing) in self.points.iter().enumerate() {
            if self.kernel.distance(&point, existing) < self.tolerance {
                return idx as u32;
            }
        }
        self.points.push(point);
        (self.points.len() - 1) as u32
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn bbox(&self) -> BBox3 {
        let mut bbox = BBox3::empty();
        for p in &self.points {
            bbox.include_point(*p);
        }
        bbox
    }

    /// Flat `x, y, z` buffer in viewer axes.
    pub fn flatten(&self) -> Vec<f64> {
        self.points.iter().flat_map(to_viewer).collect()
    }
}

/// Model axes (z up) to viewer axes (y up): `(x, y, z) -> (x, z, -y)`.
pub fn to_viewer(p: &Point3) -> [f64; 3] {
    [p.x, p.z, -p.y]
}

pub fn from_viewer(v: [f64; 3]) -> Point3 {
    Point3::new(v[0], -v[2], v[1])
}
