use itertools::Itertools;
use nalgebra::{Matrix4, Vector3};
use va3c_core::geom::{Point3, Transform};

const NORMAL_EPSILON: f64 = 1e-12;
const AREA_EPSILON: f64 = 1e-12;

/// Geometry operations the exporter delegates to.
pub trait GeometryKernel {
    /// Triangulates a planar loop lying in the z = 0 plane, cutting out
    /// `holes`. Every returned triangle has the outer loop's winding. An
    /// empty result means triangulation failed.
    fn triangulate(&self, outer: &[Point3], holes: &[Vec<Point3>]) -> Vec<Vec<Point3>>;

    /// Transformation from the face's local frame (face in z = 0, outward
    /// normal along +z) to the face's coordinates. `None` for degenerate faces.
    fn align_face(&self, vertices: &[Point3]) -> Option<Transform>;

    fn distance(&self, a: &Point3, b: &Point3) -> f64 {
        a.distance(b)
    }
}

/// Newell normal alignment and earcut triangulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarcutKernel;

impl GeometryKernel for EarcutKernel {
    fn triangulate(&self, outer: &[Point3], holes: &[Vec<Point3>]) -> Vec<Vec<Point3>> {
        if outer.len() < 3 {
            return Vec::new();
        }
        let outer_area = signed_area(outer);
        if outer_area.abs() < AREA_EPSILON {
            return Vec::new();
        }

        let mut points: Vec<Point3> = outer.to_vec();
        let mut hole_indices = Vec::new();
        for hole in holes.iter().filter(|h| h.len() >= 3) {
            hole_indices.push(points.len());
            points.extend_from_slice(hole);
        }

        let flat: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();
        let indices = match earcutr::earcut(&flat, &hole_indices, 2) {
            Ok(indices) => indices,
            Err(err) => {
                tracing::debug!("earcut failed: {err:?}");
                return Vec::new();
            }
        };

        indices
            .chunks_exact(3)
            .filter_map(|tri| {
                let mut tri = vec![points[tri[0]], points[tri[1]], points[tri[2]]];
                let area = signed_area(&tri);
                if area.abs() < AREA_EPSILON {
                    return None;
                }
                if area.signum() != outer_area.signum() {
                    tri.swap(1, 2);
                }
                Some(tri)
            })
            .collect()
    }

    fn align_face(&self, vertices: &[Point3]) -> Option<Transform> {
        let z_prime = outward_normal(vertices)?;
        let x_prime = if z_prime.z.abs() < 0.9 {
            Vector3::z().cross(&z_prime).normalize()
        } else {
            (Vector3::x() - z_prime * z_prime.x).normalize()
        };
        let y_prime = z_prime.cross(&x_prime);
        let origin = vertices[0];

        #[rustfmt::skip]
        let matrix = Matrix4::new(
            x_prime.x, y_prime.x, z_prime.x, origin.x,
            x_prime.y, y_prime.y, z_prime.y, origin.y,
            x_prime.z, y_prime.z, z_prime.z, origin.z,
            0.0,       0.0,       0.0,       1.0,
        );
        Some(Transform::from_matrix(matrix))
    }
}

/// Unit normal by Newell's method; counter-clockwise loops point toward the viewer.
pub fn outward_normal(vertices: &[Point3]) -> Option<Vector3<f64>> {
    if vertices.len() < 3 {
        return None;
    }
    let mut normal = Vector3::<f64>::zeros();
    for (a, b) in vertices.iter().circular_tuple_windows() {
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    let len = normal.norm();
    if len < NORMAL_EPSILON {
        return None;
    }
    Some(normal / len)
}

/// Shoelace area in the xy plane, positive for counter-clockwise loops.
pub fn signed_area(points: &[Point3]) -> f64 {
    points
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<f64>()
        * 0.5
}
