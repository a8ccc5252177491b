/// Frustum — clipping planes for visibility culling.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing normal
/// - D is the signed distance
/// - A point P is inside the half-space if dot((A,B,C), P) + D >= 0
///
/// The caller is responsible for computing and setting the frustum.
/// The engine provides `from_view_projection()` as a utility, but
/// the caller may compute the planes by other means.
///
/// The spatial trees (BspTree, Octree) consume plane sets as plain
/// `&[Vec4]` slices through `culled_by`, so any number of half-spaces
/// works, not just the six frustum faces.

use glam::{Mat4, Vec3, Vec4};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes for culling.
///
/// Each plane is (A, B, C, D) where Ax + By + Cz + D = 0.
/// Normal (A, B, C) points inward (toward the visible volume).
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method. Works for both perspective
    /// and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();

        // Gribb & Hartmann: extract planes from rows of the VP matrix
        // Each plane is normalized so that (A, B, C) is a unit vector
        let mut planes = [
            // Left:   row3 + row0
            Vec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            Vec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom: row3 + row1
            Vec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Top:    row3 - row1
            Vec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Near:   row3 + row2
            Vec4::new(m[0][3] + m[0][2], m[1][3] + m[1][2], m[2][3] + m[2][2], m[3][3] + m[3][2]),
            // Far:    row3 - row2
            Vec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
        ];

        // Normalize each plane
        for plane in &mut planes {
            let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// The planes as a slice, in the form the tree render paths consume.
    pub fn planes(&self) -> &[Vec4] {
        &self.planes
    }
}

// ===== SHARED CULL TEST =====

/// Transform a set of corner points by a combined matrix.
///
/// Both trees compose the parent transform with the view transform and
/// push their eight volume corners through the result before testing
/// against the planes.
pub fn transform_corners(corners: &[Vec3; 8], matrix: &Mat4) -> [Vec3; 8] {
    corners.map(|corner| matrix.transform_point3(corner))
}

/// Test whether a corner set is entirely outside any single plane.
///
/// A node is cullable iff at least one plane has every corner on its
/// negative side (dot(normal, corner) + d < 0). If no single plane
/// excludes all corners the volume is treated as visible. Conservative:
/// a volume outside the frustum but not outside any one plane still
/// renders.
pub fn culled_by(planes: &[Vec4], corners: &[Vec3]) -> bool {
    planes.iter().any(|plane| {
        let normal = Vec3::new(plane.x, plane.y, plane.z);
        corners.iter().all(|corner| normal.dot(*corner) + plane.w < 0.0)
    })
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
