/// BoundingVolume — axis-aligned box with lazy corner growth.
///
/// Defined by two opposite corners, established by the first added point.
/// Supports per-axis centre/width queries and bisection into half-volumes,
/// which is how the BSP tree carves space level by level.
///
/// `bind()` freezes the volume and produces its eight corner points in a
/// fixed vertex order for debug rendering; a bound volume refuses further
/// growth.

use glam::Vec3;

/// Axis-aligned bounding volume with two lazily-established corners.
///
/// Axis convention for the corners: x and y grow the usual way (`low`
/// takes minima, `high` takes maxima). z runs the opposite direction:
/// `low.z` takes the maximum and `high.z` the minimum, a left-handed
/// depth convention where `low` holds the near corner. `centre()` and
/// `width()` are direction-agnostic, so queries never see the inversion.
#[derive(Debug, Clone)]
pub struct BoundingVolume {
    /// (low, high) corners; None until the first point is added
    corners: Option<(Vec3, Vec3)>,
    /// Set by bind(); a bound volume is immutable
    bound: bool,
    /// Eight corner points in octant bit order, filled by bind()
    corner_vertices: Vec<Vec3>,
}

impl BoundingVolume {
    /// Create an empty volume with no established corners.
    pub fn new() -> Self {
        Self {
            corners: None,
            bound: false,
            corner_vertices: Vec::new(),
        }
    }

    /// Create a volume with both corners established directly.
    ///
    /// Used by the trees to seed node volumes from a known extent.
    pub fn from_corners(low: Vec3, high: Vec3) -> Self {
        Self {
            corners: Some((low, high)),
            bound: false,
            corner_vertices: Vec::new(),
        }
    }

    /// Grow the volume to cover `point`.
    ///
    /// The first point establishes both corners. Later points move
    /// `low.x`/`low.y` toward minima and `low.z` toward the maximum,
    /// with `high` mirroring each axis (see the type-level docs for the
    /// z convention).
    ///
    /// Returns false without mutating if the volume is already bound.
    pub fn add_point(&mut self, point: Vec3) -> bool {
        if self.bound {
            return false;
        }

        match &mut self.corners {
            None => {
                self.corners = Some((point, point));
            }
            Some((low, high)) => {
                low.x = low.x.min(point.x);
                low.y = low.y.min(point.y);
                low.z = low.z.max(point.z);
                high.x = high.x.max(point.x);
                high.y = high.y.max(point.y);
                high.z = high.z.min(point.z);
            }
        }

        true
    }

    /// Low corner, if established.
    pub fn low(&self) -> Option<Vec3> {
        self.corners.map(|(low, _)| low)
    }

    /// High corner, if established.
    pub fn high(&self) -> Option<Vec3> {
        self.corners.map(|(_, high)| high)
    }

    /// Midpoint of the two corners along `axis`.
    ///
    /// An empty volume reports 0.0.
    pub fn centre(&self, axis: usize) -> f32 {
        match &self.corners {
            Some((low, high)) => (low[axis] + high[axis]) * 0.5,
            None => 0.0,
        }
    }

    /// Absolute extent along `axis`. Never negative, whichever direction
    /// the axis runs.
    ///
    /// An empty volume reports 0.0.
    pub fn width(&self, axis: usize) -> f32 {
        match &self.corners {
            Some((low, high)) => (high[axis] - low[axis]).abs(),
            None => 0.0,
        }
    }

    /// Half of this volume: identical except the high corner on `axis`
    /// moves to the centre.
    ///
    /// Bisecting an empty volume yields another empty volume.
    pub fn bisect_left(&self, axis: usize) -> BoundingVolume {
        match self.corners {
            Some((low, mut high)) => {
                high[axis] = self.centre(axis);
                Self::from_corners(low, high)
            }
            None => Self::new(),
        }
    }

    /// Half of this volume: identical except the low corner on `axis`
    /// moves to the centre.
    ///
    /// Bisecting an empty volume yields another empty volume.
    pub fn bisect_right(&self, axis: usize) -> BoundingVolume {
        match self.corners {
            Some((mut low, high)) => {
                low[axis] = self.centre(axis);
                Self::from_corners(low, high)
            }
            None => Self::new(),
        }
    }

    /// The eight corner points, enumerated by octant bits
    /// (bit0 = x, bit1 = y, bit2 = z; 0 = low corner, 1 = high corner).
    ///
    /// Returns None while no corners are established. Available whether
    /// or not the volume is bound; culling uses this directly.
    pub fn corners(&self) -> Option<[Vec3; 8]> {
        let (low, high) = self.corners?;

        let mut points = [Vec3::ZERO; 8];
        for (octant, point) in points.iter_mut().enumerate() {
            *point = Vec3::new(
                if octant & 1 == 0 { low.x } else { high.x },
                if octant & 2 == 0 { low.y } else { high.y },
                if octant & 4 == 0 { low.z } else { high.z },
            );
        }
        Some(points)
    }

    /// Freeze the volume and materialize its corner list for upload.
    ///
    /// One-way: the first call returns true and the volume refuses any
    /// further `add_point`. Returns false if already bound, or if no
    /// corners were ever established (nothing to upload).
    pub fn bind(&mut self) -> bool {
        if self.bound {
            return false;
        }

        let Some(points) = self.corners() else {
            return false;
        };

        self.corner_vertices = points.to_vec();
        self.bound = true;
        true
    }

    /// Whether `bind()` has completed.
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// The bound corner list, in octant bit order. Empty before bind().
    pub fn corner_points(&self) -> &[Vec3] {
        &self.corner_vertices
    }

    /// The bound corner list as raw bytes, ready for a vertex upload by
    /// the external GPU collaborator. Empty before bind().
    pub fn corner_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.corner_vertices)
    }
}

impl Default for BoundingVolume {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "bounding_volume_tests.rs"]
mod tests;
