/// Octree — eight-octant spatial accelerator.
///
/// Each node splits space around a centre point into eight octants,
/// halving the extent per level. An item descends into the octant picked
/// by the sign of its offset on each axis, unless it straddles one of the
/// node's three splitting half-spaces or the depth is exhausted, in which
/// case it stays at the node. Children are created lazily.
///
/// Octant indexing is a 3-bit code: bit0 = x, bit1 = y, bit2 = z, with a
/// set bit meaning the positive side. Node corners for culling and child
/// centres both enumerate the same bit pattern.

use std::sync::Arc;
use glam::{Mat4, Vec3, Vec4};
use crate::camera::{culled_by, transform_corners};
use super::item::{Accelerator, Boundable, Renderable, SceneItemRef};

// ===== NODE =====

/// A single node of the octree.
struct OctreeNode {
    /// Centre of the node's cube
    centre: Vec3,
    /// Half the cube's edge length
    half_width: f32,
    /// Remaining subdivision depth; routing stops at zero
    depth: u32,
    /// Lazily created octant children, indexed by octant bitmask
    children: [Option<Box<OctreeNode>>; 8],
    /// Items that straddle a splitting half-space or exhausted the depth
    items: Vec<SceneItemRef>,
}

impl OctreeNode {
    fn new(centre: Vec3, half_width: f32, depth: u32) -> Self {
        Self {
            centre,
            half_width,
            depth,
            children: Default::default(),
            items: Vec::new(),
        }
    }

    /// Route an item down the tree.
    ///
    /// The three axes are evaluated independently: each contributes a
    /// straddle check (`|delta| < half_width/2 + item_width/2`) and, when
    /// positive, its bit of the octant index. A straddle on any axis
    /// keeps the item at this node.
    fn insert(&mut self, item: SceneItemRef) {
        if self.depth == 0 {
            self.items.push(item);
            return;
        }

        let routed = match item.lock() {
            Ok(guard) => {
                let mut octant = 0usize;
                let mut straddles = false;
                for axis in 0..3 {
                    let delta = guard.centre(axis) - self.centre[axis];
                    if delta.abs() < self.half_width * 0.5 + guard.width(axis) * 0.5 {
                        straddles = true;
                    }
                    if delta > 0.0 {
                        octant |= 1 << axis;
                    }
                }
                Some((octant, straddles))
            }
            // A dead item cannot be routed; park it at this level.
            Err(_) => None,
        };
        let (octant, straddles) = match routed {
            Some(routed) => routed,
            None => {
                self.items.push(item);
                return;
            }
        };

        if straddles {
            self.items.push(item);
            return;
        }

        let child_centre = self.child_centre(octant);
        let child_half_width = self.half_width * 0.5;
        let child_depth = self.depth - 1;

        self.children[octant]
            .get_or_insert_with(|| {
                Box::new(OctreeNode::new(child_centre, child_half_width, child_depth))
            })
            .insert(item);
    }

    /// Centre of the child cube in the given octant.
    ///
    /// Children tile the parent exactly: each child centre sits half the
    /// parent's half-width from the node centre, signed per octant bit.
    fn child_centre(&self, octant: usize) -> Vec3 {
        let offset = self.half_width * 0.5;
        Vec3::new(
            self.centre.x + if octant & 1 != 0 { offset } else { -offset },
            self.centre.y + if octant & 2 != 0 { offset } else { -offset },
            self.centre.z + if octant & 4 != 0 { offset } else { -offset },
        )
    }

    /// The eight corners of the node cube, enumerated by octant bits.
    fn corners(&self) -> [Vec3; 8] {
        let mut points = [Vec3::ZERO; 8];
        for (octant, point) in points.iter_mut().enumerate() {
            *point = Vec3::new(
                self.centre.x + if octant & 1 == 0 { -self.half_width } else { self.half_width },
                self.centre.y + if octant & 2 == 0 { -self.half_width } else { self.half_width },
                self.centre.z + if octant & 4 == 0 { -self.half_width } else { self.half_width },
            );
        }
        points
    }

    /// Render the whole subtree: children in octant order, then the items
    /// owned at this level.
    fn render(&self, transform: &Mat4, view_transform: &Mat4) -> bool {
        let mut ok = true;

        for child in self.children.iter().flatten() {
            ok &= child.render(transform, view_transform);
        }

        for item in &self.items {
            match item.lock() {
                Ok(mut guard) => ok &= guard.render(transform, view_transform),
                Err(_) => ok = false,
            }
        }

        ok
    }

    /// Render with frustum culling: a node entirely outside one plane is
    /// skipped with everything below it.
    fn render_culled(
        &self,
        transform: &Mat4,
        view_transform: &Mat4,
        frustum_planes: &[Vec4],
    ) -> bool {
        if self.is_cullable(view_transform, transform, frustum_planes) {
            return true;
        }

        let mut ok = true;

        for child in self.children.iter().flatten() {
            ok &= child.render_culled(transform, view_transform, frustum_planes);
        }

        for item in &self.items {
            match item.lock() {
                Ok(mut guard) => {
                    ok &= guard.render_culled(transform, view_transform, frustum_planes)
                }
                Err(_) => ok = false,
            }
        }

        ok
    }

    /// Whether the node cube lies entirely outside one of the planes.
    ///
    /// The eight cube corners are transformed by `view * transform`
    /// before the per-plane test.
    fn is_cullable(
        &self,
        view_transform: &Mat4,
        transform: &Mat4,
        frustum_planes: &[Vec4],
    ) -> bool {
        let combined = *view_transform * *transform;
        let transformed = transform_corners(&self.corners(), &combined);
        culled_by(frustum_planes, &transformed)
    }

    /// Bind the items owned here, then all non-null children.
    ///
    /// Aggregates with a non-short-circuiting AND: every subtree is
    /// visited even after a failure. Already-bound items are skipped,
    /// never re-bound.
    fn bind(&mut self) -> bool {
        let mut ok = true;

        for item in &self.items {
            match item.lock() {
                Ok(mut guard) => {
                    if !guard.is_bound() {
                        ok &= guard.bind();
                    }
                }
                Err(_) => ok = false,
            }
        }

        for child in self.children.iter_mut().flatten() {
            ok &= child.bind();
        }

        ok
    }
}

// ===== TREE WRAPPER =====

/// Octree accelerator: root node plus the flat list of inserted items.
pub struct Octree {
    root: OctreeNode,
    /// Every inserted item, for enumeration by the surrounding scene graph
    items: Vec<SceneItemRef>,
    /// Set by the first fully-successful bind()
    bound: bool,
}

impl Octree {
    /// Create a tree covering the cube at `centre` with the given
    /// half-width, subdividing at most `max_depth` levels below the root.
    ///
    /// With `max_depth` 0 the root never subdivides and every item lands
    /// in its list.
    pub fn new(centre: Vec3, half_width: f32, max_depth: u32) -> Self {
        Self {
            root: OctreeNode::new(centre, half_width, max_depth),
            items: Vec::new(),
            bound: false,
        }
    }

    /// Number of items inserted into the tree.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// All inserted items, in insertion order.
    pub fn items(&self) -> &[SceneItemRef] {
        &self.items
    }
}

impl Accelerator for Octree {
    fn insert(&mut self, item: SceneItemRef) -> bool {
        if item.lock().is_err() {
            return false;
        }

        self.items.push(Arc::clone(&item));
        self.root.insert(item);
        true
    }
}

impl Boundable for Octree {
    fn centre(&self, axis: usize) -> f32 {
        self.root.centre[axis]
    }

    fn width(&self, axis: usize) -> f32 {
        self.root.half_width * 2.0
    }
}

impl Renderable for Octree {
    fn render(&mut self, transform: &Mat4, view_transform: &Mat4) -> bool {
        self.root.render(transform, view_transform)
    }

    fn render_culled(
        &mut self,
        transform: &Mat4,
        view_transform: &Mat4,
        frustum_planes: &[Vec4],
    ) -> bool {
        self.root.render_culled(transform, view_transform, frustum_planes)
    }

    fn bind(&mut self) -> bool {
        let ok = self.root.bind();
        if ok {
            self.bound = true;
        }
        ok
    }

    fn is_bound(&self) -> bool {
        self.bound
    }

    fn is_cullable(
        &self,
        view_transform: &Mat4,
        transform: &Mat4,
        frustum_planes: &[Vec4],
    ) -> bool {
        self.root.is_cullable(view_transform, transform, frustum_planes)
    }

    fn has_children(&self) -> bool {
        !self.items.is_empty()
    }

    fn children(&self) -> Vec<SceneItemRef> {
        self.items.clone()
    }
}

#[cfg(test)]
#[path = "octree_tests.rs"]
mod tests;
