/// BspTree — binary space-partitioning accelerator.
///
/// A binary tree that cycles its split axis by level (x, y, z, x, ...),
/// bisecting its bounding volume at each step. An item descends until it
/// either straddles the current split plane or runs out of subdivision
/// depth, and is stored at that node. Children are created lazily, on the
/// first insert routed to their side.
///
/// The wrapper owns the root node plus the flat list of every inserted
/// item, and implements the same item capability as its leaves so a tree
/// can nest inside a larger scene graph.

use std::sync::Arc;
use glam::{Mat4, Vec4};
use crate::camera::{culled_by, transform_corners};
use super::bounding_volume::BoundingVolume;
use super::item::{Accelerator, Boundable, Renderable, SceneItemRef};

// ===== NODE =====

/// A single node of the BSP tree.
struct BspNode {
    /// Split axis at this level (0 = x, 1 = y, 2 = z)
    axis: usize,
    /// Remaining subdivision depth; routing stops at zero
    depth: u32,
    /// Space covered by this node
    volume: BoundingVolume,
    /// Lazily created half-space children
    left: Option<Box<BspNode>>,
    right: Option<Box<BspNode>>,
    /// Items that straddle this node's split plane or exhausted the depth
    items: Vec<SceneItemRef>,
}

impl BspNode {
    fn new(volume: BoundingVolume, axis: usize, depth: u32) -> Self {
        Self {
            axis,
            depth,
            volume,
            left: None,
            right: None,
            items: Vec::new(),
        }
    }

    /// Route an item down the tree.
    ///
    /// Strictly left of the split centre goes left, strictly right goes
    /// right; anything touching the centre stays here. Children inherit a
    /// bisected volume, one less level of depth, and the next axis.
    fn insert(&mut self, item: SceneItemRef) {
        if self.depth == 0 {
            self.items.push(item);
            return;
        }

        let span = match item.lock() {
            Ok(guard) => {
                let centre = guard.centre(self.axis);
                let half_extent = guard.width(self.axis) * 0.5;
                Some((centre - half_extent, centre + half_extent))
            }
            // A dead item cannot be routed; park it at this level.
            Err(_) => None,
        };
        let (span_low, span_high) = match span {
            Some(span) => span,
            None => {
                self.items.push(item);
                return;
            }
        };

        let split = self.volume.centre(self.axis);

        if span_high < split {
            self.left
                .get_or_insert_with(|| {
                    Box::new(BspNode::new(
                        self.volume.bisect_left(self.axis),
                        (self.axis + 1) % 3,
                        self.depth - 1,
                    ))
                })
                .insert(item);
        } else if span_low > split {
            self.right
                .get_or_insert_with(|| {
                    Box::new(BspNode::new(
                        self.volume.bisect_right(self.axis),
                        (self.axis + 1) % 3,
                        self.depth - 1,
                    ))
                })
                .insert(item);
        } else {
            // Straddles the split plane
            self.items.push(item);
        }
    }

    /// Render the whole subtree: left child, right child, then the items
    /// owned at this level.
    fn render(&self, transform: &Mat4, view_transform: &Mat4) -> bool {
        let mut ok = true;

        if let Some(left) = &self.left {
            ok &= left.render(transform, view_transform);
        }
        if let Some(right) = &self.right {
            ok &= right.render(transform, view_transform);
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

        if let Some(left) = &self.left {
            ok &= left.render_culled(transform, view_transform, frustum_planes);
        }
        if let Some(right) = &self.right {
            ok &= right.render_culled(transform, view_transform, frustum_planes);
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

    /// Whether the node volume lies entirely outside one of the planes.
    ///
    /// The eight volume corners are transformed by `view * transform`
    /// before the per-plane test. An empty volume is never cullable.
    fn is_cullable(
        &self,
        view_transform: &Mat4,
        transform: &Mat4,
        frustum_planes: &[Vec4],
    ) -> bool {
        let Some(corners) = self.volume.corners() else {
            return false;
        };

        let combined = *view_transform * *transform;
        let transformed = transform_corners(&corners, &combined);
        culled_by(frustum_planes, &transformed)
    }

    /// Bind the node volume, the items owned here, then both children.
    ///
    /// Aggregates with a non-short-circuiting AND: every subtree is
    /// visited even after a failure. Already-bound volumes and items are
    /// skipped, never re-bound.
    fn bind(&mut self) -> bool {
        let mut ok = true;

        if !self.volume.is_bound() {
            ok &= self.volume.bind();
        }

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

        if let Some(left) = &mut self.left {
            ok &= left.bind();
        }
        if let Some(right) = &mut self.right {
            ok &= right.bind();
        }

        ok
    }
}

// ===== TREE WRAPPER =====

/// BSP accelerator: root node plus the flat list of inserted items.
///
/// Splitting starts on the x axis and cycles x → y → z → x per level.
pub struct BspTree {
    root: BspNode,
    /// Every inserted item, for enumeration by the surrounding scene graph
    items: Vec<SceneItemRef>,
    /// Set by the first fully-successful bind()
    bound: bool,
}

impl BspTree {
    /// Create a tree covering `volume`, subdividing at most `max_depth`
    /// levels below the root.
    ///
    /// With `max_depth` 0 the root never subdivides and every item lands
    /// in its list.
    pub fn new(volume: BoundingVolume, max_depth: u32) -> Self {
        Self {
            root: BspNode::new(volume, 0, max_depth),
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

impl Accelerator for BspTree {
    fn insert(&mut self, item: SceneItemRef) -> bool {
        if item.lock().is_err() {
            return false;
        }

        self.items.push(Arc::clone(&item));
        self.root.insert(item);
        true
    }
}

impl Boundable for BspTree {
    fn centre(&self, axis: usize) -> f32 {
        self.root.volume.centre(axis)
    }

    fn width(&self, axis: usize) -> f32 {
        self.root.volume.width(axis)
    }
}

impl Renderable for BspTree {
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
#[path = "bsp_tree_tests.rs"]
mod tests;
