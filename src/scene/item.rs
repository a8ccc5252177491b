/// Capability contracts for objects managed by the spatial accelerators.
///
/// The trees never see concrete meshes. Anything with per-axis bounds
/// (`Boundable`) that can draw itself and manage its GPU resources
/// (`Renderable`) can be inserted. Both tree types implement the same
/// two traits themselves, so a whole tree nests as a leaf of a larger
/// scene graph.
///
/// Ownership: the scene is the logical owner of every item; trees hold
/// `Arc` clones purely for traversal and enumeration.

use std::sync::{Arc, Mutex};
use glam::{Mat4, Vec4};

/// Axis indices for `Boundable` queries.
///
/// 0 = x, 1 = y, 2 = z. Any other value is a contract violation.
pub const AXIS_X: usize = 0;
pub const AXIS_Y: usize = 1;
pub const AXIS_Z: usize = 2;

/// Per-axis bounds of an object, queried during insertion routing.
pub trait Boundable {
    /// Centre of the object along `axis` (0 = x, 1 = y, 2 = z).
    fn centre(&self, axis: usize) -> f32;

    /// Full extent of the object along `axis`. Never negative.
    fn width(&self, axis: usize) -> f32;
}

/// Draw and GPU-resource lifecycle capability.
///
/// `bind()` must be invoked from the thread owning the graphics context,
/// before the first render call. Calling render before bind is a
/// precondition violation: the tree traversals do not check for it.
pub trait Renderable {
    /// Draw with the given parent and view transforms.
    ///
    /// Returns false if any draw failed.
    fn render(&mut self, transform: &Mat4, view_transform: &Mat4) -> bool;

    /// Draw with frustum culling against a set of half-space planes.
    ///
    /// Implementations that can prove they lie entirely outside one plane
    /// skip themselves (and everything below them) wholesale.
    fn render_culled(
        &mut self,
        transform: &Mat4,
        view_transform: &Mat4,
        frustum_planes: &[Vec4],
    ) -> bool;

    /// One-way transition of CPU-side data into GPU resources.
    ///
    /// Returns true only if everything bound successfully. Implementations
    /// aggregate over their whole subtree without short-circuiting, so a
    /// failure in one branch never skips the binds of another.
    fn bind(&mut self) -> bool;

    /// Whether `bind()` has completed successfully.
    fn is_bound(&self) -> bool;

    /// Whether the whole object lies outside one of the given planes.
    ///
    /// Corners are transformed by `view_transform * transform` before the
    /// per-plane test. Objects without a spatial extent are never cullable.
    fn is_cullable(
        &self,
        _view_transform: &Mat4,
        _transform: &Mat4,
        _frustum_planes: &[Vec4],
    ) -> bool {
        false
    }

    /// Whether this object exposes child renderables.
    fn has_children(&self) -> bool {
        false
    }

    /// Child renderables, for enumeration by the surrounding scene graph.
    fn children(&self) -> Vec<SceneItemRef> {
        Vec::new()
    }
}

/// Full capability expected of an item inserted into an accelerator.
pub trait SceneItem: Boundable + Renderable + Send {}

impl<T: Boundable + Renderable + Send> SceneItem for T {}

/// Shared handle to a scene item.
///
/// The scene owns the item; accelerators and scene-graph parents hold
/// clones of the handle.
pub type SceneItemRef = Arc<Mutex<dyn SceneItem>>;

/// A spatial structure that accepts items and re-exposes the item
/// capability, so accelerators compose like any other renderable.
pub trait Accelerator: SceneItem {
    /// Route an item into the structure.
    ///
    /// Returns false if the item is rejected (its lock is poisoned:
    /// the owner panicked while mutating it); otherwise the item is
    /// recorded and placement always succeeds.
    fn insert(&mut self, item: SceneItemRef) -> bool;
}
