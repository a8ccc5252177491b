/// Scene — ownership layer over one spatial accelerator.
///
/// Uses a SlotMap for O(1) insert with stable keys. The scene is the
/// logical owner of every item; the accelerator holds handle clones for
/// traversal. Items are submitted one at a time and routed immediately;
/// there is no removal or rebalancing, matching the append-only trees.

use std::sync::Arc;
use slotmap::{new_key_type, SlotMap};
use glam::{Mat4, Vec4};
use crate::error::{Error, Result};
use super::item::{Accelerator, Renderable, SceneItemRef};

new_key_type! {
    /// Stable key for an item within a Scene.
    ///
    /// Keys remain valid for the lifetime of the scene; there is no
    /// removal path.
    pub struct SceneItemKey;
}

/// A renderable scene feeding one spatial accelerator.
///
/// Created exclusively through `SceneManager::create_scene`.
pub struct Scene {
    /// Items stored in a slot map for stable keys and O(1) insert
    items: SlotMap<SceneItemKey, SceneItemRef>,
    /// The spatial structure every item is routed into
    accelerator: Box<dyn Accelerator>,
}

impl Scene {
    /// Create a new empty scene (internal: only via SceneManager)
    pub(crate) fn new(accelerator: Box<dyn Accelerator>) -> Self {
        Self {
            items: SlotMap::with_key(),
            accelerator,
        }
    }

    /// Register an item and route it into the accelerator.
    ///
    /// Returns a stable key on success.
    ///
    /// # Errors
    ///
    /// `Error::InvalidResource` if the accelerator rejects the item.
    pub fn add_item(&mut self, item: SceneItemRef) -> Result<SceneItemKey> {
        if !self.accelerator.insert(Arc::clone(&item)) {
            crate::engine_error!("stellar3d::Scene", "item rejected by accelerator");
            return Err(Error::InvalidResource(
                "item rejected by accelerator".to_string(),
            ));
        }

        Ok(self.items.insert(item))
    }

    /// Get an item handle by key.
    pub fn item(&self, key: SceneItemKey) -> Option<SceneItemRef> {
        self.items.get(key).cloned()
    }

    /// Iterate over all item keys.
    pub fn item_keys(&self) -> impl Iterator<Item = SceneItemKey> + '_ {
        self.items.keys()
    }

    /// Number of items in the scene.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The accelerator holding the scene's items.
    pub fn accelerator(&self) -> &dyn Accelerator {
        self.accelerator.as_ref()
    }

    /// Bind the whole accelerator subtree.
    ///
    /// Must run on the thread owning the graphics context, before the
    /// first render. Returns true only if every item bound.
    pub fn bind(&mut self) -> bool {
        let ok = self.accelerator.bind();
        if !ok {
            crate::engine_warn!("stellar3d::Scene", "bind left unbound items behind");
        }
        ok
    }

    /// Render every item through the accelerator, no culling.
    pub fn render(&mut self, transform: &Mat4, view_transform: &Mat4) -> bool {
        self.accelerator.render(transform, view_transform)
    }

    /// Render with frustum culling against the given plane set.
    pub fn render_culled(
        &mut self,
        transform: &Mat4,
        view_transform: &Mat4,
        frustum_planes: &[Vec4],
    ) -> bool {
        self.accelerator
            .render_culled(transform, view_transform, frustum_planes)
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
