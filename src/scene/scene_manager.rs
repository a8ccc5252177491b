//! Central scene manager for the engine.
//!
//! Owns every scene by name. Accessed globally through the Engine
//! singleton (`Engine::scene_manager()`), or used standalone.

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use super::item::Accelerator;
use super::scene::Scene;

/// Manages named scenes and their accelerators.
pub struct SceneManager {
    scenes: FxHashMap<String, Scene>,
}

impl SceneManager {
    /// Create a new empty scene manager
    pub fn new() -> Self {
        Self {
            scenes: FxHashMap::default(),
        }
    }

    /// Create a named scene around the given accelerator.
    ///
    /// # Errors
    ///
    /// `Error::InvalidResource` if a scene with this name already exists.
    pub fn create_scene(
        &mut self,
        name: &str,
        accelerator: Box<dyn Accelerator>,
    ) -> Result<()> {
        if self.scenes.contains_key(name) {
            return Err(Error::InvalidResource(format!(
                "Scene '{}' already exists",
                name
            )));
        }

        self.scenes.insert(name.to_string(), Scene::new(accelerator));

        crate::engine_info!("stellar3d::SceneManager", "Scene '{}' created", name);

        Ok(())
    }

    /// Get a scene by name.
    pub fn scene(&self, name: &str) -> Option<&Scene> {
        self.scenes.get(name)
    }

    /// Get a scene by name, mutably.
    pub fn scene_mut(&mut self, name: &str) -> Option<&mut Scene> {
        self.scenes.get_mut(name)
    }

    /// Destroy a scene. Returns false if the name is unknown.
    pub fn destroy_scene(&mut self, name: &str) -> bool {
        let removed = self.scenes.remove(name).is_some();
        if removed {
            crate::engine_info!("stellar3d::SceneManager", "Scene '{}' destroyed", name);
        }
        removed
    }

    /// Number of scenes.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_manager_tests.rs"]
mod tests;
