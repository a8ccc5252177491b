//! Scene management module
//!
//! Provides the capability contracts for renderable objects, the shared
//! bounding volume primitive, the two spatial accelerators (BSP tree and
//! octree), and the scene ownership layer that feeds them.

mod item;
mod bounding_volume;
mod bsp_tree;
mod octree;
mod scene;
mod scene_manager;

#[cfg(test)]
pub mod mock_item;

pub use item::{
    Accelerator, Boundable, Renderable, SceneItem, SceneItemRef,
    AXIS_X, AXIS_Y, AXIS_Z,
};
pub use bounding_volume::BoundingVolume;
pub use bsp_tree::BspTree;
pub use octree::Octree;
pub use scene::{Scene, SceneItemKey};
pub use scene_manager::SceneManager;
