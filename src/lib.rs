/*!
# Stellar 3D Engine

Spatial acceleration structures for the Stellar 3D rendering engine.

This crate organizes a dynamic set of bounded, renderable objects into
hierarchical spatial indexes so that insertion placement is geometrically
principled and per-frame rendering can skip whole subtrees outside the
camera's view volume.

## Architecture

- **BoundingVolume**: axis-aligned box with lazy corner growth and bisection
- **Frustum**: six-plane view volume with a shared corner-set cull test
- **BspTree**: binary tree cycling the split axis per level (x, y, z, x, ...)
- **Octree**: 8-ary tree splitting space into octants around a centre point
- **Scene / SceneManager**: ownership layer submitting items to an accelerator

GPU upload and drawing are external collaborators, consumed through the
`Boundable` and `Renderable` capability traits. Both tree types implement
those same traits, so a whole tree can nest as a leaf of a larger scene
graph.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod scene;

// Main stellar3d namespace module
pub mod stellar3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
