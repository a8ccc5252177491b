//! Camera module — low-level camera and frustum planes.
//!
//! Provides passive data containers for the rendering pipeline.
//! The engine does NOT store or manage cameras — they are tools
//! provided by the engine, owned and driven by the caller.

mod camera;
mod frustum;

pub use camera::Camera;
pub use frustum::{
    Frustum, culled_by, transform_corners,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
