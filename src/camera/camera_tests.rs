use glam::{Mat4, Vec3};
use super::*;
use crate::camera::Frustum;

fn test_projection() -> Mat4 {
    Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0)
}

fn test_view() -> Mat4 {
    Mat4::look_at_rh(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y)
}

// ============================================================================
// Construction and getters
// ============================================================================

#[test]
fn test_camera_stores_matrices() {
    let view = test_view();
    let projection = test_projection();
    let frustum = Frustum::from_view_projection(&projection);

    let camera = Camera::new(view, projection, frustum);

    assert_eq!(*camera.view_matrix(), view);
    assert_eq!(*camera.projection_matrix(), projection);
}

#[test]
fn test_view_projection_is_projection_times_view() {
    let view = test_view();
    let projection = test_projection();
    let frustum = Frustum::from_view_projection(&projection);

    let camera = Camera::new(view, projection, frustum);

    assert_eq!(camera.view_projection_matrix(), projection * view);
}

#[test]
fn test_frustum_accessor() {
    let projection = test_projection();
    let frustum = Frustum::from_view_projection(&projection);

    let camera = Camera::new(Mat4::IDENTITY, projection, frustum);

    assert_eq!(camera.frustum().planes().len(), 6);
}

// ============================================================================
// Setters — store, compute nothing
// ============================================================================

#[test]
fn test_set_view() {
    let projection = test_projection();
    let frustum = Frustum::from_view_projection(&projection);
    let mut camera = Camera::new(Mat4::IDENTITY, projection, frustum);

    let view = test_view();
    camera.set_view(view);

    assert_eq!(*camera.view_matrix(), view);
}

#[test]
fn test_set_projection_does_not_touch_frustum() {
    let projection = test_projection();
    let frustum = Frustum::from_view_projection(&projection);
    let mut camera = Camera::new(Mat4::IDENTITY, projection, frustum);

    let old_planes = camera.frustum().planes;
    camera.set_projection(Mat4::IDENTITY);

    // The camera computes nothing: frustum stays as the caller set it.
    assert_eq!(camera.frustum().planes[0], old_planes[0]);
}

#[test]
fn test_set_frustum() {
    let projection = test_projection();
    let frustum = Frustum::from_view_projection(&projection);
    let mut camera = Camera::new(Mat4::IDENTITY, projection, frustum);

    let replacement = Frustum::from_view_projection(&Mat4::IDENTITY);
    camera.set_frustum(replacement);

    assert_eq!(camera.frustum().planes[0], replacement.planes[0]);
}
