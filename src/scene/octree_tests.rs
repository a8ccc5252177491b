use glam::{Mat4, Vec3, Vec4};
use super::*;
use crate::scene::mock_item::MockItem;

fn world_tree(max_depth: u32) -> Octree {
    Octree::new(Vec3::ZERO, 10.0, max_depth)
}

// ============================================================================
// Insertion routing
// ============================================================================

#[test]
fn test_item_at_exact_centre_always_straddles() {
    // delta = 0 on every axis satisfies |delta| < threshold, so the item
    // stays at the node no matter how much depth remains.
    let mut tree = world_tree(5);
    let (item, _) = MockItem::new(Vec3::ZERO, Vec3::ONE);

    assert!(tree.insert(item));

    assert_eq!(tree.root.items.len(), 1);
    assert!(tree.root.children.iter().all(|child| child.is_none()));
}

#[test]
fn test_zero_max_depth_places_item_at_root_without_children() {
    let mut tree = world_tree(0);
    let (item, _) = MockItem::new(Vec3::splat(7.0), Vec3::splat(2.0));

    tree.insert(item);

    assert_eq!(tree.root.items.len(), 1);
    assert!(tree.root.children.iter().all(|child| child.is_none()));
}

#[test]
fn test_item_clear_of_all_half_spaces_descends() {
    let mut tree = world_tree(3);

    // |7| >= half_width/2 + width/2 = 5 + 1 on every axis: no straddle.
    let (item, _) = MockItem::new(Vec3::splat(7.0), Vec3::splat(2.0));
    tree.insert(item);

    assert!(tree.root.items.is_empty());
    let child = tree.root.children[7].as_ref().expect("positive octant child");
    assert_eq!(child.items.len(), 1);
}

#[test]
fn test_octant_index_follows_sign_bits() {
    let mut tree = world_tree(3);

    // x positive (bit 0), y negative, z positive (bit 2) → index 0b101.
    let (item, _) = MockItem::new(Vec3::new(7.0, -7.0, 7.0), Vec3::splat(2.0));
    tree.insert(item);

    let child = tree.root.children[5].as_ref().expect("octant 5 child");
    assert_eq!(child.items.len(), 1);
    assert_eq!(child.centre, Vec3::new(5.0, -5.0, 5.0));
}

#[test]
fn test_child_geometry_halves_per_level() {
    let mut tree = world_tree(3);
    let (item, _) = MockItem::new(Vec3::splat(7.0), Vec3::splat(2.0));
    tree.insert(item);

    let child = tree.root.children[7].as_ref().unwrap();
    assert_eq!(child.half_width, 5.0);
    assert_eq!(child.centre, Vec3::splat(5.0));
    assert_eq!(child.depth, 2);
}

#[test]
fn test_straddle_on_a_single_axis_keeps_item_at_node() {
    let mut tree = world_tree(3);

    // x and z are clear, but |4| < 5 + 1 on y.
    let (item, _) = MockItem::new(Vec3::new(7.0, 4.0, 7.0), Vec3::splat(2.0));
    tree.insert(item);

    assert_eq!(tree.root.items.len(), 1);
    assert!(tree.root.children.iter().all(|child| child.is_none()));
}

#[test]
fn test_small_item_descends_two_levels() {
    let mut tree = world_tree(3);

    // Root: |8| >= 5 + 0.1 → descend into octant 7 (centre 5, hw 5).
    // Child: |3| >= 2.5 + 0.1 → descend again (centre 7.5, hw 2.5).
    // Grandchild: |0.5| < 1.25 + 0.1 → straddle, stop.
    let (item, _) = MockItem::new(Vec3::splat(8.0), Vec3::splat(0.2));
    tree.insert(item);

    let child = tree.root.children[7].as_ref().unwrap();
    assert!(child.items.is_empty());

    let grandchild = child.children[7].as_ref().unwrap();
    assert_eq!(grandchild.items.len(), 1);
    assert_eq!(grandchild.centre, Vec3::splat(7.5));
    assert_eq!(grandchild.half_width, 2.5);
}

#[test]
fn test_children_created_lazily() {
    let mut tree = world_tree(3);
    let (item, _) = MockItem::new(Vec3::splat(7.0), Vec3::splat(2.0));
    tree.insert(item);

    let created: usize = tree
        .root
        .children
        .iter()
        .filter(|child| child.is_some())
        .count();
    assert_eq!(created, 1);
}

#[test]
fn test_insert_rejects_poisoned_item() {
    let mut tree = world_tree(3);
    let poisoned = MockItem::poisoned(Vec3::ZERO, Vec3::ONE);

    assert!(!tree.insert(poisoned));
    assert_eq!(tree.item_count(), 0);
}

#[test]
fn test_wrapper_records_every_inserted_item() {
    let mut tree = world_tree(3);

    for x in [-7.0, 0.0, 7.0] {
        let (item, _) = MockItem::new(Vec3::new(x, 7.0, 7.0), Vec3::splat(2.0));
        tree.insert(item);
    }

    assert_eq!(tree.item_count(), 3);
    assert!(tree.has_children());
    assert_eq!(tree.children().len(), 3);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_visits_every_item_once() {
    let mut tree = world_tree(3);
    let (deep, deep_stats) = MockItem::new(Vec3::splat(7.0), Vec3::splat(2.0));
    let (shallow, shallow_stats) = MockItem::new(Vec3::ZERO, Vec3::ONE);

    tree.insert(deep);
    tree.insert(shallow);

    assert!(tree.render(&Mat4::IDENTITY, &Mat4::IDENTITY));

    assert_eq!(deep_stats.lock().unwrap().render_calls, 1);
    assert_eq!(shallow_stats.lock().unwrap().render_calls, 1);
}

#[test]
fn test_render_culled_skips_tree_fully_outside_one_plane() {
    let mut tree = world_tree(3);
    let (item, stats) = MockItem::new(Vec3::splat(7.0), Vec3::splat(2.0));
    tree.insert(item);

    // "In front of z = 20": the whole cube (z up to 10) is outside.
    let planes = [Vec4::new(0.0, 0.0, 1.0, -20.0)];
    assert!(tree.render_culled(&Mat4::IDENTITY, &Mat4::IDENTITY, &planes));

    assert_eq!(stats.lock().unwrap().culled_render_calls, 0);
}

#[test]
fn test_render_culled_draws_visible_items() {
    let mut tree = world_tree(3);
    let (item, stats) = MockItem::new(Vec3::splat(7.0), Vec3::splat(2.0));
    tree.insert(item);

    let planes = [Vec4::new(0.0, 0.0, 1.0, 5.0)];
    assert!(tree.render_culled(&Mat4::IDENTITY, &Mat4::IDENTITY, &planes));

    assert_eq!(stats.lock().unwrap().culled_render_calls, 1);
}

#[test]
fn test_is_cullable_unit_cube() {
    let tree = Octree::new(Vec3::ZERO, 0.5, 1);

    // "In front of z = 5" excludes the whole cube.
    let outside = [Vec4::new(0.0, 0.0, 1.0, -5.0)];
    assert!(tree.is_cullable(&Mat4::IDENTITY, &Mat4::IDENTITY, &outside));

    // "Behind z = -5" contains it.
    let inside = [Vec4::new(0.0, 0.0, 1.0, 5.0)];
    assert!(!tree.is_cullable(&Mat4::IDENTITY, &Mat4::IDENTITY, &inside));
}

#[test]
fn test_node_corners_enumerate_octant_bits() {
    let tree = world_tree(1);
    let corners = tree.root.corners();

    assert_eq!(corners[0], Vec3::splat(-10.0));
    assert_eq!(corners[1], Vec3::new(10.0, -10.0, -10.0));
    assert_eq!(corners[2], Vec3::new(-10.0, 10.0, -10.0));
    assert_eq!(corners[4], Vec3::new(-10.0, -10.0, 10.0));
    assert_eq!(corners[7], Vec3::splat(10.0));
}

// ============================================================================
// Binding
// ============================================================================

#[test]
fn test_bind_is_idempotent() {
    let mut tree = world_tree(3);
    let (item_a, stats_a) = MockItem::new(Vec3::splat(7.0), Vec3::splat(2.0));
    let (item_b, stats_b) = MockItem::new(Vec3::ZERO, Vec3::ONE);
    tree.insert(item_a);
    tree.insert(item_b);

    assert!(tree.bind());
    assert!(tree.is_bound());

    assert!(tree.bind());
    assert!(tree.is_bound());

    assert_eq!(stats_a.lock().unwrap().bind_calls, 1);
    assert_eq!(stats_b.lock().unwrap().bind_calls, 1);
}

#[test]
fn test_bind_visits_all_subtrees_despite_failure() {
    let mut tree = world_tree(3);

    // Failing item stays at the root, binding before the child subtree.
    let (failing, failing_stats) = MockItem::failing_bind(Vec3::ZERO, Vec3::ONE);
    let (good, good_stats) = MockItem::new(Vec3::splat(7.0), Vec3::splat(2.0));
    tree.insert(failing);
    tree.insert(good);

    assert!(!tree.bind());
    assert!(!tree.is_bound());

    assert_eq!(failing_stats.lock().unwrap().bind_calls, 1);
    assert_eq!(good_stats.lock().unwrap().bind_calls, 1);
}

// ============================================================================
// Capability contract
// ============================================================================

#[test]
fn test_tree_reports_cube_bounds() {
    let tree = Octree::new(Vec3::new(1.0, 2.0, 3.0), 10.0, 3);

    assert_eq!(Boundable::centre(&tree, 0), 1.0);
    assert_eq!(Boundable::centre(&tree, 1), 2.0);
    assert_eq!(Boundable::centre(&tree, 2), 3.0);
    for axis in 0..3 {
        assert_eq!(Boundable::width(&tree, axis), 20.0);
    }
}
