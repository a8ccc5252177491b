/// Mock scene item for unit tests (no GPU required)
///
/// A box-shaped item with call counters behind a shared handle, so tests
/// can assert how often the trees drew or bound it after the item has
/// disappeared behind `dyn SceneItem`.

use std::sync::{Arc, Mutex};
use glam::{Mat4, Vec3, Vec4};
use super::item::{Boundable, Renderable, SceneItemRef};

/// Call counters shared between a MockItem and its test.
#[derive(Debug, Default)]
pub struct MockStats {
    /// Number of bind() calls received
    pub bind_calls: u32,
    /// Number of render() calls received
    pub render_calls: u32,
    /// Number of render_culled() calls received
    pub culled_render_calls: u32,
}

/// Box-shaped test item with configurable bind outcome.
pub struct MockItem {
    centre: Vec3,
    /// Full widths per axis
    extent: Vec3,
    bound: bool,
    bind_result: bool,
    stats: Arc<Mutex<MockStats>>,
}

impl MockItem {
    /// Create an item and return it with a handle to its counters.
    pub fn new(centre: Vec3, extent: Vec3) -> (SceneItemRef, Arc<Mutex<MockStats>>) {
        Self::with_bind_result(centre, extent, true)
    }

    /// Create an item whose bind() always fails.
    pub fn failing_bind(centre: Vec3, extent: Vec3) -> (SceneItemRef, Arc<Mutex<MockStats>>) {
        Self::with_bind_result(centre, extent, false)
    }

    fn with_bind_result(
        centre: Vec3,
        extent: Vec3,
        bind_result: bool,
    ) -> (SceneItemRef, Arc<Mutex<MockStats>>) {
        let stats = Arc::new(Mutex::new(MockStats::default()));
        let item: SceneItemRef = Arc::new(Mutex::new(Self {
            centre,
            extent,
            bound: false,
            bind_result,
            stats: Arc::clone(&stats),
        }));
        (item, stats)
    }

    /// Create an item whose mutex is already poisoned (its "owner"
    /// panicked while holding the lock). Used to exercise insert
    /// rejection.
    pub fn poisoned(centre: Vec3, extent: Vec3) -> SceneItemRef {
        let (item, _) = Self::new(centre, extent);
        let cloned = Arc::clone(&item);
        let _ = std::thread::spawn(move || {
            let _guard = cloned.lock().unwrap();
            panic!("poisoning mock item");
        })
        .join();
        item
    }
}

impl Boundable for MockItem {
    fn centre(&self, axis: usize) -> f32 {
        self.centre[axis]
    }

    fn width(&self, axis: usize) -> f32 {
        self.extent[axis]
    }
}

impl Renderable for MockItem {
    fn render(&mut self, _transform: &Mat4, _view_transform: &Mat4) -> bool {
        self.stats.lock().unwrap().render_calls += 1;
        true
    }

    fn render_culled(
        &mut self,
        _transform: &Mat4,
        _view_transform: &Mat4,
        _frustum_planes: &[Vec4],
    ) -> bool {
        self.stats.lock().unwrap().culled_render_calls += 1;
        true
    }

    fn bind(&mut self) -> bool {
        self.stats.lock().unwrap().bind_calls += 1;
        if self.bind_result {
            self.bound = true;
        }
        self.bind_result
    }

    fn is_bound(&self) -> bool {
        self.bound
    }
}
