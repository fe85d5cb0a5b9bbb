use pointerpos_core::platform::{PlatformError, PointerDevice};
use pointerpos_core::register_pointer_device;
use pointerpos_core::types::Point;
use std::sync::{Mutex, MutexGuard, PoisonError};

struct PointerState {
    position: Point,
    failure: Option<PlatformError>,
    queries: usize,
}

impl PointerState {
    const fn new() -> Self {
        Self { position: Point::origin(), failure: None, queries: 0 }
    }
}

struct MockPointerDevice {
    state: Mutex<PointerState>,
}

impl MockPointerDevice {
    const fn new() -> Self {
        Self { state: Mutex::new(PointerState::new()) }
    }

    fn state(&self) -> MutexGuard<'_, PointerState> {
        // A panicking test must not poison the device for the rest of the suite.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PointerDevice for MockPointerDevice {
    fn position(&self) -> Result<Point, PlatformError> {
        let mut state = self.state();
        state.queries += 1;
        if let Some(err) = &state.failure {
            tracing::trace!(%err, "mock-pointer: query fails");
            return Err(err.clone());
        }
        tracing::trace!(x = state.position.x(), y = state.position.y(), "mock-pointer: query");
        Ok(state.position)
    }
}

static MOCK_POINTER: MockPointerDevice = MockPointerDevice::new();

register_pointer_device!(&MOCK_POINTER);

pub fn pointer_device() -> &'static dyn PointerDevice {
    &MOCK_POINTER
}

/// Moves the mock cursor and clears any injected failure.
pub fn set_pointer_position(point: Point) {
    let mut state = MOCK_POINTER.state();
    state.position = point;
    state.failure = None;
}

/// Makes every following query fail with `err` until the next reset or move.
pub fn fail_pointer_queries(err: PlatformError) {
    MOCK_POINTER.state().failure = Some(err);
}

/// Resets the cursor to the origin, clears failures and the query counter.
pub fn reset_pointer_state() {
    *MOCK_POINTER.state() = PointerState::new();
}

/// Returns the number of queries since the last call or reset and clears it.
pub fn take_query_count() -> usize {
    std::mem::take(&mut MOCK_POINTER.state().queries)
}
