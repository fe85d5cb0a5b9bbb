use pointerpos_platform_mock::{pointer_device, reset_pointer_state};
use pointerpos_runtime::PointerQuery;
use rstest::fixture;

/// rstest fixture: a `PointerQuery` bound to the freshly reset mock device.
#[fixture]
pub fn query() -> PointerQuery {
    reset_pointer_state();
    PointerQuery::with_device(pointer_device())
}
