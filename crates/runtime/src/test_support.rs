use crate::PointerQuery;
use pointerpos_platform_mock::{pointer_device, reset_pointer_state};
use rstest::fixture;

/// rstest fixture: a `PointerQuery` bound to the freshly reset mock device.
#[fixture]
pub fn mock_query() -> PointerQuery {
    reset_pointer_state();
    PointerQuery::with_device(pointer_device())
}
