use core_graphics::event::CGEvent;
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use pointerpos_core::platform::{PlatformError, PlatformErrorKind, PointerDevice};
use pointerpos_core::register_pointer_device;
use pointerpos_core::types::Point;

/// Pointer device backed by `CGEventCreate` / `CGEventGetLocation`.
///
/// Locations are in global display points with the origin at the top-left
/// corner of the main display.
pub struct MacPointerDevice;

impl PointerDevice for MacPointerDevice {
    fn position(&self) -> Result<Point, PlatformError> {
        // Both handles are CoreFoundation objects released on drop, so the
        // source and the event are freed on every return path.
        let source = CGEventSource::new(CGEventSourceStateID::CombinedSessionState).map_err(|()| {
            PlatformError::new(
                PlatformErrorKind::InitializationFailed,
                "CGEventSourceCreate returned NULL (no window server session?)",
            )
        })?;
        let event = CGEvent::new(source).map_err(|()| {
            PlatformError::new(
                PlatformErrorKind::QueryFailed,
                "CGEventCreate returned NULL (pointer access denied or no window server)",
            )
        })?;
        let location = event.location();
        tracing::debug!(x = location.x, y = location.y, "CGEventGetLocation");
        Ok(Point::new(location.x, location.y))
    }
}

static MAC_POINTER: MacPointerDevice = MacPointerDevice;

register_pointer_device!(&MAC_POINTER);

#[cfg(test)]
mod tests {
    use super::*;
    use pointerpos_core::platform::pointer_devices;
    use rstest::rstest;

    #[rstest]
    fn mac_pointer_is_registered() {
        assert!(pointer_devices().count() >= 1);
    }

    #[rstest]
    #[ignore = "requires a logged-in window server session"]
    fn reads_finite_location() {
        let point = MacPointerDevice.position().expect("pointer location");
        assert!(point.is_finite());
    }
}
