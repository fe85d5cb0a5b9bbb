use crate::platform::PlatformError;
use crate::types::Point;

/// Trait that platform crates implement to expose the global pointer location.
///
/// Implementations perform a fresh read on every call and must release any
/// handle they acquire before returning, on the error path as well.
pub trait PointerDevice: Send + Sync {
    fn position(&self) -> Result<Point, PlatformError>;
}

pub struct PointerRegistration {
    pub device: &'static dyn PointerDevice,
}

inventory::collect!(PointerRegistration);

pub fn pointer_devices() -> impl Iterator<Item = &'static dyn PointerDevice> {
    inventory::iter::<PointerRegistration>.into_iter().map(|entry| entry.device)
}

#[macro_export]
macro_rules! register_pointer_device {
    ($device:expr) => {
        inventory::submit! {
            $crate::platform::PointerRegistration { device: $device }
        }
    };
}
