use pointerpos_core::platform::{PlatformError, PointerDevice, pointer_devices};
use pointerpos_core::types::CursorPosition;
use thiserror::Error;

/// The single failure kind of a pointer query.
#[derive(Debug, Error)]
pub enum PlatformQueryError {
    #[error("no PointerDevice registered for this platform")]
    MissingDevice,
    #[error("{count} PointerDevices registered; refusing to guess which one reports the pointer")]
    AmbiguousDevice { count: usize },
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error("platform reported an unusable pointer location ({x}, {y})")]
    InvalidReading { x: f64, y: f64 },
}

#[derive(Clone, Copy)]
enum Binding {
    Missing,
    Device(&'static dyn PointerDevice),
    Ambiguous(usize),
}

/// One-shot reader of the global pointer location.
///
/// Every call to [`PointerQuery::current_position`] asks the bound device
/// exactly once. Nothing is cached between calls and failures are never
/// retried.
#[derive(Clone, Copy)]
pub struct PointerQuery {
    binding: Binding,
}

impl PointerQuery {
    /// Binds the pointer device registered by the linked platform crate.
    ///
    /// Exactly one device must be registered; with none or several, every
    /// query fails instead of reading from an arbitrary backend.
    pub fn new() -> Self {
        Self::from_devices(pointer_devices())
    }

    pub fn with_device(device: &'static dyn PointerDevice) -> Self {
        Self { binding: Binding::Device(device) }
    }

    fn from_devices(devices: impl IntoIterator<Item = &'static dyn PointerDevice>) -> Self {
        let mut devices = devices.into_iter();
        let binding = match (devices.next(), devices.next()) {
            (None, _) => {
                tracing::debug!("no pointer device registered");
                Binding::Missing
            }
            (Some(device), None) => Binding::Device(device),
            (Some(_), Some(_)) => {
                let count = 2 + devices.count();
                tracing::warn!(count, "several pointer devices registered");
                Binding::Ambiguous(count)
            }
        };
        Self { binding }
    }

    pub fn current_position(&self) -> Result<CursorPosition, PlatformQueryError> {
        let device = match self.binding {
            Binding::Device(device) => device,
            Binding::Missing => return Err(PlatformQueryError::MissingDevice),
            Binding::Ambiguous(count) => return Err(PlatformQueryError::AmbiguousDevice { count }),
        };
        let point = device.position()?;
        tracing::debug!(x = point.x(), y = point.y(), "pointer location read");
        CursorPosition::new(point)
            .ok_or(PlatformQueryError::InvalidReading { x: point.x(), y: point.y() })
    }
}

impl Default for PointerQuery {
    fn default() -> Self {
        Self::new()
    }
}
