mod error;
mod pointer;

pub use error::{PlatformError, PlatformErrorKind};
pub use pointer::{PointerDevice, PointerRegistration, pointer_devices};

pub use crate::register_pointer_device;
