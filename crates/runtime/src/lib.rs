mod pointer;
#[cfg(test)]
mod test_support;

pub use pointer::{PlatformQueryError, PointerQuery};

// Backends register themselves with `inventory`; linking is all they need.
#[cfg(target_os = "macos")]
use pointerpos_platform_macos as _;
#[cfg(all(feature = "mock-platform", not(target_os = "macos")))]
use pointerpos_platform_mock as _;
