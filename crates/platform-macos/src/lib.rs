//! macOS platform backend.
//!
//! Reads the global pointer location from a Quartz event snapshot. The crate
//! compiles to nothing on other targets.

#[cfg(target_os = "macos")]
mod pointer;

#[cfg(target_os = "macos")]
pub use pointer::MacPointerDevice;
