//! Core value types and platform traits shared by the pointerpos crates.
//!
//! Platform backends implement [`platform::PointerDevice`] and register it with
//! [`register_pointer_device!`]; the runtime discovers them through
//! [`platform::pointer_devices`] without naming a concrete backend.

pub mod platform;
pub mod types;
