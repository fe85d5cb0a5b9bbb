//! In-memory mock platform for pointerpos tests.
//!
//! The mock pointer reports a settable location and can be told to fail, so
//! the query and output paths can be exercised without a window server.

mod pointer;

pub use pointer::{
    fail_pointer_queries, pointer_device, reset_pointer_state, set_pointer_position,
    take_query_count,
};
