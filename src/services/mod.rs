//! Services - filesystem and catalog plumbing
//!
//! Free functions over plain data; the `App` wires their results into
//! state and surfaces their errors in the status line.

pub mod catalog;
pub mod page;
pub mod store;
