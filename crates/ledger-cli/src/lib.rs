//! Library side of the `ledger-convert` binary.

pub mod logging;
pub mod pipeline;
