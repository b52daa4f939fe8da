//! Library components of the `wdi-baseline` command.

pub mod logging;
pub mod pipeline;
