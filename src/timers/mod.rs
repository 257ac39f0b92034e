//! Hierarchical wall clock timers for solver instrumentation.

mod timers;
pub use timers::*;
