//! Diagnostic side-channel for the rating kernel.
//!
//! Observers register a `RatingEventHandler` on an `EventDispatcher` and
//! receive density curves, completed adjustments and advisories. Nothing
//! here feeds back into the computation.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::RatingEventHandler;
pub use types::*;
