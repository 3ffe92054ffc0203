//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::fmt;
use std::sync::Arc;

use super::handler::RatingEventHandler;
use super::types::*;

/// Synchronous dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn RatingEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn RatingEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true when at least one handler is registered. Callers use this
    /// to skip building payloads that nobody will see.
    pub fn is_active(&self) -> bool {
        !self.handlers.is_empty()
    }

    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn RatingEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                ::tracing::warn!("rating event handler panicked; continuing");
            }
        }
    }

    pub fn emit_density_curve(&self, event: &DensityCurveEvent) {
        self.emit(|h| h.on_density_curve(event));
    }

    pub fn emit_rating_adjusted(&self, event: &RatingAdjustedEvent) {
        self.emit(|h| h.on_rating_adjusted(event));
    }

    pub fn emit_domain_exceeded(&self, event: &DomainExceededEvent) {
        self.emit(|h| h.on_domain_exceeded(event));
    }

    pub fn emit_degenerate_density(&self, event: &DegenerateDensityEvent) {
        self.emit(|h| h.on_degenerate_density(event));
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
