//! Production-friendly observability hooks for conversation requests and
//! session transitions.
//!
//! ```rust
//! use pobserve::{MetricsObservabilityHooks, SafeConversationHooks, TracingObservabilityHooks};
//!
//! let _conversation_hooks = SafeConversationHooks::new(TracingObservabilityHooks);
//! let _metrics = MetricsObservabilityHooks;
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsObservabilityHooks;
pub use safe_hooks::{SafeConversationHooks, SafeSessionObserver};
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{
        MetricsObservabilityHooks, SafeConversationHooks, SafeSessionObserver,
        TracingObservabilityHooks,
    };
}

#[cfg(test)]
mod tests;
