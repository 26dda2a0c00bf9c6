//! Thread name generation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_THREAD_PREFIX: &str = "Prompter";

pub trait ThreadNamer: Send + Sync {
    fn next_name(&self) -> String;
}

/// Names threads `<prefix>_<unix millis>_<sequence>`.
#[derive(Debug)]
pub struct TimestampThreadNamer {
    prefix: String,
    sequence: AtomicU64,
}

impl TimestampThreadNamer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            sequence: AtomicU64::new(0),
        }
    }
}

impl Default for TimestampThreadNamer {
    fn default() -> Self {
        Self::new(DEFAULT_THREAD_PREFIX)
    }
}

impl ThreadNamer for TimestampThreadNamer {
    fn next_name(&self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);

        format!("{}_{millis}_{sequence}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_names_differ_and_keep_prefix() {
        let namer = TimestampThreadNamer::default();
        let first = namer.next_name();
        let second = namer.next_name();

        assert!(first.starts_with("Prompter_"));
        assert!(second.ends_with("_1"));
        assert_ne!(first, second);
    }
}
