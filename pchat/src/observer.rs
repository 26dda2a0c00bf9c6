//! State-change notification contract.

use crate::SessionSnapshot;

/// Receives a fresh snapshot after every session state change.
///
/// Closures taking `&SessionSnapshot` implement this trait.
///
/// ```rust
/// use pchat::{SessionObserver, SessionSnapshot};
///
/// fn accepts_observer(_observer: &dyn SessionObserver) {}
///
/// accepts_observer(&|snapshot: &SessionSnapshot| {
///     let _ = snapshot.turns.len();
/// });
/// ```
pub trait SessionObserver: Send + Sync {
    fn on_session_changed(&self, snapshot: &SessionSnapshot);
}

impl<F> SessionObserver for F
where
    F: Fn(&SessionSnapshot) + Send + Sync,
{
    fn on_session_changed(&self, snapshot: &SessionSnapshot) {
        self(snapshot)
    }
}
