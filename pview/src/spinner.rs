//! Textual "Thinking" spinner.
//!
//! ```rust
//! use pview::Spinner;
//!
//! let spinner = Spinner::default();
//! assert_eq!(spinner.frame(0), "Thinking");
//! assert_eq!(spinner.frame(3), "Thinking...");
//! assert_eq!(spinner.frame(4), "Thinking");
//! ```

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use async_stream::stream;
use futures_core::Stream;
use futures_timer::Delay;
use futures_util::StreamExt;
use futures_util::future::{Either, select};

use crate::PresentationAdapter;

pub const SPINNER_LABEL: &str = "Thinking";
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(400);
const SPINNER_FRAMES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spinner {
    label: String,
}

impl Spinner {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn frame(&self, tick: usize) -> String {
        format!("{}{}", self.label, ".".repeat(tick % SPINNER_FRAMES))
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new(SPINNER_LABEL)
    }
}

/// Endless stream of spinner frames, one per `interval`, starting
/// immediately.
pub fn spinner_frames(spinner: Spinner, interval: Duration) -> impl Stream<Item = String> {
    stream! {
        let mut tick = 0_usize;
        loop {
            yield spinner.frame(tick);
            Delay::new(interval).await;
            tick = tick.wrapping_add(1);
        }
    }
}

/// Drives `work` to completion while feeding spinner frames to `adapter`,
/// one per `interval`. Frames stop as soon as `work` finishes.
pub async fn animate_while<F>(
    adapter: &dyn PresentationAdapter,
    spinner: Spinner,
    interval: Duration,
    work: F,
) -> F::Output
where
    F: Future,
{
    let mut work = pin!(work);
    let mut frames = pin!(spinner_frames(spinner, interval));

    loop {
        match select(work.as_mut(), frames.next()).await {
            Either::Left((output, _)) => return output,
            Either::Right((Some(frame), _)) => adapter.show_spinner(&frame),
            Either::Right((None, pending)) => return pending.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use futures_util::StreamExt;

    use super::*;
    use crate::ViewState;

    #[derive(Default)]
    struct FrameLog {
        frames: Mutex<Vec<String>>,
    }

    impl PresentationAdapter for FrameLog {
        fn render(&self, _view: &ViewState) {}

        fn show_spinner(&self, frame: &str) {
            self.frames.lock().expect("frames lock").push(frame.to_string());
        }
    }

    #[tokio::test]
    async fn animation_ticks_until_work_completes() {
        let log = FrameLog::default();

        let output = animate_while(
            &log,
            Spinner::default(),
            Duration::from_millis(5),
            async {
                Delay::new(Duration::from_millis(60)).await;
                "done"
            },
        )
        .await;
        assert_eq!(output, "done");

        let frames = log.frames.lock().expect("frames lock").clone();
        assert!(frames.len() >= 3, "expected several ticks, got {frames:?}");
        assert_eq!(&frames[..3], ["Thinking", "Thinking.", "Thinking.."]);

        let ticks = frames.len();
        Delay::new(Duration::from_millis(30)).await;
        assert_eq!(log.frames.lock().expect("frames lock").len(), ticks);
    }

    #[tokio::test]
    async fn frames_cycle_through_dot_counts() {
        let frames = spinner_frames(Spinner::default(), Duration::from_millis(1))
            .take(5)
            .collect::<Vec<_>>()
            .await;

        assert_eq!(
            frames,
            vec!["Thinking", "Thinking.", "Thinking..", "Thinking...", "Thinking"]
        );
    }
}
