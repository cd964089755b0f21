use tracing::{info, warn};

use crate::error::Error;
use crate::event::Event;
use crate::stats::Stats;
use crate::{Frame, Tracking};

/// Consumer of tracker events (beeper, console, HUD flash). Failures are the
/// notifier's own business and never feed back into the count.
pub trait Notifier {
    fn notify(&mut self, event: &Event) -> Result<(), Error>;
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    #[inline]
    fn notify(&mut self, _event: &Event) -> Result<(), Error> {
        Ok(())
    }
}

impl<F> Notifier for F
where
    F: FnMut(&Event) -> Result<(), Error>,
{
    #[inline]
    fn notify(&mut self, event: &Event) -> Result<(), Error> {
        self(event)
    }
}

/// Reports juggles and milestones through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, event: &Event) -> Result<(), Error> {
        match event {
            Event::Juggle {
                count,
                interval,
                milestone,
            } => {
                info!(count, interval, "juggle #{}", count);

                if let Some(m) = milestone {
                    info!(count = m.count, "milestone: {} juggles", m.count);
                }
            }
            Event::Touch { touches } => tracing::debug!(touches, "touch"),
        }

        Ok(())
    }
}

/// Owns a tracker and its notifier for the lifetime of a capture loop.
pub struct Session<T, N> {
    tracker: T,
    notifier: N,
    last_ts: Option<f64>,
}

impl<T: Tracking, N: Notifier> Session<T, N> {
    pub fn new(tracker: T, notifier: N) -> Self {
        Self {
            tracker,
            notifier,
            last_ts: None,
        }
    }

    #[inline]
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    pub fn into_parts(self) -> (T, N) {
        (self.tracker, self.notifier)
    }

    pub fn tick(&mut self, frame: &Frame) -> Option<Event> {
        self.last_ts = Some(frame.timestamp);
        let event = self.tracker.update(frame)?;

        if let Err(err) = self.notifier.notify(&event) {
            warn!(%err, "notifier failed, event kept");
        }

        Some(event)
    }

    /// Drives every frame through the tracker and returns the stats as of the
    /// last frame. Stops at the first input error.
    pub fn run<I>(&mut self, frames: I) -> Result<Stats, Error>
    where
        I: IntoIterator<Item = Result<Frame, Error>>,
    {
        for frame in frames {
            self.tick(&frame?);
        }

        Ok(self.stats(self.last_ts.unwrap_or(0.0)))
    }

    pub fn reset(&mut self, now: f64) {
        self.last_ts = Some(now);
        self.tracker.reset(now);
    }

    #[inline]
    pub fn stats(&self, now: f64) -> Stats {
        self.tracker.snapshot_stats(now)
    }
}
