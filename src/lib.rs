//! Juggle counting from a stream of single-ball detections.
//!
//! The external detector hands one [`Frame`] per camera tick to a
//! [`Tracking`] implementation, which classifies the vertical motion of the
//! ball and emits [`Event`]s for juggles and arc peaks. Session figures are
//! read back as [`Stats`] snapshots.

pub mod circular_queue;
pub mod config;
pub mod detection;
pub mod direction;
pub mod error;
pub mod event;
pub mod frame;
pub mod running_stats;
pub mod session;
pub mod stats;
pub mod tracker;

pub use config::TrackerConfig;
pub use detection::{Detection, Sample};
pub use direction::Direction;
pub use event::{Event, Milestone};
pub use frame::Frame;
pub use session::{LogNotifier, Notifier, NullNotifier, Session};
pub use stats::Stats;
pub use tracker::JuggleTracker;

pub trait Tracking {
    /// Feeds one tick. At most one event comes out of a tick.
    fn update(&mut self, frame: &Frame) -> Option<Event>;
    /// Drops all history and counters and starts a new session at `now`.
    fn reset(&mut self, now: f64);
    fn snapshot_stats(&self, now: f64) -> Stats;
}
